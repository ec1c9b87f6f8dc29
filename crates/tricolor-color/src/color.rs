//! Colors tagged with the space they are expressed in.
//!
//! A [`Color`] stores encoded RGB exactly as given; its [`ColorSpace`]
//! says how to read it. Converting produces a new color and leaves the
//! original alone.
//!
//! # Example
//!
//! ```rust
//! use tricolor_color::{Color, ColorSpace};
//! use tricolor_color::math::{IsClose, Vec3};
//!
//! let lin = ColorSpace::named("lin_rec709")?;
//! let srgb = ColorSpace::named("sRGB")?;
//!
//! let mauve = Color::new(Vec3::new(0.5, 0.25, 0.125), lin.clone());
//! let encoded = mauve.convert(&srgb);
//! assert!(encoded.convert(&lin).is_close(&mauve, 1e-7));
//!
//! // Changing only the curve leaves chromaticity alone.
//! assert!(encoded.chromaticity().is_close(&mauve.chromaticity(), 1e-12));
//! # Ok::<(), tricolor_color::ColorError>(())
//! ```

use std::fmt;

use tricolor_math::{AdaptationMethod, IsClose, Vec2, Vec3};
use tricolor_primaries::{CHROMATICITY_EPSILON, xyz_to_xy};

use crate::conversion::Conversion;
use crate::space::ColorSpace;
use crate::spectral::{blackbody_xyz, wavelength_xyz};

/// RGB values in a specific color space.
#[derive(Debug, Clone)]
pub struct Color {
    rgb: Vec3,
    space: ColorSpace,
}

impl Color {
    /// A color from encoded RGB in `space`.
    #[inline]
    pub fn new(rgb: Vec3, space: ColorSpace) -> Self {
        Self { rgb, space }
    }

    /// Black in `space`.
    #[inline]
    pub fn black(space: ColorSpace) -> Self {
        Self::new(Vec3::ZERO, space)
    }

    /// This color expressed in `target`, adapting whites with Bradford.
    ///
    /// Converting to an equal space returns the RGB bit for bit.
    pub fn convert(&self, target: &ColorSpace) -> Self {
        self.convert_with(target, AdaptationMethod::default())
    }

    /// A copy of `color` expressed in `space`. Same as
    /// [`color.convert(&space)`](Self::convert).
    pub fn converted(color: &Color, space: ColorSpace) -> Self {
        color.convert(&space)
    }

    /// This color expressed in `target`, adapting whites with `method`.
    pub fn convert_with(&self, target: &ColorSpace, method: AdaptationMethod) -> Self {
        let conversion = Conversion::with_method(&self.space, target, method);
        Self::new(conversion.apply(self.rgb), target.clone())
    }

    /// Encoded RGB.
    #[inline]
    pub fn rgb(&self) -> Vec3 {
        self.rgb
    }

    /// Replaces the RGB, keeping the space.
    #[inline]
    pub fn set_rgb(&mut self, rgb: Vec3) {
        self.rgb = rgb;
    }

    /// Space the RGB is expressed in.
    #[inline]
    pub fn space(&self) -> &ColorSpace {
        &self.space
    }

    /// RGB with the transfer function removed.
    #[inline]
    pub fn linear_rgb(&self) -> Vec3 {
        self.space.decode(self.rgb)
    }

    /// CIE XYZ relative to the space's white point.
    #[inline]
    pub fn xyz(&self) -> Vec3 {
        self.space.rgb_to_xyz(self.rgb)
    }

    /// CIE Y.
    #[inline]
    pub fn luminance(&self) -> f64 {
        self.xyz().y
    }

    /// CIE xy chromaticity.
    ///
    /// Black has no chromaticity of its own; the space's white point is
    /// returned instead.
    pub fn chromaticity(&self) -> Vec2 {
        xyz_to_xy(self.xyz()).unwrap_or_else(|| self.space.white_point())
    }

    /// Sets the color from XYZ relative to the space's white point.
    pub fn set_from_xyz(&mut self, xyz: Vec3) -> &mut Self {
        self.rgb = self.space.xyz_to_rgb(xyz);
        self
    }

    /// Sets the color to the given chromaticity with a linear peak of 1.
    ///
    /// The linear RGB is scaled so its largest-magnitude component is
    /// exactly 1: a primary's chromaticity gives that primary's unit
    /// vector. A chromaticity with y = 0 gives black.
    ///
    /// ```rust
    /// use tricolor_color::{Color, ColorSpace};
    /// use tricolor_color::math::{IsClose, Vec2, Vec3};
    ///
    /// let mut c = Color::black(ColorSpace::named("lin_rec2020")?);
    /// c.set_from_xy(Vec2::new(0.170, 0.797));
    /// assert!(c.rgb().is_close(&Vec3::Y, 1e-9));
    /// # Ok::<(), tricolor_color::ColorError>(())
    /// ```
    pub fn set_from_xy(&mut self, xy: Vec2) -> &mut Self {
        let linear = self.space.from_xyz_matrix() * xy.xy_to_xyz();
        let peak = (0..3)
            .map(|i| linear[i])
            .fold(0.0_f64, |p, v| if v.abs() > p.abs() { v } else { p });
        let linear = if peak.abs() < CHROMATICITY_EPSILON {
            Vec3::ZERO
        } else {
            linear / peak
        };
        self.rgb = self.space.encode(linear);
        self
    }

    /// Sets the color to a blackbody radiator of CIE Y `luminance`.
    ///
    /// `kelvin` is clamped to the 1667..=25000 K range of the locus fit.
    pub fn set_from_blackbody_kelvin(&mut self, kelvin: f64, luminance: f64) -> &mut Self {
        self.set_from_xyz(blackbody_xyz(kelvin, luminance))
    }

    /// Sets the color to a monochromatic stimulus of unit power.
    ///
    /// Most wavelengths lie outside any RGB gamut, so expect negative
    /// components.
    pub fn set_from_wavelength_nm(&mut self, nm: f64) -> &mut Self {
        self.set_from_xyz(wavelength_xyz(nm))
    }

    /// Scales linear RGB so CIE Y equals `luminance`, in place.
    ///
    /// A color with no luminance is left unchanged.
    pub fn normalize_luminance(&mut self, luminance: f64) -> &mut Self {
        let current = self.luminance();
        if current.abs() >= CHROMATICITY_EPSILON {
            let linear = self.linear_rgb() * (luminance / current);
            self.rgb = self.space.encode(linear);
        }
        self
    }

    /// A copy of this color with CIE Y equal to `luminance`.
    pub fn normalized_luminance(&self, luminance: f64) -> Self {
        let mut c = self.clone();
        c.normalize_luminance(luminance);
        c
    }
}

impl Default for Color {
    /// Black in `lin_rec709`.
    fn default() -> Self {
        Self::black(ColorSpace::default())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb && self.space == other.space
    }
}

impl IsClose for Color {
    /// Colors in different spaces are never close.
    fn is_close(&self, other: &Color, tolerance: f64) -> bool {
        self.space == other.space && self.rgb.is_close(&other.rgb, tolerance)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.rgb.x,
            self.rgb.y,
            self.rgb.z,
            self.space.name()
        )
    }
}
