//! Color space descriptors.
//!
//! A [`ColorSpace`] ties linear RGB to CIE XYZ and names the curve that
//! encodes it. Spaces are immutable once built and cheap to clone: the
//! descriptor lives behind an [`Arc`] and its matrices are derived once.
//!
//! # Definitions
//!
//! | Constructor | Linear RGB to XYZ |
//! |-------------|-------------------|
//! | [`ColorSpace::from_primaries`] | derived from R, G, B and white chromaticities |
//! | [`ColorSpace::from_matrix`] | given explicitly |
//! | [`ColorSpace::pass_through`] | none: RGB is carried through untouched |
//!
//! # Example
//!
//! ```rust
//! use tricolor_color::ColorSpace;
//! use tricolor_color::primaries::{REC2020, D65_XY};
//! use tricolor_color::transfer::TransferFunction;
//!
//! let video_2020 = ColorSpace::from_primaries(
//!     "rec2020_video",
//!     REC2020.r, REC2020.g, REC2020.b, D65_XY,
//!     TransferFunction::rec709(),
//! )?;
//! assert!(video_2020.is_constructed_from_primaries());
//!
//! // Same colorimetry as the preset, different curve.
//! let linear = ColorSpace::named("lin_rec2020")?;
//! assert_ne!(video_2020, linear);
//! assert_eq!(video_2020.to_xyz_matrix(), linear.to_xyz_matrix());
//! # Ok::<(), tricolor_color::ColorError>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use tracing::warn;
use tricolor_math::{Mat3, Vec2, Vec3};
use tricolor_primaries::{E_XY, Primaries, PrimariesError, rgb_to_xyz_matrix, xyz_to_xy};
use tricolor_transfer::TransferFunction;

use crate::conversion::Conversion;
use crate::error::{ColorError, ColorResult};
use crate::registry::ColorSpaceRegistry;

/// How a color space relates its linear RGB to XYZ.
///
/// Equality compares parameter bits with signed zeros folded together, so
/// it agrees with [`ColorSpace`] equality and hashing.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Definition {
    /// Primaries and white point chromaticities.
    Primaries(Primaries),
    /// Explicit linear RGB to XYZ matrix.
    Matrix(Mat3),
    /// No colorimetry: conversions re-tag RGB without touching it.
    PassThrough,
}

impl Definition {
    fn key(&self) -> (u8, [u64; 9]) {
        let mut bits = [0u64; 9];
        match self {
            Self::Primaries(p) => {
                for (i, v) in [p.r.x, p.r.y, p.g.x, p.g.y, p.b.x, p.b.y, p.w.x, p.w.y]
                    .into_iter()
                    .enumerate()
                {
                    bits[i] = key_bits(v);
                }
                (0, bits)
            }
            Self::Matrix(m) => {
                for (i, v) in m.m.iter().flatten().enumerate() {
                    bits[i] = key_bits(*v);
                }
                (1, bits)
            }
            Self::PassThrough => (2, bits),
        }
    }
}

impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

// -0.0 and 0.0 share a key.
fn key_bits(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

#[derive(Debug)]
struct Descriptor {
    name: String,
    definition: Definition,
    transfer: TransferFunction,
    primaries: Option<Primaries>,
    to_xyz: Mat3,
    from_xyz: Mat3,
    white: Vec2,
}

/// An immutable, shared color space descriptor.
///
/// Equality is structural: two spaces are equal when their definitions and
/// transfer functions match, whatever their names.
#[derive(Debug, Clone)]
pub struct ColorSpace {
    inner: Arc<Descriptor>,
}

impl ColorSpace {
    /// Looks up a preset by its canonical name.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnknownColorSpace`] if no preset has this name.
    pub fn named(name: &str) -> ColorResult<Self> {
        ColorSpaceRegistry::global()
            .get(name)
            .cloned()
            .ok_or_else(|| ColorError::UnknownColorSpace(name.to_string()))
    }

    /// Builds a space from primaries, white point and a transfer function.
    ///
    /// # Errors
    ///
    /// [`ColorError::Primaries`] if a chromaticity has y = 0 or the
    /// primaries are collinear, [`ColorError::Transfer`] if the curve
    /// parameters are invalid.
    pub fn from_primaries(
        name: impl Into<String>,
        r: Vec2,
        g: Vec2,
        b: Vec2,
        white: Vec2,
        transfer: TransferFunction,
    ) -> ColorResult<Self> {
        let name = name.into();
        check_transfer(&name, &transfer)?;
        let primaries = Primaries::new(r, g, b, white);
        let to_xyz = rgb_to_xyz_matrix(&primaries).inspect_err(|e| {
            warn!(name = %name, error = %e, "rejecting color space primaries");
        })?;
        let from_xyz = invert(&name, &to_xyz)?;

        Ok(Self::from_descriptor(Descriptor {
            name,
            definition: Definition::Primaries(primaries),
            transfer,
            primaries: Some(primaries),
            to_xyz,
            from_xyz,
            white,
        }))
    }

    /// Builds a space from primaries, white point, gamma and linear bias.
    ///
    /// The curve is [`TransferFunction::from_gamma_bias`]: gamma 1 is
    /// linear, bias 0 a pure power law, anything else piecewise.
    ///
    /// ```rust
    /// use tricolor_color::ColorSpace;
    /// use tricolor_color::primaries::SRGB;
    ///
    /// let srgb = ColorSpace::from_gamma("my_srgb", SRGB.r, SRGB.g, SRGB.b, SRGB.w, 2.4, 0.055)?;
    /// assert_eq!(srgb, ColorSpace::named("sRGB")?);
    /// # Ok::<(), tricolor_color::ColorError>(())
    /// ```
    pub fn from_gamma(
        name: impl Into<String>,
        r: Vec2,
        g: Vec2,
        b: Vec2,
        white: Vec2,
        gamma: f64,
        linear_bias: f64,
    ) -> ColorResult<Self> {
        let name = name.into();
        let transfer = TransferFunction::from_gamma_bias(gamma, linear_bias).inspect_err(|e| {
            warn!(name = %name, error = %e, "rejecting color space transfer function");
        })?;
        Self::from_primaries(name, r, g, b, white, transfer)
    }

    /// Builds a space from an explicit linear RGB to XYZ matrix.
    ///
    /// The white point is the chromaticity of `rgb_to_xyz * (1, 1, 1)` and
    /// [`primaries`](Self::primaries) are recovered from the columns.
    ///
    /// # Errors
    ///
    /// [`ColorError::SingularMatrix`] if the matrix has no inverse,
    /// [`ColorError::Transfer`] if the curve parameters are invalid.
    pub fn from_matrix(
        name: impl Into<String>,
        rgb_to_xyz: Mat3,
        transfer: TransferFunction,
    ) -> ColorResult<Self> {
        let name = name.into();
        check_transfer(&name, &transfer)?;
        let from_xyz = invert(&name, &rgb_to_xyz)?;
        let white_xyz = rgb_to_xyz * Vec3::ONE;
        let white = xyz_to_xy(white_xyz).ok_or_else(|| {
            warn!(name = %name, "matrix maps RGB white to zero XYZ sum");
            ColorError::Primaries(PrimariesError::InvalidChromaticity {
                which: "white",
                x: white_xyz.x,
                y: white_xyz.y,
            })
        })?;

        Ok(Self::from_descriptor(Descriptor {
            name,
            definition: Definition::Matrix(rgb_to_xyz),
            transfer,
            primaries: Primaries::from_rgb_to_xyz(&rgb_to_xyz),
            to_xyz: rgb_to_xyz,
            from_xyz,
            white,
        }))
    }

    /// A space with no colorimetry.
    ///
    /// Converting into or out of it leaves RGB untouched. Its matrices are
    /// the identity and its white point is E.
    pub fn pass_through(name: impl Into<String>) -> Self {
        Self::from_descriptor(Descriptor {
            name: name.into(),
            definition: Definition::PassThrough,
            transfer: TransferFunction::Linear,
            primaries: None,
            to_xyz: Mat3::IDENTITY,
            from_xyz: Mat3::IDENTITY,
            white: E_XY,
        })
    }

    /// The same colorimetry under a new name and transfer function.
    ///
    /// A pass-through space stays linear whatever `transfer` is.
    ///
    /// # Errors
    ///
    /// [`ColorError::Transfer`] if the curve parameters are invalid.
    pub fn with_transfer(
        &self,
        name: impl Into<String>,
        transfer: TransferFunction,
    ) -> ColorResult<Self> {
        let name = name.into();
        check_transfer(&name, &transfer)?;
        let d = &self.inner;
        Ok(Self::from_descriptor(Descriptor {
            name,
            definition: d.definition,
            transfer: if d.definition == Definition::PassThrough {
                TransferFunction::Linear
            } else {
                transfer
            },
            primaries: d.primaries,
            to_xyz: d.to_xyz,
            from_xyz: d.from_xyz,
            white: d.white,
        }))
    }

    fn from_descriptor(descriptor: Descriptor) -> Self {
        Self {
            inner: Arc::new(descriptor),
        }
    }

    /// Name the space was built with.
    #[inline]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// How the space was defined.
    #[inline]
    pub fn definition(&self) -> &Definition {
        &self.inner.definition
    }

    /// Curve between encoded and linear RGB.
    #[inline]
    pub fn transfer(&self) -> &TransferFunction {
        &self.inner.transfer
    }

    /// Linear RGB to XYZ.
    #[inline]
    pub fn to_xyz_matrix(&self) -> Mat3 {
        self.inner.to_xyz
    }

    /// XYZ to linear RGB.
    #[inline]
    pub fn from_xyz_matrix(&self) -> Mat3 {
        self.inner.from_xyz
    }

    /// White point chromaticity.
    #[inline]
    pub fn white_point(&self) -> Vec2 {
        self.inner.white
    }

    /// Primaries and white point; recovered from the matrix for
    /// matrix-defined spaces, `None` for pass-through.
    #[inline]
    pub fn primaries(&self) -> Option<Primaries> {
        self.inner.primaries
    }

    /// True if the space was built from chromaticities.
    #[inline]
    pub fn is_constructed_from_primaries(&self) -> bool {
        matches!(self.inner.definition, Definition::Primaries(_))
    }

    /// True for pass-through spaces.
    #[inline]
    pub fn is_pass_through(&self) -> bool {
        matches!(self.inner.definition, Definition::PassThrough)
    }

    /// Decoding exponent of the transfer function.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.inner.transfer.gamma()
    }

    /// Linear bias (offset) of the transfer function.
    #[inline]
    pub fn linear_bias(&self) -> f64 {
        self.inner.transfer.linear_bias()
    }

    /// `(breakpoint, slope)` of the transfer function's linear segment.
    #[inline]
    pub fn transfer_params(&self) -> (f64, f64) {
        self.inner.transfer.params()
    }

    /// Encoded RGB to XYZ, relative to this space's white.
    #[inline]
    pub fn rgb_to_xyz(&self, rgb: Vec3) -> Vec3 {
        self.inner.to_xyz * self.decode(rgb)
    }

    /// XYZ relative to this space's white to encoded RGB.
    #[inline]
    pub fn xyz_to_rgb(&self, xyz: Vec3) -> Vec3 {
        self.encode(self.inner.from_xyz * xyz)
    }

    /// Encoded to linear RGB.
    #[inline]
    pub fn decode(&self, rgb: Vec3) -> Vec3 {
        Vec3::from_array(self.inner.transfer.decode_rgb(rgb.to_array()))
    }

    /// Linear to encoded RGB.
    #[inline]
    pub fn encode(&self, rgb: Vec3) -> Vec3 {
        Vec3::from_array(self.inner.transfer.encode_rgb(rgb.to_array()))
    }

    /// Converts a packed RGB buffer from this space to `to`, in place.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidBuffer`] unless the length is a non-zero
    /// multiple of 3.
    ///
    /// ```rust
    /// use tricolor_color::ColorSpace;
    ///
    /// let srgb = ColorSpace::named("sRGB")?;
    /// let linear = ColorSpace::named("lin_srgb")?;
    /// let mut pixels = vec![0.0, 0.5, 1.0, 1.0, 1.0, 1.0];
    /// srgb.convert_rgb(&linear, &mut pixels)?;
    /// assert!((pixels[1] - 0.214).abs() < 1e-3);
    /// # Ok::<(), tricolor_color::ColorError>(())
    /// ```
    pub fn convert_rgb(&self, to: &ColorSpace, rgb: &mut [f64]) -> ColorResult<()> {
        Conversion::new(self, to).apply_slice(rgb, 3)
    }

    /// Converts a packed RGBA buffer from this space to `to`, in place.
    /// Alpha is left untouched.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidBuffer`] unless the length is a non-zero
    /// multiple of 4.
    pub fn convert_rgba(&self, to: &ColorSpace, rgba: &mut [f64]) -> ColorResult<()> {
        Conversion::new(self, to).apply_slice(rgba, 4)
    }

    fn key(&self) -> ((u8, [u64; 9]), &TransferFunction) {
        (self.inner.definition.key(), &self.inner.transfer)
    }
}

fn check_transfer(name: &str, transfer: &TransferFunction) -> ColorResult<()> {
    transfer.validate().inspect_err(|e| {
        warn!(name = %name, error = %e, "rejecting color space transfer function");
    })?;
    Ok(())
}

fn invert(name: &str, m: &Mat3) -> ColorResult<Mat3> {
    m.inverse().ok_or_else(|| {
        let determinant = m.determinant();
        warn!(name = %name, determinant, "rejecting singular RGB to XYZ matrix");
        ColorError::SingularMatrix { determinant }
    })
}

impl Default for ColorSpace {
    /// Linear Rec.709, the working space of a default [`Color`](crate::Color).
    fn default() -> Self {
        ColorSpaceRegistry::global().working_space().clone()
    }
}

impl PartialEq for ColorSpace {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.key() == other.key()
    }
}

impl Eq for ColorSpace {}

impl Hash for ColorSpace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        Self::named(s)
    }
}
