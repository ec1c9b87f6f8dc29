//! # tricolor-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation.
//!
//! This crate provides the mathematical foundation for color space conversions
//! by defining the chromaticity coordinates of RGB primaries and generating
//! the matrices to convert between RGB and CIE XYZ.
//!
//! # What are Color Primaries?
//!
//! Color primaries define the gamut (range of colors) a color space can represent.
//! Each primary is specified as CIE xy chromaticity coordinates.
//!
//! # Included Primaries
//!
//! | Primaries | Gamut Size | Primary Use |
//! |-----------|------------|-------------|
//! | sRGB / Rec.709 | Small | Web, HDTV |
//! | Adobe RGB | Small-medium | Print, photography |
//! | Display P3 | Medium | Apple displays |
//! | Rec.2020 | Large | UHDTV, HDR |
//! | ACES AP1 | Large | Working space (ACEScg) |
//! | ACES AP0 | Very Large | Archival, interchange |
//! | CIE XYZ | Everything | Identity on XYZ |
//!
//! # Usage
//!
//! ```rust
//! use tricolor_primaries::{SRGB, rgb_to_xyz_matrix};
//! use tricolor_math::Vec3;
//!
//! let matrix = rgb_to_xyz_matrix(&SRGB)?;
//!
//! // White (1,1,1) maps to the white point, Y = 1
//! let white = matrix * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! # Ok::<(), tricolor_primaries::PrimariesError>(())
//! ```
//!
//! # Dependencies
//!
//! - `tricolor-math` - Vectors and matrix operations
//! - `thiserror` - error type
//! - `serde` (optional) - serialization of [`Primaries`]
//!
//! # Used By
//!
//! - `tricolor-color` - color space descriptors and the preset registry

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub use error::{PrimariesError, Result};

use tricolor_math::{Mat3, Vec2, Vec3};

/// Below this magnitude an XYZ sum has no meaningful chromaticity.
pub const CHROMATICITY_EPSILON: f64 = 1e-12;

/// RGB color space primaries definition.
///
/// Defines a gamut by its three primary colors (R, G, B) and white point,
/// all specified as CIE xy chromaticity coordinates.
///
/// # Example
///
/// ```rust
/// use tricolor_primaries::{Primaries, D65_XY};
/// use tricolor_math::Vec2;
///
/// let my_space = Primaries::new(
///     Vec2::new(0.64, 0.33),
///     Vec2::new(0.30, 0.60),
///     Vec2::new(0.15, 0.06),
///     D65_XY,
/// );
/// assert!(my_space.contains(D65_XY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Primaries {
    /// Red primary chromaticity
    pub r: Vec2,
    /// Green primary chromaticity
    pub g: Vec2,
    /// Blue primary chromaticity
    pub b: Vec2,
    /// White point chromaticity
    pub w: Vec2,
}

impl Primaries {
    /// Creates primaries from four chromaticities.
    #[inline]
    pub const fn new(r: Vec2, g: Vec2, b: Vec2, w: Vec2) -> Self {
        Self { r, g, b, w }
    }

    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        self.w.xy_to_xyz()
    }

    /// Recovers the primaries of an RGB-to-XYZ matrix.
    ///
    /// Each column projects to its primary's chromaticity and the row sums
    /// (the image of RGB white) to the white point. Returns `None` if any of
    /// those has a vanishing XYZ sum.
    ///
    /// ```rust
    /// use tricolor_primaries::{Primaries, rgb_to_xyz_matrix, SRGB};
    ///
    /// let m = rgb_to_xyz_matrix(&SRGB).unwrap();
    /// let p = Primaries::from_rgb_to_xyz(&m).unwrap();
    /// assert!((p.g.y - 0.60).abs() < 1e-12);
    /// ```
    pub fn from_rgb_to_xyz(m: &Mat3) -> Option<Self> {
        Some(Self::new(
            xyz_to_xy(m.col(0))?,
            xyz_to_xy(m.col(1))?,
            xyz_to_xy(m.col(2))?,
            xyz_to_xy(*m * Vec3::ONE)?,
        ))
    }

    /// Checks that every chromaticity can be lifted to XYZ.
    pub fn validate(&self) -> Result<()> {
        for (which, c) in [("red", self.r), ("green", self.g), ("blue", self.b), ("white", self.w)] {
            if !c.is_finite() || c.y == 0.0 {
                return Err(PrimariesError::InvalidChromaticity {
                    which,
                    x: c.x,
                    y: c.y,
                });
            }
        }
        Ok(())
    }

    /// Barycentric weights of `xy` relative to the R, G, B triangle.
    ///
    /// Weights sum to 1; all three lie in [0, 1] exactly when `xy` is inside
    /// the gamut. Returns `None` for a degenerate triangle.
    pub fn barycentric(&self, xy: Vec2) -> Option<Vec3> {
        let v0 = self.g - self.r;
        let v1 = self.b - self.r;
        let v2 = xy - self.r;

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);

        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < CHROMATICITY_EPSILON {
            return None;
        }
        let wg = (d11 * d20 - d01 * d21) / denom;
        let wb = (d00 * d21 - d01 * d20) / denom;
        Some(Vec3::new(1.0 - wg - wb, wg, wb))
    }

    /// True if `xy` lies inside (or on the edge of) the gamut triangle.
    pub fn contains(&self, xy: Vec2) -> bool {
        self.barycentric(xy)
            .is_some_and(|w| (0..3).all(|i| (0.0..=1.0).contains(&w[i])))
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: Vec2 = Vec2::new(0.31270, 0.32900);

/// D50 white point chromaticity (~5000K).
pub const D50_XY: Vec2 = Vec2::new(0.34567, 0.35850);

/// ACES white point chromaticity (~6000K, close to D60).
pub const ACES_WHITE_XY: Vec2 = Vec2::new(0.32168, 0.33767);

/// Equal-energy illuminant E.
pub const E_XY: Vec2 = Vec2::new(1.0 / 3.0, 1.0 / 3.0);

// ============================================================================
// Standard Primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
///
/// The most common color space for web and consumer displays.
pub const SRGB: Primaries = Primaries::new(
    Vec2::new(0.6400, 0.3300),
    Vec2::new(0.3000, 0.6000),
    Vec2::new(0.1500, 0.0600),
    D65_XY,
);

/// Rec.709 primaries (identical to sRGB).
pub const REC709: Primaries = SRGB;

/// Rec.2020 primaries (D65 white point).
///
/// Ultra HD TV color space with a much wider gamut than Rec.709.
pub const REC2020: Primaries = Primaries::new(
    Vec2::new(0.7080, 0.2920),
    Vec2::new(0.1700, 0.7970),
    Vec2::new(0.1310, 0.0460),
    D65_XY,
);

/// Display P3 primaries (D65 white point).
///
/// Apple's wide gamut display standard, based on DCI-P3 primaries
/// but with a D65 white point.
pub const DISPLAY_P3: Primaries = Primaries::new(
    Vec2::new(0.6800, 0.3200),
    Vec2::new(0.2650, 0.6900),
    Vec2::new(0.1500, 0.0600),
    D65_XY,
);

/// ACES AP0 primaries (ACES white point).
///
/// Primaries of ACES 2065-1. Encompasses the entire human visual gamut
/// and more; the blue primary has a negative y.
pub const ACES_AP0: Primaries = Primaries::new(
    Vec2::new(0.7347, 0.2653),
    Vec2::new(0.0000, 1.0000),
    Vec2::new(0.0001, -0.0770),
    ACES_WHITE_XY,
);

/// ACES AP1 primaries (ACES white point).
///
/// Working color space for ACEScg.
pub const ACES_AP1: Primaries = Primaries::new(
    Vec2::new(0.7130, 0.2930),
    Vec2::new(0.1650, 0.8300),
    Vec2::new(0.1280, 0.0440),
    ACES_WHITE_XY,
);

/// Adobe RGB (1998) primaries (D65 white point).
pub const ADOBE_RGB: Primaries = Primaries::new(
    Vec2::new(0.6400, 0.3300),
    Vec2::new(0.2100, 0.7100),
    Vec2::new(0.1500, 0.0600),
    D65_XY,
);

/// CIE XYZ as an RGB space: unit primaries, white E.
///
/// The blue primary sits at (0, 0), so these cannot go through
/// [`rgb_to_xyz_matrix`]; the matrix is the identity.
pub const CIE_XYZ: Primaries = Primaries::new(
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, 0.0),
    E_XY,
);

// ============================================================================
// Matrix Generation
// ============================================================================

/// Projects XYZ to xy chromaticity.
///
/// Returns `None` when `|X + Y + Z|` is below [`CHROMATICITY_EPSILON`].
#[inline]
pub fn xyz_to_xy(xyz: Vec3) -> Option<Vec2> {
    let sum = xyz.sum();
    if sum.abs() < CHROMATICITY_EPSILON {
        None
    } else {
        Some(Vec2::new(xyz.x / sum, xyz.y / sum))
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
///
/// # Errors
///
/// [`PrimariesError::InvalidChromaticity`] if a coordinate has y = 0 or is
/// not finite, [`PrimariesError::DegeneratePrimaries`] if the primaries are
/// collinear.
///
/// # Example
///
/// ```rust
/// use tricolor_primaries::{SRGB, rgb_to_xyz_matrix};
///
/// let m = rgb_to_xyz_matrix(&SRGB).unwrap();
/// assert!((m.m[1][0] - 0.2126).abs() < 1e-4);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Result<Mat3> {
    primaries.validate()?;

    let r_xyz = primaries.r.xy_to_xyz();
    let g_xyz = primaries.g.xy_to_xyz();
    let b_xyz = primaries.b.xy_to_xyz();
    let w_xyz = primaries.white_xyz();

    // Build matrix from primaries as columns
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // Solve for scaling factors: M * S = W
    let m_inv = m.inverse().ok_or_else(|| PrimariesError::DegeneratePrimaries {
        determinant: m.determinant(),
    })?;
    let s = m_inv * w_xyz;

    // Scale each column by the corresponding factor
    Ok(Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tricolor_math::IsClose;

    #[test]
    fn test_published_matrices() {
        // Published sRGB values use the XYZ white (0.95047, 1, 1.08883).
        let srgb = Mat3::from_rows([
            [0.4124564, 0.3575761, 0.1804375],
            [0.2126729, 0.7151522, 0.0721750],
            [0.0193339, 0.1191920, 0.9503041],
        ]);
        assert!(rgb_to_xyz_matrix(&SRGB).unwrap().is_close(&srgb, 1e-3));

        // ACES AP1 per S-2014-004.
        let ap1 = Mat3::from_rows([
            [0.6624541811, 0.1340042065, 0.1561876870],
            [0.2722287168, 0.6740817658, 0.0536895174],
            [-0.0055746495, 0.0040607335, 1.0103391003],
        ]);
        assert!(rgb_to_xyz_matrix(&ACES_AP1).unwrap().is_close(&ap1, 1e-8));
    }

    #[test]
    fn test_white_point() {
        for p in [SRGB, REC2020, DISPLAY_P3, ACES_AP0, ACES_AP1, ADOBE_RGB] {
            let m = rgb_to_xyz_matrix(&p).unwrap();
            let white = m * Vec3::ONE;
            assert!(white.is_close(&p.white_xyz(), 1e-12), "{:?} white = {:?}", p, white);
        }
    }

    #[test]
    fn test_degenerate_primaries() {
        // All three on the line x = y
        let p = Primaries::new(
            Vec2::new(0.2, 0.2),
            Vec2::new(0.3, 0.3),
            Vec2::new(0.4, 0.4),
            D65_XY,
        );
        assert!(matches!(
            rgb_to_xyz_matrix(&p),
            Err(PrimariesError::DegeneratePrimaries { .. })
        ));
        assert!(p.barycentric(D65_XY).is_none());
    }

    #[test]
    fn test_zero_y_rejected() {
        let p = Primaries::new(SRGB.r, SRGB.g, Vec2::new(0.15, 0.0), D65_XY);
        assert_eq!(
            rgb_to_xyz_matrix(&p),
            Err(PrimariesError::InvalidChromaticity {
                which: "blue",
                x: 0.15,
                y: 0.0
            })
        );
        assert!(rgb_to_xyz_matrix(&CIE_XYZ).is_err());

        let nan_white = Primaries::new(SRGB.r, SRGB.g, SRGB.b, Vec2::new(f64::NAN, 0.3));
        assert!(nan_white.validate().is_err());
    }

    #[test]
    fn test_d65_inside_gamuts() {
        for p in [REC709, REC2020, ACES_AP0] {
            let w = p.barycentric(D65_XY).unwrap();
            assert_abs_diff_eq!(w.sum(), 1.0, epsilon = 1e-12);
            for i in 0..3 {
                assert!((0.0..=1.0).contains(&w[i]), "weight {} = {}", i, w[i]);
            }
        }
    }

    #[test]
    fn test_contains() {
        assert!(REC2020.contains(REC709.g));
        assert!(!REC709.contains(REC2020.g));
        assert!(REC709.contains(REC709.r));
        let w = REC709.barycentric(REC709.b).unwrap();
        assert!(w.is_close(&Vec3::Z, 1e-12));
    }

    #[test]
    fn test_from_rgb_to_xyz() {
        let m = rgb_to_xyz_matrix(&ACES_AP1).unwrap();
        let p = Primaries::from_rgb_to_xyz(&m).unwrap();
        assert!(p.r.is_close(&ACES_AP1.r, 1e-12));
        assert!(p.b.is_close(&ACES_AP1.b, 1e-12));
        assert!(p.w.is_close(&ACES_AP1.w, 1e-12));

        let xyz = Primaries::from_rgb_to_xyz(&Mat3::IDENTITY).unwrap();
        assert_eq!(xyz.r, CIE_XYZ.r);
        assert_eq!(xyz.b, CIE_XYZ.b);
        assert!(xyz.w.is_close(&E_XY, 1e-15));
    }

    #[test]
    fn test_xyz_to_xy() {
        assert_eq!(xyz_to_xy(Vec3::ZERO), None);
        let xy = xyz_to_xy(D65_XY.xy_to_xyz()).unwrap();
        assert!(xy.is_close(&D65_XY, 1e-15));
    }
}
