//! White point adaptation.
//!
//! A color measured under one white looks different when its XYZ is
//! reinterpreted under another. The von Kries family of transforms fixes
//! this by taking XYZ into a cone-like space, scaling each cone by the
//! ratio of destination to source white there, and coming back:
//!
//! ```text
//! M_adapt = M_cone^-1 * diag(cone(dst) / cone(src)) * M_cone
//! ```
//!
//! The transforms differ only in `M_cone`. Bradford is the default; plain
//! XYZ scaling is kept mostly for comparison.
//!
//! ```rust
//! use tricolor_math::{adapt_xy, AdaptationMethod, Vec2};
//!
//! let d65 = Vec2::new(0.3127, 0.3290);
//! let aces = Vec2::new(0.32168, 0.33767);
//! let m = adapt_xy(AdaptationMethod::Bradford, d65, aces);
//!
//! let white = m * d65.xy_to_xyz();
//! assert!((white.z - aces.xy_to_xyz().z).abs() < 1e-9);
//! ```

use crate::{Mat3, Vec2, Vec3};

/// Bradford cone response (Lam 1985).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// CAT02 cone response, from CIECAM02.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Hunt-Pointer-Estevez cone response, used by the classic von Kries transform.
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.0, 0.0, 0.91822],
]);

/// No cone space at all: X, Y and Z are scaled directly.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

/// Bradford D65 -> D50, for whites at xy (0.3127, 0.3290) and (0.34567, 0.3585).
pub const D65_TO_D50_BRADFORD: Mat3 = Mat3::from_rows([
    [1.0478543, 0.0229054, -0.0501651],
    [0.0295670, 0.9904796, -0.0170622],
    [-0.0092414, 0.0150547, 0.7519501],
]);

/// Bradford D50 -> D65.
pub const D50_TO_D65_BRADFORD: Mat3 = Mat3::from_rows([
    [0.9555394, -0.0230584, 0.0632240],
    [-0.0283119, 1.0099471, 0.0210275],
    [0.0123103, -0.0205034, 1.3302315],
]);

/// Bradford D65 -> ACES white (xy 0.32168, 0.33767), often called D60.
pub const D65_TO_D60_BRADFORD: Mat3 = Mat3::from_rows([
    [1.0130349, 0.0061053, -0.0149709],
    [0.0076982, 0.9981634, -0.0050320],
    [-0.0028413, 0.0046852, 0.9245061],
]);

/// Bradford ACES white (D60) -> D65.
pub const D60_TO_D65_BRADFORD: Mat3 = Mat3::from_rows([
    [0.9872240, -0.0061132, 0.0159533],
    [-0.0075984, 1.0018615, 0.0053300],
    [0.0030726, -0.0050960, 1.0816806],
]);

/// Cone response model used for white point adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdaptationMethod {
    /// [`BRADFORD`].
    #[default]
    Bradford,
    /// [`CAT02`].
    Cat02,
    /// [`VON_KRIES`].
    VonKries,
    /// [`XYZ_SCALING`].
    XyzScaling,
}

impl AdaptationMethod {
    /// All methods, in declaration order.
    pub const ALL: [AdaptationMethod; 4] = [
        AdaptationMethod::Bradford,
        AdaptationMethod::Cat02,
        AdaptationMethod::VonKries,
        AdaptationMethod::XyzScaling,
    ];

    /// XYZ to cone response matrix for this method.
    #[inline]
    pub const fn matrix(self) -> Mat3 {
        match self {
            Self::Bradford => BRADFORD,
            Self::Cat02 => CAT02,
            Self::VonKries => VON_KRIES,
            Self::XyzScaling => XYZ_SCALING,
        }
    }

    /// Short lowercase name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bradford => "bradford",
            Self::Cat02 => "cat02",
            Self::VonKries => "vonkries",
            Self::XyzScaling => "xyz",
        }
    }

    /// Looks a method up by [`name`](Self::name), ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Adaptation matrix taking XYZ under `src_white` to XYZ under `dst_white`.
///
/// `cones` is the XYZ-to-cone matrix. A singular `cones` has no cone
/// space to scale in, so the identity is returned.
pub fn adapt_matrix(cones: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let Some(from_cones) = cones.inverse() else {
        return Mat3::IDENTITY;
    };
    let gain = (cones * dst_white).zip_map(cones * src_white, |d, s| d / s);
    from_cones * Mat3::from_diagonal(gain) * cones
}

/// Adaptation matrix between two whites given as xy chromaticities.
///
/// Equal whites give exactly [`Mat3::IDENTITY`], so same-white conversions
/// pick up no rounding.
pub fn adapt_xy(method: AdaptationMethod, src_white: Vec2, dst_white: Vec2) -> Mat3 {
    if src_white == dst_white {
        return Mat3::IDENTITY;
    }
    adapt_matrix(method.matrix(), src_white.xy_to_xyz(), dst_white.xy_to_xyz())
}
