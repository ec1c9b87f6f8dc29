//! Named color space presets.
//!
//! The registry is built once, on first use, and is read-only afterwards.
//! Lookups take no lock.
//!
//! # Example
//!
//! ```rust
//! use tricolor_color::registry::{ColorSpaceRegistry, names};
//!
//! let registry = ColorSpaceRegistry::global();
//! assert!(registry.contains(names::ACESCG));
//!
//! for space in registry.iter() {
//!     println!("{}: gamma {}", space.name(), space.gamma());
//! }
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, warn};
use tricolor_math::Mat3;
use tricolor_primaries::{ACES_AP0, ACES_AP1, ADOBE_RGB, DISPLAY_P3, Primaries, REC709, REC2020};
use tricolor_transfer::TransferFunction;
use tricolor_transfer::gamma::ADOBE_RGB_GAMMA;

use crate::error::ColorResult;
use crate::space::ColorSpace;

/// Canonical preset names.
pub mod names {
    /// Pass-through: RGB is never transformed.
    pub const IDENTITY: &str = "identity";
    /// Pass-through, for data that carries no colorimetry.
    pub const RAW: &str = "raw";
    /// CIE 1931 XYZ, equal-energy white.
    pub const CIE_XYZ: &str = "CIEXYZ";
    /// ACES AP1, linear. Same colorimetry as [`LIN_AP1`].
    pub const ACESCG: &str = "acescg";
    /// ACES AP0, linear.
    pub const LIN_AP0: &str = "lin_ap0";
    /// ACES AP1, linear.
    pub const LIN_AP1: &str = "lin_ap1";
    /// ACES AP1, gamma 1.8.
    pub const G18_AP1: &str = "g18_ap1";
    /// ACES AP1, gamma 2.2.
    pub const G22_AP1: &str = "g22_ap1";
    /// Adobe RGB (1998) with its 563/256 power curve.
    pub const ADOBE_RGB: &str = "adobergb";
    /// Adobe RGB (1998), linear.
    pub const LIN_ADOBE_RGB: &str = "lin_adobergb";
    /// Rec.2020, linear.
    pub const LIN_REC2020: &str = "lin_rec2020";
    /// Rec.709, linear. The default working space.
    pub const LIN_REC709: &str = "lin_rec709";
    /// Rec.709 primaries, gamma 1.8.
    pub const G18_REC709: &str = "g18_rec709";
    /// Rec.709 primaries, gamma 2.2.
    pub const G22_REC709: &str = "g22_rec709";
    /// Rec.709 primaries with the BT.709 camera curve.
    pub const REC709: &str = "rec709";
    /// Display P3, linear.
    pub const LIN_DISPLAY_P3: &str = "lin_displayp3";
    /// sRGB primaries, linear.
    pub const LIN_SRGB: &str = "lin_srgb";
    /// sRGB with the IEC 61966-2-1 curve.
    pub const SRGB_TEXTURE: &str = "srgb_texture";
    /// sRGB with the IEC 61966-2-1 curve.
    pub const SRGB: &str = "sRGB";
    /// Display P3 primaries with the sRGB curve.
    pub const SRGB_DISPLAY_P3: &str = "srgb_displayp3";
}

#[derive(Clone, Copy)]
enum Basis {
    PassThrough,
    Matrix(Mat3),
    Primaries(Primaries),
}

#[derive(Clone, Copy)]
enum Curve {
    Linear,
    Gamma(f64),
    Srgb,
    Rec709,
}

const PRESETS: &[(&str, Basis, Curve)] = &[
    (names::IDENTITY, Basis::PassThrough, Curve::Linear),
    (names::RAW, Basis::PassThrough, Curve::Linear),
    (names::CIE_XYZ, Basis::Matrix(Mat3::IDENTITY), Curve::Linear),
    (names::ACESCG, Basis::Primaries(ACES_AP1), Curve::Linear),
    (names::LIN_AP1, Basis::Primaries(ACES_AP1), Curve::Linear),
    (names::LIN_AP0, Basis::Primaries(ACES_AP0), Curve::Linear),
    (names::G18_AP1, Basis::Primaries(ACES_AP1), Curve::Gamma(1.8)),
    (names::G22_AP1, Basis::Primaries(ACES_AP1), Curve::Gamma(2.2)),
    (names::ADOBE_RGB, Basis::Primaries(ADOBE_RGB), Curve::Gamma(ADOBE_RGB_GAMMA)),
    (names::LIN_ADOBE_RGB, Basis::Primaries(ADOBE_RGB), Curve::Linear),
    (names::LIN_REC2020, Basis::Primaries(REC2020), Curve::Linear),
    (names::LIN_REC709, Basis::Primaries(REC709), Curve::Linear),
    (names::G18_REC709, Basis::Primaries(REC709), Curve::Gamma(1.8)),
    (names::G22_REC709, Basis::Primaries(REC709), Curve::Gamma(2.2)),
    (names::REC709, Basis::Primaries(REC709), Curve::Rec709),
    (names::LIN_DISPLAY_P3, Basis::Primaries(DISPLAY_P3), Curve::Linear),
    (names::LIN_SRGB, Basis::Primaries(REC709), Curve::Linear),
    (names::SRGB_TEXTURE, Basis::Primaries(REC709), Curve::Srgb),
    (names::SRGB, Basis::Primaries(REC709), Curve::Srgb),
    (names::SRGB_DISPLAY_P3, Basis::Primaries(DISPLAY_P3), Curve::Srgb),
];

fn build(name: &str, basis: Basis, curve: Curve) -> ColorResult<ColorSpace> {
    let transfer = match curve {
        Curve::Linear => TransferFunction::Linear,
        Curve::Gamma(g) => TransferFunction::pure_gamma(g)?,
        Curve::Srgb => TransferFunction::srgb(),
        Curve::Rec709 => TransferFunction::rec709(),
    };
    match basis {
        Basis::PassThrough => Ok(ColorSpace::pass_through(name)),
        Basis::Matrix(m) => ColorSpace::from_matrix(name, m, transfer),
        Basis::Primaries(p) => ColorSpace::from_primaries(name, p.r, p.g, p.b, p.w, transfer),
    }
}

/// Process-wide table of preset color spaces.
pub struct ColorSpaceRegistry {
    spaces: Vec<ColorSpace>,
    by_name: HashMap<String, usize>,
    working: ColorSpace,
}

impl ColorSpaceRegistry {
    /// Returns the global registry, building it on first call.
    pub fn global() -> &'static ColorSpaceRegistry {
        static INSTANCE: OnceLock<ColorSpaceRegistry> = OnceLock::new();
        INSTANCE.get_or_init(ColorSpaceRegistry::with_presets)
    }

    fn with_presets() -> Self {
        let mut spaces = Vec::with_capacity(PRESETS.len());
        let mut by_name = HashMap::with_capacity(PRESETS.len());

        for &(name, basis, curve) in PRESETS {
            match build(name, basis, curve) {
                Ok(space) => {
                    by_name.insert(name.to_string(), spaces.len());
                    spaces.push(space);
                }
                Err(e) => warn!(name, error = %e, "skipping color space preset"),
            }
        }

        let working = by_name
            .get(names::LIN_REC709)
            .map(|&i| spaces[i].clone())
            .unwrap_or_else(|| ColorSpace::pass_through(names::LIN_REC709));

        debug!(count = spaces.len(), "color space registry built");
        Self {
            spaces,
            by_name,
            working,
        }
    }

    /// Looks up a preset by exact name.
    pub fn get(&self, name: &str) -> Option<&ColorSpace> {
        self.by_name.get(name).map(|&i| &self.spaces[i])
    }

    /// True if a preset with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Preset names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.spaces.iter().map(ColorSpace::name)
    }

    /// Presets, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorSpace> {
        self.spaces.iter()
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// True if no preset could be built.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// The canonical working space, `lin_rec709`.
    pub fn working_space(&self) -> &ColorSpace {
        &self.working
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricolor_primaries::{ACES_WHITE_XY, D65_XY, E_XY};

    #[test]
    fn test_all_presets_built() {
        let registry = ColorSpaceRegistry::global();
        assert_eq!(registry.len(), PRESETS.len());
        let listed: Vec<_> = registry.names().collect();
        assert_eq!(listed.first(), Some(&names::IDENTITY));
        assert_eq!(listed.last(), Some(&names::SRGB_DISPLAY_P3));
    }

    #[test]
    fn test_aliases_are_equal() {
        let r = ColorSpaceRegistry::global();
        assert_eq!(r.get(names::ACESCG), r.get(names::LIN_AP1));
        assert_eq!(r.get(names::LIN_SRGB), r.get(names::LIN_REC709));
        assert_eq!(r.get(names::SRGB), r.get(names::SRGB_TEXTURE));
        assert_eq!(r.get(names::IDENTITY), r.get(names::RAW));
        assert_ne!(r.get(names::G18_REC709), r.get(names::G22_REC709));
    }

    #[test]
    fn test_white_points() {
        let r = ColorSpaceRegistry::global();
        let white = |n| r.get(n).map(ColorSpace::white_point);
        assert_eq!(white(names::LIN_REC709), Some(D65_XY));
        assert_eq!(white(names::ACESCG), Some(ACES_WHITE_XY));
        assert_eq!(white(names::LIN_AP0), Some(ACES_WHITE_XY));
        assert_eq!(white(names::RAW), Some(E_XY));
    }

    #[test]
    fn test_cie_xyz_is_identity() {
        let xyz = ColorSpaceRegistry::global().get(names::CIE_XYZ).unwrap();
        assert!(xyz.to_xyz_matrix().is_identity());
        assert!(!xyz.is_pass_through());
        assert!(!xyz.is_constructed_from_primaries());
        let w = xyz.white_point();
        assert!((w.x - 1.0 / 3.0).abs() < 1e-15 && (w.y - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_curves() {
        let r = ColorSpaceRegistry::global();
        assert_eq!(r.get(names::G22_REC709).map(ColorSpace::gamma), Some(2.2));
        assert_eq!(r.get(names::ADOBE_RGB).map(ColorSpace::gamma), Some(563.0 / 256.0));
        let srgb = r.get(names::SRGB).unwrap();
        assert_eq!(srgb.gamma(), 2.4);
        assert_eq!(srgb.linear_bias(), 0.055);
        let (brk, slope) = srgb.transfer_params();
        assert!((brk - 0.055 / 1.4).abs() < 1e-12);
        assert!((slope - 12.92).abs() < 1e-2);

        let video = r.get(names::REC709).unwrap();
        assert_eq!(*video.transfer(), TransferFunction::rec709());
        assert_eq!(video.to_xyz_matrix(), r.get(names::LIN_REC709).unwrap().to_xyz_matrix());
        assert_ne!(Some(video), r.get(names::SRGB));
        assert!((video.gamma() - 1.0 / 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_unknown() {
        let r = ColorSpaceRegistry::global();
        assert!(r.get("ACEScg").is_none());
        assert!(!r.contains(""));
        assert!(!r.is_empty());
    }
}
