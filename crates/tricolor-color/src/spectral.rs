//! Analytic approximations of spectral colors.
//!
//! - [`blackbody_xy`]: Planckian locus after Kim et al. (2002), a cubic
//!   spline fit valid from 1667 K to 25000 K
//! - [`wavelength_xyz`]: the CIE 1931 2° observer as a sum of piecewise
//!   Gaussians, after Wyman, Sloan and Shirley (2013)
//!
//! Both return XYZ relative to equal-energy white; feed them to
//! [`Color::set_from_xyz`](crate::Color::set_from_xyz) to express them in
//! a color space.

use tricolor_math::{Vec2, Vec3};

/// Lowest temperature covered by the locus fit.
pub const KELVIN_MIN: f64 = 1667.0;

/// Highest temperature covered by the locus fit.
pub const KELVIN_MAX: f64 = 25000.0;

/// Chromaticity of a blackbody radiator.
///
/// `kelvin` is clamped to [`KELVIN_MIN`]..=[`KELVIN_MAX`].
///
/// ```rust
/// use tricolor_color::spectral::blackbody_xy;
///
/// let xy = blackbody_xy(6500.0);
/// assert!((xy.x - 0.3135).abs() < 1e-3);
/// ```
pub fn blackbody_xy(kelvin: f64) -> Vec2 {
    let t = kelvin.clamp(KELVIN_MIN, KELVIN_MAX);
    let t2 = t * t;
    let t3 = t2 * t;

    let x = if t <= 4000.0 {
        -0.2661239e9 / t3 - 0.2343589e6 / t2 + 0.8776956e3 / t + 0.179910
    } else {
        -3.0258469e9 / t3 + 2.1070379e6 / t2 + 0.2226347e3 / t + 0.240390
    };

    let x2 = x * x;
    let x3 = x2 * x;
    let y = if t <= 2222.0 {
        -1.1063814 * x3 - 1.34811020 * x2 + 2.18555832 * x - 0.20219683
    } else if t <= 4000.0 {
        -0.9549476 * x3 - 1.37418593 * x2 + 2.09137015 * x - 0.16748867
    } else {
        3.0817580 * x3 - 5.87338670 * x2 + 3.75112997 * x - 0.37001483
    };

    Vec2::new(x, y)
}

/// XYZ of a blackbody radiator with CIE Y equal to `luminance`.
pub fn blackbody_xyz(kelvin: f64, luminance: f64) -> Vec3 {
    blackbody_xy(kelvin).xy_to_xyz() * luminance
}

// Lobe with separate widths below and above its center.
#[inline]
fn lobe(x: f64, mu: f64, sigma_lo: f64, sigma_hi: f64) -> f64 {
    let t = (x - mu) / if x < mu { sigma_lo } else { sigma_hi };
    (-0.5 * t * t).exp()
}

/// Tristimulus response of the CIE 1931 observer to a monochromatic
/// stimulus of unit power at `nm` nanometers.
///
/// The fit is smooth everywhere and falls off to zero outside roughly
/// 380..780 nm.
pub fn wavelength_xyz(nm: f64) -> Vec3 {
    let x = 1.056 * lobe(nm, 599.8, 37.9, 31.0) + 0.362 * lobe(nm, 442.0, 16.0, 26.7)
        - 0.065 * lobe(nm, 501.1, 20.4, 26.2);
    let y = 0.821 * lobe(nm, 568.8, 46.9, 40.5) + 0.286 * lobe(nm, 530.9, 16.3, 31.1);
    let z = 1.217 * lobe(nm, 437.0, 11.8, 36.0) + 0.681 * lobe(nm, 459.0, 26.0, 13.8);
    Vec3::new(x, y, z)
}
