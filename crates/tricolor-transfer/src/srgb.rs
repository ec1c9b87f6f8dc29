//! The IEC 61966-2-1 sRGB curve with its published constants.
//!
//! A short linear toe near black joins an offset 2.4 power segment; the
//! result tracks a plain 2.2 gamma closely above the toe.
//! [`TransferFunction::srgb`] describes the same curve by gamma and bias
//! and derives its own break point, landing within 1e-5 of these values.
//!
//! [`TransferFunction::srgb`]: crate::TransferFunction::srgb

/// Exponent of the power segment.
pub const GAMMA: f64 = 2.4;

/// Offset of the power segment.
pub const BIAS: f64 = 0.055;

/// Slope of the linear toe.
pub const TOE_SLOPE: f64 = 12.92;

/// Last encoded value on the linear toe.
pub const ENCODED_BREAK: f64 = 0.04045;

/// Last linear value on the linear toe.
pub const LINEAR_BREAK: f64 = 0.0031308;

/// Encoded sRGB to linear light.
///
/// ```rust
/// use tricolor_transfer::srgb::eotf;
///
/// // Mid-gray in sRGB is a little over a fifth of linear white.
/// assert!((eotf(0.5) - 0.2140).abs() < 1e-4);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    match v {
        v if v <= ENCODED_BREAK => v / TOE_SLOPE,
        v => ((v + BIAS) / (1.0 + BIAS)).powf(GAMMA),
    }
}

/// Linear light to encoded sRGB.
#[inline]
pub fn oetf(l: f64) -> f64 {
    match l {
        l if l <= LINEAR_BREAK => l * TOE_SLOPE,
        l => (1.0 + BIAS) * l.powf(GAMMA.recip()) - BIAS,
    }
}

/// [`eotf`] on each channel.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// [`oetf`] on each channel.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}
