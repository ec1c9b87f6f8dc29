//! The ITU-R BT.709 camera curve with its published constants.
//!
//! This is the scene-referred OETF and its exact inverse. Displays showing
//! Rec.709 material use BT.1886 instead, which is close to a pure 2.4 gamma.
//!
//! The published slope 4.5 and break 0.018 leave the two segments about
//! 2.5e-4 apart in the encoded domain. [`TransferFunction::rec709`] uses
//! the continuity-derived break instead.
//!
//! [`TransferFunction::rec709`]: crate::TransferFunction::rec709

/// Exponent of the power segment, as applied when encoding.
pub const ENCODE_POWER: f64 = 0.45;

/// Offset of the power segment.
pub const BIAS: f64 = 0.099;

/// Slope of the linear toe.
pub const TOE_SLOPE: f64 = 4.5;

/// First linear value on the power segment.
pub const LINEAR_BREAK: f64 = 0.018;

/// First encoded value on the power segment.
pub const ENCODED_BREAK: f64 = TOE_SLOPE * LINEAR_BREAK;

/// Linear scene light to encoded Rec.709.
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l < LINEAR_BREAK {
        TOE_SLOPE * l
    } else {
        (1.0 + BIAS) * l.powf(ENCODE_POWER) - BIAS
    }
}

/// Encoded Rec.709 back to linear scene light.
///
/// ```rust
/// use tricolor_transfer::rec709;
///
/// let v = rec709::oetf(0.18);
/// assert!((rec709::eotf(v) - 0.18).abs() < 1e-12);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v < ENCODED_BREAK {
        v / TOE_SLOPE
    } else {
        ((v + BIAS) / (1.0 + BIAS)).powf(ENCODE_POWER.recip())
    }
}
