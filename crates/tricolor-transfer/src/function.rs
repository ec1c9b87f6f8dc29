//! Parametric transfer functions.
//!
//! [`TransferFunction`] is the curve a color space attaches to its linear
//! RGB. It is a closed set of three shapes:
//!
//! - **Linear**: identity.
//! - **PureGamma**: `sign(x) * |x|^gamma`.
//! - **Piecewise**: a linear segment near black joined to an offset power
//!   curve, the shape of sRGB and Rec.709.
//!
//! # Piecewise Form
//!
//! With slope `phi`, encoded breakpoint `k0`, exponent `gamma` and offset `a`:
//!
//! ```text
//! decode(x) = x / phi                      if x < k0
//!           = ((x + a) / (1 + a))^gamma    otherwise
//!
//! encode(l) = l * phi                      if l < k0 / phi
//!           = (1 + a) * l^(1/gamma) - a    otherwise
//! ```
//!
//! Inputs below the breakpoint, negatives included, stay on the linear
//! segment, so both directions are defined for every real input.
//!
//! [`TransferFunction::from_gamma_bias`] derives `k0` and `phi` from
//! `gamma` and `a` alone so that value and slope are continuous at the join:
//!
//! ```text
//! k0  = a / (gamma - 1)
//! phi = k0 / (a * gamma / ((1 + a) * (gamma - 1)))^gamma
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Result, TransferError};
use crate::gamma::{gamma_eotf, gamma_oetf};

/// Largest gap allowed between the two piecewise segments at the breakpoint,
/// measured in linear light.
pub const CONTINUITY_TOLERANCE: f64 = 1e-4;

/// A per-channel transfer function between encoded and linear values.
///
/// # Example
///
/// ```rust
/// use tricolor_transfer::TransferFunction;
///
/// let srgb = TransferFunction::from_gamma_bias(2.4, 0.055).unwrap();
/// let linear = srgb.decode(0.5);
/// assert!((linear - 0.214).abs() < 1e-3);
/// assert!((srgb.encode(linear) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TransferFunction {
    /// No curve: encoded values are linear.
    #[default]
    Linear,
    /// Mirrored power law.
    PureGamma {
        /// Decoding exponent.
        gamma: f64,
    },
    /// Linear segment below `breakpoint`, offset power curve above it.
    Piecewise {
        /// Slope of the linear segment in encoded-per-linear units (phi).
        slope: f64,
        /// Encoded value where the power segment takes over (k0).
        breakpoint: f64,
        /// Decoding exponent of the power segment.
        gamma: f64,
        /// Offset of the power segment (the linear bias `a`).
        offset: f64,
    },
}

impl TransferFunction {
    /// Validated pure gamma curve.
    pub fn pure_gamma(gamma: f64) -> Result<Self> {
        let f = Self::PureGamma { gamma };
        f.validate()?;
        Ok(f)
    }

    /// Validated piecewise curve from explicit parameters.
    ///
    /// See [`validate`](Self::validate) for the checks.
    pub fn piecewise(slope: f64, breakpoint: f64, gamma: f64, offset: f64) -> Result<Self> {
        let f = Self::Piecewise {
            slope,
            breakpoint,
            gamma,
            offset,
        };
        f.validate()?;
        Ok(f)
    }

    /// Checks parameters of a curve built directly from its variant.
    ///
    /// Gamma and slope must be finite and positive, the breakpoint must lie
    /// in [0, 1], the offset must be greater than -1, and the two piecewise
    /// segments must meet at the breakpoint within [`CONTINUITY_TOLERANCE`].
    ///
    /// ```rust
    /// use tricolor_transfer::TransferFunction;
    ///
    /// assert!(TransferFunction::srgb().validate().is_ok());
    /// assert!(TransferFunction::PureGamma { gamma: 0.0 }.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let (slope, breakpoint, gamma, offset) = match *self {
            Self::Linear => return Ok(()),
            Self::PureGamma { gamma } => return check_gamma(gamma),
            Self::Piecewise {
                slope,
                breakpoint,
                gamma,
                offset,
            } => (slope, breakpoint, gamma, offset),
        };

        check_gamma(gamma)?;
        if !offset.is_finite() || offset <= -1.0 {
            return Err(TransferError::InvalidOffset(offset));
        }
        if !(0.0..=1.0).contains(&breakpoint) {
            return Err(TransferError::InvalidBreakpoint(breakpoint));
        }
        if !slope.is_finite() || slope <= 0.0 {
            return Err(TransferError::InvalidSlope(slope));
        }

        let linear = breakpoint / slope;
        let power = ((breakpoint + offset) / (1.0 + offset)).powf(gamma);
        if !((linear - power).abs() <= CONTINUITY_TOLERANCE) {
            return Err(TransferError::Discontinuous { linear, power });
        }
        Ok(())
    }

    /// Builds a curve from a gamma and a linear bias.
    ///
    /// A gamma of 1 gives [`Linear`](Self::Linear), a bias of 0 gives
    /// [`PureGamma`](Self::PureGamma), anything else a continuity-derived
    /// [`Piecewise`](Self::Piecewise).
    ///
    /// ```rust
    /// use tricolor_transfer::TransferFunction;
    ///
    /// assert_eq!(TransferFunction::from_gamma_bias(1.0, 0.2).unwrap(), TransferFunction::Linear);
    /// assert!(TransferFunction::from_gamma_bias(0.0, 0.0).is_err());
    /// ```
    pub fn from_gamma_bias(gamma: f64, bias: f64) -> Result<Self> {
        check_gamma(gamma)?;
        if !bias.is_finite() || bias <= -1.0 {
            return Err(TransferError::InvalidOffset(bias));
        }
        if gamma == 1.0 {
            return Ok(Self::Linear);
        }
        if bias == 0.0 {
            return Ok(Self::PureGamma { gamma });
        }
        let (breakpoint, slope) = derive_piecewise(gamma, bias);
        Self::piecewise(slope, breakpoint, gamma, bias)
    }

    /// The sRGB curve: gamma 2.4, bias 0.055.
    pub fn srgb() -> Self {
        Self::derived(2.4, 0.055)
    }

    /// The Rec.709 curve: gamma 1/0.45, bias 0.099.
    pub fn rec709() -> Self {
        Self::derived(1.0 / 0.45, 0.099)
    }

    fn derived(gamma: f64, offset: f64) -> Self {
        let (breakpoint, slope) = derive_piecewise(gamma, offset);
        Self::Piecewise {
            slope,
            breakpoint,
            gamma,
            offset,
        }
    }

    /// Encoded to linear.
    #[inline]
    pub fn decode(&self, x: f64) -> f64 {
        match *self {
            Self::Linear => x,
            Self::PureGamma { gamma } => gamma_eotf(x, gamma),
            Self::Piecewise {
                slope,
                breakpoint,
                gamma,
                offset,
            } => {
                if x < breakpoint {
                    x / slope
                } else {
                    ((x + offset) / (1.0 + offset)).powf(gamma)
                }
            }
        }
    }

    /// Linear to encoded.
    #[inline]
    pub fn encode(&self, l: f64) -> f64 {
        match *self {
            Self::Linear => l,
            Self::PureGamma { gamma } => gamma_oetf(l, gamma),
            Self::Piecewise {
                slope,
                breakpoint,
                gamma,
                offset,
            } => {
                if l < breakpoint / slope {
                    l * slope
                } else {
                    (1.0 + offset) * l.powf(1.0 / gamma) - offset
                }
            }
        }
    }

    /// Decodes each channel of an RGB triplet.
    #[inline]
    pub fn decode_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        if self.is_linear() {
            return rgb;
        }
        rgb.map(|c| self.decode(c))
    }

    /// Encodes each channel of an RGB triplet.
    #[inline]
    pub fn encode_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        if self.is_linear() {
            return rgb;
        }
        rgb.map(|c| self.encode(c))
    }

    /// True for [`Linear`](Self::Linear).
    #[inline]
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Linear)
    }

    /// Decoding exponent; 1 for linear.
    pub fn gamma(&self) -> f64 {
        match *self {
            Self::Linear => 1.0,
            Self::PureGamma { gamma } | Self::Piecewise { gamma, .. } => gamma,
        }
    }

    /// Offset of the power segment; 0 unless piecewise.
    pub fn linear_bias(&self) -> f64 {
        match *self {
            Self::Piecewise { offset, .. } => offset,
            _ => 0.0,
        }
    }

    /// `(breakpoint, slope)` of the linear segment.
    ///
    /// Curves without a linear segment report `(0, 1)`.
    pub fn params(&self) -> (f64, f64) {
        match *self {
            Self::Piecewise {
                slope, breakpoint, ..
            } => (breakpoint, slope),
            _ => (0.0, 1.0),
        }
    }

    fn key(&self) -> (u8, [u64; 4]) {
        match *self {
            Self::Linear => (0, [0; 4]),
            Self::PureGamma { gamma } => (1, [key_bits(gamma), 0, 0, 0]),
            Self::Piecewise {
                slope,
                breakpoint,
                gamma,
                offset,
            } => (
                2,
                [
                    key_bits(slope),
                    key_bits(breakpoint),
                    key_bits(gamma),
                    key_bits(offset),
                ],
            ),
        }
    }
}

// Equality and hashing compare parameter bits so that the curve can key a map.
// Signed zeros compare equal.
impl PartialEq for TransferFunction {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TransferFunction {}

impl Hash for TransferFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Linear => write!(f, "linear"),
            Self::PureGamma { gamma } => write!(f, "gamma {}", gamma),
            Self::Piecewise {
                slope,
                breakpoint,
                gamma,
                offset,
            } => write!(
                f,
                "gamma {} offset {} (break {:.6}, slope {:.6})",
                gamma, offset, breakpoint, slope
            ),
        }
    }
}

// -0.0 and 0.0 share a key.
fn key_bits(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

fn check_gamma(gamma: f64) -> Result<()> {
    if gamma.is_finite() && gamma > 0.0 {
        Ok(())
    } else {
        Err(TransferError::InvalidGamma(gamma))
    }
}

/// `(breakpoint, slope)` that make the piecewise curve C1 at the join.
fn derive_piecewise(gamma: f64, offset: f64) -> (f64, f64) {
    let breakpoint = offset / (gamma - 1.0);
    let join = offset * gamma / ((1.0 + offset) * (gamma - 1.0));
    (breakpoint, breakpoint / join.powf(gamma))
}
