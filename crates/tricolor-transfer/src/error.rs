//! Error types for transfer function construction.

use thiserror::Error;

/// Invalid transfer function parameters.
///
/// Evaluating a curve never fails; only building one from parameters does.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    /// Gamma is not finite or not strictly positive.
    #[error("invalid gamma {0}: must be finite and > 0")]
    InvalidGamma(f64),

    /// Linear segment slope is not finite or not strictly positive.
    #[error("invalid linear slope {0}: must be finite and > 0")]
    InvalidSlope(f64),

    /// Breakpoint lies outside the encoded range [0, 1].
    #[error("invalid breakpoint {0}: must be within [0, 1]")]
    InvalidBreakpoint(f64),

    /// Offset (linear bias) is not finite or not greater than -1.
    #[error("invalid offset {0}: must be finite and > -1")]
    InvalidOffset(f64),

    /// The linear and power segments do not meet at the breakpoint.
    #[error("segments do not meet at breakpoint: linear gives {linear}, power gives {power}")]
    Discontinuous {
        /// Decoded value of the linear segment at the breakpoint.
        linear: f64,
        /// Decoded value of the power segment at the breakpoint.
        power: f64,
    },
}

/// Result type for transfer function construction.
pub type Result<T> = std::result::Result<T, TransferError>;
