//! Error types for color operations.
//!
//! Construction of a color space can fail; converting colors between valid
//! spaces never does.

use thiserror::Error;
use tricolor_primaries::PrimariesError;
use tricolor_transfer::TransferError;

/// Color operation error.
///
/// Covers every failure mode of the color layer:
/// - Lookup of a name the registry does not know
/// - Primaries or matrices that cannot define a space
/// - Invalid transfer function parameters
/// - Packed buffers of the wrong length
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// No color space is registered under this name.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),

    /// Primaries cannot be turned into an RGB to XYZ matrix.
    #[error("invalid primaries: {0}")]
    Primaries(#[from] PrimariesError),

    /// Transfer function parameters are invalid.
    #[error("invalid transfer function: {0}")]
    Transfer(#[from] TransferError),

    /// An explicit RGB to XYZ matrix has no inverse.
    #[error("singular RGB to XYZ matrix (determinant {determinant:e})")]
    SingularMatrix {
        /// Determinant of the rejected matrix.
        determinant: f64,
    },

    /// Packed buffer length is not a non-zero multiple of the channel count.
    #[error("invalid buffer: length {len} is not a non-zero multiple of {channels}")]
    InvalidBuffer {
        /// Buffer length in samples.
        len: usize,
        /// Channels per pixel.
        channels: usize,
    },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
