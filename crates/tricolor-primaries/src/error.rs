//! Error types for matrix derivation.

use thiserror::Error;

/// Primaries that cannot define an RGB space.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrimariesError {
    /// The three primaries are collinear (or coincide), so the matrix built
    /// from them has no inverse.
    #[error("degenerate primaries: determinant {determinant:e} is not invertible")]
    DegeneratePrimaries {
        /// Determinant of the unscaled primaries matrix.
        determinant: f64,
    },

    /// A chromaticity is not finite or has y = 0 and cannot be lifted to XYZ.
    #[error("invalid {which} chromaticity ({x}, {y})")]
    InvalidChromaticity {
        /// Which coordinate: "red", "green", "blue" or "white".
        which: &'static str,
        /// x chromaticity.
        x: f64,
        /// y chromaticity.
        y: f64,
    },
}

/// Result type for matrix derivation.
pub type Result<T> = std::result::Result<T, PrimariesError>;
