//! # tricolor-transfer
//!
//! Transfer functions for color encoding and decoding.
//!
//! Transfer functions convert between linear light values and encoded values
//! for storage, display, or transmission.
//!
//! # Terminology
//!
//! - **decode / EOTF**: Encoded -> Linear
//! - **encode / OETF**: Linear -> Encoded
//! - **Gamma**: The exponent in a power-law transfer function
//! - **Linear bias**: The offset of a piecewise curve's power segment
//!
//! # Parametric Curves
//!
//! [`TransferFunction`] is what color spaces carry: linear, pure gamma, or
//! piecewise linear + power. Construction validates the parameters and
//! returns [`TransferError`] on bad input.
//!
//! # Standard Curves
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`srgb`] | Web, consumer displays | [0, 1] |
//! | [`gamma`] | Gamma 1.8 / 2.2 / Adobe RGB | mirrored |
//! | [`rec709`] | HDTV broadcast | [0, 1] |
//!
//! # Usage
//!
//! ```rust
//! use tricolor_transfer::{srgb, TransferFunction};
//!
//! // Published sRGB constants
//! let linear = srgb::eotf(0.5);
//!
//! // The same curve as a parametric transfer function
//! let curve = TransferFunction::from_gamma_bias(2.4, 0.055)?;
//! assert!((curve.decode(0.5) - linear).abs() < 1e-4);
//! # Ok::<(), tricolor_transfer::TransferError>(())
//! ```
//!
//! # Dependencies
//!
//! - `thiserror` - error type
//! - `serde` (optional) - serialization of [`TransferFunction`]
//!
//! # Used By
//!
//! - `tricolor-color` - color space descriptors and conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod function;

pub mod gamma;
pub mod rec709;
pub mod srgb;

pub use error::{Result, TransferError};
pub use function::{CONTINUITY_TOLERANCE, TransferFunction};

// Re-export common functions
pub use gamma::{gamma_eotf, gamma_oetf};
pub use rec709::{eotf as rec709_eotf, oetf as rec709_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
