//! # tricolor-math
//!
//! Math primitives for color space conversion.
//!
//! This crate provides the linear algebra every other tricolor crate is
//! built on:
//!
//! - [`Vec2`] - CIE xy chromaticities
//! - [`Vec3`] - RGB and XYZ triplets
//! - [`Mat3`] - 3x3 matrices for color space transformations
//! - Chromatic adaptation transforms (Bradford, CAT02, Von Kries)
//! - [`IsClose`] - tolerance-based comparison
//!
//! # Design
//!
//! All values are `f64`. Matrix operations assume **row-major** storage and
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tricolor_math::{Mat3, Vec3};
//!
//! // Rec.709 / D65 to XYZ
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! let back = rgb_to_xyz.inverse().unwrap() * xyz;
//! assert!((back.x - rgb.x).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with `DVec3` / `DMat3`
//! - `serde` (optional) - serialization of the value types
//!
//! # Used By
//!
//! - `tricolor-primaries` - RGB/XYZ matrix derivation
//! - `tricolor-color` - color spaces, conversions, colors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod close;
mod mat3;
mod vec2;
mod vec3;

pub use adapt::*;
pub use close::*;
pub use mat3::*;
pub use vec2::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec2, DVec3};
}
