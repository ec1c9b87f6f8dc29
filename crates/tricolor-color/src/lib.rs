//! # tricolor-color
//!
//! Color spaces, colors and the conversions between them.
//!
//! This crate ties the lower layers together:
//!
//! - [`ColorSpace`] - primaries or matrix, white point and transfer function
//! - [`ColorSpaceRegistry`] - named presets (`sRGB`, `acescg`, `lin_rec709`, ...)
//! - [`Conversion`] - decode, adapt, change primaries, encode
//! - [`Color`] - RGB tagged with its space
//! - [`spectral`] - blackbody and monochromatic colors
//!
//! # Architecture
//!
//! ```text
//!                tricolor-color
//!                      |
//!        +-------------+-------------+
//!        |                           |
//! tricolor-transfer         tricolor-primaries
//!                                    |
//!                              tricolor-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tricolor_color::prelude::*;
//!
//! let mauve = Color::new(Vec3::new(0.5, 0.25, 0.125), ColorSpace::named("lin_rec709")?);
//!
//! // Different white point: Bradford adaptation is applied.
//! let aces = mauve.convert(&ColorSpace::named("lin_ap0")?);
//! let back = aces.convert(mauve.space());
//! assert!(back.is_close(&mauve, 1e-7));
//!
//! // Bulk conversion of packed pixels.
//! let mut pixels = vec![0.5; 3 * 1024];
//! ColorSpace::named("sRGB")?.convert_rgb(&ColorSpace::named("acescg")?, &mut pixels)?;
//! # Ok::<(), tricolor_color::ColorError>(())
//! ```
//!
//! # Presets
//!
//! | Name | Primaries | Transfer | White Point |
//! |------|-----------|----------|-------------|
//! | `identity`, `raw` | pass-through | linear | E |
//! | `CIEXYZ` | XYZ | linear | E |
//! | `acescg`, `lin_ap1` | AP1 | linear | ACES |
//! | `g18_ap1`, `g22_ap1` | AP1 | gamma 1.8, 2.2 | ACES |
//! | `lin_ap0` | AP0 | linear | ACES |
//! | `adobergb`, `lin_adobergb` | Adobe RGB | 563/256, linear | D65 |
//! | `lin_rec2020` | Rec.2020 | linear | D65 |
//! | `lin_rec709`, `lin_srgb` | Rec.709 | linear | D65 |
//! | `g18_rec709`, `g22_rec709` | Rec.709 | gamma 1.8, 2.2 | D65 |
//! | `rec709` | Rec.709 | BT.709 | D65 |
//! | `sRGB`, `srgb_texture` | Rec.709 | sRGB | D65 |
//! | `lin_displayp3`, `srgb_displayp3` | Display P3 | linear, sRGB | D65 |
//!
//! # Features
//!
//! - `parallel` (default) - convert large buffers on the rayon pool
//! - `serde` - serialization of math, transfer and primaries types
//!
//! # Dependencies
//!
//! - [`tricolor-math`] - vectors, matrices, chromatic adaptation
//! - [`tricolor-transfer`] - transfer functions
//! - [`tricolor-primaries`] - primaries and RGB/XYZ matrices
//! - `tracing` - diagnostics
//! - `rayon` (optional) - parallel buffers
//!
//! # Used By
//!
//! - `tricolor-cli` - the `tricolor` command line tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod conversion;
mod error;
mod space;
pub mod registry;
pub mod spectral;

pub use color::Color;
pub use conversion::{Conversion, ConversionKind};
#[cfg(feature = "parallel")]
pub use conversion::PARALLEL_THRESHOLD;
pub use error::{ColorError, ColorResult};
pub use registry::ColorSpaceRegistry;
pub use space::{ColorSpace, Definition};

// Re-export sub-crates for convenience
pub use tricolor_math as math;
pub use tricolor_primaries as primaries;
pub use tricolor_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{Color, ColorError, ColorResult, ColorSpace, ColorSpaceRegistry, Conversion};

    pub use tricolor_transfer::TransferFunction;

    pub use tricolor_primaries::{
        ACES_AP0, ACES_AP1, ACES_WHITE_XY, ADOBE_RGB, D50_XY, D65_XY, DISPLAY_P3, Primaries,
        REC709, REC2020, SRGB,
    };

    pub use tricolor_math::{AdaptationMethod, IsClose, Mat3, Vec2, Vec3};
}
