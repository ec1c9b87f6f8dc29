//! Conversion between two color spaces.
//!
//! A [`Conversion`] folds every linear step between two spaces into a
//! single matrix and applies it between the source decode and the
//! destination encode:
//!
//! 1. Decode with the source transfer function
//! 2. Source RGB to XYZ
//! 3. Chromatic adaptation, source white to destination white
//! 4. XYZ to destination RGB
//! 5. Encode with the destination transfer function
//!
//! Nothing is clamped. Out-of-gamut values come out negative or above 1.
//!
//! # Example
//!
//! ```rust
//! use tricolor_color::{ColorSpace, Conversion};
//! use tricolor_color::math::Vec3;
//!
//! let srgb = ColorSpace::named("sRGB")?;
//! let acescg = ColorSpace::named("acescg")?;
//!
//! let to_aces = Conversion::new(&srgb, &acescg);
//! let white = to_aces.apply(Vec3::ONE);
//! assert!((white.x - 1.0).abs() < 1e-6);
//! # Ok::<(), tricolor_color::ColorError>(())
//! ```

use tracing::trace;
use tricolor_math::{AdaptationMethod, Mat3, Vec3, adapt_xy};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ColorError, ColorResult};
use crate::space::ColorSpace;

/// Buffers with at least this many pixels are converted on the rayon pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Which path a conversion takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    /// Source and destination are equal: values are returned bit-identical.
    Identity,
    /// One side is a pass-through space: values are re-tagged unchanged.
    PassThrough,
    /// Decode, matrix, encode.
    Full,
}

/// A prepared conversion from one color space to another.
#[derive(Debug, Clone)]
pub struct Conversion {
    src: ColorSpace,
    dst: ColorSpace,
    kind: ConversionKind,
    matrix: Mat3,
}

impl Conversion {
    /// Prepares a conversion using Bradford adaptation.
    pub fn new(src: &ColorSpace, dst: &ColorSpace) -> Self {
        Self::with_method(src, dst, AdaptationMethod::default())
    }

    /// Prepares a conversion using the given adaptation method.
    ///
    /// The method only matters when the two white points differ.
    pub fn with_method(src: &ColorSpace, dst: &ColorSpace, method: AdaptationMethod) -> Self {
        let kind = if src == dst {
            ConversionKind::Identity
        } else if src.is_pass_through() || dst.is_pass_through() {
            ConversionKind::PassThrough
        } else {
            ConversionKind::Full
        };

        let matrix = match kind {
            ConversionKind::Full if src.definition() != dst.definition() => {
                let adapt = adapt_xy(method, src.white_point(), dst.white_point());
                dst.from_xyz_matrix() * adapt * src.to_xyz_matrix()
            }
            _ => Mat3::IDENTITY,
        };

        trace!(
            src = src.name(),
            dst = dst.name(),
            ?kind,
            method = method.name(),
            "conversion"
        );

        Self {
            src: src.clone(),
            dst: dst.clone(),
            kind,
            matrix,
        }
    }

    /// Source space.
    #[inline]
    pub fn source(&self) -> &ColorSpace {
        &self.src
    }

    /// Destination space.
    #[inline]
    pub fn destination(&self) -> &ColorSpace {
        &self.dst
    }

    /// Path this conversion takes.
    #[inline]
    pub fn kind(&self) -> ConversionKind {
        self.kind
    }

    /// Linear source RGB to linear destination RGB.
    ///
    /// The identity for [`Identity`](ConversionKind::Identity) and
    /// [`PassThrough`](ConversionKind::PassThrough) conversions, and for
    /// pairs that differ only in their transfer function.
    #[inline]
    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    /// Converts one encoded RGB triplet.
    #[inline]
    pub fn apply(&self, rgb: Vec3) -> Vec3 {
        match self.kind {
            ConversionKind::Identity | ConversionKind::PassThrough => rgb,
            ConversionKind::Full => self.dst.encode(self.matrix * self.src.decode(rgb)),
        }
    }

    /// Converts a packed buffer in place.
    ///
    /// Every pixel is `channels` values wide; the first three are RGB and
    /// the rest (alpha) are left untouched.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidBuffer`] if `channels < 3` or the buffer length
    /// is not a non-zero multiple of `channels`.
    pub fn apply_slice(&self, buf: &mut [f64], channels: usize) -> ColorResult<()> {
        if channels < 3 || buf.is_empty() || buf.len() % channels != 0 {
            return Err(ColorError::InvalidBuffer {
                len: buf.len(),
                channels,
            });
        }
        if self.kind != ConversionKind::Full {
            return Ok(());
        }

        let pixel = |px: &mut [f64]| {
            let out = self.apply(Vec3::new(px[0], px[1], px[2]));
            px[..3].copy_from_slice(&out.to_array());
        };

        #[cfg(feature = "parallel")]
        if buf.len() / channels >= PARALLEL_THRESHOLD {
            buf.par_chunks_mut(channels).for_each(pixel);
            return Ok(());
        }

        buf.chunks_mut(channels).for_each(pixel);
        Ok(())
    }
}
