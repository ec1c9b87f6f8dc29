//! 2D vector type for chromaticity coordinates.
//!
//! [`Vec2`] holds CIE xy chromaticities: primaries, white points, and the
//! projection of a color's tristimulus values.

use std::ops::{Add, Index, Mul, Sub};

/// A 2D vector, used for CIE xy chromaticity.
///
/// No range is enforced: wide-gamut primaries such as ACES AP0 blue have a
/// negative y.
///
/// # Example
///
/// ```rust
/// use tricolor_math::Vec2;
///
/// let d65 = Vec2::new(0.3127, 0.3290);
/// let xyz = d65.xy_to_xyz();
/// assert_eq!(xyz.y, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// x chromaticity
    pub x: f64,
    /// y chromaticity
    pub y: f64,
}

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates from an `(x, y)` tuple.
    #[inline]
    pub const fn from_tuple(t: (f64, f64)) -> Self {
        Self::new(t.0, t.1)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Lifts an xy chromaticity to XYZ with Y = 1.
    ///
    /// Returns [`Vec3::ZERO`](crate::Vec3::ZERO) when y is zero, since such a
    /// chromaticity carries no luminance to normalize against.
    #[inline]
    pub fn xy_to_xyz(self) -> crate::Vec3 {
        if self.y == 0.0 {
            crate::Vec3::ZERO
        } else {
            crate::Vec3::new(self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y)
        }
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Index<usize> for Vec2 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from(t: (f64, f64)) -> Self {
        Self::from_tuple(t)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}
