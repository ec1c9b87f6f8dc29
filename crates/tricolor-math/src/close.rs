//! Approximate equality with a caller-supplied tolerance.
//!
//! Chained matrix conversions are not bit-exact across paths, so colors are
//! compared with [`IsClose`] rather than `==`. Vectors and matrices are
//! close when every component differs by no more than `tolerance`.

use crate::{Mat3, Vec2, Vec3};

/// Approximate equality within an absolute tolerance.
///
/// # Example
///
/// ```rust
/// use tricolor_math::{IsClose, Vec3};
///
/// let a = Vec3::new(0.5, 0.25, 0.125);
/// let b = Vec3::new(0.5, 0.25, 0.125 + 1e-9);
/// assert!(a.is_close(&b, 1e-7));
/// assert!(!a.is_close(&b, 1e-10));
/// ```
pub trait IsClose<Rhs: ?Sized = Self> {
    /// Returns true if `self` and `other` differ by at most `tolerance`.
    fn is_close(&self, other: &Rhs, tolerance: f64) -> bool;
}

/// Free-function form of [`IsClose::is_close`].
#[inline]
pub fn is_close<T: IsClose + ?Sized>(a: &T, b: &T, tolerance: f64) -> bool {
    a.is_close(b, tolerance)
}

impl IsClose for f64 {
    #[inline]
    fn is_close(&self, other: &f64, tolerance: f64) -> bool {
        (self - other).abs() <= tolerance
    }
}

impl IsClose for Vec2 {
    #[inline]
    fn is_close(&self, other: &Vec2, tolerance: f64) -> bool {
        self.x.is_close(&other.x, tolerance) && self.y.is_close(&other.y, tolerance)
    }
}

impl IsClose for Vec3 {
    #[inline]
    fn is_close(&self, other: &Vec3, tolerance: f64) -> bool {
        (0..3).all(|i| self[i].is_close(&other[i], tolerance))
    }
}

impl IsClose for Mat3 {
    fn is_close(&self, other: &Mat3, tolerance: f64) -> bool {
        (0..3).all(|i| self.row(i).is_close(&other.row(i), tolerance))
    }
}
