//! Three-component `f64` triplets.
//!
//! The same type carries encoded RGB, linear RGB and CIE XYZ; which one a
//! value holds is decided by whoever owns it (usually a color space).
//! Double precision keeps chained matrix conversions well inside the
//! tolerances color round trips are checked against.
//!
//! ```rust
//! use tricolor_math::Vec3;
//!
//! let xyz = Vec3::new(0.9505, 1.0, 1.089);
//! let half = xyz * 0.5;
//! assert_eq!(half.y, 0.5);
//! assert!((xyz.sum() - 3.0395).abs() < 1e-12);
//! ```

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// RGB or XYZ triplet.
///
/// `x`/`y`/`z` hold R/G/B or X/Y/Z. Indexing with `0..3` reaches the same
/// fields; any other index panics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// R or X.
    pub x: f64,
    /// G or Y.
    pub y: f64,
    /// B or Z.
    pub z: f64,
}

impl Vec3 {
    /// Black.
    pub const ZERO: Self = Self::splat(0.0);
    /// Unit gray, the white of any RGB space.
    pub const ONE: Self = Self::splat(1.0);
    /// Red, or CIE X.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Green, or CIE Y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Blue, or CIE Z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Triplet from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Gray: all three components equal to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Triplet from `[x, y, z]`.
    #[inline]
    pub const fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }

    /// `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Scalar product.
    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        (self * rhs).sum()
    }

    /// Vector product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let Self { x: ax, y: ay, z: az } = self;
        let Self { x: bx, y: by, z: bz } = rhs;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// X + Y + Z, the denominator of the xy projection.
    #[inline]
    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Combines two triplets component by component.
    #[inline]
    pub fn zip_map(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.x, rhs.x), f(self.y, rhs.y), f(self.z, rhs.z))
    }

    /// False if any component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    /// As a glam `DVec3`.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::from_array(self.to_array())
    }

    /// From a glam `DVec3`.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::from_array(v.to_array())
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("component {i} of a 3-vector"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("component {i} of a 3-vector"),
        }
    }
}

macro_rules! componentwise {
    ($($trait:ident::$method:ident => $op:tt),* $(,)?) => {$(
        impl $trait for Vec3 {
            type Output = Vec3;

            #[inline]
            fn $method(self, rhs: Vec3) -> Vec3 {
                self.zip_map(rhs, |a, b| a $op b)
            }
        }

        impl $trait<f64> for Vec3 {
            type Output = Vec3;

            #[inline]
            fn $method(self, rhs: f64) -> Vec3 {
                self.map(|a| a $op rhs)
            }
        }
    )*};
}

componentwise! {
    Add::add => +,
    Sub::sub => -,
    Mul::mul => *,
    Div::div => /,
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Vec3 {
        self.map(|c| -c)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Vec3::ONE, Vec3::X + Vec3::Y + Vec3::Z);
        assert_eq!(Vec3::ZERO, Vec3::default());
        assert_eq!(Vec3::splat(0.18).to_array(), [0.18; 3]);
    }

    #[test]
    fn test_products() {
        let rgb = Vec3::new(0.5, 0.25, 0.125);
        let weights = Vec3::new(0.2126, 0.7152, 0.0722);
        assert_eq!(rgb.dot(weights), 0.5 * 0.2126 + 0.25 * 0.7152 + 0.125 * 0.0722);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::Y), -Vec3::X);
    }

    #[test]
    fn test_arithmetic_is_componentwise() {
        let v = Vec3::new(2.0, 4.0, 8.0);
        assert_eq!(v / 2.0, Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(v * Vec3::new(0.5, 0.25, 0.125), Vec3::ONE);
        assert_eq!(0.5 * v, v * 0.5);
        assert_eq!(v - v, Vec3::ZERO);
        assert_eq!(v + 1.0, Vec3::new(3.0, 5.0, 9.0));
        assert_eq!(v.sum(), 14.0);
    }

    #[test]
    fn test_indexing() {
        let mut xyz = Vec3::new(0.95, 1.0, 1.09);
        xyz[2] = 0.0;
        assert_eq!(xyz[1], xyz.y);
        assert_eq!(xyz.z, 0.0);
    }

    #[test]
    #[should_panic]
    fn test_index_past_end() {
        let _ = Vec3::ONE[3];
    }

    #[test]
    fn test_finite() {
        assert!(Vec3::ONE.is_finite());
        assert!(!Vec3::new(0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_glam_interop() {
        let v = Vec3::new(0.25, 0.5, 0.75);
        let g: glam::DVec3 = v.into();
        assert_eq!(g.y, 0.5);
        assert_eq!(Vec3::from(g), v);
    }
}
