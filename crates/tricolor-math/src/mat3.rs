//! 3x3 `f64` matrices.
//!
//! Every linear step of a color conversion is one [`Mat3`]: RGB to XYZ,
//! white point adaptation, XYZ back to RGB. Their product is folded once
//! per conversion and then applied to each color.
//!
//! Storage is by rows and vectors are columns, so `(a * b) * v` equals
//! `a * (b * v)`: the right-hand matrix acts first.

use std::ops::{Index, Mul};

use crate::Vec3;

/// Row-major 3x3 matrix acting on column [`Vec3`]s.
///
/// ```rust
/// use tricolor_math::{Mat3, Vec3};
///
/// // Rec.709 primaries, D65 white.
/// let rgb_to_xyz = Mat3::from_rows([
///     [0.4124564, 0.3575761, 0.1804375],
///     [0.2126729, 0.7151522, 0.0721750],
///     [0.0193339, 0.1191920, 0.9503041],
/// ]);
/// let white = rgb_to_xyz * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// `m[row][col]`.
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// All zeros.
    pub const ZERO: Self = Self::from_rows([[0.0; 3]; 3]);

    /// Leaves every vector unchanged.
    pub const IDENTITY: Self = Self::from_diagonal(Vec3::ONE);

    /// [`Mat3::inverse`] gives up on determinants smaller than this.
    pub const SINGULAR_EPSILON: f64 = 1e-12;

    /// Matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Matrix from its columns.
    ///
    /// An RGB-to-XYZ matrix has the XYZ of each primary as a column.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        let [r0, r1, r2] = [0usize, 1, 2].map(|i| [c0[i], c1[i], c2[i]]);
        Self::from_rows([r0, r1, r2])
    }

    /// Per-channel scale.
    #[inline]
    pub const fn from_diagonal(d: Vec3) -> Self {
        Self::from_rows([[d.x, 0.0, 0.0], [0.0, d.y, 0.0], [0.0, 0.0, d.z]])
    }

    /// Row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Column `i`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m.map(|row| row[i]))
    }

    /// Scalar triple product of the rows.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.row(0).dot(self.row(1).cross(self.row(2)))
    }

    /// The inverse, or `None` when the determinant is not finite or is
    /// smaller than [`Mat3::SINGULAR_EPSILON`] in magnitude.
    ///
    /// ```rust
    /// use tricolor_math::{Mat3, Vec3};
    ///
    /// let scale = Mat3::from_diagonal(Vec3::new(2.0, 4.0, 8.0));
    /// let undo = scale.inverse().unwrap();
    /// assert_eq!(undo * Vec3::new(2.0, 4.0, 8.0), Vec3::ONE);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < Self::SINGULAR_EPSILON {
            return None;
        }
        // Adjugate rows are cross products of column pairs.
        let [c0, c1, c2] = [0, 1, 2].map(|i| self.col(i));
        let adj = [c1.cross(c2), c2.cross(c0), c0.cross(c1)];
        Some(Self::from_rows(adj.map(|r| (r / det).to_array())))
    }

    /// True only for the exact identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// As a column-major glam `DMat3`.
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols(self.col(0).into(), self.col(1).into(), self.col(2).into())
    }

    /// From a column-major glam `DMat3`.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_col_vecs(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        let cols = [0, 1, 2].map(|j| self * rhs.col(j));
        Mat3::from_col_vecs(cols[0], cols[1], cols[2])
    }
}

impl Index<usize> for Mat3 {
    type Output = [f64; 3];

    #[inline]
    fn index(&self, row: usize) -> &[f64; 3] {
        &self.m[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IsClose;
    use approx::assert_abs_diff_eq;

    // det = 1, integer inverse.
    fn unimodular() -> Mat3 {
        Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]])
    }

    #[test]
    fn test_identity_and_default() {
        let v = Vec3::new(0.2, -0.4, 1.6);
        assert_eq!(Mat3::IDENTITY * v, v);
        assert!(Mat3::default().is_identity());
        assert!(!unimodular().is_identity());
    }

    #[test]
    fn test_rows_and_columns() {
        let m = unimodular();
        assert_eq!(m.row(2), Vec3::new(5.0, 6.0, 0.0));
        assert_eq!(m.col(2), Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(m[1][2], 4.0);
        assert_eq!(Mat3::from_col_vecs(m.col(0), m.col(1), m.col(2)), m);
    }

    #[test]
    fn test_inverse() {
        let m = unimodular();
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        let inv = m.inverse().unwrap();
        assert_eq!(inv.m[0], [-24.0, 18.0, 5.0]);
        assert!((m * inv).is_close(&Mat3::IDENTITY, 1e-12));
        assert!((inv * m).is_close(&Mat3::IDENTITY, 1e-12));
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let rank_two = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(rank_two.inverse().is_none());
        assert!(Mat3::ZERO.inverse().is_none());
        let nan = Mat3::from_diagonal(Vec3::new(f64::NAN, 1.0, 1.0));
        assert!(nan.inverse().is_none());
    }

    #[test]
    fn test_right_hand_side_acts_first() {
        let scale = Mat3::from_diagonal(Vec3::splat(2.0));
        let swap = Mat3::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let shear = unimodular();
        let v = Vec3::new(1.0, 3.0, 5.0);
        assert_eq!((swap * shear) * v, swap * (shear * v));
        assert_eq!((swap * scale) * v, Vec3::new(6.0, 2.0, 10.0));
    }

    #[test]
    fn test_glam_is_column_major() {
        let m = unimodular();
        let g = m.to_glam();
        assert_eq!(g.x_axis, glam::DVec3::new(1.0, 0.0, 5.0));
        assert_eq!(Mat3::from_glam(g), m);
    }
}
