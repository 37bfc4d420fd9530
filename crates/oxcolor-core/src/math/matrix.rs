//! 3x3 matrices for RGB ↔ XYZ and XYZ ↔ LMS
//!
//! Row-major, f64 throughout. Most operations are `const` so preset
//! matrices and their inverses can be computed at compile time.

use std::ops::{Index, IndexMut, Mul};

/// Smallest accepted |det| as a fraction of the product of row lengths.
///
/// That product bounds |det| (Hadamard), so the test ignores uniform scale.
const SINGULAR_RATIO: f64 = 1e-14;

/// A 3x3 transform, `m[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Matrix whose columns are `c0`, `c1`, `c2`
    #[inline]
    pub const fn from_columns(c0: [f64; 3], c1: [f64; 3], c2: [f64; 3]) -> Self {
        Self {
            m: [
                [c0[0], c1[0], c2[0]],
                [c0[1], c1[1], c2[1]],
                [c0[2], c1[2], c2[2]],
            ],
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self {
            m: [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        }
    }

    /// Per-channel gain matrix
    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self {
            m: [[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]],
        }
    }

    /// `M × v`
    #[inline]
    pub const fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Matrix product `self × other`
    #[inline]
    pub const fn multiply(&self, other: &Self) -> Self {
        // rows of the product are rows of self pushed through other
        let t = other.transpose();
        Self {
            m: [
                t.multiply_vec(self.m[0]),
                t.multiply_vec(self.m[1]),
                t.multiply_vec(self.m[2]),
            ],
        }
    }

    #[inline]
    pub const fn transpose(&self) -> Self {
        Self {
            m: [
                [self.m[0][0], self.m[1][0], self.m[2][0]],
                [self.m[0][1], self.m[1][1], self.m[2][1]],
                [self.m[0][2], self.m[1][2], self.m[2][2]],
            ],
        }
    }

    #[inline]
    pub const fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse via the adjugate
    ///
    /// `None` when the determinant is non-finite or negligible next to the
    /// row lengths, or when the inverse itself would not be finite.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        let bound: f64 = self
            .m
            .iter()
            .map(|row| row[0].hypot(row[1]).hypot(row[2]))
            .product();

        if !det.is_finite() || det.abs() <= SINGULAR_RATIO * bound {
            return None;
        }

        let inv = self.adjugate_inverse(det);
        inv.m.iter().flatten().all(|v| v.is_finite()).then_some(inv)
    }

    /// Inverse for matrices known at compile time to be regular.
    ///
    /// Produces bit-identical results to [`Matrix3x3::inverse`].
    pub(crate) const fn inverse_const(&self) -> Self {
        self.adjugate_inverse(self.determinant())
    }

    /// Adjugate matrix divided by the determinant
    const fn adjugate_inverse(&self, det: f64) -> Self {
        let inv_det = 1.0 / det;
        let m = &self.m;

        Self {
            m: [
                [
                    (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                    (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                    (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
                ],
                [
                    (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                    (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                    (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
                ],
                [
                    (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                    (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                    (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
                ],
            ],
        }
    }

    /// Every element multiplied by `s`
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self {
            m: self.m.map(|row| row.map(|v| v * s)),
        }
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl IndexMut<usize> for Matrix3x3 {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.m[row]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

impl Mul<&[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: &[f64; 3]) -> Self::Output {
        self.multiply_vec(*rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_identity() {
        let id = Matrix3x3::identity();
        let v = [1.0, 2.0, 3.0];
        let result = id.multiply_vec(v);
        assert_eq!(result, v);
    }

    #[test]
    fn test_from_columns() {
        let m = Matrix3x3::from_columns([1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]);
        let expected = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m, expected);
    }

    #[test]
    fn test_multiply_matrices() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let id = Matrix3x3::identity();

        assert!(a.multiply(&id).approx_eq(&a, EPSILON));
        assert!(id.multiply(&a).approx_eq(&a, EPSILON));
    }

    #[test]
    fn test_transpose() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let at = a.transpose();
        let expected = Matrix3x3::new([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);
        assert!(at.approx_eq(&expected, EPSILON));
        assert!(at.transpose().approx_eq(&a, EPSILON));
    }

    #[test]
    fn test_determinant() {
        assert!((Matrix3x3::identity().determinant() - 1.0).abs() < EPSILON);

        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert!((a.determinant() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_inverse() {
        let id = Matrix3x3::identity();
        let id_inv = id.inverse().unwrap();
        assert!(id_inv.approx_eq(&id, EPSILON));

        // A × A⁻¹ = I
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let a_inv = a.inverse().unwrap();
        assert!(a.multiply(&a_inv).approx_eq(&id, 1e-9));
    }

    #[test]
    fn test_inverse_const_matches_runtime() {
        let a = Matrix3x3::new([
            [0.8951, 0.2664, -0.1614],
            [-0.7502, 1.7135, 0.0367],
            [0.0389, -0.0685, 1.0296],
        ]);
        assert_eq!(a.inverse().unwrap(), a.inverse_const());
    }

    #[test]
    fn test_singular_matrix() {
        // row 3 = row 1 + row 2
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        assert!(singular.inverse().is_none());
        assert!(Matrix3x3::zero().inverse().is_none());
    }

    #[test]
    fn test_small_scale_matrix_inverts() {
        let bradford = Matrix3x3::new([
            [0.8951, 0.2664, -0.1614],
            [-0.7502, 1.7135, 0.0367],
            [0.0389, -0.0685, 1.0296],
        ]);
        let small = bradford.scale(1e-5);
        assert!(small.determinant().abs() < 1e-14);

        let inv = small.inverse().unwrap();
        assert!(small.multiply(&inv).is_identity(1e-12));
        assert!(inv.approx_eq(&bradford.inverse().unwrap().scale(1e5), 1e-6));

        let tiny = Matrix3x3::diagonal(1e-8, 2e-8, 3e-8);
        assert!(tiny.multiply(&tiny.inverse().unwrap()).is_identity(1e-12));
    }

    #[test]
    fn test_scaled_singular_still_rejected() {
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        assert!(singular.scale(1e-5).inverse().is_none());
        assert!(singular.scale(1e5).inverse().is_none());
    }

    #[test]
    fn test_non_finite_matrix() {
        let mut m = Matrix3x3::identity();
        m[1][1] = f64::NAN;
        assert!(m.inverse().is_none());

        m[1][1] = f64::INFINITY;
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_operator_overloads() {
        let a = Matrix3x3::identity();
        let c = a * Matrix3x3::identity();
        assert!(c.is_identity(EPSILON));

        let v = [1.0, 2.0, 3.0];
        assert_eq!(a * v, v);
        assert_eq!(a * &v, v);
    }

    #[test]
    fn test_scale_and_diagonal() {
        let d = Matrix3x3::diagonal(2.0, 3.0, 4.0);
        assert_eq!(d.multiply_vec([1.0, 1.0, 1.0]), [2.0, 3.0, 4.0]);
        assert_eq!(Matrix3x3::identity().scale(2.0), Matrix3x3::diagonal(2.0, 2.0, 2.0));
    }
}
