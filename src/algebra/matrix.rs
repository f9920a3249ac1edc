use std::ops::{Add, Index, IndexMut, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::algebra::covector::{CoVector2, CoVector3};
use crate::algebra::point::{Point2, Point3};
use crate::algebra::vector::{Vector2, Vector3};
use crate::error::{AlgebraError, Result};
use crate::scalar::Scalar;

/// A 3x3 matrix in row-major order.
///
/// Plays two roles: a direct linear map on 3D vectors, co-vectors, and
/// points, and a projective (homogeneous) transform on 2D values lifted
/// with an implicit third coordinate of 1. Entries are addressed as
/// `m[(row, col)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3<T> {
    m: [[T; 3]; 3],
}

impl<T: Scalar> Matrix3<T> {
    /// Creates a matrix from nine entries in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[must_use]
    pub fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) -> Self {
        Self {
            m: [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]],
        }
    }

    /// The identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        let o = T::one();
        let z = T::zero();
        Self::new(o, z, z, z, o, z, z, z, o)
    }

    /// The all-zero matrix.
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            m: [[T::zero(); 3]; 3],
        }
    }

    /// A homogeneous 2D translation by `v`.
    #[must_use]
    pub fn translation2(v: Vector2<T>) -> Self {
        let o = T::one();
        let z = T::zero();
        Self::new(o, z, v.x, z, o, v.y, z, z, o)
    }

    /// A homogeneous 2D counter-clockwise rotation by `angle` radians.
    #[must_use]
    pub fn rotation2(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let o = T::one();
        let z = T::zero();
        Self::new(cos, -sin, z, sin, cos, z, z, z, o)
    }

    /// A homogeneous 2D axis-aligned scaling.
    #[must_use]
    pub fn scaling2(sx: T, sy: T) -> Self {
        let o = T::one();
        let z = T::zero();
        Self::new(sx, z, z, z, sy, z, z, z, o)
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(self) -> Self {
        Self::new(
            self.m[0][0],
            self.m[1][0],
            self.m[2][0],
            self.m[0][1],
            self.m[1][1],
            self.m[2][1],
            self.m[0][2],
            self.m[1][2],
            self.m[2][2],
        )
    }

    /// Returns the determinant.
    #[must_use]
    pub fn determinant(self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the inverse, computed from the adjugate.
    ///
    /// # Errors
    ///
    /// Returns an error if the determinant is within tolerance of zero.
    pub fn try_inverse(self) -> Result<Self> {
        let det = self.determinant();
        if det.near_zero() {
            return Err(AlgebraError::SingularMatrix.into());
        }
        let inv = T::one() / det;
        let m = &self.m;
        Ok(Self::new(
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv,
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv,
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv,
        ))
    }

    /// Divides every entry by `s`.
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude of `s` is within tolerance of zero.
    pub fn try_div(self, s: T) -> Result<Self> {
        if s.near_zero() {
            return Err(AlgebraError::DivisionByZero.into());
        }
        Ok(self * (T::one() / s))
    }

    /// Applies the matrix to a 2D point as a projective transform.
    ///
    /// The point is lifted to `(x, y, 1)`, multiplied, and the first two
    /// output coordinates are divided through by the third.
    ///
    /// # Errors
    ///
    /// Returns an error if the homogeneous third coordinate of the result
    /// is within tolerance of zero.
    pub fn transform_point2(self, p: Point2<T>) -> Result<Point2<T>> {
        let m = &self.m;
        let x = p.x * m[0][0] + p.y * m[0][1] + m[0][2];
        let y = p.x * m[1][0] + p.y * m[1][1] + m[1][2];
        let w = p.x * m[2][0] + p.y * m[2][1] + m[2][2];
        if w.near_zero() {
            return Err(AlgebraError::ProjectiveDivide.into());
        }
        Ok(Point2::new(x / w, y / w))
    }
}

impl<T> Index<(usize, usize)> for Matrix3<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.m[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix3<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.m[row][col]
    }
}

impl<T: Scalar> Add for Matrix3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = self.m[i][j] + rhs.m[i][j];
            }
        }
        out
    }
}

impl<T: Scalar> Sub for Matrix3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = self.m[i][j] - rhs.m[i][j];
            }
        }
        out
    }
}

impl<T: Scalar> Mul<T> for Matrix3<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        let mut out = Self::zeros();
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = self.m[i][j] * s;
            }
        }
        out
    }
}

impl Mul<Matrix3<f32>> for f32 {
    type Output = Matrix3<f32>;

    fn mul(self, rhs: Matrix3<f32>) -> Matrix3<f32> {
        rhs * self
    }
}

impl Mul<Matrix3<f64>> for f64 {
    type Output = Matrix3<f64>;

    fn mul(self, rhs: Matrix3<f64>) -> Matrix3<f64> {
        rhs * self
    }
}

impl<T: Scalar> Mul for Matrix3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = self.m[i][0] * rhs.m[0][j]
                    + self.m[i][1] * rhs.m[1][j]
                    + self.m[i][2] * rhs.m[2][j];
            }
        }
        out
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            v.x * self.m[0][0] + v.y * self.m[0][1] + v.z * self.m[0][2],
            v.x * self.m[1][0] + v.y * self.m[1][1] + v.z * self.m[1][2],
            v.x * self.m[2][0] + v.y * self.m[2][1] + v.z * self.m[2][2],
        )
    }
}

impl<T: Scalar> Mul<Point3<T>> for Matrix3<T> {
    type Output = Point3<T>;

    fn mul(self, p: Point3<T>) -> Point3<T> {
        Point3::new(
            p.x * self.m[0][0] + p.y * self.m[0][1] + p.z * self.m[0][2],
            p.x * self.m[1][0] + p.y * self.m[1][1] + p.z * self.m[1][2],
            p.x * self.m[2][0] + p.y * self.m[2][1] + p.z * self.m[2][2],
        )
    }
}

impl<T: Scalar> Mul<Matrix3<T>> for CoVector3<T> {
    type Output = Self;

    fn mul(self, m: Matrix3<T>) -> Self {
        Self::new(
            self.x * m.m[0][0] + self.y * m.m[1][0] + self.z * m.m[2][0],
            self.x * m.m[0][1] + self.y * m.m[1][1] + self.z * m.m[2][1],
            self.x * m.m[0][2] + self.y * m.m[1][2] + self.z * m.m[2][2],
        )
    }
}

impl<T: Scalar> Mul<Vector2<T>> for Matrix3<T> {
    type Output = Vector2<T>;

    fn mul(self, v: Vector2<T>) -> Vector2<T> {
        // Lifted to (x, y, 1); the third output coordinate is dropped
        // without dividing.
        Vector2::new(
            v.x * self.m[0][0] + v.y * self.m[0][1] + self.m[0][2],
            v.x * self.m[1][0] + v.y * self.m[1][1] + self.m[1][2],
        )
    }
}

impl<T: Scalar> Mul<Matrix3<T>> for CoVector2<T> {
    type Output = Self;

    fn mul(self, m: Matrix3<T>) -> Self {
        // Lifted to the row (x, y, 1); the third output coordinate is
        // dropped without dividing.
        Self::new(
            self.x * m.m[0][0] + self.y * m.m[1][0] + m.m[2][0],
            self.x * m.m[0][1] + self.y * m.m[1][1] + m.m[2][1],
        )
    }
}

impl<T: Scalar> AbsDiffEq for Matrix3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if !T::abs_diff_eq(&self.m[i][j], &other.m[i][j], epsilon) {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: Scalar> RelativeEq for Matrix3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if !T::relative_eq(&self.m[i][j], &other.m[i][j], epsilon, max_relative) {
                    return false;
                }
            }
        }
        true
    }
}
