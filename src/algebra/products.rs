use std::ops::{Mul, Sub};

use crate::algebra::covector::{CoVector2, CoVector3};
use crate::algebra::matrix::Matrix3;
use crate::algebra::vector::{Vector2, Vector3};
use crate::error::{GeometryError, Result};
use crate::scalar::Scalar;

/// Dot product between directional operands of matching dimension.
///
/// Defined for every vector/co-vector pairing, so callers can contract row
/// and column quantities without converting between the two types.
pub trait Dot<Rhs = Self> {
    /// Scalar type of the product.
    type Output;

    /// Computes the dot product.
    fn dot(self, rhs: Rhs) -> Self::Output;
}

/// Cross product.
///
/// In 3D the result has the same directional type as the operands, from
/// the usual determinant expansion. In 2D the product collapses to its
/// lone z-component and the result is a scalar whose sign gives the
/// winding of the operand pair.
pub trait Cross<Rhs = Self> {
    /// A 3D value, or a scalar in 2D.
    type Output;

    /// Computes the cross product.
    fn cross(self, rhs: Rhs) -> Self::Output;
}

/// Outer and alternating products of two 3D operands, producing a matrix.
pub trait Outer<Rhs = Self> {
    /// Matrix type of the product.
    type Output;

    /// Outer product: entry `(i, j)` is `self[i] * rhs[j]`.
    fn outer(self, rhs: Rhs) -> Self::Output;

    /// Alternating product: the outer product minus its transpose.
    fn alternating(self, rhs: Rhs) -> Self::Output;
}

impl<T: Scalar> Dot for Vector2<T> {
    type Output = T;

    #[inline]
    fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl<T: Scalar> Dot<CoVector2<T>> for Vector2<T> {
    type Output = T;

    #[inline]
    fn dot(self, rhs: CoVector2<T>) -> T {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl<T: Scalar> Dot<Vector2<T>> for CoVector2<T> {
    type Output = T;

    #[inline]
    fn dot(self, rhs: Vector2<T>) -> T {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl<T: Scalar> Dot for CoVector2<T> {
    type Output = T;

    #[inline]
    fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl<T: Scalar> Dot for Vector3<T> {
    type Output = T;

    #[inline]
    fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl<T: Scalar> Dot<CoVector3<T>> for Vector3<T> {
    type Output = T;

    #[inline]
    fn dot(self, rhs: CoVector3<T>) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl<T: Scalar> Dot<Vector3<T>> for CoVector3<T> {
    type Output = T;

    #[inline]
    fn dot(self, rhs: Vector3<T>) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl<T: Scalar> Dot for CoVector3<T> {
    type Output = T;

    #[inline]
    fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl<T: Scalar> Cross for Vector3<T> {
    type Output = Self;

    #[inline]
    fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Scalar> Cross for CoVector3<T> {
    type Output = Self;

    #[inline]
    fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Scalar> Cross for Vector2<T> {
    type Output = T;

    #[inline]
    fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl<T: Scalar> Cross for CoVector2<T> {
    type Output = T;

    #[inline]
    fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }
}

fn outer3<T: Scalar>(a: [T; 3], b: [T; 3]) -> Matrix3<T> {
    Matrix3::new(
        a[0] * b[0],
        a[0] * b[1],
        a[0] * b[2],
        a[1] * b[0],
        a[1] * b[1],
        a[1] * b[2],
        a[2] * b[0],
        a[2] * b[1],
        a[2] * b[2],
    )
}

fn alternating3<T: Scalar>(a: [T; 3], b: [T; 3]) -> Matrix3<T> {
    let z = T::zero();
    Matrix3::new(
        z,
        a[0] * b[1] - a[1] * b[0],
        a[0] * b[2] - a[2] * b[0],
        a[1] * b[0] - a[0] * b[1],
        z,
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[2] * b[1] - a[1] * b[2],
        z,
    )
}

impl<T: Scalar> Outer for Vector3<T> {
    type Output = Matrix3<T>;

    fn outer(self, rhs: Self) -> Matrix3<T> {
        outer3([self.x, self.y, self.z], [rhs.x, rhs.y, rhs.z])
    }

    fn alternating(self, rhs: Self) -> Matrix3<T> {
        alternating3([self.x, self.y, self.z], [rhs.x, rhs.y, rhs.z])
    }
}

impl<T: Scalar> Outer<CoVector3<T>> for Vector3<T> {
    type Output = Matrix3<T>;

    fn outer(self, rhs: CoVector3<T>) -> Matrix3<T> {
        outer3([self.x, self.y, self.z], [rhs.x, rhs.y, rhs.z])
    }

    fn alternating(self, rhs: CoVector3<T>) -> Matrix3<T> {
        alternating3([self.x, self.y, self.z], [rhs.x, rhs.y, rhs.z])
    }
}

impl<T: Scalar> Outer<Vector3<T>> for CoVector3<T> {
    type Output = Matrix3<T>;

    fn outer(self, rhs: Vector3<T>) -> Matrix3<T> {
        outer3([self.x, self.y, self.z], [rhs.x, rhs.y, rhs.z])
    }

    fn alternating(self, rhs: Vector3<T>) -> Matrix3<T> {
        alternating3([self.x, self.y, self.z], [rhs.x, rhs.y, rhs.z])
    }
}

impl<T: Scalar> Outer for CoVector3<T> {
    type Output = Matrix3<T>;

    fn outer(self, rhs: Self) -> Matrix3<T> {
        outer3([self.x, self.y, self.z], [rhs.x, rhs.y, rhs.z])
    }

    fn alternating(self, rhs: Self) -> Matrix3<T> {
        alternating3([self.x, self.y, self.z], [rhs.x, rhs.y, rhs.z])
    }
}

/// Projection of `v2` onto `v1`: `(dot(v1, v2) / dot(v1, v1)) * v1`.
///
/// # Errors
///
/// Returns an error if `v1` has near-zero length.
pub fn projection<T, V>(v1: V, v2: V) -> Result<V>
where
    T: Scalar,
    V: Copy + Dot<V, Output = T> + Mul<T, Output = V>,
{
    let denom = v1.dot(v1);
    if denom.near_zero() {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v1 * (v1.dot(v2) / denom))
}

/// Rejection of `v2` by `v1`: the component of `v2` orthogonal to `v1`.
///
/// # Errors
///
/// Returns an error if `v1` has near-zero length.
pub fn rejection<T, V>(v1: V, v2: V) -> Result<V>
where
    T: Scalar,
    V: Copy + Dot<V, Output = T> + Mul<T, Output = V> + Sub<V, Output = V>,
{
    Ok(v2 - projection(v1, v2)?)
}
