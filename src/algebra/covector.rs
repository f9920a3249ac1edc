use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::algebra::impl_left_scalar_mul;
use crate::error::{AlgebraError, GeometryError, Result};
use crate::scalar::Scalar;

/// A 2D co-vector: the row-form dual of [`Vector2`](crate::algebra::Vector2).
///
/// Co-vectors transform against a matrix from the left, which is what keeps
/// normals and gradients correct under non-uniform maps. Keeping them as a
/// separate type stops row and column quantities from being mixed by
/// accident; arithmetic is only defined between compatible operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoVector2<T> {
    pub x: T,
    pub y: T,
}

/// A 3D co-vector: the row-form dual of [`Vector3`](crate::algebra::Vector3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoVector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> CoVector2<T> {
    /// Number of coordinates.
    pub const DIM: usize = 2;

    /// Creates a new co-vector.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a zero co-vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Returns the squared length.
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Returns the Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a unit-length copy of this co-vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is within tolerance of zero.
    pub fn normalized(self) -> Result<Self> {
        let len = self.length();
        if len.near_zero() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self * (T::one() / len))
    }

    /// Divides every coordinate by `s`.
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
}

impl<T: Scalar> CoVector3<T> {
    /// Number of coordinates.
    pub const DIM: usize = 3;

    /// Creates a new co-vector.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a zero co-vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Returns the squared length.
    #[inline]
    #[must_use]
    pub fn length_squared(self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns a unit-length copy of this co-vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is within tolerance of zero.
    pub fn normalized(self) -> Result<Self> {
        let len = self.length();
        if len.near_zero() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self * (T::one() / len))
    }

    /// Divides every coordinate by `s`.
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
}

impl<T: Scalar> Add for CoVector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Scalar> Sub for CoVector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Scalar> Neg for CoVector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Scalar> Mul<T> for CoVector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl<T: Scalar> AddAssign for CoVector2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for CoVector2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Default for CoVector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> Add for CoVector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl<T: Scalar> Sub for CoVector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<T: Scalar> Neg for CoVector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Scalar> Mul<T> for CoVector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl<T: Scalar> AddAssign for CoVector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for CoVector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Default for CoVector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl_left_scalar_mul!(f32 => CoVector2 { x, y });
impl_left_scalar_mul!(f64 => CoVector2 { x, y });
impl_left_scalar_mul!(f32 => CoVector3 { x, y, z });
impl_left_scalar_mul!(f64 => CoVector3 { x, y, z });

impl<T: Scalar> AbsDiffEq for CoVector2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon) && T::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl<T: Scalar> RelativeEq for CoVector2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl<T: Scalar> AbsDiffEq for CoVector3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon)
            && T::abs_diff_eq(&self.y, &other.y, epsilon)
            && T::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl<T: Scalar> RelativeEq for CoVector3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && T::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let a = CoVector3::new(1.0, 2.0, 3.0);
        let b = CoVector3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, CoVector3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, CoVector3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(-a, CoVector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn normalize_and_divide() {
        let cv = CoVector2::new(0.0, 5.0);
        assert_abs_diff_eq!(cv.normalized().unwrap(), CoVector2::new(0.0, 1.0));
        assert_abs_diff_eq!(cv.try_div(2.0).unwrap(), CoVector2::new(0.0, 2.5));
        assert!(CoVector2::<f64>::zero().normalized().is_err());
        assert!(cv.try_div(0.0).is_err());
    }
}
