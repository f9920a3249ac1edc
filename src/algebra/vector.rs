use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::algebra::impl_left_scalar_mul;
use crate::error::{AlgebraError, GeometryError, Result};
use crate::scalar::Scalar;

/// A 2D vector: a free direction or displacement in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// A 3D vector: a free direction or displacement in space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector2<T> {
    /// Number of coordinates.
    pub const DIM: usize = 2;

    /// Creates a new vector.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self {
            x: T::one(),
            y: T::zero(),
        }
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self {
            x: T::zero(),
            y: T::one(),
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

    /// Returns a unit-length copy of this vector.
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

impl<T: Scalar> Vector3<T> {
    /// Number of coordinates.
    pub const DIM: usize = 3;

    /// Creates a new vector.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self {
            x: T::one(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self {
            x: T::zero(),
            y: T::one(),
            z: T::zero(),
        }
    }

    /// Creates a unit vector along the Z axis.
    #[inline]
    pub fn unit_z() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::one(),
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

    /// Returns a unit-length copy of this vector.
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

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> Add for Vector3<T> {
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

impl<T: Scalar> Sub for Vector3<T> {
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

impl<T: Scalar> Neg for Vector3<T> {
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

impl<T: Scalar> Mul<T> for Vector3<T> {
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

impl<T: Scalar> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl_left_scalar_mul!(f32 => Vector2 { x, y });
impl_left_scalar_mul!(f64 => Vector2 { x, y });
impl_left_scalar_mul!(f32 => Vector3 { x, y, z });
impl_left_scalar_mul!(f64 => Vector3 { x, y, z });

impl<T: Scalar> AbsDiffEq for Vector2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon) && T::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Vector2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl<T: Scalar> AbsDiffEq for Vector3<T> {
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

impl<T: Scalar> RelativeEq for Vector3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && T::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}
