use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};

use crate::algebra::vector::{Vector2, Vector3};
use crate::error::ParseError;
use crate::scalar::Scalar;

/// A location in the 2D affine plane, distinct from a displacement.
///
/// Points support only affine arithmetic: point minus point is a vector,
/// point plus or minus a vector is a point. Adding two points or scaling a
/// point is not defined; use [`lerp`] or [`barycentric`] for weighted
/// combinations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

/// A location in 3D affine space, distinct from a displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point2<T> {
    /// Number of coordinates.
    pub const DIM: usize = 2;

    /// Creates a new point.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }
}

impl<T: Scalar> Point3<T> {
    /// Number of coordinates.
    pub const DIM: usize = 3;

    /// Creates a new point.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }
}

/// Linear interpolation between two points: `p1 + s * (p2 - p1)`.
///
/// `s = 0` yields `p1` and `s = 1` yields `p2`. Note that segment
/// evaluation uses the opposite ordering; see
/// [`LineSeg2::evaluate`](crate::geometry::LineSeg2::evaluate).
#[must_use]
pub fn lerp<T, P, V>(p1: P, p2: P, s: T) -> P
where
    T: Scalar,
    P: Copy + Sub<P, Output = V> + Add<V, Output = P>,
    V: Mul<T, Output = V>,
{
    p1 + (p2 - p1) * s
}

/// Barycentric combination over a point triple: `p + f * (q - p) + g * (r - p)`.
#[must_use]
pub fn barycentric<T, P, V>(p: P, q: P, r: P, f: T, g: T) -> P
where
    T: Scalar,
    P: Copy + Sub<P, Output = V> + Add<V, Output = P>,
    V: Mul<T, Output = V>,
{
    p + (q - p) * f + (r - p) * g
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Add<Vector2<T>> for Point2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Vector2<T>) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Scalar> Sub<Vector2<T>> for Point2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Vector2<T>) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Scalar> AddAssign<Vector2<T>> for Point2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2<T>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign<Vector2<T>> for Point2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2<T>) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Vector3<T> {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Vector3<T>) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl<T: Scalar> Sub<Vector3<T>> for Point3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Vector3<T>) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<T: Scalar> AddAssign<Vector3<T>> for Point3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3<T>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign<Vector3<T>> for Point3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3<T>) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Default for Point2<T> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: Scalar> Default for Point3<T> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: Scalar> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl<T: Scalar + FromStr> FromStr for Point2<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, ParseError> {
        let [x, y] = parse_coords(s)?;
        Ok(Self::new(x, y))
    }
}

/// Parses exactly `N` whitespace-separated coordinates.
pub(crate) fn parse_coords<T, const N: usize>(s: &str) -> std::result::Result<[T; N], ParseError>
where
    T: Scalar + FromStr,
{
    let mut coords = [T::zero(); N];
    let mut found = 0;
    for token in s.split_whitespace() {
        if found < N {
            coords[found] = token.parse().map_err(|_| ParseError::InvalidCoordinate {
                token: token.to_owned(),
            })?;
        }
        found += 1;
    }
    if found == N {
        Ok(coords)
    } else {
        Err(ParseError::CoordinateCount {
            expected: N,
            found,
        })
    }
}

impl<T: Scalar> AbsDiffEq for Point2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon) && T::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Point2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl<T: Scalar> AbsDiffEq for Point3<T> {
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

impl<T: Scalar> RelativeEq for Point3<T> {
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
    fn affine_arithmetic() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(4.0, 6.0, 8.0);
        assert_eq!(q - p, Vector3::new(3.0, 4.0, 5.0));
        assert_eq!(p + Vector3::new(1.0, 1.0, 1.0), Point3::new(2.0, 3.0, 4.0));
        assert_eq!(p - Vector3::new(1.0, 2.0, 3.0), Point3::origin());

        let mut m = Point2::new(1.0, 1.0);
        m += Vector2::new(2.0, 0.0);
        m -= Vector2::new(0.0, 1.0);
        assert_eq!(m, Point2::new(3.0, 0.0));
    }

    #[test]
    fn lerp_standard_convention() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(10.0, 20.0);
        assert_eq!(lerp(p1, p2, 0.0), p1);
        assert_eq!(lerp(p1, p2, 1.0), p2);
        assert_abs_diff_eq!(lerp(p1, p2, 0.5), Point2::new(5.0, 10.0));
    }

    #[test]
    fn lerp_in_three_dimensions() {
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(2.0, 4.0, 6.0);
        assert_abs_diff_eq!(lerp(p1, p2, 0.25), Point3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn barycentric_combination() {
        let p = Point2::new(0.0, 0.0);
        let q = Point2::new(1.0, 0.0);
        let r = Point2::new(0.0, 1.0);
        assert_abs_diff_eq!(barycentric(p, q, r, 0.25, 0.5), Point2::new(0.25, 0.5));
        // f = g = 0 stays at the first point.
        assert_eq!(barycentric(p, q, r, 0.0, 0.0), p);
    }

    #[test]
    fn display_round_trip() {
        let p = Point2::new(1.5, -2.25);
        let text = p.to_string();
        assert_eq!(text, "1.5 -2.25");
        assert_eq!(text.parse::<Point2<f64>>().unwrap(), p);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(
            "1.0".parse::<Point2<f64>>(),
            Err(ParseError::CoordinateCount {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            "1.0 2.0 3.0".parse::<Point2<f64>>(),
            Err(ParseError::CoordinateCount {
                expected: 2,
                found: 3
            })
        ));
        assert!(matches!(
            "1.0 abc".parse::<Point2<f64>>(),
            Err(ParseError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn approx_equality() {
        let p = Point3::new(0.1, 0.2, 0.3);
        let q = p + Vector3::new(1e-12, 0.0, -1e-12);
        assert_abs_diff_eq!(p, q);
        assert_abs_diff_eq!(q, p);
    }
}
