use crate::algebra::{Cross, Dot, Point2, Vector2};
use crate::error::{GeometryError, Result};
use crate::scalar::Scalar;

/// An infinite 2D line defined by an origin point and a unit direction.
///
/// The parametric form is `P(t) = origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<T> {
    origin: Point2<T>,
    direction: Vector2<T>,
}

impl<T: Scalar> Line2<T> {
    /// Creates a new line from an origin and direction.
    ///
    /// The direction is normalized on construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point2<T>, direction: Vector2<T>) -> Result<Self> {
        Ok(Self {
            origin,
            direction: direction.normalized()?,
        })
    }

    /// Creates the line through two points, directed from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide within tolerance.
    pub fn from_points(a: Point2<T>, b: Point2<T>) -> Result<Self> {
        Self::new(a, b - a)
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> Point2<T> {
        self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> Vector2<T> {
        self.direction
    }

    /// Returns the point at parameter `t`: `origin + t * direction`.
    #[must_use]
    pub fn evaluate(&self, t: T) -> Point2<T> {
        self.origin + self.direction * t
    }

    /// Returns the parameter of the foot of the perpendicular from `pt`.
    #[must_use]
    pub fn projected_parameter(&self, pt: Point2<T>) -> T {
        (pt - self.origin).dot(self.direction)
    }

    /// Returns the foot of the perpendicular from `pt` onto the line.
    #[must_use]
    pub fn project(&self, pt: Point2<T>) -> Point2<T> {
        self.evaluate(self.projected_parameter(pt))
    }

    /// Returns the distance from `pt` to the line.
    #[must_use]
    pub fn distance_to(&self, pt: Point2<T>) -> T {
        (pt - self.project(pt)).length()
    }

    /// Returns `true` when `pt` lies on the line within tolerance.
    #[must_use]
    pub fn contains_point(&self, pt: Point2<T>) -> bool {
        self.distance_to(pt).near_zero()
    }

    /// Returns `true` when the direction has a near-zero x component.
    #[must_use]
    pub fn vertical(&self) -> bool {
        self.direction.x.near_zero()
    }

    /// Returns `true` when the direction has a near-zero y component.
    #[must_use]
    pub fn horizontal(&self) -> bool {
        self.direction.y.near_zero()
    }

    /// Returns the rise over run of the direction.
    ///
    /// # Errors
    ///
    /// Returns an error for a vertical line, whose slope is undefined.
    pub fn slope(&self) -> Result<T> {
        if self.vertical() {
            return Err(GeometryError::VerticalSlope.into());
        }
        Ok(self.direction.y / self.direction.x)
    }

    /// Returns `true` when the two lines are parallel within tolerance.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.direction.cross(other.direction).near_zero()
    }

    /// Returns `true` when the two lines are perpendicular within tolerance.
    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Self) -> bool {
        self.direction.dot(other.direction).near_zero()
    }

    /// Intersects two infinite lines.
    ///
    /// Returns the parameter pair `(t, u)` such that
    /// `self.evaluate(t) == other.evaluate(u)`, or `None` when the lines
    /// are parallel within tolerance.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<(T, T)> {
        let cross = self.direction.cross(other.direction);
        if cross.near_zero() {
            return None;
        }
        let delta = other.origin - self.origin;
        let t = delta.cross(other.direction) / cross;
        let u = delta.cross(self.direction) / cross;
        Some((t, u))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::error::{GeomatError, GeometryError};

    use super::*;

    #[test]
    fn construction_normalizes_direction() {
        let line = Line2::new(Point2::origin(), Vector2::new(3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(line.direction(), Vector2::new(0.6, 0.8));
        assert_abs_diff_eq!(line.evaluate(5.0), Point2::new(3.0, 4.0));
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(matches!(
            Line2::new(Point2::<f64>::origin(), Vector2::zero()),
            Err(GeomatError::Geometry(GeometryError::ZeroVector))
        ));
        let p = Point2::new(1.0, 2.0);
        assert!(Line2::from_points(p, p).is_err());
    }

    #[test]
    fn projection_and_distance() {
        let line = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)).unwrap();
        let pt = Point2::new(4.0, 3.0);
        assert_abs_diff_eq!(line.project(pt), Point2::new(4.0, 0.0));
        assert_abs_diff_eq!(line.projected_parameter(pt), 4.0);
        assert_abs_diff_eq!(line.distance_to(pt), 3.0);
        assert!(line.contains_point(Point2::new(-7.0, 0.0)));
        assert!(!line.contains_point(pt));
    }

    #[test]
    fn slope_and_orientation() {
        let diagonal = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(2.0, 1.0)).unwrap();
        assert_abs_diff_eq!(diagonal.slope().unwrap(), 0.5);
        assert!(!diagonal.vertical());
        assert!(!diagonal.horizontal());

        let vertical = Line2::new(Point2::<f64>::origin(), Vector2::unit_y()).unwrap();
        assert!(vertical.vertical());
        assert!(matches!(
            vertical.slope(),
            Err(GeomatError::Geometry(GeometryError::VerticalSlope))
        ));
    }

    #[test]
    fn parallel_and_perpendicular_predicates() {
        let a = Line2::new(Point2::origin(), Vector2::unit_x()).unwrap();
        let b = Line2::new(Point2::new(0.0, 1.0), Vector2::new(-2.0, 0.0)).unwrap();
        let c = Line2::new(Point2::new(5.0, 0.0), Vector2::unit_y()).unwrap();
        assert!(a.is_parallel_to(&b));
        assert!(a.is_perpendicular_to(&c));
        assert!(!a.is_parallel_to(&c));
        assert!(!a.is_perpendicular_to(&b));
    }

    #[test]
    fn intersection_parameters_agree() {
        let a = Line2::new(Point2::origin(), Vector2::unit_x()).unwrap();
        let b = Line2::new(Point2::new(5.0, -5.0), Vector2::unit_y()).unwrap();
        let (t, u) = a.intersect(&b).unwrap();
        assert_abs_diff_eq!(a.evaluate(t), Point2::new(5.0, 0.0));
        assert_abs_diff_eq!(a.evaluate(t), b.evaluate(u));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = Line2::new(Point2::origin(), Vector2::unit_x()).unwrap();
        let b = Line2::new(Point2::new(0.0, 1.0), Vector2::unit_x()).unwrap();
        assert!(a.intersect(&b).is_none());
    }
}
