use std::fmt;
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};

use crate::algebra::point::parse_coords;
use crate::algebra::{Cross, Dot, Point2};
use crate::error::{GeometryError, ParseError, Result};
use crate::geometry::line::Line2;
use crate::scalar::Scalar;

/// A bounded 2D line segment defined by two endpoints.
///
/// The parametric form is `evaluate(s) = s * p1 + (1 - s) * p2`, so `s = 0`
/// yields `p2` and `s = 1` yields `p1`. This is the reverse of the usual
/// lerp ordering and is kept deliberately; every parameter produced by the
/// queries below lives in this convention.
///
/// Degenerate segments (`p1 == p2`) may be constructed; queries on them
/// return documented sentinels instead of failing (see [`closest_point`]).
///
/// [`closest_point`]: LineSeg2::closest_point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSeg2<T> {
    p1: Point2<T>,
    p2: Point2<T>,
}

/// Result of projecting a point onto a segment, clipped at the endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPoint<T> {
    /// The closest point on the segment.
    pub point: Point2<T>,
    /// The parameter of the closest point, clipped to `[0, 1]`.
    pub parameter: T,
    /// The distance from the query point to the closest point.
    pub distance: T,
    /// Whether the unclipped projection onto the infinite line already
    /// lies within the segment.
    pub on_segment: bool,
}

/// Result of a segment-segment intersection.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<T> {
    /// The intersection point, computed from the first segment's
    /// parameterization.
    pub point: Point2<T>,
    /// Parameter on the first segment, in `[0, 1]`.
    pub s: T,
    /// Parameter on the second segment, in `[0, 1]`.
    pub t: T,
}

impl<T: Scalar> LineSeg2<T> {
    /// Number of coordinates per endpoint.
    pub const DIM: usize = 2;

    /// Creates a segment from two endpoints.
    #[inline]
    pub fn new(p1: Point2<T>, p2: Point2<T>) -> Self {
        Self { p1, p2 }
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn p1(&self) -> Point2<T> {
        self.p1
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn p2(&self) -> Point2<T> {
        self.p2
    }

    /// Returns the point at parameter `s`: `s * p1 + (1 - s) * p2`.
    ///
    /// `s = 0` yields `p2` and `s = 1` yields `p1`.
    #[must_use]
    pub fn evaluate(&self, s: T) -> Point2<T> {
        self.p2 + (self.p1 - self.p2) * s
    }

    /// Returns the Euclidean distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> T {
        (self.p2 - self.p1).length()
    }

    /// Returns `true` when the segment's direction has a near-zero x
    /// component.
    #[must_use]
    pub fn vertical(&self) -> bool {
        (self.p2.x - self.p1.x).near_zero()
    }

    /// Returns `true` when the segment's direction has a near-zero y
    /// component.
    #[must_use]
    pub fn horizontal(&self) -> bool {
        (self.p2.y - self.p1.y).near_zero()
    }

    /// Returns the rise over run of the segment's direction.
    ///
    /// # Errors
    ///
    /// Returns an error for a vertical segment, whose slope is undefined.
    /// A degenerate segment is vertical by this definition.
    pub fn slope(&self) -> Result<T> {
        if self.vertical() {
            return Err(GeometryError::VerticalSlope.into());
        }
        Ok((self.p2.y - self.p1.y) / (self.p2.x - self.p1.x))
    }

    /// Returns `true` when the two segments' directions are parallel
    /// within tolerance.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        (self.p2 - self.p1).cross(other.p2 - other.p1).near_zero()
    }

    /// Returns `true` when the two segments' directions are perpendicular
    /// within tolerance.
    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Self) -> bool {
        (self.p2 - self.p1).dot(other.p2 - other.p1).near_zero()
    }

    /// Projects `pt` onto the segment, clipping at the endpoints.
    ///
    /// The result carries the clipped closest point, its parameter in the
    /// [`evaluate`](Self::evaluate) convention, the distance from `pt` to
    /// that point, and whether the unclipped projection onto the infinite
    /// line already lies within the segment.
    ///
    /// Degenerate segment: the closest point is `p1`, the parameter is 0,
    /// the distance is `|pt - p1|`, and `on_segment` is `true`.
    #[must_use]
    pub fn closest_point(&self, pt: Point2<T>) -> ClosestPoint<T> {
        let dir = self.p1 - self.p2;
        let len_sq = dir.length_squared();
        if len_sq.near_zero() {
            return ClosestPoint {
                point: self.p1,
                parameter: T::zero(),
                distance: (pt - self.p1).length(),
                on_segment: true,
            };
        }

        let raw = (pt - self.p2).dot(dir) / len_sq;
        let parameter = raw.max(T::zero()).min(T::one());
        let point = self.evaluate(parameter);
        ClosestPoint {
            point,
            parameter,
            distance: (pt - point).length(),
            on_segment: raw >= -T::EPS && raw <= T::one() + T::EPS,
        }
    }

    /// Returns the distance from `pt` to the closest point on the segment.
    #[must_use]
    pub fn distance_to(&self, pt: Point2<T>) -> T {
        self.closest_point(pt).distance
    }

    /// Returns the closest point on the segment to `pt`.
    #[must_use]
    pub fn project(&self, pt: Point2<T>) -> Point2<T> {
        self.closest_point(pt).point
    }

    /// Returns the clipped parameter of the closest point to `pt`.
    #[must_use]
    pub fn projected_parameter(&self, pt: Point2<T>) -> T {
        self.closest_point(pt).parameter
    }

    /// Returns `true` when `pt` lies on the segment within tolerance.
    #[must_use]
    pub fn contains_point(&self, pt: Point2<T>) -> bool {
        self.distance_to(pt).near_zero()
    }

    /// Intersects two bounded segments.
    ///
    /// Solves for the parameter pair `(s, t)` such that
    /// `self.evaluate(s) == other.evaluate(t)`. Returns `None` when the
    /// directions are parallel within tolerance (including collinear and
    /// degenerate inputs) or when either parameter falls outside `[0, 1]`.
    /// Endpoint touches count as intersections; the returned parameters
    /// are clamped to `[0, 1]`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Intersection<T>> {
        let da = self.p1 - self.p2;
        let db = other.p1 - other.p2;

        let cross = da.cross(db);
        if cross.near_zero() {
            return None;
        }

        let delta = other.p2 - self.p2;
        let s = delta.cross(db) / cross;
        let t = delta.cross(da) / cross;

        // Epsilon-inclusive window so endpoint touches register.
        let eps = T::EPS;
        if s < -eps || s > T::one() + eps || t < -eps || t > T::one() + eps {
            return None;
        }

        let s = s.max(T::zero()).min(T::one());
        let t = t.max(T::zero()).min(T::one());
        Some(Intersection {
            point: self.evaluate(s),
            s,
            t,
        })
    }

    /// Constructs the perpendicular segment from this segment's line to
    /// `pt`.
    ///
    /// The new `p1` is the unclipped foot of the perpendicular from `pt`
    /// onto the infinite line through the segment (which may lie beyond the
    /// endpoints); the new `p2` is `pt` itself. Degenerate segment: the
    /// foot falls back to `p1`.
    #[must_use]
    pub fn perpendicular(&self, pt: Point2<T>) -> Self {
        let dir = self.p1 - self.p2;
        let len_sq = dir.length_squared();
        let foot = if len_sq.near_zero() {
            self.p1
        } else {
            self.evaluate((pt - self.p2).dot(dir) / len_sq)
        };
        Self::new(foot, pt)
    }

    /// Constructs the parallel segment starting at `pt`.
    ///
    /// The new `p1` is `pt` and the new `p2` is `pt + (p2 - p1)`, a
    /// translated copy of this segment.
    #[must_use]
    pub fn parallel(&self, pt: Point2<T>) -> Self {
        Self::new(pt, pt + (self.p2 - self.p1))
    }

    /// Returns the infinite line through the segment, directed from `p1`
    /// to `p2`.
    ///
    /// # Errors
    ///
    /// Returns an error for a degenerate segment.
    pub fn to_line(&self) -> Result<Line2<T>> {
        Line2::from_points(self.p1, self.p2)
    }
}

/// The unit segment from the origin to `(0, 1)`.
impl<T: Scalar> Default for LineSeg2<T> {
    fn default() -> Self {
        Self::new(Point2::origin(), Point2::new(T::zero(), T::one()))
    }
}

impl<T: Scalar> fmt::Display for LineSeg2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.p1, self.p2)
    }
}

impl<T: Scalar + FromStr> FromStr for LineSeg2<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, ParseError> {
        let [x1, y1, x2, y2] = parse_coords(s)?;
        Ok(Self::new(Point2::new(x1, y1), Point2::new(x2, y2)))
    }
}

impl<T: Scalar> AbsDiffEq for LineSeg2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.p1.abs_diff_eq(&other.p1, epsilon) && self.p2.abs_diff_eq(&other.p2, epsilon)
    }
}

impl<T: Scalar> RelativeEq for LineSeg2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.p1.relative_eq(&other.p1, epsilon, max_relative)
            && self.p2.relative_eq(&other.p2, epsilon, max_relative)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::algebra::Vector2;
    use crate::error::{GeomatError, GeometryError};

    use super::*;

    fn horizontal_seg() -> LineSeg2<f64> {
        LineSeg2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0))
    }

    #[test]
    fn evaluate_uses_reversed_convention() {
        // s = 0 yields p2 and s = 1 yields p1; regression-pinned so the
        // parameterization is never "fixed" into the lerp ordering.
        let seg = horizontal_seg();
        assert_eq!(seg.evaluate(0.0), seg.p2());
        assert_eq!(seg.evaluate(1.0), seg.p1());
        assert_abs_diff_eq!(seg.evaluate(0.5), Point2::new(5.0, 0.0));
    }

    #[test]
    fn length_and_orientation() {
        let seg = horizontal_seg();
        assert_abs_diff_eq!(seg.length(), 10.0);
        assert!(seg.horizontal());
        assert!(!seg.vertical());
    }

    #[test]
    fn slope_of_vertical_segment_is_undefined() {
        let seg = LineSeg2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 1.0));
        assert_abs_diff_eq!(seg.slope().unwrap(), 0.5);

        let vertical = LineSeg2::new(Point2::new(3.0, 0.0), Point2::new(3.0, 5.0));
        assert!(vertical.vertical());
        assert!(matches!(
            vertical.slope(),
            Err(GeomatError::Geometry(GeometryError::VerticalSlope))
        ));
    }

    #[test]
    fn closest_point_interior() {
        let seg = horizontal_seg();
        let result = seg.closest_point(Point2::new(5.0, 3.0));
        assert_abs_diff_eq!(result.point, Point2::new(5.0, 0.0));
        assert_abs_diff_eq!(result.parameter, 0.5);
        assert_abs_diff_eq!(result.distance, 3.0);
        assert!(result.on_segment);
    }

    #[test]
    fn closest_point_clips_past_the_ends() {
        let seg = horizontal_seg();

        // Beyond p2, which sits at parameter 0.
        let past_p2 = seg.closest_point(Point2::new(15.0, 0.0));
        assert_abs_diff_eq!(past_p2.point, Point2::new(10.0, 0.0));
        assert_abs_diff_eq!(past_p2.parameter, 0.0);
        assert_abs_diff_eq!(past_p2.distance, 5.0);
        assert!(!past_p2.on_segment);

        // Beyond p1, which sits at parameter 1.
        let past_p1 = seg.closest_point(Point2::new(-3.0, 4.0));
        assert_abs_diff_eq!(past_p1.point, Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(past_p1.parameter, 1.0);
        assert_abs_diff_eq!(past_p1.distance, 5.0);
        assert!(!past_p1.on_segment);
    }

    #[test]
    fn closest_point_on_degenerate_segment() {
        let p = Point2::new(1.0, 2.0);
        let seg = LineSeg2::new(p, p);
        let result = seg.closest_point(Point2::new(4.0, 6.0));
        assert_eq!(result.point, p);
        assert_abs_diff_eq!(result.parameter, 0.0);
        assert_abs_diff_eq!(result.distance, 5.0);
        assert!(result.on_segment);
        assert_abs_diff_eq!(seg.length(), 0.0);
    }

    #[test]
    fn projection_wrappers() {
        let seg = horizontal_seg();
        let pt = Point2::new(7.0, -2.0);
        assert_abs_diff_eq!(seg.distance_to(pt), 2.0);
        assert_abs_diff_eq!(seg.project(pt), Point2::new(7.0, 0.0));
        assert_abs_diff_eq!(seg.projected_parameter(pt), 0.7);
        assert!(seg.contains_point(Point2::new(2.0, 0.0)));
        assert!(!seg.contains_point(pt));
    }

    #[test]
    fn intersect_crossing_segments() {
        let a = horizontal_seg();
        let b = LineSeg2::new(Point2::new(5.0, -5.0), Point2::new(5.0, 5.0));
        let hit = a.intersect(&b).unwrap();
        assert_abs_diff_eq!(hit.point, Point2::new(5.0, 0.0));
        assert_abs_diff_eq!(hit.s, 0.5);
        assert_abs_diff_eq!(hit.t, 0.5);
        // Both parameterizations name the same point.
        assert_abs_diff_eq!(a.evaluate(hit.s), b.evaluate(hit.t));
    }

    #[test]
    fn intersect_parallel_segments_is_none() {
        let a = horizontal_seg();
        let b = LineSeg2::new(Point2::new(0.0, 1.0), Point2::new(10.0, 1.0));
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn intersect_respects_segment_bounds() {
        // The infinite lines cross at (20, 0), outside both segments.
        let a = horizontal_seg();
        let b = LineSeg2::new(Point2::new(20.0, -5.0), Point2::new(20.0, 5.0));
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn intersect_at_shared_endpoint() {
        let a = horizontal_seg();
        let b = LineSeg2::new(Point2::new(10.0, 0.0), Point2::new(10.0, 10.0));
        let hit = a.intersect(&b).unwrap();
        assert_abs_diff_eq!(hit.point, Point2::new(10.0, 0.0));
        assert_abs_diff_eq!(hit.s, 0.0);
        assert_abs_diff_eq!(hit.t, 1.0);
    }

    #[test]
    fn intersect_degenerate_segment_is_none() {
        let a = horizontal_seg();
        let p = Point2::new(5.0, 0.0);
        assert!(a.intersect(&LineSeg2::new(p, p)).is_none());
    }

    #[test]
    fn derived_parallel_segment() {
        let seg = horizontal_seg();
        let shifted = seg.parallel(Point2::new(0.0, 5.0));
        assert_eq!(shifted.p1(), Point2::new(0.0, 5.0));
        assert_eq!(shifted.p2(), Point2::new(10.0, 5.0));
        assert!(seg.is_parallel_to(&shifted));
        assert!(!seg.is_perpendicular_to(&shifted));
    }

    #[test]
    fn derived_perpendicular_segment() {
        let seg = horizontal_seg();
        let pt = Point2::new(3.0, 7.0);
        let dropped = seg.perpendicular(pt);
        assert_abs_diff_eq!(dropped.p1(), Point2::new(3.0, 0.0));
        assert_eq!(dropped.p2(), pt);
        assert!(seg.is_perpendicular_to(&dropped));

        // The foot may land beyond the endpoints but stays on the line.
        let outside = seg.perpendicular(Point2::new(15.0, 2.0));
        assert_abs_diff_eq!(outside.p1(), Point2::new(15.0, 0.0));
        assert!(seg.to_line().unwrap().contains_point(outside.p1()));
    }

    #[test]
    fn perpendicular_of_degenerate_segment_anchors_at_p1() {
        let p = Point2::new(1.0, 1.0);
        let seg = LineSeg2::new(p, p);
        let dropped = seg.perpendicular(Point2::new(4.0, 5.0));
        assert_eq!(dropped.p1(), p);
        assert_eq!(dropped.p2(), Point2::new(4.0, 5.0));
    }

    #[test]
    fn to_line_rejects_degenerate_segment() {
        let seg = horizontal_seg();
        let line = seg.to_line().unwrap();
        assert_eq!(line.origin(), seg.p1());
        assert_abs_diff_eq!(line.direction(), Vector2::unit_x());

        let p = Point2::new(2.0, 3.0);
        assert!(LineSeg2::new(p, p).to_line().is_err());
    }

    #[test]
    fn default_is_the_unit_segment() {
        let seg = LineSeg2::<f64>::default();
        assert_eq!(seg.p1(), Point2::new(0.0, 0.0));
        assert_eq!(seg.p2(), Point2::new(0.0, 1.0));
        assert_abs_diff_eq!(seg.length(), 1.0);
        assert!(seg.vertical());
        assert_eq!(LineSeg2::<f64>::DIM, 2);
    }

    #[test]
    fn display_round_trip() {
        let seg = LineSeg2::new(Point2::new(1.5, -2.0), Point2::new(0.25, 4.0));
        let text = seg.to_string();
        assert_eq!(text, "1.5 -2 0.25 4");
        assert_eq!(text.parse::<LineSeg2<f64>>().unwrap(), seg);

        // Line-separated point records parse the same way.
        let parsed: LineSeg2<f64> = "1.5 -2\n0.25 4".parse().unwrap();
        assert_eq!(parsed, seg);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(
            "1 2 3".parse::<LineSeg2<f64>>(),
            Err(ParseError::CoordinateCount {
                expected: 4,
                found: 3
            })
        ));
        assert!(matches!(
            "1 2 3 x".parse::<LineSeg2<f64>>(),
            Err(ParseError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn single_precision_segment_queries() {
        let seg = LineSeg2::new(Point2::new(0.0_f32, 0.0), Point2::new(10.0, 0.0));
        let result = seg.closest_point(Point2::new(5.0, 3.0));
        assert_abs_diff_eq!(result.point, Point2::new(5.0, 0.0));
        assert_abs_diff_eq!(result.distance, 3.0);
        assert!(result.on_segment);

        let b = LineSeg2::new(Point2::new(5.0_f32, -5.0), Point2::new(5.0, 5.0));
        let hit = seg.intersect(&b).unwrap();
        assert_abs_diff_eq!(hit.point, Point2::new(5.0, 0.0));
    }

    #[test]
    fn approx_equality_of_segments() {
        let a = horizontal_seg();
        let b = LineSeg2::new(Point2::new(1e-12, 0.0), Point2::new(10.0, -1e-12));
        assert_abs_diff_eq!(a, b);
        assert_abs_diff_eq!(b, a);
    }
}
