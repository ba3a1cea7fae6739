use super::Vector2;
use crate::core::traits::Real;

/// Relation of a point to a directed segment, see [point_segment_relation].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointSegmentRelation {
    /// Point lies on the segment (within tolerance).
    OnSegment,
    /// Point is strictly left of the directed segment.
    Left,
    /// Point is strictly right of the directed segment.
    Right,
    /// Point is exactly collinear with the segment but beyond its extent.
    Collinear,
}

impl PointSegmentRelation {
    /// Integer sign of the relation: `+1` for left, `-1` for right and `0` otherwise.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            PointSegmentRelation::Left => 1,
            PointSegmentRelation::Right => -1,
            PointSegmentRelation::OnSegment | PointSegmentRelation::Collinear => 0,
        }
    }
}

/// Tests if `point` lies on the segment `p0 -> p1` within `eps`.
///
/// The perpendicular distance to the segment's line must be at most `eps` and the projection onto
/// the segment must fall within its extent, widened by `eps * |p1 - p0|` at both ends. A segment
/// shorter than `1e-12` is treated as a point and the test is the Euclidean distance to `p0`.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(4.0, 0.0);
/// assert!(point_on_segment(p0, p1, Vector2::new(2.0, 0.0), 0.0));
/// assert!(point_on_segment(p0, p1, Vector2::new(2.0, 1e-9), 1e-6));
/// assert!(!point_on_segment(p0, p1, Vector2::new(5.0, 0.0), 1e-6));
/// ```
pub fn point_on_segment<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, eps: T) -> bool
where
    T: Real,
{
    let tiny = T::from_const(1e-12);
    let v = p1 - p0;
    let len = v.length();
    let to_point = point - p0;

    if len < tiny {
        return to_point.length() <= eps;
    }

    let dist = v.perp_dot(to_point).abs() / len;
    if dist > eps {
        return false;
    }

    let proj = v.dot(to_point);
    let end_slack = eps * len;
    proj >= -end_slack && proj <= len * len + end_slack
}

/// Classify `point` against the directed segment `p0 -> p1`.
///
/// On segment membership (see [point_on_segment]) takes precedence over the side test.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(2.0, 0.0);
/// let eps = 1e-9;
/// let relation = |x, y| point_segment_relation(p0, p1, Vector2::new(x, y), eps);
/// assert_eq!(relation(1.0, 0.0), PointSegmentRelation::OnSegment);
/// assert_eq!(relation(1.0, 1.0), PointSegmentRelation::Left);
/// assert_eq!(relation(1.0, -1.0), PointSegmentRelation::Right);
/// assert_eq!(relation(3.0, 0.0), PointSegmentRelation::Collinear);
/// assert_eq!(relation(1.0, -1.0).sign(), -1);
/// ```
pub fn point_segment_relation<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    point: Vector2<T>,
    eps: T,
) -> PointSegmentRelation
where
    T: Real,
{
    if point_on_segment(p0, p1, point, eps) {
        return PointSegmentRelation::OnSegment;
    }

    let cross = (p1 - p0).perp_dot(point - p0);
    if cross > T::zero() {
        PointSegmentRelation::Left
    } else if cross < T::zero() {
        PointSegmentRelation::Right
    } else {
        PointSegmentRelation::Collinear
    }
}
