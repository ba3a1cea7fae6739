use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) * T::half(), (p0.y + p1.y) * T::half())
}

/// Returns the point on the segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Orientation value of `point` relative to the direction `p0 -> p1`.
///
/// This is the 2D cross product `(p1 - p0) x (point - p0)`: positive if `point` is left of the
/// direction, negative if right and zero if all three points are collinear. Its magnitude is twice
/// the area of the triangle `(p0, p1, point)`.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(2.0, 0.0);
/// assert_eq!(orient2d(p0, p1, Vector2::new(1.0, 1.0)), 2.0);
/// assert_eq!(orient2d(p0, p1, Vector2::new(1.0, -1.0)), -2.0);
/// assert_eq!(orient2d(p0, p1, Vector2::new(5.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn orient2d<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    (p1.x - p0.x) * (point.y - p0.y) - (p1.y - p0.y) * (point.x - p0.x)
}

/// Returns true if `point` is left of a direction vector.
///
/// Direction vector is defined as `p1 - p0`.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// let p0 = Vector2::new(1.0, 1.0);
/// let p1 = Vector2::new(2.0, 2.0);
/// assert!(is_left(p0, p1, Vector2::new(0.0, 1.0)));
/// assert!(!is_left(p0, p1, Vector2::new(1.0, 0.0)));
/// ```
#[inline]
pub fn is_left<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    orient2d(p0, p1, point) > T::zero()
}

/// Shortest distance from `point` to the segment `p0 -> p1`.
///
/// The projection of `point` onto the segment's line is clamped to the segment. A segment collapsed
/// to a single point measures the plain Euclidean distance to `p0`.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(4.0, 0.0);
/// assert_eq!(point_seg_distance(p0, p1, Vector2::new(2.0, 3.0)), 3.0);
/// // beyond the end point the distance is to the end point itself
/// assert_eq!(point_seg_distance(p0, p1, Vector2::new(7.0, 4.0)), 5.0);
/// ```
pub fn point_seg_distance<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let v = p1 - p0;
    let len_sq = v.length_squared();
    if len_sq == T::zero() {
        return (point - p0).length();
    }

    let t = (point - p0).dot(v) / len_sq;
    let t = num_traits::real::Real::min(num_traits::real::Real::max(t, T::zero()), T::one());
    (point - point_from_parametric(p0, p1, t)).length()
}

/// Signed area of the closed polygon described by `points` (shoelace formula).
///
/// Positive for counter clockwise vertex order, negative for clockwise. Fewer than 3 points
/// returns zero.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// let ccw = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(2.0, 2.0),
///     Vector2::new(0.0, 2.0),
/// ];
/// assert_eq!(signed_area(&ccw), 4.0);
/// let cw: Vec<_> = ccw.iter().rev().copied().collect();
/// assert_eq!(signed_area(&cw), -4.0);
/// ```
pub fn signed_area<T>(points: &[Vector2<T>]) -> T
where
    T: Real,
{
    if points.len() < 3 {
        return T::zero();
    }

    let mut double_area = T::zero();
    let mut prev = points[points.len() - 1];
    for &curr in points {
        double_area = double_area + prev.perp_dot(curr);
        prev = curr;
    }

    double_area * T::half()
}

/// Minimum distance between any pair of points, `None` if fewer than 2 points.
pub fn min_pairwise_distance<T>(points: &[Vector2<T>]) -> Option<T>
where
    T: Real,
{
    if points.len() < 2 {
        return None;
    }

    let mut best: Option<T> = None;
    for (i, &p) in points.iter().enumerate() {
        for &q in &points[i + 1..] {
            let d = (p - q).length();
            best = Some(best.map_or(d, |b| num_traits::real::Real::min(b, d)));
        }
    }

    best
}
