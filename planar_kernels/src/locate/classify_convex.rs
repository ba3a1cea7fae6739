use super::{default_classify_eps, delta_for_points, Classification, Region};
use crate::core::{
    math::{orient2d, point_seg_distance, Vector2},
    traits::Real,
};

/// Loose on segment test used by the point locators: `point` must be (nearly) collinear with the
/// segment and between its end points.
#[inline]
pub(crate) fn on_edge<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, eps: T) -> bool
where
    T: Real,
{
    if orient2d(p0, p1, point).abs() > eps {
        return false;
    }

    (point - p0).dot(point - p1) <= eps
}

/// Classify `point` against a convex counter clockwise polygon using the default epsilon (1e-12).
///
/// See [classify_point_in_convex_eps].
#[inline]
pub fn classify_point_in_convex<T>(hull: &[Vector2<T>], point: Vector2<T>) -> Classification<T>
where
    T: Real,
{
    classify_point_in_convex_eps(hull, point, default_classify_eps())
}

/// Classify `point` against a convex counter clockwise polygon (e.g. a convex hull).
///
/// The point is inside if it is left of (or within `eps` of) every edge. A point on any edge is
/// [Region::Boundary]. A hull with fewer than 3 vertexes encloses nothing and always classifies
/// [Region::Outside].
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// # use planar_kernels::locate::*;
/// let square = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(10.0, 0.0),
///     Vector2::new(10.0, 10.0),
///     Vector2::new(0.0, 10.0),
/// ];
/// let c = classify_point_in_convex(&square, Vector2::new(5.0, 5.0));
/// assert_eq!(c.region, Region::Inside);
/// assert_eq!(c.distance, 5.0);
/// assert_eq!(c.delta, 1.0);
///
/// let c = classify_point_in_convex(&square, Vector2::new(5.0, 0.0));
/// assert_eq!(c.region, Region::Boundary);
///
/// // within delta of the boundary
/// let c = classify_point_in_convex(&square, Vector2::new(5.0, 10.5));
/// assert_eq!(c.region, Region::NearBoundary);
/// ```
pub fn classify_point_in_convex_eps<T>(
    hull: &[Vector2<T>],
    point: Vector2<T>,
    eps: T,
) -> Classification<T>
where
    T: Real,
{
    if hull.len() < 3 {
        return Classification::new(Region::Outside, T::zero(), T::zero());
    }

    let delta = delta_for_points(hull);
    let n = hull.len();
    let mut min_dist: Option<T> = None;
    let mut inside = true;
    for i in 0..n {
        let p0 = hull[i];
        let p1 = hull[(i + 1) % n];
        if on_edge(p0, p1, point, eps) {
            return Classification::boundary(delta);
        }

        if orient2d(p0, p1, point) < -eps {
            inside = false;
        }

        let d = point_seg_distance(p0, p1, point);
        min_dist = Some(min_dist.map_or(d, |m| num_traits::real::Real::min(m, d)));
    }

    Classification::from_side(inside, min_dist.unwrap_or_else(T::zero), delta)
}
