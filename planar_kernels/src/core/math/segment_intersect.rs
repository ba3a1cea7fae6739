use super::{midpoint, Vector2};
use crate::core::traits::Real;

/// Holds the result of intersecting two finite line segments, see [seg_seg_intr].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegSegIntr<T>
where
    T: Real,
{
    /// Segments do not touch.
    NoIntersect,
    /// Segments are not parallel and cross (or touch) at a single point.
    Crossing {
        /// Intersect point.
        point: Vector2<T>,
        /// Parametric value for the intersect on the first segment.
        seg1_t: T,
        /// Parametric value for the intersect on the second segment.
        seg2_t: T,
    },
    /// Segments are parallel and touch or overlap, `point` is a representative point of the shared
    /// part (midpoint of the overlap).
    Collinear {
        /// Representative intersect point.
        point: Vector2<T>,
    },
}

impl<T> SegSegIntr<T>
where
    T: Real,
{
    /// Representative intersect point, `None` if the segments do not intersect.
    #[inline]
    pub fn point(&self) -> Option<Vector2<T>> {
        match *self {
            SegSegIntr::NoIntersect => None,
            SegSegIntr::Crossing { point, .. } | SegSegIntr::Collinear { point } => Some(point),
        }
    }
}

#[inline]
fn clamp01<T>(v: T) -> T
where
    T: Real,
{
    num_traits::real::Real::min(num_traits::real::Real::max(v, T::zero()), T::one())
}

/// Finds the intersect between the segments `a -> b` and `c -> d`.
///
/// For non parallel segments `eps` is parametric slack: the parametric values along both segments
/// must lie in `[-eps, 1 + eps]`. For (nearly) parallel segments the lines must be within
/// `eps * |b - a|` (cross product separation) and the parametric overlap along `a -> b` is widened
/// by `eps`.
///
/// Degenerate segments (collapsed to a point) are handled as point to point or point to segment
/// distance tests.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// # use planar_kernels::core::traits::*;
/// let intr = seg_seg_intr(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 2.0),
///     Vector2::new(0.0, 2.0),
///     Vector2::new(2.0, 0.0),
///     1e-9,
/// );
/// if let SegSegIntr::Crossing { point, seg1_t, seg2_t } = intr {
///     assert!(point.fuzzy_eq(Vector2::new(1.0, 1.0)));
///     assert!(seg1_t.fuzzy_eq(0.5));
///     assert!(seg2_t.fuzzy_eq(0.5));
/// } else {
///     unreachable!("expected crossing segments");
/// }
/// ```
pub fn seg_seg_intr<T>(
    a: Vector2<T>,
    b: Vector2<T>,
    c: Vector2<T>,
    d: Vector2<T>,
    eps: T,
) -> SegSegIntr<T>
where
    T: Real,
{
    let tiny = T::from_const(1e-12);
    let r = b - a;
    let s = d - c;
    let denom = r.perp_dot(s);
    let c_minus_a = c - a;

    if denom.abs() < tiny {
        // parallel or collinear
        if c_minus_a.perp_dot(r).abs() > eps * r.length() {
            return SegSegIntr::NoIntersect;
        }

        let rr = r.dot(r);
        if rr < tiny {
            let ss = s.dot(s);
            if ss < tiny {
                // both segments are points
                if (a - c).length() <= eps {
                    return SegSegIntr::Collinear {
                        point: midpoint(a, c),
                    };
                }
                return SegSegIntr::NoIntersect;
            }

            // first segment is a point, project it onto the second
            let t = clamp01((a - c).dot(s) / ss);
            let proj = c + s.scale(t);
            if (proj - a).length() <= eps {
                return SegSegIntr::Collinear { point: proj };
            }
            return SegSegIntr::NoIntersect;
        }

        let t0 = c_minus_a.dot(r) / rr;
        let t1 = (d - a).dot(r) / rr;
        let (t_min, t_max) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
        let lo = num_traits::real::Real::max(T::zero(), t_min - eps);
        let hi = num_traits::real::Real::min(T::one(), t_max + eps);
        if lo > hi {
            return SegSegIntr::NoIntersect;
        }

        let overlap_start = num_traits::real::Real::max(T::zero(), t_min);
        let overlap_end = num_traits::real::Real::min(T::one(), t_max);
        let t_mid = clamp01((overlap_start + overlap_end) * T::half());
        return SegSegIntr::Collinear {
            point: a + r.scale(t_mid),
        };
    }

    let t = c_minus_a.perp_dot(s) / denom;
    let u = c_minus_a.perp_dot(r) / denom;
    let lower = -eps;
    let upper = T::one() + eps;
    if t >= lower && t <= upper && u >= lower && u <= upper {
        SegSegIntr::Crossing {
            point: a + r.scale(t),
            seg1_t: t,
            seg2_t: u,
        }
    } else {
        SegSegIntr::NoIntersect
    }
}

/// Same as [seg_seg_intr] but only returns the representative intersect point.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// // parallel segments that do not overlap
/// let result = segment_intersection(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(0.0, 1.0),
///     Vector2::new(1.0, 1.0),
///     1e-9,
/// );
/// assert!(result.is_none());
/// ```
#[inline]
pub fn segment_intersection<T>(
    a: Vector2<T>,
    b: Vector2<T>,
    c: Vector2<T>,
    d: Vector2<T>,
    eps: T,
) -> Option<Vector2<T>>
where
    T: Real,
{
    seg_seg_intr(a, b, c, d, eps).point()
}
