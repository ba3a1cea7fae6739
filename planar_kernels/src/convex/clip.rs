use super::ConvexBooleanOptions;
use crate::core::{
    math::{dist_squared, orient2d, Vector2},
    traits::Real,
};

/// Which side of each clip edge [suth_hodg_clip] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipSide {
    /// Keep the part left of (inside) every counter clockwise clip edge.
    Inside,
    /// Keep the part right of (outside) every clip edge.
    Outside,
}

/// Intersect the segment `s -> e` with the infinite line through `a -> b`.
///
/// Returns `s` when the segment and line are (nearly) parallel, `|den| < 1e-18`.
pub fn seg_line_intersect<T>(
    s: Vector2<T>,
    e: Vector2<T>,
    a: Vector2<T>,
    b: Vector2<T>,
) -> Vector2<T>
where
    T: Real,
{
    let den = (s.x - e.x) * (a.y - b.y) - (s.y - e.y) * (a.x - b.x);
    if den.abs() < T::from_const(1e-18) {
        return s;
    }

    let se = s.x * e.y - s.y * e.x;
    let ab = a.x * b.y - a.y * b.x;
    let nx = se * (a.x - b.x) - (s.x - e.x) * ab;
    let ny = se * (a.y - b.y) - (s.y - e.y) * ab;
    Vector2::new(nx / den, ny / den)
}

/// Remove near duplicate consecutive vertexes (squared distance at most `dist_sq_eps`) and
/// collinear vertexes (absolute cross product at most `orient_eps`).
///
/// Returns an empty vec if fewer than 3 vertexes remain.
pub fn cleanup_polygon<T>(points: &[Vector2<T>], dist_sq_eps: T, orient_eps: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut merged: Vec<Vector2<T>> = Vec::with_capacity(points.len());
    for &p in points {
        match merged.last() {
            Some(&last) if dist_squared(last, p) <= dist_sq_eps => {}
            _ => merged.push(p),
        }
    }

    while merged.len() >= 2 && dist_squared(merged[0], merged[merged.len() - 1]) <= dist_sq_eps {
        merged.pop();
    }

    if merged.len() < 3 {
        return Vec::new();
    }

    let n = merged.len();
    let result: Vec<Vector2<T>> = (0..n)
        .filter(|&i| {
            let prev = merged[(i + n - 1) % n];
            let next = merged[(i + 1) % n];
            orient2d(prev, merged[i], next).abs() > orient_eps
        })
        .map(|i| merged[i])
        .collect();

    if result.len() < 3 {
        return Vec::new();
    }

    result
}

/// Sutherland–Hodgman clipping of `subject` by each edge of the counter clockwise convex polygon
/// `clip`.
///
/// With [ClipSide::Inside] this computes the intersection of the two polygons. With
/// [ClipSide::Outside] each pass keeps the part outside the clip edge, which is not a true
/// difference (see [DifferenceMethod](super::DifferenceMethod)).
///
/// The result is cleaned up after every clip edge with [cleanup_polygon] and is empty if it
/// degenerates.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// # use planar_kernels::convex::*;
/// let a = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(4.0, 0.0),
///     Vector2::new(4.0, 4.0),
///     Vector2::new(0.0, 4.0),
/// ];
/// let b = [
///     Vector2::new(2.0, 2.0),
///     Vector2::new(6.0, 2.0),
///     Vector2::new(6.0, 6.0),
///     Vector2::new(2.0, 6.0),
/// ];
/// let clipped = suth_hodg_clip(&a, &b, ClipSide::Inside, &ConvexBooleanOptions::new());
/// assert_eq!(clipped.len(), 4);
/// assert_eq!(signed_area(&clipped), 4.0);
/// ```
pub fn suth_hodg_clip<T>(
    subject: &[Vector2<T>],
    clip: &[Vector2<T>],
    side: ClipSide,
    options: &ConvexBooleanOptions<T>,
) -> Vec<Vector2<T>>
where
    T: Real,
{
    if subject.is_empty() || clip.len() < 3 {
        return Vec::new();
    }

    let eps = options.orient_eps;
    let mut output = subject.to_vec();
    let n = clip.len();

    for i in 0..n {
        if output.is_empty() {
            break;
        }

        let a = clip[i];
        let b = clip[(i + 1) % n];
        let keep = |p: Vector2<T>| -> bool {
            let v = orient2d(a, b, p);
            match side {
                ClipSide::Inside => v >= -eps,
                ClipSide::Outside => v <= eps,
            }
        };

        let input = std::mem::take(&mut output);
        let mut s = input[input.len() - 1];
        let mut s_kept = keep(s);
        for &e in &input {
            let e_kept = keep(e);
            if e_kept {
                if !s_kept {
                    output.push(seg_line_intersect(s, e, a, b));
                }
                output.push(e);
            } else if s_kept {
                output.push(seg_line_intersect(s, e, a, b));
            }

            s = e;
            s_kept = e_kept;
        }

        output = cleanup_polygon(&output, options.dist_sq_eps, options.orient_eps);
    }

    cleanup_polygon(&output, options.dist_sq_eps, options.orient_eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn cleanup_merges_and_drops_collinear() {
        let points = vec![
            vec2(0.0, 0.0),
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(2.0, 0.0),
            vec2(2.0, 2.0),
            vec2(0.0, 2.0),
            vec2(0.0, 0.0),
        ];
        let cleaned = cleanup_polygon(&points, 1e-24, 1e-18);
        assert_eq!(
            cleaned,
            vec![vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(2.0, 2.0), vec2(0.0, 2.0)]
        );
    }

    #[test]
    fn cleanup_degenerate_is_empty() {
        let points = vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(2.0, 0.0)];
        assert!(cleanup_polygon(&points, 1e-24, 1e-18).is_empty());
        assert!(cleanup_polygon(&points[..2], 1e-24, 1e-18).is_empty());
    }

    #[test]
    fn parallel_line_falls_back_to_start() {
        let s = vec2(0.0, 0.0);
        let e = vec2(1.0, 0.0);
        let r = seg_line_intersect(s, e, vec2(0.0, 1.0), vec2(1.0, 1.0));
        assert_eq!(r, s);

        let (s, e) = (vec2(0.0, -1.0), vec2(0.0, 1.0));
        let r = seg_line_intersect(s, e, vec2(-1.0, 0.0), vec2(1.0, 0.0));
        assert!(r.fuzzy_eq(vec2(0.0, 0.0)));
    }

    #[test]
    fn disjoint_clip_is_empty() {
        let a = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0)];
        let b = [vec2(5.0, 5.0), vec2(6.0, 5.0), vec2(5.0, 6.0)];
        let clipped = suth_hodg_clip(&a, &b, ClipSide::Inside, &ConvexBooleanOptions::new());
        assert!(clipped.is_empty());
    }
}
