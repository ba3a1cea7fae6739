use super::Triangle;
use crate::{
    core::{
        math::{orient2d, Vector2},
        traits::Real,
    },
    GeomError,
};

/// Options for [delaunay_triangulation_opt].
#[derive(Debug, Clone)]
pub struct DelaunayOptions<T>
where
    T: Real,
{
    /// Absolute epsilon on the orientation corrected incircle determinant, a point must be inside
    /// a circumcircle by more than this amount to invalidate the triangle.
    pub incircle_eps: T,
    /// Scale factor applied to the bounding box extent when constructing the super triangle.
    pub super_triangle_margin: T,
}

impl<T> DelaunayOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            incircle_eps: T::from_const(1e-18),
            super_triangle_margin: T::four(),
        }
    }
}

impl<T> Default for DelaunayOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Tests if `point` lies strictly inside the circumcircle of the triangle `(a, b, c)`.
///
/// The incircle determinant is multiplied by the sign of the triangle's orientation so the test
/// works for both clockwise and counter clockwise triangles. The result must exceed `eps` to count
/// as inside, a degenerate (zero area) triangle never contains any point.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// # use planar_kernels::triangulation::*;
/// let a = Vector2::new(0.0, 0.0);
/// let b = Vector2::new(2.0, 0.0);
/// let c = Vector2::new(0.0, 2.0);
/// assert!(in_circumcircle(a, b, c, Vector2::new(1.0, 1.0), 1e-18));
/// // same answer for the clockwise triangle
/// assert!(in_circumcircle(a, c, b, Vector2::new(1.0, 1.0), 1e-18));
/// assert!(!in_circumcircle(a, b, c, Vector2::new(3.0, 3.0), 1e-18));
/// ```
pub fn in_circumcircle<T>(
    a: Vector2<T>,
    b: Vector2<T>,
    c: Vector2<T>,
    point: Vector2<T>,
    eps: T,
) -> bool
where
    T: Real,
{
    let ad = a - point;
    let bd = b - point;
    let cd = c - point;

    let a2 = ad.length_squared();
    let b2 = bd.length_squared();
    let c2 = cd.length_squared();

    let det = a2 * bd.perp_dot(cd) - b2 * ad.perp_dot(cd) + c2 * ad.perp_dot(bd);

    let orient = orient2d(a, b, c);
    let sign = if orient > T::zero() {
        T::one()
    } else if orient < T::zero() {
        -T::one()
    } else {
        T::zero()
    };

    det * sign > eps
}

/// Compute a Delaunay triangulation of `points` using default options.
///
/// See [delaunay_triangulation_opt].
#[inline]
pub fn delaunay_triangulation<T>(points: &[Vector2<T>]) -> Result<Vec<Triangle>, GeomError>
where
    T: Real,
{
    delaunay_triangulation_opt(points, &DelaunayOptions::new())
}

/// Compute a Delaunay triangulation of `points` using the incremental Bowyer–Watson algorithm.
///
/// Triangles are returned as indexes into `points`, each oriented counter clockwise. Points are
/// inserted in input order which affects the order of the output triangles but not their validity.
/// Fewer than 2 points is rejected with [GeomError::InsufficientPoints], exactly 2 points is valid
/// and returns no triangles.
///
/// Every insertion scans all current triangles (no spatial acceleration) so the total cost is
/// roughly quadratic in the point count.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// # use planar_kernels::triangulation::*;
/// let points = vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(0.0, 1.0),
/// ];
/// let triangles = delaunay_triangulation(&points).unwrap();
/// assert_eq!(triangles.len(), 1);
/// assert!(triangles[0].contains_vertex(0));
/// ```
pub fn delaunay_triangulation_opt<T>(
    points: &[Vector2<T>],
    options: &DelaunayOptions<T>,
) -> Result<Vec<Triangle>, GeomError>
where
    T: Real,
{
    let n = points.len();
    if n < 2 {
        return Err(GeomError::InsufficientPoints {
            required: 2,
            found: n,
        });
    }

    if n == 2 {
        return Ok(Vec::new());
    }

    let mut min_x = points[0].x;
    let mut min_y = points[0].y;
    let mut max_x = points[0].x;
    let mut max_y = points[0].y;
    for p in &points[1..] {
        min_x = num_traits::real::Real::min(min_x, p.x);
        min_y = num_traits::real::Real::min(min_y, p.y);
        max_x = num_traits::real::Real::max(max_x, p.x);
        max_y = num_traits::real::Real::max(max_y, p.y);
    }

    let extent = num_traits::real::Real::max(max_x - min_x, max_y - min_y);
    let center_x = (min_x + max_x) * T::half();
    let center_y = (min_y + max_y) * T::half();
    let r = options.super_triangle_margin * (extent + T::one());

    let mut vertexes = Vec::with_capacity(n + 3);
    vertexes.extend_from_slice(points);
    vertexes.push(Vector2::new(center_x - T::two() * r, center_y - r));
    vertexes.push(Vector2::new(center_x, center_y + T::two() * r));
    vertexes.push(Vector2::new(center_x + T::two() * r, center_y - r));

    let mut triangles = vec![Triangle::new(n, n + 1, n + 2)];
    let mut boundary: Vec<(usize, usize)> = Vec::new();

    for (pi, &p) in points.iter().enumerate() {
        boundary.clear();

        triangles.retain(|t| {
            let bad = in_circumcircle(
                vertexes[t.a],
                vertexes[t.b],
                vertexes[t.c],
                p,
                options.incircle_eps,
            );

            if bad {
                for (u, v) in t.edges() {
                    // edges shared by two bad triangles are interior to the cavity and cancel
                    let shared = boundary
                        .iter()
                        .position(|&(x, y)| (x == v && y == u) || (x == u && y == v));
                    match shared {
                        Some(k) => {
                            boundary.swap_remove(k);
                        }
                        None => boundary.push((u, v)),
                    }
                }
            }

            !bad
        });

        for &(u, v) in &boundary {
            if orient2d(vertexes[u], vertexes[v], p) > T::zero() {
                triangles.push(Triangle::new(u, v, pi));
            } else {
                triangles.push(Triangle::new(v, u, pi));
            }
        }

        log::trace!(
            "delaunay: inserted point {pi}, cavity boundary edges: {}, triangles: {}",
            boundary.len(),
            triangles.len()
        );
    }

    triangles.retain(|t| t.a < n && t.b < n && t.c < n);
    log::debug!(
        "delaunay: {} points triangulated into {} triangles",
        n,
        triangles.len()
    );

    Ok(triangles)
}
