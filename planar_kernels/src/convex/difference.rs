use super::{cleanup_polygon, ConvexBooleanOptions};
use crate::{
    core::{
        math::{
            midpoint, min_max, orient2d, point_on_segment, seg_seg_intr, signed_area, SegSegIntr,
            Vector2,
        },
        traits::Real,
    },
    polygon::Contour,
};
use static_aabb2d_index::StaticAABB2DIndexBuilder;

/// Location of a point relative to a convex counter clockwise polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Inside,
    Outside,
    /// On the edge starting at the vertex index held.
    OnEdge(usize),
}

fn side_of<T>(polygon: &[Vector2<T>], point: Vector2<T>, pos_equal_eps: T) -> Side
where
    T: Real,
{
    let n = polygon.len();
    if let Some(i) =
        (0..n).find(|&i| point_on_segment(polygon[i], polygon[(i + 1) % n], point, pos_equal_eps))
    {
        return Side::OnEdge(i);
    }

    if (0..n).any(|i| orient2d(polygon[i], polygon[(i + 1) % n], point) < T::zero()) {
        Side::Outside
    } else {
        Side::Inside
    }
}

/// Split points found along each edge, stored as `(parametric t, point)`.
type EdgeSplits<T> = Vec<Vec<(T, Vector2<T>)>>;

#[inline]
fn param_on<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let v = p1 - p0;
    (point - p0).dot(v) / v.length_squared()
}

/// Candidate `(a edge, b edge)` pairs with overlapping bounding boxes.
fn candidate_pairs<T>(a: &[Vector2<T>], b: &[Vector2<T>], pad: T) -> Vec<(usize, usize)>
where
    T: Real,
{
    let edge_bounds = |poly: &[Vector2<T>], i: usize| -> (T, T, T, T) {
        let p0 = poly[i];
        let p1 = poly[(i + 1) % poly.len()];
        let (min_x, max_x) = min_max(p0.x, p1.x);
        let (min_y, max_y) = min_max(p0.y, p1.y);
        (min_x - pad, min_y - pad, max_x + pad, max_y + pad)
    };

    let mut builder = StaticAABB2DIndexBuilder::new(b.len());
    for j in 0..b.len() {
        let (min_x, min_y, max_x, max_y) = edge_bounds(b, j);
        builder.add(min_x, min_y, max_x, max_y);
    }

    match builder.build() {
        Ok(index) => (0..a.len())
            .flat_map(|i| {
                let (min_x, min_y, max_x, max_y) = edge_bounds(a, i);
                index
                    .query(min_x, min_y, max_x, max_y)
                    .into_iter()
                    .map(move |j| (i, j))
            })
            .collect(),
        Err(err) => {
            log::warn!("convex difference: spatial index build failed ({err}), testing all pairs");
            (0..a.len())
                .flat_map(|i| (0..b.len()).map(move |j| (i, j)))
                .collect()
        }
    }
}

/// Find every point where an edge of `a` touches an edge of `b`: proper crossings plus vertexes of
/// one polygon lying on an edge of the other (covers collinear overlaps and touches).
fn find_splits<T>(
    a: &[Vector2<T>],
    b: &[Vector2<T>],
    pos_equal_eps: T,
) -> (EdgeSplits<T>, EdgeSplits<T>)
where
    T: Real,
{
    let mut a_splits: EdgeSplits<T> = vec![Vec::new(); a.len()];
    let mut b_splits: EdgeSplits<T> = vec![Vec::new(); b.len()];

    for (i, j) in candidate_pairs(a, b, pos_equal_eps) {
        let p0 = a[i];
        let p1 = a[(i + 1) % a.len()];
        let q0 = b[j];
        let q1 = b[(j + 1) % b.len()];

        if let SegSegIntr::Crossing { point, .. } = seg_seg_intr(p0, p1, q0, q1, pos_equal_eps) {
            a_splits[i].push((param_on(p0, p1, point), point));
            b_splits[j].push((param_on(q0, q1, point), point));
        }

        for q in [q0, q1] {
            if point_on_segment(p0, p1, q, pos_equal_eps) {
                a_splits[i].push((param_on(p0, p1, q), q));
            }
        }

        for p in [p0, p1] {
            if point_on_segment(q0, q1, p, pos_equal_eps) {
                b_splits[j].push((param_on(q0, q1, p), p));
            }
        }
    }

    (a_splits, b_splits)
}

/// Polygon vertexes with the split points inserted in parametric order along each edge.
fn augment<T>(
    polygon: &[Vector2<T>],
    splits: &mut EdgeSplits<T>,
    pos_equal_eps: T,
) -> Vec<Vector2<T>>
where
    T: Real,
{
    let n = polygon.len();
    let mut result = Vec::with_capacity(n + splits.iter().map(Vec::len).sum::<usize>());
    for (i, edge_splits) in splits.iter_mut().enumerate() {
        let start = polygon[i];
        let end = polygon[(i + 1) % n];
        result.push(start);
        edge_splits.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(std::cmp::Ordering::Equal));
        for &(_, p) in edge_splits.iter() {
            let duplicate = p.fuzzy_eq_eps(start, pos_equal_eps)
                || p.fuzzy_eq_eps(end, pos_equal_eps)
                || result
                    .last()
                    .map_or(false, |last| p.fuzzy_eq_eps(*last, pos_equal_eps));
            if !duplicate {
                result.push(p);
            }
        }
    }

    result
}

/// Directed edge graph over a deduplicated vertex pool.
struct EdgeGraph<T> {
    pool: Vec<Vector2<T>>,
    edges: Vec<(usize, usize)>,
    outgoing: Vec<Vec<usize>>,
    pos_equal_eps: T,
}

impl<T> EdgeGraph<T>
where
    T: Real,
{
    fn new(pos_equal_eps: T) -> Self {
        EdgeGraph {
            pool: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            pos_equal_eps,
        }
    }

    fn vertex_index(&mut self, point: Vector2<T>) -> usize {
        let eps = self.pos_equal_eps;
        if let Some(i) = self.pool.iter().position(|p| p.fuzzy_eq_eps(point, eps)) {
            return i;
        }

        self.pool.push(point);
        self.outgoing.push(Vec::new());
        self.pool.len() - 1
    }

    fn add_edge(&mut self, from: Vector2<T>, to: Vector2<T>) {
        let from = self.vertex_index(from);
        let to = self.vertex_index(to);
        if from == to {
            return;
        }

        self.outgoing[from].push(self.edges.len());
        self.edges.push((from, to));
    }

    /// Follow unused edges greedily, returning every path that closes back on its start vertex.
    fn into_loops(self) -> Vec<Vec<Vector2<T>>> {
        let mut used = vec![false; self.edges.len()];
        let mut loops = Vec::new();

        for start_edge in 0..self.edges.len() {
            if used[start_edge] {
                continue;
            }

            used[start_edge] = true;
            let (start, mut current) = self.edges[start_edge];
            let mut vertexes = vec![start];
            let mut closed = false;

            loop {
                if current == start {
                    closed = true;
                    break;
                }

                vertexes.push(current);
                let next = self.outgoing[current].iter().copied().find(|&e| !used[e]);
                match next {
                    Some(e) => {
                        used[e] = true;
                        current = self.edges[e].1;
                    }
                    None => break,
                }
            }

            if closed {
                loops.push(vertexes.into_iter().map(|i| self.pool[i]).collect());
            } else {
                log::trace!(
                    "convex difference: dropped open chain of {} vertexes",
                    vertexes.len()
                );
            }
        }

        loops
    }
}

/// Difference `a \ b` of two convex counter clockwise polygons by edge splitting and stitching.
///
/// Edges of both polygons are split at every contact point. Sub edges of `a` are kept where they
/// lie outside `b` (or on an edge of `b` running the opposite direction), sub edges of `b` are kept
/// reversed where they lie strictly inside `a`. The kept edges are then stitched into closed
/// loops. Loops with clockwise orientation are returned as holes.
///
/// When the polygons do not touch at all the result is: empty if `a` is inside `b`, `a` plus `b`
/// as a hole if `b` is inside `a`, otherwise `a` unchanged.
pub fn edge_stitch_difference<T>(
    a: &[Vector2<T>],
    b: &[Vector2<T>],
    options: &ConvexBooleanOptions<T>,
) -> Vec<Contour<T>>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let a = cleanup_polygon(a, options.dist_sq_eps, options.orient_eps);
    let b = cleanup_polygon(b, options.dist_sq_eps, options.orient_eps);
    if a.is_empty() {
        return Vec::new();
    }

    if b.is_empty() {
        return vec![Contour::solid(a)];
    }

    let (mut a_splits, mut b_splits) = find_splits(&a, &b, eps);
    let contact = a_splits.iter().chain(b_splits.iter()).any(|s| !s.is_empty());

    if !contact {
        if side_of(&b, a[0], eps) != Side::Outside {
            return Vec::new();
        }

        if side_of(&a, b[0], eps) == Side::Inside {
            let mut hole = b.clone();
            hole.reverse();
            return vec![Contour::solid(a), Contour::hole(hole)];
        }

        return vec![Contour::solid(a)];
    }

    let a_aug = augment(&a, &mut a_splits, eps);
    let b_aug = augment(&b, &mut b_splits, eps);

    let mut graph = EdgeGraph::new(eps);
    for i in 0..a_aug.len() {
        let p = a_aug[i];
        let q = a_aug[(i + 1) % a_aug.len()];
        let keep = match side_of(&b, midpoint(p, q), eps) {
            Side::Outside => true,
            Side::OnEdge(j) => (q - p).dot(b[(j + 1) % b.len()] - b[j]) < T::zero(),
            Side::Inside => false,
        };

        if keep {
            graph.add_edge(p, q);
        }
    }

    for i in 0..b_aug.len() {
        let p = b_aug[i];
        let q = b_aug[(i + 1) % b_aug.len()];
        if side_of(&a, midpoint(p, q), eps) == Side::Inside {
            graph.add_edge(q, p);
        }
    }

    let mut result = Vec::new();
    for vertexes in graph.into_loops() {
        let cleaned = cleanup_polygon(&vertexes, options.dist_sq_eps, options.orient_eps);
        if cleaned.is_empty() {
            continue;
        }

        let is_hole = signed_area(&cleaned) < T::zero();
        result.push(Contour::new(cleaned, is_hole));
    }

    log::trace!(
        "convex difference: {} + {} augmented vertexes stitched into {} loops",
        a_aug.len(),
        b_aug.len(),
        result.len()
    );

    result
}
