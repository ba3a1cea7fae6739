//! Convex hull of a point set using Andrew's monotone chain algorithm.
use crate::core::{
    math::{is_left, Vector2},
    traits::Real,
};
use std::cmp::Ordering;

/// Lexicographic (x then y) comparison of two points, incomparable values (NaN) compare equal.
#[inline]
fn lex_cmp<T>(p: &Vector2<T>, q: &Vector2<T>) -> Ordering
where
    T: Real,
{
    p.x.partial_cmp(&q.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| p.y.partial_cmp(&q.y).unwrap_or(Ordering::Equal))
}

/// Compute the convex hull of `points`, returning indexes into `points`.
///
/// Hull vertexes are ordered counter clockwise, starting at the lexicographically smallest point
/// (smallest x, then smallest y). Collinear points along hull edges are excluded so no three
/// consecutive hull vertexes are collinear. Exactly coincident points are collapsed, the index of
/// the first occurrence in input order is kept.
///
/// Degenerate inputs are not an error: an empty input returns an empty hull, a single unique
/// point returns that point and collinear-only input returns its two extreme points.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// # use planar_kernels::hull::*;
/// let points = vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(4.0, 0.0),
///     Vector2::new(2.0, 2.0),
///     Vector2::new(4.0, 4.0),
///     Vector2::new(0.0, 4.0),
/// ];
/// // centroid (index 2) is excluded
/// assert_eq!(convex_hull_indices(&points), vec![0, 1, 3, 4]);
/// ```
pub fn convex_hull_indices<T>(points: &[Vector2<T>]) -> Vec<usize>
where
    T: Real,
{
    if points.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<usize> = (0..points.len()).collect();
    // stable sort so the first occurrence of a duplicate is the one kept
    sorted.sort_by(|&i, &j| lex_cmp(&points[i], &points[j]));

    let mut unique: Vec<usize> = Vec::with_capacity(sorted.len());
    for i in sorted {
        match unique.last() {
            Some(&j) if points[i] == points[j] => {}
            _ => unique.push(i),
        }
    }

    if unique.len() == 1 {
        return unique;
    }

    let turns_left = |stack: &[usize], next: usize| -> bool {
        let k1 = stack[stack.len() - 2];
        let k2 = stack[stack.len() - 1];
        is_left(points[k1], points[k2], points[next])
    };

    let mut stack: Vec<usize> = Vec::with_capacity(unique.len() * 2);

    // lower chain
    for &i in unique.iter() {
        while stack.len() >= 2 && !turns_left(&stack, i) {
            stack.pop();
        }
        stack.push(i);
    }

    // upper chain, never pops into the lower chain
    let lower_size = stack.len();
    for &i in unique.iter().rev().skip(1) {
        while stack.len() > lower_size && !turns_left(&stack, i) {
            stack.pop();
        }
        stack.push(i);
    }

    // last point pushed is the start point
    stack.pop();

    if stack.is_empty() {
        let first = unique[0];
        let last = unique[unique.len() - 1];
        stack.push(first);
        if last != first {
            stack.push(last);
        }
    }

    stack
}

/// Same as [convex_hull_indices] but returns copies of the hull points.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// # use planar_kernels::hull::*;
/// let points = vec![
///     Vector2::new(1.0, 1.0),
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(1.0, 2.0),
/// ];
/// let hull = convex_hull(&points);
/// assert_eq!(hull, vec![points[1], points[2], points[3]]);
/// ```
pub fn convex_hull<T>(points: &[Vector2<T>]) -> Vec<Vector2<T>>
where
    T: Real,
{
    convex_hull_indices(points)
        .into_iter()
        .map(|i| points[i])
        .collect()
}
