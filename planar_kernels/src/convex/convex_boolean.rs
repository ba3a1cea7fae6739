use super::{difference::edge_stitch_difference, suth_hodg_clip, ClipSide};
use crate::{
    core::{
        math::{signed_area, Vector2},
        traits::Real,
    },
    polygon::{BooleanOp, Contour},
};

/// Algorithm used for convex polygon difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifferenceMethod {
    /// Split edges at all intersects, keep the sub edges that bound the difference and stitch them
    /// into loops. Handles disjoint, contained (hole producing) and partially overlapping inputs.
    #[default]
    EdgeStitch,
    /// Sutherland–Hodgman with the inside test inverted. Each pass keeps the part of `a` outside
    /// one edge of `b`, so the output is the part outside every edge at once: at most one polygon,
    /// empty for most overlapping or disjoint inputs and never a hole.
    Naive,
}

/// Options for [convex_boolean_opt].
#[derive(Debug, Clone)]
pub struct ConvexBooleanOptions<T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for determining if two positions are equal.
    pub pos_equal_eps: T,
    /// Epsilon for cross product (orientation and collinearity) zero tests.
    pub orient_eps: T,
    /// Squared distance below which consecutive vertexes are merged during cleanup.
    pub dist_sq_eps: T,
    /// Algorithm used for difference (and the difference pieces of union).
    pub difference: DifferenceMethod,
}

impl<T> ConvexBooleanOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from_const(1e-12),
            orient_eps: T::from_const(1e-18),
            dist_sq_eps: T::from_const(1e-24),
            difference: DifferenceMethod::EdgeStitch,
        }
    }
}

impl<T> Default for ConvexBooleanOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the polygon with counter clockwise vertex order.
fn to_ccw<T>(points: &[Vector2<T>]) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut result = points.to_vec();
    if signed_area(points) <= T::zero() {
        result.reverse();
    }

    result
}

/// Boolean operation between two convex polygons using default options.
///
/// See [convex_boolean_opt].
#[inline]
pub fn convex_boolean<T>(a: &[Vector2<T>], b: &[Vector2<T>], op: BooleanOp) -> Vec<Contour<T>>
where
    T: Real,
{
    convex_boolean_opt(a, b, op, &ConvexBooleanOptions::new())
}

/// Boolean operation between two convex polygons.
///
/// Both polygons may be given in either orientation, they are normalized to counter clockwise.
/// If either polygon has fewer than 3 vertexes the result is empty (for every operation).
///
/// * [BooleanOp::Intersection] returns at most one contour.
/// * [BooleanOp::Difference] returns zero or more solid contours, plus a hole contour when `b` lies
///   strictly inside `a`.
/// * [BooleanOp::Union] returns the non empty pieces of `a \ b`, `b \ a` and `a ∩ b` in that order.
///   The pieces do not overlap and their (hole adjusted) areas sum to the area of the union, but
///   they are not merged into a single boundary.
///
/// Output solids are counter clockwise, holes clockwise.
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// # use planar_kernels::convex::*;
/// # use planar_kernels::polygon::*;
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
/// let diff = convex_boolean(&a, &b, BooleanOp::Difference);
/// assert_eq!(diff.len(), 1);
/// assert_eq!(diff[0].area(), 12.0);
/// ```
pub fn convex_boolean_opt<T>(
    a: &[Vector2<T>],
    b: &[Vector2<T>],
    op: BooleanOp,
    options: &ConvexBooleanOptions<T>,
) -> Vec<Contour<T>>
where
    T: Real,
{
    if a.len() < 3 || b.len() < 3 {
        return Vec::new();
    }

    let a = to_ccw(a);
    let b = to_ccw(b);

    let result = match op {
        BooleanOp::Intersection => intersection(&a, &b, options),
        BooleanOp::Difference => difference(&a, &b, options),
        BooleanOp::Union => {
            let mut pieces = difference(&a, &b, options);
            pieces.extend(difference(&b, &a, options));
            pieces.extend(intersection(&a, &b, options));
            pieces
        }
    };

    log::debug!(
        "convex boolean {op:?}: {} + {} vertexes -> {} contours",
        a.len(),
        b.len(),
        result.len()
    );

    result
}

fn intersection<T>(
    a: &[Vector2<T>],
    b: &[Vector2<T>],
    options: &ConvexBooleanOptions<T>,
) -> Vec<Contour<T>>
where
    T: Real,
{
    let clipped = suth_hodg_clip(a, b, ClipSide::Inside, options);
    if clipped.is_empty() {
        Vec::new()
    } else {
        vec![Contour::solid(clipped)]
    }
}

fn difference<T>(
    a: &[Vector2<T>],
    b: &[Vector2<T>],
    options: &ConvexBooleanOptions<T>,
) -> Vec<Contour<T>>
where
    T: Real,
{
    match options.difference {
        DifferenceMethod::EdgeStitch => edge_stitch_difference(a, b, options),
        DifferenceMethod::Naive => {
            let clipped = suth_hodg_clip(a, b, ClipSide::Outside, options);
            if clipped.is_empty() {
                Vec::new()
            } else {
                vec![Contour::solid(clipped)]
            }
        }
    }
}
