use crate::core::{
    math::{min_pairwise_distance, Vector2},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Region a query point falls in relative to a polygon.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Outside,
    Inside,
    /// Point lies on an edge (within the classification epsilon).
    Boundary,
    /// Point is not on the boundary but within `delta` of it, see [Classification::delta].
    NearBoundary,
}

/// Result of classifying a point against a polygon.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification<T> {
    pub region: Region,
    /// Minimum distance from the query point to any polygon edge (zero on the boundary).
    pub distance: T,
    /// Near boundary tolerance: 10% of the minimum distance between any two polygon vertexes.
    pub delta: T,
}

impl<T> Classification<T>
where
    T: Real,
{
    #[inline]
    pub fn new(region: Region, distance: T, delta: T) -> Self {
        Classification {
            region,
            distance,
            delta,
        }
    }

    /// Classification result for a point on the boundary.
    #[inline]
    pub fn boundary(delta: T) -> Self {
        Classification::new(Region::Boundary, T::zero(), delta)
    }

    /// Build the result for a point that is not on the boundary, promoting it to
    /// [Region::NearBoundary] if it is within `delta` of the boundary.
    pub(crate) fn from_side(inside: bool, distance: T, delta: T) -> Self {
        let region = if delta > T::zero() && distance <= delta {
            Region::NearBoundary
        } else if inside {
            Region::Inside
        } else {
            Region::Outside
        };

        Classification::new(region, distance, delta)
    }

    /// Returns true if the point is inside or on/near the boundary.
    #[inline]
    pub fn is_inside_or_boundary(&self) -> bool {
        self.region != Region::Outside
    }
}

/// Rule used to decide if a point is inside a (possibly self overlapping) set of contours.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillRule {
    /// Inside if a ray from the point crosses an odd number of edges.
    #[default]
    EvenOdd,
    /// Inside if the contours wind around the point a non zero number of times.
    NonZero,
}

/// Options for [classify_point_in_polygon_opt](super::classify_point_in_polygon_opt).
#[derive(Debug, Clone)]
pub struct ClassifyOptions<T>
where
    T: Real,
{
    /// Epsilon used for on boundary tests.
    pub eps: T,
    /// How solid and hole contours are combined into inside/outside.
    pub fill_rule: FillRule,
}

impl<T> ClassifyOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            eps: default_classify_eps(),
            fill_rule: FillRule::EvenOdd,
        }
    }

    #[inline]
    pub fn with_eps(eps: T) -> Self {
        Self {
            eps,
            ..Self::new()
        }
    }
}

impl<T> Default for ClassifyOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
pub(crate) fn default_classify_eps<T>() -> T
where
    T: Real,
{
    T::from_const(1e-12)
}

/// Near boundary tolerance for a set of vertexes.
///
/// Returns 10% of the minimum distance between any two of `points`, or zero if there are fewer
/// than 2 points or the minimum distance is zero (coincident points).
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// # use planar_kernels::core::traits::*;
/// # use planar_kernels::locate::*;
/// let points = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(4.0, 0.0),
///     Vector2::new(4.0, 2.0),
/// ];
/// assert!(delta_for_points(&points).fuzzy_eq(0.2));
/// assert_eq!(delta_for_points(&points[..1]), 0.0);
/// ```
pub fn delta_for_points<T>(points: &[Vector2<T>]) -> T
where
    T: Real,
{
    match min_pairwise_distance(points) {
        Some(d) if d.is_finite() && d != T::zero() => d * T::from_const(0.1),
        _ => T::zero(),
    }
}
