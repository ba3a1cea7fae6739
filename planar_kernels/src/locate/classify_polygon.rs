use super::{
    classify_convex::on_edge, delta_for_points, Classification, ClassifyOptions, FillRule, Region,
};
use crate::{
    core::{
        math::{orient2d, point_seg_distance, Vector2},
        traits::Real,
    },
    polygon::{Contour, Polygon},
};

/// Per contour accumulated crossing state.
#[derive(Debug, Clone, Copy)]
struct ContourCrossings<T> {
    min_dist: T,
    winding: i32,
    odd_crossings: bool,
}

/// Walks every edge of `contour` accumulating the minimum edge distance, winding number and ray
/// crossing parity. Returns `None` as soon as the point is found on the boundary.
fn scan_contour<T>(contour: &Contour<T>, point: Vector2<T>, eps: T) -> Option<ContourCrossings<T>>
where
    T: Real,
{
    let mut min_dist: Option<T> = None;
    let mut winding = 0;
    let mut odd_crossings = false;

    for (p0, p1) in contour.edges() {
        let d = point_seg_distance(p0, p1, point);
        min_dist = Some(min_dist.map_or(d, |m| num_traits::real::Real::min(m, d)));

        if on_edge(p0, p1, point, eps) {
            return None;
        }

        let is_left = orient2d(p0, p1, point);
        if p0.y <= point.y {
            if p1.y > point.y && is_left > eps {
                winding += 1;
            }
        } else if p1.y <= point.y && is_left < -eps {
            winding -= 1;
        }

        // horizontal ray cast to the right of the point
        if (p0.y > point.y) != (p1.y > point.y) {
            let t = (point.y - p0.y) / (p1.y - p0.y);
            let x_edge = p0.x + t * (p1.x - p0.x);
            if (x_edge - point.x).abs() <= eps {
                return None;
            }

            if x_edge > point.x {
                odd_crossings = !odd_crossings;
            }
        }
    }

    Some(ContourCrossings {
        min_dist: min_dist.unwrap_or_else(T::zero),
        winding,
        odd_crossings,
    })
}

/// Near boundary tolerance for a polygon, see [delta_for_points].
///
/// All vertexes of all non degenerate contours are considered together.
pub fn delta_for_polygon<T>(polygon: &Polygon<T>) -> T
where
    T: Real,
{
    let points: Vec<Vector2<T>> = polygon
        .contours
        .iter()
        .filter(|c| !c.is_degenerate())
        .flat_map(|c| c.vertices.iter().copied())
        .collect();
    delta_for_points(&points)
}

/// Classify `point` against `polygon` using the default epsilon (1e-12) and even-odd fill.
#[inline]
pub fn classify_point_in_polygon<T>(polygon: &Polygon<T>, point: Vector2<T>) -> Classification<T>
where
    T: Real,
{
    classify_point_in_polygon_opt(polygon, point, &ClassifyOptions::new())
}

/// Classify `point` against `polygon` with the epsilon given and even-odd fill.
#[inline]
pub fn classify_point_in_polygon_eps<T>(
    polygon: &Polygon<T>,
    point: Vector2<T>,
    eps: T,
) -> Classification<T>
where
    T: Real,
{
    classify_point_in_polygon_opt(polygon, point, &ClassifyOptions::with_eps(eps))
}

/// Classify `point` against a multi contour `polygon`.
///
/// Every non degenerate contour is scanned. A point on the edge of any contour is immediately
/// [Region::Boundary]. Otherwise solid contours and hole contours are combined separately
/// according to `options.fill_rule`, and the point is inside if it is inside the solids and not
/// inside the holes. Points within the polygon's near boundary tolerance (see
/// [delta_for_polygon]) of any edge are reported as [Region::NearBoundary].
///
/// A polygon without any non degenerate contour classifies every point as [Region::Outside].
///
/// # Examples
///
/// ```
/// # use planar_kernels::core::math::*;
/// # use planar_kernels::locate::*;
/// # use planar_kernels::polygon::*;
/// let mut polygon = Polygon::from_solid(vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(10.0, 0.0),
///     Vector2::new(10.0, 10.0),
///     Vector2::new(0.0, 10.0),
/// ]);
/// polygon.add_contour(Contour::hole(vec![
///     Vector2::new(4.0, 4.0),
///     Vector2::new(6.0, 4.0),
///     Vector2::new(6.0, 6.0),
///     Vector2::new(4.0, 6.0),
/// ]));
///
/// let options = ClassifyOptions::new();
/// let region = |x, y| classify_point_in_polygon_opt(&polygon, Vector2::new(x, y), &options).region;
/// assert_eq!(region(2.0, 2.0), Region::Inside);
/// assert_eq!(region(5.0, 5.0), Region::Outside);
/// assert_eq!(region(5.0, 4.0), Region::Boundary);
/// assert_eq!(region(20.0, 5.0), Region::Outside);
/// ```
pub fn classify_point_in_polygon_opt<T>(
    polygon: &Polygon<T>,
    point: Vector2<T>,
    options: &ClassifyOptions<T>,
) -> Classification<T>
where
    T: Real,
{
    let delta = delta_for_polygon(polygon);

    let mut min_dist: Option<T> = None;
    let mut solid_winding = 0;
    let mut hole_winding = 0;
    let mut solid_parity = false;
    let mut hole_parity = false;

    for contour in polygon.contours.iter().filter(|c| !c.is_degenerate()) {
        let Some(crossings) = scan_contour(contour, point, options.eps) else {
            return Classification::boundary(delta);
        };

        let d = crossings.min_dist;
        min_dist = Some(min_dist.map_or(d, |m| num_traits::real::Real::min(m, d)));
        if contour.is_hole {
            hole_winding += crossings.winding;
            hole_parity ^= crossings.odd_crossings;
        } else {
            solid_winding += crossings.winding;
            solid_parity ^= crossings.odd_crossings;
        }
    }

    let Some(distance) = min_dist else {
        return Classification::new(Region::Outside, T::zero(), T::zero());
    };

    let (inside_solids, inside_holes) = match options.fill_rule {
        FillRule::EvenOdd => (solid_parity, hole_parity),
        FillRule::NonZero => (solid_winding != 0, hole_winding != 0),
    };

    Classification::from_side(inside_solids && !inside_holes, distance, delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn square(min: f64, max: f64) -> Vec<Vector2<f64>> {
        vec![
            vec2(min, min),
            vec2(max, min),
            vec2(max, max),
            vec2(min, max),
        ]
    }

    #[test]
    fn degenerate_polygon_is_outside() {
        let polygon = Polygon::from_solid(vec![vec2(0.0, 0.0), vec2(1.0, 0.0)]);
        let c = classify_point_in_polygon(&polygon, vec2(0.5, 0.0));
        assert_eq!(c.region, Region::Outside);
        assert_eq!(c.delta, 0.0);
    }

    #[test]
    fn overlapping_solids_fill_rules() {
        // two identical solids overlapping: even-odd cancels, non-zero keeps
        let polygon = Polygon::from_contours(vec![
            Contour::solid(square(0.0, 10.0)),
            Contour::solid(square(0.0, 10.0)),
        ]);
        let query = vec2(5.0, 5.0);

        let even_odd = classify_point_in_polygon(&polygon, query);
        assert_eq!(even_odd.region, Region::Outside);

        let options = ClassifyOptions {
            fill_rule: FillRule::NonZero,
            ..ClassifyOptions::new()
        };
        let non_zero = classify_point_in_polygon_opt(&polygon, query, &options);
        assert_eq!(non_zero.region, Region::Inside);
    }

    #[test]
    fn vertex_hit_is_boundary() {
        let polygon = Polygon::from_solid(square(0.0, 10.0));
        let c = classify_point_in_polygon(&polygon, vec2(10.0, 10.0));
        assert_eq!(c.region, Region::Boundary);
        assert_eq!(c.distance, 0.0);
    }
}
