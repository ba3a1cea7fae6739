use planar_kernels::{
    core::{math::Vector2, traits::FuzzyEq},
    polygon::{Contour, Polygon},
};
use static_aabb2d_index::AABB;

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

pub fn extents(points: &[Vector2<f64>]) -> AABB<f64> {
    let mut result = AABB::new(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        result.min_x = result.min_x.min(p.x);
        result.min_y = result.min_y.min(p.y);
        result.max_x = result.max_x.max(p.x);
        result.max_y = result.max_y.max(p.y);
    }

    result
}

/// Holds a set of properties of a contour for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct ContourProperties {
    pub vertex_count: usize,
    pub is_hole: bool,
    /// Unsigned area of the contour.
    pub area: f64,
    pub extents: AABB<f64>,
}

impl ContourProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-6;

    pub fn new(
        vertex_count: usize,
        is_hole: bool,
        area: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            vertex_count,
            is_hole,
            area,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_contour(contour: &Contour<f64>) -> Self {
        Self {
            vertex_count: contour.len(),
            is_hole: contour.is_hole,
            area: contour.area(),
            extents: extents(&contour.vertices),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.vertex_count == other.vertex_count
            && self.is_hole == other.is_hole
            && self.area.fuzzy_eq_eps(other.area, eps)
            && aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps)
    }
}

pub fn create_property_set<'a, I>(contours: I) -> Vec<ContourProperties>
where
    I: IntoIterator<Item = &'a Contour<f64>>,
{
    contours
        .into_iter()
        .map(ContourProperties::from_contour)
        .collect()
}

/// All contours of all polygons as one property set.
pub fn polygons_property_set(polygons: &[Polygon<f64>]) -> Vec<ContourProperties> {
    create_property_set(polygons.iter().flat_map(|p| p.contours.iter()))
}

pub fn property_sets_match(
    result_set: &[ContourProperties],
    expected_set: &[ContourProperties],
) -> bool {
    let mut sets_match = true;
    if result_set.len() != expected_set.len() {
        sets_match = false;
    } else {
        // using simple N^2 comparisons to compare property sets (sets are always relatively small,
        // e.g. N < 10)
        for properties_expected in expected_set {
            let match_count = result_set
                .iter()
                .filter(|properties_result| {
                    properties_expected
                        .fuzzy_eq_eps(properties_result, ContourProperties::PROP_CMP_EPS)
                })
                .count();

            if match_count != 1 {
                sets_match = false;
                break;
            }
        }
    }

    if !sets_match {
        eprintln!("result:\n{:?}", result_set);
        eprintln!("expected:\n{:?}", expected_set);
    }

    sets_match
}

/// Net area of contours, holes subtract.
pub fn net_area<'a, I>(contours: I) -> f64
where
    I: IntoIterator<Item = &'a Contour<f64>>,
{
    contours
        .into_iter()
        .filter(|c| !c.is_degenerate())
        .map(|c| if c.is_hole { -c.area() } else { c.area() })
        .sum()
}

/// Net area of a set of polygons.
pub fn polygons_area(polygons: &[Polygon<f64>]) -> f64 {
    polygons.iter().map(|p| p.area()).sum()
}

pub fn square(min_x: f64, min_y: f64, size: f64) -> Vec<Vector2<f64>> {
    vec![
        Vector2::new(min_x, min_y),
        Vector2::new(min_x + size, min_y),
        Vector2::new(min_x + size, min_y + size),
        Vector2::new(min_x, min_y + size),
    ]
}

/// Regular polygon approximating a circle, counter clockwise.
pub fn regular_polygon(center: Vector2<f64>, radius: f64, count: usize) -> Vec<Vector2<f64>> {
    (0..count)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / count as f64;
            Vector2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
