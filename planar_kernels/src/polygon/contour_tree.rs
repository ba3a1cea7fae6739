use super::{Contour, Polygon};
use crate::core::math::{point_on_segment, Vector2};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

#[derive(Debug, Clone)]
struct Node {
    contour: Contour<f64>,
    area: f64,
    min: Vector2<f64>,
    max: Vector2<f64>,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl Node {
    fn new(contour: Contour<f64>) -> Self {
        let mut min = Vector2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for v in &contour.vertices {
            min = Vector2::new(min.x.min(v.x), min.y.min(v.y));
            max = Vector2::new(max.x.max(v.x), max.y.max(v.y));
        }

        Node {
            area: contour.area(),
            contour,
            min,
            max,
            parent: None,
            children: Vec::new(),
        }
    }

    fn bounds_contain(&self, other: &Node) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }
}

/// Nesting tree of the contours produced by a boolean operation.
///
/// Each node is a solid or hole contour, stored in an index arena. A hole's parent is the solid
/// contour it was produced with. A solid's parent is the smallest hole that encloses it (an island
/// inside a hole), or none for a top level solid.
#[derive(Debug, Clone, Default)]
pub struct ContourTree {
    nodes: Vec<Node>,
}

impl ContourTree {
    /// Build the tree from overlay shapes, each shape is an outer contour followed by its holes.
    ///
    /// Contours with fewer than 3 vertexes are dropped, along with the holes of a dropped outer
    /// contour.
    pub fn from_shapes(shapes: Vec<Vec<Vec<Vector2<f64>>>>) -> Self {
        let mut nodes = Vec::new();
        for shape in shapes {
            let mut contours = shape.into_iter();
            let Some(outer) = contours.next() else {
                continue;
            };

            if outer.len() < 3 {
                log::trace!(
                    "contour tree: degenerate outer contour dropped with its {} holes",
                    contours.len()
                );
                continue;
            }

            let outer_index = nodes.len();
            nodes.push(Node::new(Contour::new(outer, false)));
            for vertices in contours.filter(|c| c.len() >= 3) {
                let mut node = Node::new(Contour::new(vertices, true));
                node.parent = Some(outer_index);
                nodes.push(node);
            }
        }

        let mut tree = ContourTree { nodes };
        tree.nest_islands();
        tree.link_children();
        tree
    }

    /// Number of contours in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Spatial index over the bounding boxes of the hole contours, returned with the node index of
    /// each indexed hole.
    fn hole_index(&self) -> (Vec<usize>, Option<StaticAABB2DIndex<f64>>) {
        let holes: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| self.nodes[i].contour.is_hole)
            .collect();

        let mut builder = StaticAABB2DIndexBuilder::new(holes.len());
        for &i in holes.iter() {
            let node = &self.nodes[i];
            builder.add(node.min.x, node.min.y, node.max.x, node.max.y);
        }

        match builder.build() {
            Ok(index) => (holes, Some(index)),
            Err(err) => {
                log::warn!("contour tree: spatial index build failed ({err}), testing all holes");
                (holes, None)
            }
        }
    }

    fn nest_islands(&mut self) {
        let (holes, index) = self.hole_index();
        for i in 0..self.nodes.len() {
            if self.nodes[i].contour.is_hole {
                continue;
            }

            let candidates = match &index {
                Some(index) => {
                    let solid = &self.nodes[i];
                    index
                        .query(solid.min.x, solid.min.y, solid.max.x, solid.max.y)
                        .into_iter()
                        .map(|k| holes[k])
                        .collect()
                }
                None => holes.clone(),
            };

            let mut best: Option<(usize, f64)> = None;
            for j in candidates {
                let hole = &self.nodes[j];
                if hole.parent == Some(i)
                    || hole.area <= self.nodes[i].area
                    || !hole.bounds_contain(&self.nodes[i])
                {
                    continue;
                }

                if best.map_or(true, |(_, area)| hole.area < area)
                    && contour_inside(&self.nodes[i].contour, &hole.contour)
                {
                    best = Some((j, hole.area));
                }
            }

            self.nodes[i].parent = best.map(|(j, _)| j);
        }
    }

    fn link_children(&mut self) {
        for i in 0..self.nodes.len() {
            if let Some(p) = self.nodes[i].parent {
                self.nodes[p].children.push(i);
            }
        }
    }

    /// Walk the tree converting it to polygons.
    ///
    /// Every solid starts a new polygon, its hole children are added to that polygon and solids
    /// nested inside those holes start new top level polygons.
    pub fn into_polygons(self) -> Vec<Polygon<f64>> {
        let mut result = Vec::new();
        for i in 0..self.nodes.len() {
            if self.nodes[i].parent.is_none() && !self.nodes[i].contour.is_hole {
                self.visit_solid(i, &mut result);
            }
        }

        result
    }

    fn visit_solid(&self, index: usize, result: &mut Vec<Polygon<f64>>) {
        let node = &self.nodes[index];
        let mut polygon = Polygon::from_contours(vec![node.contour.normalized()]);
        let mut islands = Vec::new();
        for &hole_index in &node.children {
            let hole = &self.nodes[hole_index];
            polygon.add_contour(hole.contour.normalized());
            islands.extend(hole.children.iter().copied());
        }

        log::trace!(
            "contour tree: polygon with {} contours, {} nested islands",
            polygon.contours.len(),
            islands.len()
        );

        result.push(polygon);
        for island in islands {
            self.visit_solid(island, result);
        }
    }
}

/// Returns true if `inner` lies inside `outer`, decided by the first vertex of `inner` that is not
/// on the boundary of `outer` (output contours never cross so one vertex is enough).
fn contour_inside(inner: &Contour<f64>, outer: &Contour<f64>) -> bool {
    let eps = 1e-9;
    inner
        .vertices
        .iter()
        .find(|&&v| !outer.edges().any(|(p0, p1)| point_on_segment(p0, p1, v, eps)))
        .map_or(false, |&v| ray_parity_inside(outer, v))
}

/// Even-odd ray cast test of `point` against a single contour.
fn ray_parity_inside(contour: &Contour<f64>, point: Vector2<f64>) -> bool {
    let mut inside = false;
    for (p0, p1) in contour.edges() {
        if (p0.y > point.y) != (p1.y > point.y) {
            let t = (point.y - p0.y) / (p1.y - p0.y);
            if p0.x + t * (p1.x - p0.x) > point.x {
                inside = !inside;
            }
        }
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    fn square(min: f64, max: f64) -> Vec<Vector2<f64>> {
        vec![
            vec2(min, min),
            vec2(max, min),
            vec2(max, max),
            vec2(min, max),
        ]
    }

    #[test]
    fn island_inside_hole_becomes_top_level() {
        let shapes = vec![
            vec![square(0.0, 10.0), square(2.0, 8.0)],
            vec![square(4.0, 6.0)],
        ];
        let tree = ContourTree::from_shapes(shapes);
        assert_eq!(tree.len(), 3);

        let polygons = tree.into_polygons();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].contours.len(), 2);
        assert!(polygons[0].contours[1].is_hole);
        assert_eq!(polygons[1].contours.len(), 1);
        assert_fuzzy_eq!(polygons[0].area(), 64.0);
        assert_fuzzy_eq!(polygons[1].area(), 4.0);
    }

    #[test]
    fn degenerate_contours_dropped() {
        let shapes = vec![vec![vec![vec2(0.0, 0.0), vec2(1.0, 1.0)]]];
        let tree = ContourTree::from_shapes(shapes);
        assert!(tree.is_empty());
        assert!(tree.into_polygons().is_empty());
    }

    #[test]
    fn islands_nest_in_smallest_enclosing_hole() {
        let shapes = vec![
            vec![square(0.0, 20.0), square(2.0, 8.0), square(12.0, 18.0)],
            vec![square(4.0, 6.0)],
            vec![square(14.0, 16.0)],
            vec![square(30.0, 32.0)],
        ];
        let tree = ContourTree::from_shapes(shapes);
        assert_eq!(tree.len(), 6);

        let polygons = tree.into_polygons();
        let areas: Vec<f64> = polygons.iter().map(|p| p.area()).collect();
        assert_eq!(polygons.len(), 4);
        assert_eq!(polygons[0].contours.len(), 3);
        assert_fuzzy_eq!(areas[0], 328.0);
        for area in &areas[1..] {
            assert_fuzzy_eq!(*area, 4.0);
        }
    }

    #[test]
    fn holes_of_degenerate_outer_dropped() {
        let shapes = vec![
            vec![vec![vec2(0.0, 0.0), vec2(10.0, 0.0)], square(0.0, 10.0)],
            vec![square(4.0, 6.0)],
        ];
        let tree = ContourTree::from_shapes(shapes);
        assert_eq!(tree.len(), 1);

        let polygons = tree.into_polygons();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].contours[0].len(), 4);
        assert_fuzzy_eq!(polygons[0].area(), 4.0);
    }
}
