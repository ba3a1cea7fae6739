use crate::core::{
    math::{signed_area, Vector2},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed boundary ring of a polygon.
///
/// The ring is implicitly closed (last vertex connects back to the first). `is_hole` marks the
/// ring as subtracting from the area of its enclosing solid ring. A contour with fewer than 3
/// vertexes is degenerate and skipped by all polygon kernels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour<T = f64> {
    pub vertices: Vec<Vector2<T>>,
    pub is_hole: bool,
}

impl<T> Contour<T>
where
    T: Real,
{
    #[inline]
    pub fn new(vertices: Vec<Vector2<T>>, is_hole: bool) -> Self {
        Contour { vertices, is_hole }
    }

    /// Create a solid (non hole) contour.
    #[inline]
    pub fn solid(vertices: Vec<Vector2<T>>) -> Self {
        Contour::new(vertices, false)
    }

    /// Create a hole contour.
    #[inline]
    pub fn hole(vertices: Vec<Vector2<T>>) -> Self {
        Contour::new(vertices, true)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the contour has fewer than 3 vertexes.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Iterate the contour's edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area of the ring, positive if counter clockwise.
    #[inline]
    pub fn signed_area(&self) -> T {
        signed_area(&self.vertices)
    }

    /// Unsigned area of the ring.
    #[inline]
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Returns the contour with its vertex order reversed.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Contour::new(vertices, self.is_hole)
    }

    /// Returns the contour oriented to match its role: counter clockwise for solids, clockwise for
    /// holes.
    pub fn normalized(&self) -> Self {
        let area = self.signed_area();
        let wrong_way = if self.is_hole {
            area > T::zero()
        } else {
            area < T::zero()
        };

        if wrong_way {
            self.reversed()
        } else {
            self.clone()
        }
    }
}

/// Polygon made up of any number of solid and hole contours.
///
/// Which hole belongs to which solid is not stored, kernels treat the contours as one region
/// (solids add area, holes remove it).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<T = f64> {
    pub contours: Vec<Contour<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Polygon {
            contours: Vec::new(),
        }
    }

    #[inline]
    pub fn from_contours(contours: Vec<Contour<T>>) -> Self {
        Polygon { contours }
    }

    /// Create a polygon with a single solid contour.
    #[inline]
    pub fn from_solid(vertices: Vec<Vector2<T>>) -> Self {
        Polygon {
            contours: vec![Contour::solid(vertices)],
        }
    }

    #[inline]
    pub fn add_contour(&mut self, contour: Contour<T>) {
        self.contours.push(contour);
    }

    /// Returns true if the polygon has no non degenerate contour.
    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(|c| c.is_degenerate())
    }

    pub fn solids(&self) -> impl Iterator<Item = &Contour<T>> + '_ {
        self.contours.iter().filter(|c| !c.is_hole)
    }

    pub fn holes(&self) -> impl Iterator<Item = &Contour<T>> + '_ {
        self.contours.iter().filter(|c| c.is_hole)
    }

    /// All vertexes across all contours.
    pub fn vertices(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        self.contours.iter().flat_map(|c| c.vertices.iter().copied())
    }

    /// Net area: sum of solid contour areas minus the sum of hole contour areas.
    pub fn area(&self) -> T {
        self.contours
            .iter()
            .filter(|c| !c.is_degenerate())
            .fold(T::zero(), |acc, c| {
                if c.is_hole {
                    acc - c.area()
                } else {
                    acc + c.area()
                }
            })
    }
}
