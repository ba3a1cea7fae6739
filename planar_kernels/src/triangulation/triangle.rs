#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Triangle referencing its three corners by index into a caller owned point buffer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Triangle { a, b, c }
    }

    /// The three directed edges `(a, b)`, `(b, c)` and `(c, a)`.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Returns true if `index` is one of the triangle's corners.
    #[inline]
    pub fn contains_vertex(&self, index: usize) -> bool {
        self.a == index || self.b == index || self.c == index
    }

    /// Corner indexes as an array.
    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}
