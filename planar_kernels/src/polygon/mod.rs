//! Multi contour polygons with holes and the general boolean engine.
mod boolean;
mod contour;
mod contour_tree;

pub use boolean::*;
pub use contour::*;
pub use contour_tree::ContourTree;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boolean operation to perform between two polygons.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// Area shared by both polygons.
    Intersection,
    /// Area covered by either polygon.
    Union,
    /// Area of the first polygon not covered by the second.
    Difference,
}
