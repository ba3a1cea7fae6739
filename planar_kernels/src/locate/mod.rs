//! Point location: classify a query point as inside, outside, on or near the boundary of a
//! polygon.
mod classify_convex;
mod classify_polygon;
mod locate_types;

pub use classify_convex::*;
pub use classify_polygon::*;
pub use locate_types::*;
