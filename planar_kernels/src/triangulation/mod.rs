//! Delaunay triangulation of point sets (incremental Bowyer–Watson).
mod delaunay;
mod triangle;

pub use delaunay::*;
pub use triangle::*;
