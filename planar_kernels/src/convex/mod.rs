//! Boolean operations between two convex polygons, implemented without an external clipper.
//!
//! Intersection uses Sutherland–Hodgman clipping. Difference defaults to an edge stitching
//! algorithm that handles disjoint, contained and hole producing inputs. Union is returned as the
//! disjoint pieces `A \ B`, `B \ A` and `A ∩ B` (not merged into a single boundary).
mod clip;
mod convex_boolean;
mod difference;

pub use clip::*;
pub use convex_boolean::*;
pub use difference::edge_stitch_difference;
