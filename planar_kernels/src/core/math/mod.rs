//! Core/common math functions for working with 2D points, segments and their relations.
mod base_math;
mod point_segment;
mod segment_intersect;
mod vector2;

pub use base_math::*;
pub use point_segment::{point_on_segment, point_segment_relation, PointSegmentRelation};
pub use segment_intersect::{seg_seg_intr, segment_intersection, SegSegIntr};
pub use vector2::{vec2, Vector2};
