//! 2D computational geometry kernels: point/segment predicates, segment intersection, convex hull,
//! Delaunay triangulation, point-in-polygon classification and polygon boolean operations.
//!
//! All kernels are pure functions generic over [core::traits::Real] (`f32` or `f64`), the general
//! polygon boolean engine works in `f64`.
#[macro_use]
mod macros;
pub mod convex;
pub mod core;
mod error;
pub mod hull;
pub mod locate;
pub mod polygon;
pub mod scene;
pub mod triangulation;

pub use error::GeomError;
