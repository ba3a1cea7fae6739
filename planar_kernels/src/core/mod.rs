//! Core module has common/shared math and traits used by all the geometry kernels.
pub mod math;
pub mod traits;
