#![allow(dead_code)]
mod contour_modifiers;
mod contour_test_properties;

pub use contour_modifiers::*;
pub use contour_test_properties::*;
