use thiserror::Error;

/// Errors surfaced by the geometry kernels.
///
/// Most kernels report degenerate input through their return value (empty hull, `None` intersect,
/// `Outside` classification, empty boolean result). This type covers the cases where the caller
/// needs to distinguish a rejected input from an empty answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    #[error("at least {required} points required, found {found}")]
    InsufficientPoints { required: usize, found: usize },

    #[error("coordinate {value} exceeds the integer grid range at scale {scale}")]
    CoordinateOutOfRange { value: f64, scale: f64 },

    #[error("invalid coordinate scale {0}, must be finite and positive")]
    InvalidScale(f64),
}
