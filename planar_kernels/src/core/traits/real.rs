use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared.
///
/// All kernels are generic over this trait so one implementation serves every floating point
/// precision. Implemented for `f32` and `f64`.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    /// Convert a `f64` constant (tolerance, scale factor, etc.) into this type.
    ///
    /// Narrowing conversions round to the nearest representable value.
    fn from_const(value: f64) -> Self;

    /// Convert a count (e.g. number of vertexes) into this type.
    fn from_count(count: usize) -> Self;

    /// Returns true if this number is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }
}

impl Real for f32 {
    #[inline]
    fn from_const(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn from_count(count: usize) -> Self {
        count as f32
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn four() -> Self {
        4.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn from_const(value: f64) -> Self {
        value
    }

    #[inline]
    fn from_count(count: usize) -> Self {
        count as f64
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn four() -> Self {
        4.0f64
    }
}
