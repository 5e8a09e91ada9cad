use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// All sketch, Fourier and epicycle types are generic over this trait with `f64` as the default.
pub trait Real:
    num_traits::real::Real
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn three() -> Self {
        Self::two() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    /// Convert a sample index or count into this type.
    #[inline]
    fn from_index(value: usize) -> Self {
        Self::from(value).unwrap()
    }

    /// Convert a signed frequency into this type.
    #[inline]
    fn from_freq(value: i32) -> Self {
        Self::from(value).unwrap()
    }
}

impl Real for f32 {
    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn three() -> Self {
        3.0f32
    }

    #[inline]
    fn four() -> Self {
        4.0f32
    }

    #[inline]
    fn from_index(value: usize) -> Self {
        value as f32
    }

    #[inline]
    fn from_freq(value: i32) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn three() -> Self {
        3.0f64
    }

    #[inline]
    fn four() -> Self {
        4.0f64
    }

    #[inline]
    fn from_index(value: usize) -> Self {
        value as f64
    }

    #[inline]
    fn from_freq(value: i32) -> Self {
        value as f64
    }
}
