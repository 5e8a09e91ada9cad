use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sketch point is represented by an `x`, `y`, and `radius` value.
///
/// `x` and `y` describe the 2D position in drawing space. `radius` is the size used by renderers
/// when drawing the point as a circle instance, it is carried along with the point but never used
/// by any of the numeric algorithms.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SketchPoint<T = f64> {
    /// X coordinate position for the point.
    pub x: T,
    /// Y coordinate position for the point.
    pub y: T,
    /// Rendering radius for the point.
    pub radius: T,
}

impl<T> SketchPoint<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, radius: T) -> Self {
        SketchPoint { x, y, radius }
    }

    /// Construct a point from a [x, y, radius] slice.
    ///
    /// If the slice does not contain exactly 3 elements then `None` is returned.
    #[inline]
    pub fn from_slice(slice: &[T]) -> Option<Self> {
        if let [x, y, radius] = *slice {
            Some(SketchPoint::new(x, y, radius))
        } else {
            None
        }
    }

    /// Construct a point using a 2D vector as the position.
    #[inline]
    pub fn from_vector2(vector2: Vector2<T>, radius: T) -> Self {
        SketchPoint::new(vector2.x, vector2.y, radius)
    }

    /// Return the position as a 2D vector.
    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon)
            && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
            && self.radius.fuzzy_eq_eps(other.radius, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another point using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}
