use super::SketchPoint;
use crate::core::{
    math::{dist_squared, Vector2},
    traits::Real,
};
use static_aabb2d_index::AABB;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Result of [CurveBuffer::append].
///
/// None of the outcomes are errors, a rejected point is simply dropped so sketching is never
/// interrupted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Point was added to the end of the buffer.
    Appended,
    /// Buffer is at capacity, point was ignored.
    Saturated,
    /// Point was within the minimum distance of the previous point, point was ignored.
    TooClose,
    /// Buffer is frozen (sketch has been committed), point was ignored.
    Frozen,
}

impl AppendOutcome {
    /// Returns true if the point was stored.
    #[inline]
    pub fn is_appended(&self) -> bool {
        matches!(self, AppendOutcome::Appended)
    }
}

/// Append only, capacity bounded sequence of sketch points in the order they were captured.
///
/// Appending past capacity saturates silently: the count stays at [CurveBuffer::capacity] and the
/// stored points are left untouched.
///
/// # Examples
///
/// ```
/// # use epicycles::sketch::*;
/// let mut buffer = CurveBuffer::new(2, 0.0);
/// assert_eq!(buffer.append(SketchPoint::new(0.0, 0.0, 0.01)), AppendOutcome::Appended);
/// assert_eq!(buffer.append(SketchPoint::new(1.0, 0.0, 0.01)), AppendOutcome::Appended);
/// assert_eq!(buffer.append(SketchPoint::new(1.0, 1.0, 0.01)), AppendOutcome::Saturated);
/// assert_eq!(buffer.count(), 2);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone)]
pub struct CurveBuffer<T = f64> {
    #[cfg_attr(feature = "serde", serde(rename = "points"))]
    point_data: Vec<SketchPoint<T>>,
    capacity: usize,
    min_point_distance: T,
}

impl<T> CurveBuffer<T>
where
    T: Real,
{
    /// Create a new empty buffer holding at most `capacity` points.
    ///
    /// Points closer than `min_point_distance` to the previously stored point are rejected, a value
    /// of zero (or less) disables the check.
    #[inline]
    pub fn new(capacity: usize, min_point_distance: T) -> Self {
        CurveBuffer {
            point_data: Vec::with_capacity(capacity),
            capacity,
            min_point_distance,
        }
    }

    /// Append a point to the end of the buffer.
    pub fn append(&mut self, point: SketchPoint<T>) -> AppendOutcome {
        if self.is_full() {
            return AppendOutcome::Saturated;
        }

        if let Some(last) = self.point_data.last() {
            if self.min_point_distance > T::zero() {
                let min_dist_squared = self.min_point_distance * self.min_point_distance;
                if dist_squared(last.pos(), point.pos()) < min_dist_squared {
                    return AppendOutcome::TooClose;
                }
            }
        }

        self.point_data.push(point);
        AppendOutcome::Appended
    }

    /// Number of points stored.
    #[inline]
    pub fn count(&self) -> usize {
        self.point_data.len()
    }

    /// Returns true if no points are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_data.is_empty()
    }

    /// Maximum number of points the buffer holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the buffer holds [CurveBuffer::capacity] points.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.point_data.len() >= self.capacity
    }

    /// Minimum distance between consecutive points.
    #[inline]
    pub fn min_point_distance(&self) -> T {
        self.min_point_distance
    }

    /// Remove all points.
    #[inline]
    pub fn clear(&mut self) {
        self.point_data.clear();
    }

    /// All stored points in capture order.
    #[inline]
    pub fn points(&self) -> &[SketchPoint<T>] {
        &self.point_data
    }

    /// Get the point at `index`, returns `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<SketchPoint<T>> {
        self.point_data.get(index).copied()
    }

    /// Last point stored.
    #[inline]
    pub fn last(&self) -> Option<SketchPoint<T>> {
        self.point_data.last().copied()
    }

    /// Iterate over the point positions in capture order.
    #[inline]
    pub fn iter_positions(&self) -> impl DoubleEndedIterator<Item = Vector2<T>> + '_ {
        self.point_data.iter().map(|p| p.pos())
    }

    /// Axis aligned bounding box of the point positions, `None` if the buffer is empty.
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.point_data.first()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for p in self.point_data.iter().skip(1) {
            if p.x < result.min_x {
                result.min_x = p.x;
            } else if p.x > result.max_x {
                result.max_x = p.x;
            }

            if p.y < result.min_y {
                result.min_y = p.y;
            } else if p.y > result.max_y {
                result.max_y = p.y;
            }
        }

        Some(result)
    }

    /// Flat `[x, y, radius]` triple per point, the instance layout renderers upload to draw the
    /// sketch.
    pub fn instance_data(&self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.point_data.len() * 3);
        for p in self.point_data.iter() {
            result.extend_from_slice(&[p.x, p.y, p.radius]);
        }
        result
    }
}

impl<T> Index<usize> for CurveBuffer<T> {
    type Output = SketchPoint<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.point_data[index]
    }
}
