use super::CurveBuffer;
use crate::core::{
    math::{midpoint, point_from_parametric, Vector2},
    traits::Real,
};
use std::ops::Index;

/// Minimum number of captured points required to close a curve.
pub const MIN_CLOSE_POINT_COUNT: usize = 3;

/// Odd length (at least 3) periodic sequence of samples ready for Fourier analysis.
///
/// With `M = len() - 1` sample intervals the composite Simpson rule used by the analyzer needs `M`
/// to be even, which is why the length is always odd. The sequence is treated as periodic: the last
/// sample is followed by the first one at the next period boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedSamples<T = f64> {
    samples: Vec<Vector2<T>>,
    closed_with_midpoint: bool,
}

/// Close the captured `points` into a [ClosedSamples] sequence.
///
/// * odd point count: the points are used unchanged (implicitly closed from the last point back to
///   the first),
/// * even point count: a synthetic point at the midpoint of the first and last points is appended,
///   splitting the closing segment into two halves.
///
/// Returns `None` if fewer than [MIN_CLOSE_POINT_COUNT] points are given.
///
/// # Examples
///
/// ```
/// # use epicycles::core::math::*;
/// # use epicycles::sketch::*;
/// let square = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)];
/// let closed = close_curve(&square).unwrap();
/// assert_eq!(closed.len(), 5);
/// assert_eq!(closed[4], vec2(0.0, 0.5));
///
/// assert!(close_curve(&square[..2]).is_none());
/// ```
pub fn close_curve<T>(points: &[Vector2<T>]) -> Option<ClosedSamples<T>>
where
    T: Real,
{
    let count = points.len();
    if count < MIN_CLOSE_POINT_COUNT {
        return None;
    }

    let mut samples = Vec::with_capacity(count + 1);
    samples.extend_from_slice(points);

    let closed_with_midpoint = count % 2 == 0;
    if closed_with_midpoint {
        samples.push(midpoint(points[0], points[count - 1]));
    }

    Some(ClosedSamples {
        samples,
        closed_with_midpoint,
    })
}

impl<T> ClosedSamples<T>
where
    T: Real,
{
    /// Close all the points held in `buffer`, see [close_curve].
    pub fn from_buffer(buffer: &CurveBuffer<T>) -> Option<Self> {
        let positions = buffer.iter_positions().collect::<Vec<_>>();
        close_curve(&positions)
    }

    /// Use `samples` directly as a closed sequence without applying any closing rule.
    ///
    /// Returns `None` if the length is not odd or is less than 3. Useful when samples already come
    /// from a periodic parameterization (e.g. `s_j = 2PI * j / M` for `j` in `0..=M`).
    pub fn from_odd_samples(samples: Vec<Vector2<T>>) -> Option<Self> {
        if samples.len() < MIN_CLOSE_POINT_COUNT || samples.len() % 2 == 0 {
            return None;
        }

        Some(ClosedSamples {
            samples,
            closed_with_midpoint: false,
        })
    }

    /// Number of samples (always odd and at least 3).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false, a closed sequence holds at least 3 samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of sample intervals `M = len() - 1` (always even).
    #[inline]
    pub fn interval_count(&self) -> usize {
        self.samples.len() - 1
    }

    /// True if closing appended a synthetic midpoint sample.
    #[inline]
    pub fn closed_with_midpoint(&self) -> bool {
        self.closed_with_midpoint
    }

    #[inline]
    pub fn samples(&self) -> &[Vector2<T>] {
        &self.samples
    }

    #[inline]
    pub fn first(&self) -> Vector2<T> {
        self.samples[0]
    }

    #[inline]
    pub fn last(&self) -> Vector2<T> {
        self.samples[self.samples.len() - 1]
    }

    /// Total length of the closed polygon through all the samples, including the closing segment
    /// from the last sample back to the first.
    pub fn perimeter(&self) -> T {
        self.iter_closed_segments()
            .fold(T::zero(), |acc, (p0, p1)| acc + (p1 - p0).length())
    }

    /// Iterate over all the segments of the closed polygon (the last one wraps back to the first
    /// sample).
    pub fn iter_closed_segments(
        &self,
    ) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let n = self.samples.len();
        (0..n).map(move |i| (self.samples[i], self.samples[(i + 1) % n]))
    }

    /// Resample the closed polygon uniformly by arc length.
    ///
    /// The result starts at the first sample, holds `count` samples spaced evenly along the
    /// perimeter, and its last sample is a copy of the first one (so its own closing segment is
    /// degenerate). `count` is rounded up to the next odd number and is at least 3. If the polygon
    /// has zero length every sample is the first sample.
    pub fn resample_uniform(&self, count: usize) -> Self {
        let count = {
            let c = count.max(MIN_CLOSE_POINT_COUNT);
            if c % 2 == 0 {
                c + 1
            } else {
                c
            }
        };

        let n = self.samples.len();
        let seg_lengths = self
            .iter_closed_segments()
            .map(|(p0, p1)| (p1 - p0).length())
            .collect::<Vec<_>>();
        let total = seg_lengths.iter().fold(T::zero(), |acc, &l| acc + l);

        let first = self.first();
        if total.fuzzy_eq_zero() {
            return ClosedSamples {
                samples: vec![first; count],
                closed_with_midpoint: false,
            };
        }

        let interval_count = count - 1;
        let mut samples = Vec::with_capacity(count);
        let mut seg_index = 0;
        let mut seg_start_dist = T::zero();
        for j in 0..interval_count {
            let target = total * T::from_index(j) / T::from_index(interval_count);
            while seg_index < n - 1 && seg_start_dist + seg_lengths[seg_index] < target {
                seg_start_dist = seg_start_dist + seg_lengths[seg_index];
                seg_index += 1;
            }

            let seg_length = seg_lengths[seg_index];
            let t = if seg_length.fuzzy_eq_zero() {
                T::zero()
            } else {
                num_traits::real::Real::min((target - seg_start_dist) / seg_length, T::one())
            };

            samples.push(point_from_parametric(
                self.samples[seg_index],
                self.samples[(seg_index + 1) % n],
                t,
            ));
        }

        samples.push(first);

        ClosedSamples {
            samples,
            closed_with_midpoint: false,
        }
    }
}

impl<T> Index<usize> for ClosedSamples<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}
