use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default maximum number of sketch points held by a session.
pub const DEFAULT_MAX_POINTS: usize = 128;
/// Default Fourier degree, coefficients span frequencies `-16..=16`.
pub const DEFAULT_DEGREE: usize = 16;

/// Struct to hold the startup configuration of a [Session](super::Session).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions<T>
where
    T: Real,
{
    /// Maximum number of sketch points, points added past this are silently ignored.
    pub max_points: usize,
    /// Fourier degree `N`, the coefficient set spans frequencies `-N..=N` and the chain has `2N`
    /// rotating links.
    pub degree: usize,
    /// Points closer than this to the previous sketch point are ignored (zero disables the check).
    pub min_point_distance: T,
    /// Rendering radius assigned to every sketch point.
    pub point_radius: T,
    /// If set then the closed sketch is resampled uniformly by arc length to this many samples
    /// (rounded up to odd) before analysis.
    pub resample_count: Option<usize>,
    /// Multiplier from elapsed seconds to chain time, one period of the curve takes
    /// `2PI / time_scale` seconds.
    pub time_scale: T,
    /// Number of recent trace tips kept by the session trace recorder (zero keeps none).
    pub trace_history: usize,
}

impl<T> SessionOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            degree: DEFAULT_DEGREE,
            min_point_distance: T::from(1e-3).unwrap(),
            point_radius: T::from(0.01).unwrap(),
            resample_count: None,
            time_scale: T::one(),
            trace_history: 0,
        }
    }
}

impl<T> Default for SessionOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
