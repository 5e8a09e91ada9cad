use super::{visit_order::frequency_slot, FrequencyOrder};
use crate::{
    core::{
        math::{vec2, Vector2},
        traits::Real,
    },
    errors::FrequencyOrderError,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complex Fourier coefficient `c_n` for the integer frequency `n`.
///
/// `value.x` is the real part and `value.y` the imaginary part.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FourierCoefficient<T = f64> {
    pub frequency: i32,
    pub value: Vector2<T>,
}

impl<T> FourierCoefficient<T>
where
    T: Real,
{
    #[inline]
    pub fn new(frequency: i32, value: Vector2<T>) -> Self {
        FourierCoefficient { frequency, value }
    }

    #[inline]
    pub fn re(&self) -> T {
        self.value.x
    }

    #[inline]
    pub fn im(&self) -> T {
        self.value.y
    }

    /// Magnitude of the coefficient, the radius of its epicycle.
    #[inline]
    pub fn radius(&self) -> T {
        self.value.length()
    }

    /// The coefficient vector rotated to time (or curve parameter) `t`: `c_n * e^(i * n * t)`.
    #[inline]
    pub fn at(&self, t: T) -> Vector2<T> {
        self.value.rotate(T::from_freq(self.frequency) * t)
    }
}

/// Fixed size set of `2 * degree + 1` coefficients stored in an explicit visiting order.
///
/// The set is immutable once built. Iteration follows the [FrequencyOrder], lookup by frequency is
/// available through [CoefficientSet::get].
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSet<T = f64> {
    degree: usize,
    coefficients: Vec<FourierCoefficient<T>>,
}

impl<T> CoefficientSet<T>
where
    T: Real,
{
    /// Build a set from `coefficients` given in visiting order.
    ///
    /// The frequencies are validated the same way as [FrequencyOrder::from_frequencies]: every
    /// frequency in `-degree..=degree` exactly once with the zero frequency first.
    pub fn from_coefficients(
        coefficients: Vec<FourierCoefficient<T>>,
        degree: usize,
    ) -> Result<Self, FrequencyOrderError> {
        FrequencyOrder::from_frequencies(coefficients.iter().map(|c| c.frequency).collect(), degree)?;
        Ok(CoefficientSet {
            degree,
            coefficients,
        })
    }

    /// Build a set by visiting `by_frequency` (indexed by `frequency + degree`) in `order`.
    pub(crate) fn from_order(order: &FrequencyOrder, by_frequency: &[Vector2<T>]) -> Self {
        debug_assert_eq!(by_frequency.len(), order.len());
        let degree = order.degree();
        let coefficients = order
            .iter()
            .filter_map(|f| {
                frequency_slot(f, degree).map(|slot| FourierCoefficient::new(f, by_frequency[slot]))
            })
            .collect();

        CoefficientSet {
            degree,
            coefficients,
        }
    }

    /// Highest frequency magnitude in the set.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of coefficients (`2 * degree + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false, the offset term is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Coefficients in visiting order.
    #[inline]
    pub fn coefficients(&self) -> &[FourierCoefficient<T>] {
        &self.coefficients
    }

    /// Iterate coefficients in visiting order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FourierCoefficient<T>> + '_ {
        self.coefficients.iter()
    }

    /// Coefficient for `frequency`, `None` if outside of `-degree..=degree`.
    pub fn get(&self, frequency: i32) -> Option<FourierCoefficient<T>> {
        self.coefficients
            .iter()
            .find(|c| c.frequency == frequency)
            .copied()
    }

    /// The zero frequency (mean/offset) term.
    #[inline]
    pub fn offset(&self) -> Vector2<T> {
        self.coefficients[0].value
    }

    /// Evaluate the truncated Fourier series `sum(c_n * e^(i * n * s))` at parameter `s`.
    ///
    /// `s` spans one period over `[0, 2PI)`.
    pub fn evaluate(&self, s: T) -> Vector2<T> {
        self.coefficients
            .iter()
            .fold(Vector2::zero(), |acc, c| acc + c.at(s))
    }

    /// Flat `[frequency, re, im]` triple per coefficient in visiting order.
    pub fn to_flat(&self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.coefficients.len() * 3);
        for c in self.coefficients.iter() {
            result.extend_from_slice(&[T::from_freq(c.frequency), c.re(), c.im()]);
        }
        result
    }

    /// Sum of all the coefficient radii, the furthest the chain tip can ever be from the origin.
    pub fn total_radius(&self) -> T {
        self.coefficients
            .iter()
            .skip(1)
            .fold(T::zero(), |acc, c| acc + c.radius())
    }

    /// Coefficient values indexed by `frequency + degree` (ascending frequency).
    pub fn by_frequency(&self) -> Vec<Vector2<T>> {
        let mut result = vec![vec2(T::zero(), T::zero()); self.coefficients.len()];
        for c in self.coefficients.iter() {
            if let Some(slot) = frequency_slot(c.frequency, self.degree) {
                result[slot] = c.value;
            }
        }
        result
    }
}
