use super::{CoefficientSet, FrequencyOrder};
use crate::{
    core::{
        math::{integrant, Vector2},
        traits::Real,
    },
    sketch::ClosedSamples,
};

/// Compute the complex Fourier coefficient for a single `frequency` from the closed `samples`.
///
/// `c_n = (1/T) * integral(z(s) * e^(-i * n * w * s) ds)` over one period, approximated with the
/// composite Simpson rule over pairs of sample intervals. With `M` intervals, step `D = 2PI / M`
/// and `factor = 1 / (3 * M)`:
///
/// * sample `0` contributes `+factor` at kernel angle `0` and sample `M` contributes `-factor` at
///   kernel angle `n * D * M` (endpoint correction folded into the closed loop pass),
/// * for odd `j` in `1..M` sample `j` contributes `4 * factor` and sample `j + 1` contributes
///   `2 * factor`, each at kernel angle `n * D * index`.
///
/// Net weights are the usual Simpson `1, 4, 2, 4, ..., 2, 4, 1` scaled by `factor`.
pub fn fourier_coefficient<T>(samples: &ClosedSamples<T>, frequency: i32) -> Vector2<T>
where
    T: Real,
{
    let points = samples.samples();
    let m = samples.interval_count();
    let m_real = T::from_index(m);
    let step = T::tau() / m_real;
    let factor = T::one() / (T::three() * m_real);
    let odd_weight = T::four() * factor;
    let even_weight = T::two() * factor;

    let n_step = T::from_freq(frequency) * step;
    let kernel_at = |index: usize| n_step * T::from_index(index);

    let mut sum = integrant(points[0], T::zero()).scale(factor)
        - integrant(points[m], kernel_at(m)).scale(factor);

    for j in (1..m).step_by(2) {
        sum += integrant(points[j], kernel_at(j)).scale(odd_weight);
        sum += integrant(points[j + 1], kernel_at(j + 1)).scale(even_weight);
    }

    sum
}

/// Compute the Fourier series coefficients for every integer frequency in `-degree..=degree`.
///
/// The returned set always holds exactly `2 * degree + 1` coefficients in the canonical
/// [FrequencyOrder] (`0, +1, -1, ..., +degree, -degree`).
///
/// # Examples
///
/// ```
/// # use epicycles::core::math::*;
/// # use epicycles::fourier::*;
/// # use epicycles::sketch::*;
/// // constant curve only has an offset term
/// let samples = ClosedSamples::from_odd_samples(vec![vec2(2.0, 3.0); 9]).unwrap();
/// let coefficients = compute_fourier_series(&samples, 2);
/// assert_eq!(coefficients.len(), 5);
/// assert!(coefficients.offset().fuzzy_eq(vec2(2.0, 3.0)));
/// assert!(coefficients.get(1).unwrap().radius() < 1e-12);
/// ```
pub fn compute_fourier_series<T>(samples: &ClosedSamples<T>, degree: usize) -> CoefficientSet<T>
where
    T: Real,
{
    let order = FrequencyOrder::new(degree);
    compute_fourier_series_ordered(samples, &order)
}

/// Same as [compute_fourier_series] but visiting the coefficients in the `order` given.
pub fn compute_fourier_series_ordered<T>(
    samples: &ClosedSamples<T>,
    order: &FrequencyOrder,
) -> CoefficientSet<T>
where
    T: Real,
{
    // bounded by MAX_DEGREE so the cast cannot wrap
    let degree = order.degree() as i32;
    let by_frequency = (-degree..=degree)
        .map(|n| fourier_coefficient(samples, n))
        .collect::<Vec<_>>();

    CoefficientSet::from_order(order, &by_frequency)
}
