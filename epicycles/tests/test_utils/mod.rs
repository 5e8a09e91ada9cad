#![allow(dead_code)]
use epicycles::{
    core::{
        math::{dist_squared, point_from_parametric, vec2, Vector2},
        traits::FuzzyEq,
    },
    fourier::CoefficientSet,
    sketch::ClosedSamples,
};
use static_aabb2d_index::AABB;
use std::f64::consts::TAU;

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Corners of the unit square in counter clockwise order starting at the origin.
pub fn unit_square() -> Vec<Vector2<f64>> {
    vec![
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(1.0, 1.0),
        vec2(0.0, 1.0),
    ]
}

/// `count` points sampled along a heart shaped curve scaled to roughly fit in `[-1, 1]`.
pub fn heart_points(count: usize) -> Vec<Vector2<f64>> {
    (0..count)
        .map(|j| {
            let t = TAU * j as f64 / count as f64;
            let x = t.sin().powi(3);
            let y = (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos())
                / 16.0;
            vec2(x, y)
        })
        .collect()
}

/// Samples `s_j = 2PI * j / m` for `j` in `0..=m` of the band limited curve
/// `e^(is) + 0.3 * e^(-2is) + 0.1 * e^(3is)`.
pub fn harmonic_samples(m: usize) -> ClosedSamples<f64> {
    let term = |freq: f64, s: f64, scale: f64| vec2((freq * s).cos(), (freq * s).sin()).scale(scale);
    let samples = (0..=m)
        .map(|j| {
            let s = TAU * j as f64 / m as f64;
            term(1.0, s, 1.0) + term(-2.0, s, 0.3) + term(3.0, s, 0.1)
        })
        .collect();
    ClosedSamples::from_odd_samples(samples).unwrap()
}

/// Shortest distance from `p` to the line segment `a -> b`.
pub fn dist_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len_squared = ab.length_squared();
    if len_squared.fuzzy_eq_zero() {
        return dist_squared(p, a).sqrt();
    }

    let t = ((p - a).dot(ab) / len_squared).clamp(0.0, 1.0);
    dist_squared(p, point_from_parametric(a, b, t)).sqrt()
}

/// Shortest distance from `p` to the closed polygon through `polygon`.
pub fn dist_to_closed_polygon(p: Vector2<f64>, polygon: &[Vector2<f64>]) -> f64 {
    let n = polygon.len();
    (0..n)
        .map(|i| dist_to_segment(p, polygon[i], polygon[(i + 1) % n]))
        .fold(f64::INFINITY, f64::min)
}

/// Largest distance from the reconstructed curve (evaluated at `steps` evenly spaced parameters)
/// to the closed `polygon` outline.
pub fn outline_max_error(
    coefficients: &CoefficientSet<f64>,
    polygon: &[Vector2<f64>],
    steps: usize,
) -> f64 {
    (0..steps)
        .map(|i| {
            let p = coefficients.evaluate(TAU * i as f64 / steps as f64);
            dist_to_closed_polygon(p, polygon)
        })
        .fold(0.0, f64::max)
}

/// Mean squared error between the samples and the reconstruction at the sample parameters
/// `s_j = 2PI * j / M`.
pub fn sample_mse(coefficients: &CoefficientSet<f64>, samples: &ClosedSamples<f64>) -> f64 {
    let m = samples.interval_count() as f64;
    let total = samples
        .samples()
        .iter()
        .enumerate()
        .map(|(j, &z)| dist_squared(coefficients.evaluate(TAU * j as f64 / m), z))
        .sum::<f64>();
    total / samples.len() as f64
}
