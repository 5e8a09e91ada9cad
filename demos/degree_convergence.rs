use epicycles::{
    core::math::{vec2, Vector2},
    fourier::compute_fourier_series,
    sketch::close_curve,
};
use std::f64::consts::TAU;

fn main() {
    env_logger::init();

    // star outline, 10 corners. Simpson weighted coefficients are not an exact least squares fit
    // so the error may tick up by a tiny amount between neighboring degrees.
    let star = (0..10)
        .map(|i| {
            let a = TAU * i as f64 / 10.0;
            let r = if i % 2 == 0 { 1.0 } else { 0.4 };
            vec2(r * a.cos(), r * a.sin())
        })
        .collect::<Vec<_>>();

    let closed = close_curve(&star).unwrap().resample_uniform(257);
    let m = closed.interval_count() as f64;

    let mut previous = f64::INFINITY;
    for &degree in [0, 1, 4, 8, 16, 32].iter() {
        let coefficients = compute_fourier_series(&closed, degree);
        let mse = closed
            .samples()
            .iter()
            .enumerate()
            .map(|(j, &z)| {
                let d: Vector2 = coefficients.evaluate(TAU * j as f64 / m) - z;
                d.length_squared()
            })
            .sum::<f64>()
            / closed.len() as f64;

        log::info!(
            "degree {:>2}: {:>2} circles, mean squared error {:.3e}",
            degree,
            2 * degree,
            mse
        );
        assert!(
            mse <= previous + 1e-6,
            "Error should not grow when adding coefficients"
        );
        previous = mse;
    }
}
