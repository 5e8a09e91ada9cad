use epicycles::{
    core::math::vec2,
    epicycle::{compose_chain, TraceRecorder},
    fourier::compute_fourier_series,
    sketch::close_curve,
};
use std::f64::consts::TAU;

fn main() {
    env_logger::init();

    closing_the_sketch();
    coefficients_and_chain();
}

fn closing_the_sketch() {
    let square = [
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(1.0, 1.0),
        vec2(0.0, 1.0),
    ];

    // even point count so the midpoint of the first and last points is appended
    let closed = close_curve(&square).unwrap();
    assert_eq!(closed.len(), 5, "Closed square should have 5 samples");
    assert!(
        closed.closed_with_midpoint(),
        "Even point count should be closed with a midpoint"
    );
    assert_eq!(
        closed.last(),
        vec2(0.0, 0.5),
        "Closing sample should be the midpoint of the first and last points"
    );

    // odd point count is used as is
    let closed = close_curve(&square[..3]).unwrap();
    assert_eq!(closed.len(), 3, "Odd point count should not change");
    assert!(!closed.closed_with_midpoint());
}

fn coefficients_and_chain() {
    let square = [
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(1.0, 1.0),
        vec2(0.0, 1.0),
    ];
    let closed = close_curve(&square).unwrap().resample_uniform(129);

    let coefficients = compute_fourier_series(&closed, 8);
    assert_eq!(
        coefficients.len(),
        17,
        "Degree 8 should give 17 coefficients"
    );
    log::info!("offset term: {:?}", coefficients.offset());
    for c in coefficients.iter() {
        log::info!(
            "frequency {:>3}: re = {:>8.5}, im = {:>8.5}, radius = {:.5}",
            c.frequency,
            c.re(),
            c.im(),
            c.radius()
        );
    }

    // one full period traced in 64 steps
    let mut recorder = TraceRecorder::new();
    let mut trace_length = 0.0;
    for i in 0..=64 {
        let t = TAU * i as f64 / 64.0;
        let chain = compose_chain(&coefficients, t);
        assert_eq!(chain.link_count(), 16, "Chain should have 2N links");
        if let Some(segment) = recorder.record(chain.tip()) {
            trace_length += segment.length();
        }
    }

    log::info!("traced outline length: {:.4}", trace_length);
    assert!(
        (trace_length - 4.0).abs() < 0.5,
        "Traced outline should be close to the square perimeter"
    );
}
