mod test_utils;

use epicycles::{
    assert_fuzzy_eq, closed_curve,
    core::{math::vec2, traits::FuzzyEq},
    sketch::{close_curve, ClosedSamples, CurveBuffer, SketchPoint, MIN_CLOSE_POINT_COUNT},
};
use test_utils::{heart_points, unit_square};

#[test]
fn too_few_points_cannot_close() {
    let square = unit_square();
    assert!(close_curve::<f64>(&[]).is_none());
    assert!(close_curve(&square[..1]).is_none());
    assert!(close_curve(&square[..2]).is_none());
    assert!(close_curve(&square[..MIN_CLOSE_POINT_COUNT]).is_some());
}

#[test]
fn odd_count_is_unchanged() {
    let points = heart_points(33);
    let closed = close_curve(&points).unwrap();
    assert_eq!(closed.len(), 33);
    assert_eq!(closed.interval_count(), 32);
    assert!(!closed.closed_with_midpoint());
    assert_eq!(closed.samples(), &points[..]);
}

#[test]
fn even_count_appends_midpoint_of_first_and_last() {
    let closed = closed_curve![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    assert_eq!(closed.len(), 5);
    assert!(closed.closed_with_midpoint());
    assert_eq!(closed[0], vec2(0.0, 0.0));
    assert_eq!(closed[3], vec2(0.0, 1.0));
    assert_eq!(closed.last(), vec2(0.0, 0.5));

    let points = heart_points(32);
    let closed = close_curve(&points).unwrap();
    assert_eq!(closed.len(), 33);
    assert_fuzzy_eq!(
        closed.last(),
        vec2(
            (points[0].x + points[31].x) / 2.0,
            (points[0].y + points[31].y) / 2.0
        )
    );
}

#[test]
fn closed_length_is_always_odd() {
    let points = heart_points(64);
    for count in MIN_CLOSE_POINT_COUNT..points.len() {
        let closed = close_curve(&points[..count]).unwrap();
        assert_eq!(closed.len() % 2, 1, "count: {}", count);
        assert_eq!(closed.interval_count() % 2, 0);
        assert!(closed.len() == count || closed.len() == count + 1);
    }
}

#[test]
fn close_from_buffer() {
    let mut buffer = CurveBuffer::new(8, 0.0);
    for p in unit_square() {
        buffer.append(SketchPoint::from_vector2(p, 0.01));
    }

    let closed = ClosedSamples::from_buffer(&buffer).unwrap();
    assert_eq!(closed.len(), 5);
    assert_eq!(closed.last(), vec2(0.0, 0.5));

    buffer.clear();
    buffer.append(SketchPoint::new(0.0, 0.0, 0.01));
    buffer.append(SketchPoint::new(1.0, 0.0, 0.01));
    assert!(ClosedSamples::from_buffer(&buffer).is_none());
}

#[test]
fn from_odd_samples_requires_odd_length() {
    assert!(ClosedSamples::from_odd_samples(vec![vec2(0.0, 0.0); 3]).is_some());
    assert!(ClosedSamples::from_odd_samples(vec![vec2(0.0, 0.0); 4]).is_none());
    assert!(ClosedSamples::from_odd_samples(vec![vec2(0.0, 0.0); 1]).is_none());
    assert!(ClosedSamples::<f64>::from_odd_samples(Vec::new()).is_none());
}

#[test]
fn perimeter_includes_closing_segment() {
    let closed = close_curve(&unit_square()).unwrap();
    assert_fuzzy_eq!(closed.perimeter(), 4.0);
    assert_eq!(closed.iter_closed_segments().count(), 5);

    let triangle = closed_curve![(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)];
    assert_fuzzy_eq!(triangle.perimeter(), 12.0);
}

#[test]
fn resample_uniform_spacing() {
    let closed = close_curve(&unit_square()).unwrap();
    let resampled = closed.resample_uniform(17);
    assert_eq!(resampled.len(), 17);
    assert!(!resampled.closed_with_midpoint());
    assert_eq!(resampled.first(), vec2(0.0, 0.0));
    assert_eq!(resampled.last(), resampled.first());

    // perimeter 4 split into 16 intervals of 0.25
    let expected = [
        vec2(0.0, 0.0),
        vec2(0.25, 0.0),
        vec2(0.5, 0.0),
        vec2(0.75, 0.0),
        vec2(1.0, 0.0),
        vec2(1.0, 0.25),
        vec2(1.0, 0.5),
        vec2(1.0, 0.75),
        vec2(1.0, 1.0),
        vec2(0.75, 1.0),
        vec2(0.5, 1.0),
        vec2(0.25, 1.0),
        vec2(0.0, 1.0),
        vec2(0.0, 0.75),
        vec2(0.0, 0.5),
        vec2(0.0, 0.25),
        vec2(0.0, 0.0),
    ];
    for (i, (&actual, &expected)) in resampled.samples().iter().zip(expected.iter()).enumerate() {
        assert!(actual.fuzzy_eq(expected), "index: {}, actual: {:?}", i, actual);
    }

    // resampling keeps the perimeter since every corner lands on a sample
    assert_fuzzy_eq!(resampled.perimeter(), 4.0);
}

#[test]
fn resample_skips_repeated_points() {
    // repeated start point gives a zero length first segment
    let points: [epicycles::core::math::Vector2<f64>; 5] = [
        vec2(0.0, 0.0),
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(1.0, 1.0),
        vec2(0.0, 1.0),
    ];
    let closed = close_curve(&points).unwrap();
    assert!(!closed.closed_with_midpoint());
    assert_fuzzy_eq!(closed.perimeter(), 4.0);

    let resampled = closed.resample_uniform(17);
    let expected = close_curve(&unit_square()).unwrap().resample_uniform(17);
    assert_eq!(resampled.len(), expected.len());
    for (i, (&actual, &expected)) in resampled
        .samples()
        .iter()
        .zip(expected.samples().iter())
        .enumerate()
    {
        assert!(!actual.x.is_nan() && !actual.y.is_nan(), "index: {}", i);
        assert!(actual.fuzzy_eq(expected), "index: {}, actual: {:?}", i, actual);
    }
}

#[test]
fn resample_count_rounded_up_to_odd() {
    let closed = close_curve(&unit_square()).unwrap();
    assert_eq!(closed.resample_uniform(16).len(), 17);
    assert_eq!(closed.resample_uniform(0).len(), 3);
    assert_eq!(closed.resample_uniform(1).len(), 3);
    assert_eq!(closed.resample_uniform(129).len(), 129);
}

#[test]
fn resample_degenerate_curve() {
    let closed = close_curve(&[vec2(0.5, 0.5); 4]).unwrap();
    assert!(closed.perimeter().fuzzy_eq_zero());
    let resampled = closed.resample_uniform(9);
    assert_eq!(resampled.len(), 9);
    assert!(resampled.samples().iter().all(|&p| p == vec2(0.5, 0.5)));
}
