mod test_utils;

use epicycles::{
    assert_fuzzy_eq,
    core::{math::vec2, traits::FuzzyEq},
    epicycle::compose_chain,
    errors::CommitError,
    session::{Session, SessionEvent, SessionOptions, SessionState},
    sketch::AppendOutcome,
};
use std::f64::consts::TAU;
use test_utils::{heart_points, outline_max_error, unit_square};

fn add_square(session: &mut Session<f64>) {
    for p in unit_square() {
        session
            .handle(SessionEvent::AddPoint { x: p.x, y: p.y })
            .unwrap();
    }
}

#[test]
fn default_options() {
    let options = SessionOptions::<f64>::default();
    assert_eq!(options, SessionOptions::new());
    assert_eq!(options.max_points, 128);
    assert_eq!(options.degree, 16);
    assert_eq!(options.resample_count, None);
    assert_eq!(options.time_scale, 1.0);
    assert_eq!(options.trace_history, 0);
}

#[test]
fn starts_idle() {
    let mut session = Session::<f64>::new(SessionOptions::new());
    assert_eq!(session.state(), SessionState::Idle);
    assert!(!session.state().is_committed());
    assert!(session.points().is_empty());
    assert!(session.coefficients().is_none());
    assert!(session.frame(0.0).is_none());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn first_point_starts_sketching() {
    let mut session = Session::<f64>::new(SessionOptions::new());
    assert_eq!(session.add_point(0.25, -0.5), AppendOutcome::Appended);
    assert_eq!(session.state(), SessionState::Sketching);
    assert_eq!(session.points().len(), 1);
    assert_eq!(session.points()[0].pos(), vec2(0.25, -0.5));
    assert_eq!(session.points()[0].radius, session.options().point_radius);
}

#[test]
fn commit_refused_with_fewer_than_three_points() {
    let mut session = Session::<f64>::new(SessionOptions::new());
    assert_eq!(
        session.commit(),
        Err(CommitError::InsufficientPoints {
            count: 0,
            required: 3
        })
    );
    assert_eq!(session.state(), SessionState::Idle);

    session.add_point(0.0, 0.0);
    session.add_point(1.0, 0.0);
    assert_eq!(
        session.handle(SessionEvent::Commit),
        Err(CommitError::InsufficientPoints {
            count: 2,
            required: 3
        })
    );
    assert_eq!(session.state(), SessionState::Sketching);
    assert_eq!(session.points().len(), 2);
    assert!(session.coefficients().is_none());

    // sketching continues after a refused commit
    session.add_point(1.0, 1.0);
    assert!(session.commit().is_ok());
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn commit_computes_coefficients() {
    let mut session = Session::new(SessionOptions {
        degree: 3,
        ..Default::default()
    });
    add_square(&mut session);
    let coefficients = session.commit().unwrap().clone();
    assert_eq!(coefficients.len(), 7);
    assert_fuzzy_eq!(coefficients.offset(), vec2(0.5, 13.0 / 24.0));
    assert_eq!(session.coefficients(), Some(&coefficients));
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn committed_sketch_is_frozen() {
    let mut session = Session::<f64>::new(SessionOptions::new());
    add_square(&mut session);
    session.commit().unwrap();

    assert_eq!(session.add_point(0.5, 0.5), AppendOutcome::Frozen);
    assert!(session
        .handle(SessionEvent::AddPoint { x: 0.7, y: 0.7 })
        .is_ok());
    assert_eq!(session.points().len(), 4);
    assert_eq!(session.commit(), Err(CommitError::AlreadyCommitted));
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn saturated_points_ignored() {
    let mut session = Session::new(SessionOptions {
        max_points: 3,
        ..Default::default()
    });
    assert!(session.add_point(0.0, 0.0).is_appended());
    assert!(session.add_point(1.0, 0.0).is_appended());
    assert!(session.add_point(1.0, 1.0).is_appended());
    assert_eq!(session.add_point(0.0, 1.0), AppendOutcome::Saturated);
    assert_eq!(session.points().len(), 3);
    assert_eq!(session.state(), SessionState::Sketching);
}

#[test]
fn near_duplicate_points_ignored() {
    let mut session = Session::new(SessionOptions {
        min_point_distance: 0.05,
        ..Default::default()
    });
    assert!(session.add_point(0.0, 0.0).is_appended());
    assert_eq!(session.add_point(0.01, 0.01), AppendOutcome::TooClose);
    assert_eq!(session.points().len(), 1);
}

#[test]
fn frames_animate_and_trace() {
    let mut session = Session::new(SessionOptions {
        degree: 4,
        ..Default::default()
    });
    add_square(&mut session);
    session.handle(SessionEvent::Commit).unwrap();

    let first = session.frame(0.0).unwrap();
    assert_eq!(session.state(), SessionState::Animating);
    assert!(first.segment.is_none());
    assert_eq!(first.chain.link_count(), 8);

    let second = session.frame(0.05).unwrap();
    let segment = second.segment.unwrap();
    assert_eq!(segment.previous, first.chain.tip());
    assert_eq!(segment.current, second.chain.tip());
    assert_eq!(session.trace().last_tip(), Some(second.chain.tip()));
    assert_eq!(session.state(), SessionState::Animating);

    // frames are a pure function of elapsed time
    let coefficients = session.coefficients().unwrap();
    assert_eq!(second.chain, compose_chain(coefficients, 0.05));
}

#[test]
fn time_scale_applied_to_elapsed() {
    let mut session = Session::new(SessionOptions {
        degree: 2,
        time_scale: 2.0,
        ..Default::default()
    });
    add_square(&mut session);
    session.commit().unwrap();

    let frame = session.frame(0.25).unwrap();
    assert_fuzzy_eq!(frame.time, 0.5);
    let coefficients = session.coefficients().unwrap();
    assert_eq!(frame.chain, compose_chain(coefficients, 0.5));
}

#[test]
fn reset_returns_to_idle_from_any_state() {
    let mut session = Session::<f64>::new(SessionOptions::new());
    session.reset();
    assert_eq!(session.state(), SessionState::Idle);

    session.add_point(0.0, 0.0);
    session.handle(SessionEvent::Reset).unwrap();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.points().is_empty());

    add_square(&mut session);
    session.commit().unwrap();
    session.reset();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.coefficients().is_none());

    add_square(&mut session);
    session.commit().unwrap();
    session.frame(0.0);
    session.frame(0.1);
    session.reset();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.points().is_empty());
    assert!(session.coefficients().is_none());
    assert_eq!(session.trace().last_tip(), None);
    assert!(session.frame(0.2).is_none());

    // new sketch after reset, trace restarts
    add_square(&mut session);
    session.commit().unwrap();
    assert!(session.frame(0.3).unwrap().segment.is_none());
}

#[test]
fn square_end_to_end() {
    let square = unit_square();

    let mut coarse = Session::new(SessionOptions {
        degree: 0,
        ..Default::default()
    });
    add_square(&mut coarse);
    coarse.commit().unwrap();
    let coarse_tip = coarse.frame(0.0).unwrap().chain.tip();

    let mut session = Session::new(SessionOptions {
        degree: 1,
        ..Default::default()
    });
    add_square(&mut session);
    session.commit().unwrap();
    let tip = session.frame(0.0).unwrap().chain.tip();

    // tip starts near the first sketched point and closer than the offset term alone
    assert_fuzzy_eq!(tip, vec2(1.0 / 6.0, 7.0 / 24.0));
    assert!(tip.length() < 0.35);
    assert!(tip.length() < coarse_tip.length());

    let mut resampled = Session::new(SessionOptions {
        degree: 16,
        resample_count: Some(129),
        ..Default::default()
    });
    add_square(&mut resampled);
    resampled.commit().unwrap();
    let tip = resampled.frame(0.0).unwrap().chain.tip();
    assert!(tip.length() < 0.02);
    let error = outline_max_error(resampled.coefficients().unwrap(), &square, 400);
    assert!(error < 0.015);
}

#[test]
fn heart_sketch_traces_closed_loop() {
    let mut session = Session::new(SessionOptions {
        degree: 8,
        trace_history: 64,
        ..Default::default()
    });
    for p in heart_points(32) {
        session.add_point(p.x, p.y);
    }
    session.commit().unwrap();

    let start = session.frame(0.0).unwrap().chain.tip();
    for i in 1..64 {
        let frame = session.frame(TAU * i as f64 / 64.0).unwrap();
        assert!(frame.segment.is_some());
    }
    let end = session.frame(TAU).unwrap().chain.tip();
    assert_fuzzy_eq!(end, start);
    assert_eq!(session.trace().history().len(), 64);
}
