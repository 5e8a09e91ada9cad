use epicycles::{
    core::math::screen_to_drawing,
    session::{Session, SessionEvent, SessionOptions, SessionState},
};
use std::f64::consts::TAU;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn main() {
    env_logger::init();

    let mut session = Session::new(SessionOptions {
        degree: 12,
        trace_history: 256,
        ..Default::default()
    });

    // pointer positions of a freehand ellipse-ish stroke in window pixels
    let stroke = (0..40).map(|i| {
        let a = TAU * i as f64 / 40.0;
        let wobble = 1.0 + 0.1 * (5.0 * a).sin();
        (
            WIDTH / 2.0 + 250.0 * wobble * a.cos(),
            HEIGHT / 2.0 - 150.0 * wobble * a.sin(),
        )
    });

    for (px, py) in stroke {
        let p = screen_to_drawing(px, py, WIDTH, HEIGHT);
        session
            .handle(SessionEvent::AddPoint { x: p.x, y: p.y })
            .unwrap();
    }
    assert_eq!(session.state(), SessionState::Sketching);
    log::info!("sketched {} points", session.points().len());

    if let Err(e) = session.handle(SessionEvent::Commit) {
        log::error!("commit failed: {}", e);
        return;
    }

    // simulate 60 frames per second for one full period
    let frame_count = (TAU * 60.0) as usize;
    let mut segments = 0;
    for i in 0..=frame_count {
        let elapsed = i as f64 / 60.0;
        if let Some(frame) = session.frame(elapsed) {
            if frame.segment.is_some() {
                segments += 1;
            }
            if i % 60 == 0 {
                let tip = frame.chain.tip();
                log::info!(
                    "t = {:.2}: tip ({:.4}, {:.4}), {} circles",
                    frame.time,
                    tip.x,
                    tip.y,
                    frame.chain.link_count()
                );
            }
        }
    }

    assert_eq!(session.state(), SessionState::Animating);
    assert_eq!(segments, frame_count);
    log::info!(
        "{} trace segments, {} tips kept in history",
        segments,
        session.trace().history().len()
    );

    // a second commit is refused until the session is reset
    assert!(session.commit().is_err());
    session.handle(SessionEvent::Reset).unwrap();
    assert_eq!(session.state(), SessionState::Idle);
}
