//! Session state machine tying the sketch, the Fourier analysis and the per frame epicycle chain
//! together.
//!
//! Input collaborators push [SessionEvent]s (or call the matching methods), renderers pull the
//! sketch points and the [EpicycleFrame] produced for every animation frame. The session holds no
//! reference to any windowing or graphics object.
mod options;

pub use options::*;

use crate::{
    core::traits::Real,
    epicycle::{compose_chain, EpicycleChain, TraceRecorder, TraceSegment},
    errors::CommitError,
    fourier::{compute_fourier_series, CoefficientSet},
    sketch::{AppendOutcome, ClosedSamples, CurveBuffer, SketchPoint, MIN_CLOSE_POINT_COUNT},
};

/// Lifecycle state of a [Session].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No points sketched.
    Idle,
    /// At least one point sketched, not committed.
    Sketching,
    /// Committed, coefficients computed, no frame produced yet.
    Ready,
    /// At least one frame produced since commit.
    Animating,
}

impl SessionState {
    /// Returns true if the sketch has been committed (`Ready` or `Animating`).
    #[inline]
    pub fn is_committed(&self) -> bool {
        matches!(self, SessionState::Ready | SessionState::Animating)
    }
}

/// Typed input events accepted by [Session::handle].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SessionEvent<T = f64> {
    /// Add a sketch point, already projected into drawing space.
    AddPoint { x: T, y: T },
    /// Freeze the sketch and compute the coefficients.
    Commit,
    /// Discard everything and return to [SessionState::Idle].
    Reset,
}

/// Output of a single animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct EpicycleFrame<T = f64> {
    /// Chain time (elapsed seconds scaled by [SessionOptions::time_scale]).
    pub time: T,
    /// Epicycle chain composed at `time`.
    pub chain: EpicycleChain<T>,
    /// Newest trace segment, `None` on the first frame after commit.
    pub segment: Option<TraceSegment<T>>,
}

/// Owns all the state of one sketch/animate session.
///
/// # Examples
///
/// ```
/// # use epicycles::session::*;
/// let mut session = Session::<f64>::new(SessionOptions::new());
/// for &(x, y) in &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
///     session.handle(SessionEvent::AddPoint { x, y }).unwrap();
/// }
/// session.handle(SessionEvent::Commit).unwrap();
/// assert_eq!(session.state(), SessionState::Ready);
///
/// let first = session.frame(0.0).unwrap();
/// assert!(first.segment.is_none());
/// let second = session.frame(0.1).unwrap();
/// assert!(second.segment.is_some());
/// assert_eq!(session.state(), SessionState::Animating);
/// ```
#[derive(Debug, Clone)]
pub struct Session<T = f64>
where
    T: Real,
{
    options: SessionOptions<T>,
    buffer: CurveBuffer<T>,
    state: SessionState,
    coefficients: Option<CoefficientSet<T>>,
    trace: TraceRecorder<T>,
}

impl<T> Session<T>
where
    T: Real,
{
    pub fn new(options: SessionOptions<T>) -> Self {
        let buffer = CurveBuffer::new(options.max_points, options.min_point_distance);
        let trace = TraceRecorder::with_history(options.trace_history);
        Session {
            options,
            buffer,
            state: SessionState::Idle,
            coefficients: None,
            trace,
        }
    }

    /// Dispatch an input event.
    ///
    /// Only [SessionEvent::Commit] can fail, adding points never does (see
    /// [Session::add_point]).
    pub fn handle(&mut self, event: SessionEvent<T>) -> Result<(), CommitError> {
        match event {
            SessionEvent::AddPoint { x, y } => {
                self.add_point(x, y);
                Ok(())
            }
            SessionEvent::Commit => self.commit().map(|_| ()),
            SessionEvent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Add a sketch point while sketching.
    ///
    /// Returns [AppendOutcome::Frozen] without changing anything once the sketch is committed.
    pub fn add_point(&mut self, x: T, y: T) -> AppendOutcome {
        if self.state.is_committed() {
            log::trace!("ignoring point ({:?}, {:?}), sketch is committed", x, y);
            return AppendOutcome::Frozen;
        }

        let outcome = self
            .buffer
            .append(SketchPoint::new(x, y, self.options.point_radius));
        log::trace!("add point ({:?}, {:?}): {:?}", x, y, outcome);

        if outcome.is_appended() {
            self.state = SessionState::Sketching;
        }

        outcome
    }

    /// Freeze the sketch, close it and compute the Fourier coefficients.
    ///
    /// Refused without any state change if fewer than 3 points are sketched or the sketch is
    /// already committed.
    pub fn commit(&mut self) -> Result<&CoefficientSet<T>, CommitError> {
        if self.state.is_committed() {
            log::warn!("commit refused: sketch already committed");
            return Err(CommitError::AlreadyCommitted);
        }

        let closed = match ClosedSamples::from_buffer(&self.buffer) {
            Some(closed) => closed,
            None => {
                let count = self.buffer.count();
                log::warn!(
                    "commit refused: {} points sketched, {} required",
                    count,
                    MIN_CLOSE_POINT_COUNT
                );
                return Err(CommitError::InsufficientPoints {
                    count,
                    required: MIN_CLOSE_POINT_COUNT,
                });
            }
        };

        log::debug!(
            "closed {} sketch points into {} samples (midpoint appended: {})",
            self.buffer.count(),
            closed.len(),
            closed.closed_with_midpoint()
        );

        let closed = match self.options.resample_count {
            Some(count) => {
                let resampled = closed.resample_uniform(count);
                log::debug!("resampled closed sketch to {} samples", resampled.len());
                resampled
            }
            None => closed,
        };

        let coefficients = compute_fourier_series(&closed, self.options.degree);
        log::debug!(
            "computed {} Fourier coefficients (degree {}), offset {:?}",
            coefficients.len(),
            coefficients.degree(),
            coefficients.offset()
        );

        self.trace.clear();
        self.state = SessionState::Ready;
        let coefficients = self.coefficients.insert(coefficients);
        Ok(&*coefficients)
    }

    /// Produce the frame for `elapsed` seconds since commit.
    ///
    /// Returns `None` unless the sketch is committed. The first frame after commit moves the
    /// session to [SessionState::Animating] and carries no trace segment.
    pub fn frame(&mut self, elapsed: T) -> Option<EpicycleFrame<T>> {
        let coefficients = self.coefficients.as_ref()?;
        let time = elapsed * self.options.time_scale;
        let chain = compose_chain(coefficients, time);
        let segment = self.trace.record(chain.tip());
        if self.state == SessionState::Ready {
            log::debug!("animation started");
            self.state = SessionState::Animating;
        }

        log::trace!("frame at t = {:?}, tip {:?}", time, chain.tip());
        Some(EpicycleFrame {
            time,
            chain,
            segment,
        })
    }

    /// Discard the sketch, coefficients and trace and return to [SessionState::Idle].
    ///
    /// Safe to call in any state.
    pub fn reset(&mut self) {
        log::debug!("session reset from {:?}", self.state);
        self.buffer.clear();
        self.coefficients = None;
        self.trace.clear();
        self.state = SessionState::Idle;
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn options(&self) -> &SessionOptions<T> {
        &self.options
    }

    /// Sketch points in capture order.
    #[inline]
    pub fn points(&self) -> &[SketchPoint<T>] {
        self.buffer.points()
    }

    #[inline]
    pub fn curve_buffer(&self) -> &CurveBuffer<T> {
        &self.buffer
    }

    /// Coefficients computed by the last commit, `None` until committed.
    #[inline]
    pub fn coefficients(&self) -> Option<&CoefficientSet<T>> {
        self.coefficients.as_ref()
    }

    #[inline]
    pub fn trace(&self) -> &TraceRecorder<T> {
        &self.trace
    }
}
