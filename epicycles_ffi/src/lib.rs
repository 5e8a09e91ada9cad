//! This module contains the C foreign function interface for epicycles.
#![allow(non_camel_case_types)]
use core::slice;
use epicycles::{
    core::math::{circle_fan_vertexes, screen_to_drawing, Vector2},
    errors::CommitError,
    fourier::FourierCoefficient,
    session::{EpicycleFrame, Session, SessionOptions, SessionState},
    sketch::{AppendOutcome, SketchPoint},
};
use std::{convert::TryFrom, panic};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ecyc_point {
    pub x: f64,
    pub y: f64,
}

impl ecyc_point {
    pub fn new(x: f64, y: f64) -> Self {
        ecyc_point { x, y }
    }

    pub fn from_internal(v: Vector2<f64>) -> Self {
        ecyc_point::new(v.x, v.y)
    }
}

/// Represents a circle instance (sketch point or epicycle) holding center x, y, and radius.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ecyc_circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl ecyc_circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        ecyc_circle { x, y, radius }
    }

    pub fn from_sketch_point(p: SketchPoint<f64>) -> Self {
        ecyc_circle::new(p.x, p.y, p.radius)
    }
}

/// Represents a Fourier coefficient holding the frequency and the real and imaginary parts.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ecyc_coefficient {
    pub frequency: i32,
    pub re: f64,
    pub im: f64,
}

impl ecyc_coefficient {
    pub fn from_internal(c: &FourierCoefficient<f64>) -> Self {
        ecyc_coefficient {
            frequency: c.frequency,
            re: c.re(),
            im: c.im(),
        }
    }
}

/// Opaque type that wraps a [Session].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct ecyc_session(pub Session<f64>);

/// Opaque type that wraps an [EpicycleFrame].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct ecyc_frame(pub EpicycleFrame<f64>);

/// FFI representation of [SessionOptions].
///
/// `resample_count` of 0 disables resampling.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ecyc_session_o {
    pub max_points: u32,
    pub degree: u32,
    pub min_point_distance: f64,
    pub point_radius: f64,
    pub resample_count: u32,
    pub time_scale: f64,
    pub trace_history: u32,
}

impl ecyc_session_o {
    /// Convert FFI session options type to internal type.
    pub fn to_internal(&self) -> SessionOptions<f64> {
        SessionOptions {
            max_points: self.max_points as usize,
            degree: self.degree as usize,
            min_point_distance: self.min_point_distance,
            point_radius: self.point_radius,
            resample_count: if self.resample_count == 0 {
                None
            } else {
                Some(self.resample_count as usize)
            },
            time_scale: self.time_scale,
            trace_history: self.trace_history as usize,
        }
    }
}

impl Default for ecyc_session_o {
    fn default() -> Self {
        let d = SessionOptions::<f64>::default();
        Self {
            max_points: u32::try_from(d.max_points).unwrap_or(u32::MAX),
            degree: u32::try_from(d.degree).unwrap_or(u32::MAX),
            min_point_distance: d.min_point_distance,
            point_radius: d.point_radius,
            resample_count: d
                .resample_count
                .and_then(|c| u32::try_from(c).ok())
                .unwrap_or(0),
            time_scale: d.time_scale,
            trace_history: u32::try_from(d.trace_history).unwrap_or(u32::MAX),
        }
    }
}

/// Write default option values to a [ecyc_session_o].
///
/// ## Specific Error Codes
/// * 1 = `options` is null.
///
/// # Safety
///
/// `options` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_o_init(options: *mut ecyc_session_o) -> i32 {
    ffi_catch_unwind!({
        if options.is_null() {
            return 1;
        }

        options.write(Default::default());
        0
    })
}

fn append_outcome_to_u32(outcome: AppendOutcome) -> u32 {
    match outcome {
        AppendOutcome::Appended => 0,
        AppendOutcome::Saturated => 1,
        AppendOutcome::TooClose => 2,
        AppendOutcome::Frozen => 3,
    }
}

fn session_state_to_u32(state: SessionState) -> u32 {
    match state {
        SessionState::Idle => 0,
        SessionState::Sketching => 1,
        SessionState::Ready => 2,
        SessionState::Animating => 3,
    }
}

/// Create a new session object.
///
/// `options` is allowed to be null (default options will be used).
/// `session` is an out parameter to hold the created session.
///
/// # Safety
///
/// `options` must be null or point to a valid [ecyc_session_o].
/// `session` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_create(
    options: *const ecyc_session_o,
    session: *mut *const ecyc_session,
) -> i32 {
    ffi_catch_unwind!({
        let options = match options.as_ref() {
            Some(o) => o.to_internal(),
            None => SessionOptions::default(),
        };

        session.write(Box::into_raw(Box::new(ecyc_session(Session::new(options)))));
        0
    })
}

/// Free an existing [ecyc_session] object.
///
/// Nothing happens if `session` is null.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn ecyc_session_f(session: *mut ecyc_session) {
    if !session.is_null() {
        drop(Box::from_raw(session))
    }
}

/// Wraps [Session::add_point].
///
/// `outcome` is allowed to be null, if not null it is written with the append outcome:
/// 0 = appended, 1 = buffer saturated, 2 = too close to the previous point, 3 = sketch is frozen.
///
/// ## Specific Error Codes
/// * 1 = `session` is null.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not been freed.
/// `outcome` must be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_add_point(
    session: *mut ecyc_session,
    x: f64,
    y: f64,
    outcome: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if session.is_null() {
            return 1;
        }

        let result = (*session).0.add_point(x, y);
        if !outcome.is_null() {
            outcome.write(append_outcome_to_u32(result));
        }
        0
    })
}

/// Same as [ecyc_session_add_point] but takes a window pixel position which is projected into
/// drawing space (see [screen_to_drawing]).
///
/// ## Specific Error Codes
/// * 1 = `session` is null.
/// * 2 = `width` or `height` is not positive.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not been freed.
/// `outcome` must be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_add_screen_point(
    session: *mut ecyc_session,
    px: f64,
    py: f64,
    width: f64,
    height: f64,
    outcome: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if session.is_null() {
            return 1;
        }

        if !(width > 0.0 && height > 0.0) {
            return 2;
        }

        let p = screen_to_drawing(px, py, width, height);
        let result = (*session).0.add_point(p.x, p.y);
        if !outcome.is_null() {
            outcome.write(append_outcome_to_u32(result));
        }
        0
    })
}

/// Wraps [Session::commit].
///
/// ## Specific Error Codes
/// * 1 = `session` is null.
/// * 2 = fewer than 3 points have been sketched.
/// * 3 = sketch is already committed.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not been freed.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_commit(session: *mut ecyc_session) -> i32 {
    ffi_catch_unwind!({
        if session.is_null() {
            return 1;
        }

        match (*session).0.commit() {
            Ok(_) => 0,
            Err(CommitError::InsufficientPoints { .. }) => 2,
            Err(CommitError::AlreadyCommitted) => 3,
        }
    })
}

/// Wraps [Session::reset].
///
/// ## Specific Error Codes
/// * 1 = `session` is null.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not been freed.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_reset(session: *mut ecyc_session) -> i32 {
    ffi_catch_unwind!({
        if session.is_null() {
            return 1;
        }

        (*session).0.reset();
        0
    })
}

/// Get the session state.
///
/// `state` is written with 0 = idle, 1 = sketching, 2 = ready, 3 = animating.
///
/// ## Specific Error Codes
/// * 1 = `session` is null.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not been freed.
/// `state` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_get_state(
    session: *const ecyc_session,
    state: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if session.is_null() {
            return 1;
        }

        state.write(session_state_to_u32((*session).0.state()));
        0
    })
}

/// Get the number of sketch points held by the session.
///
/// ## Specific Error Codes
/// * 1 = `session` is null.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_get_point_count(
    session: *const ecyc_session,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if session.is_null() {
            return 1;
        }

        count.write(u32::try_from((*session).0.points().len()).unwrap());
        0
    })
}

/// Fills the buffer given with the sketch points of a session as circle instances.
///
/// You must use [ecyc_session_get_point_count] to ensure the buffer given has adequate length
/// to be filled with all points!
///
/// ## Specific Error Codes
/// * 1 = `session` is null.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not been freed.
/// `point_data` must point to a buffer that is large enough to hold all the points or a buffer
/// overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_get_point_data(
    session: *const ecyc_session,
    point_data: *mut ecyc_circle,
) -> i32 {
    ffi_catch_unwind!({
        if session.is_null() {
            return 1;
        }

        let points = (*session).0.points();
        let buffer = slice::from_raw_parts_mut(point_data, points.len());
        for (i, &p) in points.iter().enumerate() {
            buffer[i] = ecyc_circle::from_sketch_point(p);
        }
        0
    })
}

/// Get the number of Fourier coefficients computed by the last commit.
///
/// ## Specific Error Codes
/// * 1 = `session` is null.
/// * 2 = sketch is not committed.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_get_coefficient_count(
    session: *const ecyc_session,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if session.is_null() {
            return 1;
        }

        match (*session).0.coefficients() {
            Some(coefficients) => {
                count.write(u32::try_from(coefficients.len()).unwrap());
                0
            }
            None => 2,
        }
    })
}

/// Fills the buffer given with the Fourier coefficients in visiting order.
///
/// You must use [ecyc_session_get_coefficient_count] to ensure the buffer given has adequate
/// length to be filled with all coefficients!
///
/// ## Specific Error Codes
/// * 1 = `session` is null.
/// * 2 = sketch is not committed.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not been freed.
/// `coefficient_data` must point to a buffer that is large enough to hold all the coefficients or
/// a buffer overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_get_coefficient_data(
    session: *const ecyc_session,
    coefficient_data: *mut ecyc_coefficient,
) -> i32 {
    ffi_catch_unwind!({
        if session.is_null() {
            return 1;
        }

        let coefficients = match (*session).0.coefficients() {
            Some(c) => c,
            None => return 2,
        };

        let buffer = slice::from_raw_parts_mut(coefficient_data, coefficients.len());
        for (i, c) in coefficients.iter().enumerate() {
            buffer[i] = ecyc_coefficient::from_internal(c);
        }
        0
    })
}

/// Wraps [Session::frame].
///
/// `elapsed` is the number of seconds since commit.
/// `frame` is an out parameter to hold the created frame, it must be freed with [ecyc_frame_f].
///
/// ## Specific Error Codes
/// * 1 = `session` is null.
/// * 2 = sketch is not committed.
///
/// # Safety
///
/// `session` must be null or a valid ecyc_session object that was created with
/// [ecyc_session_create] and has not been freed.
/// `frame` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_session_frame(
    session: *mut ecyc_session,
    elapsed: f64,
    frame: *mut *const ecyc_frame,
) -> i32 {
    ffi_catch_unwind!({
        if session.is_null() {
            return 1;
        }

        match (*session).0.frame(elapsed) {
            Some(result) => {
                frame.write(Box::into_raw(Box::new(ecyc_frame(result))));
                0
            }
            None => 2,
        }
    })
}

/// Free an existing [ecyc_frame] object.
///
/// Nothing happens if `frame` is null.
///
/// # Safety
///
/// `frame` must be null or a valid ecyc_frame object that was created with [ecyc_session_frame]
/// and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn ecyc_frame_f(frame: *mut ecyc_frame) {
    if !frame.is_null() {
        drop(Box::from_raw(frame))
    }
}

/// Get the number of rotating links (circles) in the frame chain.
///
/// ## Specific Error Codes
/// * 1 = `frame` is null.
///
/// # Safety
///
/// `frame` must be null or a valid ecyc_frame object that was created with [ecyc_session_frame]
/// and has not been freed.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_frame_get_link_count(
    frame: *const ecyc_frame,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if frame.is_null() {
            return 1;
        }

        count.write(u32::try_from((*frame).0.chain.link_count()).unwrap());
        0
    })
}

/// Fills the buffer given with one circle instance per chain link.
///
/// You must use [ecyc_frame_get_link_count] to ensure the buffer given has adequate length to be
/// filled with all circles!
///
/// ## Specific Error Codes
/// * 1 = `frame` is null.
///
/// # Safety
///
/// `frame` must be null or a valid ecyc_frame object that was created with [ecyc_session_frame]
/// and has not been freed.
/// `circle_data` must point to a buffer that is large enough to hold all the circles or a buffer
/// overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_frame_get_circle_data(
    frame: *const ecyc_frame,
    circle_data: *mut ecyc_circle,
) -> i32 {
    ffi_catch_unwind!({
        if frame.is_null() {
            return 1;
        }

        let links = &(*frame).0.chain.links;
        let buffer = slice::from_raw_parts_mut(circle_data, links.len());
        for (i, link) in links.iter().enumerate() {
            buffer[i] = ecyc_circle::new(link.center.x, link.center.y, link.radius);
        }
        0
    })
}

/// Get the chain time and tip (reconstructed curve point) of the frame.
///
/// ## Specific Error Codes
/// * 1 = `frame` is null.
///
/// # Safety
///
/// `frame` must be null or a valid ecyc_frame object that was created with [ecyc_session_frame]
/// and has not been freed.
/// `time` and `tip` must point to valid places in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_frame_get_tip(
    frame: *const ecyc_frame,
    time: *mut f64,
    tip: *mut ecyc_point,
) -> i32 {
    ffi_catch_unwind!({
        if frame.is_null() {
            return 1;
        }

        time.write((*frame).0.time);
        tip.write(ecyc_point::from_internal((*frame).0.chain.tip()));
        0
    })
}

/// Get the newest trace segment of the frame.
///
/// ## Specific Error Codes
/// * 1 = `frame` is null.
/// * 2 = frame has no trace segment (first frame after commit).
///
/// # Safety
///
/// `frame` must be null or a valid ecyc_frame object that was created with [ecyc_session_frame]
/// and has not been freed.
/// `previous` and `current` must point to valid places in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_frame_get_trace_segment(
    frame: *const ecyc_frame,
    previous: *mut ecyc_point,
    current: *mut ecyc_point,
) -> i32 {
    ffi_catch_unwind!({
        if frame.is_null() {
            return 1;
        }

        match (*frame).0.segment {
            Some(segment) => {
                previous.write(ecyc_point::from_internal(segment.previous));
                current.write(ecyc_point::from_internal(segment.current));
                0
            }
            None => 2,
        }
    })
}

/// Fills the buffer given with a unit circle triangle fan (see [circle_fan_vertexes]).
///
/// The buffer is filled with the center followed by `samples` points on the circle, it must hold
/// `samples + 1` points.
///
/// # Safety
///
/// `vertex_data` must point to a buffer that can hold `samples + 1` points or a buffer overrun
/// will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn ecyc_get_circle_fan(samples: u32, vertex_data: *mut ecyc_point) -> i32 {
    ffi_catch_unwind!({
        let fan = circle_fan_vertexes::<f64>(samples as usize);
        let buffer = slice::from_raw_parts_mut(vertex_data, fan.len());
        for (i, &v) in fan.iter().enumerate() {
            buffer[i] = ecyc_point::from_internal(v);
        }
        0
    })
}
