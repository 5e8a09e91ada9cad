//! Fourier epicycle engine.
//!
//! A freehand sketch is captured into a [sketch::CurveBuffer], closed into an odd length periodic
//! sample sequence ([sketch::ClosedSamples]), decomposed into complex Fourier coefficients with the
//! composite Simpson rule ([fourier::compute_fourier_series]) and redrawn every frame as a chain of
//! rotating vectors ([epicycle::compose_chain]) whose tip traces the curve
//! ([epicycle::TraceRecorder]). [session::Session] ties the pieces together behind a small state
//! machine.
//!
//! All numeric types are generic over [core::traits::Real] with `f64` as the default.
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod core;
pub mod epicycle;
pub mod errors;
pub mod fourier;
pub mod session;
pub mod sketch;

pub use static_aabb2d_index::AABB;
