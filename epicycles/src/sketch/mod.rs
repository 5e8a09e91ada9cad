//! This module has the types and functions for capturing a freehand sketch and turning it into a
//! closed, periodic sample sequence.
mod closed_samples;
mod curve_buffer;
mod sketch_point;

pub use closed_samples::*;
pub use curve_buffer::*;
pub use sketch_point::*;
