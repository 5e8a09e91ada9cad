//! This module has the per frame epicycle chain composition and the trace recorder.
mod chain;
mod trace;

pub use chain::*;
pub use trace::*;
