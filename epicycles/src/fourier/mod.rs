//! This module has the Fourier analysis of closed sample sequences: coefficient types, the
//! frequency visiting order, and the Simpson rule integration.
mod analyzer;
mod coefficient;
mod visit_order;

pub use analyzer::*;
pub use coefficient::*;
pub use visit_order::{FrequencyOrder, MAX_DEGREE};
