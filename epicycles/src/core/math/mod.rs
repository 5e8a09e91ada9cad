//! Core/common math functions for working with rotations, 2D space, sample positions, etc.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{vec2, Vector2};
