//! Low-level board primitives.
//!
//! - [`coord`]: signed grid coordinates and the diagonal step set.
//! - [`board`]: a square grid of optional pieces with bounds-checked access.

pub mod board;
pub mod coord;
