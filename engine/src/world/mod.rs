//! World Module
//!
//! World-space conventions and grid helpers used by placement.

pub mod grid;

pub use grid::{is_flat_enough, rotate_y, snap_to_grid};
