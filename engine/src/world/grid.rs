//! Grid Helpers
//!
//! Pure world-space helpers shared by the snap strategies.
//!
//! ## Conventions
//! - 1 unit = 1 meter, Y is up.
//! - Yaw is a rotation about +Y in radians. A piece with yaw 0 faces -Z.
//! - The placement grid is horizontal only: X and Z snap, Y never does.

use glam::{Quat, Vec3};

/// Snap a position to the nearest horizontal grid point.
///
/// Only snaps X and Z coordinates; Y is preserved. A non-positive or
/// non-finite `grid_size` leaves the position untouched.
pub fn snap_to_grid(pos: Vec3, grid_size: f32) -> Vec3 {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return pos;
    }
    Vec3::new(
        (pos.x / grid_size).round() * grid_size,
        pos.y, // Don't snap Y
        (pos.z / grid_size).round() * grid_size,
    )
}

/// Whether a surface with this normal is flat enough to build on.
///
/// `min_normal_y` is the cosine of the steepest accepted slope
/// (0.7 is roughly 45 degrees).
pub fn is_flat_enough(normal: Vec3, min_normal_y: f32) -> bool {
    normal.y >= min_normal_y
}

/// Rotate a local offset about the vertical axis by `yaw` radians.
pub fn rotate_y(offset: Vec3, yaw: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * offset
}
