//! Snap Strategies
//!
//! One geometric rule per structural relationship. Each returns `None` when
//! the hit target is not the kind of piece it attaches to, or when no feature
//! lies inside the snap radius. Radius gates are strict: a feature exactly
//! `snap_radius` away does not match.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use super::types::{SnapQuery, SnapResult};
use crate::building::{Buildable, PieceType};
use crate::config::SnapConfig;
use crate::world::{is_flat_enough, rotate_y, snap_to_grid};

/// Corner directions of a floor tile, as (x sign, z sign).
const CORNER_SIGNS: [(f32, f32); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)];

/// Edge midpoints of a floor tile in half-grid units, with the yaw a wall
/// standing on that edge adds to the floor's yaw so it faces outward.
const FLOOR_EDGES: [(Vec3, f32); 4] = [
    (Vec3::new(0.0, 0.0, -1.0), 0.0),       // front
    (Vec3::new(0.0, 0.0, 1.0), PI),         // back
    (Vec3::new(-1.0, 0.0, 0.0), FRAC_PI_2), // left
    (Vec3::new(1.0, 0.0, 0.0), -FRAC_PI_2), // right
];

fn is_floor(t: PieceType) -> bool {
    t == PieceType::Floor
}

fn is_wall(t: PieceType) -> bool {
    t == PieceType::Wall
}

fn is_stairs(t: PieceType) -> bool {
    t == PieceType::Stairs
}

/// Structural result, or no match when the target's transform is not finite.
fn finite_structural(position: Vec3, yaw: f32) -> Option<SnapResult> {
    if position.is_finite() && yaw.is_finite() {
        Some(SnapResult::structural(position, yaw))
    } else {
        None
    }
}

/// Point on top of a wall, carrying the wall's yaw.
fn wall_top(wall: &dyn Buildable, config: &SnapConfig) -> Option<SnapResult> {
    finite_structural(
        wall.world_position() + Vec3::new(0.0, config.wall_height, 0.0),
        wall.yaw(),
    )
}

/// Nearest candidate strictly inside `radius`, first one wins ties.
fn nearest_within<T>(
    hit: Vec3,
    radius: f32,
    candidates: impl IntoIterator<Item = (Vec3, T)>,
) -> Option<(Vec3, T)> {
    let mut best = None;
    let mut best_dist = radius;
    for (point, extra) in candidates {
        let dist = point.distance(hit);
        if dist < best_dist {
            best_dist = dist;
            best = Some((point, extra));
        }
    }
    best
}

/// New floor sharing the nearest corner of the floor that was hit.
///
/// The new tile sits diagonally across that corner, at the existing floor's
/// elevation and with its yaw.
pub fn floor_corner(query: &SnapQuery, config: &SnapConfig) -> Option<SnapResult> {
    let floor = query.target_where(is_floor)?;
    let center = floor.world_position();
    let yaw = floor.yaw();
    let half = config.half_grid();

    let mut corners = [(Vec3::ZERO, Vec3::ZERO); 4];
    for (slot, (sx, sz)) in corners.iter_mut().zip(CORNER_SIGNS) {
        let offset = rotate_y(Vec3::new(sx * half, 0.0, sz * half), yaw);
        // Degenerate footprint, nothing to attach to
        offset.try_normalize()?;
        *slot = (center + offset, offset);
    }

    let (corner, offset) = nearest_within(query.hit_position, config.snap_radius, corners)?;
    let position = Vec3::new(corner.x + offset.x, center.y, corner.z + offset.z);
    Some(SnapResult::structural(position, yaw))
}

/// Floor capping the wall that was hit. Any hit on a wall qualifies.
pub fn floor_on_wall_top(query: &SnapQuery, config: &SnapConfig) -> Option<SnapResult> {
    let wall = query.target_where(is_wall)?;
    wall_top(wall, config)
}

/// Wall stacked on the wall that was hit, only for hits on its upper half.
pub fn wall_stack(query: &SnapQuery, config: &SnapConfig) -> Option<SnapResult> {
    let wall = query.target_where(is_wall)?;
    let midpoint = wall.world_position().y + config.wall_height * 0.5;
    if query.hit_position.y > midpoint {
        wall_top(wall, config)
    } else {
        None
    }
}

/// Wall standing on the nearest edge of the floor that was hit.
pub fn wall_on_floor_edge(query: &SnapQuery, config: &SnapConfig) -> Option<SnapResult> {
    let floor = query.target_where(is_floor)?;
    let center = floor.world_position();
    let yaw = floor.yaw();
    let half = config.half_grid();

    let mut edges = [(Vec3::ZERO, 0.0); 4];
    for (slot, (dir, turn)) in edges.iter_mut().zip(FLOOR_EDGES) {
        let offset = rotate_y(dir * half, yaw);
        offset.try_normalize()?;
        *slot = (center + offset, yaw + turn);
    }

    let (position, edge_yaw) = nearest_within(query.hit_position, config.snap_radius, edges)?;
    Some(SnapResult::structural(position, edge_yaw))
}

/// Next flight of stairs, one step forward and up from the stairs that were hit.
pub fn stair_chain(query: &SnapQuery, config: &SnapConfig) -> Option<SnapResult> {
    let stairs = query.target_where(is_stairs)?;
    let step = Vec3::new(0.0, config.stair_height, -config.grid_size);
    finite_structural(
        stairs.world_position() + rotate_y(step, stairs.yaw()),
        stairs.yaw(),
    )
}

/// Roof capping the wall that was hit.
pub fn roof_on_wall(query: &SnapQuery, config: &SnapConfig) -> Option<SnapResult> {
    let wall = query.target_where(is_wall)?;
    wall_top(wall, config)
}

/// Roof continuing along the local +X of the roof that was hit.
pub fn roof_on_roof(query: &SnapQuery, config: &SnapConfig) -> Option<SnapResult> {
    let roof = query.target_where(PieceType::is_roof)?;
    let along = Vec3::new(config.grid_size, 0.0, 0.0);
    finite_structural(
        roof.world_position() + rotate_y(along, roof.yaw()),
        roof.yaw(),
    )
}

/// Grid placement on flat ground, raw placement on slopes.
pub fn grid_on_ground(query: &SnapQuery, config: &SnapConfig) -> SnapResult {
    if is_flat_enough(query.hit_normal, config.min_ground_normal_y) {
        SnapResult::grid(snap_to_grid(query.hit_position, config.grid_size))
    } else {
        ground(query)
    }
}

/// Raw hit position, no rotation.
pub fn ground(query: &SnapQuery) -> SnapResult {
    SnapResult::free(query.hit_position)
}
