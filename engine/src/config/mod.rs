//! Config Module
//!
//! Centralized configuration for snap resolution and occupancy.

pub mod snap_config;

pub use snap_config::{
    GRID_SIZE, MIN_GROUND_NORMAL_Y, OCCUPANCY_RADIUS, SNAP_RADIUS, STAIR_HEIGHT, SnapConfig,
    WALL_HEIGHT,
};
