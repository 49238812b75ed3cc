//! Snap Configuration
//!
//! Centralized tuning for snap resolution and the occupancy check.
//! `Default` returns the stock values, which are also exported as constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Maximum distance at which a corner or edge is considered a match.
pub const SNAP_RADIUS: f32 = 2.5;

/// Footprint of one grid cell, equal to the standard piece width.
pub const GRID_SIZE: f32 = 2.0;

/// Height of one wall piece.
pub const WALL_HEIGHT: f32 = 2.0;

/// Vertical rise of one stair piece.
pub const STAIR_HEIGHT: f32 = 2.0;

/// Minimum normal Y for grid placement (~45 degree slope).
pub const MIN_GROUND_NORMAL_Y: f32 = 0.7;

/// Two pieces closer than this occupy the same spot.
pub const OCCUPANCY_RADIUS: f32 = 0.5;

static_assertions::const_assert!(SNAP_RADIUS > 0.0);
static_assertions::const_assert!(GRID_SIZE > 0.0);
static_assertions::const_assert!(OCCUPANCY_RADIUS < GRID_SIZE);

/// Snap and occupancy parameters.
///
/// Read-only once handed to a [`SnapRouter`](crate::snap::SnapRouter).
/// Missing JSON fields fall back to their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Corner/edge match radius (strict less-than)
    pub snap_radius: f32,
    /// Grid cell size and standard piece width
    pub grid_size: f32,
    /// Wall height used for stacking and capping
    pub wall_height: f32,
    /// Rise per stair piece
    pub stair_height: f32,
    /// Flatness gate for grid placement
    pub min_ground_normal_y: f32,
    /// Occupancy proximity threshold
    pub occupancy_radius: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            snap_radius: SNAP_RADIUS,
            grid_size: GRID_SIZE,
            wall_height: WALL_HEIGHT,
            stair_height: STAIR_HEIGHT,
            min_ground_normal_y: MIN_GROUND_NORMAL_Y,
            occupancy_radius: OCCUPANCY_RADIUS,
        }
    }
}

impl SnapConfig {
    /// Half the grid size: distance from a piece center to its edge.
    pub fn half_grid(&self) -> f32 {
        self.grid_size * 0.5
    }

    /// Check every field for sane values.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let positive = [
            ("snap_radius", self.snap_radius),
            ("grid_size", self.grid_size),
            ("wall_height", self.wall_height),
            ("stair_height", self.stair_height),
            ("occupancy_radius", self.occupancy_radius),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let n = self.min_ground_normal_y;
        if !(0.0..=1.0).contains(&n) {
            return Err(ConfigError::NormalOutOfRange(n));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SnapConfig = serde_json::from_str(json)?;
        if let Err(err) = config.validate() {
            log::warn!("Rejected snap config: {}", err);
            return Err(err.into());
        }
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded snap config from {}", path.display());
        Ok(config)
    }
}
