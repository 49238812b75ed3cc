//! Error types for the snap engine
//!
//! Snap resolution itself never fails. These cover the edges around it:
//! loading configuration and scene files from disk.

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("min_ground_normal_y must be within [0, 1], got {0}")]
    NormalOutOfRange(f32),
}

/// Result type alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
