//! Build Snap Engine
//!
//! Decides where a held building piece goes. Given a raycast hit, the engine
//! either snaps the piece to a structural feature of something already built
//! (a floor corner, a floor edge, the top of a wall, the next stair, the next
//! roof segment) or falls back to grid/free placement on the ground.
//!
//! # Modules
//!
//! - [`snap`] - Router, composition rules and geometric strategies
//! - [`building`] - Piece types, placed pieces and the buildables registry
//! - [`config`] - Snap tuning (`SnapConfig`) and the stock constants
//! - [`world`] - Grid and rotation helpers
//! - [`scene`] - JSON scenes for offline probing
//!
//! # Example
//!
//! ```
//! use build_snap_engine::building::{BuildRegistry, PieceType};
//! use build_snap_engine::snap::{RaycastHit, SnapRouter};
//! use glam::Vec3;
//!
//! let mut registry = BuildRegistry::new();
//! let floor = registry.place(PieceType::Floor, Vec3::ZERO, 0.0);
//!
//! let router = SnapRouter::default();
//! let hit = RaycastHit::new(Vec3::new(1.0, 0.0, 1.0), Vec3::Y, Some(floor));
//! let result = router
//!     .resolve_hit(PieceType::Floor, Some(&hit), &registry)
//!     .unwrap();
//!
//! assert_eq!(result.position, Vec3::new(2.0, 0.0, 2.0));
//! assert!(result.snapped);
//! assert!(!registry.is_occupied(result.position, None));
//! ```

pub mod building;
pub mod config;
pub mod error;
pub mod scene;
pub mod snap;
pub mod world;

// Re-export the commonly used types at crate level for convenience
pub use building::{BuildRegistry, Buildable, PieceId, PieceType, PlacedPiece};
pub use config::SnapConfig;
pub use error::{ConfigError, Error, Result};
pub use snap::{RaycastHit, SnapKind, SnapQuery, SnapResult, SnapRouter};
pub use world::snap_to_grid;
