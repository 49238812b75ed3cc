//! Snap Module
//!
//! Turns a raw surface hit into a placement transform for the held piece.
//!
//! - [`types`] - queries, hits and results
//! - [`strategies`] - one geometric rule per structural relationship
//! - [`rules`] - per piece type ordered fallback chains
//! - [`router`] - the entry point
//! - [`placement`] - occupancy veto for previews and build commits

pub mod placement;
pub mod router;
pub mod rules;
pub mod strategies;
pub mod types;

pub use placement::{PlaceError, PlacementPreview, plan_placement};
pub use router::SnapRouter;
pub use rules::{CompositionRule, Fallback, Strategy};
pub use types::{RaycastHit, SnapKind, SnapQuery, SnapResult};
