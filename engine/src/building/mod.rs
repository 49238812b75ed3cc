//! Building Module
//!
//! Placed pieces and the registry that owns them.

pub mod piece;
pub mod registry;

pub use piece::{ALL_PIECE_TYPES, Buildable, PieceId, PieceType, PlacedPiece, UnknownPieceTag};
pub use registry::BuildRegistry;
