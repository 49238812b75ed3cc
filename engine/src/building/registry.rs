//! BuildRegistry - the set of placed buildables.
//!
//! Owned by the placement system. Snap resolution borrows it read-only to
//! look up hit targets, and the build-commit path asks it for occupancy.
//! Occupancy is a linear scan; swap in a spatial index if sessions grow past
//! a few hundred pieces.

use glam::Vec3;

use super::piece::{PieceId, PieceType, PlacedPiece};
use crate::config::OCCUPANCY_RADIUS;

#[derive(Debug, Default, Clone)]
pub struct BuildRegistry {
    pieces: Vec<PlacedPiece>,
    next_id: u32,
}

impl BuildRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
        self.next_id = 0;
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: PieceId) -> Option<&PlacedPiece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// Pieces in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.pieces.iter()
    }

    /// Register a piece, replacing any piece with the same id in place.
    pub fn insert(&mut self, piece: PlacedPiece) -> Option<PlacedPiece> {
        if let Some(next) = piece.id.0.checked_add(1) {
            self.next_id = self.next_id.max(next);
        }
        if let Some(slot) = self.pieces.iter_mut().find(|p| p.id == piece.id) {
            log::debug!("Replaced buildable {} ({})", piece.id, piece.piece_type);
            return Some(std::mem::replace(slot, piece));
        }
        log::debug!(
            "Registered buildable {} ({}) at ({:.2}, {:.2}, {:.2})",
            piece.id,
            piece.piece_type,
            piece.position.x,
            piece.position.y,
            piece.position.z
        );
        self.pieces.push(piece);
        None
    }

    /// Register a new piece under a fresh id.
    pub fn place(&mut self, piece_type: PieceType, position: Vec3, yaw: f32) -> PieceId {
        let id = self.fresh_id();
        self.insert(PlacedPiece::new(id, piece_type, position, yaw));
        id
    }

    /// Next unused id. Falls back to the lowest free id once the counter
    /// has reached the top of the id space.
    fn fresh_id(&self) -> PieceId {
        let candidate = PieceId(self.next_id);
        if !self.contains(candidate) {
            return candidate;
        }

        let mut ids: Vec<u32> = self.pieces.iter().map(|p| p.id.0).collect();
        ids.sort_unstable();
        let mut free = 0u32;
        for id in ids {
            if id != free {
                break;
            }
            free = free.saturating_add(1);
        }
        log::debug!("Id counter exhausted, reusing free id #{}", free);
        PieceId(free)
    }

    pub fn remove(&mut self, id: PieceId) -> Option<PlacedPiece> {
        let index = self.pieces.iter().position(|p| p.id == id)?;
        log::debug!("Removed buildable {}", id);
        Some(self.pieces.remove(index))
    }

    /// Whether any piece other than `exclude` sits within
    /// [`OCCUPANCY_RADIUS`] of `position`.
    pub fn is_occupied(&self, position: Vec3, exclude: Option<PieceId>) -> bool {
        self.is_occupied_within(position, exclude, OCCUPANCY_RADIUS)
    }

    /// Occupancy check with an explicit proximity threshold (strict less-than).
    pub fn is_occupied_within(&self, position: Vec3, exclude: Option<PieceId>, radius: f32) -> bool {
        self.pieces
            .iter()
            .filter(|p| Some(p.id) != exclude)
            .any(|p| p.position.distance(position) < radius)
    }
}
