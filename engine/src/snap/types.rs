//! Snap value types
//!
//! Data exchanged between the router and the strategies. Everything here is
//! built per query and dropped afterwards.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::building::{BuildRegistry, Buildable, PieceId, PieceType};

/// A raycast hit against the world, as produced by the physics layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaycastHit {
    pub position: Vec3,
    pub normal: Vec3,
    /// Collider that was hit, if it belongs to a placed piece
    #[serde(default)]
    pub collider: Option<PieceId>,
}

impl RaycastHit {
    pub fn new(position: Vec3, normal: Vec3, collider: Option<PieceId>) -> Self {
        Self {
            position,
            normal,
            collider,
        }
    }

    /// Hit on open ground with an upward normal.
    pub fn ground(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, None)
    }
}

/// Everything a strategy needs to decide a placement.
#[derive(Clone, Copy)]
pub struct SnapQuery<'a> {
    /// Kind of piece the player is holding
    pub piece_type: PieceType,
    pub hit_position: Vec3,
    pub hit_normal: Vec3,
    /// Buildable that was hit, `None` for terrain or foreign objects
    pub hit_target: Option<&'a dyn Buildable>,
}

impl<'a> SnapQuery<'a> {
    pub fn new(
        piece_type: PieceType,
        hit_position: Vec3,
        hit_normal: Vec3,
        hit_target: Option<&'a dyn Buildable>,
    ) -> Self {
        Self {
            piece_type,
            hit_position,
            hit_normal,
            hit_target,
        }
    }

    /// Build a query from a raycast hit.
    ///
    /// The collider only counts as a target when it is registered in
    /// `registry`; anything else is treated as plain surface.
    pub fn from_hit(piece_type: PieceType, hit: &RaycastHit, registry: &'a BuildRegistry) -> Self {
        let hit_target = hit
            .collider
            .and_then(|id| registry.get(id))
            .map(|piece| piece as &dyn Buildable);
        Self::new(piece_type, hit.position, hit.normal, hit_target)
    }

    /// The hit target, if its piece type satisfies `accept`.
    pub fn target_where(&self, accept: impl Fn(PieceType) -> bool) -> Option<&'a dyn Buildable> {
        self.hit_target.filter(|t| accept(t.piece_type()))
    }
}

impl fmt::Debug for SnapQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapQuery")
            .field("piece_type", &self.piece_type)
            .field("hit_position", &self.hit_position)
            .field("hit_normal", &self.hit_normal)
            .field(
                "hit_target",
                &self.hit_target.map(|t| (t.piece_type(), t.world_position(), t.yaw())),
            )
            .finish()
    }
}

/// How a result position was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapKind {
    /// Attached to an existing piece (corner, edge, stack, chain)
    Structural,
    /// Flat ground, rounded onto the grid
    Grid,
    /// Raw hit position
    Free,
}

/// Placement transform proposed for the held piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    pub position: Vec3,
    /// Rotation about +Y in radians
    pub yaw: f32,
    /// True only for structural snaps; grid placement is not a snap
    pub snapped: bool,
    pub kind: SnapKind,
}

static_assertions::assert_impl_all!(SnapResult: Copy, Send, Sync);
static_assertions::assert_impl_all!(RaycastHit: Copy, Send, Sync);

impl SnapResult {
    pub fn structural(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            snapped: true,
            kind: SnapKind::Structural,
        }
    }

    pub fn grid(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            snapped: false,
            kind: SnapKind::Grid,
        }
    }

    pub fn free(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            snapped: false,
            kind: SnapKind::Free,
        }
    }
}
