//! Placement Verdicts
//!
//! Glue between snap resolution and the occupancy veto, for the preview
//! renderer and the build-commit path.

use thiserror::Error;

use super::router::SnapRouter;
use super::types::{RaycastHit, SnapResult};
use crate::building::{BuildRegistry, PieceId, PieceType};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlaceError {
    #[error("nothing under the cursor")]
    NoHit,
    #[error("position already occupied")]
    Occupied(SnapResult),
}

/// Decide the final transform for a build commit.
///
/// `exclude` is the piece being moved, so it does not block its own spot.
pub fn plan_placement(
    router: &SnapRouter,
    registry: &BuildRegistry,
    piece_type: PieceType,
    hit: Option<&RaycastHit>,
    exclude: Option<PieceId>,
) -> Result<SnapResult, PlaceError> {
    let result = router
        .resolve_hit(piece_type, hit, registry)
        .ok_or(PlaceError::NoHit)?;
    let radius = router.config().occupancy_radius;
    if registry.is_occupied_within(result.position, exclude, radius) {
        log::debug!(
            "Vetoed {} at ({:.2}, {:.2}, {:.2}): occupied",
            piece_type,
            result.position.x,
            result.position.y,
            result.position.z
        );
        return Err(PlaceError::Occupied(result));
    }
    Ok(result)
}

/// Where to draw the ghost piece and whether to tint it as buildable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPreview {
    pub result: SnapResult,
    pub valid: bool,
}

impl PlacementPreview {
    /// Preview for the current hit, `None` when there is nothing to show.
    pub fn evaluate(
        router: &SnapRouter,
        registry: &BuildRegistry,
        piece_type: PieceType,
        hit: Option<&RaycastHit>,
        exclude: Option<PieceId>,
    ) -> Option<Self> {
        match plan_placement(router, registry, piece_type, hit, exclude) {
            Ok(result) => Some(Self { result, valid: true }),
            Err(PlaceError::Occupied(result)) => Some(Self { result, valid: false }),
            Err(PlaceError::NoHit) => None,
        }
    }
}
