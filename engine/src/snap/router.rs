//! Snap Router
//!
//! Single entry point for snap resolution. Picks the composition rule for the
//! held piece type and always produces a result for a present hit.

use super::rules::CompositionRule;
use super::types::{RaycastHit, SnapQuery, SnapResult};
use crate::building::{BuildRegistry, PieceType};
use crate::config::SnapConfig;

/// Resolves raw hits into placement transforms.
///
/// Holds no state besides its config, so identical queries always produce
/// identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapRouter {
    config: SnapConfig,
}

impl SnapRouter {
    pub fn new(config: SnapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Resolve a query through the rule for its piece type.
    pub fn resolve(&self, query: &SnapQuery) -> SnapResult {
        let rule = CompositionRule::for_piece(query.piece_type);
        match rule.first_match(query, &self.config) {
            Some((strategy, result)) => {
                log::trace!(
                    "{} snapped via {} to ({:.2}, {:.2}, {:.2}) yaw {:.3}",
                    query.piece_type,
                    strategy.name(),
                    result.position.x,
                    result.position.y,
                    result.position.z,
                    result.yaw
                );
                result
            }
            None => {
                let result = rule.fallback.apply(query, &self.config);
                log::trace!("{} fell back to {:?} placement", query.piece_type, result.kind);
                result
            }
        }
    }

    /// Resolve straight from a raycast result.
    ///
    /// `None` means nothing was hit; callers must not show or allow placement.
    pub fn resolve_hit(
        &self,
        piece_type: PieceType,
        hit: Option<&RaycastHit>,
        registry: &BuildRegistry,
    ) -> Option<SnapResult> {
        let hit = hit?;
        Some(self.resolve(&SnapQuery::from_hit(piece_type, hit, registry)))
    }
}
