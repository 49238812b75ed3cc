//! Composition Rules
//!
//! Each piece type gets a fixed, ordered chain of strategies followed by a
//! terminal fallback. The first strategy that matches wins, even if a later
//! one would have found a closer feature.

use super::strategies;
use super::types::{SnapQuery, SnapResult};
use crate::building::PieceType;
use crate::config::SnapConfig;

/// A structural snap strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    FloorCorner,
    FloorOnWallTop,
    WallStack,
    WallOnFloorEdge,
    StairChain,
    RoofOnWall,
    RoofOnRoof,
}

impl Strategy {
    pub fn apply(self, query: &SnapQuery, config: &SnapConfig) -> Option<SnapResult> {
        match self {
            Strategy::FloorCorner => strategies::floor_corner(query, config),
            Strategy::FloorOnWallTop => strategies::floor_on_wall_top(query, config),
            Strategy::WallStack => strategies::wall_stack(query, config),
            Strategy::WallOnFloorEdge => strategies::wall_on_floor_edge(query, config),
            Strategy::StairChain => strategies::stair_chain(query, config),
            Strategy::RoofOnWall => strategies::roof_on_wall(query, config),
            Strategy::RoofOnRoof => strategies::roof_on_roof(query, config),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::FloorCorner => "floor-corner",
            Strategy::FloorOnWallTop => "floor-on-wall-top",
            Strategy::WallStack => "wall-stack",
            Strategy::WallOnFloorEdge => "wall-on-floor-edge",
            Strategy::StairChain => "stair-chain",
            Strategy::RoofOnWall => "roof-on-wall",
            Strategy::RoofOnRoof => "roof-on-roof",
        }
    }
}

/// Terminal placement when no strategy matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Grid-rounded on flat ground, raw on slopes
    Grid,
    /// Raw hit position
    Ground,
}

impl Fallback {
    pub fn apply(self, query: &SnapQuery, config: &SnapConfig) -> SnapResult {
        match self {
            Fallback::Grid => strategies::grid_on_ground(query, config),
            Fallback::Ground => strategies::ground(query),
        }
    }
}

/// Ordered strategies plus the fallback for one piece type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionRule {
    pub chain: &'static [Strategy],
    pub fallback: Fallback,
}

const FLOOR_RULE: CompositionRule = CompositionRule {
    chain: &[Strategy::FloorCorner, Strategy::FloorOnWallTop],
    fallback: Fallback::Grid,
};

const WALL_RULE: CompositionRule = CompositionRule {
    chain: &[Strategy::WallStack, Strategy::WallOnFloorEdge],
    fallback: Fallback::Ground,
};

const STAIRS_RULE: CompositionRule = CompositionRule {
    chain: &[Strategy::StairChain],
    fallback: Fallback::Ground,
};

const ROOF_RULE: CompositionRule = CompositionRule {
    chain: &[Strategy::RoofOnWall, Strategy::RoofOnRoof],
    fallback: Fallback::Ground,
};

const GROUND_RULE: CompositionRule = CompositionRule {
    chain: &[],
    fallback: Fallback::Ground,
};

impl CompositionRule {
    pub fn for_piece(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::Floor => FLOOR_RULE,
            // Doors need a wall-sized opening and place exactly like walls
            PieceType::Wall | PieceType::Door => WALL_RULE,
            PieceType::Stairs => STAIRS_RULE,
            PieceType::Roof26 | PieceType::Roof45 => ROOF_RULE,
            PieceType::Generic => GROUND_RULE,
        }
    }

    /// First matching strategy with its result, if any.
    pub fn first_match(&self, query: &SnapQuery, config: &SnapConfig) -> Option<(Strategy, SnapResult)> {
        self.chain
            .iter()
            .find_map(|&strategy| strategy.apply(query, config).map(|r| (strategy, r)))
    }

    /// Run the chain, falling back when nothing matches.
    pub fn evaluate(&self, query: &SnapQuery, config: &SnapConfig) -> SnapResult {
        match self.first_match(query, config) {
            Some((_, result)) => result,
            None => self.fallback.apply(query, config),
        }
    }
}
