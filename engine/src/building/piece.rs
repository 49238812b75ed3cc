//! Building Pieces
//!
//! The closed set of piece kinds and the read-only view of a placed piece
//! that snap strategies work against.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of building piece
///
/// Serialized as its catalog tag; any tag accepted by [`FromStr`] parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PieceType {
    Floor,
    Wall,
    /// Wall-sized frame with an opening
    Door,
    Stairs,
    /// Shallow 26 degree roof
    Roof26,
    /// Steep 45 degree roof
    Roof45,
    /// Anything without structural snapping (furniture, props)
    Generic,
}

/// All piece types, in catalog order.
pub const ALL_PIECE_TYPES: [PieceType; 7] = [
    PieceType::Floor,
    PieceType::Wall,
    PieceType::Door,
    PieceType::Stairs,
    PieceType::Roof26,
    PieceType::Roof45,
    PieceType::Generic,
];

/// Material prefix carried by catalog tags (`wooden_wall`).
const MATERIAL_PREFIX: &str = "wooden_";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown piece tag: {0:?}")]
pub struct UnknownPieceTag(pub String);

impl PieceType {
    /// Catalog tag used on the wire.
    pub fn tag(self) -> &'static str {
        match self {
            PieceType::Floor => "floor",
            PieceType::Wall => "wall",
            PieceType::Door => "door",
            PieceType::Stairs => "stairs",
            PieceType::Roof26 => "roof_26",
            PieceType::Roof45 => "roof_45",
            PieceType::Generic => "generic",
        }
    }

    /// Parse a catalog tag, treating anything unknown as [`PieceType::Generic`].
    pub fn from_tag_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or(PieceType::Generic)
    }

    /// Both roof pitches snap as one family.
    pub fn is_roof(self) -> bool {
        matches!(self, PieceType::Roof26 | PieceType::Roof45)
    }
}

impl FromStr for PieceType {
    type Err = UnknownPieceTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_prefix(MATERIAL_PREFIX).unwrap_or(&lower);
        match name {
            "floor" => Ok(PieceType::Floor),
            "wall" => Ok(PieceType::Wall),
            "door" => Ok(PieceType::Door),
            "stairs" | "stair" => Ok(PieceType::Stairs),
            "roof_26" | "roof26" => Ok(PieceType::Roof26),
            "roof_45" | "roof45" => Ok(PieceType::Roof45),
            "generic" => Ok(PieceType::Generic),
            _ => Err(UnknownPieceTag(s.to_string())),
        }
    }
}

impl TryFrom<String> for PieceType {
    type Error = UnknownPieceTag;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<PieceType> for String {
    fn from(piece: PieceType) -> Self {
        piece.tag().to_string()
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Stable identifier of a placed piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only view of something already built in the world.
///
/// The placement system owns the pieces; snapping only reads them.
pub trait Buildable {
    fn piece_type(&self) -> PieceType;
    fn world_position(&self) -> Vec3;
    /// Rotation about +Y in radians
    fn yaw(&self) -> f32;
}

/// A piece placed in the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub id: PieceId,
    pub piece_type: PieceType,
    pub position: Vec3,
    #[serde(default)]
    pub yaw: f32,
}

impl PlacedPiece {
    pub fn new(id: PieceId, piece_type: PieceType, position: Vec3, yaw: f32) -> Self {
        Self {
            id,
            piece_type,
            position,
            yaw,
        }
    }
}

impl Buildable for PlacedPiece {
    fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    fn world_position(&self) -> Vec3 {
        self.position
    }

    fn yaw(&self) -> f32 {
        self.yaw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for piece in ALL_PIECE_TYPES {
            assert_eq!(piece.tag().parse::<PieceType>(), Ok(piece));
        }
    }

    #[test]
    fn test_material_prefix_and_case() {
        assert_eq!("wooden_wall".parse::<PieceType>(), Ok(PieceType::Wall));
        assert_eq!("Wooden_Roof_45".parse::<PieceType>(), Ok(PieceType::Roof45));
        assert_eq!(" stair ".parse::<PieceType>(), Ok(PieceType::Stairs));
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            "campfire".parse::<PieceType>(),
            Err(UnknownPieceTag("campfire".to_string()))
        );
        assert_eq!(PieceType::from_tag_lossy("campfire"), PieceType::Generic);
    }

    #[test]
    fn test_roof_family() {
        assert!(PieceType::Roof26.is_roof());
        assert!(PieceType::Roof45.is_roof());
        assert!(!PieceType::Wall.is_roof());
        assert!(!PieceType::Generic.is_roof());
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&PieceType::Roof26).unwrap();
        assert_eq!(json, "\"roof_26\"");

        let piece: PlacedPiece = serde_json::from_str(
            r#"{ "id": 7, "piece_type": "stairs", "position": [1.0, 2.0, 3.0] }"#,
        )
        .unwrap();
        assert_eq!(piece.id, PieceId(7));
        assert_eq!(piece.piece_type, PieceType::Stairs);
        assert_eq!(piece.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(piece.yaw, 0.0);

        let legacy: PieceType = serde_json::from_str("\"wooden_roof_45\"").unwrap();
        assert_eq!(legacy, PieceType::Roof45);
        assert!(serde_json::from_str::<PieceType>("\"campfire\"").is_err());
    }
}
