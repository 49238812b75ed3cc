//! Snap Scenes (.json)
//!
//! A scene is a config, a list of placed pieces and a list of probes (hits
//! with the piece the player is holding). Running a scene resolves every
//! probe against the pieces and applies the occupancy veto.
//!
//! ```json
//! {
//!   "config": { "snap_radius": 2.5 },
//!   "pieces": [ { "id": 1, "piece_type": "floor", "position": [0, 0, 0] } ],
//!   "probes": [
//!     { "label": "corner", "piece": "floor",
//!       "hit": { "position": [1, 0, 1], "normal": [0, 1, 0], "collider": 1 } }
//!   ]
//! }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::building::{BuildRegistry, PieceId, PieceType, PlacedPiece};
use crate::config::SnapConfig;
use crate::error::Result;
use crate::snap::{PlaceError, RaycastHit, SnapResult, SnapRouter, plan_placement};

/// One placement attempt
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Probe {
    #[serde(default)]
    pub label: Option<String>,
    /// Piece held by the player
    pub piece: PieceType,
    /// `null` or missing for a ray that hit nothing
    #[serde(default)]
    pub hit: Option<RaycastHit>,
    /// Piece being moved, ignored by the occupancy check
    #[serde(default)]
    pub exclude: Option<PieceId>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SnapScene {
    #[serde(default)]
    pub config: SnapConfig,
    #[serde(default)]
    pub pieces: Vec<PlacedPiece>,
    #[serde(default)]
    pub probes: Vec<Probe>,
}

/// Outcome of one probe
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeReport {
    pub label: String,
    pub piece: PieceType,
    pub outcome: std::result::Result<SnapResult, PlaceError>,
}

impl SnapScene {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scene: SnapScene = serde_json::from_str(json)?;
        scene.config.validate()?;
        Ok(scene)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let scene = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        log::info!(
            "Loaded scene {}: {} pieces, {} probes",
            path.display(),
            scene.pieces.len(),
            scene.probes.len()
        );
        Ok(scene)
    }

    pub fn registry(&self) -> BuildRegistry {
        let mut registry = BuildRegistry::new();
        for piece in &self.pieces {
            if registry.insert(*piece).is_some() {
                log::warn!("Duplicate piece id {} in scene, keeping the last one", piece.id);
            }
        }
        registry
    }

    /// Resolve every probe in order.
    pub fn run(&self) -> Vec<ProbeReport> {
        let router = SnapRouter::new(self.config);
        let registry = self.registry();
        self.probes
            .iter()
            .enumerate()
            .map(|(i, probe)| ProbeReport {
                label: probe.label.clone().unwrap_or_else(|| format!("probe {}", i + 1)),
                piece: probe.piece,
                outcome: plan_placement(&router, &registry, probe.piece, probe.hit.as_ref(), probe.exclude),
            })
            .collect()
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: ", self.label, self.piece)?;
        match &self.outcome {
            Ok(r) => write!(
                f,
                "({:.2}, {:.2}, {:.2}) yaw {:.3} {:?}",
                r.position.x, r.position.y, r.position.z, r.yaw, r.kind
            ),
            Err(PlaceError::Occupied(r)) => write!(
                f,
                "({:.2}, {:.2}, {:.2}) yaw {:.3} {:?} BLOCKED",
                r.position.x, r.position.y, r.position.z, r.yaw, r.kind
            ),
            Err(PlaceError::NoHit) => write!(f, "no hit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use glam::Vec3;

    const SCENE: &str = r#"{
        "pieces": [
            { "id": 1, "piece_type": "floor", "position": [0, 0, 0] },
            { "id": 2, "piece_type": "wooden_wall", "position": [0, 0, -1] }
        ],
        "probes": [
            { "label": "corner", "piece": "floor",
              "hit": { "position": [1, 0, 1], "normal": [0, 1, 0], "collider": 1 } },
            { "piece": "wall",
              "hit": { "position": [0.8, 0.3, -1.1], "normal": [0, 0, 1], "collider": 2 } },
            { "piece": "stairs" }
        ]
    }"#;

    #[test]
    fn test_run_scene() {
        let scene = SnapScene::from_json_str(SCENE).unwrap();
        assert_eq!(scene.config, SnapConfig::default());

        let reports = scene.run();
        assert_eq!(reports.len(), 3);

        assert_eq!(reports[0].label, "corner");
        let corner = reports[0].outcome.unwrap();
        assert_eq!(corner.position, Vec3::new(2.0, 0.0, 2.0));
        assert!(corner.snapped);

        // Low hit on a wall with no floor target falls to the raw hit
        assert_eq!(reports[1].label, "probe 2");
        let ground = reports[1].outcome.unwrap();
        assert_eq!(ground.position, Vec3::new(0.8, 0.3, -1.1));
        assert!(!ground.snapped);

        assert_eq!(reports[2].outcome, Err(PlaceError::NoHit));
        assert_eq!(reports[2].to_string(), "[probe 3] stairs: no hit");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = SnapScene::from_json_str(r#"{ "config": { "snap_radius": -1 } }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, SCENE).unwrap();
        let scene = SnapScene::load(&path).unwrap();
        assert_eq!(scene.pieces.len(), 2);
        assert_eq!(scene.pieces[1].piece_type, PieceType::Wall);
    }
}
