//! Placement Tests - Occupancy, Build Commits and Scenes
//!
//! Tests for the buildables registry, the occupancy veto and the
//! preview/commit verdicts built on top of the snap router.

use build_snap_engine::building::{BuildRegistry, PieceId, PieceType, PlacedPiece};
use build_snap_engine::config::{OCCUPANCY_RADIUS, SnapConfig};
use build_snap_engine::scene::SnapScene;
use build_snap_engine::snap::{PlaceError, PlacementPreview, RaycastHit, SnapRouter, plan_placement};
use build_snap_engine::Error;

use glam::Vec3;

// ============================================================================
// Occupancy
// ============================================================================

#[test]
fn test_occupancy_threshold() {
    let mut registry = BuildRegistry::new();
    registry.place(PieceType::Wall, Vec3::new(0.0, 0.0, 0.0), 0.0);

    assert!(registry.is_occupied(Vec3::new(0.0, 0.0, OCCUPANCY_RADIUS - 0.01), None));
    assert!(!registry.is_occupied(Vec3::new(0.0, 0.0, OCCUPANCY_RADIUS), None));
    assert!(!registry.is_occupied(Vec3::new(0.0, 2.0, 0.0), None));
}

#[test]
fn test_occupancy_excludes_only_the_named_piece() {
    let mut registry = BuildRegistry::new();
    let a = registry.place(PieceType::Floor, Vec3::ZERO, 0.0);
    registry.place(PieceType::Floor, Vec3::new(0.1, 0.0, 0.0), 0.0);

    // The second floor still blocks even when the first is excluded
    assert!(registry.is_occupied(Vec3::ZERO, Some(a)));
    assert!(registry.is_occupied(Vec3::ZERO, Some(PieceId(77))));
}

#[test]
fn test_occupancy_custom_radius() {
    let mut registry = BuildRegistry::new();
    registry.place(PieceType::Stairs, Vec3::ZERO, 0.0);
    assert!(!registry.is_occupied_within(Vec3::new(1.0, 0.0, 0.0), None, 1.0));
    assert!(registry.is_occupied_within(Vec3::new(1.0, 0.0, 0.0), None, 1.5));
}

// ============================================================================
// Build Commits
// ============================================================================

#[test]
fn test_build_a_small_room() {
    let router = SnapRouter::default();
    let mut registry = BuildRegistry::new();

    // First floor on open ground lands on the grid
    let hit = RaycastHit::ground(Vec3::new(0.3, 0.0, -0.2));
    let first = plan_placement(&router, &registry, PieceType::Floor, Some(&hit), None).unwrap();
    assert_eq!(first.position, Vec3::ZERO);
    let floor = registry.place(PieceType::Floor, first.position, first.yaw);

    // Wall on the front edge
    let hit = RaycastHit::new(Vec3::new(0.1, 0.0, -0.8), Vec3::Y, Some(floor));
    let wall = plan_placement(&router, &registry, PieceType::Wall, Some(&hit), None).unwrap();
    assert_eq!(wall.position, Vec3::new(0.0, 0.0, -1.0));
    assert!(wall.snapped);
    let wall_id = registry.place(PieceType::Wall, wall.position, wall.yaw);

    // Second wall stacked on top of it
    let hit = RaycastHit::new(Vec3::new(0.0, 1.8, -1.0), Vec3::Z, Some(wall_id));
    let upper = plan_placement(&router, &registry, PieceType::Wall, Some(&hit), None).unwrap();
    assert_eq!(upper.position, Vec3::new(0.0, 2.0, -1.0));
    registry.place(PieceType::Wall, upper.position, upper.yaw);

    // Same stack again is now blocked
    let again = plan_placement(&router, &registry, PieceType::Wall, Some(&hit), None);
    assert!(matches!(again, Err(PlaceError::Occupied(r)) if r.position == upper.position));

    // Roof caps the lower wall's top, which is taken too
    let roof = plan_placement(&router, &registry, PieceType::Roof26, Some(&hit), None);
    assert!(matches!(roof, Err(PlaceError::Occupied(_))));

    assert_eq!(registry.len(), 3);
}

#[test]
fn test_preview_reports_validity() {
    let router = SnapRouter::default();
    let mut registry = BuildRegistry::new();
    let stairs = registry.place(PieceType::Stairs, Vec3::ZERO, 0.0);

    let hit = RaycastHit::new(Vec3::new(0.0, 0.5, -0.5), Vec3::Y, Some(stairs));
    let preview = PlacementPreview::evaluate(&router, &registry, PieceType::Stairs, Some(&hit), None)
        .unwrap();
    assert!(preview.valid);
    assert_eq!(preview.result.position, Vec3::new(0.0, 2.0, -2.0));

    registry.place(PieceType::Stairs, preview.result.position, preview.result.yaw);
    let preview = PlacementPreview::evaluate(&router, &registry, PieceType::Stairs, Some(&hit), None)
        .unwrap();
    assert!(!preview.valid);
}

#[test]
fn test_router_occupancy_radius_from_config() {
    let router = SnapRouter::new(SnapConfig {
        occupancy_radius: 3.0,
        ..SnapConfig::default()
    });
    let mut registry = BuildRegistry::new();
    registry.place(PieceType::Generic, Vec3::new(2.0, 0.0, 0.0), 0.0);

    let hit = RaycastHit::ground(Vec3::ZERO);
    assert!(matches!(
        plan_placement(&router, &registry, PieceType::Generic, Some(&hit), None),
        Err(PlaceError::Occupied(_))
    ));
}

#[test]
fn test_registry_replaces_by_id() {
    let mut registry = BuildRegistry::new();
    registry.insert(PlacedPiece::new(PieceId(4), PieceType::Floor, Vec3::ZERO, 0.0));
    registry.insert(PlacedPiece::new(PieceId(4), PieceType::Floor, Vec3::new(8.0, 0.0, 0.0), 0.0));
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_occupied(Vec3::ZERO, None));
    assert!(registry.is_occupied(Vec3::new(8.0, 0.0, 0.0), None));
}

// ============================================================================
// Scenes
// ============================================================================

#[test]
fn test_scene_file_round_trip_through_probe() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tower.json");
    std::fs::write(
        &path,
        r#"{
            "config": { "wall_height": 3.0 },
            "pieces": [
                { "id": 1, "piece_type": "wall", "position": [0, 0, 0], "yaw": 0.5 }
            ],
            "probes": [
                { "label": "stack", "piece": "wall",
                  "hit": { "position": [0, 2.0, 0.1], "normal": [0, 0, 1], "collider": 1 } },
                { "label": "miss", "piece": "wall", "hit": null }
            ]
        }"#,
    )
    .unwrap();

    let scene = SnapScene::load(&path).unwrap();
    assert_eq!(scene.config.wall_height, 3.0);

    let reports = scene.run();
    let stack = reports[0].outcome.unwrap();
    assert_eq!(stack.position, Vec3::new(0.0, 3.0, 0.0));
    assert_eq!(stack.yaw, 0.5);
    assert_eq!(reports[1].outcome, Err(PlaceError::NoHit));
}

#[test]
fn test_scene_rejects_unknown_piece_tag() {
    let err = SnapScene::from_json_str(r#"{ "probes": [ { "piece": "campfire" } ] }"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
