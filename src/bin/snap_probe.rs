//! Snap Probe
//!
//! Run with: `cargo run --bin snap_probe -- demos/room.json`
//!
//! Loads a JSON scene (config, placed pieces, probes), resolves every probe
//! and prints where each held piece would go. Set `RUST_LOG=trace` to see
//! which strategy matched.

use std::process::ExitCode;

use build_snap_engine::scene::SnapScene;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: snap_probe <scene.json>");
        return ExitCode::from(2);
    };

    let scene = match SnapScene::load(&path) {
        Ok(scene) => scene,
        Err(err) => {
            log::error!("Failed to load {}: {}", path, err);
            eprintln!("snap_probe: {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("===========================================");
    println!("   Snap Probe: {path}");
    println!("===========================================");
    println!(
        "radius {:.2}  grid {:.2}  wall {:.2}  stair {:.2}",
        scene.config.snap_radius,
        scene.config.grid_size,
        scene.config.wall_height,
        scene.config.stair_height
    );
    println!("{} pieces, {} probes", scene.pieces.len(), scene.probes.len());
    println!();

    for report in scene.run() {
        println!("{report}");
    }

    ExitCode::SUCCESS
}
