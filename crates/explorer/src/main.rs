use std::path::PathBuf;

use hexroam_engine::coords::HexCoord;
use hexroam_engine::viewport::{Viewport, DEFAULT_BUFFER_RADIUS, DEFAULT_VISIBLE_RADIUS};
use hexroam_engine::world::World;
use hexroam_explorer::edit_store::JsonEditBackend;
use hexroam_explorer::{persistence, seed};

fn main() {
    let cli_seed: Option<i64> = std::env::args()
        .skip_while(|a| a != "--seed")
        .nth(1)
        .and_then(|s| s.parse().ok());
    let world_path: PathBuf = std::env::args()
        .skip_while(|a| a != "--world")
        .nth(1)
        .unwrap_or_else(|| "saves/world.json".into())
        .into();
    let edits_dir: PathBuf = std::env::args()
        .skip_while(|a| a != "--edits")
        .nth(1)
        .unwrap_or_else(|| "saves/edits".into())
        .into();
    let steps: usize = std::env::args()
        .skip_while(|a| a != "--steps")
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(24);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .init();

    tracing::info!("hexroam -- deterministic hex world explorer");

    // ── Load a saved world or create a fresh one ─────────────────────────
    let (mut world, start_center) = match persistence::load_world(
        &world_path,
        Box::new(JsonEditBackend::new(&edits_dir)),
    ) {
        Ok(Some((world, center))) => (world, center),
        Ok(None) => {
            let seed = seed::resolve(cli_seed);
            let world = World::with_edit_backend(seed, Box::new(JsonEditBackend::new(&edits_dir)));
            (world, HexCoord::new(0, 0))
        }
        Err(e) => {
            tracing::error!("Failed to load {}: {:#}", world_path.display(), e);
            std::process::exit(1);
        }
    };

    let mut viewport = Viewport::new(DEFAULT_VISIBLE_RADIUS, DEFAULT_BUFFER_RADIUS);
    viewport.update(&mut world, start_center);
    tracing::info!(
        "Viewport ready at {}: {} hexes materialized",
        viewport.center(),
        world.hex_count(),
    );

    // ── Deterministic demo walk ──────────────────────────────────────────
    // Wander east and south, exploring the hex under the camera; the same
    // seed and walk always produce the same world.
    let mut center = start_center;
    for step in 0..steps {
        let (dq, dr) = match step % 4 {
            0 => (1, 0),
            1 => (0, 1),
            2 => (1, -1),
            _ => (1, 0),
        };
        center = HexCoord::new(center.q + dq, center.r + dr);
        viewport.update(&mut world, center);
        world.explore(center, 1);

        let here = world.get_or_generate(center);
        if let Some(settlement) = &here.settlement_data {
            tracing::info!(
                "Step {}: {} at {} -- {} ({}, pop {})",
                step,
                here.terrain().display_name(),
                center,
                settlement.name,
                settlement.settlement_type.display_name(),
                settlement.population,
            );
        } else {
            tracing::debug!(
                "Step {}: {} at {}",
                step,
                here.terrain().display_name(),
                center,
            );
        }
    }

    if let Some((coord, distance)) = world.find_nearest_settlement(center, 10) {
        let name = world
            .get(coord)
            .and_then(|h| h.settlement_data.as_ref())
            .map(|s| s.name.clone())
            .unwrap_or_default();
        tracing::info!("Nearest settlement to {center}: {name} at {coord} ({distance} hexes)");
    }

    // ── Statistics ───────────────────────────────────────────────────────
    let stats = world.statistics();
    tracing::info!(
        "World: {} hexes, {} edited, total population {}",
        stats.hex_count,
        stats.edited_hexes,
        stats.total_population,
    );
    for (terrain, count) in &stats.terrain_counts {
        tracing::info!("  {:<10} {}", terrain.display_name(), count);
    }
    for (kind, count) in &stats.settlement_counts {
        tracing::info!("  {:<14} {}", kind.display_name(), count);
    }
    for (name, population, coord) in &stats.top_settlements {
        tracing::info!("  largest: {} at {} (pop {})", name, coord, population);
    }

    // ── Save on exit ─────────────────────────────────────────────────────
    match persistence::save_world(&world, &viewport, &world_path) {
        Ok(n) => tracing::info!("Saved {} hexes to {}", n, world_path.display()),
        Err(e) => tracing::error!("Save failed: {:#}", e),
    }
}
