//! Hexscroll Simulation
//!
//! Pan a headless tile map along a straight line and report how many slots
//! were recycled.
//!
//! Usage: `hexscroll-sim [config.json] [steps] [dx] [dy]`

use hexscroll_buffer::{MapConfig, ScrollController, UniformTiles};
use hexscroll_sim::{Playback, SceneGraph, ScrollPath};
use hexscroll_topology::PixelPos;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexscroll_sim=info,hexscroll_buffer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let config = match args.get(1).filter(|s| s.as_str() != "-") {
        Some(path) => MapConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => MapConfig::default(),
    };

    let steps: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(400);
    let dx: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(2000.0);
    let dy: f64 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(1500.0);

    let mut controller = ScrollController::new();
    controller.initialize(
        &config,
        SceneGraph::new(),
        Box::new(UniformTiles::new(config.tile_asset.clone())),
    )?;

    let dims = controller.buffer_dimensions()?;
    tracing::info!(
        "Map ready: {} slots ({}) for a {}x{} viewport",
        dims.capacity(),
        dims,
        config.viewport.width,
        config.viewport.height
    );

    let target = config.start + PixelPos::new(dx, dy);
    let path = ScrollPath::pan(config.start, target, steps);
    tracing::info!("Panning from {} to {} in {} steps", config.start, target, steps);

    let summary = Playback::new(path).run(&mut controller);

    let map = controller.map()?;
    let stats = map.host().stats();
    tracing::info!(
        "Playback complete: {} events, {} recycles, {} slots updated \
         ({} skipped, max {} per recycle)",
        summary.events,
        summary.recycles,
        summary.updated,
        summary.skipped,
        summary.max_updated
    );
    tracing::info!(
        "Scene: {} nodes, {} repositioned, {} reskinned, world origin {}",
        stats.created,
        stats.repositioned,
        stats.reskinned,
        map.world_origin()
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
