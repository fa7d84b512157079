//! Hexscroll Simulation
//!
//! A headless host for hexscroll tile maps.
//!
//! # Architecture
//!
//! - **SceneGraph**: in-memory scene that receives slot commands from the map
//! - **ScrollPath**: scripted viewport offsets (pans, explicit lists)
//! - **Playback**: feeds a path into a `ScrollController` and totals the recycles
//!
//! # Usage
//!
//! ```ignore
//! let mut controller = ScrollController::new();
//! let tiles = Box::new(UniformTiles::new("res/tile.png"));
//! controller.initialize(&config, SceneGraph::new(), tiles)?;
//!
//! let path = ScrollPath::pan(config.start, config.start + PixelPos::new(2000.0, 1500.0), 400);
//! let summary = Playback::new(path).run(&mut controller);
//! ```

mod path;
mod playback;
mod scene;

pub use path::ScrollPath;
pub use playback::{Playback, PlaybackSummary};
pub use scene::{CommandStats, NodeId, SceneGraph, SceneNode};

#[cfg(test)]
mod tests {
    use super::*;
    use hexscroll_buffer::{MapConfig, ScrollController, UniformTiles};
    use hexscroll_topology::PixelPos;
    use std::collections::HashSet;

    #[test]
    fn scene_matches_map_after_long_pan() {
        let config = MapConfig::default();
        let mut controller = ScrollController::new();
        controller
            .initialize(&config, SceneGraph::new(), Box::new(UniformTiles::new("res/tile.png")))
            .unwrap();

        let far = config.start + PixelPos::new(3000.0, 2200.0);
        let out = ScrollPath::pan(config.start, far, 300);
        let back = ScrollPath::pan(far, PixelPos::new(400.0, 900.0), 50);
        Playback::new(out.then(back)).run(&mut controller);

        let map = controller.map().unwrap();
        let scene = map.host();

        // The scene never grows beyond the pool.
        assert_eq!(scene.len(), map.buffer_dimensions().capacity());
        assert_eq!(scene.stats().created, scene.len());

        let mut keys = HashSet::new();
        for slot in map.slots() {
            let node = scene.node(*slot.handle()).unwrap();
            assert_eq!(node.position, map.metrics().world_to_pixel(slot.world()));
            assert_eq!(node.z_order, slot.world().z_order());
            assert_eq!(node.key, slot.world().key());
            assert!(keys.insert(node.key.clone()));
        }
    }

    #[test]
    fn node_limit_leaves_holes_that_are_skipped() {
        let config = MapConfig::default();
        let mut controller = ScrollController::new();
        controller
            .initialize(&config, SceneGraph::with_node_limit(100), Box::new(UniformTiles::new("t")))
            .unwrap();

        let path = ScrollPath::from_offsets(vec![PixelPos::new(-9000.0, -9000.0)]);
        let summary = Playback::new(path).run(&mut controller);

        let capacity = controller.buffer_dimensions().unwrap().capacity();
        assert_eq!(summary.recycles, 1);
        assert_eq!(summary.updated, 100);
        assert_eq!(summary.skipped, capacity - 100);
    }
}
