//! Host-facing glue between a viewport and its [`TileMap`].
//!
//! Hosts wire their scroll callback to a [`ScrollController`] before the map
//! exists; events that arrive early are dropped with an error log.

use hexscroll_topology::{PixelPos, WorldCoord};
use tracing::error;

use crate::config::MapConfig;
use crate::error::{MapError, Result};
use crate::host::{SlotHost, TileSource};
use crate::index::{BufferDimensions, BufferIndex};
use crate::map::TileMap;
use crate::recycler::RecycleReport;

/// Owns the map on behalf of the host.
pub struct ScrollController<H: SlotHost> {
    map: Option<TileMap<H>>,
}

impl<H: SlotHost> Default for ScrollController<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: SlotHost> ScrollController<H> {
    /// A controller with no map yet.
    pub fn new() -> Self {
        Self { map: None }
    }

    /// Build the map. Replaces any map built earlier.
    pub fn initialize(
        &mut self,
        config: &MapConfig,
        host: H,
        tiles: Box<dyn TileSource>,
    ) -> Result<()> {
        self.map = Some(TileMap::initialize(config, host, tiles)?);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.map.is_some()
    }

    /// Forward a scroll notification to the map.
    pub fn on_scroll_offset_changed(&mut self, offset: PixelPos) -> Option<RecycleReport> {
        match self.map.as_mut() {
            Some(map) => map.on_scroll_offset_changed(offset),
            None => {
                error!("Scroll offset {} ignored: {}", offset, MapError::NotInitialized);
                None
            }
        }
    }

    pub fn buffer_dimensions(&self) -> Result<BufferDimensions> {
        Ok(self.map()?.buffer_dimensions())
    }

    pub fn world_origin_of_slot(&self, index: BufferIndex) -> Result<WorldCoord> {
        let map = self.map()?;
        map.world_origin_of_slot(index).ok_or(MapError::IndexOutOfRange {
            index,
            capacity: map.buffer_dimensions().capacity(),
        })
    }

    pub fn map(&self) -> Result<&TileMap<H>> {
        self.map.as_ref().ok_or(MapError::NotInitialized)
    }

    pub fn map_mut(&mut self) -> Result<&mut TileMap<H>> {
        self.map.as_mut().ok_or(MapError::NotInitialized)
    }

    /// Drop the map and hand back its host, if any.
    pub fn teardown(&mut self) -> Option<H> {
        self.map.take().map(TileMap::into_host)
    }
}
