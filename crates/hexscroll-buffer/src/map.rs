//! The scrolling tile map: pool, origins and the scroll callback.

use hexscroll_topology::{PixelPos, TileMetrics, WorldCoord};
use tracing::{debug, error, info, warn};

use crate::config::MapConfig;
use crate::error::{MapError, Result};
use crate::host::{SlotHost, TileSource};
use crate::index::{BufferDimensions, BufferIndex};
use crate::pool::{TilePool, TileSlot};
use crate::recycler::{plan, RecycleFrame, RecycleReport};

/// An infinite hex map drawn with a fixed pool of tile slots.
///
/// Invariant: the slot at index `b` shows
/// `world_origin + forward_distance(buffer_origin, b)`.
pub struct TileMap<H: SlotHost> {
    metrics: TileMetrics,
    dims: BufferDimensions,
    /// Slot showing `world_origin`
    buffer_origin: BufferIndex,
    /// First buffered cell
    world_origin: WorldCoord,
    pool: TilePool<H::Handle>,
    host: H,
    tiles: Box<dyn TileSource>,
}

impl<H: SlotHost> TileMap<H> {
    /// Build the pool around `config.start` and hand the host its initial
    /// scroll offset.
    pub fn initialize(config: &MapConfig, mut host: H, tiles: Box<dyn TileSource>) -> Result<Self> {
        config.validate()?;

        let metrics = config.metrics;
        let dims = BufferDimensions::from_viewport(config.viewport, &metrics, config.margin)?;
        let world_origin = metrics.pixel_to_world(config.start);

        let pool = TilePool::populate(dims, world_origin, &metrics, &mut host, tiles.as_ref());
        if pool.live() < pool.capacity() {
            warn!("Tile map built with {} of {} slots", pool.live(), pool.capacity());
        }

        host.set_scroll_offset(-config.start);

        info!(
            "Tile map initialized: {} slots ({}) starting at {}",
            dims.capacity(),
            dims,
            world_origin
        );

        Ok(Self {
            metrics,
            dims,
            buffer_origin: BufferIndex::ZERO,
            world_origin,
            pool,
            host,
            tiles,
        })
    }

    /// React to the viewport's content offset changing.
    ///
    /// The offset is negative in the direction of travel. Positions before
    /// the world origin, cells beyond [`WorldCoord::LIMIT`] and scrolls
    /// smaller than a tile are ignored.
    pub fn on_scroll_offset_changed(&mut self, offset: PixelPos) -> Option<RecycleReport> {
        let world_pos = -offset;

        if !world_pos.x.is_finite() || !world_pos.y.is_finite() {
            warn!("Ignoring non-finite scroll offset {}", offset);
            return None;
        }
        if world_pos.x < 0.0 || world_pos.y < 0.0 {
            return None;
        }

        let current = self.metrics.pixel_to_world(world_pos);
        if !current.is_within_limit() {
            warn!("Ignoring scroll offset {}: cell {} is out of range", offset, current);
            return None;
        }

        let delta = current - self.world_origin;
        if delta.col.abs() < 1 && delta.row.abs() < 1 {
            return None;
        }

        match self.recycle(delta) {
            Ok(report) => Some(report),
            Err(e) => {
                error!("Recycle for offset {} failed: {}", offset, e);
                None
            }
        }
    }

    /// Shift the buffered rectangle by `offset` whole tiles.
    ///
    /// Only slots whose cell left the rectangle are reassigned. Slots that
    /// cannot be found are skipped and counted; the rest still update.
    ///
    /// Fails with [`MapError::OffsetOutOfRange`] and leaves the map untouched
    /// when the new world origin would pass [`WorldCoord::LIMIT`].
    pub fn recycle(&mut self, offset: WorldCoord) -> Result<RecycleReport> {
        let in_range = self
            .world_origin
            .checked_add(offset)
            .is_some_and(|origin| origin.is_within_limit());
        if !in_range {
            return Err(MapError::OffsetOutOfRange { offset });
        }

        let frame = RecycleFrame {
            dims: self.dims,
            buffer_origin: self.buffer_origin,
            world_origin: self.world_origin,
            offset,
        };

        let mut report = RecycleReport {
            offset,
            ..Default::default()
        };

        for update in plan(&frame) {
            match self.pool.apply(update, &self.metrics, &mut self.host, self.tiles.as_ref()) {
                Ok(()) => report.updated += 1,
                Err(e) => {
                    error!("Skipping tile update for {}: {}", update.world, e);
                    report.skipped += 1;
                }
            }
        }

        self.buffer_origin = frame.next_buffer_origin();
        self.world_origin = frame.next_world_origin();

        debug!(
            "Recycled {} slots for offset {} (buffer origin {}, world origin {})",
            report.updated, offset, self.buffer_origin, self.world_origin
        );

        Ok(report)
    }

    /// Size of the pool in tiles.
    pub fn buffer_dimensions(&self) -> BufferDimensions {
        self.dims
    }

    /// Slot currently showing the world origin.
    pub fn buffer_origin(&self) -> BufferIndex {
        self.buffer_origin
    }

    /// First buffered world cell.
    pub fn world_origin(&self) -> WorldCoord {
        self.world_origin
    }

    /// The cell the slot at `index` should be showing, derived from the
    /// origins rather than read back from the slot.
    pub fn world_origin_of_slot(&self, index: BufferIndex) -> Option<WorldCoord> {
        self.dims
            .contains(index)
            .then(|| self.world_origin + self.dims.forward_distance(self.buffer_origin, index))
    }

    /// Tile geometry the map was built with.
    pub fn metrics(&self) -> &TileMetrics {
        &self.metrics
    }

    /// Slot at a fixed pool position.
    pub fn slot(&self, index: BufferIndex) -> Result<&TileSlot<H::Handle>> {
        self.pool.slot_at(index)
    }

    /// All live slots in index order.
    pub fn slots(&self) -> impl Iterator<Item = &TileSlot<H::Handle>> {
        self.pool.iter()
    }

    /// The rendering host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the rendering host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear the map down, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }
}
