//! Fixed pool of reusable tile slots.
//!
//! Every slot is created once, when the map is built, and lives until the
//! map is dropped. Scrolling only reassigns the world cell a slot shows.

use hexscroll_topology::{TileMetrics, WorldCoord};
use tracing::warn;

use crate::error::{MapError, Result};
use crate::host::{SlotHost, TileAsset, TileSource};
use crate::index::{BufferDimensions, BufferIndex};
use crate::recycler::SlotUpdate;

/// A long-lived visual placeholder in the pool.
#[derive(Debug)]
pub struct TileSlot<H> {
    index: BufferIndex,
    world: WorldCoord,
    handle: H,
    content: TileAsset,
}

impl<H> TileSlot<H> {
    /// Fixed position of this slot in the pool.
    pub fn index(&self) -> BufferIndex {
        self.index
    }

    /// World cell the slot currently shows.
    pub fn world(&self) -> WorldCoord {
        self.world
    }

    /// Host handle for the slot's scene node.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Graphic currently attached.
    pub fn content(&self) -> &TileAsset {
        &self.content
    }
}

/// Row-major pool of [`TileSlot`]s.
#[derive(Debug)]
pub struct TilePool<H> {
    dims: BufferDimensions,
    slots: Vec<Option<TileSlot<H>>>,
}

impl<H> TilePool<H> {
    /// Build every slot, placing `origin` at index `[0, 0]`.
    ///
    /// Cells are visited row by row, so slot `[c, r]` shows `origin + (c, r)`.
    pub fn populate<S>(
        dims: BufferDimensions,
        origin: WorldCoord,
        metrics: &TileMetrics,
        host: &mut S,
        tiles: &dyn TileSource,
    ) -> Self
    where
        S: SlotHost<Handle = H>,
    {
        let mut slots = Vec::with_capacity(dims.capacity());

        for index in dims.indices() {
            let world = origin + WorldCoord::new(i64::from(index.col), i64::from(index.row));
            let pos = metrics.world_to_pixel(world);

            let Some(handle) = host.create_slot(pos, world.z_order(), &world.key()) else {
                warn!("Host failed to create tile slot {} for cell {}", index, world);
                slots.push(None);
                continue;
            };

            let content = tiles.tile_for(world);
            host.replace_slot_content(&handle, &content);

            slots.push(Some(TileSlot {
                index,
                world,
                handle,
                content,
            }));
        }

        Self { dims, slots }
    }

    pub fn dimensions(&self) -> BufferDimensions {
        self.dims
    }

    /// Number of slots the pool was sized for.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots the host actually created.
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    fn linear(&self, index: BufferIndex) -> Result<usize> {
        self.dims
            .linear(index)
            .filter(|&i| i < self.slots.len())
            .ok_or(MapError::IndexOutOfRange {
                index,
                capacity: self.slots.len(),
            })
    }

    /// Look up the slot at `index`.
    pub fn slot_at(&self, index: BufferIndex) -> Result<&TileSlot<H>> {
        let i = self.linear(index)?;
        self.slots[i].as_ref().ok_or(MapError::MissingSlot(index))
    }

    /// Mutable lookup of the slot at `index`.
    pub fn slot_at_mut(&mut self, index: BufferIndex) -> Result<&mut TileSlot<H>> {
        let i = self.linear(index)?;
        self.slots[i].as_mut().ok_or(MapError::MissingSlot(index))
    }

    /// Reassign one slot to a new world cell and re-render it.
    pub fn apply<S>(
        &mut self,
        update: SlotUpdate,
        metrics: &TileMetrics,
        host: &mut S,
        tiles: &dyn TileSource,
    ) -> Result<()>
    where
        S: SlotHost<Handle = H>,
    {
        let slot = self.slot_at_mut(update.index)?;
        let world = update.world;

        slot.world = world;
        let pos = metrics.world_to_pixel(world);
        host.reposition_slot(&slot.handle, pos, world.z_order(), &world.key());

        slot.content = tiles.tile_for(world);
        host.replace_slot_content(&slot.handle, &slot.content);

        Ok(())
    }

    /// Iterate the slots the host created, in index order.
    pub fn iter(&self) -> impl Iterator<Item = &TileSlot<H>> {
        self.slots.iter().flatten()
    }
}
