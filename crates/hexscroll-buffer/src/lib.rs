//! Hexscroll Buffer
//!
//! Infinite scrolling for hex tile maps on a fixed budget of scene nodes.
//!
//! # Carmack-style recycling
//!
//! The map keeps exactly `width x height` tile slots: enough to cover the
//! viewport plus a margin. The slots are created once. When the viewport
//! crosses a tile boundary, the slots whose cells scrolled out are moved to
//! the cells that scrolled in and re-skinned. Nothing is allocated on the
//! host side after initialization.
//!
//! The pool is circular. [`BufferIndex`] `[0, 0]` is not pinned to the
//! top-left of the view; instead the map tracks which slot currently shows
//! the first buffered cell (the buffer origin) and wraps around from there.
//!
//! # Usage
//!
//! ```ignore
//! let mut controller = ScrollController::new();
//! let tiles = Box::new(UniformTiles::new("res/tile.png"));
//! controller.initialize(&MapConfig::default(), host, tiles)?;
//!
//! // From the host's scroll callback:
//! controller.on_scroll_offset_changed(scroll_view.content_offset());
//! ```

mod config;
mod controller;
mod error;
mod host;
mod index;
mod map;
mod pool;
mod recycler;

pub use config::{
    MapConfig, ViewportSize, DEFAULT_MARGIN, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
pub use controller::ScrollController;
pub use error::{MapError, Result};
pub use host::{place, Anchor, Placeable, SlotHost, TileAsset, TileSource, UniformTiles};
pub use index::{BufferDimensions, BufferIndex, MAX_SLOTS};
pub use map::TileMap;
pub use pool::{TilePool, TileSlot};
pub use recycler::{column_strip, corner, plan, row_strip, RecycleFrame, RecycleReport, SlotUpdate};

pub use hexscroll_topology::{PixelPos, TileMetrics, WorldCoord};
