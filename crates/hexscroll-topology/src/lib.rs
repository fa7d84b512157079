//! Hexscroll Topology
//!
//! Geometry of an infinite, staggered hexagonal tile grid.
//!
//! # Layout
//!
//! Cells are addressed by `(col, row)`. Rows stack vertically and overlap:
//! the row pitch is `(tile_height + tile_side) / 2`. Every odd row is shifted
//! half a tile to the left so the hexes interlock.
//!
//! ```text
//!   row 2   /  \/  \/  \
//!   row 1 /  \/  \/  \/
//!   row 0   /  \/  \/  \
//! ```
//!
//! # Draw order
//!
//! Hex sprites overlap, so [`z_order`] gives every cell a deterministic depth:
//! left before right and stable along a row.

mod error;
mod hex;
mod metrics;
mod zorder;

pub use error::{Result, TopologyError};
pub use hex::{PixelPos, WorldCoord};
pub use metrics::{TileMetrics, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_SIDE, DEFAULT_TILE_WIDTH};
pub use zorder::z_order;
