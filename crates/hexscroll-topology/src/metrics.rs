//! Pixel geometry of the staggered hex grid.
//!
//! Tiles are `tile_width` wide. Consecutive rows overlap so that a row only
//! advances by `(tile_height + tile_side) / 2` pixels, and every odd row is
//! pulled left by half a tile width.

use crate::error::{Result, TopologyError};
use crate::{PixelPos, WorldCoord};

/// Default tile width in pixels.
pub const DEFAULT_TILE_WIDTH: f64 = 112.0;

/// Default tile height in pixels (point to point).
pub const DEFAULT_TILE_HEIGHT: f64 = 129.0;

/// Default length of a hex side in pixels.
pub const DEFAULT_TILE_SIDE: f64 = 64.0;

/// Pixel dimensions of one hex tile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMetrics {
    pub tile_width: f64,
    pub tile_height: f64,
    pub tile_side: f64,
}

impl Default for TileMetrics {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            tile_side: DEFAULT_TILE_SIDE,
        }
    }
}

impl TileMetrics {
    /// Create metrics, rejecting degenerate dimensions.
    pub fn new(tile_width: f64, tile_height: f64, tile_side: f64) -> Result<Self> {
        let metrics = Self {
            tile_width,
            tile_height,
            tile_side,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Check that every dimension is finite and positive.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("tile_side", self.tile_side),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TopologyError::InvalidMetrics { field, value });
            }
        }
        Ok(())
    }

    /// Vertical distance between the centres of consecutive rows.
    #[inline]
    pub fn row_height(&self) -> f64 {
        (self.tile_height + self.tile_side) / 2.0
    }

    /// Horizontal shift applied to the given row.
    #[inline]
    fn row_offset(&self, coord: WorldCoord) -> f64 {
        if coord.is_odd_row() {
            self.tile_width / 2.0
        } else {
            0.0
        }
    }

    /// Centre of a cell in scene space.
    pub fn world_to_pixel(&self, coord: WorldCoord) -> PixelPos {
        PixelPos::new(
            coord.col as f64 * self.tile_width - self.row_offset(coord),
            coord.row as f64 * self.row_height(),
        )
    }

    /// The cell containing a scene-space position.
    ///
    /// Exact inverse of [`world_to_pixel`](Self::world_to_pixel) at tile centres.
    pub fn pixel_to_world(&self, pos: PixelPos) -> WorldCoord {
        let row_height = self.row_height();
        let row = ((pos.y + row_height / 2.0) / row_height).floor() as i64;
        let offset = self.row_offset(WorldCoord::new(0, row));
        let col = ((pos.x + offset + self.tile_width / 2.0) / self.tile_width).floor() as i64;
        WorldCoord::new(col, row)
    }
}
