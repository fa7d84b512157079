//! Map configuration.

use hexscroll_topology::{PixelPos, TileMetrics};
use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::index::BufferDimensions;

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 960.0;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 640.0;

/// Tiles of slack kept around the viewport on each axis.
pub const DEFAULT_MARGIN: u32 = 3;

/// Visible area of the host viewport, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let finite = self.width.is_finite() && self.height.is_finite();
        if !finite || self.width < 0.0 || self.height < 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "viewport must be finite and non-negative, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

/// Configuration for building a [`TileMap`](crate::TileMap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Size of the host viewport
    pub viewport: ViewportSize,
    /// Pixel geometry of a tile
    pub metrics: TileMetrics,
    /// World position, in pixels, the viewport starts at
    pub start: PixelPos,
    /// Extra tiles buffered around the viewport
    pub margin: u32,
    /// Asset shown in every tile slot
    pub tile_asset: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportSize::default(),
            metrics: TileMetrics::default(),
            start: PixelPos::new(1000.0, 1000.0),
            margin: DEFAULT_MARGIN,
            tile_asset: "res/tile.png".to_string(),
        }
    }
}

impl MapConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration can build a map.
    pub fn validate(&self) -> Result<()> {
        self.metrics.validate()?;
        self.viewport.validate()?;
        if !self.start.x.is_finite() || !self.start.y.is_finite() {
            return Err(MapError::InvalidConfig(format!(
                "start position must be finite, got {}",
                self.start
            )));
        }
        let start = self.metrics.pixel_to_world(self.start);
        if !start.is_within_limit() {
            return Err(MapError::InvalidConfig(format!(
                "start position {} is outside the addressable world",
                self.start
            )));
        }
        BufferDimensions::from_viewport(self.viewport, &self.metrics, self.margin)?;
        if self.tile_asset.is_empty() {
            return Err(MapError::InvalidConfig("tile asset must not be empty".into()));
        }
        Ok(())
    }
}
