//! Error types for hexscroll-buffer.

use hexscroll_topology::{TopologyError, WorldCoord};
use thiserror::Error;

use crate::BufferIndex;

/// Result type for hexscroll-buffer operations.
pub type Result<T> = std::result::Result<T, MapError>;

/// Errors that can occur while building or scrolling a tile map.
///
/// None of these are fatal once a map exists: lookups that fail during a
/// recycle are logged and the affected slot is skipped.
#[derive(Debug, Error)]
pub enum MapError {
    /// A scroll event arrived before the map was built.
    #[error("tile map is not initialized")]
    NotInitialized,

    /// The configuration cannot produce a usable buffer.
    #[error("invalid map config: {0}")]
    InvalidConfig(String),

    /// Tile geometry was rejected.
    #[error("invalid tile geometry: {0}")]
    Topology(#[from] TopologyError),

    /// A config document could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A buffer index falls outside the pool.
    #[error("buffer index {index} out of range (capacity {capacity})")]
    IndexOutOfRange { index: BufferIndex, capacity: usize },

    /// A scroll would move the map outside the addressable world.
    #[error("scroll by {offset} leaves the addressable world")]
    OffsetOutOfRange { offset: WorldCoord },

    /// The pool has no slot at a valid index.
    #[error("no tile slot at buffer index {0}")]
    MissingSlot(BufferIndex),
}
