//! Buffer-local slot addressing.
//!
//! A [`BufferIndex`] names a slot inside the fixed pool and never changes for
//! the lifetime of that slot. Every arithmetic result is folded back into the
//! pool with Euclidean remainders, so negative scroll deltas wrap instead of
//! producing negative indices.

use hexscroll_topology::{TileMetrics, WorldCoord};
use serde::{Deserialize, Serialize};

use crate::config::ViewportSize;
use crate::error::{MapError, Result};

/// Position of a slot within the pool, `0 <= col < width`, `0 <= row < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BufferIndex {
    pub col: u32,
    pub row: u32,
}

impl BufferIndex {
    pub const ZERO: Self = Self { col: 0, row: 0 };

    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for BufferIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

/// Most slots a pool may hold.
pub const MAX_SLOTS: usize = 1 << 20;

/// Size of the pool in tiles. Fixed once the map is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferDimensions {
    pub width: u32,
    pub height: u32,
}

impl BufferDimensions {
    /// Create dimensions; both sides must be non-zero and the pool must not
    /// exceed [`MAX_SLOTS`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MapError::InvalidConfig(format!(
                "buffer must hold at least one tile, got {}x{}",
                width, height
            )));
        }
        let slots = u64::from(width) * u64::from(height);
        if slots > MAX_SLOTS as u64 {
            return Err(MapError::InvalidConfig(format!(
                "buffer of {}x{} tiles exceeds {} slots",
                width, height, MAX_SLOTS
            )));
        }
        Ok(Self { width, height })
    }

    /// Size a buffer to cover `viewport` plus `margin` tiles on each axis.
    ///
    /// The viewport is first grown by `margin` tile pitches, then `margin`
    /// extra tiles are added to the whole-tile count.
    pub fn from_viewport(
        viewport: ViewportSize,
        metrics: &TileMetrics,
        margin: u32,
    ) -> Result<Self> {
        metrics.validate()?;
        viewport.validate()?;

        let margin_f = f64::from(margin);
        let width = viewport.width + margin_f * metrics.tile_width;
        let height = viewport.height + margin_f * metrics.row_height();

        let cols = (width / metrics.tile_width).floor() as u64 + u64::from(margin);
        let rows = (height / metrics.row_height()).floor() as u64 + u64::from(margin);

        let cols = u32::try_from(cols)
            .map_err(|_| MapError::InvalidConfig(format!("buffer too wide: {} columns", cols)))?;
        let rows = u32::try_from(rows)
            .map_err(|_| MapError::InvalidConfig(format!("buffer too tall: {} rows", rows)))?;

        Self::new(cols, rows)
    }

    /// Number of slots in the pool.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Fold an arbitrary signed position into the pool.
    #[inline]
    pub fn wrap(&self, col: i64, row: i64) -> BufferIndex {
        BufferIndex {
            col: col.rem_euclid(i64::from(self.width)) as u32,
            row: row.rem_euclid(i64::from(self.height)) as u32,
        }
    }

    /// Whether `index` addresses a slot of this pool.
    #[inline]
    pub fn contains(&self, index: BufferIndex) -> bool {
        index.col < self.width && index.row < self.height
    }

    /// Row-major position of `index` in the slot array.
    pub fn linear(&self, index: BufferIndex) -> Option<usize> {
        self.contains(index)
            .then(|| index.row as usize * self.width as usize + index.col as usize)
    }

    /// Offset of `index` from `origin`, walking forward with wraparound.
    ///
    /// Always lands in `[0, width) x [0, height)`.
    pub fn forward_distance(&self, origin: BufferIndex, index: BufferIndex) -> WorldCoord {
        let d = self.wrap(
            i64::from(index.col) - i64::from(origin.col),
            i64::from(index.row) - i64::from(origin.row),
        );
        WorldCoord::new(i64::from(d.col), i64::from(d.row))
    }

    /// Iterate every index row by row.
    pub fn indices(&self) -> impl Iterator<Item = BufferIndex> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| BufferIndex::new(col, row)))
    }
}

impl std::fmt::Display for BufferDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> BufferDimensions {
        BufferDimensions::new(width, height).unwrap()
    }

    #[test]
    fn sized_from_viewport() {
        // (960 + 336) / 112 = 11.57, (640 + 289.5) / 96.5 = 9.63
        let d = BufferDimensions::from_viewport(
            ViewportSize::new(960.0, 640.0),
            &TileMetrics::default(),
            3,
        )
        .unwrap();
        assert_eq!(d, dims(14, 12));
        assert_eq!(d.capacity(), 168);
    }

    #[test]
    fn empty_viewport_still_has_margin() {
        let metrics = TileMetrics::default();
        let d = BufferDimensions::from_viewport(ViewportSize::new(0.0, 0.0), &metrics, 3).unwrap();
        assert_eq!(d, dims(6, 6));
    }

    #[test]
    fn zero_sized_buffer_is_rejected() {
        let metrics = TileMetrics::default();
        assert!(BufferDimensions::new(0, 4).is_err());
        let tiny = ViewportSize::new(10.0, 10.0);
        assert!(BufferDimensions::from_viewport(tiny, &metrics, 0).is_err());
    }

    #[test]
    fn oversized_buffer_is_rejected() {
        assert!(BufferDimensions::new(1024, 1024).is_ok());
        assert!(matches!(BufferDimensions::new(1024, 1025), Err(MapError::InvalidConfig(_))));
        assert!(BufferDimensions::new(u32::MAX, u32::MAX).is_err());

        let huge = ViewportSize::new(1e9, 1e9);
        assert!(matches!(
            BufferDimensions::from_viewport(huge, &TileMetrics::default(), 3),
            Err(MapError::InvalidConfig(_))
        ));
    }

    #[test]
    fn wrap_is_euclidean() {
        let d = dims(5, 3);
        assert_eq!(d.wrap(0, 0), BufferIndex::new(0, 0));
        assert_eq!(d.wrap(-1, -1), BufferIndex::new(4, 2));
        assert_eq!(d.wrap(-11, 7), BufferIndex::new(4, 1));
        assert_eq!(d.wrap(12, -3), BufferIndex::new(2, 0));
    }

    #[test]
    fn linear_index_is_row_major() {
        let d = dims(5, 3);
        assert_eq!(d.linear(BufferIndex::new(0, 0)), Some(0));
        assert_eq!(d.linear(BufferIndex::new(4, 0)), Some(4));
        assert_eq!(d.linear(BufferIndex::new(0, 1)), Some(5));
        assert_eq!(d.linear(BufferIndex::new(4, 2)), Some(14));
        assert_eq!(d.linear(BufferIndex::new(5, 0)), None);
        assert_eq!(d.linear(BufferIndex::new(0, 3)), None);
    }

    #[test]
    fn forward_distance_wraps() {
        let d = dims(5, 3);
        let origin = BufferIndex::new(3, 2);
        assert_eq!(d.forward_distance(origin, origin), WorldCoord::new(0, 0));
        assert_eq!(d.forward_distance(origin, BufferIndex::new(4, 2)), WorldCoord::new(1, 0));
        assert_eq!(d.forward_distance(origin, BufferIndex::new(0, 0)), WorldCoord::new(2, 1));
        assert_eq!(d.forward_distance(origin, BufferIndex::new(2, 1)), WorldCoord::new(4, 2));
    }

    #[test]
    fn indices_cover_pool_in_order() {
        let d = dims(3, 2);
        let all: Vec<_> = d.indices().collect();
        assert_eq!(all.len(), d.capacity());
        for (i, index) in all.iter().enumerate() {
            assert_eq!(d.linear(*index), Some(i));
        }
    }
}
