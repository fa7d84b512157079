//! Carmack-style buffer recycling.
//!
//! The pool always shows a `width x height` rectangle of world cells. When
//! the view moves by `(d_col, d_row)` whole tiles, only the lines of the
//! rectangle that scrolled out need new content: they are handed the lines
//! that scrolled in. Everything else keeps its slot and its cell.
//!
//! The newly exposed area is split into three disjoint pieces so that no slot
//! is touched twice:
//!
//! ```text
//!        retained cols   changed cols
//!       +-------------+-------+
//!       |             |column |  retained rows
//!       |  untouched  | strip |
//!       +-------------+-------+
//!       |  row strip  | corner|  changed rows
//!       +-------------+-------+
//! ```
//!
//! Moving by at least the extent of an axis changes every line on that axis,
//! which turns the plan into a full repaint without a separate code path.
//!
//! The planning functions are pure. Applying the plan to the pool happens in
//! [`TileMap::recycle`](crate::TileMap::recycle).

use std::ops::Range;

use hexscroll_topology::WorldCoord;

use crate::index::{BufferDimensions, BufferIndex};

/// Reassignment of one slot to a new world cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotUpdate {
    pub index: BufferIndex,
    pub world: WorldCoord,
}

/// Buffer state before a recycle, plus the scroll that triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecycleFrame {
    pub dims: BufferDimensions,
    /// Slot showing `world_origin`
    pub buffer_origin: BufferIndex,
    /// World cell at the top-left of the buffered rectangle
    pub world_origin: WorldCoord,
    /// Whole tiles scrolled since the last recycle
    pub offset: WorldCoord,
}

impl RecycleFrame {
    /// Buffer origin once the offset has been applied.
    pub fn next_buffer_origin(&self) -> BufferIndex {
        // Fold the offset first so huge scrolls cannot overflow the sum.
        let step = self.dims.wrap(self.offset.col, self.offset.row);
        self.dims.wrap(
            i64::from(self.buffer_origin.col) + i64::from(step.col),
            i64::from(self.buffer_origin.row) + i64::from(step.row),
        )
    }

    /// World origin once the offset has been applied, saturating at the
    /// ends of `i64`.
    pub fn next_world_origin(&self) -> WorldCoord {
        WorldCoord::new(
            self.world_origin.col.saturating_add(self.offset.col),
            self.world_origin.row.saturating_add(self.offset.row),
        )
    }

    /// Slot that shows `world` after the recycle.
    pub fn index_of(&self, world: WorldCoord) -> BufferIndex {
        let origin = self.next_buffer_origin();
        let next = self.next_world_origin();
        let rel = self
            .dims
            .wrap(world.col.wrapping_sub(next.col), world.row.wrapping_sub(next.row));
        self.dims.wrap(
            i64::from(origin.col) + i64::from(rel.col),
            i64::from(origin.row) + i64::from(rel.row),
        )
    }

    fn columns(&self) -> AxisSplit {
        AxisSplit::new(self.world_origin.col, self.offset.col, i64::from(self.dims.width))
    }

    fn rows(&self) -> AxisSplit {
        AxisSplit::new(self.world_origin.row, self.offset.row, i64::from(self.dims.height))
    }

    fn updates(&self, cols: Range<i64>, rows: Range<i64>) -> Vec<SlotUpdate> {
        let mut out = Vec::with_capacity(range_len(&cols) * range_len(&rows));
        for col in cols {
            for row in rows.clone() {
                let world = WorldCoord::new(col, row);
                out.push(SlotUpdate {
                    index: self.index_of(world),
                    world,
                });
            }
        }
        out
    }
}

/// World lines of the new window along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AxisSplit {
    /// Lines that were not buffered before the scroll
    changed: Range<i64>,
    /// Lines that stay in the buffer
    retained: Range<i64>,
}

impl AxisSplit {
    /// Lines near the ends of `i64` saturate; callers keep origins well
    /// inside [`WorldCoord::LIMIT`] so this only trims absurd frames.
    fn new(origin: i64, offset: i64, extent: i64) -> Self {
        let start = origin.saturating_add(offset);
        let end = start.saturating_add(extent);
        let changed = offset.unsigned_abs().min(extent.unsigned_abs()) as i64;

        if offset >= 0 {
            let split = end.saturating_sub(changed).max(start);
            Self {
                retained: start..split,
                changed: split..end,
            }
        } else {
            let split = start.saturating_add(changed).min(end);
            Self {
                changed: start..split,
                retained: split..end,
            }
        }
    }
}

fn range_len(r: &Range<i64>) -> usize {
    r.end.saturating_sub(r.start).max(0) as usize
}

/// Leading columns, over the rows that did not change.
///
/// `|d_col|` columns wide and `height - |d_row|` rows tall.
pub fn column_strip(frame: &RecycleFrame) -> Vec<SlotUpdate> {
    frame.updates(frame.columns().changed, frame.rows().retained)
}

/// Leading rows, over the columns that did not change.
///
/// `width - |d_col|` columns wide and `|d_row|` rows tall.
pub fn row_strip(frame: &RecycleFrame) -> Vec<SlotUpdate> {
    frame.updates(frame.columns().retained, frame.rows().changed)
}

/// Where the leading columns and leading rows cross.
///
/// Empty unless the scroll is diagonal.
pub fn corner(frame: &RecycleFrame) -> Vec<SlotUpdate> {
    frame.updates(frame.columns().changed, frame.rows().changed)
}

/// Every slot that needs a new cell after `frame.offset`.
pub fn plan(frame: &RecycleFrame) -> Vec<SlotUpdate> {
    let mut updates = column_strip(frame);
    updates.extend(row_strip(frame));
    updates.extend(corner(frame));
    updates
}

/// Outcome of one recycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecycleReport {
    /// Whole tiles scrolled
    pub offset: WorldCoord,
    /// Slots reassigned and redrawn
    pub updated: usize,
    /// Slot updates dropped because the slot could not be found
    pub skipped: usize,
}

impl RecycleReport {
    /// Slot updates the plan asked for.
    pub fn planned(&self) -> usize {
        self.updated + self.skipped
    }
}
