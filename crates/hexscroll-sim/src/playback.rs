//! Drives a scroll controller along a [`ScrollPath`].

use hexscroll_buffer::{RecycleReport, ScrollController, SlotHost};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::path::ScrollPath;

/// Totals for a played-back path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSummary {
    /// Scroll notifications delivered
    pub events: usize,
    /// Notifications that crossed a tile boundary
    pub recycles: usize,
    /// Slots reassigned across all recycles
    pub updated: usize,
    /// Slot updates skipped
    pub skipped: usize,
    /// Largest single recycle
    pub max_updated: usize,
}

impl PlaybackSummary {
    fn record(&mut self, report: Option<RecycleReport>) {
        self.events += 1;
        if let Some(report) = report {
            self.recycles += 1;
            self.updated += report.updated;
            self.skipped += report.skipped;
            self.max_updated = self.max_updated.max(report.updated);
        }
    }
}

/// Step-by-step playback of a scroll path.
pub struct Playback {
    path: ScrollPath,
    cursor: usize,
    summary: PlaybackSummary,
}

impl Playback {
    pub fn new(path: ScrollPath) -> Self {
        Self {
            path,
            cursor: 0,
            summary: PlaybackSummary::default(),
        }
    }

    /// Deliver the next offset. Returns `None` once the path is exhausted.
    pub fn step<H: SlotHost>(
        &mut self,
        controller: &mut ScrollController<H>,
    ) -> Option<Option<RecycleReport>> {
        let offset = *self.path.offsets().get(self.cursor)?;
        self.cursor += 1;

        let report = controller.on_scroll_offset_changed(offset);
        if let Some(r) = &report {
            debug!("Step {}: offset {} recycled {} slots", self.cursor, offset, r.updated);
        }
        self.summary.record(report);
        Some(report)
    }

    /// Deliver every remaining offset.
    pub fn run<H: SlotHost>(&mut self, controller: &mut ScrollController<H>) -> PlaybackSummary {
        while self.step(controller).is_some() {}
        self.summary
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.path.len()
    }

    pub fn summary(&self) -> PlaybackSummary {
        self.summary
    }
}
