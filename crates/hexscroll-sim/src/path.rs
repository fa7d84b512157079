//! Scripted scroll input.

use hexscroll_topology::PixelPos;
use serde::{Deserialize, Serialize};

/// Sequence of viewport content offsets, in the order a scroll view would
/// report them.
///
/// Content offsets point the other way from world positions: panning towards
/// `+x` makes the offset more negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollPath {
    offsets: Vec<PixelPos>,
}

impl ScrollPath {
    /// Use raw content offsets as reported by the host.
    pub fn from_offsets(offsets: Vec<PixelPos>) -> Self {
        Self { offsets }
    }

    /// Pan in a straight line between two world positions.
    ///
    /// Yields `steps` offsets after the start, ending exactly at `to`.
    pub fn pan(from: PixelPos, to: PixelPos, steps: usize) -> Self {
        let offsets = (1..=steps)
            .map(|i| -from.lerp(to, i as f64 / steps as f64))
            .collect();
        Self { offsets }
    }

    /// Append another path.
    pub fn then(mut self, other: ScrollPath) -> Self {
        self.offsets.extend(other.offsets);
        self
    }

    pub fn offsets(&self) -> &[PixelPos] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// World position the path ends at, if it has any steps.
    pub fn destination(&self) -> Option<PixelPos> {
        self.offsets.last().map(|&offset| -offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_ends_at_target() {
        let path = ScrollPath::pan(PixelPos::new(0.0, 0.0), PixelPos::new(100.0, 50.0), 4);
        assert_eq!(path.len(), 4);
        assert_eq!(path.offsets()[0], PixelPos::new(-25.0, -12.5));
        assert_eq!(path.destination(), Some(PixelPos::new(100.0, 50.0)));
    }

    #[test]
    fn zero_steps_is_empty() {
        let path = ScrollPath::pan(PixelPos::ORIGIN, PixelPos::new(1.0, 1.0), 0);
        assert!(path.is_empty());
        assert_eq!(path.destination(), None);
    }

    #[test]
    fn paths_chain() {
        let there = ScrollPath::pan(PixelPos::ORIGIN, PixelPos::new(10.0, 0.0), 2);
        let back = ScrollPath::pan(PixelPos::new(10.0, 0.0), PixelPos::ORIGIN, 2);
        let path = there.then(back);
        assert_eq!(path.len(), 4);
        assert_eq!(path.destination(), Some(PixelPos::ORIGIN));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pan_offsets_are_negated_positions(
                x0 in 0.0f64..5000.0, y0 in 0.0f64..5000.0,
                x1 in 0.0f64..5000.0, y1 in 0.0f64..5000.0,
                steps in 1usize..64,
            ) {
                let from = PixelPos::new(x0, y0);
                let to = PixelPos::new(x1, y1);
                let path = ScrollPath::pan(from, to, steps);

                prop_assert_eq!(path.len(), steps);
                for offset in path.offsets() {
                    let pos = -*offset;
                    prop_assert!(pos.x >= x0.min(x1) - 1e-9 && pos.x <= x0.max(x1) + 1e-9);
                    prop_assert!(pos.y >= y0.min(y1) - 1e-9 && pos.y <= y0.max(y1) + 1e-9);
                }
            }
        }
    }
}
