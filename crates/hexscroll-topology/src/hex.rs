//! World and pixel coordinate types for a staggered hex grid.
//!
//! World coordinates address cells by column and row. Rows are stacked
//! vertically and every odd row is shifted by half a tile so that the hexes
//! interlock. The grid has no bounds in either direction.

use std::ops::{Add, Neg, Sub};

use crate::zorder::z_order;

/// A cell of the infinite hex grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldCoord {
    /// Horizontal index
    pub col: i64,
    /// Vertical index
    pub row: i64,
}

impl WorldCoord {
    /// Origin of the grid.
    pub const ORIGIN: Self = Self { col: 0, row: 0 };

    /// Largest `|col|` or `|row|` a map will scroll to.
    ///
    /// Keeps differences and sums of two in-range cells, plus a buffer
    /// extent, clear of `i64` overflow.
    pub const LIMIT: i64 = i64::MAX / 4;

    /// Create a new coordinate.
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }

    /// Whether this cell sits on a staggered (odd) row.
    ///
    /// Parity is Euclidean, so row -1 is odd just like row 1.
    #[inline]
    pub const fn is_odd_row(&self) -> bool {
        self.row.rem_euclid(2) == 1
    }

    /// Whether both components lie within [`LIMIT`](Self::LIMIT).
    #[inline]
    pub const fn is_within_limit(&self) -> bool {
        let limit = Self::LIMIT as u64;
        self.col.unsigned_abs() <= limit && self.row.unsigned_abs() <= limit
    }

    /// Component-wise addition, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add(other.col)?,
            row: self.row.checked_add(other.row)?,
        })
    }

    /// Draw order of this cell. See [`z_order`].
    #[inline]
    pub fn z_order(&self) -> i64 {
        z_order(self.col, self.row)
    }

    /// Stable label for the cell, `"col|row"`.
    pub fn key(&self) -> String {
        format!("{}|{}", self.col, self.row)
    }
}

impl Add for WorldCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            col: self.col + other.col,
            row: self.row + other.row,
        }
    }
}

impl Sub for WorldCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            col: self.col - other.col,
            row: self.row - other.row,
        }
    }
}

impl Neg for WorldCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            col: -self.col,
            row: -self.row,
        }
    }
}

impl std::fmt::Display for WorldCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A position in scene space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

impl PixelPos {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl Add for PixelPos {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for PixelPos {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for PixelPos {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl std::fmt::Display for PixelPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        assert_eq!(WorldCoord::ORIGIN, WorldCoord::new(0, 0));
        assert_eq!(PixelPos::ORIGIN, PixelPos::new(0.0, 0.0));
    }

    #[test]
    fn negative_rows_have_euclidean_parity() {
        assert!(WorldCoord::new(0, 1).is_odd_row());
        assert!(WorldCoord::new(0, -1).is_odd_row());
        assert!(WorldCoord::new(0, -3).is_odd_row());
        assert!(!WorldCoord::new(0, -2).is_odd_row());
        assert!(!WorldCoord::new(7, 0).is_odd_row());
    }

    #[test]
    fn arithmetic() {
        let a = WorldCoord::new(3, -2);
        let b = WorldCoord::new(-1, 5);
        assert_eq!(a + b, WorldCoord::new(2, 3));
        assert_eq!(a - b, WorldCoord::new(4, -7));
        assert_eq!(-a, WorldCoord::new(-3, 2));

        let p = PixelPos::new(1.5, -2.0);
        assert_eq!(-p, PixelPos::new(-1.5, 2.0));
        assert_eq!(p + p, PixelPos::new(3.0, -4.0));
    }

    #[test]
    fn limit_and_checked_add() {
        assert!(WorldCoord::new(WorldCoord::LIMIT, -WorldCoord::LIMIT).is_within_limit());
        assert!(!WorldCoord::new(WorldCoord::LIMIT + 1, 0).is_within_limit());
        assert!(!WorldCoord::new(0, i64::MIN).is_within_limit());

        let near_max = WorldCoord::new(i64::MAX - 5, 0);
        assert_eq!(
            near_max.checked_add(WorldCoord::new(5, 1)),
            Some(WorldCoord::new(i64::MAX, 1))
        );
        assert_eq!(near_max.checked_add(WorldCoord::new(6, 0)), None);
    }

    #[test]
    fn key_uses_pipe_separator() {
        assert_eq!(WorldCoord::new(12, -4).key(), "12|-4");
    }

    #[test]
    fn lerp_endpoints() {
        let a = PixelPos::new(0.0, 10.0);
        let b = PixelPos::new(100.0, -10.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), PixelPos::new(50.0, 0.0));
    }
}
