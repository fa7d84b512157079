//! Seams between the tile buffer and the rendering host.
//!
//! The buffer never creates sprites or scene nodes itself. It asks a
//! [`SlotHost`] to create a slot once per pool entry and afterwards only to
//! move it and swap its content. Which graphic a cell shows is decided by a
//! [`TileSource`].

use hexscroll_topology::{PixelPos, WorldCoord};
use serde::{Deserialize, Serialize};

/// Reference to a tile graphic understood by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileAsset(pub String);

impl TileAsset {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TileAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rendering host that owns the visual side of every tile slot.
pub trait SlotHost {
    /// Opaque reference to a slot living in the host's scene.
    type Handle;

    /// Create a slot centred on `pos` at depth `z_order`.
    ///
    /// Returns `None` when the host cannot create the slot; the pool keeps a
    /// hole at that index and reports it as missing afterwards.
    fn create_slot(&mut self, pos: PixelPos, z_order: i64, key: &str) -> Option<Self::Handle>;

    /// Move an existing slot and update its depth and label.
    fn reposition_slot(&mut self, handle: &Self::Handle, pos: PixelPos, z_order: i64, key: &str);

    /// Replace whatever graphic the slot shows.
    fn replace_slot_content(&mut self, handle: &Self::Handle, tile: &TileAsset);

    /// Set the viewport's content offset. Called once, after the pool is built.
    fn set_scroll_offset(&mut self, offset: PixelPos);
}

/// Chooses the graphic for a world cell.
pub trait TileSource {
    fn tile_for(&self, coord: WorldCoord) -> TileAsset;
}

impl<F> TileSource for F
where
    F: Fn(WorldCoord) -> TileAsset,
{
    fn tile_for(&self, coord: WorldCoord) -> TileAsset {
        self(coord)
    }
}

/// The same graphic everywhere.
#[derive(Debug, Clone)]
pub struct UniformTiles(pub TileAsset);

impl UniformTiles {
    pub fn new(name: impl Into<String>) -> Self {
        Self(TileAsset::new(name))
    }
}

impl TileSource for UniformTiles {
    fn tile_for(&self, _coord: WorldCoord) -> TileAsset {
        self.0.clone()
    }
}

/// Anchor positions laid out like a numeric keypad.
///
/// `7 8 9` is the top edge, `1 2 3` the bottom edge, `5` the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    BottomLeft = 1,
    Bottom = 2,
    BottomRight = 3,
    Left = 4,
    Center = 5,
    Right = 6,
    TopLeft = 7,
    Top = 8,
    TopRight = 9,
}

impl Anchor {
    /// Look up an anchor by its keypad digit.
    pub fn from_keypad(digit: u8) -> Option<Self> {
        Some(match digit {
            1 => Self::BottomLeft,
            2 => Self::Bottom,
            3 => Self::BottomRight,
            4 => Self::Left,
            5 => Self::Center,
            6 => Self::Right,
            7 => Self::TopLeft,
            8 => Self::Top,
            9 => Self::TopRight,
            _ => return None,
        })
    }

    /// Normalized anchor point, `(0, 0)` bottom-left to `(1, 1)` top-right.
    pub const fn point(self) -> (f64, f64) {
        match self {
            Self::BottomLeft => (0.0, 0.0),
            Self::Bottom => (0.5, 0.0),
            Self::BottomRight => (1.0, 0.0),
            Self::Left => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::Right => (1.0, 0.5),
            Self::TopLeft => (0.0, 1.0),
            Self::Top => (0.5, 1.0),
            Self::TopRight => (1.0, 1.0),
        }
    }
}

/// Anything with an anchor point and a position.
pub trait Placeable {
    fn set_anchor_point(&mut self, x: f64, y: f64);
    fn set_position(&mut self, pos: PixelPos);
}

/// Anchor `node` and move it to `pos`.
pub fn place<N: Placeable + ?Sized>(node: &mut N, anchor: Anchor, pos: PixelPos) -> &mut N {
    let (x, y) = anchor.point();
    node.set_anchor_point(x, y);
    node.set_position(pos);
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Node {
        anchor: (f64, f64),
        pos: PixelPos,
    }

    impl Placeable for Node {
        fn set_anchor_point(&mut self, x: f64, y: f64) {
            self.anchor = (x, y);
        }

        fn set_position(&mut self, pos: PixelPos) {
            self.pos = pos;
        }
    }

    #[test]
    fn keypad_digits_round_trip() {
        for digit in 1..=9u8 {
            let anchor = Anchor::from_keypad(digit).unwrap();
            assert_eq!(anchor as u8, digit);
        }
        assert_eq!(Anchor::from_keypad(0), None);
        assert_eq!(Anchor::from_keypad(10), None);
    }

    #[test]
    fn place_sets_anchor_and_position() {
        let mut node = Node::default();
        place(&mut node, Anchor::TopRight, PixelPos::new(3.0, 4.0));
        assert_eq!(node.anchor, (1.0, 1.0));
        assert_eq!(node.pos, PixelPos::new(3.0, 4.0));

        place(&mut node, Anchor::Center, PixelPos::ORIGIN).pos.x += 1.0;
        assert_eq!(node.anchor, (0.5, 0.5));
        assert_eq!(node.pos, PixelPos::new(1.0, 0.0));
    }

    #[test]
    fn closures_are_tile_sources() {
        let checker = |c: WorldCoord| {
            if (c.col + c.row).rem_euclid(2) == 0 {
                TileAsset::new("light")
            } else {
                TileAsset::new("dark")
            }
        };
        assert_eq!(checker.tile_for(WorldCoord::new(0, 0)).as_str(), "light");
        assert_eq!(checker.tile_for(WorldCoord::new(-1, 0)).as_str(), "dark");
        assert_eq!(UniformTiles::new("grass").tile_for(WorldCoord::new(9, 9)).as_str(), "grass");
    }
}
