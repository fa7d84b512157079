//! In-memory scene graph acting as the rendering host.

use hexscroll_buffer::{place, Anchor, Placeable, SlotHost, TileAsset};
use hexscroll_topology::PixelPos;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identifier of a node in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// A tile slot node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: NodeId,
    pub anchor: (f64, f64),
    pub position: PixelPos,
    pub z_order: i64,
    pub key: String,
    pub content: Option<TileAsset>,
}

impl SceneNode {
    fn new(id: NodeId) -> Self {
        Self {
            id,
            anchor: (0.0, 0.0),
            position: PixelPos::ORIGIN,
            z_order: 0,
            key: String::new(),
            content: None,
        }
    }
}

impl Placeable for SceneNode {
    fn set_anchor_point(&mut self, x: f64, y: f64) {
        self.anchor = (x, y);
    }

    fn set_position(&mut self, pos: PixelPos) {
        self.position = pos;
    }
}

/// Counts of commands received from the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandStats {
    pub created: usize,
    pub repositioned: usize,
    pub reskinned: usize,
}

/// Flat scene of tile nodes under one canvas.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    scroll_offset: PixelPos,
    stats: CommandStats,
    /// Refuse node creation once this many nodes exist
    node_limit: Option<usize>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene that can hold at most `limit` nodes.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            node_limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0 as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn scroll_offset(&self) -> PixelPos {
        self.scroll_offset
    }

    pub fn stats(&self) -> CommandStats {
        self.stats
    }

    /// Nodes in the order they would be drawn: ascending z, then creation order.
    pub fn draw_order(&self) -> Vec<&SceneNode> {
        let mut order: Vec<_> = self.nodes.iter().collect();
        order.sort_by_key(|n| (n.z_order, n.id));
        order
    }
}

impl SlotHost for SceneGraph {
    type Handle = NodeId;

    fn create_slot(&mut self, pos: PixelPos, z_order: i64, key: &str) -> Option<NodeId> {
        if self.node_limit.is_some_and(|limit| self.nodes.len() >= limit) {
            return None;
        }

        let id = NodeId(self.nodes.len() as u64);
        let mut node = SceneNode::new(id);
        place(&mut node, Anchor::Center, pos);
        node.z_order = z_order;
        node.key = key.to_string();

        self.nodes.push(node);
        self.stats.created += 1;
        Some(id)
    }

    fn reposition_slot(&mut self, handle: &NodeId, pos: PixelPos, z_order: i64, key: &str) {
        let Some(node) = self.node_mut(*handle) else {
            warn!("Reposition of unknown node {:?}", handle);
            return;
        };
        node.set_position(pos);
        node.z_order = z_order;
        node.key = key.to_string();
        self.stats.repositioned += 1;
    }

    fn replace_slot_content(&mut self, handle: &NodeId, tile: &TileAsset) {
        let Some(node) = self.node_mut(*handle) else {
            warn!("Content replacement on unknown node {:?}", handle);
            return;
        };
        node.content = Some(tile.clone());
        self.stats.reskinned += 1;
    }

    fn set_scroll_offset(&mut self, offset: PixelPos) {
        self.scroll_offset = offset;
    }
}
