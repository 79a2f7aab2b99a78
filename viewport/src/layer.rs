//! World layer: the transformable node arena the maze is drawn into.
//!
//! The layer owns every drawable child (floor tiles, walls, the player and
//! the exit marker) together with the single [`ViewportTransform`] applied
//! to all of them. Children are addressed by [`NodeId`], an index into the
//! arena, so clamping and panning iterate by index and mutate in place.
//!
//! Children move independently of the layer transform: panning shifts every
//! child's local position, zooming changes only the transform.

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, Size, ViewportTransform};

/// What a world-layer child depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Walkable cell.
    Floor,
    /// Wall segment between cells.
    Wall,
    /// The player marker.
    Player,
    /// The exit marker.
    Exit,
}

/// A drawable child of the world layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// What the node depicts.
    pub kind: NodeKind,
    /// Position in world-layer local coordinates.
    pub position: Point,
    /// Unscaled size in world-layer units.
    pub size: Size,
}

impl Node {
    #[must_use]
    pub fn new(kind: NodeKind, position: Point, size: Size) -> Self {
        Self { kind, position, size }
    }
}

/// Index of a child in the [`WorldLayer`] arena.
///
/// Ids are invalidated by [`WorldLayer::replace`] and [`WorldLayer::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Ordered collection of world-layer children plus the layer transform.
#[derive(Debug, Clone, Default)]
pub struct WorldLayer {
    nodes: Vec<Node>,
    transform: ViewportTransform,
    hidden: bool,
}

impl WorldLayer {
    /// Create an empty, visible layer with the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child, returning its id.
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Move a child to a new local position. Returns false if the id is stale.
    pub fn set_position(&mut self, id: NodeId, position: Point) -> bool {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return false;
        };
        node.position = position;
        true
    }

    /// Replace every child with a fresh set.
    pub fn replace(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
    }

    /// Remove every child. The transform is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Shift every child by `delta` in local space.
    pub fn offset_all(&mut self, delta: Point) {
        for node in &mut self.nodes {
            node.position = node.position + delta;
        }
    }

    /// Children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Ids of all children in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// First child of the given kind, if any.
    #[must_use]
    pub fn find(&self, kind: NodeKind) -> Option<(NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .find(|(_, node)| node.kind == kind)
            .map(|(index, node)| (NodeId(index), node))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn transform(&self) -> &ViewportTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut ViewportTransform {
        &mut self.transform
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}
