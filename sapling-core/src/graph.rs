//! Node and edge records produced by a generation run.
//!
//! Every optional attribute is an explicit [`Option`], so consumers never
//! infer which attributes are present from the shape of a record.

use core::fmt;
use std::num::NonZeroUsize;

use crate::geometry::Position;

/// Identifier of a generated node.
///
/// Identifiers are assigned `1..=N` in creation order; node `1` is the root.
///
/// # Examples
/// ```
/// use sapling_core::NodeId;
///
/// let id = NodeId::new(3).expect("identifiers start at 1");
/// assert_eq!(id.get(), 3);
/// assert!(NodeId::new(0).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    /// The root of every generated tree.
    pub const ROOT: Self = Self(NonZeroUsize::MIN);

    /// Creates an identifier, returning `None` for zero.
    #[must_use]
    pub const fn new(value: usize) -> Option<Self> {
        match NonZeroUsize::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Identifier of the node stored at zero-based `index`.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A generated node.
///
/// # Examples
/// ```
/// use sapling_core::{Node, NodeId, Position};
///
/// let node = Node::new(NodeId::ROOT, Some(Position::new(4, 2)), None);
/// assert_eq!(node.id().get(), 1);
/// assert_eq!(node.position(), Some(Position::new(4, 2)));
/// assert_eq!(node.weight(), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Node {
    id: NodeId,
    position: Option<Position>,
    weight: Option<u32>,
}

impl Node {
    /// Creates a node record.
    #[must_use]
    pub const fn new(id: NodeId, position: Option<Position>, weight: Option<u32>) -> Self {
        Self {
            id,
            position,
            weight,
        }
    }

    /// Identifier of this node.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Position inside the window, present only for geometric runs.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    /// Weight in `1..=node_weight_max`, present only when node weights were
    /// requested.
    #[must_use]
    pub const fn weight(&self) -> Option<u32> {
        self.weight
    }
}

/// A tree edge stored as a parent pointer.
///
/// `source` is the earlier (parent) node and `target` the later (child) node.
/// The orientation carries no meaning beyond that: generated trees are
/// undirected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    weight: Option<u32>,
}

impl Edge {
    /// Creates an edge from `source` (parent) to `target` (child).
    #[must_use]
    pub const fn new(source: NodeId, target: NodeId, weight: Option<u32>) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The parent node.
    #[must_use]
    pub const fn source(&self) -> NodeId {
        self.source
    }

    /// The child node.
    #[must_use]
    pub const fn target(&self) -> NodeId {
        self.target
    }

    /// Weight in `1..=edge_weight_max`, present only when edge weights were
    /// requested.
    #[must_use]
    pub const fn weight(&self) -> Option<u32> {
        self.weight
    }

    pub(crate) const fn with_weight(self, weight: u32) -> Self {
        Self {
            weight: Some(weight),
            ..self
        }
    }
}

/// Output of one generation run.
///
/// Nodes are ordered by identifier; edges are ordered by their target, so the
/// edge at index `i` attaches node `i + 2`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedTree {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    seed: Option<u64>,
}

impl GeneratedTree {
    pub(crate) const fn new(nodes: Vec<Node>, edges: Vec<Edge>, seed: Option<u64>) -> Self {
        Self { nodes, edges, seed }
    }

    /// Nodes in creation order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges ordered by target identifier; always `nodes().len() - 1` long.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Seed that produced this tree, when the generator owned its source of
    /// randomness.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Consumes the tree and returns its node and edge sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_follow_creation_order() {
        let ids: Vec<usize> = (0..4).map(|index| NodeId::from_index(index).get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(NodeId::from_index(0), NodeId::ROOT);
    }

    #[test]
    fn node_id_display_matches_value() {
        let id = NodeId::new(42).expect("non-zero");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn edge_weight_is_replaced_without_touching_endpoints() {
        let parent = NodeId::ROOT;
        let child = NodeId::from_index(1);
        let edge = Edge::new(parent, child, None).with_weight(7);
        assert_eq!(edge, Edge::new(parent, child, Some(7)));
    }
}
