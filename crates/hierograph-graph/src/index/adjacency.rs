//! Adjacency list index for graph traversal.

use std::collections::{HashMap, HashSet};

use hierograph_core::{EdgeId, NodeId};

use crate::traversal::Direction;

/// Adjacency list index for efficient neighbor lookups.
///
/// `AdjacencyIndex` keeps, for every node with at least one edge, the ids of
/// its outgoing and incoming edges. It supports:
///
/// - Getting all outgoing edges from a node
/// - Getting all incoming edges to a node
/// - Counting edges without allocating
/// - Collecting the duplicate-free union of edges over a node set
///
/// Nodes without edges have no entry; lookups for them yield empty slices.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    outgoing: HashMap<NodeId, Vec<EdgeId>>,
    incoming: HashMap<NodeId, Vec<EdgeId>>,
}

impl AdjacencyIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a new edge.
    ///
    /// A self-loop is recorded in both lists of the same node.
    pub fn insert(&mut self, edge: EdgeId, tail: NodeId, head: NodeId) {
        self.outgoing.entry(tail).or_default().push(edge);
        self.incoming.entry(head).or_default().push(edge);
    }

    /// Get all outgoing edge ids of a node, in insertion order.
    #[must_use]
    pub fn outgoing_edge_ids(&self, tail: NodeId) -> &[EdgeId] {
        self.outgoing.get(&tail).map_or(&[], Vec::as_slice)
    }

    /// Get all incoming edge ids of a node, in insertion order.
    #[must_use]
    pub fn incoming_edge_ids(&self, head: NodeId) -> &[EdgeId] {
        self.incoming.get(&head).map_or(&[], Vec::as_slice)
    }

    /// Count outgoing edges from a node.
    #[must_use]
    pub fn count_outgoing(&self, tail: NodeId) -> usize {
        self.outgoing_edge_ids(tail).len()
    }

    /// Count incoming edges to a node.
    #[must_use]
    pub fn count_incoming(&self, head: NodeId) -> usize {
        self.incoming_edge_ids(head).len()
    }

    /// Collect the duplicate-free union of edges over a set of nodes.
    ///
    /// Order is deterministic: for [`Direction::Both`] all incoming edges of
    /// the node set come before all outgoing edges; within one direction
    /// nodes are visited in argument order and each node's edges in
    /// insertion order.
    #[must_use]
    pub fn collect_edge_ids(&self, nodes: &[NodeId], direction: Direction) -> Vec<EdgeId> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();

        let mut push_all = |lists: &HashMap<NodeId, Vec<EdgeId>>| {
            for node in nodes {
                for &edge in lists.get(node).map_or(&[][..], Vec::as_slice) {
                    if seen.insert(edge) {
                        edges.push(edge);
                    }
                }
            }
        };

        if direction.includes_incoming() {
            push_all(&self.incoming);
        }
        if direction.includes_outgoing() {
            push_all(&self.outgoing);
        }
        edges
    }
}
