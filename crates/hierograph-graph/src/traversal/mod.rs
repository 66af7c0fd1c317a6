//! Graph traversal algorithms.
//!
//! This module provides the traversal primitive behind every relationship
//! query on [`DirectedGraph`]:
//!
//! - [`BfsTraversal`] - Level-by-level closure traversal with an optional
//!   depth bound and early exit on a target node
//!
//! # Direction
//!
//! - [`Direction::Outgoing`] - Follow edges from tail to head (descendants)
//! - [`Direction::Incoming`] - Follow edges from head to tail (ancestors)
//! - [`Direction::Both`] - Follow edges in both directions
//!
//! # Termination
//!
//! Traversals track a visited *set*, not the current path, so cycles cannot
//! cause non-termination, and they use an explicit queue rather than
//! recursion, so deep hierarchies cannot exhaust the call stack.
//!
//! # Example
//!
//! ```
//! use hierograph_core::NodeId;
//! use hierograph_graph::graph::DirectedGraph;
//! use hierograph_graph::traversal::{BfsTraversal, Direction};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 3).unwrap();
//!
//! let within_one = BfsTraversal::new(NodeId::new(1), Direction::Outgoing)
//!     .with_max_depth(1)
//!     .collect_nodes(&graph);
//! assert_eq!(within_one, vec![NodeId::new(2)]);
//! ```
//!
//! [`DirectedGraph`]: crate::graph::DirectedGraph

mod bfs;

pub use bfs::{BfsResult, BfsTraversal};

use hierograph_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::graph::DirectedGraph;

/// Direction for graph traversal.
///
/// Specifies which edges to follow when traversing from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Follow outgoing edges (tail -> head).
    ///
    /// When traversing from node A, find nodes B where an edge A -> B exists.
    #[default]
    Outgoing,

    /// Follow incoming edges (head <- tail).
    ///
    /// When traversing from node A, find nodes B where an edge B -> A exists.
    Incoming,

    /// Follow edges in both directions.
    Both,
}

impl Direction {
    /// Returns true if this direction includes outgoing edges.
    #[inline]
    pub const fn includes_outgoing(self) -> bool {
        matches!(self, Self::Outgoing | Self::Both)
    }

    /// Returns true if this direction includes incoming edges.
    #[inline]
    pub const fn includes_incoming(self) -> bool {
        matches!(self, Self::Incoming | Self::Both)
    }
}

/// One-hop neighbors of `node`, in edge insertion order.
///
/// Incoming neighbors (edge tails) come before outgoing neighbors (edge
/// heads). The iterator may repeat a node; callers needing a set deduplicate.
pub(crate) fn neighbors(
    graph: &DirectedGraph,
    node: NodeId,
    direction: Direction,
) -> impl Iterator<Item = NodeId> + '_ {
    let index = graph.adjacency();
    let edges = graph.edge_store();

    let incoming: &[_] =
        if direction.includes_incoming() { index.incoming_edge_ids(node) } else { &[] };
    let outgoing: &[_] =
        if direction.includes_outgoing() { index.outgoing_edge_ids(node) } else { &[] };

    incoming
        .iter()
        .filter_map(move |&edge| edges.tail(edge))
        .chain(outgoing.iter().filter_map(move |&edge| edges.head(edge)))
}
