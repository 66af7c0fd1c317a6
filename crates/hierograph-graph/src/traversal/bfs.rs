//! Breadth-first closure traversal.
//!
//! This module provides a BFS traversal that visits nodes level by level,
//! starting from a given node. It supports:
//!
//! - Configurable maximum depth
//! - Direction control (outgoing, incoming, both)
//! - Early exit once a target node is reached
//!
//! The start node is *not* part of the result unless the traversal reaches
//! it again through a cycle (a self-loop included).
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
//! let results = BfsTraversal::new(NodeId::new(3), Direction::Incoming).execute(&graph);
//! let depths: Vec<_> = results.iter().map(|r| (r.node.as_u64(), r.depth)).collect();
//! assert_eq!(depths, vec![(2, 1), (1, 2)]);
//! ```

use std::collections::{HashSet, VecDeque};

use hierograph_core::NodeId;

use super::{neighbors, Direction};
use crate::graph::DirectedGraph;

/// Result of a BFS traversal for a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsResult {
    /// The visited node.
    pub node: NodeId,
    /// The number of edge hops at which this node was first discovered.
    pub depth: usize,
}

impl BfsResult {
    /// Create a new BFS result.
    #[inline]
    pub const fn new(node: NodeId, depth: usize) -> Self {
        Self { node, depth }
    }
}

/// BFS traversal configuration and executor.
///
/// Performs a breadth-first search starting from a given node, visiting all
/// reachable nodes level by level.
#[derive(Debug, Clone)]
pub struct BfsTraversal {
    /// Starting node for traversal.
    start: NodeId,
    /// Direction to traverse.
    direction: Direction,
    /// Maximum number of edge hops.
    max_depth: Option<usize>,
}

impl BfsTraversal {
    /// Create a new BFS traversal starting from the given node.
    pub const fn new(start: NodeId, direction: Direction) -> Self {
        Self { start, direction, max_depth: None }
    }

    /// Set the maximum depth to traverse.
    ///
    /// Nodes more than `max_depth` hops away will not be visited; a depth of
    /// 0 visits nothing.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Execute the traversal.
    ///
    /// Returns every reached node once, in discovery order, with its depth.
    pub fn execute(&self, graph: &DirectedGraph) -> Vec<BfsResult> {
        let mut results = Vec::new();
        self.walk(graph, |result| {
            results.push(result);
            true
        });
        results
    }

    /// Execute the traversal and return only the reached nodes.
    pub fn collect_nodes(&self, graph: &DirectedGraph) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        self.walk(graph, |result| {
            nodes.push(result.node);
            true
        });
        nodes
    }

    /// Returns true if `target` is reachable, stopping as soon as it is found.
    pub fn reaches(&self, graph: &DirectedGraph, target: NodeId) -> bool {
        let mut found = false;
        self.walk(graph, |result| {
            found = result.node == target;
            !found
        });
        found
    }

    /// Core loop. `visit` returns `false` to stop the traversal.
    fn walk<F>(&self, graph: &DirectedGraph, mut visit: F)
    where
        F: FnMut(BfsResult) -> bool,
    {
        if self.max_depth == Some(0) || !graph.contains_node(self.start) {
            return;
        }

        // The start is not pre-marked visited, so a cycle back to it
        // reports it as reached.
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
        queue.push_back((self.start, 0));

        while let Some((current, depth)) = queue.pop_front() {
            let should_expand = self.max_depth.map_or(true, |max| depth < max);
            if !should_expand {
                continue;
            }

            for neighbor in neighbors(graph, current, self.direction) {
                if !visited.insert(neighbor) {
                    continue;
                }
                let next_depth = depth + 1;
                if !visit(BfsResult::new(neighbor, next_depth)) {
                    return;
                }
                // Already expanded as the root of the walk.
                if neighbor != self.start {
                    queue.push_back((neighbor, next_depth));
                }
            }
        }
    }
}
