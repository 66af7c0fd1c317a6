//! Tree height analysis.
//!
//! The height of a rooted tree is the number of edges on the longest
//! downward path from the root to a sink. The walk carries its current path
//! and fails as soon as a successor is already on it, so a cycle reachable
//! from the root is always reported rather than looped over.
//!
//! # Complexity
//!
//! Nothing is memoized per node: a node shared by several paths is walked
//! once per path. This is exponential in the worst case on heavily shared
//! DAGs and linear on trees, which is what the analysis is meant for.
//!
//! # Example
//!
//! ```
//! use hierograph_graph::analytics::{RootPolicy, TreeHeight, TreeHeightConfig};
//! use hierograph_graph::graph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 3).unwrap();
//! graph.add_edge(10, 11).unwrap();
//!
//! // Two roots: the default policy walks the first one.
//! let result = TreeHeight::compute(&graph, &TreeHeightConfig::default()).unwrap();
//! assert_eq!(result.height, 2);
//! assert_eq!(result.root_count, 2);
//!
//! let strict = TreeHeightConfig::default().with_root_policy(RootPolicy::RequireSingleSource);
//! assert!(TreeHeight::compute(&graph, &strict).is_err());
//! ```

use std::collections::{HashMap, HashSet};

use hierograph_core::NodeId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::graph::DirectedGraph;

/// How the root of the walk is chosen among the graph's sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RootPolicy {
    /// Walk the first source in node insertion order; other sources are
    /// ignored. Suits forests such as a classification missing its single
    /// top-level node.
    #[default]
    FirstSource,

    /// Fail with [`NotATreeError::MultipleRoots`] unless exactly one source
    /// exists.
    RequireSingleSource,
}

/// Configuration for the tree height analysis.
#[derive(Debug, Clone, Default)]
pub struct TreeHeightConfig {
    /// Root selection.
    /// Default: `FirstSource`
    pub root_policy: RootPolicy,
}

impl TreeHeightConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root selection policy.
    pub const fn with_root_policy(mut self, policy: RootPolicy) -> Self {
        self.root_policy = policy;
        self
    }
}

/// The graph is not shaped like a rooted tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotATreeError {
    /// No node has in-degree 0 and out-degree > 0, and the graph has no
    /// edges at all.
    #[error("not a tree: no root")]
    NoRoot,

    /// More than one source exists and the policy requires a single one.
    #[error("not a tree: multiple roots {}", format_nodes(.roots))]
    MultipleRoots {
        /// Every source, in node insertion order.
        roots: Vec<NodeId>,
    },

    /// The walk reached a node already on its current path, or the graph
    /// has edges but no source, which forces a cycle.
    #[error("not a tree: cycle detected, path={}", format_nodes(.path))]
    CycleDetected {
        /// The path from the root, ending with the revisited node.
        path: Vec<NodeId>,
    },
}

impl NotATreeError {
    /// Returns true if this is a cycle failure.
    #[must_use]
    pub const fn is_cycle(&self) -> bool {
        matches!(self, Self::CycleDetected { .. })
    }

    /// The offending path, for cycle failures.
    #[must_use]
    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            Self::CycleDetected { path } => Some(path),
            _ => None,
        }
    }
}

fn format_nodes(nodes: &[NodeId]) -> String {
    let parts: Vec<String> = nodes.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Result of a tree height computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeHeightResult {
    /// The root that was walked.
    pub root: NodeId,
    /// Edges on the longest root-to-sink path.
    pub height: usize,
    /// Number of sources in the graph.
    pub root_count: usize,
}

/// One node on the walk's current path.
struct Frame {
    children: Vec<NodeId>,
    next_child: usize,
    /// Longest root-to-sink edge count found below this node so far.
    longest: usize,
}

/// Tree height algorithm implementation.
pub struct TreeHeight;

impl TreeHeight {
    /// Compute the height of the tree rooted at the selected source.
    ///
    /// # Errors
    ///
    /// - [`NotATreeError::NoRoot`] if the graph has no edges, hence no source
    /// - [`NotATreeError::MultipleRoots`] under
    ///   [`RootPolicy::RequireSingleSource`] when several sources exist
    /// - [`NotATreeError::CycleDetected`] if the walk meets a node already on
    ///   its current path (this aborts the whole computation), or if the
    ///   graph has edges but no source
    pub fn compute(
        graph: &DirectedGraph,
        config: &TreeHeightConfig,
    ) -> Result<TreeHeightResult, NotATreeError> {
        let roots = graph.get_sources();
        let Some(&root) = roots.first() else {
            if let Some(path) = Self::rootless_cycle(graph) {
                warn!(path = %format_nodes(&path), "tree height: no root, cycle detected");
                return Err(NotATreeError::CycleDetected { path });
            }
            warn!(nodes = graph.count_nodes(), "tree height: graph has no root");
            return Err(NotATreeError::NoRoot);
        };
        if config.root_policy == RootPolicy::RequireSingleSource && roots.len() > 1 {
            warn!(roots = roots.len(), "tree height: multiple roots");
            return Err(NotATreeError::MultipleRoots { roots });
        }
        debug!(root = %root, roots = roots.len(), "tree height: walking root");

        let height = Self::longest_path(graph, root)?;
        debug!(root = %root, height, "tree height computed");
        Ok(TreeHeightResult { root, height, root_count: roots.len() })
    }

    /// Find a cycle in a graph that has edges but no source.
    ///
    /// Every tail then has a predecessor, so walking predecessors from the
    /// first node with an outgoing edge must revisit a node. The cycle is
    /// returned in edge direction, starting and ending with that node.
    fn rootless_cycle(graph: &DirectedGraph) -> Option<Vec<NodeId>> {
        let start = graph.get_nodes().iter().copied().find(|&n| graph.get_out_degree(n) > 0)?;

        let mut walked: Vec<NodeId> = Vec::new();
        let mut positions: HashMap<NodeId, usize> = HashMap::new();
        let mut current = start;
        loop {
            if let Some(&at) = positions.get(&current) {
                let mut cycle = walked.split_off(at);
                cycle.push(current);
                cycle.reverse();
                return Some(cycle);
            }
            positions.insert(current, walked.len());
            walked.push(current);
            current = graph.get_predecessors(current).first().copied()?;
        }
    }

    /// Depth-first walk with an explicit frame stack.
    ///
    /// `path` mirrors the stack and `on_path` gives O(1) membership tests.
    /// Children are explored in out-edge insertion order, and each child is
    /// checked against the path before it is entered.
    fn longest_path(graph: &DirectedGraph, root: NodeId) -> Result<usize, NotATreeError> {
        let mut path = vec![root];
        let mut on_path: HashSet<NodeId> = HashSet::from([root]);
        let mut stack =
            vec![Frame { children: graph.get_successors(root), next_child: 0, longest: 0 }];

        loop {
            let Some(frame) = stack.last_mut() else {
                return Ok(0);
            };

            if let Some(&child) = frame.children.get(frame.next_child) {
                frame.next_child += 1;

                if on_path.contains(&child) {
                    path.push(child);
                    warn!(path = %format_nodes(&path), "tree height: cycle detected");
                    return Err(NotATreeError::CycleDetected { path });
                }

                if graph.is_sink(child) {
                    // Edges from the root to `child`.
                    frame.longest = frame.longest.max(path.len());
                    continue;
                }

                path.push(child);
                on_path.insert(child);
                stack.push(Frame {
                    children: graph.get_successors(child),
                    next_child: 0,
                    longest: 0,
                });
                continue;
            }

            let longest = frame.longest;
            stack.pop();
            if let Some(node) = path.pop() {
                on_path.remove(&node);
            }
            match stack.last_mut() {
                Some(parent) => parent.longest = parent.longest.max(longest),
                None => return Ok(longest),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    fn graph_of(edges: &[(i64, i64)]) -> DirectedGraph {
        let mut graph = DirectedGraph::new();
        for &(tail, head) in edges {
            graph.add_edge(tail, head).unwrap();
        }
        graph
    }

    #[test]
    fn chain_height() {
        let graph = graph_of(&[(1, 2), (2, 3)]);
        let result = TreeHeight::compute(&graph, &TreeHeightConfig::new()).unwrap();
        assert_eq!(result, TreeHeightResult { root: n(1), height: 2, root_count: 1 });
    }

    #[test]
    fn longest_branch_wins() {
        let graph = graph_of(&[(1, 2), (1, 3), (3, 4), (4, 5), (2, 6)]);
        assert_eq!(graph.calc_height(), Ok(3));
    }

    #[test]
    fn shared_descendant_is_walked_per_path() {
        // Diamond: 1 -> 2 -> 4, 1 -> 3 -> 4, 4 -> 5
        let graph = graph_of(&[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]);
        assert_eq!(graph.calc_height(), Ok(3));
    }

    #[test]
    fn edgeless_graph_has_no_root() {
        let mut graph = DirectedGraph::new();
        graph.add_node(1).unwrap();
        assert_eq!(graph.calc_height(), Err(NotATreeError::NoRoot));
    }

    #[test]
    fn two_cycle_without_source_reports_the_cycle() {
        let graph = graph_of(&[(1, 2), (2, 1)]);
        let err = graph.calc_height().unwrap_err();
        assert_eq!(err, NotATreeError::CycleDetected { path: vec![n(1), n(2), n(1)] });
    }

    #[test]
    fn rootless_cycle_is_reported_in_edge_direction() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 1), (3, 4)]);
        let err = graph.calc_height().unwrap_err();
        assert_eq!(err.path(), Some(&[n(1), n(2), n(3), n(1)][..]));
    }

    #[test]
    fn rootless_cycle_upstream_of_first_tail() {
        // 10 -> 20 is fed by the cycle 30 <-> 31 through 30 -> 10.
        let graph = graph_of(&[(10, 20), (30, 10), (30, 31), (31, 30)]);
        let err = graph.calc_height().unwrap_err();
        assert_eq!(err.path(), Some(&[n(30), n(31), n(30)][..]));
    }

    #[test]
    fn cycle_below_root_is_detected() {
        let graph = graph_of(&[(0, 1), (1, 2), (2, 1)]);
        let err = graph.calc_height().unwrap_err();
        assert!(err.is_cycle());
        assert_eq!(err.path(), Some(&[n(0), n(1), n(2), n(1)][..]));
        assert_eq!(err.to_string(), "not a tree: cycle detected, path=[0, 1, 2, 1]");
    }

    #[test]
    fn self_loop_below_root_is_detected() {
        let graph = graph_of(&[(0, 1), (1, 1), (1, 2)]);
        let err = graph.calc_height().unwrap_err();
        assert_eq!(err, NotATreeError::CycleDetected { path: vec![n(0), n(1), n(1)] });
    }

    #[test]
    fn first_source_policy_walks_first_root_only() {
        let graph = graph_of(&[(10, 11), (1, 2), (2, 3), (3, 4)]);
        let result = TreeHeight::compute(&graph, &TreeHeightConfig::default()).unwrap();
        assert_eq!(result.root, n(10));
        assert_eq!(result.height, 1);
        assert_eq!(result.root_count, 2);
    }

    #[test]
    fn single_source_policy_reports_all_roots() {
        let graph = graph_of(&[(10, 11), (1, 2)]);
        let config = TreeHeightConfig::new().with_root_policy(RootPolicy::RequireSingleSource);
        let err = TreeHeight::compute(&graph, &config).unwrap_err();
        assert_eq!(err, NotATreeError::MultipleRoots { roots: vec![n(10), n(1)] });
        assert_eq!(err.to_string(), "not a tree: multiple roots [10, 1]");
        assert_eq!(err.path(), None);
    }

    #[test]
    fn deep_chain_does_not_overflow_the_stack() {
        let mut graph = DirectedGraph::new();
        for i in 0..50_000 {
            graph.add_edge(i, i + 1).unwrap();
        }
        assert_eq!(graph.calc_height(), Ok(50_000));
    }
}
