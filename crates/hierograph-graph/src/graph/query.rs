//! Relationship queries: transitive closures, roles and subgraphs.

use hierograph_core::NodeId;
use tracing::debug;

use super::DirectedGraph;
use crate::analytics::{NotATreeError, TreeHeight, TreeHeightConfig};
use crate::traversal::{BfsTraversal, Direction};

impl DirectedGraph {
    /// All nodes from which `node` is reachable, in breadth-first order.
    ///
    /// `node` itself is included only if it lies on a cycle (a self-loop
    /// included).
    #[must_use]
    pub fn get_ancestors(&self, node: NodeId) -> Vec<NodeId> {
        BfsTraversal::new(node, Direction::Incoming).collect_nodes(self)
    }

    /// All nodes reachable from `node`, in breadth-first order.
    ///
    /// `node` itself is included only if it lies on a cycle.
    #[must_use]
    pub fn get_descendants(&self, node: NodeId) -> Vec<NodeId> {
        BfsTraversal::new(node, Direction::Outgoing).collect_nodes(self)
    }

    /// Nodes reachable from `node` in at most `max_depth` edge hops.
    ///
    /// A depth of 1 yields exactly [`Self::get_successors`]; 0 yields nothing.
    #[must_use]
    pub fn get_descendants_within(&self, node: NodeId, max_depth: usize) -> Vec<NodeId> {
        BfsTraversal::new(node, Direction::Outgoing).with_max_depth(max_depth).collect_nodes(self)
    }

    /// Returns true if `descendant` is reachable from `ancestor`.
    #[must_use]
    pub fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        BfsTraversal::new(ancestor, Direction::Outgoing).reaches(self, descendant)
    }

    /// Returns true if `descendant` is reachable from `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.is_ancestor_of(ancestor, descendant)
    }

    /// A source has no incoming edge and at least one outgoing edge.
    #[must_use]
    pub fn is_source(&self, node: NodeId) -> bool {
        self.get_in_degree(node) == 0 && self.get_out_degree(node) > 0
    }

    /// A sink has no outgoing edge and at least one incoming edge.
    #[must_use]
    pub fn is_sink(&self, node: NodeId) -> bool {
        self.get_in_degree(node) > 0 && self.get_out_degree(node) == 0
    }

    /// All sources, in node insertion order. Isolated nodes are excluded.
    #[must_use]
    pub fn get_sources(&self) -> Vec<NodeId> {
        self.get_nodes().iter().copied().filter(|&n| self.is_source(n)).collect()
    }

    /// All sinks, in node insertion order. Isolated nodes are excluded.
    #[must_use]
    pub fn get_sinks(&self) -> Vec<NodeId> {
        self.get_nodes().iter().copied().filter(|&n| self.is_sink(n)).collect()
    }

    /// Induce the subgraph on `nodes`.
    ///
    /// The result is an independent graph holding exactly the given nodes (in
    /// argument order, duplicates ignored) and exactly the edges of `self`
    /// whose tail and head are both among them. Edge ids, node metadata, edge
    /// labels, the graph label and the configuration are copied. Nodes that
    /// are not part of `self` are kept as isolated nodes.
    #[must_use]
    pub fn calc_subgraph(&self, nodes: &[NodeId]) -> DirectedGraph {
        let mut subgraph = DirectedGraph::with_config(self.config().clone());
        subgraph.label = self.label.clone();

        for &node in nodes {
            subgraph.nodes.insert_with_metadata(node, self.nodes.metadata(node));
        }

        for &edge in self.edges.ids() {
            let Some((tail, head)) = self.edges.endpoints(edge) else {
                continue;
            };
            if !(subgraph.contains_node(tail) && subgraph.contains_node(head)) {
                continue;
            }
            if subgraph.edges.insert_with_id(edge, tail, head, self.edges.label(edge)) {
                subgraph.adjacency.insert(edge, tail, head);
            }
        }

        debug!(
            nodes = subgraph.count_nodes(),
            edges = subgraph.count_edges(),
            source_edges = self.count_edges(),
            "induced subgraph"
        );
        subgraph
    }

    /// Height of the tree rooted at the first source: the number of edges on
    /// the longest path from that root to a sink.
    ///
    /// Forests are tolerated; only the first source in node insertion order
    /// is walked. Use [`TreeHeight::compute`] to choose a different root
    /// policy or to learn which root was walked.
    ///
    /// # Errors
    ///
    /// - [`NotATreeError::NoRoot`] if the graph has no edges, hence no source
    /// - [`NotATreeError::CycleDetected`] if the walk meets a node already on
    ///   its current path, or if the graph has edges but no source
    pub fn calc_height(&self) -> Result<usize, NotATreeError> {
        TreeHeight::compute(self, &TreeHeightConfig::default()).map(|result| result.height)
    }
}
