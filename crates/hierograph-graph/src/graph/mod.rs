//! The directed graph.
//!
//! [`DirectedGraph`] composes the node store, the edge store and the
//! adjacency index into the public graph API. This file holds construction,
//! mutation and one-hop lookups; transitive queries, role queries and
//! subgraph induction live in `query`.
//!
//! # Identifiers at the boundary
//!
//! Node ids are assigned by callers, typically loaders mapping external
//! vocabulary accessions to integers, so the two mutations that accept new
//! ids ([`DirectedGraph::add_node`], [`DirectedGraph::add_edge`]) take raw
//! `i64` values and reject negative ones. Everything else takes a validated
//! [`NodeId`].
//!
//! # Absent values
//!
//! Lookups never fail: an unknown node or edge yields `None`, an empty
//! vector, or a degree of 0. Only mutations referencing malformed input
//! return [`GraphError`].
//!
//! # Concurrency
//!
//! Mutation requires `&mut self` and queries take `&self`, so a graph is
//! built by a single writer and may then be shared read-only (it is
//! `Send + Sync`).

mod config;
mod query;

pub use config::{EndpointPolicy, GraphConfig};

use std::collections::HashSet;

use hierograph_core::{EdgeId, Metadata, NodeId};
use tracing::trace;

use crate::index::AdjacencyIndex;
use crate::store::{EdgeStore, GraphError, GraphResult, NodeStore};
use crate::traversal::{self, Direction};

/// An in-memory directed graph over integer node and edge ids.
///
/// Simple graph: at most one edge per ordered `(tail, head)` pair. Self-loops
/// are allowed. Nothing is ever removed; metadata and labels may be
/// overwritten.
///
/// # Example
///
/// ```
/// use hierograph_core::NodeId;
/// use hierograph_graph::graph::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(1, 2)?;
/// graph.add_edge(1, 3)?;
/// graph.add_edge(2, 3)?;
/// graph.add_node_metadata(NodeId::new(3), "accession", "EC 1.1.1.1")?;
///
/// let leaf = graph.get_node_from_metadata("EC 1.1.1.1").expect("tagged node");
/// assert_eq!(graph.get_ancestors(leaf), vec![NodeId::new(1), NodeId::new(2)]);
/// assert!(graph.is_ancestor_of(NodeId::new(1), leaf));
/// # Ok::<(), hierograph_graph::store::GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    label: Option<String>,
    config: GraphConfig,
    nodes: NodeStore,
    edges: EdgeStore,
    adjacency: AdjacencyIndex,
}

impl DirectedGraph {
    /// Create an empty graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given configuration.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            label: None,
            nodes: NodeStore::with_capacity(config.node_capacity),
            edges: EdgeStore::with_capacity(config.edge_capacity),
            adjacency: AdjacencyIndex::new(),
            config,
        }
    }

    /// The configuration this graph was built with.
    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Set the graph label.
    pub fn set_graph_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Get the graph label, if one was set.
    #[must_use]
    pub fn graph_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Register a node.
    ///
    /// Re-adding an existing node is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if `id` is negative.
    pub fn add_node(&mut self, id: i64) -> GraphResult<NodeId> {
        let node = NodeId::try_from_raw(id)?;
        if self.nodes.insert(node) {
            trace!(node = %node, "registered node");
        }
        Ok(node)
    }

    /// Attach a metadata entry to a node, overwriting any previous value for
    /// `key`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node is not registered.
    pub fn add_node_metadata(
        &mut self,
        node: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> GraphResult<()> {
        self.nodes.set_metadata(node, key, value)
    }

    /// Get the metadata value stored under `key` for a node.
    #[must_use]
    pub fn get_node_metadata_value(&self, node: NodeId, key: &str) -> Option<&str> {
        self.nodes.metadata_value(node, key)
    }

    /// Get all metadata attached to a node.
    #[must_use]
    pub fn get_node_metadata(&self, node: NodeId) -> Option<&Metadata> {
        self.nodes.metadata(node)
    }

    /// Find the first node, in node insertion order, having any metadata
    /// entry whose value equals `value`. The key is not considered.
    #[must_use]
    pub fn get_node_from_metadata(&self, value: &str) -> Option<NodeId> {
        self.nodes.find_by_metadata_value(value)
    }

    /// Returns true if the node is registered.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(node)
    }

    /// All nodes in insertion order.
    #[must_use]
    pub fn get_nodes(&self) -> &[NodeId] {
        self.nodes.ids()
    }

    /// Total number of nodes.
    #[must_use]
    pub fn count_nodes(&self) -> usize {
        self.nodes.len()
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Add an edge from `tail` to `head`.
    ///
    /// Under [`EndpointPolicy::AutoRegister`] unregistered endpoints are
    /// registered first.
    ///
    /// # Returns
    ///
    /// The new edge id, or `None` if an edge for this ordered pair already
    /// exists, in which case the graph is unchanged.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidArgument`] if `tail` or `head` is negative
    /// - [`GraphError::UnregisteredEndpoint`] if an endpoint is unknown under
    ///   [`EndpointPolicy::RequireRegistered`]
    pub fn add_edge(&mut self, tail: i64, head: i64) -> GraphResult<Option<EdgeId>> {
        let tail = NodeId::try_from_raw(tail)?;
        let head = NodeId::try_from_raw(head)?;

        if self.config.endpoint_policy == EndpointPolicy::RequireRegistered {
            for endpoint in [tail, head] {
                if !self.nodes.contains(endpoint) {
                    return Err(GraphError::UnregisteredEndpoint(endpoint));
                }
            }
        }

        let Some(edge) = self.edges.insert(tail, head) else {
            trace!(tail = %tail, head = %head, "edge already exists");
            return Ok(None);
        };

        // Tail first, so an edge between two new nodes lists the tail first.
        self.nodes.insert(tail);
        self.nodes.insert(head);
        self.adjacency.insert(edge, tail, head);
        trace!(edge = %edge, tail = %tail, head = %head, "added edge");
        Ok(Some(edge))
    }

    /// Attach a label to an edge, replacing any previous label.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge does not exist.
    pub fn set_edge_label(&mut self, edge: EdgeId, label: impl Into<String>) -> GraphResult<()> {
        self.edges.set_label(edge, label)
    }

    /// Get the label of an edge. `None` if unset or if the edge is unknown.
    #[must_use]
    pub fn get_edge_label(&self, edge: EdgeId) -> Option<&str> {
        self.edges.label(edge)
    }

    /// All edges in insertion order.
    #[must_use]
    pub fn get_edges(&self) -> &[EdgeId] {
        self.edges.ids()
    }

    /// Total number of edges.
    #[must_use]
    pub fn count_edges(&self) -> usize {
        self.edges.len()
    }

    /// Look up the edge from `tail` to `head`.
    #[must_use]
    pub fn get_edge(&self, tail: NodeId, head: NodeId) -> Option<EdgeId> {
        self.edges.get(tail, head)
    }

    /// Get the tail node of an edge.
    #[must_use]
    pub fn get_tail_node(&self, edge: EdgeId) -> Option<NodeId> {
        self.edges.tail(edge)
    }

    /// Get the head node of an edge.
    #[must_use]
    pub fn get_head_node(&self, edge: EdgeId) -> Option<NodeId> {
        self.edges.head(edge)
    }

    /// Returns true if the edge exists.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains(edge)
    }

    /// Returns true if an edge from `tail` to `head` exists.
    #[must_use]
    pub fn contains_edge_between(&self, tail: NodeId, head: NodeId) -> bool {
        self.edges.contains_between(tail, head)
    }

    // ------------------------------------------------------------------
    // Adjacency
    // ------------------------------------------------------------------

    /// Incoming edges of the given nodes, without duplicates.
    ///
    /// Nodes are visited in argument order, each node's edges in insertion
    /// order.
    #[must_use]
    pub fn get_in_edges(&self, nodes: &[NodeId]) -> Vec<EdgeId> {
        self.adjacency.collect_edge_ids(nodes, Direction::Incoming)
    }

    /// Outgoing edges of the given nodes, without duplicates.
    #[must_use]
    pub fn get_out_edges(&self, nodes: &[NodeId]) -> Vec<EdgeId> {
        self.adjacency.collect_edge_ids(nodes, Direction::Outgoing)
    }

    /// Incoming then outgoing edges of the given nodes, without duplicates.
    #[must_use]
    pub fn get_edges_incident_to(&self, nodes: &[NodeId]) -> Vec<EdgeId> {
        self.adjacency.collect_edge_ids(nodes, Direction::Both)
    }

    /// Number of incoming edges; 0 for an unknown node.
    #[must_use]
    pub fn get_in_degree(&self, node: NodeId) -> usize {
        self.adjacency.count_incoming(node)
    }

    /// Number of outgoing edges; 0 for an unknown node.
    #[must_use]
    pub fn get_out_degree(&self, node: NodeId) -> usize {
        self.adjacency.count_outgoing(node)
    }

    /// Direct predecessors (tails of incoming edges).
    #[must_use]
    pub fn get_predecessors(&self, node: NodeId) -> Vec<NodeId> {
        self.one_hop(node, Direction::Incoming)
    }

    /// Direct successors (heads of outgoing edges).
    #[must_use]
    pub fn get_successors(&self, node: NodeId) -> Vec<NodeId> {
        self.one_hop(node, Direction::Outgoing)
    }

    fn one_hop(&self, node: NodeId, direction: Direction) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        traversal::neighbors(self, node, direction).filter(|n| seen.insert(*n)).collect()
    }

    pub(crate) const fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    pub(crate) const fn edge_store(&self) -> &EdgeStore {
        &self.edges
    }
}
