//! Edge storage.
//!
//! Edges are directed `(tail, head)` pairs. At most one edge exists per
//! ordered pair, which the `(tail, head) -> EdgeId` lookup enforces.

use std::collections::HashMap;

use hierograph_core::{EdgeId, NodeId};

use super::error::{GraphError, GraphResult};
use super::id_gen::EdgeIdGenerator;

/// Edge storage.
///
/// `EdgeStore` records edge endpoints and labels. It does not know which
/// nodes exist; keeping endpoints registered is the caller's job (see
/// [`crate::graph::DirectedGraph::add_edge`]). Per-node adjacency lists are
/// maintained separately by [`crate::index::AdjacencyIndex`].
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    /// Edge ids in insertion order.
    order: Vec<EdgeId>,
    /// Edge id -> (tail, head).
    endpoints: HashMap<EdgeId, (NodeId, NodeId)>,
    /// (tail, head) -> edge id.
    by_endpoints: HashMap<(NodeId, NodeId), EdgeId>,
    /// Edge label side table.
    labels: HashMap<EdgeId, String>,
    id_gen: EdgeIdGenerator,
}

impl EdgeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` edges.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            endpoints: HashMap::with_capacity(capacity),
            by_endpoints: HashMap::with_capacity(capacity),
            labels: HashMap::new(),
            id_gen: EdgeIdGenerator::new(),
        }
    }

    /// Create an edge from `tail` to `head`.
    ///
    /// # Returns
    ///
    /// The new edge id, or `None` if an edge for this ordered pair already
    /// exists (the store is left unchanged).
    pub fn insert(&mut self, tail: NodeId, head: NodeId) -> Option<EdgeId> {
        if self.by_endpoints.contains_key(&(tail, head)) {
            return None;
        }
        let id = self.id_gen.next_edge_id();
        self.record(id, tail, head);
        Some(id)
    }

    /// Create an edge with a specific id and optional label.
    ///
    /// Used when deriving a graph from another one so that edge ids and
    /// labels are preserved. Returns `false` if the id or the endpoint pair
    /// is taken.
    pub fn insert_with_id(
        &mut self,
        id: EdgeId,
        tail: NodeId,
        head: NodeId,
        label: Option<&str>,
    ) -> bool {
        if self.endpoints.contains_key(&id) || self.by_endpoints.contains_key(&(tail, head)) {
            return false;
        }
        self.id_gen.observe(id);
        self.record(id, tail, head);
        if let Some(label) = label {
            self.labels.insert(id, label.to_owned());
        }
        true
    }

    fn record(&mut self, id: EdgeId, tail: NodeId, head: NodeId) {
        self.order.push(id);
        self.endpoints.insert(id, (tail, head));
        self.by_endpoints.insert((tail, head), id);
    }

    /// Look up the edge from `tail` to `head`.
    #[must_use]
    pub fn get(&self, tail: NodeId, head: NodeId) -> Option<EdgeId> {
        self.by_endpoints.get(&(tail, head)).copied()
    }

    /// Get the `(tail, head)` pair of an edge.
    #[must_use]
    pub fn endpoints(&self, id: EdgeId) -> Option<(NodeId, NodeId)> {
        self.endpoints.get(&id).copied()
    }

    /// Get the tail node of an edge.
    #[must_use]
    pub fn tail(&self, id: EdgeId) -> Option<NodeId> {
        self.endpoints(id).map(|(tail, _)| tail)
    }

    /// Get the head node of an edge.
    #[must_use]
    pub fn head(&self, id: EdgeId) -> Option<NodeId> {
        self.endpoints(id).map(|(_, head)| head)
    }

    /// Check if an edge exists.
    #[must_use]
    pub fn contains(&self, id: EdgeId) -> bool {
        self.endpoints.contains_key(&id)
    }

    /// Check if an edge from `tail` to `head` exists.
    #[must_use]
    pub fn contains_between(&self, tail: NodeId, head: NodeId) -> bool {
        self.by_endpoints.contains_key(&(tail, head))
    }

    /// All edge ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[EdgeId] {
        &self.order
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if there are no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Attach a label to an edge, replacing any previous label.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge does not exist.
    pub fn set_label(&mut self, id: EdgeId, label: impl Into<String>) -> GraphResult<()> {
        if !self.contains(id) {
            return Err(GraphError::EdgeNotFound(id));
        }
        self.labels.insert(id, label.into());
        Ok(())
    }

    /// Get the label of an edge, if one was set.
    #[must_use]
    pub fn label(&self, id: EdgeId) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let mut store = EdgeStore::new();
        let first = store.insert(n(1), n(2));
        assert!(first.is_some());
        assert_eq!(store.insert(n(1), n(2)), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn reverse_pair_is_a_distinct_edge() {
        let mut store = EdgeStore::new();
        let forward = store.insert(n(1), n(2)).unwrap();
        let backward = store.insert(n(2), n(1)).unwrap();
        assert_ne!(forward, backward);
        assert_eq!(store.get(n(2), n(1)), Some(backward));
    }

    #[test]
    fn endpoints_of_unknown_edge_are_none() {
        let store = EdgeStore::new();
        assert_eq!(store.tail(EdgeId::new(0)), None);
        assert_eq!(store.head(EdgeId::new(0)), None);
        assert!(!store.contains(EdgeId::new(0)));
    }

    #[test]
    fn label_requires_existing_edge() {
        let mut store = EdgeStore::new();
        let result = store.set_label(EdgeId::new(5), "is_a");
        assert_eq!(result, Err(GraphError::EdgeNotFound(EdgeId::new(5))));
    }

    #[test]
    fn insert_with_id_advances_the_generator() {
        let mut store = EdgeStore::with_capacity(2);
        assert!(store.insert_with_id(EdgeId::new(7), n(1), n(2), None));
        assert!(!store.insert_with_id(EdgeId::new(7), n(3), n(4), None));
        assert!(!store.insert_with_id(EdgeId::new(9), n(1), n(2), None));

        let next = store.insert(n(2), n(3)).unwrap();
        assert_eq!(next, EdgeId::new(8));
        assert_eq!(store.ids(), &[EdgeId::new(7), EdgeId::new(8)]);
    }

    #[test]
    fn insert_with_id_copies_label() {
        let mut store = EdgeStore::new();
        assert!(store.insert_with_id(EdgeId::new(3), n(1), n(2), Some("part_of")));
        assert!(store.insert_with_id(EdgeId::new(4), n(2), n(3), None));
        assert!(!store.insert_with_id(EdgeId::new(3), n(5), n(6), Some("is_a")));

        assert_eq!(store.label(EdgeId::new(3)), Some("part_of"));
        assert_eq!(store.label(EdgeId::new(4)), None);
    }
}
