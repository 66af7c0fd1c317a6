//! Node storage.
//!
//! Node ids are kept in insertion order. Metadata lives in a side table so
//! that metadata-free nodes cost nothing beyond their id, and a reverse
//! index maps every metadata value back to the nodes carrying it.

use std::collections::{BTreeMap, HashMap};

use hierograph_core::{Metadata, NodeId};

use super::error::{GraphError, GraphResult};

/// Node storage.
///
/// `NodeStore` owns the node set of a graph. It never generates ids: every
/// node is registered with a caller-assigned [`NodeId`].
///
/// # Value index
///
/// [`NodeStore::find_by_metadata_value`] must answer with the *first* node in
/// insertion order whose metadata contains the value under any key. The index
/// therefore maps a value to the insertion positions of the nodes holding it,
/// each with a count of how many of that node's keys carry the value, so
/// overwriting one key does not drop a node that still holds the value
/// under another.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    /// Node ids in insertion order.
    order: Vec<NodeId>,
    /// Position of each node in `order`.
    positions: HashMap<NodeId, usize>,
    /// Per-node metadata side table.
    metadata: HashMap<NodeId, Metadata>,
    /// Metadata value -> (insertion position -> number of keys holding it).
    by_value: HashMap<String, BTreeMap<usize, usize>>,
}

impl NodeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            metadata: HashMap::new(),
            by_value: HashMap::new(),
        }
    }

    /// Register a node.
    ///
    /// # Returns
    ///
    /// `true` if the node was new, `false` if it was already registered.
    pub fn insert(&mut self, id: NodeId) -> bool {
        if self.positions.contains_key(&id) {
            return false;
        }
        self.positions.insert(id, self.order.len());
        self.order.push(id);
        true
    }

    /// Register a node together with a copy of its metadata.
    ///
    /// Used when deriving a graph from another one. Nothing is copied if the
    /// node is already registered.
    ///
    /// # Returns
    ///
    /// `true` if the node was new, `false` if it was already registered.
    pub fn insert_with_metadata(&mut self, id: NodeId, metadata: Option<&Metadata>) -> bool {
        if !self.insert(id) {
            return false;
        }
        let Some(metadata) = metadata.filter(|m| !m.is_empty()) else {
            return true;
        };
        let position = self.order.len() - 1;
        for (_, value) in metadata.iter() {
            *self.by_value.entry(value.to_owned()).or_default().entry(position).or_insert(0) += 1;
        }
        self.metadata.insert(id, metadata.clone());
        true
    }

    /// Check if a node is registered.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.positions.contains_key(&id)
    }

    /// All node ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no node is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Attach a metadata entry to a node, overwriting any previous value
    /// stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node is not registered.
    pub fn set_metadata(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> GraphResult<()> {
        let position = *self.positions.get(&id).ok_or(GraphError::NodeNotFound(id))?;
        let value = value.into();

        let previous = self.metadata.entry(id).or_default().insert(key, value.clone());
        if previous.as_ref() == Some(&value) {
            return Ok(());
        }
        if let Some(old) = previous {
            self.unindex_value(&old, position);
        }
        *self.by_value.entry(value).or_default().entry(position).or_insert(0) += 1;
        Ok(())
    }

    /// Get the value stored under `key` for a node.
    ///
    /// Returns `None` if the node or the key is unknown.
    #[must_use]
    pub fn metadata_value(&self, id: NodeId, key: &str) -> Option<&str> {
        self.metadata.get(&id).and_then(|m| m.get(key))
    }

    /// Get all metadata attached to a node.
    #[must_use]
    pub fn metadata(&self, id: NodeId) -> Option<&Metadata> {
        self.metadata.get(&id)
    }

    /// Find the first node, in insertion order, holding `value` under any key.
    #[must_use]
    pub fn find_by_metadata_value(&self, value: &str) -> Option<NodeId> {
        let (&position, _) = self.by_value.get(value)?.first_key_value()?;
        self.order.get(position).copied()
    }

    fn unindex_value(&mut self, value: &str, position: usize) {
        let Some(holders) = self.by_value.get_mut(value) else {
            return;
        };
        if let Some(count) = holders.get_mut(&position) {
            *count -= 1;
            if *count == 0 {
                holders.remove(&position);
            }
        }
        if holders.is_empty() {
            self.by_value.remove(value);
        }
    }
}
