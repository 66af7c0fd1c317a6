//! Graph indexes for efficient traversal.
//!
//! This module provides the adjacency list index used for degree and
//! neighbor lookups and by every traversal.
//!
//! # Overview
//!
//! - [`AdjacencyIndex`] - Outgoing and incoming edge lists per node
//!
//! # Layout
//!
//! - `outgoing`: `NodeId -> [EdgeId]` - edges whose tail is the node
//! - `incoming`: `NodeId -> [EdgeId]` - edges whose head is the node
//!
//! Both lists are kept in edge insertion order, which makes every derived
//! query (neighbors, closures, incident edges) deterministic.
//!
//! # Example
//!
//! ```
//! use hierograph_core::{EdgeId, NodeId};
//! use hierograph_graph::index::AdjacencyIndex;
//!
//! let mut index = AdjacencyIndex::new();
//! index.insert(EdgeId::new(0), NodeId::new(1), NodeId::new(2));
//!
//! assert_eq!(index.outgoing_edge_ids(NodeId::new(1)), &[EdgeId::new(0)]);
//! assert_eq!(index.count_incoming(NodeId::new(2)), 1);
//! assert_eq!(index.count_outgoing(NodeId::new(2)), 0);
//! ```

mod adjacency;

pub use adjacency::AdjacencyIndex;
