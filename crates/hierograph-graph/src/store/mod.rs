//! Node and edge storage.
//!
//! This module holds the two primitive tables the graph is composed of.
//!
//! # Overview
//!
//! - [`NodeStore`] - Node ids in insertion order, per-node metadata and a
//!   metadata value index
//! - [`EdgeStore`] - Edge endpoints, the `(tail, head)` lookup and edge labels
//! - [`EdgeIdGenerator`] - Monotonic edge id allocation
//!
//! Adjacency (per-node in/out edge lists) lives in [`crate::index`].
//!
//! # Example
//!
//! ```
//! use hierograph_core::NodeId;
//! use hierograph_graph::store::{EdgeStore, NodeStore};
//!
//! let mut nodes = NodeStore::new();
//! nodes.insert(NodeId::new(1));
//! nodes.insert(NodeId::new(2));
//! nodes.set_metadata(NodeId::new(2), "accession", "EC 1.1.-.-").unwrap();
//!
//! let mut edges = EdgeStore::new();
//! let edge = edges.insert(NodeId::new(1), NodeId::new(2)).unwrap();
//! assert_eq!(edges.get(NodeId::new(1), NodeId::new(2)), Some(edge));
//! assert_eq!(nodes.find_by_metadata_value("EC 1.1.-.-"), Some(NodeId::new(2)));
//! ```

mod edge;
mod error;
mod id_gen;
mod node;

pub use edge::EdgeStore;
pub use error::{GraphError, GraphResult};
pub use id_gen::EdgeIdGenerator;
pub use node::NodeStore;
