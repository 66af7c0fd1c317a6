//! Core types for the directed graph.
//!
//! - [`NodeId`] and [`EdgeId`] - Compact integer identifiers
//! - [`Metadata`] - Ordered string key/value pairs attached to a node

mod id;
mod metadata;

pub use id::{EdgeId, NodeId};
pub use metadata::Metadata;
