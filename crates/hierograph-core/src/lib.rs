//! `hierograph` Core
//!
//! This crate provides the fundamental types shared by the `hierograph`
//! directed-graph engine.
//!
//! # Overview
//!
//! - **Identifiers**: [`NodeId`] (caller-assigned) and [`EdgeId`] (graph-assigned)
//! - **Metadata**: [`Metadata`], a small ordered string map attached to nodes
//! - **Errors**: [`CoreError`] for malformed identifiers
//!
//! # Example
//!
//! ```
//! use hierograph_core::{Metadata, NodeId};
//!
//! // Node ids arrive from callers as plain integers and are validated once
//! let go_term = NodeId::try_from_raw(8150).expect("non-negative id");
//! assert_eq!(go_term.as_u64(), 8150);
//! assert!(NodeId::try_from_raw(-1).is_err());
//!
//! let mut metadata = Metadata::new();
//! metadata.insert("accession", "GO:0008150");
//! assert_eq!(metadata.get("accession"), Some("GO:0008150"));
//! ```
//!
//! # Modules
//!
//! - [`types`] - Identifiers and metadata
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{EdgeId, Metadata, NodeId};
