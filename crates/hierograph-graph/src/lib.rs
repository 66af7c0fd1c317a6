//! `hierograph` Graph
//!
//! This crate provides an in-memory directed graph for hierarchies such as
//! ontologies and classification systems: integer nodes tagged with string
//! metadata, labelled edges, transitive ancestor/descendant queries,
//! induced subgraphs and a cycle-aware tree height analysis.
//!
//! # Modules
//!
//! - [`graph`] - The [`DirectedGraph`](graph::DirectedGraph) API and its configuration
//! - [`store`] - Node and edge storage
//! - [`index`] - Graph indexes (adjacency lists)
//! - [`traversal`] - Graph traversal algorithms
//! - [`analytics`] - Graph analytics algorithms (tree height)
//!
//! # Example
//!
//! ```
//! use hierograph_graph::graph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 3)?;
//!
//! assert_eq!(graph.calc_height(), Ok(2));
//! # Ok::<(), hierograph_graph::store::GraphError>(())
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod analytics;
pub mod graph;
pub mod index;
pub mod store;
pub mod traversal;
