//! Graph analytics algorithms.
//!
//! # Algorithms
//!
//! - [`TreeHeight`] - Longest root-to-sink path with path-sensitive cycle
//!   detection
//!
//! # Example
//!
//! ```
//! use hierograph_graph::analytics::{NotATreeError, TreeHeight, TreeHeightConfig};
//! use hierograph_graph::graph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 1).unwrap();
//!
//! // Every node has an incoming edge, so there is no root and the cycle
//! // responsible for that is reported.
//! let err = TreeHeight::compute(&graph, &TreeHeightConfig::default()).unwrap_err();
//! assert!(matches!(err, NotATreeError::CycleDetected { .. }));
//!
//! // An edgeless graph has no root either.
//! let empty = DirectedGraph::new();
//! let result = TreeHeight::compute(&empty, &TreeHeightConfig::default());
//! assert_eq!(result, Err(NotATreeError::NoRoot));
//! ```

mod height;

pub use height::{NotATreeError, RootPolicy, TreeHeight, TreeHeightConfig, TreeHeightResult};
