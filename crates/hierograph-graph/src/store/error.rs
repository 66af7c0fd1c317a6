//! Error types for graph operations.

use hierograph_core::{CoreError, EdgeId, NodeId};
use thiserror::Error;

/// Errors raised by graph mutations that were handed malformed input or
/// input referencing state the graph has no record of.
///
/// Queries never return these; a missing node or edge in a query yields
/// `None`, an empty vector or a zero degree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node id failed validation (e.g. it was negative).
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] CoreError),

    /// A node was not found.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// An edge was not found.
    #[error("edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// An edge endpoint is not registered and the graph does not register
    /// endpoints implicitly.
    #[error("edge endpoint is not a registered node: {0}")]
    UnregisteredEndpoint(NodeId),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
