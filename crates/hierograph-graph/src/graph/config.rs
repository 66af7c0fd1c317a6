//! Graph construction settings.

use serde::{Deserialize, Serialize};

/// What [`DirectedGraph::add_edge`] does with an endpoint that was never
/// registered through [`DirectedGraph::add_node`].
///
/// [`DirectedGraph::add_edge`]: super::DirectedGraph::add_edge
/// [`DirectedGraph::add_node`]: super::DirectedGraph::add_node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EndpointPolicy {
    /// Register missing endpoints as nodes (tail first, then head).
    #[default]
    AutoRegister,

    /// Reject the edge with [`GraphError::UnregisteredEndpoint`].
    ///
    /// [`GraphError::UnregisteredEndpoint`]: crate::store::GraphError::UnregisteredEndpoint
    RequireRegistered,
}

/// Configuration for a [`DirectedGraph`](super::DirectedGraph).
///
/// # Example
///
/// ```
/// use hierograph_graph::graph::{DirectedGraph, EndpointPolicy, GraphConfig};
///
/// let config = GraphConfig::default()
///     .with_endpoint_policy(EndpointPolicy::RequireRegistered)
///     .with_node_capacity(4_096);
/// let mut graph = DirectedGraph::with_config(config);
///
/// assert!(graph.add_edge(1, 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Handling of unregistered edge endpoints.
    /// Default: `AutoRegister`
    pub endpoint_policy: EndpointPolicy,

    /// Number of nodes to reserve room for up front.
    /// Default: 0
    pub node_capacity: usize,

    /// Number of edges to reserve room for up front.
    /// Default: 0
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { endpoint_policy: EndpointPolicy::AutoRegister, node_capacity: 0, edge_capacity: 0 }
    }
}

impl GraphConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint registration policy.
    pub const fn with_endpoint_policy(mut self, policy: EndpointPolicy) -> Self {
        self.endpoint_policy = policy;
        self
    }

    /// Reserve room for `capacity` nodes.
    pub const fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Reserve room for `capacity` edges.
    pub const fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GraphConfig::new();
        assert_eq!(config.endpoint_policy, EndpointPolicy::AutoRegister);
        assert_eq!(config.node_capacity, 0);
        assert_eq!(config.edge_capacity, 0);
    }

    #[test]
    fn builder_sets_fields() {
        let config = GraphConfig::new()
            .with_endpoint_policy(EndpointPolicy::RequireRegistered)
            .with_node_capacity(10)
            .with_edge_capacity(20);
        assert_eq!(config.endpoint_policy, EndpointPolicy::RequireRegistered);
        assert_eq!(config.node_capacity, 10);
        assert_eq!(config.edge_capacity, 20);
    }
}
