//! Unique identifiers for nodes and edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Identifier for a node in the graph.
///
/// Node ids are assigned by the caller (typically a loader mapping external
/// vocabulary terms to integers), never generated by the graph. They are
/// non-negative; the only fallible constructor is [`NodeId::try_from_raw`],
/// which is where caller input is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a new `NodeId` from a raw u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Validate a caller-supplied signed id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NegativeId`] if `raw` is negative.
    pub fn try_from_raw(raw: i64) -> CoreResult<Self> {
        u64::try_from(raw).map(Self).map_err(|_| CoreError::NegativeId(raw))
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl TryFrom<i64> for NodeId {
    type Error = CoreError;

    fn try_from(raw: i64) -> CoreResult<Self> {
        Self::try_from_raw(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an edge in the graph.
///
/// Edge ids are allocated by the graph when an edge is created and are
/// monotonically increasing within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Create a new `EdgeId` from a raw u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
