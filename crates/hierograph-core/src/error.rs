//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A caller supplied a negative node identifier.
    #[error("invalid node id: {0} (node ids must be non-negative)")]
    NegativeId(i64),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
