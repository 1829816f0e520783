//! Error types for the graph store

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    /// Whole-graph topology request on a store that cannot answer it.
    #[error("Unsupported operation on sharded graph: {operation}")]
    Unsupported { operation: &'static str },

    #[error("Invalid vertex label: {0:?}")]
    InvalidLabel(String),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("Invalid shard count: {0} (must be > 0)")]
    InvalidShardCount(usize),

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Fan-out pool error: {0}")]
    FanOut(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        GraphError::Unsupported { operation }
    }

    /// True for the "this store declines the operation" signal, as opposed
    /// to a failure of an operation the store does support.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, GraphError::Unsupported { .. })
    }

    /// Stable error code for callers that log or match on strings
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::Unsupported { .. } => "UNSUPPORTED_OPERATION",
            GraphError::InvalidLabel(_) => "INVALID_LABEL",
            GraphError::InvalidWeight(_) => "INVALID_WEIGHT",
            GraphError::InvalidShardCount(_) => "INVALID_SHARD_COUNT",
            GraphError::VertexNotFound(_) => "VERTEX_NOT_FOUND",
            GraphError::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        }
    }
}
