//! Error types for frame import

use thiserror::Error;

/// Main error type for import operations
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Node {0} not found in model")]
    NodeNotFound(usize),

    #[error("Geometric transformation {0} not found in model")]
    TransformNotFound(usize),

    #[error("Duplicate tag {0} already exists")]
    DuplicateTag(usize),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;
