/// Errors from catalog store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The catalog document does not exist.
    #[error("catalog document not found: {0}")]
    NotFound(String),

    /// The stored document is not a valid catalog.
    #[error("malformed catalog document: {0}")]
    Malformed(String),

    /// The catalog could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
