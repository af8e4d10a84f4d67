//! Error types for session store operations.

/// Error type for session store operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cache client could not be resolved at construction.
    #[error("store configuration error: {0}")]
    Configuration(String),

    /// The cache client reported a failure for an operation.
    #[error("cache error: {0}")]
    Cache(String),

    /// A stored payload could not be parsed, or a record could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for session store operations.
pub type Result<T> = std::result::Result<T, Error>;
