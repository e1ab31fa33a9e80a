/// Errors from key-value store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a valid store image.
    #[error("corrupt store file {path}: {reason}")]
    CorruptFile { path: String, reason: String },

    /// Serialization failure while writing the store image.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
