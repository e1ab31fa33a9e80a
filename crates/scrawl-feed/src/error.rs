use scrawl_storage::StorageError;

/// Errors from post store operations.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// A post needs text content or an image; both were empty.
    #[error("a post needs text or an image")]
    EmptyPost,

    /// The requested sort order name is not one of the known orders.
    #[error("unknown sort order: {0:?}")]
    UnknownSortOrder(String),

    /// The persisted feed payload could not be encoded.
    #[error("feed payload could not be encoded: {0}")]
    Encode(String),

    /// The persisted feed payload is malformed or cannot be decoded.
    #[error("feed payload could not be decoded: {0}")]
    Decode(String),

    /// Error from the underlying key-value store.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result alias for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
