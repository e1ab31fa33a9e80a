use scrawl_auth::AuthError;
use scrawl_feed::FeedError;
use scrawl_storage::StorageError;

/// Errors from the application façade.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A feed mutation was attempted with no active session.
    #[error("not logged in")]
    NotLoggedIn,

    /// Error from account or session handling.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Error from the post store.
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// Error from the underlying key-value store.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result alias for app operations.
pub type AppResult<T> = Result<T, AppError>;
