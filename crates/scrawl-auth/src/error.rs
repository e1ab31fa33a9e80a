use scrawl_storage::StorageError;

/// Errors from account and session operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Sign-up requires name, email, and password; at least one was empty.
    #[error("please fill out all fields")]
    MissingField,

    /// An account record already exists for this email.
    #[error("an account with this email already exists")]
    AccountExists,

    /// Unknown email or wrong password. The two cases are deliberately
    /// indistinguishable.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A stored account record could not be decoded.
    #[error("corrupt account record for {email}: {reason}")]
    CorruptAccount { email: String, reason: String },

    /// A record could not be encoded for storage.
    #[error("record could not be encoded: {0}")]
    Encode(String),

    /// Error from the underlying key-value store.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result alias for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
