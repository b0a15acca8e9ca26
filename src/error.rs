//! Error type shared by both tools.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    /// Required configuration is missing. Raised before any connection attempt.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required argument is missing. Carries the usage text to show.
    #[error("{0}")]
    Usage(String),

    #[error("user with email {email} not found")]
    UserNotFound { email: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl AdminError {
    /// Process exit status for this failure. Every handled failure maps to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            AdminError::Config(_)
            | AdminError::Usage(_)
            | AdminError::UserNotFound { .. }
            | AdminError::Database(_)
            | AdminError::Hash(_)
            | AdminError::Io(_) => 1,
        }
    }

    /// Infrastructure failures (as opposed to operator mistakes) get logged
    /// with full details in addition to the console message.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            AdminError::Database(_) | AdminError::Hash(_) | AdminError::Io(_)
        )
    }
}
