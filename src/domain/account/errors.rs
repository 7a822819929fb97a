//! Error types for account operations.

use thiserror::Error;

use crate::domain::foundation::{AuthError, ValidationError};

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// The username is already registered.
    #[error("Username is already taken")]
    UsernameTaken,

    /// No account matches the given identifier.
    #[error("Account not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for AccountError {
    fn from(err: sqlx::Error) -> Self {
        AccountError::Database(err.to_string())
    }
}
