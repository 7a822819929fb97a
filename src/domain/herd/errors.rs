//! Error types for herd operations.

use thiserror::Error;

use crate::domain::foundation::{CowId, ValidationError};

/// Errors that can occur while writing or reading herd records.
#[derive(Debug, Error)]
pub enum HerdError {
    /// The referenced cow does not exist for this owner.
    #[error("Cow not found: {0}")]
    CowNotFound(CowId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for HerdError {
    fn from(err: sqlx::Error) -> Self {
        HerdError::Database(err.to_string())
    }
}
