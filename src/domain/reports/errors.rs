//! Error types for report queries.

use thiserror::Error;

use crate::domain::foundation::FamilyId;

/// Errors that can occur while assembling reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The statement's family does not exist for this owner.
    #[error("Family not found: {0}")]
    FamilyNotFound(FamilyId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for ReportError {
    fn from(err: sqlx::Error) -> Self {
        ReportError::Database(err.to_string())
    }
}
