//! Error types for ledger operations.

use thiserror::Error;

use crate::domain::foundation::{FamilyId, ValidationError};

/// Errors that can occur while writing or reading ledger records.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The referenced family does not exist for this owner.
    #[error("Family not found: {0}")]
    FamilyNotFound(FamilyId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for LedgerError {
    fn from(err: sqlx::Error) -> Self {
        LedgerError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_not_found_names_the_id() {
        let id = FamilyId::new();
        assert!(format!("{}", LedgerError::FamilyNotFound(id)).contains(&id.to_string()));
    }

    #[test]
    fn validation_error_passes_through() {
        let err: LedgerError = ValidationError::negative_magnitude("amount", "-1").into();
        assert!(matches!(err, LedgerError::Validation(_)));
    }
}
