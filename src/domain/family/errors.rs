//! Error types for family operations.

use thiserror::Error;

use crate::domain::foundation::{FamilyId, ValidationError};

/// Errors that can occur during family operations.
///
/// `NotFound` covers both an absent id and another owner's id; the two
/// cases are deliberately indistinguishable.
#[derive(Debug, Error)]
pub enum FamilyError {
    #[error("Family not found: {0}")]
    NotFound(FamilyId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for FamilyError {
    fn from(err: sqlx::Error) -> Self {
        FamilyError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let id = FamilyId::new();
        let err = FamilyError::NotFound(id);
        assert!(format!("{}", err).contains(&id.to_string()));
    }

    #[test]
    fn sqlx_error_converts_to_database_variant() {
        let err: FamilyError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, FamilyError::Database(_)));
    }
}
