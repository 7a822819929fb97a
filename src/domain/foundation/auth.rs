//! Authentication types for the domain layer.
//!
//! These types represent an authenticated tenant account extracted from a
//! validated bearer token. They have no provider dependencies: the JWT
//! adapter, or a mock in tests, populates them via the `TokenValidator`
//! port.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AccountId;

/// Authenticated account extracted from a validated bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedAccount {
    /// The unique account identifier.
    pub id: AccountId,

    /// The account's username, carried in the token claims for logging
    /// and display.
    pub username: String,
}

impl AuthenticatedAccount {
    /// Creates a new authenticated account.
    pub fn new(id: AccountId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// Authentication errors.
///
/// `InvalidCredentials` deliberately covers both unknown-username and
/// wrong-password so callers cannot enumerate accounts.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Username/password pair did not match any account.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Password hashing or verification failed internally.
    #[error("Credential processing failed: {0}")]
    Hashing(String),

    /// Token issuance failed internally.
    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),
}

impl AuthError {
    /// Returns true if this error should surface as a generic 401.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::InvalidToken | AuthError::TokenExpired
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_account_holds_identity() {
        let id = AccountId::new();
        let account = AuthenticatedAccount::new(id, "alice");
        assert_eq!(account.id, id);
        assert_eq!(account.username, "alice");
    }

    #[test]
    fn invalid_credentials_message_does_not_name_the_cause() {
        let err = AuthError::InvalidCredentials;
        let msg = format!("{}", err);
        assert_eq!(msg, "Invalid username or password");
        assert!(!msg.contains("unknown"));
    }

    #[test]
    fn token_errors_are_unauthorized() {
        assert!(AuthError::InvalidCredentials.is_unauthorized());
        assert!(AuthError::InvalidToken.is_unauthorized());
        assert!(AuthError::TokenExpired.is_unauthorized());
        assert!(!AuthError::Hashing("boom".into()).is_unauthorized());
    }
}
