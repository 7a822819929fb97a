//! Account aggregate - the tenant that owns every other record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, Timestamp, ValidationError};

/// Maximum length for a username.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// A tenant account.
///
/// # Invariants
///
/// - `username` is 1-50 characters, non-empty, unique across accounts
///   (uniqueness enforced by the persistence layer)
/// - `password_hash` is an opaque PHC-format string produced by the
///   `PasswordHasher` port; the aggregate never sees plaintext
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    username: String,
    password_hash: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Account {
    /// Creates a new account with an already-hashed credential.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if username is empty
    /// - `InvalidFormat` if username exceeds the length limit
    pub fn new(
        id: AccountId,
        username: String,
        password_hash: String,
    ) -> Result<Self, ValidationError> {
        Self::validate_username(&username)?;
        if password_hash.is_empty() {
            return Err(ValidationError::empty_field("password_hash"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            username,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes an account from persistence (no validation).
    pub fn reconstitute(
        id: AccountId,
        username: String,
        password_hash: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            created_at,
            updated_at,
        }
    }

    /// Returns the account ID.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the stored credential hash.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns when the account was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the account was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Replaces the stored credential hash.
    ///
    /// The only mutation any record type supports.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the new hash is empty
    pub fn replace_password_hash(&mut self, new_hash: String) -> Result<(), ValidationError> {
        if new_hash.is_empty() {
            return Err(ValidationError::empty_field("password_hash"));
        }
        self.password_hash = new_hash;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate_username(username: &str) -> Result<(), ValidationError> {
        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if username.len() > MAX_USERNAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "username",
                format!("must be at most {} characters", MAX_USERNAME_LENGTH),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account() -> Account {
        Account::new(
            AccountId::new(),
            "alice".to_string(),
            "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn new_account_stores_username_and_hash() {
        let account = test_account();
        assert_eq!(account.username(), "alice");
        assert!(account.password_hash().starts_with("$argon2id$"));
    }

    #[test]
    fn new_account_rejects_empty_username() {
        let result = Account::new(AccountId::new(), "".to_string(), "hash".to_string());
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn new_account_rejects_whitespace_username() {
        let result = Account::new(AccountId::new(), "   ".to_string(), "hash".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn new_account_rejects_overlong_username() {
        let result = Account::new(AccountId::new(), "x".repeat(51), "hash".to_string());
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn new_account_rejects_empty_hash() {
        let result = Account::new(AccountId::new(), "alice".to_string(), String::new());
        assert!(result.is_err());
    }

    #[test]
    fn replace_password_hash_swaps_hash_and_touches_updated_at() {
        let mut account = test_account();
        let before = *account.updated_at();
        account
            .replace_password_hash("$argon2id$v=19$new".to_string())
            .unwrap();
        assert_eq!(account.password_hash(), "$argon2id$v=19$new");
        assert!(account.updated_at() >= &before);
    }

    #[test]
    fn replace_password_hash_rejects_empty_hash() {
        let mut account = test_account();
        assert!(account.replace_password_hash(String::new()).is_err());
    }
}
