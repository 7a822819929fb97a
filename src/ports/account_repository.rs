//! Account repository port.
//!
//! Accounts are the one record type that is not itself owner-scoped:
//! they ARE the owners. Username uniqueness is enforced here.

use async_trait::async_trait;

use crate::domain::account::{Account, AccountError};
use crate::domain::foundation::AccountId;

/// Repository port for account persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Saves a new account.
    ///
    /// # Errors
    ///
    /// - `UsernameTaken` if the username is already registered
    /// - `Database` on persistence failure
    async fn save(&self, account: &Account) -> Result<(), AccountError>;

    /// Finds an account by username.
    ///
    /// Returns `None` if not found.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError>;

    /// Finds an account by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountError>;

    /// Persists a replaced credential hash.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the account does not exist
    /// - `Database` on persistence failure
    async fn update_password_hash(&self, account: &Account) -> Result<(), AccountError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AccountRepository) {}
    }
}
