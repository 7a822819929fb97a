//! ChangePasswordHandler - replaces the stored credential hash.

use std::sync::Arc;

use crate::domain::account::AccountError;
use crate::domain::foundation::{AccountId, ValidationError};
use crate::ports::{AccountRepository, PasswordHasher};

/// Command to replace the current account's password.
#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    pub account_id: AccountId,
    pub new_password: String,
}

/// Handler for password replacement.
pub struct ChangePasswordHandler {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl ChangePasswordHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { accounts, hasher }
    }

    /// # Errors
    ///
    /// - `Validation` if the new password is empty
    /// - `NotFound` if the account no longer exists
    pub async fn handle(&self, cmd: ChangePasswordCommand) -> Result<(), AccountError> {
        if cmd.new_password.is_empty() {
            return Err(ValidationError::empty_field("password").into());
        }

        let mut account = self
            .accounts
            .find_by_id(cmd.account_id)
            .await?
            .ok_or(AccountError::NotFound)?;

        let new_hash = self.hasher.hash(&cmd.new_password)?;
        account.replace_password_hash(new_hash)?;
        self.accounts.update_password_hash(&account).await?;

        tracing::info!(account_id = %account.id(), "password changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockPasswordHasher;
    use crate::adapters::memory::MemoryStore;
    use crate::application::handlers::account::{SignUpCommand, SignUpHandler};

    async fn alice_in(store: &MemoryStore) -> AccountId {
        SignUpHandler::new(Arc::new(store.clone()), Arc::new(MockPasswordHasher::new()))
            .handle(SignUpCommand {
                username: "alice".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap()
            .id()
    }

    fn handler(store: &MemoryStore) -> ChangePasswordHandler {
        ChangePasswordHandler::new(Arc::new(store.clone()), Arc::new(MockPasswordHasher::new()))
    }

    #[tokio::test]
    async fn replaces_the_stored_hash() {
        let store = MemoryStore::new();
        let account_id = alice_in(&store).await;

        handler(&store)
            .handle(ChangePasswordCommand {
                account_id,
                new_password: "new-pw".to_string(),
            })
            .await
            .unwrap();

        let account = store.find_by_id(account_id).await.unwrap().unwrap();
        assert_eq!(account.password_hash(), "hashed:new-pw");
    }

    #[tokio::test]
    async fn rejects_empty_password() {
        let store = MemoryStore::new();
        let account_id = alice_in(&store).await;

        let result = handler(&store)
            .handle(ChangePasswordCommand {
                account_id,
                new_password: String::new(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::Validation(_))));
    }

    #[tokio::test]
    async fn fails_for_unknown_account() {
        let store = MemoryStore::new();
        let result = handler(&store)
            .handle(ChangePasswordCommand {
                account_id: AccountId::new(),
                new_password: "new-pw".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::NotFound)));
    }
}
