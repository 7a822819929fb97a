//! SignUpHandler - creates a tenant account with a hashed credential.

use std::sync::Arc;

use crate::domain::account::{Account, AccountError};
use crate::domain::foundation::{AccountId, ValidationError};
use crate::ports::{AccountRepository, PasswordHasher};

/// Command to create a new account.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub username: String,
    pub password: String,
}

/// Handler for account creation.
pub struct SignUpHandler {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SignUpHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { accounts, hasher }
    }

    /// # Errors
    ///
    /// - `Validation` if username or password is empty/malformed
    /// - `UsernameTaken` if the username is already registered
    pub async fn handle(&self, cmd: SignUpCommand) -> Result<Account, AccountError> {
        if cmd.password.is_empty() {
            return Err(ValidationError::empty_field("password").into());
        }

        let password_hash = self.hasher.hash(&cmd.password)?;
        let account = Account::new(AccountId::new(), cmd.username, password_hash)?;

        self.accounts.save(&account).await?;

        tracing::info!(account_id = %account.id(), "account created");
        Ok(account)
    }
}
