//! LogInHandler - verifies a credential and issues an access token.

use std::sync::Arc;

use crate::domain::account::AccountError;
use crate::domain::foundation::{AuthError, AuthenticatedAccount};
use crate::ports::{AccessToken, AccountRepository, PasswordHasher, TokenIssuer};

/// Command to log in.
#[derive(Debug, Clone)]
pub struct LogInCommand {
    pub username: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LogInResult {
    pub account: AuthenticatedAccount,
    pub token: AccessToken,
}

/// Handler for credential verification and token issuance.
pub struct LogInHandler {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl LogInHandler {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    /// # Errors
    ///
    /// - `Auth(InvalidCredentials)` for an unknown username AND for a
    ///   wrong password; the two are deliberately indistinguishable
    pub async fn handle(&self, cmd: LogInCommand) -> Result<LogInResult, AccountError> {
        let account = self
            .accounts
            .find_by_username(&cmd.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(&cmd.password, account.password_hash())? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let authenticated = AuthenticatedAccount::new(account.id(), account.username());
        let token = self.tokens.issue(&authenticated)?;

        tracing::info!(account_id = %account.id(), "login succeeded");
        Ok(LogInResult {
            account: authenticated,
            token,
        })
    }
}
