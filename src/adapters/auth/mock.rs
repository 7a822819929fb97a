//! Transparent auth fakes for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{AuthError, AuthenticatedAccount, Timestamp};
use crate::ports::{AccessToken, PasswordHasher, TokenIssuer, TokenValidator};

/// Password "hasher" whose output is trivially inspectable.
///
/// Never use outside tests: the "hash" contains the password.
#[derive(Debug, Clone, Default)]
pub struct MockPasswordHasher;

impl MockPasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

/// Token validator backed by a fixed token → account map.
#[derive(Debug, Default)]
pub struct MockTokenValidator {
    accounts: Mutex<HashMap<String, AuthenticatedAccount>>,
}

impl MockTokenValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token as valid for the given account.
    pub fn with_account(self, token: impl Into<String>, account: AuthenticatedAccount) -> Self {
        self.accounts.lock().unwrap().insert(token.into(), account);
        self
    }
}

impl TokenValidator for MockTokenValidator {
    fn validate(&self, token: &str) -> Result<AuthenticatedAccount, AuthError> {
        self.accounts
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Token issuer producing predictable `token-for:<username>` strings.
#[derive(Debug, Clone, Default)]
pub struct MockTokenIssuer;

impl MockTokenIssuer {
    pub fn new() -> Self {
        Self
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, account: &AuthenticatedAccount) -> Result<AccessToken, AuthError> {
        Ok(AccessToken {
            token: format!("token-for:{}", account.username),
            expires_at: Timestamp::now(),
        })
    }
}
