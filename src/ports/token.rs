//! Bearer token ports.
//!
//! Split into issue and validate sides: login needs an issuer, the auth
//! middleware needs only a validator. The JWT adapter implements both;
//! tests can fake either independently.

use crate::domain::foundation::{AuthError, AuthenticatedAccount, Timestamp};

/// An issued bearer access token.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// Opaque token string the client presents in `Authorization: Bearer`.
    pub token: String,

    /// When the token stops being accepted.
    pub expires_at: Timestamp,
}

/// Port for issuing access tokens at login.
pub trait TokenIssuer: Send + Sync {
    /// Issues a token for the given account.
    ///
    /// # Errors
    ///
    /// - `TokenIssuance` on internal failure
    fn issue(&self, account: &AuthenticatedAccount) -> Result<AccessToken, AuthError>;
}

/// Port for validating presented tokens.
pub trait TokenValidator: Send + Sync {
    /// Validates a token and extracts the authenticated account.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` for a malformed token or bad signature
    /// - `TokenExpired` for an expired token
    fn validate(&self, token: &str) -> Result<AuthenticatedAccount, AuthError>;
}
