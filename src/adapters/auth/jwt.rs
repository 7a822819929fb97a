//! JWT implementation of the token ports.
//!
//! HS256 tokens carrying the account id (`sub`), the username, and the
//! standard `iat`/`exp` claims. One service implements both the issuer
//! and validator sides.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, AuthError, AuthenticatedAccount, Timestamp};
use crate::ports::{AccessToken, TokenIssuer, TokenValidator};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Account id.
    sub: String,
    /// Username, for logging and display without a lookup.
    username: String,
    /// Issued-at, Unix seconds.
    iat: i64,
    /// Expiry, Unix seconds.
    exp: i64,
}

/// JWT token service (issue + validate).
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtTokenService {
    /// Creates a token service from a shared secret and token lifetime.
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, account: &AuthenticatedAccount) -> Result<AccessToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;
        let claims = Claims {
            sub: account.id.to_string(),
            username: account.username.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;

        Ok(AccessToken {
            token,
            expires_at: Timestamp::from_datetime(expires_at),
        })
    }
}

impl TokenValidator for JwtTokenService {
    fn validate(&self, token: &str) -> Result<AuthenticatedAccount, AuthError> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken,
                }
            })?;

        let id: AccountId = data
            .claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedAccount::new(id, data.claims.username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account() -> AuthenticatedAccount {
        AuthenticatedAccount::new(AccountId::new(), "alice")
    }

    #[test]
    fn issued_token_validates_back_to_the_same_account() {
        let service = JwtTokenService::new("test-secret", 3600);
        let account = test_account();

        let issued = service.issue(&account).unwrap();
        let validated = service.validate(&issued.token).unwrap();

        assert_eq!(validated, account);
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let issuer = JwtTokenService::new("secret-one", 3600);
        let validator = JwtTokenService::new("secret-two", 3600);

        let issued = issuer.issue(&test_account()).unwrap();
        let result = validator.validate(&issued.token);

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn garbage_token_is_invalid() {
        let service = JwtTokenService::new("test-secret", 3600);
        assert!(matches!(
            service.validate("not.a.jwt"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn expiry_is_ttl_from_now() {
        let service = JwtTokenService::new("test-secret", 3600);
        let before = Utc::now();
        let issued = service.issue(&test_account()).unwrap();

        let expires = *issued.expires_at.as_datetime();
        assert!(expires >= before + Duration::seconds(3595));
        assert!(expires <= Utc::now() + Duration::seconds(3605));
    }
}
