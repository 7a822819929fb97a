//! Authentication middleware and extractor for axum.
//!
//! The middleware validates Bearer tokens through the `TokenValidator`
//! port and injects the `AuthenticatedAccount` into request extensions.
//! A missing token passes through untouched so public routes (signup,
//! login) share the same router; protected handlers enforce presence
//! with the `RequireAccount` extractor.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedAccount};
use crate::ports::TokenValidator;

/// Auth middleware state - the token validator port.
pub type AuthState = Arc<dyn TokenValidator>;

/// Validates `Authorization: Bearer <token>` headers.
///
/// - valid token: injects `AuthenticatedAccount` and continues
/// - missing token: continues without injecting
/// - invalid/expired token: 401 immediately
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match validator.validate(token) {
            Ok(account) => {
                request.extensions_mut().insert(account);
                next.run(request).await
            }
            Err(e) => {
                let message = match &e {
                    AuthError::TokenExpired => "Token expired",
                    _ => "Invalid token",
                };
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({
                        "error": message,
                        "code": "AUTH_ERROR"
                    })),
                )
                    .into_response()
            }
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated account.
///
/// Returns 401 if the auth middleware did not inject one.
#[derive(Debug, Clone)]
pub struct RequireAccount(pub AuthenticatedAccount);

impl<S> axum::extract::FromRequestParts<S> for RequireAccount
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedAccount>()
                .cloned()
                .map(RequireAccount)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid token was presented.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenValidator;
    use crate::domain::foundation::AccountId;

    fn test_account() -> AuthenticatedAccount {
        AuthenticatedAccount::new(AccountId::new(), "alice")
    }

    #[test]
    fn validator_returns_account_for_registered_token() {
        let validator: Arc<dyn TokenValidator> =
            Arc::new(MockTokenValidator::new().with_account("valid-token", test_account()));

        let result = validator.validate("valid-token");
        assert_eq!(result.unwrap().username, "alice");
    }

    #[test]
    fn validator_rejects_unknown_token() {
        let validator: Arc<dyn TokenValidator> = Arc::new(MockTokenValidator::new());
        assert!(matches!(
            validator.validate("unknown"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn require_account_extracts_from_extensions() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let mut request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(test_account());
        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAccount, AuthRejection> =
            RequireAccount::from_request_parts(&mut parts, &()).await;

        let RequireAccount(account) = result.unwrap();
        assert_eq!(account.username, "alice");
    }

    #[tokio::test]
    async fn require_account_fails_without_injection() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAccount, AuthRejection> =
            RequireAccount::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }

    #[test]
    fn auth_rejection_maps_to_401() {
        let response = AuthRejection::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bearer_prefix_extraction() {
        assert_eq!(
            "Bearer my-token".strip_prefix("Bearer "),
            Some("my-token")
        );
        assert_eq!("Basic dXNlcg==".strip_prefix("Bearer "), None);
    }
}
