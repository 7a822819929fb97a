//! HTTP routes for auth endpoints.

use axum::{
    routing::{post, put},
    Router,
};

use super::handlers::{change_password, log_in, log_out, sign_up, AuthHandlers};

/// Creates the auth router.
///
/// signup and login are public; logout and password change require an
/// authenticated account (enforced by the `RequireAccount` extractor).
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", post(log_in))
        .route("/logout", post(log_out))
        .route("/password", put(change_password))
        .with_state(handlers)
}
