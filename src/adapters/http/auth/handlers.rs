//! HTTP handlers for auth endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAccount;
use crate::application::handlers::account::{
    ChangePasswordCommand, ChangePasswordHandler, LogInCommand, LogInHandler, SignUpCommand,
    SignUpHandler,
};
use crate::domain::account::AccountError;

use super::dto::{
    AccountResponse, ChangePasswordRequest, LogInRequest, MessageResponse, SignUpRequest,
    TokenResponse,
};

/// Router state for the auth endpoints.
#[derive(Clone)]
pub struct AuthHandlers {
    sign_up: Arc<SignUpHandler>,
    log_in: Arc<LogInHandler>,
    change_password: Arc<ChangePasswordHandler>,
}

impl AuthHandlers {
    pub fn new(
        sign_up: Arc<SignUpHandler>,
        log_in: Arc<LogInHandler>,
        change_password: Arc<ChangePasswordHandler>,
    ) -> Self {
        Self {
            sign_up,
            log_in,
            change_password,
        }
    }
}

/// POST /api/auth/signup - create an account
pub async fn sign_up(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<SignUpRequest>,
) -> Response {
    let cmd = SignUpCommand {
        username: req.username,
        password: req.password,
    };

    match handlers.sign_up.handle(cmd).await {
        Ok(account) => {
            (StatusCode::CREATED, Json(AccountResponse::from(&account))).into_response()
        }
        Err(e) => handle_account_error(e),
    }
}

/// POST /api/auth/login - verify credentials, issue a token
pub async fn log_in(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LogInRequest>,
) -> Response {
    let cmd = LogInCommand {
        username: req.username,
        password: req.password,
    };

    match handlers.log_in.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(TokenResponse::from(result.token))).into_response(),
        Err(e) => handle_account_error(e),
    }
}

/// POST /api/auth/logout - end the session
///
/// Tokens are stateless; the server has nothing to revoke. The endpoint
/// confirms the client should discard its token.
pub async fn log_out(RequireAccount(account): RequireAccount) -> Response {
    tracing::info!(account_id = %account.id, "logout");
    StatusCode::NO_CONTENT.into_response()
}

/// PUT /api/auth/password - replace the current account's password
pub async fn change_password(
    State(handlers): State<AuthHandlers>,
    RequireAccount(account): RequireAccount,
    Json(req): Json<ChangePasswordRequest>,
) -> Response {
    if req.password != req.confirm {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Passwords must match")),
        )
            .into_response();
    }

    let cmd = ChangePasswordCommand {
        account_id: account.id,
        new_password: req.password,
    };

    match handlers.change_password.handle(cmd).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Password changed successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_account_error(e),
    }
}

fn handle_account_error(error: AccountError) -> Response {
    match error {
        AccountError::UsernameTaken => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict("Username is already taken")),
        )
            .into_response(),
        AccountError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Account")),
        )
            .into_response(),
        AccountError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        AccountError::Auth(e) if e.is_unauthorized() => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized("Invalid username or password")),
        )
            .into_response(),
        AccountError::Auth(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(e.to_string())),
        )
            .into_response(),
        AccountError::Database(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
