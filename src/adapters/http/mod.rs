//! HTTP adapters - the JSON API surface.
//!
//! Each feature has its own `routes`/`handlers`/`dto` modules; this
//! module composes them into the application router.

pub mod auth;
pub mod error;
pub mod family;
pub mod herd;
pub mod ledger;
pub mod middleware;
pub mod parse;
pub mod reports;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use auth::{auth_routes, AuthHandlers};
pub use error::ErrorResponse;
pub use family::{family_routes, FamilyHandlers};
pub use herd::{herd_routes, HerdHandlers};
pub use ledger::{ledger_routes, LedgerHandlers};
pub use middleware::{auth_middleware, AuthState, RequireAccount};
pub use reports::{report_routes, ReportHandlers};

/// Composes the full application router.
///
/// The auth middleware runs on every route; it only rejects invalid
/// tokens. Public endpoints (signup, login, health) simply never ask for
/// the authenticated account.
pub fn api_router(
    auth: AuthHandlers,
    family: FamilyHandlers,
    ledger: LedgerHandlers,
    herd: HerdHandlers,
    reports: ReportHandlers,
    validator: AuthState,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes(auth))
        .nest("/api/families", family_routes(family))
        .nest("/api", ledger_routes(ledger))
        .nest("/api", herd_routes(herd))
        .nest("/api", report_routes(reports))
        .layer(axum::middleware::from_fn_with_state(
            validator,
            auth_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// GET /health - liveness probe.
async fn health() -> StatusCode {
    StatusCode::OK
}
