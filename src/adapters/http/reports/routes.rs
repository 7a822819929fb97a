//! HTTP routes for report endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_dashboard, list_outstanding, ReportHandlers};

/// Creates the reports router.
pub fn report_routes(handlers: ReportHandlers) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/outstanding", get(list_outstanding))
        .with_state(handlers)
}
