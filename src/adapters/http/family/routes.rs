//! HTTP routes for family endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_family, get_family_statement, list_families, FamilyHandlers};

/// Creates the family router.
pub fn family_routes(handlers: FamilyHandlers) -> Router {
    Router::new()
        .route("/", post(add_family))
        .route("/", get(list_families))
        .route("/:id", get(get_family_statement))
        .with_state(handlers)
}
