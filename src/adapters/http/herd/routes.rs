//! HTTP routes for herd endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_cow, list_cows, log_feed, log_milk, HerdHandlers};

/// Creates the herd router (cows, milk records, feed records).
pub fn herd_routes(handlers: HerdHandlers) -> Router {
    Router::new()
        .route("/cows", post(add_cow))
        .route("/cows", get(list_cows))
        .route("/milk-records", post(log_milk))
        .route("/feed-records", post(log_feed))
        .with_state(handlers)
}
