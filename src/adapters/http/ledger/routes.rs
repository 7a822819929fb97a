//! HTTP routes for ledger endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    list_expenses, log_distribution, log_expense, record_payment, LedgerHandlers,
};

/// Creates the ledger router (distributions, payments, expenses).
pub fn ledger_routes(handlers: LedgerHandlers) -> Router {
    Router::new()
        .route("/distributions", post(log_distribution))
        .route("/payments", post(record_payment))
        .route("/expenses", post(log_expense))
        .route("/expenses", get(list_expenses))
        .with_state(handlers)
}
