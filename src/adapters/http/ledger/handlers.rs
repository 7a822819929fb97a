//! HTTP handlers for ledger endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAccount;
use crate::adapters::http::parse::{parse_date, parse_decimal, parse_id};
use crate::application::handlers::ledger::{
    ListExpensesHandler, ListExpensesQuery, LogDistributionCommand, LogDistributionHandler,
    LogExpenseCommand, LogExpenseHandler, RecordPaymentCommand, RecordPaymentHandler,
};
use crate::domain::ledger::{ExpenseCategory, LedgerError};

use super::dto::{
    DistributionResponse, ExpenseListResponse, ExpenseResponse, LogDistributionRequest,
    LogExpenseRequest, PaymentResponse, RecordPaymentRequest,
};

/// Router state for the ledger endpoints.
#[derive(Clone)]
pub struct LedgerHandlers {
    log_distribution: Arc<LogDistributionHandler>,
    record_payment: Arc<RecordPaymentHandler>,
    log_expense: Arc<LogExpenseHandler>,
    list_expenses: Arc<ListExpensesHandler>,
}

impl LedgerHandlers {
    pub fn new(
        log_distribution: Arc<LogDistributionHandler>,
        record_payment: Arc<RecordPaymentHandler>,
        log_expense: Arc<LogExpenseHandler>,
        list_expenses: Arc<ListExpensesHandler>,
    ) -> Self {
        Self {
            log_distribution,
            record_payment,
            log_expense,
            list_expenses,
        }
    }
}

/// POST /api/distributions - log a milk delivery
pub async fn log_distribution(
    State(handlers): State<LedgerHandlers>,
    RequireAccount(account): RequireAccount,
    Json(req): Json<LogDistributionRequest>,
) -> Response {
    let family_id = match parse_id("family_id", &req.family_id) {
        Ok(id) => id,
        Err(e) => return invalid(e),
    };
    let date = match parse_date("date", &req.date) {
        Ok(date) => date,
        Err(e) => return invalid(e),
    };
    let liters = match parse_decimal("liters", &req.liters) {
        Ok(liters) => liters,
        Err(e) => return invalid(e),
    };
    let amount = match parse_decimal("amount", &req.amount) {
        Ok(amount) => amount,
        Err(e) => return invalid(e),
    };

    let cmd = LogDistributionCommand {
        owner: account.id,
        family_id,
        date,
        liters,
        amount,
    };

    match handlers.log_distribution.handle(cmd).await {
        Ok(distribution) => (
            StatusCode::CREATED,
            Json(DistributionResponse::from(&distribution)),
        )
            .into_response(),
        Err(e) => handle_ledger_error(e),
    }
}

/// POST /api/payments - record a payment received
pub async fn record_payment(
    State(handlers): State<LedgerHandlers>,
    RequireAccount(account): RequireAccount,
    Json(req): Json<RecordPaymentRequest>,
) -> Response {
    let family_id = match parse_id("family_id", &req.family_id) {
        Ok(id) => id,
        Err(e) => return invalid(e),
    };
    let date = match parse_date("date", &req.date) {
        Ok(date) => date,
        Err(e) => return invalid(e),
    };
    let amount_paid = match parse_decimal("amount_paid", &req.amount_paid) {
        Ok(amount) => amount,
        Err(e) => return invalid(e),
    };

    let cmd = RecordPaymentCommand {
        owner: account.id,
        family_id,
        date,
        amount_paid,
    };

    match handlers.record_payment.handle(cmd).await {
        Ok(payment) => {
            (StatusCode::CREATED, Json(PaymentResponse::from(&payment))).into_response()
        }
        Err(e) => handle_ledger_error(e),
    }
}

/// POST /api/expenses - log a farm expense
pub async fn log_expense(
    State(handlers): State<LedgerHandlers>,
    RequireAccount(account): RequireAccount,
    Json(req): Json<LogExpenseRequest>,
) -> Response {
    let category = match ExpenseCategory::parse(&req.category) {
        Some(category) => category,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "Unknown expense category: {}",
                    req.category
                ))),
            )
                .into_response()
        }
    };
    let date = match parse_date("date", &req.date) {
        Ok(date) => date,
        Err(e) => return invalid(e),
    };
    let amount = match parse_decimal("amount", &req.amount) {
        Ok(amount) => amount,
        Err(e) => return invalid(e),
    };

    let cmd = LogExpenseCommand {
        owner: account.id,
        date,
        category,
        amount,
        description: req.description,
    };

    match handlers.log_expense.handle(cmd).await {
        Ok(expense) => {
            (StatusCode::CREATED, Json(ExpenseResponse::from(&expense))).into_response()
        }
        Err(e) => handle_ledger_error(e),
    }
}

/// GET /api/expenses - the owner's expense list with running total
pub async fn list_expenses(
    State(handlers): State<LedgerHandlers>,
    RequireAccount(account): RequireAccount,
) -> Response {
    let query = ListExpensesQuery { owner: account.id };

    match handlers.list_expenses.handle(query).await {
        Ok(report) => (StatusCode::OK, Json(ExpenseListResponse::from(report))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(e.to_string())),
        )
            .into_response(),
    }
}

fn invalid(error: ErrorResponse) -> Response {
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

fn handle_ledger_error(error: LedgerError) -> Response {
    match error {
        LedgerError::FamilyNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Family")),
        )
            .into_response(),
        LedgerError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        LedgerError::Database(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{FamilyId, ValidationError};

    #[test]
    fn family_not_found_maps_to_404() {
        let response = handle_ledger_error(LedgerError::FamilyNotFound(FamilyId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = handle_ledger_error(LedgerError::Validation(
            ValidationError::negative_magnitude("amount", "-1"),
        ));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_maps_to_500() {
        let response = handle_ledger_error(LedgerError::Database("boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
