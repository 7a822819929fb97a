//! HTTP handlers for report endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::family::handlers::handle_report_error;
use crate::adapters::http::middleware::RequireAccount;
use crate::application::handlers::reports::{
    GetDashboardHandler, GetDashboardQuery, ListOutstandingHandler, ListOutstandingQuery,
};

use super::dto::{DashboardResponse, OutstandingFamilyResponse, OutstandingListResponse};

/// Router state for the report endpoints.
#[derive(Clone)]
pub struct ReportHandlers {
    get_dashboard: Arc<GetDashboardHandler>,
    list_outstanding: Arc<ListOutstandingHandler>,
}

impl ReportHandlers {
    pub fn new(
        get_dashboard: Arc<GetDashboardHandler>,
        list_outstanding: Arc<ListOutstandingHandler>,
    ) -> Self {
        Self {
            get_dashboard,
            list_outstanding,
        }
    }
}

/// GET /api/dashboard - owner-wide totals
pub async fn get_dashboard(
    State(handlers): State<ReportHandlers>,
    RequireAccount(account): RequireAccount,
) -> Response {
    let query = GetDashboardQuery { owner: account.id };

    match handlers.get_dashboard.handle(query).await {
        Ok(totals) => (StatusCode::OK, Json(DashboardResponse::from(totals))).into_response(),
        Err(e) => handle_report_error(e),
    }
}

/// GET /api/dashboard/outstanding - families with positive balance
pub async fn list_outstanding(
    State(handlers): State<ReportHandlers>,
    RequireAccount(account): RequireAccount,
) -> Response {
    let query = ListOutstandingQuery { owner: account.id };

    match handlers.list_outstanding.handle(query).await {
        Ok(balances) => {
            let response = OutstandingListResponse {
                items: balances
                    .iter()
                    .map(OutstandingFamilyResponse::from)
                    .collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_report_error(e),
    }
}
