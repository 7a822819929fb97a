//! HTTP handlers for family endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAccount;
use crate::adapters::http::parse::parse_id;
use crate::application::handlers::family::{
    AddFamilyCommand, AddFamilyHandler, GetFamilyStatementHandler, GetFamilyStatementQuery,
    ListFamiliesHandler, ListFamiliesQuery,
};
use crate::domain::family::FamilyError;
use crate::domain::reports::ReportError;

use super::dto::{AddFamilyRequest, FamilyListResponse, FamilyResponse, FamilyStatementResponse};

/// Router state for the family endpoints.
#[derive(Clone)]
pub struct FamilyHandlers {
    add_family: Arc<AddFamilyHandler>,
    list_families: Arc<ListFamiliesHandler>,
    get_statement: Arc<GetFamilyStatementHandler>,
}

impl FamilyHandlers {
    pub fn new(
        add_family: Arc<AddFamilyHandler>,
        list_families: Arc<ListFamiliesHandler>,
        get_statement: Arc<GetFamilyStatementHandler>,
    ) -> Self {
        Self {
            add_family,
            list_families,
            get_statement,
        }
    }
}

/// POST /api/families - add a milk customer family
pub async fn add_family(
    State(handlers): State<FamilyHandlers>,
    RequireAccount(account): RequireAccount,
    Json(req): Json<AddFamilyRequest>,
) -> Response {
    let cmd = AddFamilyCommand {
        owner: account.id,
        name: req.name,
        address: req.address,
    };

    match handlers.add_family.handle(cmd).await {
        Ok(family) => {
            (StatusCode::CREATED, Json(FamilyResponse::from(&family))).into_response()
        }
        Err(e) => handle_family_error(e),
    }
}

/// GET /api/families - list the owner's families
pub async fn list_families(
    State(handlers): State<FamilyHandlers>,
    RequireAccount(account): RequireAccount,
) -> Response {
    let query = ListFamiliesQuery { owner: account.id };

    match handlers.list_families.handle(query).await {
        Ok(families) => {
            let response = FamilyListResponse {
                items: families.iter().map(FamilyResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_family_error(e),
    }
}

/// GET /api/families/:id - family statement (records + balance)
pub async fn get_family_statement(
    State(handlers): State<FamilyHandlers>,
    RequireAccount(account): RequireAccount,
    Path(family_id): Path<String>,
) -> Response {
    let family_id = match parse_id("family id", &family_id) {
        Ok(id) => id,
        Err(e) => return (StatusCode::BAD_REQUEST, Json(e)).into_response(),
    };

    let query = GetFamilyStatementQuery {
        owner: account.id,
        family_id,
    };

    match handlers.get_statement.handle(query).await {
        Ok(statement) => {
            (StatusCode::OK, Json(FamilyStatementResponse::from(statement))).into_response()
        }
        Err(e) => handle_report_error(e),
    }
}

fn handle_family_error(error: FamilyError) -> Response {
    match error {
        FamilyError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Family")),
        )
            .into_response(),
        FamilyError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        FamilyError::Database(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}

pub(crate) fn handle_report_error(error: ReportError) -> Response {
    match error {
        ReportError::FamilyNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Family")),
        )
            .into_response(),
        ReportError::Database(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
