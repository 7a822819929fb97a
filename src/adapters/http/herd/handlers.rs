//! HTTP handlers for herd endpoints.

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
use crate::application::handlers::herd::{
    AddCowCommand, AddCowHandler, ListCowsHandler, ListCowsQuery, LogFeedCommand, LogFeedHandler,
    LogMilkCommand, LogMilkHandler,
};
use crate::domain::herd::{FeedType, HerdError};

use super::dto::{
    AddCowRequest, CowListResponse, CowResponse, FeedRecordResponse, LogFeedRequest,
    LogMilkRequest, MilkRecordResponse,
};

/// Router state for the herd endpoints.
#[derive(Clone)]
pub struct HerdHandlers {
    add_cow: Arc<AddCowHandler>,
    list_cows: Arc<ListCowsHandler>,
    log_milk: Arc<LogMilkHandler>,
    log_feed: Arc<LogFeedHandler>,
}

impl HerdHandlers {
    pub fn new(
        add_cow: Arc<AddCowHandler>,
        list_cows: Arc<ListCowsHandler>,
        log_milk: Arc<LogMilkHandler>,
        log_feed: Arc<LogFeedHandler>,
    ) -> Self {
        Self {
            add_cow,
            list_cows,
            log_milk,
            log_feed,
        }
    }
}

/// POST /api/cows - add a cow
pub async fn add_cow(
    State(handlers): State<HerdHandlers>,
    RequireAccount(account): RequireAccount,
    Json(req): Json<AddCowRequest>,
) -> Response {
    let cmd = AddCowCommand {
        owner: account.id,
        name: req.name,
        age_years: req.age_years,
    };

    match handlers.add_cow.handle(cmd).await {
        Ok(cow) => (StatusCode::CREATED, Json(CowResponse::from(&cow))).into_response(),
        Err(e) => handle_herd_error(e),
    }
}

/// GET /api/cows - list the owner's cows
pub async fn list_cows(
    State(handlers): State<HerdHandlers>,
    RequireAccount(account): RequireAccount,
) -> Response {
    let query = ListCowsQuery { owner: account.id };

    match handlers.list_cows.handle(query).await {
        Ok(cows) => {
            let response = CowListResponse {
                items: cows.iter().map(CowResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_herd_error(e),
    }
}

/// POST /api/milk-records - log milk production
pub async fn log_milk(
    State(handlers): State<HerdHandlers>,
    RequireAccount(account): RequireAccount,
    Json(req): Json<LogMilkRequest>,
) -> Response {
    let cow_id = match parse_id("cow_id", &req.cow_id) {
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

    let cmd = LogMilkCommand {
        owner: account.id,
        cow_id,
        date,
        liters,
    };

    match handlers.log_milk.handle(cmd).await {
        Ok(record) => {
            (StatusCode::CREATED, Json(MilkRecordResponse::from(&record))).into_response()
        }
        Err(e) => handle_herd_error(e),
    }
}

/// POST /api/feed-records - log feed consumption
pub async fn log_feed(
    State(handlers): State<HerdHandlers>,
    RequireAccount(account): RequireAccount,
    Json(req): Json<LogFeedRequest>,
) -> Response {
    let cow_id = match parse_id("cow_id", &req.cow_id) {
        Ok(id) => id,
        Err(e) => return invalid(e),
    };
    let date = match parse_date("date", &req.date) {
        Ok(date) => date,
        Err(e) => return invalid(e),
    };
    let feed_type = match FeedType::parse(&req.feed_type) {
        Some(feed_type) => feed_type,
        None => {
            return invalid(ErrorResponse::bad_request(format!(
                "Unknown feed type: {}",
                req.feed_type
            )))
        }
    };
    let amount_kg = match parse_decimal("amount_kg", &req.amount_kg) {
        Ok(amount) => amount,
        Err(e) => return invalid(e),
    };

    let cmd = LogFeedCommand {
        owner: account.id,
        cow_id,
        date,
        feed_type,
        amount_kg,
    };

    match handlers.log_feed.handle(cmd).await {
        Ok(record) => {
            (StatusCode::CREATED, Json(FeedRecordResponse::from(&record))).into_response()
        }
        Err(e) => handle_herd_error(e),
    }
}

fn invalid(error: ErrorResponse) -> Response {
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

fn handle_herd_error(error: HerdError) -> Response {
    match error {
        HerdError::CowNotFound(_) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found("Cow"))).into_response()
        }
        HerdError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        HerdError::Database(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
