//! Boundary parsing helpers for path/body fields that arrive as strings.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ErrorResponse;

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ErrorResponse> {
    value.parse::<NaiveDate>().map_err(|_| {
        ErrorResponse::bad_request(format!("{} must be a YYYY-MM-DD date", field))
    })
}

/// Parses a decimal magnitude.
pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal, ErrorResponse> {
    value
        .parse::<Decimal>()
        .map_err(|_| ErrorResponse::bad_request(format!("{} must be a decimal number", field)))
}

/// Parses a UUID-backed identifier.
pub fn parse_id<T>(field: &str, value: &str) -> Result<T, ErrorResponse>
where
    T: FromStr,
{
    value
        .parse::<T>()
        .map_err(|_| ErrorResponse::bad_request(format!("Invalid {}", field)))
}
