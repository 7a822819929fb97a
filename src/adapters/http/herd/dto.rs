//! HTTP DTOs for herd endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::herd::{Cow, FeedRecord, MilkRecord};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to add a cow.
#[derive(Debug, Clone, Deserialize)]
pub struct AddCowRequest {
    pub name: String,
    pub age_years: u32,
}

/// Request to log milk production.
#[derive(Debug, Clone, Deserialize)]
pub struct LogMilkRequest {
    pub cow_id: String,
    pub date: String,
    pub liters: String,
}

/// Request to log feed consumption.
#[derive(Debug, Clone, Deserialize)]
pub struct LogFeedRequest {
    pub cow_id: String,
    pub date: String,
    pub feed_type: String,
    pub amount_kg: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Cow view.
#[derive(Debug, Clone, Serialize)]
pub struct CowResponse {
    pub id: String,
    pub name: String,
    pub age_years: u32,
    pub created_at: String,
}

impl From<&Cow> for CowResponse {
    fn from(cow: &Cow) -> Self {
        Self {
            id: cow.id().to_string(),
            name: cow.name().to_string(),
            age_years: cow.age_years(),
            created_at: cow.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// List of the owner's cows.
#[derive(Debug, Clone, Serialize)]
pub struct CowListResponse {
    pub items: Vec<CowResponse>,
}

/// Milk record view.
#[derive(Debug, Clone, Serialize)]
pub struct MilkRecordResponse {
    pub id: String,
    pub cow_id: String,
    pub date: String,
    pub liters: String,
}

impl From<&MilkRecord> for MilkRecordResponse {
    fn from(record: &MilkRecord) -> Self {
        Self {
            id: record.id().to_string(),
            cow_id: record.cow_id().to_string(),
            date: record.date().to_string(),
            liters: record.liters().value().to_string(),
        }
    }
}

/// Feed record view.
#[derive(Debug, Clone, Serialize)]
pub struct FeedRecordResponse {
    pub id: String,
    pub cow_id: String,
    pub date: String,
    pub feed_type: String,
    pub amount_kg: String,
}

impl From<&FeedRecord> for FeedRecordResponse {
    fn from(record: &FeedRecord) -> Self {
        Self {
            id: record.id().to_string(),
            cow_id: record.cow_id().to_string(),
            date: record.date().to_string(),
            feed_type: record.feed_type().as_str().to_string(),
            amount_kg: record.amount().value().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_cow_request_deserializes() {
        let json = r#"{"name": "Bessie", "age_years": 4}"#;
        let req: AddCowRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Bessie");
        assert_eq!(req.age_years, 4);
    }

    #[test]
    fn log_feed_request_deserializes() {
        let json = r#"{
            "cow_id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2024-02-10",
            "feed_type": "silage",
            "amount_kg": "7.5"
        }"#;
        let req: LogFeedRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.feed_type, "silage");
    }
}
