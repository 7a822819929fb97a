//! Feed consumption record - feed given to a cow on a date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AccountId, CowId, FeedRecordId, Kilograms, OwnedByAccount, Timestamp,
};

/// Type of feed given to a cow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    Grass,
    Hay,
    Concentrate,
    Silage,
    Other,
}

impl FeedType {
    /// Returns the stable storage/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedType::Grass => "grass",
            FeedType::Hay => "hay",
            FeedType::Concentrate => "concentrate",
            FeedType::Silage => "silage",
            FeedType::Other => "other",
        }
    }

    /// Parses a stored feed type string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "grass" => Some(FeedType::Grass),
            "hay" => Some(FeedType::Hay),
            "concentrate" => Some(FeedType::Concentrate),
            "silage" => Some(FeedType::Silage),
            "other" => Some(FeedType::Other),
            _ => None,
        }
    }
}

/// A per-cow feed consumption entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRecord {
    id: FeedRecordId,
    owner_id: AccountId,
    cow_id: CowId,
    date: NaiveDate,
    feed_type: FeedType,
    amount: Kilograms,
    created_at: Timestamp,
}

impl FeedRecord {
    /// Creates a new feed record.
    pub fn new(
        id: FeedRecordId,
        owner_id: AccountId,
        cow_id: CowId,
        date: NaiveDate,
        feed_type: FeedType,
        amount: Kilograms,
    ) -> Self {
        Self {
            id,
            owner_id,
            cow_id,
            date,
            feed_type,
            amount,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a feed record from persistence.
    pub fn reconstitute(
        id: FeedRecordId,
        owner_id: AccountId,
        cow_id: CowId,
        date: NaiveDate,
        feed_type: FeedType,
        amount: Kilograms,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            cow_id,
            date,
            feed_type,
            amount,
            created_at,
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> FeedRecordId {
        self.id
    }

    /// Returns the fed cow.
    pub fn cow_id(&self) -> CowId {
        self.cow_id
    }

    /// Returns the feeding date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the type of feed.
    pub fn feed_type(&self) -> FeedType {
        self.feed_type
    }

    /// Returns the weight of feed given.
    pub fn amount(&self) -> Kilograms {
        self.amount
    }

    /// Returns when the record was written.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl OwnedByAccount for FeedRecord {
    fn owner_id(&self) -> AccountId {
        self.owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn feed_type_string_conversion_roundtrips() {
        for feed_type in [
            FeedType::Grass,
            FeedType::Hay,
            FeedType::Concentrate,
            FeedType::Silage,
            FeedType::Other,
        ] {
            assert_eq!(FeedType::parse(feed_type.as_str()), Some(feed_type));
        }
    }

    #[test]
    fn feed_type_parse_rejects_unknown_value() {
        assert_eq!(FeedType::parse("pellets"), None);
    }

    #[test]
    fn new_feed_record_carries_its_fields() {
        let cow_id = CowId::new();
        let record = FeedRecord::new(
            FeedRecordId::new(),
            AccountId::new(),
            cow_id,
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            FeedType::Hay,
            Kilograms::new("7.5".parse::<Decimal>().unwrap()).unwrap(),
        );
        assert_eq!(record.cow_id(), cow_id);
        assert_eq!(record.feed_type(), FeedType::Hay);
    }
}
