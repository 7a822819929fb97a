//! Milk production record - liters produced by a cow on a date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AccountId, CowId, Liters, MilkRecordId, OwnedByAccount, Timestamp,
};

/// A per-cow milk production entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilkRecord {
    id: MilkRecordId,
    owner_id: AccountId,
    cow_id: CowId,
    date: NaiveDate,
    liters: Liters,
    created_at: Timestamp,
}

impl MilkRecord {
    /// Creates a new milk record.
    pub fn new(
        id: MilkRecordId,
        owner_id: AccountId,
        cow_id: CowId,
        date: NaiveDate,
        liters: Liters,
    ) -> Self {
        Self {
            id,
            owner_id,
            cow_id,
            date,
            liters,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a milk record from persistence.
    pub fn reconstitute(
        id: MilkRecordId,
        owner_id: AccountId,
        cow_id: CowId,
        date: NaiveDate,
        liters: Liters,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            cow_id,
            date,
            liters,
            created_at,
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> MilkRecordId {
        self.id
    }

    /// Returns the producing cow.
    pub fn cow_id(&self) -> CowId {
        self.cow_id
    }

    /// Returns the production date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the volume produced.
    pub fn liters(&self) -> Liters {
        self.liters
    }

    /// Returns when the record was written.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl OwnedByAccount for MilkRecord {
    fn owner_id(&self) -> AccountId {
        self.owner_id
    }
}
