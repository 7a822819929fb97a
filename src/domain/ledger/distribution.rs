//! Distribution record - milk delivered to a family and the amount billed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AccountId, DistributionId, FamilyId, Liters, Money, OwnedByAccount, Timestamp,
};

/// A record of milk delivered to a family.
///
/// Append-only: once written it is never updated or deleted. Corrections
/// are expressed as offsetting payment entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    id: DistributionId,
    owner_id: AccountId,
    family_id: FamilyId,
    date: NaiveDate,
    liters: Liters,
    amount: Money,
    created_at: Timestamp,
}

impl Distribution {
    /// Creates a new distribution record.
    ///
    /// The magnitudes arrive as already-validated value objects; the
    /// family reference is checked against the owner's families by the
    /// application handler before this record is persisted.
    pub fn new(
        id: DistributionId,
        owner_id: AccountId,
        family_id: FamilyId,
        date: NaiveDate,
        liters: Liters,
        amount: Money,
    ) -> Self {
        Self {
            id,
            owner_id,
            family_id,
            date,
            liters,
            amount,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a distribution from persistence.
    pub fn reconstitute(
        id: DistributionId,
        owner_id: AccountId,
        family_id: FamilyId,
        date: NaiveDate,
        liters: Liters,
        amount: Money,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            family_id,
            date,
            liters,
            amount,
            created_at,
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> DistributionId {
        self.id
    }

    /// Returns the family this milk was delivered to.
    pub fn family_id(&self) -> FamilyId {
        self.family_id
    }

    /// Returns the delivery date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the volume delivered.
    pub fn liters(&self) -> Liters {
        self.liters
    }

    /// Returns the amount billed.
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Returns when the record was written.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl OwnedByAccount for Distribution {
    fn owner_id(&self) -> AccountId {
        self.owner_id
    }
}
