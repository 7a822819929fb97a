//! Payment record - money received from a family.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AccountId, FamilyId, Money, OwnedByAccount, PaymentId, Timestamp,
};

/// A record of money received from a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    id: PaymentId,
    owner_id: AccountId,
    family_id: FamilyId,
    date: NaiveDate,
    amount_paid: Money,
    created_at: Timestamp,
}

impl Payment {
    /// Creates a new payment record.
    pub fn new(
        id: PaymentId,
        owner_id: AccountId,
        family_id: FamilyId,
        date: NaiveDate,
        amount_paid: Money,
    ) -> Self {
        Self {
            id,
            owner_id,
            family_id,
            date,
            amount_paid,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a payment from persistence.
    pub fn reconstitute(
        id: PaymentId,
        owner_id: AccountId,
        family_id: FamilyId,
        date: NaiveDate,
        amount_paid: Money,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            family_id,
            date,
            amount_paid,
            created_at,
        }
    }

    /// Returns the record ID.
    pub fn id(&self) -> PaymentId {
        self.id
    }

    /// Returns the paying family.
    pub fn family_id(&self) -> FamilyId {
        self.family_id
    }

    /// Returns the payment date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the amount received.
    pub fn amount_paid(&self) -> Money {
        self.amount_paid
    }

    /// Returns when the record was written.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl OwnedByAccount for Payment {
    fn owner_id(&self) -> AccountId {
        self.owner_id
    }
}
