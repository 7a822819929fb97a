//! Ledger repository port - distributions, payments, and expenses.

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, FamilyId};
use crate::domain::ledger::{Distribution, Expense, LedgerError, Payment};

/// Repository port for the append-only financial records.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Appends a distribution record.
    ///
    /// # Errors
    ///
    /// - `Database` on persistence failure (including a foreign-key
    ///   violation if the family vanished between check and insert)
    async fn save_distribution(&self, distribution: &Distribution) -> Result<(), LedgerError>;

    /// Appends a payment record.
    async fn save_payment(&self, payment: &Payment) -> Result<(), LedgerError>;

    /// Appends an expense record.
    async fn save_expense(&self, expense: &Expense) -> Result<(), LedgerError>;

    /// Loads all distributions to one of the owner's families.
    async fn distributions_for_family(
        &self,
        owner: AccountId,
        family_id: FamilyId,
    ) -> Result<Vec<Distribution>, LedgerError>;

    /// Loads all payments from one of the owner's families.
    async fn payments_for_family(
        &self,
        owner: AccountId,
        family_id: FamilyId,
    ) -> Result<Vec<Payment>, LedgerError>;

    /// Loads all of the owner's expenses.
    async fn list_expenses(&self, owner: AccountId) -> Result<Vec<Expense>, LedgerError>;
}
