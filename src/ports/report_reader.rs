//! Read-only port for report queries.
//!
//! Reports are recomputed from the full underlying record set on every
//! read; volumes are small and there is deliberately no cache.

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, FamilyId};
use crate::domain::reports::{
    DashboardTotals, ExpenseReport, FamilyBalance, FamilyStatement, ReportError,
};

/// Read-only port for owner-scoped aggregate queries.
#[async_trait]
pub trait ReportReader: Send + Sync {
    /// Owner-wide totals: milk produced, revenue billed, expenses, profit.
    ///
    /// An owner with no records gets all-zero totals, not an error.
    async fn dashboard_totals(&self, owner: AccountId) -> Result<DashboardTotals, ReportError>;

    /// Full statement for one of the owner's families.
    ///
    /// # Errors
    ///
    /// - `FamilyNotFound` if the id is absent or belongs to another owner
    async fn family_statement(
        &self,
        owner: AccountId,
        family_id: FamilyId,
    ) -> Result<FamilyStatement, ReportError>;

    /// The owner's families that currently owe money (`balance > 0`).
    async fn outstanding_families(
        &self,
        owner: AccountId,
    ) -> Result<Vec<FamilyBalance>, ReportError>;

    /// The owner's expenses, newest first, with their total.
    async fn expense_report(&self, owner: AccountId) -> Result<ExpenseReport, ReportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn ReportReader) {}
    }
}
