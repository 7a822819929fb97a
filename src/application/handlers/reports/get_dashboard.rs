//! GetDashboardHandler - owner-wide totals.

use std::sync::Arc;

use crate::domain::foundation::AccountId;
use crate::domain::reports::{DashboardTotals, ReportError};
use crate::ports::ReportReader;

/// Query for the dashboard totals.
#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub owner: AccountId,
}

/// Handler for the dashboard view.
pub struct GetDashboardHandler {
    reports: Arc<dyn ReportReader>,
}

impl GetDashboardHandler {
    pub fn new(reports: Arc<dyn ReportReader>) -> Self {
        Self { reports }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<DashboardTotals, ReportError> {
        self.reports.dashboard_totals(query.owner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::application::handlers::family::{AddFamilyCommand, AddFamilyHandler};
    use crate::application::handlers::ledger::{
        LogDistributionCommand, LogDistributionHandler, LogExpenseCommand, LogExpenseHandler,
    };
    use crate::domain::ledger::ExpenseCategory;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn empty_owner_gets_all_zero_totals() {
        let store = MemoryStore::new();
        let totals = GetDashboardHandler::new(Arc::new(store))
            .handle(GetDashboardQuery {
                owner: AccountId::new(),
            })
            .await
            .unwrap();

        assert_eq!(totals, DashboardTotals::zero());
    }

    #[tokio::test]
    async fn profit_reflects_revenue_minus_expenses() {
        let store = MemoryStore::new();
        let owner = AccountId::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let family_id = AddFamilyHandler::new(Arc::new(store.clone()))
            .handle(AddFamilyCommand {
                owner,
                name: "Smith".to_string(),
                address: None,
            })
            .await
            .unwrap()
            .id();
        LogDistributionHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
            .handle(LogDistributionCommand {
                owner,
                family_id,
                date,
                liters: dec("10"),
                amount: dec("15.00"),
            })
            .await
            .unwrap();
        LogExpenseHandler::new(Arc::new(store.clone()))
            .handle(LogExpenseCommand {
                owner,
                date,
                category: ExpenseCategory::Feed,
                amount: dec("4.00"),
                description: None,
            })
            .await
            .unwrap();

        let totals = GetDashboardHandler::new(Arc::new(store))
            .handle(GetDashboardQuery { owner })
            .await
            .unwrap();

        assert_eq!(totals.total_revenue.amount(), dec("15.00"));
        assert_eq!(totals.total_expenses.amount(), dec("4.00"));
        assert_eq!(totals.profit, dec("11.00"));
    }
}
