//! ListExpensesHandler - the owner's expenses with their running total.

use std::sync::Arc;

use crate::domain::foundation::AccountId;
use crate::domain::reports::{ExpenseReport, ReportError};
use crate::ports::ReportReader;

/// Query for the owner's expense report.
#[derive(Debug, Clone)]
pub struct ListExpensesQuery {
    pub owner: AccountId,
}

/// Handler for the expense list view.
pub struct ListExpensesHandler {
    reports: Arc<dyn ReportReader>,
}

impl ListExpensesHandler {
    pub fn new(reports: Arc<dyn ReportReader>) -> Self {
        Self { reports }
    }

    pub async fn handle(&self, query: ListExpensesQuery) -> Result<ExpenseReport, ReportError> {
        self.reports.expense_report(query.owner).await
    }
}
