//! ListOutstandingHandler - families that currently owe money.

use std::sync::Arc;

use crate::domain::foundation::AccountId;
use crate::domain::reports::{FamilyBalance, ReportError};
use crate::ports::ReportReader;

/// Query for the notifications view.
#[derive(Debug, Clone)]
pub struct ListOutstandingQuery {
    pub owner: AccountId,
}

/// Handler for the outstanding-balance list.
pub struct ListOutstandingHandler {
    reports: Arc<dyn ReportReader>,
}

impl ListOutstandingHandler {
    pub fn new(reports: Arc<dyn ReportReader>) -> Self {
        Self { reports }
    }

    pub async fn handle(
        &self,
        query: ListOutstandingQuery,
    ) -> Result<Vec<FamilyBalance>, ReportError> {
        self.reports.outstanding_families(query.owner).await
    }
}
