//! GetFamilyStatementHandler - the family detail view with its balance.

use std::sync::Arc;

use crate::domain::foundation::{AccountId, FamilyId};
use crate::domain::reports::{FamilyStatement, ReportError};
use crate::ports::ReportReader;

/// Query for one family's statement.
#[derive(Debug, Clone)]
pub struct GetFamilyStatementQuery {
    pub owner: AccountId,
    pub family_id: FamilyId,
}

/// Handler for the family statement view.
pub struct GetFamilyStatementHandler {
    reports: Arc<dyn ReportReader>,
}

impl GetFamilyStatementHandler {
    pub fn new(reports: Arc<dyn ReportReader>) -> Self {
        Self { reports }
    }

    /// # Errors
    ///
    /// - `FamilyNotFound` for an absent id or another owner's id
    pub async fn handle(
        &self,
        query: GetFamilyStatementQuery,
    ) -> Result<FamilyStatement, ReportError> {
        self.reports
            .family_statement(query.owner, query.family_id)
            .await
    }
}
