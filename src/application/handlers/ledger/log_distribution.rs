//! LogDistributionHandler - appends a milk delivery to the ledger.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{AccountId, DistributionId, FamilyId, Liters, Money};
use crate::domain::ledger::{Distribution, LedgerError};
use crate::ports::{FamilyRepository, LedgerRepository};

/// Command to log a distribution.
#[derive(Debug, Clone)]
pub struct LogDistributionCommand {
    pub owner: AccountId,
    pub family_id: FamilyId,
    pub date: NaiveDate,
    pub liters: Decimal,
    pub amount: Decimal,
}

/// Handler for distribution logging.
pub struct LogDistributionHandler {
    families: Arc<dyn FamilyRepository>,
    ledger: Arc<dyn LedgerRepository>,
}

impl LogDistributionHandler {
    pub fn new(families: Arc<dyn FamilyRepository>, ledger: Arc<dyn LedgerRepository>) -> Self {
        Self { families, ledger }
    }

    /// # Errors
    ///
    /// - `Validation` if liters or amount is negative
    /// - `FamilyNotFound` if the family is absent or another owner's;
    ///   nothing is persisted in that case
    pub async fn handle(&self, cmd: LogDistributionCommand) -> Result<Distribution, LedgerError> {
        let liters = Liters::new(cmd.liters)?;
        let amount = Money::new(cmd.amount)?;

        // Owner-scoped parent check; the database foreign key is only a
        // backstop for races.
        self.families
            .find(cmd.owner, cmd.family_id)
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))?
            .ok_or(LedgerError::FamilyNotFound(cmd.family_id))?;

        let distribution = Distribution::new(
            DistributionId::new(),
            cmd.owner,
            cmd.family_id,
            cmd.date,
            liters,
            amount,
        );
        self.ledger.save_distribution(&distribution).await?;

        tracing::info!(
            distribution_id = %distribution.id(),
            family_id = %cmd.family_id,
            "distribution logged"
        );
        Ok(distribution)
    }
}
