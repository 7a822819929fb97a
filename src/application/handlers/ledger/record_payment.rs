//! RecordPaymentHandler - appends a payment received from a family.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{AccountId, FamilyId, Money, PaymentId};
use crate::domain::ledger::{LedgerError, Payment};
use crate::ports::{FamilyRepository, LedgerRepository};

/// Command to record a payment.
#[derive(Debug, Clone)]
pub struct RecordPaymentCommand {
    pub owner: AccountId,
    pub family_id: FamilyId,
    pub date: NaiveDate,
    pub amount_paid: Decimal,
}

/// Handler for payment recording.
pub struct RecordPaymentHandler {
    families: Arc<dyn FamilyRepository>,
    ledger: Arc<dyn LedgerRepository>,
}

impl RecordPaymentHandler {
    pub fn new(families: Arc<dyn FamilyRepository>, ledger: Arc<dyn LedgerRepository>) -> Self {
        Self { families, ledger }
    }

    /// # Errors
    ///
    /// - `Validation` if the amount is negative
    /// - `FamilyNotFound` if the family is absent or another owner's
    pub async fn handle(&self, cmd: RecordPaymentCommand) -> Result<Payment, LedgerError> {
        let amount_paid = Money::new(cmd.amount_paid)?;

        self.families
            .find(cmd.owner, cmd.family_id)
            .await
            .map_err(|e| LedgerError::Database(e.to_string()))?
            .ok_or(LedgerError::FamilyNotFound(cmd.family_id))?;

        let payment = Payment::new(
            PaymentId::new(),
            cmd.owner,
            cmd.family_id,
            cmd.date,
            amount_paid,
        );
        self.ledger.save_payment(&payment).await?;

        tracing::info!(
            payment_id = %payment.id(),
            family_id = %cmd.family_id,
            "payment recorded"
        );
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::application::handlers::family::{AddFamilyCommand, AddFamilyHandler};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn records_payment_for_owned_family() {
        let store = MemoryStore::new();
        let owner = AccountId::new();
        let family_id = AddFamilyHandler::new(Arc::new(store.clone()))
            .handle(AddFamilyCommand {
                owner,
                name: "Smith".to_string(),
                address: None,
            })
            .await
            .unwrap()
            .id();

        let payment = RecordPaymentHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
            .handle(RecordPaymentCommand {
                owner,
                family_id,
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                amount_paid: dec("10.00"),
            })
            .await
            .unwrap();

        assert_eq!(payment.amount_paid().amount(), dec("10.00"));
    }

    #[tokio::test]
    async fn nonexistent_family_fails_and_persists_nothing() {
        let store = MemoryStore::new();
        let owner = AccountId::new();
        let missing = FamilyId::new();

        let result = RecordPaymentHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
            .handle(RecordPaymentCommand {
                owner,
                family_id: missing,
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                amount_paid: dec("10.00"),
            })
            .await;

        assert!(matches!(result, Err(LedgerError::FamilyNotFound(_))));
        let stored = store.payments_for_family(owner, missing).await.unwrap();
        assert!(stored.is_empty());
    }
}
