//! LogExpenseHandler - appends a farm expense.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{AccountId, ExpenseId, Money};
use crate::domain::ledger::{Expense, ExpenseCategory, LedgerError};
use crate::ports::LedgerRepository;

/// Command to log an expense.
#[derive(Debug, Clone)]
pub struct LogExpenseCommand {
    pub owner: AccountId,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub description: Option<String>,
}

/// Handler for expense logging.
pub struct LogExpenseHandler {
    ledger: Arc<dyn LedgerRepository>,
}

impl LogExpenseHandler {
    pub fn new(ledger: Arc<dyn LedgerRepository>) -> Self {
        Self { ledger }
    }

    /// # Errors
    ///
    /// - `Validation` if the amount is negative
    pub async fn handle(&self, cmd: LogExpenseCommand) -> Result<Expense, LedgerError> {
        let amount = Money::new(cmd.amount)?;

        let expense = Expense::new(
            ExpenseId::new(),
            cmd.owner,
            cmd.date,
            cmd.category,
            amount,
            cmd.description,
        );
        self.ledger.save_expense(&expense).await?;

        tracing::info!(expense_id = %expense.id(), category = expense.category().as_str(), "expense logged");
        Ok(expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn logs_expense_with_category_and_description() {
        let store = MemoryStore::new();
        let owner = AccountId::new();

        let expense = LogExpenseHandler::new(Arc::new(store.clone()))
            .handle(LogExpenseCommand {
                owner,
                date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                category: ExpenseCategory::Veterinary,
                amount: dec("120.00"),
                description: Some("vaccination round".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(expense.category(), ExpenseCategory::Veterinary);
        let stored = store.list_expenses(owner).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn negative_amount_fails_validation() {
        let store = MemoryStore::new();

        let result = LogExpenseHandler::new(Arc::new(store))
            .handle(LogExpenseCommand {
                owner: AccountId::new(),
                date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                category: ExpenseCategory::Feed,
                amount: dec("-1.00"),
                description: None,
            })
            .await;

        assert!(matches!(result, Err(LedgerError::Validation(_))));
    }
}
