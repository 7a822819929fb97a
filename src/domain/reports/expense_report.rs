//! Expense listing with its running total.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::ledger::Expense;

/// The owner's expenses, newest first, with their total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseReport {
    pub expenses: Vec<Expense>,
    pub total: Money,
}

impl ExpenseReport {
    /// Assembles the report from raw expense records.
    pub fn from_records(mut expenses: Vec<Expense>) -> Self {
        expenses.sort_by(|a, b| b.date().cmp(&a.date()));
        let total: Money = expenses.iter().map(|e| e.amount()).sum();
        Self { expenses, total }
    }
}
