//! Ledger module - the financial record types: milk distributions,
//! payments received, and farm expenses.

mod distribution;
mod errors;
mod expense;
mod payment;

pub use distribution::Distribution;
pub use errors::LedgerError;
pub use expense::{Expense, ExpenseCategory};
pub use payment::Payment;
