//! Ledger handlers: distributions, payments, expenses.

mod list_expenses;
mod log_distribution;
mod log_expense;
mod record_payment;

pub use list_expenses::{ListExpensesHandler, ListExpensesQuery};
pub use log_distribution::{LogDistributionCommand, LogDistributionHandler};
pub use log_expense::{LogExpenseCommand, LogExpenseHandler};
pub use record_payment::{RecordPaymentCommand, RecordPaymentHandler};
