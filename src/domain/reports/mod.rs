//! Reports module - derived financial and production figures.
//!
//! Everything here is pure arithmetic over already-loaded records; the
//! `ReportReader` port decides where the records come from.

mod errors;
mod expense_report;
mod statement;
mod totals;

pub use errors::ReportError;
pub use expense_report::ExpenseReport;
pub use statement::{with_positive_balance, FamilyBalance, FamilyStatement};
pub use totals::DashboardTotals;
