//! Report handlers: dashboard totals and outstanding balances.

mod get_dashboard;
mod list_outstanding;

pub use get_dashboard::{GetDashboardHandler, GetDashboardQuery};
pub use list_outstanding::{ListOutstandingHandler, ListOutstandingQuery};
