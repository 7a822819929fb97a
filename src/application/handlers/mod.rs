//! Application command/query handlers, one per exposed operation.

pub mod account;
pub mod family;
pub mod herd;
pub mod ledger;
pub mod reports;
