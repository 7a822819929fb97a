//! Ledger HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::LedgerHandlers;
pub use routes::ledger_routes;
