//! Reports HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ReportHandlers;
pub use routes::report_routes;
