//! Herd HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::HerdHandlers;
pub use routes::herd_routes;
