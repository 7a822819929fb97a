//! Family HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::FamilyHandlers;
pub use routes::family_routes;
