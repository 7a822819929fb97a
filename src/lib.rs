//! Dairy Ledger - multi-tenant record keeping for a dairy operation.
//!
//! Tracks milk customer families, distributions and payments, farm
//! expenses, and per-cow production/consumption, with derived revenue,
//! expense, profit, and balance figures. Every record belongs to an
//! authenticated account and every query is scoped to it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
