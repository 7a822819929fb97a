//! Account module - tenant accounts and their credential lifecycle.

mod aggregate;
mod errors;

pub use aggregate::{Account, MAX_USERNAME_LENGTH};
pub use errors::AccountError;
