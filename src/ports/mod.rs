//! Ports layer - contracts between the application and its collaborators.
//!
//! Repositories and readers are implemented by the postgres adapter (and
//! an in-memory adapter for tests); auth ports by the argon2 and JWT
//! adapters.

mod account_repository;
mod family_repository;
mod herd_repository;
mod ledger_repository;
mod password_hasher;
mod report_reader;
mod token;

pub use account_repository::AccountRepository;
pub use family_repository::FamilyRepository;
pub use herd_repository::HerdRepository;
pub use ledger_repository::LedgerRepository;
pub use password_hasher::PasswordHasher;
pub use report_reader::ReportReader;
pub use token::{AccessToken, TokenIssuer, TokenValidator};
