//! PostgreSQL adapters - sqlx implementations of the persistence ports.

mod account_repository;
mod family_repository;
mod herd_repository;
mod ledger_repository;
mod report_reader;

pub use account_repository::PostgresAccountRepository;
pub use family_repository::PostgresFamilyRepository;
pub use herd_repository::PostgresHerdRepository;
pub use ledger_repository::PostgresLedgerRepository;
pub use report_reader::PostgresReportReader;
