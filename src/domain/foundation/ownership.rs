//! Ownership trait for tenant-owned records.
//!
//! Every record in the ledger belongs to exactly one account. Repositories
//! scope queries by owner at the SQL level; this trait gives in-process
//! code (the in-memory adapter, tests) the same single place to ask the
//! question.
//!
//! Cross-owner access is reported as not-found, never as forbidden, so a
//! caller cannot distinguish "exists but isn't yours" from "doesn't exist".

use super::AccountId;

/// Trait for records owned by a single account.
pub trait OwnedByAccount {
    /// Returns the ID of the owning account.
    fn owner_id(&self) -> AccountId;

    /// Checks whether the given account owns this record.
    fn is_owned_by(&self, account_id: AccountId) -> bool {
        self.owner_id() == account_id
    }
}
