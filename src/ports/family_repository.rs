//! Family repository port.
//!
//! Every accessor takes the owning `AccountId`, so the tenant filter is
//! composed exactly once, here, rather than at each call site.

use async_trait::async_trait;

use crate::domain::family::{Family, FamilyError};
use crate::domain::foundation::{AccountId, FamilyId};

/// Repository port for family persistence.
#[async_trait]
pub trait FamilyRepository: Send + Sync {
    /// Saves a new family.
    ///
    /// # Errors
    ///
    /// - `Database` on persistence failure
    async fn save(&self, family: &Family) -> Result<(), FamilyError>;

    /// Finds one of the owner's families by ID.
    ///
    /// Returns `None` for an absent id AND for another owner's id; the
    /// two are indistinguishable by design.
    async fn find(&self, owner: AccountId, id: FamilyId) -> Result<Option<Family>, FamilyError>;

    /// Lists the owner's families, ordered by name.
    async fn list(&self, owner: AccountId) -> Result<Vec<Family>, FamilyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn FamilyRepository) {}
    }
}
