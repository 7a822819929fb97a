//! ListFamiliesHandler - the owner's families.

use std::sync::Arc;

use crate::domain::family::{Family, FamilyError};
use crate::domain::foundation::AccountId;
use crate::ports::FamilyRepository;

/// Query for the owner's family list.
#[derive(Debug, Clone)]
pub struct ListFamiliesQuery {
    pub owner: AccountId,
}

/// Handler for listing families.
pub struct ListFamiliesHandler {
    families: Arc<dyn FamilyRepository>,
}

impl ListFamiliesHandler {
    pub fn new(families: Arc<dyn FamilyRepository>) -> Self {
        Self { families }
    }

    pub async fn handle(&self, query: ListFamiliesQuery) -> Result<Vec<Family>, FamilyError> {
        self.families.list(query.owner).await
    }
}
