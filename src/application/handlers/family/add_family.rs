//! AddFamilyHandler - registers a milk customer family.

use std::sync::Arc;

use crate::domain::family::{Family, FamilyError};
use crate::domain::foundation::{AccountId, FamilyId};
use crate::ports::FamilyRepository;

/// Command to add a family.
#[derive(Debug, Clone)]
pub struct AddFamilyCommand {
    pub owner: AccountId,
    pub name: String,
    pub address: Option<String>,
}

/// Handler for family registration.
pub struct AddFamilyHandler {
    families: Arc<dyn FamilyRepository>,
}

impl AddFamilyHandler {
    pub fn new(families: Arc<dyn FamilyRepository>) -> Self {
        Self { families }
    }

    /// # Errors
    ///
    /// - `Validation` if the name is empty or too long
    pub async fn handle(&self, cmd: AddFamilyCommand) -> Result<Family, FamilyError> {
        let family = Family::new(FamilyId::new(), cmd.owner, cmd.name, cmd.address)?;
        self.families.save(&family).await?;

        tracing::info!(family_id = %family.id(), "family added");
        Ok(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;

    #[tokio::test]
    async fn adds_family_without_address() {
        let store = MemoryStore::new();
        let owner = AccountId::new();
        let handler = AddFamilyHandler::new(Arc::new(store.clone()));

        let family = handler
            .handle(AddFamilyCommand {
                owner,
                name: "Smith".to_string(),
                address: None,
            })
            .await
            .unwrap();

        assert_eq!(family.name(), "Smith");
        let listed = store.list(owner).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let store = MemoryStore::new();
        let handler = AddFamilyHandler::new(Arc::new(store));

        let result = handler
            .handle(AddFamilyCommand {
                owner: AccountId::new(),
                name: String::new(),
                address: None,
            })
            .await;

        assert!(matches!(result, Err(FamilyError::Validation(_))));
    }
}
