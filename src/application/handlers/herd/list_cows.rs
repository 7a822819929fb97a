//! ListCowsHandler - the owner's herd.

use std::sync::Arc;

use crate::domain::foundation::AccountId;
use crate::domain::herd::{Cow, HerdError};
use crate::ports::HerdRepository;

/// Query for the owner's cow list.
#[derive(Debug, Clone)]
pub struct ListCowsQuery {
    pub owner: AccountId,
}

/// Handler for listing cows.
pub struct ListCowsHandler {
    herd: Arc<dyn HerdRepository>,
}

impl ListCowsHandler {
    pub fn new(herd: Arc<dyn HerdRepository>) -> Self {
        Self { herd }
    }

    pub async fn handle(&self, query: ListCowsQuery) -> Result<Vec<Cow>, HerdError> {
        self.herd.list_cows(query.owner).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::application::handlers::herd::{AddCowCommand, AddCowHandler};

    #[tokio::test]
    async fn lists_only_the_owners_cows() {
        let store = MemoryStore::new();
        let owner_a = AccountId::new();
        let owner_b = AccountId::new();
        let add = AddCowHandler::new(Arc::new(store.clone()));

        for (owner, name) in [(owner_a, "Bessie"), (owner_b, "Daisy")] {
            add.handle(AddCowCommand {
                owner,
                name: name.to_string(),
                age_years: 3,
            })
            .await
            .unwrap();
        }

        let cows = ListCowsHandler::new(Arc::new(store))
            .handle(ListCowsQuery { owner: owner_a })
            .await
            .unwrap();

        assert_eq!(cows.len(), 1);
        assert_eq!(cows[0].name(), "Bessie");
    }
}
