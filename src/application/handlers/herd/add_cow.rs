//! AddCowHandler - registers a cow in the herd.

use std::sync::Arc;

use crate::domain::foundation::{AccountId, CowId};
use crate::domain::herd::{Cow, HerdError};
use crate::ports::HerdRepository;

/// Command to add a cow.
#[derive(Debug, Clone)]
pub struct AddCowCommand {
    pub owner: AccountId,
    pub name: String,
    pub age_years: u32,
}

/// Handler for cow registration.
pub struct AddCowHandler {
    herd: Arc<dyn HerdRepository>,
}

impl AddCowHandler {
    pub fn new(herd: Arc<dyn HerdRepository>) -> Self {
        Self { herd }
    }

    /// # Errors
    ///
    /// - `Validation` if the name is empty or too long
    pub async fn handle(&self, cmd: AddCowCommand) -> Result<Cow, HerdError> {
        let cow = Cow::new(CowId::new(), cmd.owner, cmd.name, cmd.age_years)?;
        self.herd.save_cow(&cow).await?;

        tracing::info!(cow_id = %cow.id(), "cow added");
        Ok(cow)
    }
}
