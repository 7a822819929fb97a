//! Cow aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, CowId, OwnedByAccount, Timestamp, ValidationError};

/// Maximum length for a cow's name.
pub const MAX_NAME_LENGTH: usize = 100;

/// A cow in the herd.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cow {
    id: CowId,
    owner_id: AccountId,
    name: String,
    age_years: u32,
    created_at: Timestamp,
}

impl Cow {
    /// Creates a new cow.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is empty
    /// - `InvalidFormat` if name exceeds the length limit
    pub fn new(
        id: CowId,
        owner_id: AccountId,
        name: String,
        age_years: u32,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be at most {} characters", MAX_NAME_LENGTH),
            ));
        }

        Ok(Self {
            id,
            owner_id,
            name,
            age_years,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes a cow from persistence (no validation).
    pub fn reconstitute(
        id: CowId,
        owner_id: AccountId,
        name: String,
        age_years: u32,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            age_years,
            created_at,
        }
    }

    /// Returns the cow ID.
    pub fn id(&self) -> CowId {
        self.id
    }

    /// Returns the cow's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cow's age in years.
    pub fn age_years(&self) -> u32 {
        self.age_years
    }

    /// Returns when the cow was registered.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl OwnedByAccount for Cow {
    fn owner_id(&self) -> AccountId {
        self.owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cow_stores_name_and_age() {
        let cow = Cow::new(CowId::new(), AccountId::new(), "Bessie".to_string(), 4).unwrap();
        assert_eq!(cow.name(), "Bessie");
        assert_eq!(cow.age_years(), 4);
    }

    #[test]
    fn new_cow_rejects_empty_name() {
        assert!(Cow::new(CowId::new(), AccountId::new(), "".to_string(), 4).is_err());
    }

    #[test]
    fn cow_knows_its_owner() {
        let owner = AccountId::new();
        let cow = Cow::new(CowId::new(), owner, "Bessie".to_string(), 4).unwrap();
        assert!(cow.is_owned_by(owner));
    }
}
