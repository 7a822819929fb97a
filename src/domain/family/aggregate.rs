//! Family aggregate - a milk customer household.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AccountId, FamilyId, OwnedByAccount, Timestamp, ValidationError,
};

/// Maximum length for a family display name.
pub const MAX_NAME_LENGTH: usize = 100;

/// A milk customer family, tracked for billing and balance purposes.
///
/// # Invariants
///
/// - `name` is 1-100 characters, non-empty
/// - belongs to exactly one account, fixed at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    id: FamilyId,
    owner_id: AccountId,
    name: String,
    address: Option<String>,
    created_at: Timestamp,
}

impl Family {
    /// Creates a new family.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is empty
    /// - `InvalidFormat` if name exceeds the length limit
    pub fn new(
        id: FamilyId,
        owner_id: AccountId,
        name: String,
        address: Option<String>,
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
            address: address.filter(|a| !a.trim().is_empty()),
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes a family from persistence (no validation).
    pub fn reconstitute(
        id: FamilyId,
        owner_id: AccountId,
        name: String,
        address: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            address,
            created_at,
        }
    }

    /// Returns the family ID.
    pub fn id(&self) -> FamilyId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the delivery address, if recorded.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns when the family was added.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

impl OwnedByAccount for Family {
    fn owner_id(&self) -> AccountId {
        self.owner_id
    }
}
