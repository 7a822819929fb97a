//! Herd repository port - cows, milk records, and feed records.

use async_trait::async_trait;

use crate::domain::foundation::{AccountId, CowId};
use crate::domain::herd::{Cow, FeedRecord, HerdError, MilkRecord};

/// Repository port for herd persistence.
#[async_trait]
pub trait HerdRepository: Send + Sync {
    /// Saves a new cow.
    async fn save_cow(&self, cow: &Cow) -> Result<(), HerdError>;

    /// Finds one of the owner's cows by ID.
    ///
    /// Returns `None` for an absent id and for another owner's id alike.
    async fn find_cow(&self, owner: AccountId, id: CowId) -> Result<Option<Cow>, HerdError>;

    /// Lists the owner's cows, ordered by name.
    async fn list_cows(&self, owner: AccountId) -> Result<Vec<Cow>, HerdError>;

    /// Appends a milk production record.
    async fn save_milk_record(&self, record: &MilkRecord) -> Result<(), HerdError>;

    /// Appends a feed consumption record.
    async fn save_feed_record(&self, record: &FeedRecord) -> Result<(), HerdError>;
}
