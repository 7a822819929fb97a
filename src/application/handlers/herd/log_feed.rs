//! LogFeedHandler - appends a per-cow feed consumption record.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{AccountId, CowId, FeedRecordId, Kilograms};
use crate::domain::herd::{FeedRecord, FeedType, HerdError};
use crate::ports::HerdRepository;

/// Command to log feed consumption.
#[derive(Debug, Clone)]
pub struct LogFeedCommand {
    pub owner: AccountId,
    pub cow_id: CowId,
    pub date: NaiveDate,
    pub feed_type: FeedType,
    pub amount_kg: Decimal,
}

/// Handler for feed logging.
pub struct LogFeedHandler {
    herd: Arc<dyn HerdRepository>,
}

impl LogFeedHandler {
    pub fn new(herd: Arc<dyn HerdRepository>) -> Self {
        Self { herd }
    }

    /// # Errors
    ///
    /// - `Validation` if the weight is negative
    /// - `CowNotFound` if the cow is absent or another owner's
    pub async fn handle(&self, cmd: LogFeedCommand) -> Result<FeedRecord, HerdError> {
        let amount = Kilograms::new(cmd.amount_kg)?;

        self.herd
            .find_cow(cmd.owner, cmd.cow_id)
            .await?
            .ok_or(HerdError::CowNotFound(cmd.cow_id))?;

        let record = FeedRecord::new(
            FeedRecordId::new(),
            cmd.owner,
            cmd.cow_id,
            cmd.date,
            cmd.feed_type,
            amount,
        );
        self.herd.save_feed_record(&record).await?;

        tracing::info!(
            feed_record_id = %record.id(),
            cow_id = %cmd.cow_id,
            feed_type = record.feed_type().as_str(),
            "feed logged"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::application::handlers::herd::{AddCowCommand, AddCowHandler};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn logs_feed_for_owned_cow() {
        let store = MemoryStore::new();
        let owner = AccountId::new();
        let cow_id = AddCowHandler::new(Arc::new(store.clone()))
            .handle(AddCowCommand {
                owner,
                name: "Bessie".to_string(),
                age_years: 4,
            })
            .await
            .unwrap()
            .id();

        let record = LogFeedHandler::new(Arc::new(store))
            .handle(LogFeedCommand {
                owner,
                cow_id,
                date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                feed_type: FeedType::Silage,
                amount_kg: dec("7.5"),
            })
            .await
            .unwrap();

        assert_eq!(record.feed_type(), FeedType::Silage);
        assert_eq!(record.amount().value(), dec("7.5"));
    }

    #[tokio::test]
    async fn unknown_cow_fails_with_not_found() {
        let store = MemoryStore::new();
        let result = LogFeedHandler::new(Arc::new(store))
            .handle(LogFeedCommand {
                owner: AccountId::new(),
                cow_id: CowId::new(),
                date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                feed_type: FeedType::Grass,
                amount_kg: dec("5"),
            })
            .await;

        assert!(matches!(result, Err(HerdError::CowNotFound(_))));
    }
}
