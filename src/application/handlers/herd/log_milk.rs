//! LogMilkHandler - appends a per-cow milk production record.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{AccountId, CowId, Liters, MilkRecordId};
use crate::domain::herd::{HerdError, MilkRecord};
use crate::ports::HerdRepository;

/// Command to log milk production.
#[derive(Debug, Clone)]
pub struct LogMilkCommand {
    pub owner: AccountId,
    pub cow_id: CowId,
    pub date: NaiveDate,
    pub liters: Decimal,
}

/// Handler for milk logging.
pub struct LogMilkHandler {
    herd: Arc<dyn HerdRepository>,
}

impl LogMilkHandler {
    pub fn new(herd: Arc<dyn HerdRepository>) -> Self {
        Self { herd }
    }

    /// # Errors
    ///
    /// - `Validation` if the volume is negative
    /// - `CowNotFound` if the cow is absent or another owner's
    pub async fn handle(&self, cmd: LogMilkCommand) -> Result<MilkRecord, HerdError> {
        let liters = Liters::new(cmd.liters)?;

        self.herd
            .find_cow(cmd.owner, cmd.cow_id)
            .await?
            .ok_or(HerdError::CowNotFound(cmd.cow_id))?;

        let record = MilkRecord::new(
            MilkRecordId::new(),
            cmd.owner,
            cmd.cow_id,
            cmd.date,
            liters,
        );
        self.herd.save_milk_record(&record).await?;

        tracing::info!(milk_record_id = %record.id(), cow_id = %cmd.cow_id, "milk logged");
        Ok(record)
    }
}
