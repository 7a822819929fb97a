//! PostgreSQL implementation of HerdRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{AccountId, CowId, OwnedByAccount, Timestamp};
use crate::domain::herd::{Cow, FeedRecord, HerdError, MilkRecord};
use crate::ports::HerdRepository;

/// PostgreSQL implementation of HerdRepository.
#[derive(Clone)]
pub struct PostgresHerdRepository {
    pool: PgPool,
}

impl PostgresHerdRepository {
    /// Creates a new PostgresHerdRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HerdRepository for PostgresHerdRepository {
    async fn save_cow(&self, cow: &Cow) -> Result<(), HerdError> {
        sqlx::query(
            r#"
            INSERT INTO cows (id, owner_id, name, age_years, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(cow.id().as_uuid())
        .bind(cow.owner_id().as_uuid())
        .bind(cow.name())
        .bind(cow.age_years() as i32)
        .bind(cow.created_at().as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_cow(&self, owner: AccountId, id: CowId) -> Result<Option<Cow>, HerdError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, name, age_years, created_at
            FROM cows
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_cow).transpose()
    }

    async fn list_cows(&self, owner: AccountId) -> Result<Vec<Cow>, HerdError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, name, age_years, created_at
            FROM cows
            WHERE owner_id = $1
            ORDER BY name
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_cow).collect()
    }

    async fn save_milk_record(&self, record: &MilkRecord) -> Result<(), HerdError> {
        sqlx::query(
            r#"
            INSERT INTO milk_records (id, owner_id, cow_id, date, liters, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.owner_id().as_uuid())
        .bind(record.cow_id().as_uuid())
        .bind(record.date())
        .bind(record.liters().value())
        .bind(record.created_at().as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save_feed_record(&self, record: &FeedRecord) -> Result<(), HerdError> {
        sqlx::query(
            r#"
            INSERT INTO feed_records (id, owner_id, cow_id, date, feed_type, amount_kg, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.owner_id().as_uuid())
        .bind(record.cow_id().as_uuid())
        .bind(record.date())
        .bind(record.feed_type().as_str())
        .bind(record.amount().value())
        .bind(record.created_at().as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn row_to_cow(row: sqlx::postgres::PgRow) -> Result<Cow, HerdError> {
    let id: uuid::Uuid = row.try_get("id")?;
    let owner_id: uuid::Uuid = row.try_get("owner_id")?;
    let name: String = row.try_get("name")?;
    let age_years: i32 = row.try_get("age_years")?;
    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at")?;

    Ok(Cow::reconstitute(
        CowId::from_uuid(id),
        AccountId::from_uuid(owner_id),
        name,
        age_years as u32,
        Timestamp::from_datetime(created_at),
    ))
}
