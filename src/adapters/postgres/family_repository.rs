//! PostgreSQL implementation of FamilyRepository.
//!
//! Every query filters on `owner_id`, so a lookup with another owner's id
//! simply matches nothing.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::family::{Family, FamilyError};
use crate::domain::foundation::{AccountId, FamilyId, OwnedByAccount, Timestamp};
use crate::ports::FamilyRepository;

/// PostgreSQL implementation of FamilyRepository.
#[derive(Clone)]
pub struct PostgresFamilyRepository {
    pool: PgPool,
}

impl PostgresFamilyRepository {
    /// Creates a new PostgresFamilyRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FamilyRepository for PostgresFamilyRepository {
    async fn save(&self, family: &Family) -> Result<(), FamilyError> {
        sqlx::query(
            r#"
            INSERT INTO families (id, owner_id, name, address, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(family.id().as_uuid())
        .bind(family.owner_id().as_uuid())
        .bind(family.name())
        .bind(family.address())
        .bind(family.created_at().as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, owner: AccountId, id: FamilyId) -> Result<Option<Family>, FamilyError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, name, address, created_at
            FROM families
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_family).transpose()
    }

    async fn list(&self, owner: AccountId) -> Result<Vec<Family>, FamilyError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, name, address, created_at
            FROM families
            WHERE owner_id = $1
            ORDER BY name
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_family).collect()
    }
}

pub(crate) fn row_to_family(row: sqlx::postgres::PgRow) -> Result<Family, FamilyError> {
    let id: uuid::Uuid = row.try_get("id")?;
    let owner_id: uuid::Uuid = row.try_get("owner_id")?;
    let name: String = row.try_get("name")?;
    let address: Option<String> = row.try_get("address")?;
    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at")?;

    Ok(Family::reconstitute(
        FamilyId::from_uuid(id),
        AccountId::from_uuid(owner_id),
        name,
        address,
        Timestamp::from_datetime(created_at),
    ))
}
