//! PostgreSQL implementation of LedgerRepository.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    AccountId, DistributionId, ExpenseId, FamilyId, Liters, Money, OwnedByAccount, PaymentId,
    Timestamp,
};
use crate::domain::ledger::{Distribution, Expense, ExpenseCategory, LedgerError, Payment};
use crate::ports::LedgerRepository;

/// PostgreSQL implementation of LedgerRepository.
#[derive(Clone)]
pub struct PostgresLedgerRepository {
    pool: PgPool,
}

impl PostgresLedgerRepository {
    /// Creates a new PostgresLedgerRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerRepository for PostgresLedgerRepository {
    async fn save_distribution(&self, distribution: &Distribution) -> Result<(), LedgerError> {
        sqlx::query(
            r#"
            INSERT INTO distributions (id, owner_id, family_id, date, liters, amount, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(distribution.id().as_uuid())
        .bind(distribution.owner_id().as_uuid())
        .bind(distribution.family_id().as_uuid())
        .bind(distribution.date())
        .bind(distribution.liters().value())
        .bind(distribution.amount().amount())
        .bind(distribution.created_at().as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save_payment(&self, payment: &Payment) -> Result<(), LedgerError> {
        sqlx::query(
            r#"
            INSERT INTO payments (id, owner_id, family_id, date, amount_paid, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(payment.id().as_uuid())
        .bind(payment.owner_id().as_uuid())
        .bind(payment.family_id().as_uuid())
        .bind(payment.date())
        .bind(payment.amount_paid().amount())
        .bind(payment.created_at().as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save_expense(&self, expense: &Expense) -> Result<(), LedgerError> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, owner_id, date, category, amount, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(expense.id().as_uuid())
        .bind(expense.owner_id().as_uuid())
        .bind(expense.date())
        .bind(expense.category().as_str())
        .bind(expense.amount().amount())
        .bind(expense.description())
        .bind(expense.created_at().as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn distributions_for_family(
        &self,
        owner: AccountId,
        family_id: FamilyId,
    ) -> Result<Vec<Distribution>, LedgerError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, family_id, date, liters, amount, created_at
            FROM distributions
            WHERE owner_id = $1 AND family_id = $2
            ORDER BY date DESC
            "#,
        )
        .bind(owner.as_uuid())
        .bind(family_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_distribution).collect()
    }

    async fn payments_for_family(
        &self,
        owner: AccountId,
        family_id: FamilyId,
    ) -> Result<Vec<Payment>, LedgerError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, family_id, date, amount_paid, created_at
            FROM payments
            WHERE owner_id = $1 AND family_id = $2
            ORDER BY date DESC
            "#,
        )
        .bind(owner.as_uuid())
        .bind(family_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_payment).collect()
    }

    async fn list_expenses(&self, owner: AccountId) -> Result<Vec<Expense>, LedgerError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, date, category, amount, description, created_at
            FROM expenses
            WHERE owner_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_expense).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Row mapping helpers
// ─────────────────────────────────────────────────────────────────────────

pub(crate) fn row_to_distribution(
    row: sqlx::postgres::PgRow,
) -> Result<Distribution, LedgerError> {
    let id: uuid::Uuid = row.try_get("id")?;
    let owner_id: uuid::Uuid = row.try_get("owner_id")?;
    let family_id: uuid::Uuid = row.try_get("family_id")?;
    let date: chrono::NaiveDate = row.try_get("date")?;
    let liters: Decimal = row.try_get("liters")?;
    let amount: Decimal = row.try_get("amount")?;
    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at")?;

    Ok(Distribution::reconstitute(
        DistributionId::from_uuid(id),
        AccountId::from_uuid(owner_id),
        FamilyId::from_uuid(family_id),
        date,
        Liters::new(liters).map_err(|e| LedgerError::Database(e.to_string()))?,
        Money::new(amount).map_err(|e| LedgerError::Database(e.to_string()))?,
        Timestamp::from_datetime(created_at),
    ))
}

pub(crate) fn row_to_payment(row: sqlx::postgres::PgRow) -> Result<Payment, LedgerError> {
    let id: uuid::Uuid = row.try_get("id")?;
    let owner_id: uuid::Uuid = row.try_get("owner_id")?;
    let family_id: uuid::Uuid = row.try_get("family_id")?;
    let date: chrono::NaiveDate = row.try_get("date")?;
    let amount_paid: Decimal = row.try_get("amount_paid")?;
    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at")?;

    Ok(Payment::reconstitute(
        PaymentId::from_uuid(id),
        AccountId::from_uuid(owner_id),
        FamilyId::from_uuid(family_id),
        date,
        Money::new(amount_paid).map_err(|e| LedgerError::Database(e.to_string()))?,
        Timestamp::from_datetime(created_at),
    ))
}

pub(crate) fn row_to_expense(row: sqlx::postgres::PgRow) -> Result<Expense, LedgerError> {
    let id: uuid::Uuid = row.try_get("id")?;
    let owner_id: uuid::Uuid = row.try_get("owner_id")?;
    let date: chrono::NaiveDate = row.try_get("date")?;
    let category_str: String = row.try_get("category")?;
    let amount: Decimal = row.try_get("amount")?;
    let description: Option<String> = row.try_get("description")?;
    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at")?;

    let category = ExpenseCategory::parse(&category_str).ok_or_else(|| {
        LedgerError::Database(format!("Invalid expense category: {}", category_str))
    })?;

    Ok(Expense::reconstitute(
        ExpenseId::from_uuid(id),
        AccountId::from_uuid(owner_id),
        date,
        category,
        Money::new(amount).map_err(|e| LedgerError::Database(e.to_string()))?,
        description,
        Timestamp::from_datetime(created_at),
    ))
}
