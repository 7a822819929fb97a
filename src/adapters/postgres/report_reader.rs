//! PostgreSQL implementation of ReportReader.
//!
//! The sums run in SQL (`COALESCE(SUM(..), 0)` over NUMERIC columns, so
//! empty sets come back as zero rather than NULL); the derived figures
//! are assembled by the domain report types so the arithmetic lives in
//! exactly one place.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{AccountId, FamilyId, Liters, Money};
use crate::domain::reports::{
    with_positive_balance, DashboardTotals, ExpenseReport, FamilyBalance, FamilyStatement,
    ReportError,
};
use crate::ports::ReportReader;

use super::family_repository::row_to_family;
use super::ledger_repository::{row_to_distribution, row_to_expense, row_to_payment};

/// PostgreSQL implementation of ReportReader.
#[derive(Clone)]
pub struct PostgresReportReader {
    pool: PgPool,
}

impl PostgresReportReader {
    /// Creates a new PostgresReportReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn sum(&self, query: &str, owner: AccountId) -> Result<Decimal, ReportError> {
        let row = sqlx::query(query)
            .bind(owner.as_uuid())
            .fetch_one(&self.pool)
            .await?;
        let total: Decimal = row.try_get("total")?;
        Ok(total)
    }
}

#[async_trait]
impl ReportReader for PostgresReportReader {
    async fn dashboard_totals(&self, owner: AccountId) -> Result<DashboardTotals, ReportError> {
        let milk = self
            .sum(
                "SELECT COALESCE(SUM(liters), 0) AS total FROM milk_records WHERE owner_id = $1",
                owner,
            )
            .await?;
        let revenue = self
            .sum(
                "SELECT COALESCE(SUM(amount), 0) AS total FROM distributions WHERE owner_id = $1",
                owner,
            )
            .await?;
        let expenses = self
            .sum(
                "SELECT COALESCE(SUM(amount), 0) AS total FROM expenses WHERE owner_id = $1",
                owner,
            )
            .await?;

        Ok(DashboardTotals::from_sums(
            Liters::new(milk).map_err(|e| ReportError::Database(e.to_string()))?,
            Money::new(revenue).map_err(|e| ReportError::Database(e.to_string()))?,
            Money::new(expenses).map_err(|e| ReportError::Database(e.to_string()))?,
        ))
    }

    async fn family_statement(
        &self,
        owner: AccountId,
        family_id: FamilyId,
    ) -> Result<FamilyStatement, ReportError> {
        let family_row = sqlx::query(
            r#"
            SELECT id, owner_id, name, address, created_at
            FROM families
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(family_id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ReportError::FamilyNotFound(family_id))?;

        let family =
            row_to_family(family_row).map_err(|e| ReportError::Database(e.to_string()))?;

        let distribution_rows = sqlx::query(
            r#"
            SELECT id, owner_id, family_id, date, liters, amount, created_at
            FROM distributions
            WHERE owner_id = $1 AND family_id = $2
            "#,
        )
        .bind(owner.as_uuid())
        .bind(family_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        let payment_rows = sqlx::query(
            r#"
            SELECT id, owner_id, family_id, date, amount_paid, created_at
            FROM payments
            WHERE owner_id = $1 AND family_id = $2
            "#,
        )
        .bind(owner.as_uuid())
        .bind(family_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        let distributions = distribution_rows
            .into_iter()
            .map(row_to_distribution)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ReportError::Database(e.to_string()))?;
        let payments = payment_rows
            .into_iter()
            .map(row_to_payment)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ReportError::Database(e.to_string()))?;

        Ok(FamilyStatement::from_records(family, distributions, payments))
    }

    async fn outstanding_families(
        &self,
        owner: AccountId,
    ) -> Result<Vec<FamilyBalance>, ReportError> {
        let rows = sqlx::query(
            r#"
            SELECT f.id, f.owner_id, f.name, f.address, f.created_at,
                   COALESCE(d.total, 0) - COALESCE(p.total, 0) AS balance
            FROM families f
            LEFT JOIN (
                SELECT family_id, SUM(amount) AS total
                FROM distributions WHERE owner_id = $1 GROUP BY family_id
            ) d ON d.family_id = f.id
            LEFT JOIN (
                SELECT family_id, SUM(amount_paid) AS total
                FROM payments WHERE owner_id = $1 GROUP BY family_id
            ) p ON p.family_id = f.id
            WHERE f.owner_id = $1
            ORDER BY f.name
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        let balances = rows
            .into_iter()
            .map(|row| {
                let balance: Decimal = row.try_get("balance")?;
                let family = row_to_family(row)
                    .map_err(|e| sqlx::Error::Decode(e.to_string().into()))?;
                Ok(FamilyBalance { family, balance })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(with_positive_balance(balances))
    }

    async fn expense_report(&self, owner: AccountId) -> Result<ExpenseReport, ReportError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, date, category, amount, description, created_at
            FROM expenses
            WHERE owner_id = $1
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        let expenses = rows
            .into_iter()
            .map(row_to_expense)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ReportError::Database(e.to_string()))?;

        Ok(ExpenseReport::from_records(expenses))
    }
}
