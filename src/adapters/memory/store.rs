//! In-memory implementation of every persistence port.
//!
//! Backs the application-handler tests and the crate integration tests
//! so they run without PostgreSQL. Behavior mirrors the postgres adapter:
//! owner-scoped lookups return `None` for foreign records, usernames are
//! unique, and report queries recompute from the full record set.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::account::{Account, AccountError};
use crate::domain::family::{Family, FamilyError};
use crate::domain::foundation::{AccountId, CowId, FamilyId, Liters, Money, OwnedByAccount};
use crate::domain::herd::{Cow, FeedRecord, HerdError, MilkRecord};
use crate::domain::ledger::{Distribution, Expense, LedgerError, Payment};
use crate::domain::reports::{
    with_positive_balance, DashboardTotals, ExpenseReport, FamilyBalance, FamilyStatement,
    ReportError,
};
use crate::ports::{
    AccountRepository, FamilyRepository, HerdRepository, LedgerRepository, ReportReader,
};

#[derive(Debug, Default)]
struct Records {
    accounts: Vec<Account>,
    families: Vec<Family>,
    distributions: Vec<Distribution>,
    payments: Vec<Payment>,
    expenses: Vec<Expense>,
    cows: Vec<Cow>,
    milk_records: Vec<MilkRecord>,
    feed_records: Vec<FeedRecord>,
}

/// Shared in-memory record store.
///
/// Cloning shares the underlying records, so one store can be handed to
/// several handlers the way a connection pool would be.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Records>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn save(&self, account: &Account) -> Result<(), AccountError> {
        let mut records = self.records.lock().unwrap();
        if records
            .accounts
            .iter()
            .any(|a| a.username() == account.username())
        {
            return Err(AccountError::UsernameTaken);
        }
        records.accounts.push(account.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .accounts
            .iter()
            .find(|a| a.username() == username)
            .cloned())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountError> {
        let records = self.records.lock().unwrap();
        Ok(records.accounts.iter().find(|a| a.id() == id).cloned())
    }

    async fn update_password_hash(&self, account: &Account) -> Result<(), AccountError> {
        let mut records = self.records.lock().unwrap();
        match records.accounts.iter_mut().find(|a| a.id() == account.id()) {
            Some(stored) => {
                *stored = account.clone();
                Ok(())
            }
            None => Err(AccountError::NotFound),
        }
    }
}

#[async_trait]
impl FamilyRepository for MemoryStore {
    async fn save(&self, family: &Family) -> Result<(), FamilyError> {
        self.records.lock().unwrap().families.push(family.clone());
        Ok(())
    }

    async fn find(&self, owner: AccountId, id: FamilyId) -> Result<Option<Family>, FamilyError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .families
            .iter()
            .find(|f| f.id() == id && f.is_owned_by(owner))
            .cloned())
    }

    async fn list(&self, owner: AccountId) -> Result<Vec<Family>, FamilyError> {
        let records = self.records.lock().unwrap();
        let mut families: Vec<Family> = records
            .families
            .iter()
            .filter(|f| f.is_owned_by(owner))
            .cloned()
            .collect();
        families.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(families)
    }
}

#[async_trait]
impl LedgerRepository for MemoryStore {
    async fn save_distribution(&self, distribution: &Distribution) -> Result<(), LedgerError> {
        let mut records = self.records.lock().unwrap();
        if !records
            .families
            .iter()
            .any(|f| f.id() == distribution.family_id())
        {
            // Mirrors the database foreign-key backstop.
            return Err(LedgerError::Database(format!(
                "foreign key violation: family {}",
                distribution.family_id()
            )));
        }
        records.distributions.push(distribution.clone());
        Ok(())
    }

    async fn save_payment(&self, payment: &Payment) -> Result<(), LedgerError> {
        let mut records = self.records.lock().unwrap();
        if !records
            .families
            .iter()
            .any(|f| f.id() == payment.family_id())
        {
            return Err(LedgerError::Database(format!(
                "foreign key violation: family {}",
                payment.family_id()
            )));
        }
        records.payments.push(payment.clone());
        Ok(())
    }

    async fn save_expense(&self, expense: &Expense) -> Result<(), LedgerError> {
        self.records.lock().unwrap().expenses.push(expense.clone());
        Ok(())
    }

    async fn distributions_for_family(
        &self,
        owner: AccountId,
        family_id: FamilyId,
    ) -> Result<Vec<Distribution>, LedgerError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .distributions
            .iter()
            .filter(|d| d.family_id() == family_id && d.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn payments_for_family(
        &self,
        owner: AccountId,
        family_id: FamilyId,
    ) -> Result<Vec<Payment>, LedgerError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .payments
            .iter()
            .filter(|p| p.family_id() == family_id && p.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn list_expenses(&self, owner: AccountId) -> Result<Vec<Expense>, LedgerError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .expenses
            .iter()
            .filter(|e| e.is_owned_by(owner))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl HerdRepository for MemoryStore {
    async fn save_cow(&self, cow: &Cow) -> Result<(), HerdError> {
        self.records.lock().unwrap().cows.push(cow.clone());
        Ok(())
    }

    async fn find_cow(&self, owner: AccountId, id: CowId) -> Result<Option<Cow>, HerdError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .cows
            .iter()
            .find(|c| c.id() == id && c.is_owned_by(owner))
            .cloned())
    }

    async fn list_cows(&self, owner: AccountId) -> Result<Vec<Cow>, HerdError> {
        let records = self.records.lock().unwrap();
        let mut cows: Vec<Cow> = records
            .cows
            .iter()
            .filter(|c| c.is_owned_by(owner))
            .cloned()
            .collect();
        cows.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(cows)
    }

    async fn save_milk_record(&self, record: &MilkRecord) -> Result<(), HerdError> {
        let mut records = self.records.lock().unwrap();
        if !records.cows.iter().any(|c| c.id() == record.cow_id()) {
            return Err(HerdError::Database(format!(
                "foreign key violation: cow {}",
                record.cow_id()
            )));
        }
        records.milk_records.push(record.clone());
        Ok(())
    }

    async fn save_feed_record(&self, record: &FeedRecord) -> Result<(), HerdError> {
        let mut records = self.records.lock().unwrap();
        if !records.cows.iter().any(|c| c.id() == record.cow_id()) {
            return Err(HerdError::Database(format!(
                "foreign key violation: cow {}",
                record.cow_id()
            )));
        }
        records.feed_records.push(record.clone());
        Ok(())
    }
}

#[async_trait]
impl ReportReader for MemoryStore {
    async fn dashboard_totals(&self, owner: AccountId) -> Result<DashboardTotals, ReportError> {
        let records = self.records.lock().unwrap();

        let total_milk: Liters = records
            .milk_records
            .iter()
            .filter(|m| m.is_owned_by(owner))
            .map(|m| m.liters())
            .sum();
        let total_revenue: Money = records
            .distributions
            .iter()
            .filter(|d| d.is_owned_by(owner))
            .map(|d| d.amount())
            .sum();
        let total_expenses: Money = records
            .expenses
            .iter()
            .filter(|e| e.is_owned_by(owner))
            .map(|e| e.amount())
            .sum();

        Ok(DashboardTotals::from_sums(
            total_milk,
            total_revenue,
            total_expenses,
        ))
    }

    async fn family_statement(
        &self,
        owner: AccountId,
        family_id: FamilyId,
    ) -> Result<FamilyStatement, ReportError> {
        let records = self.records.lock().unwrap();

        let family = records
            .families
            .iter()
            .find(|f| f.id() == family_id && f.is_owned_by(owner))
            .cloned()
            .ok_or(ReportError::FamilyNotFound(family_id))?;

        let distributions: Vec<Distribution> = records
            .distributions
            .iter()
            .filter(|d| d.family_id() == family_id && d.is_owned_by(owner))
            .cloned()
            .collect();
        let payments: Vec<Payment> = records
            .payments
            .iter()
            .filter(|p| p.family_id() == family_id && p.is_owned_by(owner))
            .cloned()
            .collect();

        Ok(FamilyStatement::from_records(family, distributions, payments))
    }

    async fn outstanding_families(
        &self,
        owner: AccountId,
    ) -> Result<Vec<FamilyBalance>, ReportError> {
        let records = self.records.lock().unwrap();

        let balances: Vec<FamilyBalance> = records
            .families
            .iter()
            .filter(|f| f.is_owned_by(owner))
            .map(|family| {
                let billed: Money = records
                    .distributions
                    .iter()
                    .filter(|d| d.family_id() == family.id() && d.is_owned_by(owner))
                    .map(|d| d.amount())
                    .sum();
                let paid: Money = records
                    .payments
                    .iter()
                    .filter(|p| p.family_id() == family.id() && p.is_owned_by(owner))
                    .map(|p| p.amount_paid())
                    .sum();
                FamilyBalance {
                    family: family.clone(),
                    balance: billed.amount() - paid.amount(),
                }
            })
            .collect();

        Ok(with_positive_balance(balances))
    }

    async fn expense_report(&self, owner: AccountId) -> Result<ExpenseReport, ReportError> {
        let records = self.records.lock().unwrap();
        let expenses: Vec<Expense> = records
            .expenses
            .iter()
            .filter(|e| e.is_owned_by(owner))
            .cloned()
            .collect();
        Ok(ExpenseReport::from_records(expenses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DistributionId;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn money(s: &str) -> Money {
        Money::new(s.parse::<Decimal>().unwrap()).unwrap()
    }

    fn liters(s: &str) -> Liters {
        Liters::new(s.parse::<Decimal>().unwrap()).unwrap()
    }

    fn account(username: &str) -> Account {
        Account::new(AccountId::new(), username.to_string(), "hash".to_string()).unwrap()
    }

    #[tokio::test]
    async fn save_rejects_duplicate_username() {
        let store = MemoryStore::new();
        AccountRepository::save(&store, &account("alice")).await.unwrap();
        let result = AccountRepository::save(&store, &account("alice")).await;
        assert!(matches!(result, Err(AccountError::UsernameTaken)));
    }

    #[tokio::test]
    async fn find_returns_none_for_foreign_family() {
        let store = MemoryStore::new();
        let owner_a = AccountId::new();
        let owner_b = AccountId::new();
        let family = Family::new(FamilyId::new(), owner_a, "Smith".to_string(), None).unwrap();
        FamilyRepository::save(&store, &family).await.unwrap();

        let found = store.find(owner_b, family.id()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn save_distribution_enforces_family_reference() {
        let store = MemoryStore::new();
        let distribution = Distribution::new(
            DistributionId::new(),
            AccountId::new(),
            FamilyId::new(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            liters("10"),
            money("15.00"),
        );

        let result = store.save_distribution(&distribution).await;
        assert!(matches!(result, Err(LedgerError::Database(_))));
    }

    #[tokio::test]
    async fn dashboard_totals_of_empty_store_are_zero() {
        let store = MemoryStore::new();
        let totals = store.dashboard_totals(AccountId::new()).await.unwrap();
        assert_eq!(totals, DashboardTotals::zero());
    }

    #[tokio::test]
    async fn family_statement_for_foreign_family_is_not_found() {
        let store = MemoryStore::new();
        let owner_a = AccountId::new();
        let family = Family::new(FamilyId::new(), owner_a, "Smith".to_string(), None).unwrap();
        FamilyRepository::save(&store, &family).await.unwrap();

        let result = store.family_statement(AccountId::new(), family.id()).await;
        assert!(matches!(result, Err(ReportError::FamilyNotFound(_))));
    }
}
