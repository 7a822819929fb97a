//! End-to-end ledger scenarios through the application handlers, running
//! against the in-memory persistence adapter.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use dairy_ledger::adapters::memory::MemoryStore;
use dairy_ledger::application::handlers::family::{
    AddFamilyCommand, AddFamilyHandler, GetFamilyStatementHandler, GetFamilyStatementQuery,
};
use dairy_ledger::application::handlers::herd::{
    AddCowCommand, AddCowHandler, LogMilkCommand, LogMilkHandler,
};
use dairy_ledger::application::handlers::ledger::{
    ListExpensesHandler, ListExpensesQuery, LogDistributionCommand, LogDistributionHandler,
    LogExpenseCommand, LogExpenseHandler, RecordPaymentCommand, RecordPaymentHandler,
};
use dairy_ledger::application::handlers::reports::{
    GetDashboardHandler, GetDashboardQuery, ListOutstandingHandler, ListOutstandingQuery,
};
use dairy_ledger::domain::foundation::{AccountId, FamilyId};
use dairy_ledger::domain::ledger::{ExpenseCategory, LedgerError};
use dairy_ledger::domain::reports::DashboardTotals;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Fixture {
    store: MemoryStore,
    owner: AccountId,
}

impl Fixture {
    fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            owner: AccountId::new(),
        }
    }

    async fn add_family(&self, name: &str) -> FamilyId {
        AddFamilyHandler::new(Arc::new(self.store.clone()))
            .handle(AddFamilyCommand {
                owner: self.owner,
                name: name.to_string(),
                address: None,
            })
            .await
            .unwrap()
            .id()
    }

    async fn distribute(&self, family_id: FamilyId, on: NaiveDate, liters: &str, amount: &str) {
        LogDistributionHandler::new(
            Arc::new(self.store.clone()),
            Arc::new(self.store.clone()),
        )
        .handle(LogDistributionCommand {
            owner: self.owner,
            family_id,
            date: on,
            liters: dec(liters),
            amount: dec(amount),
        })
        .await
        .unwrap();
    }

    async fn pay(&self, family_id: FamilyId, on: NaiveDate, amount: &str) {
        RecordPaymentHandler::new(
            Arc::new(self.store.clone()),
            Arc::new(self.store.clone()),
        )
        .handle(RecordPaymentCommand {
            owner: self.owner,
            family_id,
            date: on,
            amount_paid: dec(amount),
        })
        .await
        .unwrap();
    }
}

#[tokio::test]
async fn smith_scenario_produces_the_expected_statement() {
    let fx = Fixture::new();
    let smith = fx.add_family("Smith").await;

    fx.distribute(smith, date(2024, 1, 1), "10", "15.00").await;
    fx.pay(smith, date(2024, 1, 2), "10.00").await;

    let statement = GetFamilyStatementHandler::new(Arc::new(fx.store.clone()))
        .handle(GetFamilyStatementQuery {
            owner: fx.owner,
            family_id: smith,
        })
        .await
        .unwrap();

    assert_eq!(statement.total_billed.amount(), dec("15.00"));
    assert_eq!(statement.total_paid.amount(), dec("10.00"));
    assert_eq!(statement.balance, dec("5.00"));
    assert_eq!(statement.distributions.len(), 1);
    assert_eq!(statement.payments.len(), 1);
}

#[tokio::test]
async fn dashboard_over_zero_records_is_all_zero() {
    let fx = Fixture::new();

    let totals = GetDashboardHandler::new(Arc::new(fx.store.clone()))
        .handle(GetDashboardQuery { owner: fx.owner })
        .await
        .unwrap();

    assert_eq!(totals, DashboardTotals::zero());
}

#[tokio::test]
async fn dashboard_combines_milk_revenue_and_expenses() {
    let fx = Fixture::new();
    let smith = fx.add_family("Smith").await;
    fx.distribute(smith, date(2024, 1, 1), "10", "15.00").await;
    fx.distribute(smith, date(2024, 1, 8), "12", "18.00").await;

    LogExpenseHandler::new(Arc::new(fx.store.clone()))
        .handle(LogExpenseCommand {
            owner: fx.owner,
            date: date(2024, 1, 3),
            category: ExpenseCategory::Feed,
            amount: dec("7.25"),
            description: None,
        })
        .await
        .unwrap();

    let cow = AddCowHandler::new(Arc::new(fx.store.clone()))
        .handle(AddCowCommand {
            owner: fx.owner,
            name: "Bessie".to_string(),
            age_years: 4,
        })
        .await
        .unwrap();
    LogMilkHandler::new(Arc::new(fx.store.clone()))
        .handle(LogMilkCommand {
            owner: fx.owner,
            cow_id: cow.id(),
            date: date(2024, 1, 2),
            liters: dec("21.5"),
        })
        .await
        .unwrap();

    let totals = GetDashboardHandler::new(Arc::new(fx.store.clone()))
        .handle(GetDashboardQuery { owner: fx.owner })
        .await
        .unwrap();

    assert_eq!(totals.total_milk.value(), dec("21.5"));
    assert_eq!(totals.total_revenue.amount(), dec("33.00"));
    assert_eq!(totals.total_expenses.amount(), dec("7.25"));
    assert_eq!(totals.profit, dec("25.75"));
}

#[tokio::test]
async fn distribution_to_missing_family_fails_and_leaves_no_orphan() {
    let fx = Fixture::new();
    let missing = FamilyId::new();

    let result = LogDistributionHandler::new(
        Arc::new(fx.store.clone()),
        Arc::new(fx.store.clone()),
    )
    .handle(LogDistributionCommand {
        owner: fx.owner,
        family_id: missing,
        date: date(2024, 1, 1),
        liters: dec("10"),
        amount: dec("15.00"),
    })
    .await;

    assert!(matches!(result, Err(LedgerError::FamilyNotFound(_))));

    // Totals confirm nothing was persisted.
    let totals = GetDashboardHandler::new(Arc::new(fx.store.clone()))
        .handle(GetDashboardQuery { owner: fx.owner })
        .await
        .unwrap();
    assert_eq!(totals, DashboardTotals::zero());
}

#[tokio::test]
async fn outstanding_view_lists_only_debtors() {
    let fx = Fixture::new();
    let owing = fx.add_family("Owing").await;
    let settled = fx.add_family("Settled").await;
    let overpaid = fx.add_family("Overpaid").await;

    for family in [owing, settled, overpaid] {
        fx.distribute(family, date(2024, 1, 1), "10", "20.00").await;
    }
    fx.pay(settled, date(2024, 1, 5), "20.00").await;
    fx.pay(overpaid, date(2024, 1, 5), "30.00").await;

    let outstanding = ListOutstandingHandler::new(Arc::new(fx.store.clone()))
        .handle(ListOutstandingQuery { owner: fx.owner })
        .await
        .unwrap();

    assert_eq!(outstanding.len(), 1);
    assert_eq!(outstanding[0].family.id(), owing);
    assert_eq!(outstanding[0].balance, dec("20.00"));
}

#[tokio::test]
async fn expense_list_runs_newest_first_with_total() {
    let fx = Fixture::new();
    let log = LogExpenseHandler::new(Arc::new(fx.store.clone()));

    for (day, category, amount) in [
        (5, ExpenseCategory::Feed, "10.00"),
        (20, ExpenseCategory::Veterinary, "45.50"),
        (11, ExpenseCategory::Labor, "30.00"),
    ] {
        log.handle(LogExpenseCommand {
            owner: fx.owner,
            date: date(2024, 3, day),
            category,
            amount: dec(amount),
            description: None,
        })
        .await
        .unwrap();
    }

    let report = ListExpensesHandler::new(Arc::new(fx.store.clone()))
        .handle(ListExpensesQuery { owner: fx.owner })
        .await
        .unwrap();

    assert_eq!(report.total.amount(), dec("85.50"));
    let days: Vec<u32> = report
        .expenses
        .iter()
        .map(|e| e.date().format("%d").to_string().parse().unwrap())
        .collect();
    assert_eq!(days, vec![20, 11, 5]);
}
