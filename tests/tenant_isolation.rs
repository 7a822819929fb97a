//! Multi-tenant isolation and the full auth lifecycle, using the real
//! argon2 and JWT adapters over the in-memory store.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use dairy_ledger::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use dairy_ledger::adapters::memory::MemoryStore;
use dairy_ledger::application::handlers::account::{
    ChangePasswordCommand, ChangePasswordHandler, LogInCommand, LogInHandler, SignUpCommand,
    SignUpHandler,
};
use dairy_ledger::application::handlers::family::{
    AddFamilyCommand, AddFamilyHandler, GetFamilyStatementHandler, GetFamilyStatementQuery,
    ListFamiliesHandler, ListFamiliesQuery,
};
use dairy_ledger::application::handlers::ledger::{
    LogDistributionCommand, LogDistributionHandler,
};
use dairy_ledger::application::handlers::reports::{GetDashboardHandler, GetDashboardQuery};
use dairy_ledger::domain::account::AccountError;
use dairy_ledger::domain::foundation::{AccountId, AuthError, FamilyId};
use dairy_ledger::domain::reports::ReportError;
use dairy_ledger::ports::TokenValidator;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

struct AuthFixture {
    store: MemoryStore,
    sign_up: SignUpHandler,
    log_in: LogInHandler,
    tokens: Arc<JwtTokenService>,
}

impl AuthFixture {
    fn new() -> Self {
        let store = MemoryStore::new();
        let hasher = Arc::new(Argon2PasswordHasher::new());
        let tokens = Arc::new(JwtTokenService::new("integration-test-secret", 3600));
        Self {
            sign_up: SignUpHandler::new(Arc::new(store.clone()), hasher.clone()),
            log_in: LogInHandler::new(Arc::new(store.clone()), hasher, tokens.clone()),
            store,
            tokens,
        }
    }

    async fn register(&self, username: &str, password: &str) -> AccountId {
        self.sign_up
            .handle(SignUpCommand {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap()
            .id()
    }
}

async fn family_with_distribution(
    store: &MemoryStore,
    owner: AccountId,
    name: &str,
    amount: &str,
) -> FamilyId {
    let family_id = AddFamilyHandler::new(Arc::new(store.clone()))
        .handle(AddFamilyCommand {
            owner,
            name: name.to_string(),
            address: None,
        })
        .await
        .unwrap()
        .id();

    LogDistributionHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
        .handle(LogDistributionCommand {
            owner,
            family_id,
            date: date(),
            liters: dec("10"),
            amount: dec(amount),
        })
        .await
        .unwrap();

    family_id
}

#[tokio::test]
async fn two_owners_with_identically_named_families_stay_separate() {
    let store = MemoryStore::new();
    let owner_a = AccountId::new();
    let owner_b = AccountId::new();

    family_with_distribution(&store, owner_a, "Smith", "15.00").await;
    family_with_distribution(&store, owner_b, "Smith", "99.00").await;

    let dashboard = GetDashboardHandler::new(Arc::new(store.clone()));
    let totals_a = dashboard
        .handle(GetDashboardQuery { owner: owner_a })
        .await
        .unwrap();
    let totals_b = dashboard
        .handle(GetDashboardQuery { owner: owner_b })
        .await
        .unwrap();

    assert_eq!(totals_a.total_revenue.amount(), dec("15.00"));
    assert_eq!(totals_b.total_revenue.amount(), dec("99.00"));

    let families_a = ListFamiliesHandler::new(Arc::new(store))
        .handle(ListFamiliesQuery { owner: owner_a })
        .await
        .unwrap();
    assert_eq!(families_a.len(), 1);
}

#[tokio::test]
async fn fetching_a_foreign_family_behaves_like_a_nonexistent_one() {
    let store = MemoryStore::new();
    let owner_a = AccountId::new();
    let owner_b = AccountId::new();
    let family_of_a = family_with_distribution(&store, owner_a, "Smith", "15.00").await;

    let statements = GetFamilyStatementHandler::new(Arc::new(store));

    let foreign = statements
        .handle(GetFamilyStatementQuery {
            owner: owner_b,
            family_id: family_of_a,
        })
        .await
        .unwrap_err();
    let nonexistent = statements
        .handle(GetFamilyStatementQuery {
            owner: owner_b,
            family_id: FamilyId::new(),
        })
        .await
        .unwrap_err();

    assert!(matches!(foreign, ReportError::FamilyNotFound(_)));
    assert!(matches!(nonexistent, ReportError::FamilyNotFound(_)));
}

#[tokio::test]
async fn signup_login_roundtrip_issues_a_validatable_token() {
    let fx = AuthFixture::new();
    let account_id = fx.register("alice", "pw123").await;

    let result = fx
        .log_in
        .handle(LogInCommand {
            username: "alice".to_string(),
            password: "pw123".to_string(),
        })
        .await
        .unwrap();

    let validated = fx.tokens.validate(&result.token.token).unwrap();
    assert_eq!(validated.id, account_id);
    assert_eq!(validated.username, "alice");
}

#[tokio::test]
async fn wrong_password_and_unknown_user_fail_with_the_same_message() {
    let fx = AuthFixture::new();
    fx.register("alice", "pw123").await;

    let wrong = fx
        .log_in
        .handle(LogInCommand {
            username: "alice".to_string(),
            password: "nope".to_string(),
        })
        .await
        .unwrap_err();
    let unknown = fx
        .log_in
        .handle(LogInCommand {
            username: "mallory".to_string(),
            password: "pw123".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        wrong,
        AccountError::Auth(AuthError::InvalidCredentials)
    ));
    assert_eq!(format!("{}", wrong), format!("{}", unknown));
}

#[tokio::test]
async fn changed_password_invalidates_the_old_one() {
    let fx = AuthFixture::new();
    let account_id = fx.register("alice", "pw123").await;

    ChangePasswordHandler::new(
        Arc::new(fx.store.clone()),
        Arc::new(Argon2PasswordHasher::new()),
    )
    .handle(ChangePasswordCommand {
        account_id,
        new_password: "fresh-pw".to_string(),
    })
    .await
    .unwrap();

    let old = fx
        .log_in
        .handle(LogInCommand {
            username: "alice".to_string(),
            password: "pw123".to_string(),
        })
        .await;
    assert!(old.is_err());

    let new = fx
        .log_in
        .handle(LogInCommand {
            username: "alice".to_string(),
            password: "fresh-pw".to_string(),
        })
        .await;
    assert!(new.is_ok());
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let fx = AuthFixture::new();
    fx.register("alice", "pw123").await;

    let result = fx
        .sign_up
        .handle(SignUpCommand {
            username: "alice".to_string(),
            password: "other".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AccountError::UsernameTaken)));
}
