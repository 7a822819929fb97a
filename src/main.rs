//! Dairy Ledger service entry point.
//!
//! Bootstrap order: environment → config → tracing → database pool →
//! migrations → adapter/handler wiring → HTTP server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;

use dairy_ledger::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use dairy_ledger::adapters::http::{
    api_router, AuthHandlers, AuthState, FamilyHandlers, HerdHandlers, LedgerHandlers,
    ReportHandlers,
};
use dairy_ledger::adapters::postgres::{
    PostgresAccountRepository, PostgresFamilyRepository, PostgresHerdRepository,
    PostgresLedgerRepository, PostgresReportReader,
};
use dairy_ledger::application::handlers::account::{
    ChangePasswordHandler, LogInHandler, SignUpHandler,
};
use dairy_ledger::application::handlers::family::{
    AddFamilyHandler, GetFamilyStatementHandler, ListFamiliesHandler,
};
use dairy_ledger::application::handlers::herd::{
    AddCowHandler, ListCowsHandler, LogFeedHandler, LogMilkHandler,
};
use dairy_ledger::application::handlers::ledger::{
    ListExpensesHandler, LogDistributionHandler, LogExpenseHandler, RecordPaymentHandler,
};
use dairy_ledger::application::handlers::reports::{GetDashboardHandler, ListOutstandingHandler};
use dairy_ledger::config::AppConfig;
use dairy_ledger::ports::{
    AccountRepository, FamilyRepository, HerdRepository, LedgerRepository, PasswordHasher,
    ReportReader, TokenIssuer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dairy_ledger=info,sqlx=warn,tower_http=info".into()),
        )
        .init();

    info!("Starting dairy-ledger");

    // ─────────────────────────────────────────────────────────────────────
    // Database
    // ─────────────────────────────────────────────────────────────────────
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Adapters
    // ─────────────────────────────────────────────────────────────────────
    let accounts: Arc<dyn AccountRepository> =
        Arc::new(PostgresAccountRepository::new(pool.clone()));
    let families: Arc<dyn FamilyRepository> =
        Arc::new(PostgresFamilyRepository::new(pool.clone()));
    let ledger: Arc<dyn LedgerRepository> = Arc::new(PostgresLedgerRepository::new(pool.clone()));
    let herd: Arc<dyn HerdRepository> = Arc::new(PostgresHerdRepository::new(pool.clone()));
    let reports: Arc<dyn ReportReader> = Arc::new(PostgresReportReader::new(pool));

    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let token_service = Arc::new(JwtTokenService::new(
        &config.auth.jwt_secret,
        config.auth.token_ttl_secs,
    ));
    let token_issuer: Arc<dyn TokenIssuer> = token_service.clone();
    let token_validator: AuthState = token_service;

    // ─────────────────────────────────────────────────────────────────────
    // Application handlers
    // ─────────────────────────────────────────────────────────────────────
    let auth_handlers = AuthHandlers::new(
        Arc::new(SignUpHandler::new(accounts.clone(), hasher.clone())),
        Arc::new(LogInHandler::new(
            accounts.clone(),
            hasher.clone(),
            token_issuer,
        )),
        Arc::new(ChangePasswordHandler::new(accounts, hasher)),
    );
    let family_handlers = FamilyHandlers::new(
        Arc::new(AddFamilyHandler::new(families.clone())),
        Arc::new(ListFamiliesHandler::new(families.clone())),
        Arc::new(GetFamilyStatementHandler::new(reports.clone())),
    );
    let ledger_handlers = LedgerHandlers::new(
        Arc::new(LogDistributionHandler::new(
            families.clone(),
            ledger.clone(),
        )),
        Arc::new(RecordPaymentHandler::new(families, ledger.clone())),
        Arc::new(LogExpenseHandler::new(ledger)),
        Arc::new(ListExpensesHandler::new(reports.clone())),
    );
    let herd_handlers = HerdHandlers::new(
        Arc::new(AddCowHandler::new(herd.clone())),
        Arc::new(ListCowsHandler::new(herd.clone())),
        Arc::new(LogMilkHandler::new(herd.clone())),
        Arc::new(LogFeedHandler::new(herd)),
    );
    let report_handlers = ReportHandlers::new(
        Arc::new(GetDashboardHandler::new(reports.clone())),
        Arc::new(ListOutstandingHandler::new(reports)),
    );

    // ─────────────────────────────────────────────────────────────────────
    // HTTP server
    // ─────────────────────────────────────────────────────────────────────
    let app = api_router(
        auth_handlers,
        family_handlers,
        ledger_handlers,
        herd_handlers,
        report_handlers,
        token_validator,
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
