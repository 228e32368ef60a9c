//! Mini Ledger server
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌─────────────────────┐
//! │ Gateway  │───▶│ Transfer     │───▶│ LedgerStore         │
//! │ (axum)   │    │ Coordinator  │    │ (postgres | memory) │
//! │          │───▶│ AccountSvc   │───▶│                     │
//! └──────────┘    └──────────────┘    └─────────────────────┘
//! ```
//!
//! Usage: `mini_ledger [--env dev|prod] [--port 8080]`

use std::sync::Arc;

use anyhow::Context;
use mini_ledger::config::{AppConfig, StorageBackend};
use mini_ledger::db::{Database, schema::init_schema};
use mini_ledger::gateway::{AppState, run_server};
use mini_ledger::ledger::{LedgerStore, MemoryLedger, PgLedger};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn LedgerStore>> {
    let db_config = &config.database;
    match db_config.backend {
        StorageBackend::Postgres => {
            let url = db_config
                .postgres_url
                .as_deref()
                .context("database.postgres_url is not set")?;
            let db = Database::connect(url, db_config.max_connections, db_config.acquire_timeout())
                .await
                .context("Failed to connect to PostgreSQL")?;
            if db_config.init_schema {
                init_schema(db.pool())
                    .await
                    .context("Failed to initialize ledger schema")?;
            }
            let mut store = PgLedger::from_database(&db);
            if let Some(timeout) = db_config.lock_timeout() {
                store = store.with_lock_timeout(timeout);
            }
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory ledger; state is lost on restart");
            let mut store = MemoryLedger::new();
            if let Some(timeout) = db_config.lock_timeout() {
                store = store.with_lock_timeout(timeout);
            }
            Ok(Arc::new(store))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = mini_ledger::logging::init_logging(&app_config);

    tracing::info!(
        env = %env,
        git_hash = env!("GIT_HASH"),
        backend = ?app_config.database.backend,
        "Starting Mini Ledger"
    );

    let store = build_store(&app_config).await?;
    let state = Arc::new(AppState::new(store));

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    run_server(&app_config.gateway.host, port, state)
        .await
        .context("Gateway server error")?;
    Ok(())
}
