//! Resource Navigator daemon.
//!
//! Loads configuration and the program catalog, runs the reminder
//! generator once, then keeps it on schedule until Ctrl-C.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use navigator_core::config::AppConfig;
use navigator_core::error::AppError;
use navigator_core::traits::clock::SystemClock;
use navigator_service::NavigatorServices;
use navigator_store::keys::KeySpace;
use navigator_store::{NavigatorStore, ProgramCatalog, StoreManager};
use navigator_worker::ReminderScheduler;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Navigator stopped with an error");
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `NAVIGATOR_ENV`
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("NAVIGATOR_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Wire the store, catalog, and services, then run the scheduler
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Resource Navigator v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Store ────────────────────────────────────────────
    let manager = StoreManager::new(&config.storage).await?;
    let store = NavigatorStore::new(
        Arc::new(manager),
        KeySpace::new(config.storage.key_prefix.clone()),
    );
    tracing::info!(provider = %config.storage.provider, "Store initialized");

    // ── Step 2: Program catalog ──────────────────────────────────
    let catalog = match ProgramCatalog::load(&config.catalog.path).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(
                path = %config.catalog.path,
                error = %e,
                "Program catalog unavailable, continuing with an empty catalog"
            );
            ProgramCatalog::default()
        }
    };

    // ── Step 3: Services ─────────────────────────────────────────
    let services = NavigatorServices::new(&config, store, Arc::new(catalog), Arc::new(SystemClock));

    if !config.scheduler.enabled {
        let created = services.reminders.run_all().await;
        tracing::info!(created, "Scheduler disabled, ran one reminder pass");
        return Ok(());
    }

    // ── Step 4: Scheduler ────────────────────────────────────────
    let scheduler =
        ReminderScheduler::new(Arc::new(services.reminders.clone()), config.scheduler.clone())
            .await?;
    scheduler.start().await?;

    // ── Step 5: Wait for shutdown ────────────────────────────────
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    scheduler.shutdown().await?;
    tracing::info!("Resource Navigator stopped");
    Ok(())
}
