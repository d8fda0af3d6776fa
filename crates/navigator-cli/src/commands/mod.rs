//! CLI command definitions and dispatch.

pub mod application;
pub mod config;
pub mod notify;
pub mod profile;
pub mod recommend;
pub mod todo;

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use navigator_core::config::AppConfig;
use navigator_core::error::AppError;
use navigator_core::traits::clock::SystemClock;
use navigator_service::NavigatorServices;
use navigator_store::keys::KeySpace;
use navigator_store::{NavigatorStore, ProgramCatalog, StoreManager};

use crate::output::{self, OutputFormat};

/// Detroit Resource Navigator: program matching and reminders
#[derive(Debug, Parser)]
#[command(name = "navigator", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Onboarding profile
    Profile(profile::ProfileArgs),
    /// Program recommendations
    Recommend(recommend::RecommendArgs),
    /// Notification inbox and reminder checks
    Notify(notify::NotifyArgs),
    /// To-do list
    Todo(todo::TodoArgs),
    /// Application tracker
    Application(application::ApplicationArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, &self.config, self.format).await;
        }

        let config = load_config(&self.config)?;
        let services = build_services(&config).await?;

        match &self.command {
            Commands::Profile(args) => profile::execute(args, &services, self.format).await,
            Commands::Recommend(args) => recommend::execute(args, &services, self.format).await,
            Commands::Notify(args) => notify::execute(args, &services, self.format).await,
            Commands::Todo(args) => todo::execute(args, &services, self.format).await,
            Commands::Application(args) => {
                application::execute(args, &services, self.format).await
            }
            Commands::Config(_) => Ok(()),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from_file(config_path)
}

/// Helper: wire the services over the configured store and catalog.
///
/// A catalog that fails to load is reported and replaced by an empty one,
/// so record commands keep working.
pub async fn build_services(config: &AppConfig) -> Result<NavigatorServices, AppError> {
    let manager = StoreManager::new(&config.storage).await?;
    let store = NavigatorStore::new(
        Arc::new(manager),
        KeySpace::new(config.storage.key_prefix.clone()),
    );

    let catalog = match ProgramCatalog::load(&config.catalog.path).await {
        Ok(catalog) => catalog,
        Err(e) => {
            output::print_warning(&format!("Program catalog unavailable: {e}"));
            ProgramCatalog::default()
        }
    };

    Ok(NavigatorServices::new(
        config,
        store,
        Arc::new(catalog),
        Arc::new(SystemClock),
    ))
}

/// Helper: parse an RFC 3339 timestamp or a `YYYY-MM-DD` date (end of day, UTC)
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, AppError> {
    let input = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            AppError::validation(format!(
                "Invalid date '{input}': expected YYYY-MM-DD or RFC 3339"
            ))
        })
}

/// Helper: parse a record id argument
pub fn parse_id<T: std::str::FromStr>(input: &str, what: &str) -> Result<T, AppError> {
    input
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid {what} id: '{input}'")))
}
