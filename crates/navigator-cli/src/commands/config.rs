//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use navigator_core::error::AppError;
use navigator_store::ProgramCatalog;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration and the program catalog it points to
    Validate,
    /// Write the default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => {
            let config = match super::load_config(config_path) {
                Ok(config) => config,
                Err(e) => {
                    output::print_error(&format!("Configuration invalid: {e}"));
                    return Err(e);
                }
            };
            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv("Store", &config.storage.provider);
            output::print_kv("Data dir", &config.storage.data_dir);
            output::print_kv("Deadline schedule", &config.scheduler.deadline_cron);
            output::print_kv("Digest schedule", &config.scheduler.digest_cron);

            let catalog = ProgramCatalog::load(&config.catalog.path).await?;
            output::print_kv(
                "Catalog",
                &format!("{} ({} programs)", config.catalog.path, catalog.len()),
            );
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}
