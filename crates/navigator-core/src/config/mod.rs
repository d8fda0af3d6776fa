//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so an empty file
//! yields a working configuration.

pub mod logging;
pub mod recommendation;
pub mod reminder;
pub mod scheduler;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::logging::LoggingConfig;
pub use self::recommendation::RecommendationConfig;
pub use self::reminder::ReminderConfig;
pub use self::scheduler::SchedulerConfig;
pub use self::storage::{CatalogConfig, StorageConfig};

use crate::error::AppError;

/// Environment variable prefix for overrides (`NAVIGATOR__STORAGE__PROVIDER=memory`).
const ENV_PREFIX: &str = "NAVIGATOR";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Persistent store settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Program catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Recommendation engine settings.
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    /// Reminder generation thresholds.
    #[serde(default)]
    pub reminders: ReminderConfig,
    /// Background scheduler settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for an environment.
    ///
    /// Merges `config/default.toml` with `config/{env}.toml` and environment
    /// variables prefixed with `NAVIGATOR__`. Missing files are skipped.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single explicit file plus environment overrides.
    pub fn load_from_file(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.reminders.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_empty_source() {
        let config: AppConfig = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.storage.provider, "file");
        assert_eq!(config.recommendation.max_score, 150);
        assert_eq!(config.recommendation.per_need_limit, 5);
        assert_eq!(config.recommendation.other_limit, 10);
        assert_eq!(config.reminders.status_check_after_days, 14);
        assert_eq!(config.scheduler.deadline_cron, "0 0 * * * *");
        assert!(
            config
                .recommendation
                .service_area_zips
                .contains(&"48201".to_string())
        );
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[storage]\nprovider = \"memory\"\n\n[reminders]\ndue_soon_hours = 48\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.storage.provider, "memory");
        assert_eq!(config.storage.key_prefix, "navigator");
        assert_eq!(config.reminders.due_soon_hours, 48);
        assert_eq!(config.reminders.deadline_reminder_days, 7);
    }

    #[test]
    fn test_load_rejects_unrepresentable_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[reminders]\ndue_soon_hours = 9223372036854775\n").unwrap();

        let err = AppConfig::load_from_file(path.to_str().unwrap()).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
        assert!(err.message.contains("due_soon_hours"));
    }
}
