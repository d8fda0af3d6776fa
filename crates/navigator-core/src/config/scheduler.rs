//! Background scheduler configuration.

use serde::{Deserialize, Serialize};

/// Recurring reminder job configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Whether the scheduler is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Run every job once when the scheduler starts.
    #[serde(default = "default_true")]
    pub run_on_start: bool,
    /// Cron expression (with seconds) for the deadline scan.
    #[serde(default = "default_deadline_cron")]
    pub deadline_cron: String,
    /// Cron expression (with seconds) for the recommendation digest.
    #[serde(default = "default_digest_cron")]
    pub digest_cron: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            run_on_start: true,
            deadline_cron: default_deadline_cron(),
            digest_cron: default_digest_cron(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Top of every hour.
fn default_deadline_cron() -> String {
    "0 0 * * * *".to_string()
}

/// Monday at 9 AM.
fn default_digest_cron() -> String {
    "0 0 9 * * 1".to_string()
}
