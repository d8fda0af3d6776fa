//! Reminder generation thresholds.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Upper bound for any day-valued threshold.
const MAX_DAYS: i64 = 3650;

/// Thresholds used when deriving notifications from stored records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// A to-do due within this many hours triggers a "due soon" reminder.
    #[serde(default = "default_due_soon_hours")]
    pub due_soon_hours: i64,
    /// A submitted application older than this many days triggers a status check.
    #[serde(default = "default_status_check_days")]
    pub status_check_after_days: i64,
    /// Days remaining at or below which a deadline is urgent.
    #[serde(default = "default_urgent_days")]
    pub deadline_urgent_days: i64,
    /// Days remaining at or below which a deadline reminder is sent.
    #[serde(default = "default_reminder_days")]
    pub deadline_reminder_days: i64,
    /// Minimum days between two recommendation digests.
    #[serde(default = "default_digest_days")]
    pub digest_interval_days: i64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            due_soon_hours: default_due_soon_hours(),
            status_check_after_days: default_status_check_days(),
            deadline_urgent_days: default_urgent_days(),
            deadline_reminder_days: default_reminder_days(),
            digest_interval_days: default_digest_days(),
        }
    }
}

impl ReminderConfig {
    /// Reject thresholds outside a sane range.
    pub fn validate(&self) -> Result<(), AppError> {
        check_range("due_soon_hours", self.due_soon_hours, MAX_DAYS * 24)?;
        check_range("status_check_after_days", self.status_check_after_days, MAX_DAYS)?;
        check_range("deadline_urgent_days", self.deadline_urgent_days, MAX_DAYS)?;
        check_range("deadline_reminder_days", self.deadline_reminder_days, MAX_DAYS)?;
        check_range("digest_interval_days", self.digest_interval_days, MAX_DAYS)?;

        if self.deadline_urgent_days > self.deadline_reminder_days {
            return Err(AppError::configuration(format!(
                "reminders.deadline_urgent_days ({}) exceeds reminders.deadline_reminder_days ({})",
                self.deadline_urgent_days, self.deadline_reminder_days
            )));
        }
        Ok(())
    }
}

fn check_range(name: &str, value: i64, max: i64) -> Result<(), AppError> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::configuration(format!(
            "reminders.{name} must be between 1 and {max}, got {value}"
        )))
    }
}

fn default_due_soon_hours() -> i64 {
    24
}

fn default_status_check_days() -> i64 {
    14
}

fn default_urgent_days() -> i64 {
    1
}

fn default_reminder_days() -> i64 {
    7
}

fn default_digest_days() -> i64 {
    7
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ReminderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_thresholds_rejected() {
        let config = ReminderConfig {
            due_soon_hours: i64::MAX / 1000,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.message.contains("due_soon_hours"));

        let config = ReminderConfig {
            status_check_after_days: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ReminderConfig {
            deadline_urgent_days: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
