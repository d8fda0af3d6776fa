//! Notification kind enumeration.

use serde::{Deserialize, Serialize};

/// Kind of a notification for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Application deadline approaching.
    Deadline,
    /// To-do reminders.
    Reminder,
    /// Application status follow-ups.
    Application,
    /// Program recommendations.
    Recommendation,
    /// Everything else.
    System,
}

impl NotificationKind {
    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deadline => "deadline",
            Self::Reminder => "reminder",
            Self::Application => "application",
            Self::Recommendation => "recommendation",
            Self::System => "system",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
