//! Stable deduplication keys for generated notifications.
//!
//! Every generated notification carries the condition that produced it and
//! the record it is about. Two notifications with the same [`TriggerKey`]
//! are the same notification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Condition that produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// An open to-do past its due date.
    OverdueTask,
    /// An open to-do due within the reminder window.
    TaskDueSoon,
    /// A submitted application with no decision for a while.
    ApplicationStatusCheck,
    /// An application deadline within a day.
    DeadlineUrgent,
    /// An application deadline within a week.
    DeadlineReminder,
    /// The periodic "new programs" digest.
    RecommendationDigest,
}

impl TriggerKind {
    /// Return the trigger kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OverdueTask => "overdue_task",
            Self::TaskDueSoon => "task_due_soon",
            Self::ApplicationStatusCheck => "application_status_check",
            Self::DeadlineUrgent => "deadline_urgent",
            Self::DeadlineReminder => "deadline_reminder",
            Self::RecommendationDigest => "recommendation_digest",
        }
    }
}

/// `(trigger kind, entity id)` pair identifying a generated notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerKey {
    /// The condition.
    pub kind: TriggerKind,
    /// The record the condition is about; `None` for periodic triggers.
    #[serde(default)]
    pub entity_id: Option<String>,
}

impl TriggerKey {
    /// Key for a condition on a specific record.
    pub fn for_entity(kind: TriggerKind, entity_id: impl fmt::Display) -> Self {
        Self {
            kind,
            entity_id: Some(entity_id.to_string()),
        }
    }

    /// Key for a periodic condition not tied to a record.
    pub fn periodic(kind: TriggerKind) -> Self {
        Self {
            kind,
            entity_id: None,
        }
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity_id {
            Some(id) => write!(f, "{}:{}", self.kind.as_str(), id),
            None => f.write_str(self.kind.as_str()),
        }
    }
}
