//! To-do item entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use navigator_core::types::{ProgramId, TodoId};

/// A user task, optionally tied to a program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique to-do identifier.
    pub id: TodoId,
    /// Short title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// When the task is due.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
    /// Related program, if any.
    #[serde(default)]
    pub program_id: Option<ProgramId>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Create an open task.
    pub fn new(title: impl Into<String>, due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        Self {
            id: TodoId::new(),
            title: title.into(),
            description: None,
            due_date,
            completed: false,
            program_id: None,
            created_at: now,
        }
    }

    /// Open and due strictly before `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }

    /// Open and due between `now` and `now + window`, inclusive.
    pub fn is_due_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        !self.completed
            && self
                .due_date
                .is_some_and(|due| due >= now && due.signed_duration_since(now) <= window)
    }
}
