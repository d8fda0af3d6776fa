//! Tracked application entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use navigator_core::types::{ApplicationId, ProgramId};

use super::status::ApplicationStatus;

/// The user's tracked interaction with one program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Unique application identifier.
    pub id: ApplicationId,
    /// The program applied to.
    pub program_id: ProgramId,
    /// Program name at the time the application was created.
    pub program_name: String,
    /// Current status.
    pub status: ApplicationStatus,
    /// When the application was started or saved.
    pub applied_at: DateTime<Utc>,
    /// Submission deadline, if any.
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Required documents the user has checked off.
    #[serde(default)]
    pub documents_checked: Vec<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// When the record was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Create a new application record.
    pub fn new(
        program_id: ProgramId,
        program_name: impl Into<String>,
        status: ApplicationStatus,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ApplicationId::new(),
            program_id,
            program_name: program_name.into(),
            status,
            applied_at: now,
            deadline: None,
            documents_checked: Vec::new(),
            notes: None,
            updated_at: now,
        }
    }

    /// Time since the application was created.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        now - self.applied_at
    }

    /// Time left until the deadline. Negative once the deadline has passed.
    pub fn time_until_deadline(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.deadline.map(|deadline| deadline - now)
    }

    /// Whether `document` has been checked off (case-insensitive).
    pub fn has_document(&self, document: &str) -> bool {
        self.documents_checked
            .iter()
            .any(|d| d.eq_ignore_ascii_case(document.trim()))
    }
}
