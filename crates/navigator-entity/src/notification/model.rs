//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use navigator_core::types::NotificationId;

use super::kind::NotificationKind;
use super::priority::NotificationPriority;
use super::trigger::TriggerKey;

/// A notification shown in the user's inbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Priority level.
    pub priority: NotificationPriority,
    /// Whether the user has read this notification.
    #[serde(default)]
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// In-app link the notification points at.
    #[serde(default)]
    pub action_url: Option<String>,
    /// Additional structured data (JSON).
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    /// Condition that generated this notification; `None` for manual ones.
    #[serde(default)]
    pub trigger: Option<TriggerKey>,
}

impl Notification {
    /// Create an unread notification.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        priority: NotificationPriority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            message: message.into(),
            kind,
            priority,
            is_read: false,
            created_at,
            action_url: None,
            metadata: None,
            trigger: None,
        }
    }

    /// Attach the trigger that produced this notification.
    pub fn with_trigger(mut self, trigger: TriggerKey) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Attach an in-app link.
    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    /// Attach structured metadata.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Check if the notification has been read.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}
