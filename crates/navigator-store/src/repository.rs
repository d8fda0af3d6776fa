//! Typed collections over the key-value store.
//!
//! Each collection is one JSON array under one key, kept in insertion
//! order. A document that fails to parse is logged and read as empty; the
//! next successful write replaces it.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use navigator_core::result::AppResult;
use navigator_core::traits::store::KeyValueStore;
use navigator_core::types::{ApplicationId, NotificationId, TodoId};
use navigator_entity::application::Application;
use navigator_entity::notification::Notification;
use navigator_entity::profile::UserProfile;
use navigator_entity::todo::TodoItem;

use crate::keys::KeySpace;

/// Typed access to everything the navigator persists.
#[derive(Debug, Clone)]
pub struct NavigatorStore {
    /// Raw key-value backend.
    kv: Arc<dyn KeyValueStore>,
    /// Key builder.
    keys: KeySpace,
}

impl NavigatorStore {
    /// Create a store over a backend with the given key space.
    pub fn new(kv: Arc<dyn KeyValueStore>, keys: KeySpace) -> Self {
        Self { kv, keys }
    }

    /// Create a store over a fresh in-memory backend.
    #[cfg(feature = "memory")]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(crate::memory::MemoryStore::new()),
            KeySpace::default(),
        )
    }

    /// The raw backend.
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.kv.as_ref()
    }

    // ── Profile ────────────────────────────────────────────────

    /// Load the user profile. A missing or unreadable profile is `None`.
    pub async fn profile(&self) -> AppResult<Option<UserProfile>> {
        let key = self.keys.profile();
        let Some(raw) = self.kv.get(&key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!(key = %key, error = %e, "Stored profile is malformed, ignoring");
                Ok(None)
            }
        }
    }

    /// Replace the user profile.
    pub async fn save_profile(&self, profile: &UserProfile) -> AppResult<()> {
        let json = serde_json::to_string(profile)?;
        self.kv.set(&self.keys.profile(), &json).await
    }

    /// Remove the user profile.
    pub async fn delete_profile(&self) -> AppResult<()> {
        self.kv.delete(&self.keys.profile()).await
    }

    // ── To-dos ─────────────────────────────────────────────────

    /// All to-do items in insertion order.
    pub async fn todos(&self) -> AppResult<Vec<TodoItem>> {
        self.load_collection(&self.keys.todos()).await
    }

    /// Insert or replace a to-do item, keeping its position on replace.
    pub async fn save_todo(&self, todo: &TodoItem) -> AppResult<()> {
        let mut todos = self.todos().await?;
        match todos.iter_mut().find(|t| t.id == todo.id) {
            Some(existing) => *existing = todo.clone(),
            None => todos.push(todo.clone()),
        }
        self.save_collection(&self.keys.todos(), &todos).await
    }

    /// Replace the whole to-do collection.
    pub async fn save_todos(&self, todos: &[TodoItem]) -> AppResult<()> {
        self.save_collection(&self.keys.todos(), todos).await
    }

    /// Delete a to-do item. Returns `true` if it existed.
    pub async fn delete_todo(&self, id: TodoId) -> AppResult<bool> {
        let mut todos = self.todos().await?;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Ok(false);
        }
        self.save_collection(&self.keys.todos(), &todos).await?;
        Ok(true)
    }

    // ── Applications ───────────────────────────────────────────

    /// All applications in insertion order.
    pub async fn applications(&self) -> AppResult<Vec<Application>> {
        self.load_collection(&self.keys.applications()).await
    }

    /// Insert or replace an application, keeping its position on replace.
    pub async fn save_application(&self, application: &Application) -> AppResult<()> {
        let mut applications = self.applications().await?;
        match applications.iter_mut().find(|a| a.id == application.id) {
            Some(existing) => *existing = application.clone(),
            None => applications.push(application.clone()),
        }
        self.save_collection(&self.keys.applications(), &applications)
            .await
    }

    /// Find one application by id.
    pub async fn application(&self, id: ApplicationId) -> AppResult<Option<Application>> {
        Ok(self
            .applications()
            .await?
            .into_iter()
            .find(|a| a.id == id))
    }

    // ── Notifications ──────────────────────────────────────────

    /// All notifications in insertion order.
    pub async fn notifications(&self) -> AppResult<Vec<Notification>> {
        self.load_collection(&self.keys.notifications()).await
    }

    /// Insert a notification unless an equivalent one already exists.
    ///
    /// Equivalent means the same id, or the same entity-bound trigger key.
    /// Periodic triggers (no entity id) are not deduplicated here; their
    /// period check belongs to the caller. Returns `true` if inserted.
    pub async fn insert_notification(&self, notification: &Notification) -> AppResult<bool> {
        let mut notifications = self.notifications().await?;

        let duplicate = notifications.iter().any(|existing| {
            existing.id == notification.id
                || match (&existing.trigger, &notification.trigger) {
                    (Some(a), Some(b)) => b.entity_id.is_some() && a == b,
                    _ => false,
                }
        });
        if duplicate {
            debug!(
                trigger = ?notification.trigger,
                "Equivalent notification exists, skipping"
            );
            return Ok(false);
        }

        notifications.push(notification.clone());
        self.save_collection(&self.keys.notifications(), &notifications)
            .await?;
        Ok(true)
    }

    /// Set the read flag on one notification. Returns `true` if found.
    pub async fn set_notification_read(&self, id: NotificationId, read: bool) -> AppResult<bool> {
        let mut notifications = self.notifications().await?;
        let Some(target) = notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };
        target.is_read = read;
        self.save_collection(&self.keys.notifications(), &notifications)
            .await?;
        Ok(true)
    }

    /// Mark every notification read. Returns how many changed.
    pub async fn mark_all_notifications_read(&self) -> AppResult<usize> {
        let mut notifications = self.notifications().await?;
        let mut changed = 0;
        for notification in notifications.iter_mut().filter(|n| !n.is_read) {
            notification.is_read = true;
            changed += 1;
        }
        if changed > 0 {
            self.save_collection(&self.keys.notifications(), &notifications)
                .await?;
        }
        Ok(changed)
    }

    /// Delete one notification. Returns `true` if it existed.
    pub async fn delete_notification(&self, id: NotificationId) -> AppResult<bool> {
        let mut notifications = self.notifications().await?;
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        if notifications.len() == before {
            return Ok(false);
        }
        self.save_collection(&self.keys.notifications(), &notifications)
            .await?;
        Ok(true)
    }

    /// Remove every notification. Returns how many were removed.
    pub async fn clear_notifications(&self) -> AppResult<usize> {
        let count = self.notifications().await?.len();
        self.kv.delete(&self.keys.notifications()).await?;
        Ok(count)
    }

    // ── Everything ─────────────────────────────────────────────

    /// Delete every key in this store's key space.
    pub async fn clear_all(&self) -> AppResult<usize> {
        let keys = self.kv.keys(&self.keys.all()).await?;
        for key in &keys {
            self.kv.delete(key).await?;
        }
        Ok(keys.len())
    }

    async fn load_collection<T: DeserializeOwned>(&self, key: &str) -> AppResult<Vec<T>> {
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(key, error = %e, "Stored collection is malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> AppResult<()> {
        let json = serde_json::to_string(items)?;
        self.kv.set(key, &json).await
    }
}
