//! Notification inbox management.

use std::sync::Arc;

use tracing::info;

use navigator_core::error::AppError;
use navigator_core::result::AppResult;
use navigator_core::traits::clock::Clock;
use navigator_core::types::NotificationId;
use navigator_entity::notification::{Notification, NotificationKind, NotificationPriority};
use navigator_store::NavigatorStore;

/// Manages the user's notification inbox.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Persistent records.
    store: NavigatorStore,
    /// Time source for manually created notifications.
    clock: Arc<dyn Clock>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(store: NavigatorStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Every notification, newest first.
    pub async fn list(&self) -> AppResult<Vec<Notification>> {
        let mut notifications = self.store.notifications().await?;
        // Stable sort; insertion order breaks ties.
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    /// Unread notifications, newest first.
    pub async fn unread(&self) -> AppResult<Vec<Notification>> {
        let mut notifications = self.list().await?;
        notifications.retain(Notification::is_unread);
        Ok(notifications)
    }

    /// Number of unread notifications.
    pub async fn unread_count(&self) -> AppResult<usize> {
        Ok(self
            .store
            .notifications()
            .await?
            .iter()
            .filter(|n| n.is_unread())
            .count())
    }

    /// Marks a notification as read.
    pub async fn mark_read(&self, id: NotificationId) -> AppResult<()> {
        self.set_read(id, true).await
    }

    /// Marks a notification as unread.
    pub async fn mark_unread(&self, id: NotificationId) -> AppResult<()> {
        self.set_read(id, false).await
    }

    /// Marks every notification as read. Returns how many changed.
    pub async fn mark_all_read(&self) -> AppResult<usize> {
        let changed = self.store.mark_all_notifications_read().await?;
        info!(changed, "Marked all notifications read");
        Ok(changed)
    }

    /// Deletes a notification.
    pub async fn delete(&self, id: NotificationId) -> AppResult<()> {
        if !self.store.delete_notification(id).await? {
            return Err(AppError::not_found(format!("Notification {id} not found")));
        }
        info!(notification_id = %id, "Notification deleted");
        Ok(())
    }

    /// Removes every notification. Returns how many were removed.
    pub async fn clear(&self) -> AppResult<usize> {
        let removed = self.store.clear_notifications().await?;
        info!(removed, "Notifications cleared");
        Ok(removed)
    }

    /// Creates an ad-hoc system notification.
    pub async fn create(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        priority: NotificationPriority,
    ) -> AppResult<Notification> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(AppError::validation("Notification title must not be empty"));
        }
        let notification = Notification::new(
            title,
            message,
            NotificationKind::System,
            priority,
            self.clock.now(),
        );
        self.store.insert_notification(&notification).await?;
        Ok(notification)
    }

    async fn set_read(&self, id: NotificationId, read: bool) -> AppResult<()> {
        if !self.store.set_notification_read(id, read).await? {
            return Err(AppError::not_found(format!("Notification {id} not found")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use navigator_core::error::ErrorKind;
    use navigator_core::traits::clock::FixedClock;

    fn setup() -> (NotificationService, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        ));
        let service = NotificationService::new(NavigatorStore::in_memory(), clock.clone());
        (service, clock)
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (service, clock) = setup();
        let first = service
            .create("First", "a", NotificationPriority::Low)
            .await
            .unwrap();
        clock.advance(Duration::minutes(5));
        let second = service
            .create("Second", "b", NotificationPriority::High)
            .await
            .unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_read_state_transitions() {
        let (service, _clock) = setup();
        let a = service
            .create("A", "", NotificationPriority::Medium)
            .await
            .unwrap();
        service
            .create("B", "", NotificationPriority::Medium)
            .await
            .unwrap();
        assert_eq!(service.unread_count().await.unwrap(), 2);

        service.mark_read(a.id).await.unwrap();
        assert_eq!(service.unread_count().await.unwrap(), 1);
        assert_eq!(service.unread().await.unwrap()[0].title, "B");

        service.mark_unread(a.id).await.unwrap();
        assert_eq!(service.mark_all_read().await.unwrap(), 2);
        assert_eq!(service.mark_all_read().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let (service, _clock) = setup();
        let id = NotificationId::new();
        assert_eq!(
            service.mark_read(id).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
        assert_eq!(
            service.delete(id).await.unwrap_err().kind,
            ErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let (service, _clock) = setup();
        let a = service
            .create("A", "", NotificationPriority::Low)
            .await
            .unwrap();
        service
            .create("B", "", NotificationPriority::Low)
            .await
            .unwrap();

        service.delete(a.id).await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), 1);
        assert_eq!(service.clear().await.unwrap(), 1);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let (service, _clock) = setup();
        let err = service
            .create("  ", "x", NotificationPriority::Low)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
