//! Reminder generator: applies [`ReminderRules`] to stored records and
//! persists whatever is new.
//!
//! Every pass is idempotent. Entity-bound notifications are deduplicated by
//! the store on their trigger key; the digest is gated on its period here.
//! Store failures are logged and the pass reports zero new notifications.

use std::sync::Arc;

use tracing::{debug, info, warn};

use navigator_core::result::AppResult;
use navigator_core::traits::clock::Clock;
use navigator_entity::notification::Notification;
use navigator_store::NavigatorStore;

use super::rules::ReminderRules;

/// Derives and stores time-sensitive notifications.
#[derive(Debug, Clone)]
pub struct ReminderGenerator {
    /// Persistent records.
    store: NavigatorStore,
    /// Conditions.
    rules: ReminderRules,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl ReminderGenerator {
    /// Creates a new reminder generator.
    pub fn new(store: NavigatorStore, rules: ReminderRules, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            rules,
            clock,
        }
    }

    /// Scan to-dos and applications. Returns the number of new notifications.
    pub async fn check_deadlines(&self) -> usize {
        match self.try_check_deadlines().await {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, "Deadline check failed, no new notifications this cycle");
                0
            }
        }
    }

    /// Issue the recommendation digest if the period has elapsed.
    /// Returns 1 if a digest was stored, 0 otherwise.
    pub async fn check_recommendations(&self) -> usize {
        match self.try_check_recommendations().await {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, "Recommendation digest check failed");
                0
            }
        }
    }

    /// Run every check once.
    pub async fn run_all(&self) -> usize {
        self.check_deadlines().await + self.check_recommendations().await
    }

    async fn try_check_deadlines(&self) -> AppResult<usize> {
        let now = self.clock.now();
        let todos = self.store.todos().await?;
        let applications = self.store.applications().await?;

        let mut candidates = self.rules.todo_reminders(&todos, now);
        candidates.extend(self.rules.application_reminders(&applications, now));

        let created = self.persist(candidates).await;
        if created > 0 {
            info!(created, "Deadline check created notifications");
        } else {
            debug!("Deadline check found nothing new");
        }
        Ok(created)
    }

    async fn try_check_recommendations(&self) -> AppResult<usize> {
        if self.store.profile().await?.is_none() {
            debug!("No profile stored, skipping recommendation digest");
            return Ok(0);
        }

        let now = self.clock.now();
        let existing = self.store.notifications().await?;
        if !self.rules.digest_due(&existing, now) {
            debug!("Recommendation digest already issued this period");
            return Ok(0);
        }

        let created = self.persist(vec![self.rules.digest(now)]).await;
        if created > 0 {
            info!("Recommendation digest created");
        }
        Ok(created)
    }

    /// Insert candidates one by one; a failed write is logged and skipped.
    async fn persist(&self, candidates: Vec<Notification>) -> usize {
        let mut created = 0;
        for notification in candidates {
            match self.store.insert_notification(&notification).await {
                Ok(true) => created += 1,
                Ok(false) => {}
                Err(e) => warn!(
                    trigger = ?notification.trigger,
                    error = %e,
                    "Failed to store notification"
                ),
            }
        }
        created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use navigator_core::error::AppError;
    use navigator_core::traits::clock::FixedClock;
    use navigator_core::traits::store::KeyValueStore;
    use navigator_entity::profile::UserProfile;
    use navigator_entity::todo::TodoItem;
    use navigator_store::keys::KeySpace;
    use navigator_store::memory::MemoryStore;

    /// Memory backend whose writes can be switched off.
    #[derive(Debug, Default)]
    struct ReadOnlyToggle {
        inner: MemoryStore,
        read_only: AtomicBool,
    }

    #[async_trait]
    impl KeyValueStore for ReadOnlyToggle {
        fn provider_type(&self) -> &str {
            "read-only-toggle"
        }

        async fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> AppResult<()> {
            if self.read_only.load(Ordering::SeqCst) {
                return Err(AppError::storage(format!("Disk full writing '{key}'")));
            }
            self.inner.set(key, value).await
        }

        async fn delete(&self, key: &str) -> AppResult<()> {
            self.inner.delete(key).await
        }

        async fn keys(&self, prefix: &str) -> AppResult<Vec<String>> {
            self.inner.keys(prefix).await
        }

        async fn health_check(&self) -> AppResult<bool> {
            Ok(!self.read_only.load(Ordering::SeqCst))
        }
    }

    fn setup() -> (ReminderGenerator, NavigatorStore, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).unwrap(),
        ));
        let store = NavigatorStore::in_memory();
        let generator =
            ReminderGenerator::new(store.clone(), ReminderRules::default(), clock.clone());
        (generator, store, clock)
    }

    #[tokio::test]
    async fn test_second_pass_creates_nothing() {
        let (generator, store, clock) = setup();
        let now = clock.now();
        store
            .save_todo(&TodoItem::new("Late", Some(now - Duration::days(1)), now))
            .await
            .unwrap();
        store
            .save_todo(&TodoItem::new("Soon", Some(now + Duration::hours(3)), now))
            .await
            .unwrap();

        assert_eq!(generator.check_deadlines().await, 2);
        assert_eq!(generator.check_deadlines().await, 0);
        assert_eq!(store.notifications().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_due_soon_then_overdue_are_separate_triggers() {
        let (generator, store, clock) = setup();
        let now = clock.now();
        store
            .save_todo(&TodoItem::new("Upload", Some(now + Duration::hours(2)), now))
            .await
            .unwrap();

        assert_eq!(generator.check_deadlines().await, 1);
        clock.advance(Duration::hours(3));
        assert_eq!(generator.check_deadlines().await, 1);
        clock.advance(Duration::hours(1));
        assert_eq!(generator.check_deadlines().await, 0);
    }

    #[tokio::test]
    async fn test_digest_requires_profile_and_respects_period() {
        let (generator, store, clock) = setup();
        assert_eq!(generator.check_recommendations().await, 0);

        store
            .save_profile(&UserProfile::new(clock.now()))
            .await
            .unwrap();
        assert_eq!(generator.check_recommendations().await, 1);
        assert_eq!(generator.check_recommendations().await, 0);

        clock.advance(Duration::days(6));
        assert_eq!(generator.check_recommendations().await, 0);
        clock.advance(Duration::days(2));
        assert_eq!(generator.check_recommendations().await, 1);
    }

    #[tokio::test]
    async fn test_malformed_store_degrades_to_zero() {
        let (generator, store, _clock) = setup();
        store
            .backend()
            .set("navigator:todos", "corrupt")
            .await
            .unwrap();
        assert_eq!(generator.run_all().await, 0);
    }

    #[tokio::test]
    async fn test_failed_write_is_skipped_and_retried_next_pass() {
        let backend = Arc::new(ReadOnlyToggle::default());
        let store = NavigatorStore::new(backend.clone(), KeySpace::default());
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).unwrap(),
        ));
        let generator =
            ReminderGenerator::new(store.clone(), ReminderRules::default(), clock.clone());
        let now = clock.now();
        store
            .save_todo(&TodoItem::new("Late", Some(now - Duration::days(1)), now))
            .await
            .unwrap();

        backend.read_only.store(true, Ordering::SeqCst);
        assert_eq!(generator.check_deadlines().await, 0);
        assert!(store.notifications().await.unwrap().is_empty());

        backend.read_only.store(false, Ordering::SeqCst);
        assert_eq!(generator.check_deadlines().await, 1);
        assert_eq!(store.notifications().await.unwrap().len(), 1);
    }
}
