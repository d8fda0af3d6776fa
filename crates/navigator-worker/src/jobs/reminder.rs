//! Deadline scan and recommendation digest jobs.

use std::fmt;

use tracing;

use navigator_service::ReminderGenerator;

/// A recurring reminder job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderJob {
    /// Overdue/due-soon tasks and application deadlines. Hourly.
    DeadlineScan,
    /// The "new programs" digest. Weekly.
    RecommendationDigest,
}

impl ReminderJob {
    /// Every job, in the order a full pass runs them.
    pub const ALL: [ReminderJob; 2] = [Self::DeadlineScan, Self::RecommendationDigest];

    /// Job name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DeadlineScan => "deadline_scan",
            Self::RecommendationDigest => "recommendation_digest",
        }
    }

    /// Run one pass. Returns the number of notifications created.
    pub async fn run(&self, generator: &ReminderGenerator) -> usize {
        let created = match self {
            Self::DeadlineScan => generator.check_deadlines().await,
            Self::RecommendationDigest => generator.check_recommendations().await,
        };
        tracing::debug!(job = self.name(), created, "Reminder job finished");
        created
    }
}

impl fmt::Display for ReminderJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};
    use navigator_core::traits::clock::{Clock, FixedClock};
    use navigator_entity::profile::UserProfile;
    use navigator_entity::todo::TodoItem;
    use navigator_service::ReminderRules;
    use navigator_store::NavigatorStore;

    #[tokio::test]
    async fn test_jobs_dispatch_to_their_check() {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 5, 5, 9, 0, 0).unwrap(),
        ));
        let now = clock.now();
        let store = NavigatorStore::in_memory();
        store.save_profile(&UserProfile::new(now)).await.unwrap();
        store
            .save_todo(&TodoItem::new("Late", Some(now - Duration::hours(1)), now))
            .await
            .unwrap();
        let generator = ReminderGenerator::new(store, ReminderRules::default(), clock);

        assert_eq!(ReminderJob::DeadlineScan.run(&generator).await, 1);
        assert_eq!(ReminderJob::RecommendationDigest.run(&generator).await, 1);
        assert_eq!(ReminderJob::DeadlineScan.run(&generator).await, 0);
        assert_eq!(ReminderJob::RecommendationDigest.run(&generator).await, 0);
    }

    #[test]
    fn test_names() {
        assert_eq!(ReminderJob::DeadlineScan.to_string(), "deadline_scan");
        assert_eq!(
            ReminderJob::RecommendationDigest.name(),
            "recommendation_digest"
        );
    }
}
