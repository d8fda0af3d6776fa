//! Reminder rules: which stored records deserve a notification right now.
//!
//! Rules are pure: they take records and "now" and return candidate
//! notifications, each carrying the [`TriggerKey`] the store deduplicates
//! on. Persisting them is the generator's job.

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tracing::warn;

use navigator_core::config::ReminderConfig;
use navigator_entity::application::{Application, ApplicationStatus};
use navigator_entity::notification::{
    Notification, NotificationKind, NotificationPriority, TriggerKey, TriggerKind,
};
use navigator_entity::todo::TodoItem;

/// In-app route of the to-do list.
const TODOS_URL: &str = "/todos";
/// In-app route of the application tracker.
const TRACKER_URL: &str = "/tracker";
/// In-app route of the recommendations page.
const RECOMMENDATIONS_URL: &str = "/recommendations";

/// Evaluates reminder conditions against stored records.
#[derive(Debug, Clone, Default)]
pub struct ReminderRules {
    /// Thresholds.
    config: ReminderConfig,
}

impl ReminderRules {
    /// Creates a rules engine with the given thresholds.
    pub fn new(config: ReminderConfig) -> Self {
        Self { config }
    }

    /// Overdue and due-soon reminders, in to-do order.
    pub fn todo_reminders(&self, todos: &[TodoItem], now: DateTime<Utc>) -> Vec<Notification> {
        let window = span(
            Duration::try_hours(self.config.due_soon_hours),
            "due_soon_hours",
            self.config.due_soon_hours,
        );
        todos
            .iter()
            .filter_map(|todo| {
                let due = todo.due_date?;
                if todo.is_overdue(now) {
                    Some(
                        Notification::new(
                            "Overdue Task",
                            format!(
                                "\"{}\" was due {}. Mark it done or pick a new date.",
                                todo.title,
                                due.format("%b %-d")
                            ),
                            NotificationKind::Reminder,
                            NotificationPriority::High,
                            now,
                        )
                        .with_trigger(TriggerKey::for_entity(TriggerKind::OverdueTask, todo.id))
                        .with_action_url(TODOS_URL)
                        .with_metadata(json!({ "todo_id": todo.id })),
                    )
                } else if window.is_some_and(|w| todo.is_due_within(now, w)) {
                    Some(
                        Notification::new(
                            "Task Due Tomorrow",
                            format!(
                                "\"{}\" is due {}.",
                                todo.title,
                                due.format("%b %-d at %-I:%M %p")
                            ),
                            NotificationKind::Reminder,
                            NotificationPriority::Medium,
                            now,
                        )
                        .with_trigger(TriggerKey::for_entity(TriggerKind::TaskDueSoon, todo.id))
                        .with_action_url(TODOS_URL)
                        .with_metadata(json!({ "todo_id": todo.id })),
                    )
                } else {
                    None
                }
            })
            .collect()
    }

    /// Status-check and deadline reminders, in application order.
    pub fn application_reminders(
        &self,
        applications: &[Application],
        now: DateTime<Utc>,
    ) -> Vec<Notification> {
        let mut out = Vec::new();
        for app in applications {
            if let Some(notification) = self.status_check(app, now) {
                out.push(notification);
            }
            if let Some(notification) = self.deadline_reminder(app, now) {
                out.push(notification);
            }
        }
        out
    }

    /// Whether a new digest is due: no recommendation notification was
    /// created within the digest interval.
    pub fn digest_due(&self, existing: &[Notification], now: DateTime<Utc>) -> bool {
        let interval = self.days("digest_interval_days", self.config.digest_interval_days);
        let Some(since) = interval.and_then(|d| now.checked_sub_signed(d)) else {
            return false;
        };
        !existing
            .iter()
            .any(|n| n.kind == NotificationKind::Recommendation && n.created_at > since)
    }

    /// The periodic "new programs" digest.
    pub fn digest(&self, now: DateTime<Utc>) -> Notification {
        Notification::new(
            "New Programs Available",
            "New assistance programs may match your profile. Check your recommendations.",
            NotificationKind::Recommendation,
            NotificationPriority::Low,
            now,
        )
        .with_trigger(TriggerKey::periodic(TriggerKind::RecommendationDigest))
        .with_action_url(RECOMMENDATIONS_URL)
    }

    fn status_check(&self, app: &Application, now: DateTime<Utc>) -> Option<Notification> {
        if app.status != ApplicationStatus::Submitted {
            return None;
        }
        let after = self.days("status_check_after_days", self.config.status_check_after_days)?;
        if app.elapsed(now) <= after {
            return None;
        }
        let days = app.elapsed(now).num_days();
        Some(
            Notification::new(
                "Application Status Check",
                format!(
                    "It has been {days} days since you applied to {}. Consider contacting them for an update.",
                    app.program_name
                ),
                NotificationKind::Application,
                NotificationPriority::Medium,
                now,
            )
            .with_trigger(TriggerKey::for_entity(
                TriggerKind::ApplicationStatusCheck,
                app.id,
            ))
            .with_action_url(format!("{TRACKER_URL}/{}", app.id))
            .with_metadata(json!({
                "application_id": app.id,
                "program_id": app.program_id,
                "program_name": app.program_name,
                "days_since_applied": days,
            })),
        )
    }

    /// Deadline already passed: nothing to remind.
    fn deadline_reminder(&self, app: &Application, now: DateTime<Utc>) -> Option<Notification> {
        let remaining = app.time_until_deadline(now)?;
        if remaining < Duration::zero() {
            return None;
        }
        let days = ceil_days(remaining);
        let urgent = self.days("deadline_urgent_days", self.config.deadline_urgent_days);
        let reminder = self.days("deadline_reminder_days", self.config.deadline_reminder_days);

        let (title, message, priority, kind) =
            if urgent.is_some_and(|d| remaining <= d) {
                (
                    "Application Deadline Tomorrow",
                    format!("The deadline for {} is within 24 hours.", app.program_name),
                    NotificationPriority::Urgent,
                    TriggerKind::DeadlineUrgent,
                )
            } else if reminder.is_some_and(|d| remaining <= d) {
                (
                    "Application Deadline Approaching",
                    format!("{} is due in {days} days.", app.program_name),
                    NotificationPriority::High,
                    TriggerKind::DeadlineReminder,
                )
            } else {
                return None;
            };

        Some(
            Notification::new(title, message, NotificationKind::Deadline, priority, now)
                .with_trigger(TriggerKey::for_entity(kind, app.id))
                .with_action_url(format!("{TRACKER_URL}/{}", app.id))
                .with_metadata(json!({
                    "application_id": app.id,
                    "program_id": app.program_id,
                    "program_name": app.program_name,
                    "days_remaining": days,
                })),
        )
    }

    fn days(&self, setting: &str, value: i64) -> Option<Duration> {
        span(Duration::try_days(value), setting, value)
    }
}

/// A threshold chrono cannot represent disables its rule.
fn span(duration: Option<Duration>, setting: &str, value: i64) -> Option<Duration> {
    if duration.is_none() {
        warn!(setting, value, "Reminder threshold out of range, rule skipped");
    }
    duration
}

fn ceil_days(d: Duration) -> i64 {
    const DAY: i64 = 86_400;
    (d.num_seconds() + DAY - 1).div_euclid(DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use navigator_core::types::ProgramId;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 10, 15, 0, 0).unwrap()
    }

    fn rules() -> ReminderRules {
        ReminderRules::default()
    }

    fn submitted(days_ago: i64) -> Application {
        Application::new(
            ProgramId::from("snap"),
            "SNAP",
            ApplicationStatus::Submitted,
            now() - Duration::days(days_ago),
        )
    }

    #[test]
    fn test_overdue_todo_references_title() {
        let todo = TodoItem::new("Renew ID", Some(now() - Duration::days(1)), now());
        let out = rules().todo_reminders(&[todo.clone()], now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Overdue Task");
        assert!(out[0].message.contains("Renew ID"));
        assert_eq!(
            out[0].trigger,
            Some(TriggerKey::for_entity(TriggerKind::OverdueTask, todo.id))
        );
    }

    #[test]
    fn test_due_soon_and_far_todos() {
        let soon = TodoItem::new("Soon", Some(now() + Duration::hours(6)), now());
        let far = TodoItem::new("Far", Some(now() + Duration::days(3)), now());
        let mut done = TodoItem::new("Done", Some(now() - Duration::days(2)), now());
        done.completed = true;
        let undated = TodoItem::new("Undated", None, now());

        let out = rules().todo_reminders(&[soon, far, done, undated], now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Task Due Tomorrow");
        assert_eq!(out[0].priority, NotificationPriority::Medium);
    }

    #[test]
    fn test_status_check_threshold() {
        let out = rules().application_reminders(&[submitted(20)], now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Application Status Check");
        assert!(out[0].message.contains("SNAP"));

        assert!(rules().application_reminders(&[submitted(5)], now()).is_empty());
        assert!(rules().application_reminders(&[submitted(14)], now()).is_empty());

        let mut started = submitted(30);
        started.status = ApplicationStatus::Started;
        assert!(rules().application_reminders(&[started], now()).is_empty());
    }

    #[test]
    fn test_deadline_priorities() {
        let mut urgent = submitted(1);
        urgent.deadline = Some(now() + Duration::hours(20));
        let mut week = submitted(1);
        week.deadline = Some(now() + Duration::days(5));
        let mut later = submitted(1);
        later.deadline = Some(now() + Duration::days(20));
        let mut passed = submitted(1);
        passed.deadline = Some(now() - Duration::hours(1));

        let out = rules().application_reminders(&[urgent.clone(), week, later, passed], now());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].priority, NotificationPriority::Urgent);
        assert_eq!(out[0].kind, NotificationKind::Deadline);
        assert_eq!(out[0].metadata.as_ref().unwrap()["days_remaining"], 1);
        assert_eq!(
            out[0].metadata.as_ref().unwrap()["application_id"],
            json!(urgent.id)
        );
        assert_eq!(out[1].priority, NotificationPriority::High);
        assert_eq!(out[1].metadata.as_ref().unwrap()["days_remaining"], 5);
    }

    #[test]
    fn test_decided_applications_still_get_deadline_reminders() {
        let mut approved = submitted(1);
        approved.status = ApplicationStatus::Approved;
        approved.deadline = Some(now() + Duration::hours(3));
        let mut denied = submitted(1);
        denied.status = ApplicationStatus::Denied;
        denied.deadline = Some(now() + Duration::days(5));

        let out = rules().application_reminders(&[approved.clone(), denied], now());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].priority, NotificationPriority::Urgent);
        assert_eq!(
            out[0].trigger,
            Some(TriggerKey::for_entity(TriggerKind::DeadlineUrgent, approved.id))
        );
        assert_eq!(out[1].priority, NotificationPriority::High);
    }

    #[test]
    fn test_unrepresentable_thresholds_skip_their_rule() {
        let config = ReminderConfig {
            due_soon_hours: i64::MAX / 1000,
            status_check_after_days: i64::MAX,
            deadline_urgent_days: i64::MAX,
            deadline_reminder_days: 7,
            digest_interval_days: i64::MAX,
        };
        let rules = ReminderRules::new(config);

        let soon = TodoItem::new("Soon", Some(now() + Duration::hours(2)), now());
        let late = TodoItem::new("Late", Some(now() - Duration::hours(2)), now());
        let out = rules.todo_reminders(&[soon, late], now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Overdue Task");

        let mut app = submitted(30);
        app.deadline = Some(now() + Duration::hours(3));
        let out = rules.application_reminders(&[app], now());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].priority, NotificationPriority::High);

        assert!(!rules.digest_due(&[], now()));
    }

    #[test]
    fn test_digest_window() {
        let r = rules();
        assert!(r.digest_due(&[], now()));

        let mut recent = r.digest(now() - Duration::days(3));
        assert!(!r.digest_due(&[recent.clone()], now()));

        recent.created_at = now() - Duration::days(8);
        assert!(r.digest_due(&[recent.clone()], now()));

        recent.kind = NotificationKind::System;
        recent.created_at = now();
        assert!(r.digest_due(&[recent], now()));
    }

    #[test]
    fn test_ceil_days() {
        assert_eq!(ceil_days(Duration::hours(1)), 1);
        assert_eq!(ceil_days(Duration::days(2)), 2);
        assert_eq!(ceil_days(Duration::days(2) + Duration::seconds(1)), 3);
        assert_eq!(ceil_days(Duration::zero()), 0);
    }
}
