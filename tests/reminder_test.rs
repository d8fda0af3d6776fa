//! Integration tests for reminder generation and the notification inbox.

mod helpers;

use std::sync::Arc;

use chrono::Duration;
use serde_json::json;

use helpers::{TestApp, program};
use navigator_core::types::ProgramId;
use navigator_entity::application::ApplicationStatus;
use navigator_entity::notification::{NotificationKind, NotificationPriority};
use navigator_entity::profile::NeedCategory;
use navigator_store::NavigatorStore;
use navigator_store::file::FileStore;
use navigator_store::keys::KeySpace;

fn catalog() -> Vec<navigator_entity::program::Program> {
    vec![
        program("snap", NeedCategory::Food, json!({})),
        program(
            "home-repair",
            NeedCategory::Housing,
            json!({ "deadline": "2025-03-06T10:00:00Z" }),
        ),
    ]
}

async fn open_file_store(root: &str) -> NavigatorStore {
    let kv = FileStore::new(root).await.unwrap();
    NavigatorStore::new(Arc::new(kv), KeySpace::default())
}

#[tokio::test]
async fn test_generator_is_idempotent() {
    let app = TestApp::new(catalog());
    let now = app.now();
    app.save_profile(|p| p.primary_needs = vec![NeedCategory::Food])
        .await;

    app.services
        .todos
        .add("Overdue", None, Some(now - Duration::days(1)), None)
        .await
        .unwrap();
    app.services
        .todos
        .add("Due soon", None, Some(now + Duration::hours(5)), None)
        .await
        .unwrap();
    app.services
        .applications
        .start(&ProgramId::from("home-repair"), ApplicationStatus::Started)
        .await
        .unwrap();

    // overdue + due soon + 3-day deadline + digest
    assert_eq!(app.services.reminders.run_all().await, 4);
    assert_eq!(app.services.reminders.run_all().await, 0);
    assert_eq!(app.services.notifications.list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_overdue_todo_notification() {
    let app = TestApp::new(catalog());
    let now = app.now();
    app.services
        .todos
        .add("Renew state ID", None, Some(now - Duration::days(2)), None)
        .await
        .unwrap();

    assert_eq!(app.services.reminders.check_deadlines().await, 1);
    let notifications = app.services.notifications.list().await.unwrap();
    assert_eq!(notifications[0].title, "Overdue Task");
    assert_eq!(notifications[0].priority, NotificationPriority::High);
    assert!(notifications[0].message.contains("Renew state ID"));
}

#[tokio::test]
async fn test_completed_todo_is_not_reminded() {
    let app = TestApp::new(catalog());
    let now = app.now();
    let todo = app
        .services
        .todos
        .add("Done already", None, Some(now - Duration::days(2)), None)
        .await
        .unwrap();
    app.services
        .todos
        .set_completed(todo.id, true)
        .await
        .unwrap();

    assert_eq!(app.services.reminders.check_deadlines().await, 0);
}

#[tokio::test]
async fn test_status_check_after_two_weeks() {
    let app = TestApp::new(catalog());
    let application = app
        .services
        .applications
        .start(&ProgramId::from("snap"), ApplicationStatus::Started)
        .await
        .unwrap();
    app.services
        .applications
        .update_status(application.id, ApplicationStatus::Submitted)
        .await
        .unwrap();

    app.clock.advance(Duration::days(5));
    assert_eq!(app.services.reminders.check_deadlines().await, 0);

    app.clock.advance(Duration::days(15));
    assert_eq!(app.services.reminders.check_deadlines().await, 1);
    let notifications = app.services.notifications.list().await.unwrap();
    assert_eq!(notifications[0].title, "Application Status Check");
    assert_eq!(notifications[0].kind, NotificationKind::Application);
}

#[tokio::test]
async fn test_deadline_escalates_from_reminder_to_urgent() {
    let app = TestApp::new(catalog());
    app.services
        .applications
        .start(&ProgramId::from("home-repair"), ApplicationStatus::Saved)
        .await
        .unwrap();

    assert_eq!(app.services.reminders.check_deadlines().await, 1);
    app.clock.advance(Duration::days(2) + Duration::hours(12));
    assert_eq!(app.services.reminders.check_deadlines().await, 1);
    assert_eq!(app.services.reminders.check_deadlines().await, 0);

    let priorities: Vec<NotificationPriority> = app
        .services
        .notifications
        .list()
        .await
        .unwrap()
        .iter()
        .map(|n| n.priority)
        .collect();
    assert_eq!(
        priorities,
        vec![NotificationPriority::Urgent, NotificationPriority::High]
    );
}

#[tokio::test]
async fn test_digest_once_per_week() {
    let app = TestApp::new(catalog());
    app.save_profile(|p| p.primary_needs = vec![NeedCategory::Housing])
        .await;

    assert_eq!(app.services.reminders.check_recommendations().await, 1);
    for _ in 0..6 {
        app.clock.advance(Duration::days(1));
        assert_eq!(app.services.reminders.check_recommendations().await, 0);
    }
    app.clock.advance(Duration::days(1) + Duration::minutes(1));
    assert_eq!(app.services.reminders.check_recommendations().await, 1);
}

#[tokio::test]
async fn test_read_state_survives_regeneration() {
    let app = TestApp::new(catalog());
    let now = app.now();
    app.services
        .todos
        .add("Overdue", None, Some(now - Duration::days(1)), None)
        .await
        .unwrap();
    app.services.reminders.check_deadlines().await;

    assert_eq!(app.services.notifications.mark_all_read().await.unwrap(), 1);
    assert_eq!(app.services.reminders.check_deadlines().await, 0);
    assert_eq!(app.services.notifications.unread_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_file_store_keeps_notifications_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();

    let first = TestApp::with_store(open_file_store(root).await, catalog());
    let now = first.now();
    first
        .services
        .todos
        .add("Overdue", None, Some(now - Duration::days(1)), None)
        .await
        .unwrap();
    assert_eq!(first.services.reminders.check_deadlines().await, 1);

    let second = TestApp::with_store(open_file_store(root).await, catalog());
    assert_eq!(second.services.reminders.check_deadlines().await, 0);
    assert_eq!(second.services.notifications.list().await.unwrap().len(), 1);
}
