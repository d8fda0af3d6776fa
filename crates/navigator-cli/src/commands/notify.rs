//! Notification CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use navigator_core::error::AppError;
use navigator_core::types::NotificationId;
use navigator_entity::notification::Notification;
use navigator_service::NavigatorServices;

/// Arguments for notification commands
#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Notification subcommand
    #[command(subcommand)]
    pub command: NotifyCommand,
}

/// Notification subcommands
#[derive(Debug, Subcommand)]
pub enum NotifyCommand {
    /// List notifications, newest first
    List {
        /// Only unread notifications
        #[arg(short, long)]
        unread: bool,
    },
    /// Count unread notifications
    Count,
    /// Mark a notification read
    Read {
        /// Notification ID
        id: String,
    },
    /// Mark a notification unread
    Unread {
        /// Notification ID
        id: String,
    },
    /// Mark every notification read
    ReadAll,
    /// Delete a notification
    Delete {
        /// Notification ID
        id: String,
    },
    /// Delete every notification
    Clear,
    /// Run the reminder checks once now
    Check,
}

/// Notification display row for table output
#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    /// Notification ID
    id: String,
    /// Priority
    priority: String,
    /// Kind
    kind: String,
    /// Title
    title: String,
    /// Message
    message: String,
    /// Read flag
    read: String,
    /// Created at
    created_at: String,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id.to_string(),
            priority: n.priority.to_string(),
            kind: n.kind.to_string(),
            title: n.title.clone(),
            message: n.message.clone(),
            read: if n.is_read { "yes" } else { "no" }.to_string(),
            created_at: n.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute notification commands
pub async fn execute(
    args: &NotifyArgs,
    services: &NavigatorServices,
    format: OutputFormat,
) -> Result<(), AppError> {
    let inbox = &services.notifications;

    match &args.command {
        NotifyCommand::List { unread } => {
            let notifications = if *unread {
                inbox.unread().await?
            } else {
                inbox.list().await?
            };
            match format {
                OutputFormat::Json => output::print_json(&notifications),
                OutputFormat::Table => {
                    let rows: Vec<NotificationRow> =
                        notifications.iter().map(NotificationRow::from).collect();
                    output::print_list(&rows, format);
                }
            }
        }
        NotifyCommand::Count => {
            let count = inbox.unread_count().await?;
            match format {
                OutputFormat::Json => output::print_json(&serde_json::json!({ "unread": count })),
                OutputFormat::Table => output::print_kv("Unread", &count.to_string()),
            }
        }
        NotifyCommand::Read { id } => {
            inbox.mark_read(super::parse_id::<NotificationId>(id, "notification")?)
                .await?;
            output::print_success("Marked read");
        }
        NotifyCommand::Unread { id } => {
            inbox
                .mark_unread(super::parse_id::<NotificationId>(id, "notification")?)
                .await?;
            output::print_success("Marked unread");
        }
        NotifyCommand::ReadAll => {
            let changed = inbox.mark_all_read().await?;
            output::print_success(&format!("Marked {changed} notification(s) read"));
        }
        NotifyCommand::Delete { id } => {
            inbox
                .delete(super::parse_id::<NotificationId>(id, "notification")?)
                .await?;
            output::print_success("Notification deleted");
        }
        NotifyCommand::Clear => {
            let removed = inbox.clear().await?;
            output::print_success(&format!("Removed {removed} notification(s)"));
        }
        NotifyCommand::Check => {
            let created = services.reminders.run_all().await;
            output::print_success(&format!("Created {created} new notification(s)"));
        }
    }

    Ok(())
}
