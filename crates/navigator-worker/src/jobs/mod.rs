//! Built-in scheduled jobs.

pub mod reminder;

pub use reminder::ReminderJob;
