//! Scheduled reminder jobs for the Resource Navigator.
//!
//! This crate provides:
//! - The reminder jobs, each a thin wrapper over one generator pass
//! - A cron scheduler that runs them on a fixed cadence until shutdown

pub mod jobs;
pub mod scheduler;

pub use jobs::ReminderJob;
pub use scheduler::ReminderScheduler;
