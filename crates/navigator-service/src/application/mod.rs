//! Application tracker.

pub mod service;

pub use service::{ApplicationProgress, ApplicationService, ProgressSummary};
