//! Reminder derivation and persistence.

pub mod generator;
pub mod rules;

pub use generator::ReminderGenerator;
pub use rules::ReminderRules;
