//! # navigator-entity
//!
//! Domain entity models for the Resource Navigator. Every struct in this
//! crate is either a persisted record (profile, application, to-do,
//! notification) or immutable catalog reference data (program). All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod application;
pub mod notification;
pub mod profile;
pub mod program;
pub mod todo;
