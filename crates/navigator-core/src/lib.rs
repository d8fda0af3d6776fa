//! # navigator-core
//!
//! Core crate for the Detroit Resource Navigator. Contains the storage and
//! clock traits, configuration schemas, typed identifiers, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other navigator crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
