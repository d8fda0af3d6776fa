//! Core type definitions used across the navigator workspace.

pub mod id;

pub use id::*;
