//! # navigator-store
//!
//! Persistence for the Resource Navigator. Supports two key-value modes:
//!
//! - **file**: one JSON document per key under a data directory, the
//!   durable stand-in for browser local storage
//! - **memory**: process-local map using [dashmap](https://crates.io/crates/dashmap)
//!
//! On top of the raw store, [`NavigatorStore`] exposes the typed
//! collections (profile, to-dos, applications, notifications), and
//! [`ProgramCatalog`] loads the static program list.

pub mod catalog;
#[cfg(feature = "file")]
pub mod file;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
pub mod repository;

pub use catalog::ProgramCatalog;
pub use provider::StoreManager;
pub use repository::NavigatorStore;
