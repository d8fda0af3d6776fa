//! Local filesystem store provider.

pub mod store;

pub use store::FileStore;
