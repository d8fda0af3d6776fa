//! In-memory store implementation using the dashmap crate.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use navigator_core::result::AppResult;
use navigator_core::traits::store::KeyValueStore;

/// In-memory key-value store. Contents are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Stored documents.
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        debug!(prefix, count = keys.len(), "Listed keys");
        Ok(keys)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
