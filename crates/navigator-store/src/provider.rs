//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use navigator_core::config::StorageConfig;
use navigator_core::error::AppError;
use navigator_core::result::AppResult;
use navigator_core::traits::store::KeyValueStore;

/// Store manager that wraps the configured key-value provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store provider.
    inner: Arc<dyn KeyValueStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let inner: Arc<dyn KeyValueStore> = match config.provider.as_str() {
            #[cfg(feature = "file")]
            "file" => {
                info!(data_dir = %config.data_dir, "Initializing file store provider");
                Arc::new(crate::file::FileStore::new(&config.data_dir).await?)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory store provider");
                Arc::new(crate::memory::MemoryStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: file, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn KeyValueStore>) -> Self {
        Self { inner: provider }
    }

    /// Get a reference to the inner provider.
    pub fn provider(&self) -> &dyn KeyValueStore {
        self.inner.as_ref()
    }
}

#[async_trait]
impl KeyValueStore for StoreManager {
    fn provider_type(&self) -> &str {
        self.inner.provider_type()
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }

    async fn keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        self.inner.keys(prefix).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_provider_is_configuration_error() {
        let config = StorageConfig {
            provider: "supabase".to_string(),
            ..StorageConfig::default()
        };
        let err = StoreManager::new(&config).await.unwrap_err();
        assert_eq!(err.kind, navigator_core::error::ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_memory_provider_selected() {
        let config = StorageConfig {
            provider: "memory".to_string(),
            ..StorageConfig::default()
        };
        let manager = StoreManager::new(&config).await.unwrap();
        assert_eq!(manager.provider_type(), "memory");
        assert!(manager.health_check().await.unwrap());
    }
}
