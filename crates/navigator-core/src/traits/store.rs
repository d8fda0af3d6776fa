//! Key-value store trait for pluggable persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for persistent key-value backends (local files, in-memory).
///
/// Values are JSON documents stored as strings. The store is treated as a
/// single-writer, last-write-wins map; callers own any read-modify-write
/// sequencing.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Short name of the backend (`"file"`, `"memory"`).
    fn provider_type(&self) -> &str;

    /// Get a value by key. Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// List all keys starting with `prefix`.
    async fn keys(&self, prefix: &str) -> AppResult<Vec<String>>;

    /// Get a typed value by deserializing from JSON.
    async fn get_json<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key).await? {
            Some(value) => {
                let parsed = serde_json::from_str(&value)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value by serializing to JSON.
    async fn set_json<T: serde::Serialize + Send + Sync>(&self, key: &str, value: &T) -> AppResult<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set(key, &json).await
    }

    /// Check that the backend is usable.
    async fn health_check(&self) -> AppResult<bool>;
}
