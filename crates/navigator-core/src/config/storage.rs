//! Persistent store and program catalog configuration.

use serde::{Deserialize, Serialize};

/// Key-value store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store provider type: `"file"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Directory holding one JSON document per key (file provider only).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Prefix applied to every key.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            data_dir: default_data_dir(),
            key_prefix: default_key_prefix(),
        }
    }
}

/// Static program catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON catalog file.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_provider() -> String {
    "file".to_string()
}

fn default_data_dir() -> String {
    "data/store".to_string()
}

fn default_key_prefix() -> String {
    "navigator".to_string()
}

fn default_catalog_path() -> String {
    "config/programs.json".to_string()
}
