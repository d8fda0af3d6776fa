//! Local filesystem store provider.
//!
//! Each key maps to one `.json` file in the data directory. Key characters
//! outside `[A-Za-z0-9._-]` are percent-encoded in the file name.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use navigator_core::error::{AppError, ErrorKind};
use navigator_core::result::AppResult;
use navigator_core::traits::store::KeyValueStore;

/// File extension of stored documents.
const EXTENSION: &str = "json";

/// Filesystem-backed key-value store.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding the documents.
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root_path`, creating the directory if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create data directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a key to its document path.
    fn resolve(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{EXTENSION}", encode_key(key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn provider_type(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.resolve(key);
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read key '{key}'"),
                e,
            )),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.resolve(key);
        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));

        fs::write(&tmp, value).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write key '{key}'"),
                e,
            )
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to commit key '{key}'"),
                e,
            )
        })?;

        debug!(key, bytes = value.len(), "Stored document");
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.resolve(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete key '{key}'"),
                e,
            )),
        }
    }

    async fn keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut entries = fs::read_dir(&self.root).await?;
        let mut keys = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(stem) = name
                .to_str()
                .and_then(|n| n.strip_suffix(&format!(".{EXTENSION}")))
            else {
                continue;
            };
            if let Some(key) = decode_key(stem) {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }
}

/// Percent-encode a key into a portable file stem.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Reverse of [`encode_key`]. Returns `None` for stems we did not write.
fn decode_key(stem: &str) -> Option<String> {
    let bytes = stem.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = stem.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
