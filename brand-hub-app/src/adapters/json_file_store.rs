//! `KeyValueStore` backed by a single JSON object file.
//!
//! The file holds `{ "<key>": "<value>", ... }` where every value is the raw string the
//! services stored (a JSON snapshot, or a bare string for the theme).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use brand_hub_core::error::{CoreError, CoreResult};
use brand_hub_core::traits::KeyValueStore;

/// Maximum store file size (10MB)
const MAX_STORE_FILE_SIZE: u64 = 10 * 1024 * 1024;

const APP_DIR_NAME: &str = "brand-hub";
const STORE_FILE_NAME: &str = "store.json";

type Entries = BTreeMap<String, String>;

pub struct JsonFileStore {
    path: PathBuf,
    /// In-memory copy of the file, filled on first access.
    cache: RwLock<Option<Entries>>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Store under the platform data directory:
    /// - macOS: `~/Library/Application Support/brand-hub/store.json`
    /// - Windows: `%LOCALAPPDATA%/brand-hub/store.json`
    /// - Linux: `~/.local/share/brand-hub/store.json`
    pub fn default_location() -> CoreResult<Self> {
        let dir = dirs::data_local_dir().ok_or_else(|| {
            CoreError::StorageError("Failed to determine data directory".to_string())
        })?;
        Ok(Self::new(dir.join(APP_DIR_NAME).join(STORE_FILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> CoreResult<Entries> {
        let metadata = match tokio::fs::metadata(&self.path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Store file does not exist: {}", self.path.display());
                return Ok(Entries::new());
            }
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to read store file metadata: {e}"
                )))
            }
        };

        if metadata.len() > MAX_STORE_FILE_SIZE {
            return Err(CoreError::StorageError(format!(
                "Store file too large: {} bytes (max: {MAX_STORE_FILE_SIZE} bytes)",
                metadata.len()
            )));
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to read store file: {e}")))?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(format!("Invalid store format: {e}")))
    }

    /// Write to a sibling temp file, then rename over the store file.
    async fn write_file(&self, entries: &Entries) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to write store file: {e}")))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to replace store file: {e}")))?;
        Ok(())
    }

    async fn update<F>(&self, change: F) -> CoreResult<()>
    where
        F: FnOnce(&mut Entries) + Send,
    {
        let mut cache = self.cache.write().await;
        let mut entries = match cache.take() {
            Some(entries) => entries,
            None => match self.read_file().await {
                Ok(entries) => entries,
                Err(CoreError::SerializationError(e)) => {
                    log::warn!("Resetting unreadable store file {}: {e}", self.path.display());
                    Entries::new()
                }
                Err(e) => return Err(e),
            },
        };

        let previous = entries.clone();
        change(&mut entries);
        match self.write_file(&entries).await {
            Ok(()) => {
                *cache = Some(entries);
                Ok(())
            }
            Err(e) => {
                *cache = Some(previous);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        // Check cache first (read lock)
        {
            let cache = self.cache.read().await;
            if let Some(ref entries) = *cache {
                return Ok(entries.get(key).cloned());
            }
        }

        let mut cache = self.cache.write().await;
        if cache.is_none() {
            *cache = Some(self.read_file().await?);
        }
        Ok(cache.as_ref().and_then(|entries| entries.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let (key, value) = (key.to_string(), value.to_string());
        self.update(move |entries| {
            entries.insert(key, value);
        })
        .await
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.update(|entries| {
            entries.remove(key);
        })
        .await
    }
}
