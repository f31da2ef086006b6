//! Persistence adapter
//!
//! Wraps a [`KeyValueStore`] with the read-fallback / write-through discipline used by every
//! persisted value: a snapshot is read once at startup and replaced in full after each mutation.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::traits::KeyValueStore;
use crate::types::{validate_brands, Brand, OperatorProfile};

/// Brand collection (JSON array of brands)
pub const BRANDS_KEY: &str = "brandHub_brands";

/// Operator profile (JSON object)
pub const PROFILE_KEY: &str = "brandHub_profile";

/// Theme preference (bare `dark` / `light` literal)
pub const THEME_KEY: &str = "brandHub_theme";

/// A value persisted as one JSON document under one key.
pub trait Snapshot: Serialize + DeserializeOwned {
    /// Invariants checked after decoding; a failing snapshot is discarded as a whole.
    fn validate(&self) -> CoreResult<()> {
        Ok(())
    }
}

impl Snapshot for Vec<Brand> {
    fn validate(&self) -> CoreResult<()> {
        validate_brands(self)
    }
}

impl Snapshot for OperatorProfile {}

/// Where a loaded value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from the durable store
    Stored,
    /// Nothing stored, or the snapshot could not be decoded; built-in default used
    Fallback,
    /// The store itself failed to answer. The default is used in memory only and must
    /// not be written back, since a snapshot may still exist.
    Unreadable,
}

/// Result of [`PersistenceAdapter::load_or_else`]
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub value: T,
    pub source: LoadSource,
}

/// JSON snapshot reader/writer over a key-value store
#[derive(Clone)]
pub struct PersistenceAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Strict load: `Ok(None)` when absent, an error when unreadable, undecodable or invalid.
    pub async fn load<T: Snapshot>(&self, key: &str) -> CoreResult<Option<T>> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        let value: T = serde_json::from_str(&raw).map_err(|e| {
            CoreError::SerializationError(format!("Invalid snapshot under '{key}': {e}"))
        })?;
        value.validate()?;
        Ok(Some(value))
    }

    /// All-or-nothing load: any failure yields `fallback()`.
    ///
    /// A read error from the store is reported as [`LoadSource::Unreadable`]; absent or
    /// undecodable snapshots as [`LoadSource::Fallback`].
    pub async fn load_or_else<T, F>(&self, key: &str, fallback: F) -> Loaded<T>
    where
        T: Snapshot,
        F: FnOnce() -> T,
    {
        match self.load::<T>(key).await {
            Ok(Some(value)) => Loaded {
                value,
                source: LoadSource::Stored,
            },
            Ok(None) => {
                log::info!("No snapshot under '{key}', using defaults");
                Loaded {
                    value: fallback(),
                    source: LoadSource::Fallback,
                }
            }
            Err(CoreError::StorageError(e)) => {
                log::error!("Failed to read '{key}', using defaults without saving: {e}");
                Loaded {
                    value: fallback(),
                    source: LoadSource::Unreadable,
                }
            }
            Err(e) => {
                log::warn!("Discarding snapshot under '{key}': {e}");
                Loaded {
                    value: fallback(),
                    source: LoadSource::Fallback,
                }
            }
        }
    }

    /// Serializes `value` and overwrites the key in full.
    pub async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> CoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json).await
    }

    /// Reads a value stored verbatim (not JSON encoded).
    pub async fn load_raw(&self, key: &str) -> CoreResult<Option<String>> {
        self.store.get(key).await
    }

    /// Writes a value verbatim.
    pub async fn write_raw(&self, key: &str, value: &str) -> CoreResult<()> {
        self.store.set(key, value).await
    }
}
