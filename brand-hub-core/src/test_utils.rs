//! Test helper module
//!
//! Provides mock implementations and convenient test factory methods.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::notification::NotificationChannel;
use crate::services::ServiceContext;
use crate::traits::KeyValueStore;
use crate::types::{Brand, BrandResources, BrandStatus};

// ===== MockKeyValueStore =====

pub struct MockKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    /// If Some, `get` returns this error (used to test read-failure paths)
    read_error: RwLock<Option<String>>,
    /// If Some, `set` returns this error (used to test write-failure paths)
    write_error: RwLock<Option<String>>,
    writes: AtomicUsize,
}

impl MockKeyValueStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            read_error: RwLock::new(None),
            write_error: RwLock::new(None),
            writes: AtomicUsize::new(0),
        }
    }

    pub async fn set_read_error(&self, err: Option<String>) {
        *self.read_error.write().await = err;
    }

    pub async fn set_write_error(&self, err: Option<String>) {
        *self.write_error.write().await = err;
    }

    /// Number of successful `set` calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValueStore for MockKeyValueStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        if let Some(ref msg) = *self.read_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.write_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

// ===== Factories =====

pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockKeyValueStore>) {
    let store = Arc::new(MockKeyValueStore::new());
    let ctx = Arc::new(ServiceContext::new(
        store.clone(),
        Arc::new(NotificationChannel::default()),
    ));
    (ctx, store)
}

pub fn make_brand(id: &str) -> Brand {
    Brand {
        id: id.to_string(),
        name: id.to_string(),
        color: "#6366f1".to_string(),
        logo: "⚡".to_string(),
        industry: "Technology".to_string(),
        description: String::new(),
        status: BrandStatus::Active,
        website: String::new(),
        resources: BrandResources::new(),
    }
}
