//! Business logic service layer

mod brand_service;
mod preference_service;
mod profile_service;

pub use brand_service::BrandService;
pub use preference_service::PreferenceService;
pub use profile_service::ProfileService;

use std::sync::Arc;

use serde::Serialize;

use crate::error::CoreError;
use crate::notification::NotificationChannel;
use crate::persistence::PersistenceAdapter;
use crate::traits::KeyValueStore;

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects its storage implementation.
pub struct ServiceContext {
    persistence: PersistenceAdapter,
    notifications: Arc<NotificationChannel>,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, notifications: Arc<NotificationChannel>) -> Self {
        Self {
            persistence: PersistenceAdapter::new(store),
            notifications,
        }
    }

    #[must_use]
    pub fn persistence(&self) -> &PersistenceAdapter {
        &self.persistence
    }

    #[must_use]
    pub fn notifications(&self) -> &Arc<NotificationChannel> {
        &self.notifications
    }

    /// Write-through after a mutation, then notify.
    ///
    /// A failed write keeps the in-memory state and turns the success message into a warning.
    /// Returns whether the snapshot was persisted.
    pub async fn commit<T: Serialize + ?Sized>(&self, key: &str, value: &T, message: &str) -> bool {
        match self.persistence.write(key, value).await {
            Ok(()) => {
                self.notifications.notify(message);
                true
            }
            Err(e) => {
                log::error!("Failed to persist '{key}': {e}");
                self.notifications
                    .warn(format!("{message} (changes not saved: {e})"));
                false
            }
        }
    }
}

/// Logs a rejected operation at the level its error class calls for.
pub(crate) fn rejected(err: CoreError) -> CoreError {
    if err.is_expected() {
        log::warn!("Operation rejected: {err}");
    } else {
        log::error!("Operation failed: {err}");
    }
    err
}
