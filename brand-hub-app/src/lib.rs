//! Application bootstrap for Brand Hub.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (store injection),
//! and `StartupHooks` (frontend callbacks run after the stores are restored).

pub mod adapters;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use brand_hub_core::notification::{NotificationChannel, DEFAULT_NOTIFICATION_TTL};
use brand_hub_core::persistence::LoadSource;
use brand_hub_core::seed::default_brands;
use brand_hub_core::services::{BrandService, PreferenceService, ProfileService, ServiceContext};
use brand_hub_core::traits::{InMemoryKeyValueStore, KeyValueStore};
use brand_hub_core::types::{Brand, Selection};

/// Produces the brand list used when no snapshot is stored.
pub type SeedFn = Arc<dyn Fn() -> Vec<Brand> + Send + Sync>;

/// Where each store got its initial value from during startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupReport {
    pub brands: LoadSource,
    pub profile: LoadSource,
    pub theme: LoadSource,
}

impl StartupReport {
    /// True when nothing was found in the store (first launch or cleared storage).
    #[must_use]
    pub fn is_first_run(self) -> bool {
        self.brands == LoadSource::Fallback
            && self.profile == LoadSource::Fallback
            && self.theme == LoadSource::Fallback
    }
}

/// Platform-specific hooks for the startup sequence.
#[async_trait::async_trait]
pub trait StartupHooks: Send + Sync {
    /// Called once all stores have been restored.
    async fn after_restore(&self, _report: &StartupReport) {}
}

/// No-op startup hooks
pub struct NoopStartupHooks;

#[async_trait::async_trait]
impl StartupHooks for NoopStartupHooks {}

/// Application state.
///
/// Holds all services and the `ServiceContext`. Every frontend constructs this
/// once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (store and notification channel)
    pub ctx: Arc<ServiceContext>,
    /// Brand service
    pub brand_service: Arc<BrandService>,
    /// Profile service
    pub profile_service: Arc<ProfileService>,
    /// Theme preference service
    pub preference_service: Arc<PreferenceService>,
    /// Current view and selected brand
    pub selection: tokio::sync::RwLock<Selection>,
    /// Whether the startup sequence has completed
    pub startup_completed: AtomicBool,
    seed: SeedFn,
}

impl AppState {
    /// Restore brands, profile and theme, then run `hooks`.
    ///
    /// Unreadable snapshots never fail startup; the affected store falls back to its defaults.
    pub async fn run_startup(&self, hooks: &dyn StartupHooks) -> StartupReport {
        let seed = Arc::clone(&self.seed);
        let report = StartupReport {
            brands: self.brand_service.restore(move || seed()).await,
            profile: self.profile_service.restore().await,
            theme: self.preference_service.restore().await,
        };
        log::info!("Startup restore complete: {report:?}");

        hooks.after_restore(&report).await;
        self.startup_completed.store(true, Ordering::SeqCst);
        report
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.startup_completed.load(Ordering::SeqCst)
    }

    pub fn notifications(&self) -> &Arc<NotificationChannel> {
        self.ctx.notifications()
    }
}

/// Builder for constructing `AppState`.
///
/// # Optional
/// - `store`: defaults to `InMemoryKeyValueStore`
/// - `notification_ttl`: defaults to 3 seconds
/// - `seed`: defaults to the built-in brand dataset
pub struct AppStateBuilder {
    store: Option<Arc<dyn KeyValueStore>>,
    notification_ttl: Duration,
    seed: Option<SeedFn>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            seed: None,
        }
    }

    #[must_use]
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    #[must_use]
    pub fn seed<F>(mut self, seed: F) -> Self
    where
        F: Fn() -> Vec<Brand> + Send + Sync + 'static,
    {
        self.seed = Some(Arc::new(seed));
        self
    }

    /// Build the `AppState`. Call [`AppState::run_startup`] before serving the UI.
    #[must_use]
    pub fn build(self) -> AppState {
        let store = self.store.unwrap_or_else(|| {
            log::debug!("No store configured, using in-memory storage");
            Arc::new(InMemoryKeyValueStore::new())
        });
        let notifications = Arc::new(NotificationChannel::new(self.notification_ttl));
        let ctx = Arc::new(ServiceContext::new(store, notifications));

        AppState {
            brand_service: Arc::new(BrandService::new(Arc::clone(&ctx))),
            profile_service: Arc::new(ProfileService::new(Arc::clone(&ctx))),
            preference_service: Arc::new(PreferenceService::new(Arc::clone(&ctx))),
            selection: tokio::sync::RwLock::new(Selection::default()),
            startup_completed: AtomicBool::new(false),
            seed: self.seed.unwrap_or_else(|| Arc::new(default_brands)),
            ctx,
        }
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
