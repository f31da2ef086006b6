//! Display preference service
//!
//! The theme is stored as the bare string `dark` / `light`, not as JSON.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::persistence::{LoadSource, THEME_KEY};
use crate::services::ServiceContext;
use crate::types::Theme;

pub struct PreferenceService {
    ctx: Arc<ServiceContext>,
    theme: RwLock<Theme>,
}

impl PreferenceService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            theme: RwLock::new(Theme::default()),
        }
    }

    pub async fn restore(&self) -> LoadSource {
        let (theme, source) = match self.ctx.persistence().load_raw(THEME_KEY).await {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => (theme, LoadSource::Stored),
                Err(e) => {
                    log::warn!("Discarding stored theme: {e}");
                    (Theme::default(), LoadSource::Fallback)
                }
            },
            Ok(None) => (Theme::default(), LoadSource::Fallback),
            Err(e) => {
                log::error!("Failed to read theme, using default without saving: {e}");
                (Theme::default(), LoadSource::Unreadable)
            }
        };
        *self.theme.write().await = theme;

        if source == LoadSource::Fallback {
            self.persist(theme).await;
        }
        source
    }

    pub async fn theme(&self) -> Theme {
        *self.theme.read().await
    }

    pub async fn set_theme(&self, theme: Theme) -> Theme {
        let mut current = self.theme.write().await;
        *current = theme;
        self.persist(theme).await;
        theme
    }

    /// Switch between dark and light, returning the new theme.
    pub async fn toggle_theme(&self) -> Theme {
        let mut current = self.theme.write().await;
        let next = current.toggled();
        *current = next;
        self.persist(next).await;
        next
    }

    async fn persist(&self, theme: Theme) {
        if let Err(e) = self
            .ctx
            .persistence()
            .write_raw(THEME_KEY, theme.as_str())
            .await
        {
            log::error!("Failed to persist theme: {e}");
            self.ctx
                .notifications()
                .warn(format!("Theme changed (changes not saved: {e})"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationLevel;
    use crate::test_utils::create_test_context;

    #[tokio::test]
    async fn defaults_to_dark() {
        let (ctx, store) = create_test_context();
        let svc = PreferenceService::new(ctx);
        assert_eq!(svc.restore().await, LoadSource::Fallback);
        assert_eq!(svc.theme().await, Theme::Dark);
        assert_eq!(store.raw(THEME_KEY).await.as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn restores_raw_string() {
        let (ctx, store) = create_test_context();
        store.put_raw(THEME_KEY, "light").await;
        let svc = PreferenceService::new(ctx);
        assert_eq!(svc.restore().await, LoadSource::Stored);
        assert_eq!(svc.theme().await, Theme::Light);
    }

    #[tokio::test]
    async fn unknown_value_falls_back() {
        let (ctx, store) = create_test_context();
        store.put_raw(THEME_KEY, "\"light\"").await;
        let svc = PreferenceService::new(ctx);
        assert_eq!(svc.restore().await, LoadSource::Fallback);
        assert_eq!(svc.theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn read_error_keeps_stored_theme() {
        let (ctx, store) = create_test_context();
        store.put_raw(THEME_KEY, "light").await;
        store.set_read_error(Some("io error".to_string())).await;

        let svc = PreferenceService::new(ctx);
        assert_eq!(svc.restore().await, LoadSource::Unreadable);
        assert_eq!(svc.theme().await, Theme::Dark);
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.raw(THEME_KEY).await.as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn toggle_twice_is_identity() {
        let (ctx, store) = create_test_context();
        let svc = PreferenceService::new(ctx.clone());
        svc.restore().await;

        assert_eq!(svc.toggle_theme().await, Theme::Light);
        assert_eq!(store.raw(THEME_KEY).await.as_deref(), Some("light"));
        assert_eq!(svc.toggle_theme().await, Theme::Dark);
        assert_eq!(store.raw(THEME_KEY).await.as_deref(), Some("dark"));
        assert!(ctx.notifications().current().is_none());
    }

    #[tokio::test]
    async fn write_failure_warns() {
        let (ctx, store) = create_test_context();
        let svc = PreferenceService::new(ctx.clone());
        svc.restore().await;
        store.set_write_error(Some("quota exceeded".to_string())).await;

        assert_eq!(svc.set_theme(Theme::Light).await, Theme::Light);
        assert_eq!(svc.theme().await, Theme::Light);
        let notification = ctx.notifications().current().unwrap();
        assert_eq!(notification.level, NotificationLevel::Warning);
        assert!(notification.message.contains("quota exceeded"));
    }
}
