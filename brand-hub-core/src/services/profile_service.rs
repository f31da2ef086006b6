//! Operator profile service

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::persistence::{LoadSource, PROFILE_KEY};
use crate::services::{rejected, ServiceContext};
use crate::types::{OperatorProfile, ProfileUpdate};

pub struct ProfileService {
    ctx: Arc<ServiceContext>,
    profile: RwLock<OperatorProfile>,
}

impl ProfileService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            profile: RwLock::new(OperatorProfile::default()),
        }
    }

    /// Loads the stored profile, falling back to (and persisting) the default one.
    pub async fn restore(&self) -> LoadSource {
        let loaded = self
            .ctx
            .persistence()
            .load_or_else(PROFILE_KEY, OperatorProfile::default)
            .await;
        let mut profile = self.profile.write().await;
        *profile = loaded.value;

        if loaded.source == LoadSource::Fallback {
            if let Err(e) = self.ctx.persistence().write(PROFILE_KEY, &*profile).await {
                log::error!("Failed to persist default profile: {e}");
            }
        }
        loaded.source
    }

    pub async fn profile(&self) -> OperatorProfile {
        self.profile.read().await.clone()
    }

    /// Replace name, email and role. The avatar is left as is.
    pub async fn update_profile(&self, update: ProfileUpdate) -> CoreResult<OperatorProfile> {
        update.validate().map_err(rejected)?;

        let mut profile = self.profile.write().await;
        update.apply_to(&mut profile);
        let updated = profile.clone();

        self.ctx
            .commit(PROFILE_KEY, &*profile, "Profile updated successfully!")
            .await;
        Ok(updated)
    }

    /// Set the avatar URL. An empty string clears it.
    pub async fn update_avatar(&self, url: &str) -> CoreResult<OperatorProfile> {
        let url = url.trim();
        if !url.is_empty() && !url.starts_with("http") {
            return Err(rejected(CoreError::ValidationError(format!(
                "Avatar must be an http(s) URL: '{url}'"
            ))));
        }

        let mut profile = self.profile.write().await;
        profile.avatar = url.to_string();
        let updated = profile.clone();

        self.ctx
            .commit(PROFILE_KEY, &*profile, "Avatar updated successfully!")
            .await;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;
    use crate::types::OperatorRole;

    fn update(name: &str, email: &str) -> ProfileUpdate {
        ProfileUpdate {
            name: name.to_string(),
            email: email.to_string(),
            role: OperatorRole::Editor,
        }
    }

    #[tokio::test]
    async fn restore_defaults_when_absent() {
        let (ctx, store) = create_test_context();
        let svc = ProfileService::new(ctx);
        assert_eq!(svc.restore().await, LoadSource::Fallback);
        assert_eq!(svc.profile().await.name, "Admin User");
        assert!(store.raw(PROFILE_KEY).await.is_some());
    }

    #[tokio::test]
    async fn restore_discards_garbage() {
        let (ctx, store) = create_test_context();
        store.put_raw(PROFILE_KEY, "{not json").await;
        let svc = ProfileService::new(ctx);
        assert_eq!(svc.restore().await, LoadSource::Fallback);
        assert_eq!(svc.profile().await, OperatorProfile::default());
    }

    #[tokio::test]
    async fn read_error_does_not_overwrite_profile() {
        let (ctx, store) = create_test_context();
        let saved = r#"{"name":"Jane","email":"jane@brandhub.com","role":"Editor","avatar":""}"#;
        store.put_raw(PROFILE_KEY, saved).await;
        store.set_read_error(Some("io error".to_string())).await;

        let svc = ProfileService::new(ctx);
        assert_eq!(svc.restore().await, LoadSource::Unreadable);
        assert_eq!(svc.profile().await, OperatorProfile::default());
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.raw(PROFILE_KEY).await.as_deref(), Some(saved));
    }

    #[tokio::test]
    async fn update_profile_keeps_avatar() {
        let (ctx, store) = create_test_context();
        let svc = ProfileService::new(ctx.clone());
        svc.restore().await;
        svc.update_avatar("https://cdn.example.com/me.png")
            .await
            .unwrap();

        let profile = svc
            .update_profile(update("Jane Doe", "jane@brandhub.com"))
            .await
            .unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.role, OperatorRole::Editor);
        assert_eq!(profile.avatar, "https://cdn.example.com/me.png");

        let stored: OperatorProfile =
            serde_json::from_str(&store.raw(PROFILE_KEY).await.unwrap()).unwrap();
        assert_eq!(stored, profile);
        assert_eq!(
            ctx.notifications().current().unwrap().message,
            "Profile updated successfully!"
        );
    }

    #[tokio::test]
    async fn update_profile_validates() {
        let (ctx, _) = create_test_context();
        let svc = ProfileService::new(ctx);
        svc.restore().await;

        assert!(svc.update_profile(update("", "a@b.c")).await.is_err());
        assert!(svc.update_profile(update("Jane", "nope")).await.is_err());
        assert_eq!(svc.profile().await, OperatorProfile::default());
    }

    #[tokio::test]
    async fn avatar_requires_http_url() {
        let (ctx, _) = create_test_context();
        let svc = ProfileService::new(ctx.clone());
        svc.restore().await;

        let result = svc.update_avatar("file:///etc/passwd").await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));

        svc.update_avatar("").await.unwrap();
        assert_eq!(svc.profile().await.avatar, "");
        assert_eq!(
            ctx.notifications().current().unwrap().message,
            "Avatar updated successfully!"
        );
    }
}
