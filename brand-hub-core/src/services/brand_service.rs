//! Brand store and mutation service
//!
//! Owns the in-memory brand sequence. Every mutation holds the write lock across the
//! transition and the snapshot write, so the persisted order always matches the order
//! in which mutations were applied.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::persistence::{LoadSource, BRANDS_KEY};
use crate::services::{rejected, ServiceContext};
use crate::types::{
    Brand, BrandInput, BrandPatch, BrandResources, BrandStatus, DashboardStats, ExpiringResource,
    HostingCredentials, Resource, ResourceEntry, ResourceFilter, ResourceIntent, ResourceKind,
    Selection,
};
use crate::utils::{brand_id, date, parse_expiry};

const BRAND_CREATED: &str = "New brand created successfully!";
const BRAND_UPDATED: &str = "Brand updated successfully!";

/// Brand service
pub struct BrandService {
    ctx: Arc<ServiceContext>,
    brands: RwLock<Vec<Brand>>,
}

impl BrandService {
    /// Create a brand service with an empty store; call [`Self::restore`] before use.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            brands: RwLock::new(Vec::new()),
        }
    }

    /// Seeds the store from the persisted snapshot, or from `seed` when there is none
    /// (or it cannot be decoded). A seeded store is written back immediately, except when
    /// the store could not be read at all.
    pub async fn restore<F>(&self, seed: F) -> LoadSource
    where
        F: FnOnce() -> Vec<Brand> + Send,
    {
        let loaded = self.ctx.persistence().load_or_else(BRANDS_KEY, seed).await;
        let mut brands = self.brands.write().await;
        *brands = loaded.value;

        if loaded.source == LoadSource::Fallback {
            if let Err(e) = self.ctx.persistence().write(BRANDS_KEY, &*brands).await {
                log::error!("Failed to persist default brands: {e}");
            }
        }
        log::info!(
            "Brand store ready: {} brands ({:?})",
            brands.len(),
            loaded.source
        );
        loaded.source
    }

    // ===== Mutations =====

    /// Create a brand. The name is trimmed, the id derived from it and must be unused.
    pub async fn create_brand(&self, input: BrandInput) -> CoreResult<Brand> {
        let name = input.name.trim().to_string();
        let id = brand_id(&name);
        if id.is_empty() {
            return Err(rejected(CoreError::ValidationError(
                "Brand name cannot be empty".to_string(),
            )));
        }

        let mut brands = self.brands.write().await;
        if brands.iter().any(|b| b.id == id) {
            return Err(rejected(CoreError::DuplicateId(id)));
        }

        let brand = Brand {
            id,
            name,
            color: input.color,
            logo: input.logo,
            industry: input.industry,
            description: input.description,
            status: BrandStatus::Active,
            website: input.website,
            resources: BrandResources::new(),
        };
        brands.push(brand.clone());
        log::debug!("Created brand {}", brand.id);

        self.ctx.commit(BRANDS_KEY, &*brands, BRAND_CREATED).await;
        Ok(brand)
    }

    /// Shallow-merge `patch` over an existing brand. The id never changes.
    pub async fn update_brand(&self, id: &str, patch: BrandPatch) -> CoreResult<Brand> {
        if let Some(ref name) = patch.name {
            if name.trim().is_empty() {
                return Err(rejected(CoreError::ValidationError(
                    "Brand name cannot be empty".to_string(),
                )));
            }
        }
        if let Some(ref resources) = patch.resources {
            resources.validate().map_err(rejected)?;
        }

        let mut brands = self.brands.write().await;
        let brand = find_mut(&mut brands, id)?;
        patch.apply_to(brand);
        let updated = brand.clone();
        log::debug!("Updated brand {id}");

        self.ctx.commit(BRANDS_KEY, &*brands, BRAND_UPDATED).await;
        Ok(updated)
    }

    /// Create or replace the brand's resource of the same kind.
    ///
    /// `intent` only selects the notification text; the write is the same either way.
    pub async fn set_resource(
        &self,
        brand_id: &str,
        resource: Resource,
        intent: ResourceIntent,
    ) -> CoreResult<()> {
        resource.validate().map_err(rejected)?;
        let kind = resource.kind();

        let mut brands = self.brands.write().await;
        let brand = find_mut(&mut brands, brand_id)?;
        brand.resources.insert(resource);
        log::debug!("Set {kind} on brand {brand_id}");

        self.ctx
            .commit(BRANDS_KEY, &*brands, &intent.message(&kind))
            .await;
        Ok(())
    }

    /// Remove the brand's resource of `kind` entirely.
    ///
    /// Confirmation is the caller's job; this deletes unconditionally.
    pub async fn delete_resource(&self, brand_id: &str, kind: &ResourceKind) -> CoreResult<()> {
        let mut brands = self.brands.write().await;
        let brand = find_mut(&mut brands, brand_id)?;
        if brand.resources.remove(kind).is_none() {
            return Err(rejected(CoreError::ResourceNotFound {
                brand_id: brand_id.to_string(),
                kind: kind.to_string(),
            }));
        }
        log::debug!("Deleted {kind} from brand {brand_id}");

        self.ctx
            .commit(BRANDS_KEY, &*brands, &format!("{kind} deleted."))
            .await;
        Ok(())
    }

    // ===== Queries =====

    /// Snapshot of all brands in display order
    pub async fn list(&self) -> Vec<Brand> {
        self.brands.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Brand> {
        self.brands.read().await.iter().find(|b| b.id == id).cloned()
    }

    /// Brand referenced by the selection, if it still exists
    pub async fn resolve_selection(&self, selection: &Selection) -> Option<Brand> {
        match selection.selected_brand_id {
            Some(ref id) => self.get(id).await,
            None => None,
        }
    }

    pub async fn stats(&self) -> DashboardStats {
        let brands = self.brands.read().await;
        let counted = [ResourceKind::Hosting, ResourceKind::Dns, ResourceKind::Domain];
        DashboardStats {
            total_brands: brands.len(),
            managed_resources: brands
                .iter()
                .map(|b| counted.iter().filter(|k| b.resources.contains(k)).count())
                .sum(),
            tracked_domains: brands.iter().filter(|b| !b.website.is_empty()).count(),
        }
    }

    /// Cross-brand resource list, brands in store order
    pub async fn resources(&self, filter: ResourceFilter) -> Vec<ResourceEntry> {
        let kinds = filter.kinds();
        let brands = self.brands.read().await;
        brands
            .iter()
            .flat_map(|brand| {
                kinds.iter().filter_map(move |kind| {
                    brand.resources.get(kind).map(|resource| ResourceEntry {
                        id: format!("{}-{kind}", brand.id),
                        brand_id: brand.id.clone(),
                        brand_name: brand.name.clone(),
                        brand_color: brand.color.clone(),
                        kind: kind.clone(),
                        resource,
                    })
                })
            })
            .collect()
    }

    /// Hosting login details of a brand; `None` when it has no hosting.
    pub async fn credentials(&self, brand_id: &str) -> CoreResult<Option<HostingCredentials>> {
        let brands = self.brands.read().await;
        let brand = brands
            .iter()
            .find(|b| b.id == brand_id)
            .ok_or_else(|| rejected(CoreError::BrandNotFound(brand_id.to_string())))?;

        Ok(brand.resources.hosting().map(|h| HostingCredentials {
            provider: h.provider.clone(),
            username: h.username.clone(),
            password: h.password.clone(),
            login_url: h.login_url.clone(),
        }))
    }

    /// Resources expiring between `today` and `today + within_days` inclusive, soonest first.
    pub async fn expiring_resources(
        &self,
        today: NaiveDate,
        within_days: u32,
    ) -> Vec<ExpiringResource> {
        let window = i64::from(within_days);
        let brands = self.brands.read().await;

        let mut expiring: Vec<ExpiringResource> = brands
            .iter()
            .flat_map(|brand| {
                brand.resources.iter().filter_map(move |resource| {
                    let expiry = parse_expiry(resource.expiry()?).ok()?;
                    let days_left = date::days_until(today, expiry);
                    (0..=window).contains(&days_left).then(|| ExpiringResource {
                        brand_id: brand.id.clone(),
                        brand_name: brand.name.clone(),
                        kind: resource.kind(),
                        provider: resource.provider().to_string(),
                        expiry,
                        days_left,
                    })
                })
            })
            .collect();
        expiring.sort_by_key(|r| r.expiry);
        expiring
    }
}

fn find_mut<'a>(brands: &'a mut [Brand], id: &str) -> CoreResult<&'a mut Brand> {
    brands
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| rejected(CoreError::BrandNotFound(id.to_string())))
}
