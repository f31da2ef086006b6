//! Read-side projections over the brand store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Resource, ResourceKind};

/// Dashboard counters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_brands: usize,
    /// Hosting, DNS and domain entries across all brands
    pub managed_resources: usize,
    /// Brands with a website
    pub tracked_domains: usize,
}

/// Resource list filter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFilter {
    #[default]
    All,
    Hosting,
    Domain,
    Dns,
}

impl ResourceFilter {
    /// Kinds listed under this filter, in display order.
    #[must_use]
    pub fn kinds(self) -> Vec<ResourceKind> {
        match self {
            Self::All => vec![ResourceKind::Hosting, ResourceKind::Domain, ResourceKind::Dns],
            Self::Hosting => vec![ResourceKind::Hosting],
            Self::Domain => vec![ResourceKind::Domain],
            Self::Dns => vec![ResourceKind::Dns],
        }
    }
}

/// One row of the cross-brand resource list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEntry {
    /// `{brand_id}-{kind}`
    pub id: String,
    pub brand_id: String,
    pub brand_name: String,
    pub brand_color: String,
    pub kind: ResourceKind,
    pub resource: Resource,
}

/// Hosting login details shown in the credentials dialog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HostingCredentials {
    pub provider: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub login_url: Option<String>,
}

/// Resource with an expiry inside the requested window
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringResource {
    pub brand_id: String,
    pub brand_name: String,
    pub kind: ResourceKind,
    pub provider: String,
    pub expiry: NaiveDate,
    pub days_left: i64,
}
