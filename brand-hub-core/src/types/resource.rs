//! Resource type definitions
//!
//! A brand owns at most one resource per kind. The four well-known kinds each carry
//! their own field set; any other kind falls back to the loose [`ResourceData`] shape.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};
use crate::utils::parse_expiry;

/// Resource kind key (`hosting`, `dns`, `domain`, `analytics` or a custom key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Hosting,
    Dns,
    Domain,
    Analytics,
    /// Kind without a dedicated schema
    Custom(String),
}

impl ResourceKind {
    /// Well-known kinds, in display order.
    #[must_use]
    pub fn well_known() -> [Self; 4] {
        [Self::Hosting, Self::Domain, Self::Dns, Self::Analytics]
    }

    /// Builds a custom kind, rejecting blank keys, keys that are not
    /// `[a-z0-9_-]+` and keys that name a well-known kind.
    pub fn custom(key: &str) -> CoreResult<Self> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CoreError::ValidationError(
                "Resource kind cannot be empty".to_string(),
            ));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(CoreError::ValidationError(format!(
                "Invalid resource kind '{key}': only lower-case letters, digits, '-' and '_' are allowed"
            )));
        }
        if Self::well_known().iter().any(|k| k.as_str() == key) {
            return Err(CoreError::ValidationError(format!(
                "'{key}' is a built-in resource kind"
            )));
        }
        Ok(Self::Custom(key.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hosting => "hosting",
            Self::Dns => "dns",
            Self::Domain => "domain",
            Self::Analytics => "analytics",
            Self::Custom(key) => key,
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "hosting" => Ok(Self::Hosting),
            "dns" => Ok(Self::Dns),
            "domain" => Ok(Self::Domain),
            "analytics" => Ok(Self::Analytics),
            other => Self::custom(other),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResourceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Hosting account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingResource {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Masked display string, not a secret store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

/// DNS configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsResource {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nameservers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Domain registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResource {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
}

/// Analytics integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResource {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Loose resource shape used for custom kinds; any field may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceData {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
}

/// One infrastructure integration attached to a brand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Hosting(HostingResource),
    Dns(DnsResource),
    Domain(DomainResource),
    Analytics(AnalyticsResource),
    Custom { kind: String, data: ResourceData },
}

impl Resource {
    /// Decodes a resource of the given kind from its JSON field object and validates it.
    pub fn from_json(kind: &ResourceKind, value: serde_json::Value) -> CoreResult<Self> {
        let resource = match kind {
            ResourceKind::Hosting => Self::Hosting(serde_json::from_value(value)?),
            ResourceKind::Dns => Self::Dns(serde_json::from_value(value)?),
            ResourceKind::Domain => Self::Domain(serde_json::from_value(value)?),
            ResourceKind::Analytics => Self::Analytics(serde_json::from_value(value)?),
            ResourceKind::Custom(key) => Self::Custom {
                kind: key.clone(),
                data: serde_json::from_value(value)?,
            },
        };
        resource.validate()?;
        Ok(resource)
    }

    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Hosting(_) => ResourceKind::Hosting,
            Self::Dns(_) => ResourceKind::Dns,
            Self::Domain(_) => ResourceKind::Domain,
            Self::Analytics(_) => ResourceKind::Analytics,
            Self::Custom { kind, .. } => ResourceKind::Custom(kind.clone()),
        }
    }

    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::Hosting(r) => &r.provider,
            Self::Dns(r) => &r.provider,
            Self::Domain(r) => &r.provider,
            Self::Analytics(r) => &r.provider,
            Self::Custom { data, .. } => &data.provider,
        }
    }

    #[must_use]
    pub fn expiry(&self) -> Option<&str> {
        match self {
            Self::Hosting(r) => r.expiry.as_deref(),
            Self::Domain(r) => r.expiry.as_deref(),
            Self::Custom { data, .. } => data.expiry.as_deref(),
            Self::Dns(_) | Self::Analytics(_) => None,
        }
    }

    /// Checks the invariants every stored resource must hold.
    pub fn validate(&self) -> CoreResult<()> {
        if let Self::Custom { kind, .. } = self {
            if ResourceKind::custom(kind)?.as_str() != kind {
                return Err(CoreError::ValidationError(format!(
                    "Resource kind '{kind}' must not contain surrounding whitespace"
                )));
            }
        }
        if self.provider().trim().is_empty() {
            return Err(CoreError::ValidationError(format!(
                "{} provider cannot be empty",
                self.kind()
            )));
        }
        if let Some(expiry) = self.expiry() {
            parse_expiry(expiry)?;
        }
        Ok(())
    }
}

// Serialized as the bare field object, the same shape it has under `resources.<kind>`.
impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Hosting(r) => r.serialize(serializer),
            Self::Dns(r) => r.serialize(serializer),
            Self::Domain(r) => r.serialize(serializer),
            Self::Analytics(r) => r.serialize(serializer),
            Self::Custom { data, .. } => data.serialize(serializer),
        }
    }
}

/// Whether a `set_resource` call comes from the add or the edit dialog
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceIntent {
    #[default]
    Add,
    Edit,
}

impl ResourceIntent {
    /// Notification text for a saved resource of `kind`.
    #[must_use]
    pub fn message(self, kind: &ResourceKind) -> String {
        match self {
            Self::Add => format!("{kind} added to brand!"),
            Self::Edit => format!("{kind} details updated!"),
        }
    }
}

/// Resources of one brand, keyed by kind. A missing key means "not provisioned".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hosting: Option<HostingResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dns: Option<DnsResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    domain: Option<DomainResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    analytics: Option<AnalyticsResource>,
    #[serde(flatten)]
    custom: BTreeMap<String, ResourceData>,
}

impl BrandResources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hosting(&self) -> Option<&HostingResource> {
        self.hosting.as_ref()
    }

    #[must_use]
    pub fn dns(&self) -> Option<&DnsResource> {
        self.dns.as_ref()
    }

    #[must_use]
    pub fn domain(&self) -> Option<&DomainResource> {
        self.domain.as_ref()
    }

    #[must_use]
    pub fn analytics(&self) -> Option<&AnalyticsResource> {
        self.analytics.as_ref()
    }

    #[must_use]
    pub fn get(&self, kind: &ResourceKind) -> Option<Resource> {
        match kind {
            ResourceKind::Hosting => self.hosting.clone().map(Resource::Hosting),
            ResourceKind::Dns => self.dns.clone().map(Resource::Dns),
            ResourceKind::Domain => self.domain.clone().map(Resource::Domain),
            ResourceKind::Analytics => self.analytics.clone().map(Resource::Analytics),
            ResourceKind::Custom(key) => self.custom.get(key).map(|data| Resource::Custom {
                kind: key.clone(),
                data: data.clone(),
            }),
        }
    }

    #[must_use]
    pub fn contains(&self, kind: &ResourceKind) -> bool {
        match kind {
            ResourceKind::Hosting => self.hosting.is_some(),
            ResourceKind::Dns => self.dns.is_some(),
            ResourceKind::Domain => self.domain.is_some(),
            ResourceKind::Analytics => self.analytics.is_some(),
            ResourceKind::Custom(key) => self.custom.contains_key(key),
        }
    }

    /// Creates or replaces the entry for the resource's kind, returning the previous one.
    pub fn insert(&mut self, resource: Resource) -> Option<Resource> {
        match resource {
            Resource::Hosting(r) => self.hosting.replace(r).map(Resource::Hosting),
            Resource::Dns(r) => self.dns.replace(r).map(Resource::Dns),
            Resource::Domain(r) => self.domain.replace(r).map(Resource::Domain),
            Resource::Analytics(r) => self.analytics.replace(r).map(Resource::Analytics),
            Resource::Custom { kind, data } => {
                let previous = self.custom.insert(kind.clone(), data);
                previous.map(|data| Resource::Custom { kind, data })
            }
        }
    }

    /// Removes the entry for `kind` entirely.
    pub fn remove(&mut self, kind: &ResourceKind) -> Option<Resource> {
        match kind {
            ResourceKind::Hosting => self.hosting.take().map(Resource::Hosting),
            ResourceKind::Dns => self.dns.take().map(Resource::Dns),
            ResourceKind::Domain => self.domain.take().map(Resource::Domain),
            ResourceKind::Analytics => self.analytics.take().map(Resource::Analytics),
            ResourceKind::Custom(key) => self.custom.remove(key).map(|data| Resource::Custom {
                kind: key.clone(),
                data,
            }),
        }
    }

    /// Provisioned kinds: hosting, domain, dns, analytics, then custom keys sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<ResourceKind> {
        ResourceKind::well_known()
            .into_iter()
            .filter(|k| self.contains(k))
            .chain(self.custom.keys().cloned().map(ResourceKind::Custom))
            .collect()
    }

    /// Provisioned resources in [`Self::kinds`] order.
    pub fn iter(&self) -> impl Iterator<Item = Resource> + '_ {
        self.kinds().into_iter().filter_map(|k| self.get(&k))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        [
            self.hosting.is_some(),
            self.dns.is_some(),
            self.domain.is_some(),
            self.analytics.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
            + self.custom.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.iter().try_for_each(|r| r.validate())
    }
}
