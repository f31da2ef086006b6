//! Brand related type definitions

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::BrandResources;

/// Add-brand form default accent color
pub const DEFAULT_BRAND_COLOR: &str = "#6366f1";

/// Add-brand form default industry
pub const DEFAULT_INDUSTRY: &str = "Technology";

/// Advisory brand status, set to `Active` at creation and otherwise caller-controlled
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BrandStatus {
    #[default]
    Active,
    Warning,
    Inactive,
}

/// How a brand logo should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoKind<'a> {
    /// Emoji glyph (or any non-URL text)
    Glyph(&'a str),
    /// Remote image
    ImageUrl(&'a str),
}

/// Brand aggregate root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Derived from the name at creation, never recomputed
    pub id: String,
    pub name: String,
    /// Hex accent color, opaque to the core
    pub color: String,
    /// Emoji glyph or image URL
    pub logo: String,
    pub industry: String,
    pub description: String,
    pub status: BrandStatus,
    pub website: String,
    #[serde(default)]
    pub resources: BrandResources,
}

impl Brand {
    /// Classifies the logo: anything starting with `http` is an image URL.
    #[must_use]
    pub fn logo_kind(&self) -> LogoKind<'_> {
        if self.logo.starts_with("http") {
            LogoKind::ImageUrl(&self.logo)
        } else {
            LogoKind::Glyph(&self.logo)
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.id.trim().is_empty() {
            return Err(CoreError::ValidationError(format!(
                "Brand '{}' has an empty id",
                self.name
            )));
        }
        self.resources.validate()
    }
}

/// Checks a whole brand sequence: every brand valid, ids unique.
pub fn validate_brands(brands: &[Brand]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(brands.len());
    for brand in brands {
        brand.validate()?;
        if !seen.insert(brand.id.as_str()) {
            return Err(CoreError::DuplicateId(brand.id.clone()));
        }
    }
    Ok(())
}

/// Create brand request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandInput {
    pub name: String,
    pub color: String,
    pub logo: String,
    pub industry: String,
    pub description: String,
    pub website: String,
}

impl Default for BrandInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: DEFAULT_BRAND_COLOR.to_string(),
            logo: String::new(),
            industry: DEFAULT_INDUSTRY.to_string(),
            description: String::new(),
            website: String::new(),
        }
    }
}

impl BrandInput {
    /// Input with form defaults and the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Update brand request (partial update)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrandPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BrandStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<BrandResources>,
}

impl BrandPatch {
    /// Patch that replaces every form field, as the edit-brand form submits it.
    #[must_use]
    pub fn from_input(input: BrandInput) -> Self {
        Self {
            name: Some(input.name),
            color: Some(input.color),
            logo: Some(input.logo),
            industry: Some(input.industry),
            description: Some(input.description),
            website: Some(input.website),
            status: None,
            resources: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Shallow-merges the patch over `brand`. The id is never touched.
    pub fn apply_to(&self, brand: &mut Brand) {
        if let Some(ref name) = self.name {
            brand.name.clone_from(name);
        }
        if let Some(ref color) = self.color {
            brand.color.clone_from(color);
        }
        if let Some(ref logo) = self.logo {
            brand.logo.clone_from(logo);
        }
        if let Some(ref industry) = self.industry {
            brand.industry.clone_from(industry);
        }
        if let Some(ref description) = self.description {
            brand.description.clone_from(description);
        }
        if let Some(ref website) = self.website {
            brand.website.clone_from(website);
        }
        if let Some(status) = self.status {
            brand.status = status;
        }
        if let Some(ref resources) = self.resources {
            brand.resources.clone_from(resources);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HostingResource, Resource};

    fn brand(id: &str) -> Brand {
        Brand {
            id: id.to_string(),
            name: id.to_string(),
            color: DEFAULT_BRAND_COLOR.to_string(),
            logo: "🎁".to_string(),
            industry: DEFAULT_INDUSTRY.to_string(),
            description: String::new(),
            status: BrandStatus::Active,
            website: String::new(),
            resources: BrandResources::new(),
        }
    }

    #[test]
    fn logo_kind_detects_urls() {
        let mut b = brand("acme");
        assert_eq!(b.logo_kind(), LogoKind::Glyph("🎁"));
        b.logo = "https://cdn.example.com/logo.png".to_string();
        assert!(matches!(b.logo_kind(), LogoKind::ImageUrl(_)));
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut b = brand("acme");
        let before = b.clone();
        let patch = BrandPatch::default();
        assert!(patch.is_empty());
        patch.apply_to(&mut b);
        assert_eq!(b, before);
    }

    #[test]
    fn patch_preserves_status_and_resources_unless_given() {
        let mut b = brand("acme");
        b.status = BrandStatus::Warning;
        b.resources.insert(Resource::Hosting(HostingResource {
            provider: "AWS".to_string(),
            ..Default::default()
        }));

        BrandPatch {
            name: Some("Acme Corp".to_string()),
            ..Default::default()
        }
        .apply_to(&mut b);

        assert_eq!(b.id, "acme");
        assert_eq!(b.name, "Acme Corp");
        assert_eq!(b.status, BrandStatus::Warning);
        assert_eq!(b.resources.len(), 1);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BrandStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }

    #[test]
    fn brand_json_uses_camel_case_layout() {
        let json = serde_json::to_value(brand("acme")).unwrap();
        assert_eq!(json["id"], "acme");
        assert_eq!(json["status"], "active");
        assert!(json["resources"].as_object().unwrap().is_empty());
    }

    #[test]
    fn input_defaults_match_form() {
        let input: BrandInput = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(input.color, DEFAULT_BRAND_COLOR);
        assert_eq!(input.industry, DEFAULT_INDUSTRY);
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let brands = vec![brand("acme"), brand("bloom"), brand("acme")];
        assert_eq!(
            validate_brands(&brands),
            Err(CoreError::DuplicateId("acme".to_string()))
        );
    }
}
