//! Type definition module

mod brand;
mod profile;
mod resource;
mod summary;
mod view;

pub use brand::{
    validate_brands, Brand, BrandInput, BrandPatch, BrandStatus, LogoKind, DEFAULT_BRAND_COLOR,
    DEFAULT_INDUSTRY,
};
pub use profile::{OperatorProfile, OperatorRole, ProfileUpdate, Theme};
pub use resource::{
    AnalyticsResource, BrandResources, DnsResource, DomainResource, HostingResource, Resource,
    ResourceData, ResourceIntent, ResourceKind,
};
pub use summary::{
    DashboardStats, ExpiringResource, HostingCredentials, ResourceEntry, ResourceFilter,
};
pub use view::{Selection, ViewState};
