//! Built-in dataset used when no brand snapshot is stored.

use crate::types::{
    AnalyticsResource, Brand, BrandResources, BrandStatus, DnsResource, DomainResource,
    HostingResource, Resource,
};

const MASKED_PASSWORD: &str = "••••••••";

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[allow(clippy::too_many_arguments)]
fn brand(
    id: &str,
    name: &str,
    color: &str,
    logo: &str,
    industry: &str,
    description: &str,
    status: BrandStatus,
    website: &str,
    resources: Vec<Resource>,
) -> Brand {
    let mut set = BrandResources::new();
    for resource in resources {
        set.insert(resource);
    }
    Brand {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        logo: logo.to_string(),
        industry: industry.to_string(),
        description: description.to_string(),
        status,
        website: website.to_string(),
        resources: set,
    }
}

/// Default brands, in display order.
#[must_use]
pub fn default_brands() -> Vec<Brand> {
    vec![
        brand(
            "giftalink",
            "Gift a Link",
            "#ff4fb1",
            "🎁",
            "Technology",
            "Digital gifting platform for modern teams.",
            BrandStatus::Active,
            "https://giftalink.com",
            vec![
                Resource::Hosting(HostingResource {
                    provider: "Hostinger".to_string(),
                    plan: some("Business Shared"),
                    login_url: some("https://hpanel.hostinger.com"),
                    username: some("admin@giftalink"),
                    password: some(MASKED_PASSWORD),
                    expiry: some("2024-12-15"),
                }),
                Resource::Dns(DnsResource {
                    provider: "Cloudflare".to_string(),
                    nameservers: vec![
                        "ns1.cloudflare.com".to_string(),
                        "ns2.cloudflare.com".to_string(),
                    ],
                    status: some("active"),
                }),
                Resource::Domain(DomainResource {
                    provider: "GoDaddy".to_string(),
                    registrar: some("GoDaddy"),
                    expiry: some("2024-11-20"),
                    auto_renew: Some(true),
                }),
                Resource::Analytics(AnalyticsResource {
                    provider: "Google Analytics".to_string(),
                    google_id: some("UA-12345678-1"),
                    status: some("active"),
                }),
            ],
        ),
        brand(
            "nextech",
            "NexTech",
            "#4facfe",
            "🤖",
            "AI Solutions",
            "Advanced AI solutions for enterprise automation.",
            BrandStatus::Active,
            "https://nextech.ai",
            vec![
                Resource::Hosting(HostingResource {
                    provider: "AWS".to_string(),
                    plan: some("EC2 t3.large"),
                    login_url: some("https://aws.amazon.com"),
                    username: some("admin@nextech"),
                    password: some(MASKED_PASSWORD),
                    expiry: some("2024-10-30"),
                }),
                Resource::Domain(DomainResource {
                    provider: "Namecheap".to_string(),
                    registrar: some("Namecheap"),
                    expiry: some("2024-09-15"),
                    auto_renew: Some(true),
                }),
            ],
        ),
        brand(
            "bloom",
            "Bloom",
            "#9d4edd",
            "🌸",
            "Wellness",
            "Mindfulness & wellness application.",
            BrandStatus::Active,
            "https://bloomapp.com",
            vec![
                Resource::Hosting(HostingResource {
                    provider: "Vercel".to_string(),
                    plan: some("Pro"),
                    login_url: some("https://vercel.com"),
                    username: some("team@bloom"),
                    password: some(MASKED_PASSWORD),
                    expiry: None,
                }),
                Resource::Dns(DnsResource {
                    provider: "GoDaddy DNS".to_string(),
                    nameservers: vec![
                        "ns1.domaincontrol.com".to_string(),
                        "ns2.domaincontrol.com".to_string(),
                    ],
                    status: some("active"),
                }),
            ],
        ),
        brand(
            "fusion",
            "Fusion Agency",
            "#ff6b35",
            "🎨",
            "Design",
            "Creative digital agency portfolio.",
            BrandStatus::Warning,
            "https://fusionagency.design",
            vec![Resource::Hosting(HostingResource {
                provider: "SiteGround".to_string(),
                plan: some("GrowBig"),
                login_url: some("https://siteground.com"),
                username: some("fusion@agency"),
                password: some(MASKED_PASSWORD),
                expiry: some("2024-08-25"),
            })],
        ),
    ]
}
