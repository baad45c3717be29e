use serde_json::{Value, json};

use crate::config::SiteConfig;

pub const JSON_LD_TYPE: &str = "application/ld+json";

/// Site-wide schema.org graph: a `WebSite` with search plus the `Organization`.
/// Identical on every page.
pub fn site_graph(site: &SiteConfig) -> Value {
    let info = &site.site;
    let same_as: Vec<&str> = site.social.iter().map(|s| s.url.as_str()).collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "WebSite",
                "name": info.name,
                "url": info.origin,
                "potentialAction": {
                    "@type": "SearchAction",
                    "target": info.search_target,
                    "query-input": "required name=query"
                }
            },
            {
                "@type": "Organization",
                "name": info.name,
                "url": info.origin,
                "logo": info.logo,
                "sameAs": same_as
            }
        ]
    })
}

pub fn site_graph_text(site: &SiteConfig) -> String {
    site_graph(site).to_string()
}
