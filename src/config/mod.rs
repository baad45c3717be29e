//! Site identity, contact details and imagery.
//!
//! The bundled `site.toml` is embedded at compile time so the wasm bundle
//! needs no fetch at startup. Social links, logo and search target are
//! placeholders until the business supplies real ones, which is why they
//! live here rather than in the page code.

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

const BUNDLED: &str = include_str!("../../site.toml");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub contact: ContactDetails,
    pub social: Vec<SocialLink>,
    pub imagery: Imagery,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    /// Scheme and host without a trailing slash, e.g. `https://truview.glass`.
    pub origin: String,
    pub logo: String,
    pub default_description: String,
    /// `SearchAction` target; must contain `{query}`.
    pub search_target: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub phone: String,
    pub email: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Imagery {
    pub hero: String,
    pub about: String,
    pub gallery: Vec<String>,
}

impl SiteConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(input)?;
        config.site.origin = config.site.origin.trim_end_matches('/').to_string();

        if config.site.origin.is_empty() {
            return Err(ConfigError::Invalid("site.origin must not be empty".into()));
        }

        Ok(config)
    }

    /// Parses the embedded `site.toml`, falling back to the built-in defaults.
    pub fn bundled() -> Self {
        match Self::from_toml_str(BUNDLED) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "bundled site.toml rejected, using defaults");
                Self::default()
            }
        }
    }

    /// Absolute URL for a site path such as `/contact`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.site.origin, path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            contact: ContactDetails::default(),
            social: vec![
                SocialLink {
                    label: "Facebook".into(),
                    url: "https://www.facebook.com/yourpage".into(),
                },
                SocialLink {
                    label: "Instagram".into(),
                    url: "https://www.instagram.com/yourprofile".into(),
                },
                SocialLink {
                    label: "YouTube".into(),
                    url: "https://www.youtube.com/@yourchannel".into(),
                },
            ],
            imagery: Imagery::default(),
        }
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "TruView Glass".into(),
            origin: "https://truview.glass".into(),
            logo: "https://truview.glass/logo.png".into(),
            default_description:
                "Premium glass solutions: shower screens, balustrades, mirrors & more.".into(),
            search_target: "https://truview.glass/search?q={query}".into(),
        }
    }
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            phone: "0400 000 000".into(),
            email: "hello@truview.glass".into(),
            location: "Your City, VIC".into(),
        }
    }
}

impl Default for Imagery {
    fn default() -> Self {
        let unsplash = |id: &str| {
            format!("https://images.unsplash.com/photo-{id}?q=80&w=1600&auto=format&fit=crop")
        };

        Self {
            hero: unsplash("1542718610-a1d656d1884a"),
            about: unsplash("1590645879212-59f3b6a055fa"),
            gallery: [
                "1496307042754-b4aa456c4a2d",
                "1524758631624-e2822e304c36",
                "1501045661006-fcebe0257c3f",
                "1540573133985-87b6da6d54a9",
                "1497366216548-37526070297c",
                "1523419409543-a9be2a93139b",
            ]
            .into_iter()
            .map(unsplash)
            .collect(),
        }
    }
}
