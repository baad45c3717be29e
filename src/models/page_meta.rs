use crate::config::SiteConfig;
use crate::models::Route;

/// Title, description and path of the page being shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub path: Route,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>, path: Route) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            path,
        }
    }

    pub fn canonical_url(&self, site: &SiteConfig) -> String {
        site.url_for(self.path.as_path())
    }

    /// Content for every tag in [`HEAD_TAGS`], in the same order.
    pub fn tag_values(&self, site: &SiteConfig) -> Vec<(&'static HeadTag, String)> {
        let url = self.canonical_url(site);

        HEAD_TAGS
            .iter()
            .map(|tag| {
                let value = match tag.source {
                    TagSource::Title => self.title.clone(),
                    TagSource::Description => self.description.clone(),
                    TagSource::CanonicalUrl => url.clone(),
                    TagSource::Fixed(value) => value.to_string(),
                };
                (tag, value)
            })
            .collect()
    }
}

/// Where a head tag's `content` comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagSource {
    Title,
    Description,
    CanonicalUrl,
    Fixed(&'static str),
}

/// A `meta` element identified by one attribute, e.g. `name="description"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadTag {
    pub key: &'static str,
    pub value: &'static str,
    pub source: TagSource,
}

impl HeadTag {
    const fn name(value: &'static str, source: TagSource) -> Self {
        Self { key: "name", value, source }
    }

    const fn property(value: &'static str, source: TagSource) -> Self {
        Self { key: "property", value, source }
    }
}

pub static HEAD_TAGS: [HeadTag; 8] = [
    HeadTag::name("description", TagSource::Description),
    HeadTag::property("og:title", TagSource::Title),
    HeadTag::property("og:description", TagSource::Description),
    HeadTag::property("og:type", TagSource::Fixed("website")),
    HeadTag::property("og:url", TagSource::CanonicalUrl),
    HeadTag::name("twitter:card", TagSource::Fixed("summary_large_image")),
    HeadTag::name("twitter:title", TagSource::Title),
    HeadTag::name("twitter:description", TagSource::Description),
];
