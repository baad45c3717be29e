#![allow(dead_code)]

use truview::config::SiteConfig;
use truview::frontend::registry;
use truview::head::{HeadManager, MemoryHead};
use truview::models::{PageMeta, Route};

pub fn site() -> SiteConfig {
    SiteConfig::default()
}

pub fn manager() -> HeadManager<MemoryHead> {
    HeadManager::new(MemoryHead::new(), site())
}

pub fn meta_for(route: Route) -> PageMeta {
    registry::lookup(route).meta(&site())
}

/// Resolves a raw fragment the way the router does and activates its page.
pub fn visit(manager: &mut HeadManager<MemoryHead>, fragment: &str) -> Route {
    let route = Route::from_fragment(fragment);
    manager.activate(meta_for(route));
    route
}

pub fn content_of<'a>(head: &'a MemoryHead, key: &str, value: &str) -> Option<&'a str> {
    head.lookup("meta", key, value)
        .and_then(|el| el.attribute("content"))
}

pub fn canonical_href(head: &MemoryHead) -> Option<&str> {
    head.lookup("link", "rel", "canonical")
        .and_then(|el| el.attribute("href"))
}

pub fn json_ld_count(head: &MemoryHead) -> usize {
    head.count("script", "type", "application/ld+json")
}
