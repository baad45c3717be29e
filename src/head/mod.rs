//! Keeps the document `<head>` in step with the page on screen.
//!
//! Each call to [`HeadManager::activate`] first removes whatever the previous
//! activation created, then writes the new page's title, canonical link,
//! social meta tags and JSON-LD script. Tags that were already in the head
//! (for example from `index.html`) are updated in place and never removed.
//! The canonical link is shared across pages: found or created once, then
//! only its `href` changes.

mod dom;
mod memory;

pub use dom::DomHead;
pub use memory::{MemoryElement, MemoryHead};

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::models::{JSON_LD_TYPE, PageMeta, site_graph_text};

/// The few DOM operations the manager needs.
pub trait HeadDocument {
    type Node: Clone;

    /// `false` when there is no `<head>` to write into.
    fn has_head(&self) -> bool;

    fn set_title(&mut self, title: &str);

    /// First element matching `tag[key="value"]` anywhere in the document.
    fn find(&self, tag: &str, key: &str, value: &str) -> Option<Self::Node>;

    /// Creates an element and appends it to `<head>`.
    fn append(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        text: Option<&str>,
    ) -> Option<Self::Node>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn remove(&mut self, node: &Self::Node);
}

/// A document shared with the caller, who can still inspect it after the
/// manager that writes into it is gone.
impl<D: HeadDocument> HeadDocument for Rc<RefCell<D>> {
    type Node = D::Node;

    fn has_head(&self) -> bool {
        self.borrow().has_head()
    }

    fn set_title(&mut self, title: &str) {
        self.borrow_mut().set_title(title);
    }

    fn find(&self, tag: &str, key: &str, value: &str) -> Option<Self::Node> {
        self.borrow().find(tag, key, value)
    }

    fn append(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        text: Option<&str>,
    ) -> Option<Self::Node> {
        self.borrow_mut().append(tag, attributes, text)
    }

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) {
        self.borrow_mut().set_attribute(node, name, value);
    }

    fn remove(&mut self, node: &Self::Node) {
        self.borrow_mut().remove(node);
    }
}

/// Nodes created for one page; released as a unit.
#[derive(Debug)]
pub struct HeadActivation<N> {
    pub meta: PageMeta,
    owned: Vec<N>,
}

impl<N> HeadActivation<N> {
    pub fn owned(&self) -> &[N] {
        &self.owned
    }
}

pub struct HeadManager<D: HeadDocument> {
    document: D,
    site: SiteConfig,
    structured_data: String,
    active: Option<HeadActivation<D::Node>>,
}

impl<D: HeadDocument> HeadManager<D> {
    pub fn new(document: D, site: SiteConfig) -> Self {
        let structured_data = site_graph_text(&site);

        Self {
            document,
            site,
            structured_data,
            active: None,
        }
    }

    /// Replaces the current page's head state with `meta`'s.
    pub fn activate(&mut self, meta: PageMeta) {
        self.release();

        if !self.document.has_head() {
            tracing::debug!(path = %meta.path, "no document head, skipping metadata");
            return;
        }

        self.document.set_title(&meta.title);

        let canonical_url = meta.canonical_url(&self.site);
        let canonical = self
            .document
            .find("link", "rel", "canonical")
            .or_else(|| self.document.append("link", &[("rel", "canonical")], None));
        if let Some(link) = canonical {
            self.document.set_attribute(&link, "href", &canonical_url);
        }

        let mut owned = Vec::new();
        for (tag, content) in meta.tag_values(&self.site) {
            let node = match self.document.find("meta", tag.key, tag.value) {
                Some(existing) => existing,
                None => match self.document.append("meta", &[(tag.key, tag.value)], None) {
                    Some(created) => {
                        owned.push(created.clone());
                        created
                    }
                    None => continue,
                },
            };
            self.document.set_attribute(&node, "content", &content);
        }

        if let Some(script) = self.document.append(
            "script",
            &[("type", JSON_LD_TYPE)],
            Some(self.structured_data.as_str()),
        ) {
            owned.push(script);
        }

        tracing::debug!(path = %meta.path, owned = owned.len(), "head metadata applied");
        self.active = Some(HeadActivation { meta, owned });
    }

    /// Removes every node the current activation created. Safe to call twice.
    pub fn release(&mut self) {
        if let Some(activation) = self.active.take() {
            for node in &activation.owned {
                self.document.remove(node);
            }
        }
    }

    pub fn active(&self) -> Option<&HeadActivation<D::Node>> {
        self.active.as_ref()
    }

    pub fn owned(&self) -> &[D::Node] {
        self.active
            .as_ref()
            .map(HeadActivation::owned)
            .unwrap_or_default()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }
}

impl<D: HeadDocument> Drop for HeadManager<D> {
    fn drop(&mut self) {
        self.release();
    }
}
