use web_sys::{Document, Element};

use super::HeadDocument;

/// The browser's live document.
#[derive(Clone)]
pub struct DomHead {
    document: Document,
}

impl DomHead {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// `None` outside a browser window.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl HeadDocument for DomHead {
    type Node = Element;

    fn has_head(&self) -> bool {
        self.document.head().is_some()
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn find(&self, tag: &str, key: &str, value: &str) -> Option<Element> {
        let selector = format!(r#"{tag}[{key}="{value}"]"#);
        self.document.query_selector(&selector).ok().flatten()
    }

    fn append(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        text: Option<&str>,
    ) -> Option<Element> {
        let head = self.document.head()?;
        let element = self.document.create_element(tag).ok()?;

        // Attributes go on before the element is attached, so a failure here
        // leaves nothing in the document.
        for (name, value) in attributes {
            if let Err(err) = element.set_attribute(name, value) {
                tracing::debug!(tag, name, ?err, "could not build head element");
                return None;
            }
        }
        if let Some(text) = text {
            element.set_text_content(Some(text));
        }

        if let Err(err) = head.append_child(&element) {
            tracing::debug!(tag, ?err, "could not append head element");
            return None;
        }
        Some(element)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            tracing::debug!(tag = %node.tag_name(), name, ?err, "could not set head attribute");
        }
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }
}
