use std::collections::BTreeMap;

use super::HeadDocument;

/// A detached stand-in for `<head>`, used off the browser and in tests.
#[derive(Clone, Debug)]
pub struct MemoryHead {
    title: String,
    elements: Vec<MemoryElement>,
    next_id: usize,
    has_head: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryElement {
    pub id: usize,
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
}

impl MemoryElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn matches(&self, tag: &str, key: &str, value: &str) -> bool {
        self.tag == tag && self.attribute(key) == Some(value)
    }
}

impl MemoryHead {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            elements: Vec::new(),
            next_id: 0,
            has_head: true,
        }
    }

    /// A document with no `<head>` at all.
    pub fn without_head() -> Self {
        Self {
            has_head: false,
            ..Self::new()
        }
    }

    /// Seeds an element as if it came from the page's static HTML.
    pub fn with_element(mut self, tag: &str, attributes: &[(&str, &str)]) -> Self {
        self.insert(tag, attributes, None);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }

    pub fn get(&self, id: usize) -> Option<&MemoryElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn lookup(&self, tag: &str, key: &str, value: &str) -> Option<&MemoryElement> {
        self.elements.iter().find(|el| el.matches(tag, key, value))
    }

    pub fn count(&self, tag: &str, key: &str, value: &str) -> usize {
        self.elements
            .iter()
            .filter(|el| el.matches(tag, key, value))
            .count()
    }

    /// Title and elements without node ids, for comparing two states.
    pub fn snapshot(&self) -> (String, Vec<(String, BTreeMap<String, String>, Option<String>)>) {
        let elements = self
            .elements
            .iter()
            .map(|el| (el.tag.clone(), el.attributes.clone(), el.text.clone()))
            .collect();
        (self.title.clone(), elements)
    }

    fn insert(&mut self, tag: &str, attributes: &[(&str, &str)], text: Option<&str>) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        self.elements.push(MemoryElement {
            id,
            tag: tag.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            text: text.map(str::to_string),
        });
        id
    }
}

impl Default for MemoryHead {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadDocument for MemoryHead {
    type Node = usize;

    fn has_head(&self) -> bool {
        self.has_head
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn find(&self, tag: &str, key: &str, value: &str) -> Option<usize> {
        self.lookup(tag, key, value).map(|el| el.id)
    }

    fn append(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        text: Option<&str>,
    ) -> Option<usize> {
        if !self.has_head {
            return None;
        }
        Some(self.insert(tag, attributes, text))
    }

    fn set_attribute(&mut self, node: &usize, name: &str, value: &str) {
        if let Some(el) = self.elements.iter_mut().find(|el| el.id == *node) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove(&mut self, node: &usize) {
        self.elements.retain(|el| el.id != *node);
    }
}
