//! Owned HTML tree shared by the compile pipeline.
//!
//! Invariant: text content and attribute values are stored DECODED.
//! Entity encoding happens once, at render time. `Text::raw` opts a node
//! out of escaping (inline SVG, pre-rendered markup).

pub mod parse;
pub mod render;

use smallvec::SmallVec;

pub use parse::parse_fragment;
pub use render::{render_document, render_nodes};

// =============================================================================
// Attributes
// =============================================================================

/// Attribute list preserving insertion order.
///
/// Order matters for deterministic output; most elements carry fewer than
/// four attributes so the inline capacity avoids heap allocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs(SmallVec<[(String, String); 4]>);

impl Attrs {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Set an attribute, replacing any existing value in place.
    pub fn set(&mut self, name: &str, value: &str) {
        for (k, v) in &mut self.0 {
            if k == name {
                *v = value.to_string();
                return;
            }
        }
        self.0.push((name.to_string(), value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.0.iter().position(|(k, _)| k == name)?;
        Some(self.0.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Attrs {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut attrs = Self::new();
        for (k, v) in pairs {
            attrs.set(k, v);
        }
        attrs
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// Text node content.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    /// Raw text is emitted verbatim at render time (no entity escaping).
    pub raw: bool,
}

impl Text {
    /// Text that gets entity-escaped at render time.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            raw: false,
        }
    }

    /// Pre-rendered markup emitted verbatim.
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            raw: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Whitespace-only text node (insignificant between block elements).
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        match self {
            Node::Text(t) => t.content.chars().all(char::is_whitespace),
            Node::Element(_) => false,
        }
    }
}

// =============================================================================
// Elements
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attrs(tag: impl Into<String>, attrs: Attrs) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.set(name, value);
    }

    #[inline]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    #[inline]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.get(name).is_some()
    }

    #[inline]
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    #[inline]
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    #[inline]
    pub fn push_elem(&mut self, elem: Element) {
        self.children.push(Node::Element(Box::new(elem)));
    }

    #[inline]
    pub fn push_text(&mut self, text: &str) {
        self.children.push(Node::Text(Text::new(text)));
    }

    /// Push pre-rendered markup (emitted verbatim).
    #[inline]
    pub fn push_raw(&mut self, markup: &str) {
        self.children.push(Node::Text(Text::raw(markup)));
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        fn collect(elem: &Element, out: &mut String) {
            for child in &elem.children {
                match child {
                    Node::Text(t) => out.push_str(&t.content),
                    Node::Element(e) => collect(e, out),
                }
            }
        }
        let mut out = String::new();
        collect(self, &mut out);
        out
    }
}

// =============================================================================
// Document
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}
