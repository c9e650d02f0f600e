//! Render tree produced by assembly
//!
//! A [`Node`] is also what callers hand in as a pre-rendered segment; the
//! classifier never looks inside one.

use crate::attributes::{AttrValue, Attributes};
use crate::tags::is_void_tag;

/// An element with a tag name, attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name as written in markup
    pub tag: String,
    /// Element attributes
    pub attributes: Attributes,
    /// Child nodes in order
    pub children: Vec<Node>,
}

impl Element {
    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_text(&mut out);
        }
        out
    }
}

/// A transparent grouping of nodes, optionally keyed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    /// Reconciliation key
    pub key: Option<String>,
    /// Child nodes in order
    pub children: Vec<Node>,
}

/// A renderable tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text
    Text(String),
    /// Element with tag and attributes
    Element(Element),
    /// Grouping without markup of its own
    Fragment(Fragment),
}

impl Node {
    /// Text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Element node
    pub fn element(tag: impl Into<String>, attributes: Attributes, children: Vec<Node>) -> Self {
        Node::Element(Element {
            tag: tag.into(),
            attributes,
            children,
        })
    }

    /// Unkeyed fragment
    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment(Fragment {
            key: None,
            children,
        })
    }

    /// Keyed fragment
    pub fn keyed(key: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Fragment(Fragment {
            key: Some(key.into()),
            children,
        })
    }

    /// A node that renders nothing
    pub fn empty() -> Self {
        Node::Fragment(Fragment::default())
    }

    /// Whether this node renders nothing at all
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Text(text) => text.is_empty(),
            Node::Element(_) => false,
            Node::Fragment(fragment) => fragment.children.iter().all(Node::is_empty),
        }
    }

    /// Concatenated text content, as a DOM `textContent` would read it
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    pub(crate) fn write_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.write_text(out);
                }
            }
            Node::Fragment(fragment) => {
                for child in &fragment.children {
                    child.write_text(out);
                }
            }
        }
    }

    /// Serialize to HTML markup
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Append HTML markup for this node to `out`
    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_text(text, out),
            Node::Fragment(fragment) => {
                for child in &fragment.children {
                    child.write_html(out);
                }
            }
            Node::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in element.attributes.iter() {
                    write_attribute(name, value, out);
                }
                out.push('>');
                if is_void_tag(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
        }
    }

    /// First element with the given tag, depth first
    pub fn find_element(&self, tag: &str) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) if element.tag == tag => Some(element),
            Node::Element(element) => element.children.iter().find_map(|c| c.find_element(tag)),
            Node::Fragment(fragment) => fragment.children.iter().find_map(|c| c.find_element(tag)),
        }
    }

    /// All elements in document order
    pub fn elements(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_elements(&mut found);
        found
    }

    fn collect_elements<'a>(&'a self, found: &mut Vec<&'a Element>) {
        match self {
            Node::Text(_) => {}
            Node::Element(element) => {
                found.push(element);
                for child in &element.children {
                    child.collect_elements(found);
                }
            }
            Node::Fragment(fragment) => {
                for child in &fragment.children {
                    child.collect_elements(found);
                }
            }
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Map JSX-style property names to their HTML attribute names
/// Whether `name` can be written as a tag or attribute name without
/// breaking the surrounding markup
pub(crate) fn is_markup_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|ch| {
            ch.is_whitespace()
                || ch.is_control()
                || matches!(ch, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn html_attribute_name(name: &str) -> String {
    match name {
        "className" => "class".to_string(),
        "htmlFor" => "for".to_string(),
        _ => name.to_ascii_lowercase(),
    }
}

fn write_attribute(name: &str, value: &AttrValue, out: &mut String) {
    match value {
        AttrValue::Bool(false) => {}
        AttrValue::Bool(true) => {
            out.push(' ');
            out.push_str(&html_attribute_name(name));
        }
        other => {
            out.push(' ');
            out.push_str(&html_attribute_name(name));
            out.push_str("=\"");
            escape_attribute(&other.to_string(), out);
            out.push('"');
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
