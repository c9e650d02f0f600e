//! Sentence segment values
//!
//! A [`Segment`] is deliberately loose: its variant (text, pre-rendered,
//! anchor or wrap) is never stored, only inferred from shape by the
//! [`classifier`](crate::classifier). The typed constructors below build
//! well-formed shapes; the raw shapes stay open so that ambiguous tuples
//! coming from documents classify exactly as written.

use crate::attributes::Attributes;
use crate::node::Node;

/// A loosely-typed sentence segment
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// A raw string
    Text(String),
    /// A value carrying the node marker: an opaque pre-rendered node
    Node(Node),
    /// A bare attribute dictionary
    Attributes(Attributes),
    /// An array-shaped value such as `(content, tag)` or `(content, attrs)`
    Tuple(Vec<Segment>),
}

impl Segment {
    /// Plain text segment
    pub fn text(text: impl Into<String>) -> Self {
        Segment::Text(text.into())
    }

    /// Pre-rendered node segment
    pub fn node(node: impl Into<Node>) -> Self {
        Segment::Node(node.into())
    }

    /// Anchor segment: `(content, attributes)`
    ///
    /// The segment only classifies as an anchor when `attributes` holds an
    /// `href`.
    pub fn anchor(content: impl Into<Segment>, attributes: Attributes) -> Self {
        Segment::Tuple(vec![content.into(), Segment::Attributes(attributes)])
    }

    /// Link shorthand: anchor with only an `href`
    pub fn link(content: impl Into<Segment>, href: impl Into<String>) -> Self {
        Self::anchor(content, Attributes::new().with("href", href.into()))
    }

    /// Wrap segment without attributes: `(content, tag)`
    pub fn wrap(content: impl Into<Segment>, tag: impl Into<String>) -> Self {
        Segment::Tuple(vec![content.into(), Segment::Text(tag.into())])
    }

    /// Wrap segment with attributes: `(content, tag, attributes)`
    pub fn wrap_with(
        content: impl Into<Segment>,
        tag: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Segment::Tuple(vec![
            content.into(),
            Segment::Text(tag.into()),
            Segment::Attributes(attributes),
        ])
    }

    /// Whether this value can stand as the content of an anchor or wrap
    pub(crate) fn as_content(&self) -> Option<&Segment> {
        match self {
            Segment::Text(_) | Segment::Node(_) => Some(self),
            _ => None,
        }
    }

    /// Short shape name used in diagnostics
    pub fn shape_name(&self) -> &'static str {
        match self {
            Segment::Text(_) => "text",
            Segment::Node(_) => "node",
            Segment::Attributes(_) => "attributes",
            Segment::Tuple(_) => "tuple",
        }
    }
}

impl From<&str> for Segment {
    fn from(text: &str) -> Self {
        Segment::text(text)
    }
}

impl From<String> for Segment {
    fn from(text: String) -> Self {
        Segment::Text(text)
    }
}

impl From<Node> for Segment {
    fn from(node: Node) -> Self {
        Segment::Node(node)
    }
}

impl From<Attributes> for Segment {
    fn from(attributes: Attributes) -> Self {
        Segment::Attributes(attributes)
    }
}
