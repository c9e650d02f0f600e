//! Shape-based segment classification
//!
//! Segments carry no discriminant, so their variant is inferred from shape
//! with a fixed precedence: text, then pre-rendered, then anchor, then wrap.
//! Each later check trusts that the earlier ones failed; in particular the
//! wrap check never re-verifies the absence of a link target.
//!
//! The four public predicates each re-run the chain so that they can be used
//! on their own and still agree with [`classify`].

use std::fmt;

use thiserror::Error;

use crate::attributes::Attributes;
use crate::node::Node;
use crate::segment::Segment;
use crate::tags::TagName;

/// The four segment variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Raw string
    Text,
    /// Opaque pre-rendered node
    PreRendered,
    /// Link: content plus attributes with a link target
    Anchor,
    /// Generic element: content plus supported tag name
    Wrap,
}

impl SegmentKind {
    /// Stable lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::Text => "text",
            SegmentKind::PreRendered => "pre-rendered",
            SegmentKind::Anchor => "anchor",
            SegmentKind::Wrap => "wrap",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Content of an anchor or wrap segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Content<'a> {
    /// Text content
    Text(&'a str),
    /// Pre-rendered node content
    Node(&'a Node),
}

impl Content<'_> {
    /// Owned node for this content
    pub fn to_node(&self) -> Node {
        match self {
            Content::Text(text) => Node::text(*text),
            Content::Node(node) => (*node).clone(),
        }
    }

    fn of(segment: &Segment) -> Option<Content<'_>> {
        match segment.as_content()? {
            Segment::Text(text) => Some(Content::Text(text)),
            Segment::Node(node) => Some(Content::Node(node)),
            _ => None,
        }
    }
}

/// Typed, borrowed view of a classified segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classified<'a> {
    /// Raw string
    Text(&'a str),
    /// Pre-rendered node, passed through untouched
    PreRendered(&'a Node),
    /// Link segment
    Anchor {
        /// Link content
        content: Content<'a>,
        /// Link attributes, guaranteed to contain `href`
        attributes: &'a Attributes,
    },
    /// Generic element segment
    Wrap {
        /// Element content
        content: Content<'a>,
        /// Supported tag name
        tag: TagName,
        /// Optional attributes
        attributes: Option<&'a Attributes>,
    },
}

impl Classified<'_> {
    /// The variant of this view
    pub fn kind(&self) -> SegmentKind {
        match self {
            Classified::Text(_) => SegmentKind::Text,
            Classified::PreRendered(_) => SegmentKind::PreRendered,
            Classified::Anchor { .. } => SegmentKind::Anchor,
            Classified::Wrap { .. } => SegmentKind::Wrap,
        }
    }
}

/// Why a segment matched none of the four variants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    /// A dictionary on its own, outside any tuple
    #[error("bare attribute dictionary is not a segment")]
    BareAttributes,

    /// Tuple with a length no variant accepts
    #[error("tuple of {len} elements (expected 2 or 3)")]
    Arity {
        /// Number of elements found
        len: usize,
    },

    /// First tuple element is neither text nor a node
    #[error("content must be text or a node, found {shape}")]
    InvalidContent {
        /// Shape of the offending element
        shape: &'static str,
    },

    /// Two-element tuple whose dictionary lacks `href`
    #[error("anchor attributes are missing the required `href`")]
    MissingLinkTarget,

    /// Wrap tag outside the supported set
    #[error("unsupported tag name `{tag}`")]
    UnsupportedTag {
        /// The tag that was given
        tag: String,
    },

    /// A tuple element of the wrong shape at a given position
    #[error("unexpected {shape} at tuple position {position}")]
    UnexpectedElement {
        /// Zero-based position inside the tuple
        position: usize,
        /// Shape of the offending element
        shape: &'static str,
    },
}

/// `true` iff the segment is a raw string
#[inline]
pub fn is_text(segment: &Segment) -> bool {
    matches!(segment, Segment::Text(_))
}

/// `true` iff the segment is not text and carries the node marker
#[inline]
pub fn is_pre_rendered(segment: &Segment) -> bool {
    if is_text(segment) {
        return false;
    }
    matches!(segment, Segment::Node(_))
}

/// `true` iff the segment is a two-element tuple whose second element is a
/// dictionary holding `href`
pub fn is_anchor(segment: &Segment) -> bool {
    if is_text(segment) || is_pre_rendered(segment) {
        return false;
    }
    anchor_parts(segment).is_some()
}

/// `true` iff the segment is a two- or three-element tuple whose second
/// element is a supported tag name and no earlier variant matched
pub fn is_wrap(segment: &Segment) -> bool {
    if is_text(segment) || is_pre_rendered(segment) || is_anchor(segment) {
        return false;
    }
    wrap_parts(segment).is_some()
}

/// Classify a segment, returning `None` when it matches no variant
pub fn classify(segment: &Segment) -> Option<SegmentKind> {
    classify_view(segment).map(|view| view.kind())
}

/// Classify a segment into a typed view over its parts
pub fn classify_view(segment: &Segment) -> Option<Classified<'_>> {
    match segment {
        Segment::Text(text) => return Some(Classified::Text(text)),
        Segment::Node(node) => return Some(Classified::PreRendered(node)),
        _ => {}
    }

    if let Some((content, attributes)) = anchor_parts(segment) {
        return Some(Classified::Anchor {
            content,
            attributes,
        });
    }

    wrap_parts(segment).map(|(content, tag, attributes)| Classified::Wrap {
        content,
        tag,
        attributes,
    })
}

/// Explain why a segment is unclassifiable; `None` for well-formed segments
pub fn diagnose(segment: &Segment) -> Option<Malformed> {
    if classify(segment).is_some() {
        return None;
    }

    let parts = match segment {
        Segment::Attributes(_) => return Some(Malformed::BareAttributes),
        Segment::Tuple(parts) => parts,
        // Text and nodes always classify
        Segment::Text(_) | Segment::Node(_) => return None,
    };

    if !(2..=3).contains(&parts.len()) {
        return Some(Malformed::Arity { len: parts.len() });
    }
    if parts[0].as_content().is_none() {
        return Some(Malformed::InvalidContent {
            shape: parts[0].shape_name(),
        });
    }

    let reason = match &parts[1] {
        Segment::Attributes(attrs) if parts.len() == 2 && !attrs.has_link_target() => {
            Malformed::MissingLinkTarget
        }
        Segment::Text(tag) if TagName::lookup(tag).is_none() => Malformed::UnsupportedTag {
            tag: tag.clone(),
        },
        Segment::Text(_) => Malformed::UnexpectedElement {
            position: 2,
            shape: parts.get(2).map_or("nothing", Segment::shape_name),
        },
        other => Malformed::UnexpectedElement {
            position: 1,
            shape: other.shape_name(),
        },
    };
    Some(reason)
}

fn anchor_parts(segment: &Segment) -> Option<(Content<'_>, &Attributes)> {
    let Segment::Tuple(parts) = segment else {
        return None;
    };
    let [content, Segment::Attributes(attributes)] = parts.as_slice() else {
        return None;
    };
    if !attributes.has_link_target() {
        return None;
    }
    Some((Content::of(content)?, attributes))
}

fn wrap_parts(segment: &Segment) -> Option<(Content<'_>, TagName, Option<&Attributes>)> {
    let Segment::Tuple(parts) = segment else {
        return None;
    };
    let (content, tag, attributes) = match parts.as_slice() {
        [content, Segment::Text(tag)] => (content, tag, None),
        [content, Segment::Text(tag), Segment::Attributes(attrs)] => (content, tag, Some(attrs)),
        _ => return None,
    };
    let tag = TagName::lookup(tag)?;
    Some((Content::of(content)?, tag, attributes))
}
