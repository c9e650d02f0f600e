//! Turning one classified segment into a keyed render unit

use crate::attributes::Attributes;
use crate::classifier::{classify_view, diagnose, Classified, SegmentKind};
use crate::node::Node;
use crate::segment::Segment;
use crate::tags::TagName;

/// Default prefix of positional unit keys
pub const DEFAULT_KEY_PREFIX: &str = "segment_";

/// Separator appended after every unit but the last
pub const SEPARATOR: &str = " ";

/// The output for one segment plus its separator policy
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedUnit {
    /// Positional key, stable across re-renders
    pub key: String,
    /// Variant the segment classified as; `None` for malformed segments
    pub kind: Option<SegmentKind>,
    /// Rendered content; empty for malformed segments
    pub content: Node,
    /// Whether a single space follows the content
    pub trailing_space: bool,
}

impl RenderedUnit {
    /// Whether the segment behind this unit matched no variant
    pub fn is_malformed(&self) -> bool {
        self.kind.is_none()
    }

    /// Keyed fragment holding the content and, unless last, the separator
    pub fn to_node(&self) -> Node {
        let mut children = vec![self.content.clone()];
        if self.trailing_space {
            children.push(Node::text(SEPARATOR));
        }
        Node::keyed(self.key.clone(), children)
    }

    pub(crate) fn write_text(&self, out: &mut String) {
        self.content.write_text(out);
        if self.trailing_space {
            out.push_str(SEPARATOR);
        }
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        self.content.write_html(out);
        if self.trailing_space {
            out.push_str(SEPARATOR);
        }
    }
}

/// Renders segments into units keyed with a configurable prefix
#[derive(Debug, Clone)]
pub struct Renderer {
    key_prefix: String,
}

impl Renderer {
    /// Create a renderer with the default `segment_` prefix
    pub fn new() -> Self {
        Self::with_key_prefix(DEFAULT_KEY_PREFIX)
    }

    /// Create a renderer with a custom key prefix
    pub fn with_key_prefix(prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: prefix.into(),
        }
    }

    /// The prefix used for unit keys
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// Render the segment at `index` of a sequence of `total` segments
    ///
    /// Segments matching no variant render as an empty unit; the separator
    /// rule still applies to them.
    pub fn render(&self, segment: &Segment, index: usize, total: usize) -> RenderedUnit {
        let view = classify_view(segment);
        let content = match view {
            Some(view) => content_for(view),
            None => {
                if let Some(reason) = diagnose(segment) {
                    log::debug!("segment {index} rendered empty: {reason}");
                }
                Node::empty()
            }
        };

        RenderedUnit {
            key: format!("{}{index}", self.key_prefix),
            kind: view.map(|v| v.kind()),
            content,
            trailing_space: index + 1 != total,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one segment with the default key prefix
pub fn render_segment(segment: &Segment, index: usize, total: usize) -> RenderedUnit {
    Renderer::new().render(segment, index, total)
}

fn content_for(view: Classified<'_>) -> Node {
    match view {
        Classified::Text(text) => Node::text(text),
        Classified::PreRendered(node) => node.clone(),
        Classified::Anchor {
            content,
            attributes,
        } => Node::element(
            TagName::anchor().as_str(),
            attributes.clone(),
            vec![content.to_node()],
        ),
        Classified::Wrap {
            content,
            tag,
            attributes,
        } => Node::element(
            tag.as_str(),
            attributes.cloned().unwrap_or_else(Attributes::new),
            vec![content.to_node()],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_passes_through() {
        let unit = render_segment(&Segment::text("one"), 0, 2);
        assert_eq!(unit.key, "segment_0");
        assert_eq!(unit.kind, Some(SegmentKind::Text));
        assert_eq!(unit.content, Node::text("one"));
        assert!(unit.trailing_space);
    }

    #[test]
    fn test_pre_rendered_node_is_untouched() {
        let node = Node::element(
            "span",
            Attributes::new().with("className", "x"),
            vec![Node::text("kept")],
        );
        let unit = render_segment(&Segment::node(node.clone()), 1, 2);
        assert_eq!(unit.content, node);
        assert!(!unit.trailing_space);
    }

    #[test]
    fn test_anchor_becomes_link_element() {
        let unit = render_segment(&Segment::link("anchor text", "www.google.com"), 0, 1);
        let element = unit.content.find_element("a").unwrap();
        assert_eq!(element.attributes.href(), Some("www.google.com"));
        assert_eq!(element.text_content(), "anchor text");
        assert!(!unit.trailing_space);
    }

    #[test]
    fn test_wrap_defaults_to_empty_attributes() {
        let unit = render_segment(&Segment::wrap("click", "b"), 0, 3);
        let element = unit.content.find_element("b").unwrap();
        assert!(element.attributes.is_empty());
        assert_eq!(element.text_content(), "click");
    }

    #[test]
    fn test_malformed_renders_empty_with_separator() {
        let unit = render_segment(&Segment::wrap("x", "not-a-tag"), 0, 2);
        assert!(unit.is_malformed());
        assert!(unit.content.is_empty());
        assert!(unit.trailing_space);
        assert_eq!(unit.to_node().text_content(), " ");
    }

    #[test]
    fn test_custom_key_prefix() {
        let renderer = Renderer::with_key_prefix("part-");
        let unit = renderer.render(&Segment::text("x"), 7, 8);
        assert_eq!(unit.key, "part-7");
        assert_eq!(renderer.key_prefix(), "part-");
    }
}
