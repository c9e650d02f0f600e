//! Sentence segment classification and assembly
//!
//! This crate turns a heterogeneous sequence of sentence segments into one
//! space-joined sequence of keyed render units. A segment is one of four
//! variants, recognized purely by shape:
//!
//! - **text**: a raw string
//! - **pre-rendered**: an opaque [`Node`], passed through untouched
//! - **anchor**: `(content, {href, ...})`
//! - **wrap**: `(content, tag)` or `(content, tag, attributes)` with `tag`
//!   from the closed [`SUPPORTED_TAGS`] set
//!
//! Segments that match none of them render as empty units instead of
//! failing, unless strict assembly is requested.
//!
//! # Example
//!
//! ```rust
//! use segmenta_core::{assemble, Attributes, Node, Segment};
//!
//! let segments = vec![
//!     Segment::node(Node::text("one")),
//!     Segment::text("two"),
//!     Segment::wrap("click", "b"),
//!     Segment::wrap_with("the following:", "i", Attributes::new().with("tabIndex", -1)),
//!     Segment::link("anchor text", "www.google.com"),
//! ];
//!
//! let sentence = assemble(Some(segments.as_slice()));
//! assert_eq!(
//!     sentence.text_content(),
//!     "one two click the following: anchor text"
//! );
//! assert_eq!(
//!     sentence.to_html(),
//!     r#"one two <b>click</b> <i tabindex="-1">the following:</i> <a href="www.google.com">anchor text</a>"#
//! );
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod attributes;
pub mod classifier;
pub mod config;
pub mod error;
#[cfg(feature = "serde")]
pub mod json;
pub mod memo;
pub mod node;
pub mod renderer;
pub mod segment;
pub mod tags;

// Re-export key types
pub use assembler::{assemble, Assembler, Sentence};
pub use attributes::{AttrValue, Attributes, LINK_TARGET_KEY};
pub use classifier::{
    classify, classify_view, diagnose, is_anchor, is_pre_rendered, is_text, is_wrap, Classified,
    Content, Malformed, SegmentKind,
};
pub use config::{AssemblerConfig, MalformedPolicy};
pub use error::{Result, SegmentError};
#[cfg(feature = "serde")]
pub use json::{parse_segments, segments_to_json, NODE_MARKER};
pub use memo::{IdentityToken, SentenceCache};
pub use node::{Element, Fragment, Node};
pub use renderer::{render_segment, RenderedUnit, Renderer, DEFAULT_KEY_PREFIX, SEPARATOR};
pub use segment::Segment;
pub use tags::{is_supported_tag, supported_tags, TagName, SUPPORTED_TAGS};
