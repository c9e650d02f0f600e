//! JSON segment documents
//!
//! Documents are arrays of segments. Strings are text, arrays are tuples,
//! objects carrying the [`NODE_MARKER`] key are pre-rendered nodes and every
//! other object is an attribute dictionary:
//!
//! ```json
//! [
//!   {"$node": "#text", "text": "one"},
//!   "two",
//!   ["click", "b"],
//!   ["the following:", "i", {"tabIndex": -1}],
//!   ["anchor text", {"href": "www.google.com"}]
//! ]
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::attributes::{AttrValue, Attributes};
use crate::classifier::SegmentKind;
use crate::error::{Result, SegmentError};
use crate::node::{is_markup_name, Element, Fragment, Node};
use crate::segment::Segment;

/// Object key marking a pre-rendered node
pub const NODE_MARKER: &str = "$node";

const TEXT_NODE: &str = "#text";
const FRAGMENT_NODE: &str = "#fragment";

fn decode_err(msg: impl Into<String>) -> SegmentError {
    SegmentError::Decode(msg.into())
}

/// Parse a JSON document into a segment sequence
pub fn parse_segments(text: &str) -> Result<Vec<Segment>> {
    let value: Value = serde_json::from_str(text).map_err(|e| decode_err(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(decode_err(format!(
            "expected an array of segments, found {}",
            value_kind(&value)
        )));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Segment::from_json(item).map_err(|e| match e {
                SegmentError::Decode(msg) => decode_err(format!("segment {index}: {msg}")),
                other => other,
            })
        })
        .collect()
}

/// Serialize a segment sequence back into a JSON document
pub fn segments_to_json(segments: &[Segment]) -> Value {
    Value::Array(segments.iter().map(Segment::to_json).collect())
}

impl Segment {
    /// Decode one segment from a JSON value
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Segment::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(Segment::from_json)
                .collect::<Result<Vec<_>>>()
                .map(Segment::Tuple),
            Value::Object(map) if map.contains_key(NODE_MARKER) => {
                Node::from_json_map(map).map(Segment::Node)
            }
            Value::Object(map) => Attributes::from_json_map(map).map(Segment::Attributes),
            other => Err(decode_err(format!(
                "{} is not a segment",
                value_kind(other)
            ))),
        }
    }

    /// Encode this segment as a JSON value
    pub fn to_json(&self) -> Value {
        match self {
            Segment::Text(text) => Value::String(text.clone()),
            Segment::Node(node) => node.to_json(),
            Segment::Attributes(attributes) => attributes.to_json(),
            Segment::Tuple(parts) => Value::Array(parts.iter().map(Segment::to_json).collect()),
        }
    }
}

impl Node {
    /// Decode a node; plain strings are accepted as text nodes
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Node::text(text.as_str())),
            Value::Object(map) => Self::from_json_map(map),
            other => Err(decode_err(format!("{} is not a node", value_kind(other)))),
        }
    }

    fn from_json_map(map: &Map<String, Value>) -> Result<Self> {
        let marker = map
            .get(NODE_MARKER)
            .and_then(Value::as_str)
            .ok_or_else(|| decode_err(format!("`{NODE_MARKER}` must be a string")))?;

        match marker {
            TEXT_NODE => {
                let text = map
                    .get("text")
                    .and_then(Value::as_str)
                    .ok_or_else(|| decode_err("text node without a string `text`"))?;
                Ok(Node::text(text))
            }
            FRAGMENT_NODE => {
                let key = match map.get("key") {
                    None | Some(Value::Null) => None,
                    Some(Value::String(key)) => Some(key.clone()),
                    Some(other) => {
                        return Err(decode_err(format!(
                            "fragment key must be a string, found {}",
                            value_kind(other)
                        )))
                    }
                };
                Ok(Node::Fragment(Fragment {
                    key,
                    children: children_from_json(map)?,
                }))
            }
            "" => Err(decode_err("empty element tag")),
            tag if !is_markup_name(tag) => {
                Err(decode_err(format!("invalid element tag {tag:?}")))
            }
            tag => {
                let attributes = match map.get("attributes") {
                    None | Some(Value::Null) => Attributes::new(),
                    Some(Value::Object(attrs)) => Attributes::from_json_map(attrs)?,
                    Some(other) => {
                        return Err(decode_err(format!(
                            "element attributes must be an object, found {}",
                            value_kind(other)
                        )))
                    }
                };
                Ok(Node::Element(Element {
                    tag: tag.to_string(),
                    attributes,
                    children: children_from_json(map)?,
                }))
            }
        }
    }

    /// Encode this node as a JSON value carrying the node marker
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        match self {
            Node::Text(text) => {
                map.insert(NODE_MARKER.into(), TEXT_NODE.into());
                map.insert("text".into(), Value::String(text.clone()));
            }
            Node::Fragment(fragment) => {
                map.insert(NODE_MARKER.into(), FRAGMENT_NODE.into());
                if let Some(key) = &fragment.key {
                    map.insert("key".into(), Value::String(key.clone()));
                }
                map.insert("children".into(), children_to_json(&fragment.children));
            }
            Node::Element(element) => {
                map.insert(NODE_MARKER.into(), Value::String(element.tag.clone()));
                if !element.attributes.is_empty() {
                    map.insert("attributes".into(), element.attributes.to_json());
                }
                map.insert("children".into(), children_to_json(&element.children));
            }
        }
        Value::Object(map)
    }
}

fn children_from_json(map: &Map<String, Value>) -> Result<Vec<Node>> {
    match map.get("children") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(Node::from_json).collect(),
        Some(other) => Err(decode_err(format!(
            "children must be an array, found {}",
            value_kind(other)
        ))),
    }
}

fn children_to_json(children: &[Node]) -> Value {
    Value::Array(children.iter().map(Node::to_json).collect())
}

impl Attributes {
    fn from_json_map(map: &Map<String, Value>) -> Result<Self> {
        let mut attributes = Attributes::new();
        for (key, value) in map {
            if !is_markup_name(key) {
                return Err(decode_err(format!("invalid attribute name {key:?}")));
            }
            let value = match value {
                Value::String(s) => AttrValue::Str(s.clone()),
                Value::Bool(b) => AttrValue::Bool(*b),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => AttrValue::Int(i),
                    None => AttrValue::Float(n.as_f64().unwrap_or(f64::NAN)),
                },
                other => {
                    return Err(decode_err(format!(
                        "unsupported {} value for attribute `{key}`",
                        value_kind(other)
                    )))
                }
            };
            attributes.insert(key.as_str(), value);
        }
        Ok(attributes)
    }

    /// Encode as a JSON object
    pub fn to_json(&self) -> Value {
        let map = self
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_json()))
            .collect();
        Value::Object(map)
    }
}

impl AttrValue {
    fn to_json(&self) -> Value {
        match self {
            AttrValue::Str(s) => Value::String(s.clone()),
            AttrValue::Int(i) => Value::Number((*i).into()),
            AttrValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            AttrValue::Bool(b) => Value::Bool(*b),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

macro_rules! json_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                self.to_json().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let value = Value::deserialize(deserializer)?;
                <$ty>::from_json(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

json_serde!(Segment);
json_serde!(Node);

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl Serialize for SegmentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    const MIXED: &str = r##"[
        {"$node": "#text", "text": "one"},
        "two",
        ["click", "b"],
        ["the following:", "i", {"tabIndex": -1}],
        ["anchor text", {"href": "www.google.com"}]
    ]"##;

    #[test]
    fn test_parse_mixed_document() {
        let segments = parse_segments(MIXED).unwrap();
        let kinds: Vec<_> = segments.iter().map(classify).collect();
        assert_eq!(
            kinds,
            vec![
                Some(SegmentKind::PreRendered),
                Some(SegmentKind::Text),
                Some(SegmentKind::Wrap),
                Some(SegmentKind::Wrap),
                Some(SegmentKind::Anchor),
            ]
        );
        match &segments[3] {
            Segment::Tuple(parts) => match &parts[2] {
                Segment::Attributes(attrs) => {
                    assert_eq!(attrs.get("tabIndex"), Some(&AttrValue::Int(-1)))
                }
                other => panic!("expected attributes, got {other:?}"),
            },
            other => panic!("expected tuple, got {other:?}"),
        }
    }

    #[test]
    fn test_element_node_with_string_children() {
        let value: Value = serde_json::from_str(
            r#"{"$node": "em", "attributes": {"className": "x"}, "children": ["hi"]}"#,
        )
        .unwrap();
        let node = Node::from_json(&value).unwrap();
        assert_eq!(node.to_html(), r#"<em class="x">hi</em>"#);
        assert_eq!(Node::from_json(&node.to_json()).unwrap(), node);
    }

    #[test]
    fn test_rejections() {
        assert!(parse_segments("{}").is_err());
        assert!(parse_segments("not json").is_err());

        let err = parse_segments(r#"["ok", 5]"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid segment document: segment 1: number is not a segment"
        );

        let err = parse_segments(r#"[["x", "b", {"style": {"color": "red"}}]]"#).unwrap_err();
        assert!(err.to_string().contains("attribute `style`"));

        assert!(parse_segments(r#"[{"$node": 3}]"#).is_err());
        assert!(parse_segments(r##"[{"$node": "#text"}]"##).is_err());
    }

    #[test]
    fn test_names_that_would_break_markup_are_rejected() {
        let err = parse_segments(
            r#"[["x", "b", {"title\" onmouseover=\"alert(1)": "t"}]]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid attribute name"));

        let err = parse_segments(
            r#"[{"$node": "i><script>alert(2)</script", "children": ["y"]}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid element tag"));

        let err = parse_segments(r#"[{"$node": "em", "attributes": {"a b": 1}}]"#).unwrap_err();
        assert!(err.to_string().contains("invalid attribute name"));

        let segments = parse_segments(r#"[["x", "b", {"data-id": "7"}]]"#).unwrap();
        assert_eq!(
            crate::assembler::assemble(Some(segments.as_slice())).to_html(),
            r#"<b data-id="7">x</b>"#
        );
    }

    #[test]
    fn test_unknown_tag_still_decodes() {
        // Shape decoding is separate from classification
        let segments = parse_segments(r#"[["x", "blink"]]"#).unwrap();
        assert_eq!(classify(&segments[0]), None);
    }

    #[test]
    fn test_serde_impls() {
        let segment: Segment = serde_json::from_str(r#"["x", {"href": "/"}]"#).unwrap();
        assert_eq!(classify(&segment), Some(SegmentKind::Anchor));
        let json = serde_json::to_string(&segment).unwrap();
        assert_eq!(json, r#"["x",{"href":"/"}]"#);
        assert_eq!(
            serde_json::to_string(&SegmentKind::PreRendered).unwrap(),
            r#""pre-rendered""#
        );
    }
}
