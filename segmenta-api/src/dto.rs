//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use segmenta_core::{parse_segments, RenderedUnit, Segment};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for rendering
pub enum Input {
    /// JSON segment document as text
    Json(String),
    /// Segments already in memory
    Segments(Vec<Segment>),
    /// Path of a JSON segment document
    File(PathBuf),
    /// JSON document as raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader yielding a JSON document
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Json(text) => f.debug_tuple("Json").field(text).finish(),
            Input::Segments(segments) => f
                .debug_tuple("Segments")
                .field(&format!("<{} segments>", segments.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from a JSON document
    pub fn from_json(text: impl Into<String>) -> Self {
        Input::Json(text.into())
    }

    /// Create input from segments
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Input::Segments(segments)
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the raw document text
    ///
    /// In-memory segments are re-encoded as a JSON document.
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Json(text) => Ok(text),
            Input::Segments(segments) => Ok(serde_json::to_string(&segments)?),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }

    /// Decode the input into segments
    pub fn read_segments(self) -> Result<Vec<Segment>> {
        match self {
            Input::Segments(segments) => Ok(segments),
            other => Ok(parse_segments(&other.read_text()?)?),
        }
    }
}

/// One rendered unit (serializable DTO)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDTO {
    /// Positional key
    pub key: String,
    /// Variant name, `None` for malformed segments
    pub kind: Option<String>,
    /// Why the segment matched no variant
    pub malformed: Option<String>,
    /// HTML of the unit content, without separator
    pub html: String,
    /// Text of the unit content, without separator
    pub text: String,
    /// Whether a space follows the unit
    pub trailing_space: bool,
}

impl UnitDTO {
    pub(crate) fn from_unit(unit: &RenderedUnit, malformed: Option<String>) -> Self {
        Self {
            key: unit.key.clone(),
            kind: unit.kind.map(|kind| kind.name().to_string()),
            malformed,
            html: unit.content.to_html(),
            text: unit.content.text_content(),
            trailing_space: unit.trailing_space,
        }
    }
}

/// Classification of one segment (serializable DTO)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentReport {
    /// Position in the input
    pub index: usize,
    /// Variant name, `None` for malformed segments
    pub kind: Option<String>,
    /// Why the segment matched no variant
    pub malformed: Option<String>,
}

impl SegmentReport {
    /// Whether the segment matched a variant
    pub fn is_well_formed(&self) -> bool {
        self.kind.is_some()
    }
}

/// Rendering metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Number of input segments
    pub segment_count: usize,
    /// Number of segments that rendered empty
    pub malformed_count: usize,
    /// Size of the produced HTML in bytes
    pub html_bytes: usize,
    /// Rendering time in microseconds
    pub processing_time_us: u64,
}

/// Complete output with units, joined renderings and metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// Rendered units in input order
    pub units: Vec<UnitDTO>,
    /// HTML of the whole sentence
    pub html: String,
    /// Text content of the whole sentence
    pub text: String,
    /// Rendering metadata
    pub metadata: Metadata,
}
