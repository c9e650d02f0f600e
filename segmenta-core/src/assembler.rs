//! Sentence assembly
//!
//! This module maps a segment sequence through classification and rendering
//! and collects the keyed units, in input order, into a [`Sentence`].

use crate::classifier::diagnose;
use crate::config::{AssemblerConfig, MalformedPolicy};
use crate::error::{Result, SegmentError};
use crate::node::Node;
use crate::renderer::{RenderedUnit, Renderer};
use crate::segment::Segment;

/// Ordered sequence of rendered units
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sentence {
    units: Vec<RenderedUnit>,
}

impl Sentence {
    /// A sentence with no units
    pub fn empty() -> Self {
        Self::default()
    }

    /// Units in input order
    pub fn units(&self) -> &[RenderedUnit] {
        &self.units
    }

    /// Consume into the units
    pub fn into_units(self) -> Vec<RenderedUnit> {
        self.units
    }

    /// Number of units (one per input segment)
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether there are no units
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Flattened text, separators included
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for unit in &self.units {
            unit.write_text(&mut out);
        }
        out
    }

    /// HTML markup, separators included
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for unit in &self.units {
            unit.write_html(&mut out);
        }
        out
    }

    /// The whole sentence as one fragment of keyed unit fragments
    pub fn to_node(&self) -> Node {
        Node::fragment(self.units.iter().map(RenderedUnit::to_node).collect())
    }

    /// Indices of units whose segment matched no variant
    pub fn malformed(&self) -> Vec<usize> {
        self.units
            .iter()
            .enumerate()
            .filter(|(_, unit)| unit.is_malformed())
            .map(|(index, _)| index)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a RenderedUnit;
    type IntoIter = std::slice::Iter<'a, RenderedUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

/// Assembler for segment sequences
#[derive(Debug, Clone)]
pub struct Assembler {
    renderer: Renderer,
    policy: MalformedPolicy,
}

impl Assembler {
    /// Create an assembler with the default configuration
    pub fn new() -> Self {
        Self {
            renderer: Renderer::new(),
            policy: MalformedPolicy::Silent,
        }
    }

    /// Create an assembler from a configuration
    pub fn with_config(config: AssemblerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            renderer: Renderer::with_key_prefix(config.key_prefix),
            policy: config.policy,
        })
    }

    /// The configured policy for malformed segments
    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// Assemble a segment sequence; absent input yields an empty sentence
    ///
    /// Never fails: malformed segments become empty units whatever the
    /// configured policy.
    pub fn assemble(&self, segments: Option<&[Segment]>) -> Sentence {
        let Some(segments) = segments else {
            return Sentence::empty();
        };

        let total = segments.len();
        let units = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| self.renderer.render(segment, index, total))
            .collect();
        Sentence { units }
    }

    /// Assemble, honoring the configured [`MalformedPolicy`]
    pub fn assemble_checked(&self, segments: Option<&[Segment]>) -> Result<Sentence> {
        if self.policy == MalformedPolicy::Strict {
            for (index, segment) in segments.unwrap_or_default().iter().enumerate() {
                if let Some(reason) = diagnose(segment) {
                    return Err(SegmentError::Malformed { index, reason });
                }
            }
        }
        Ok(self.assemble(segments))
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble with the default configuration
pub fn assemble(segments: Option<&[Segment]>) -> Sentence {
    Assembler::new().assemble(segments)
}
