//! Public API for Segmenta sentence assembly
//!
//! This crate provides a stable interface for rendering segment documents
//! that hides the core's render tree behind serializable DTOs.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dto::{Metadata, SegmentReport, UnitDTO};
use error::Result;
use segmenta_core::{diagnose, Assembler};
use std::time::{Duration, Instant};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Output};
pub use error::ApiError;
pub use segmenta_core::{Attributes, Node, Segment, SegmentKind};

/// Main entry point for sentence rendering
pub struct SentenceRenderer {
    assembler: Assembler,
    config: Config,
}

impl SentenceRenderer {
    /// Create a renderer with the default (lenient) configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a renderer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let assembler = Assembler::with_config(config.assembler_config().clone())?;
        Ok(Self { assembler, config })
    }

    /// Render an input into units, HTML and text
    pub fn render(&self, input: Input) -> Result<Output> {
        log::debug!("rendering {input:?}");
        let segments = input.read_segments()?;
        self.render_segments(&segments)
    }

    /// Render segments already in memory
    pub fn render_segments(&self, segments: &[Segment]) -> Result<Output> {
        let start = Instant::now();

        let sentence = self.assembler.assemble_checked(Some(segments))?;

        let units: Vec<UnitDTO> = sentence
            .units()
            .iter()
            .zip(segments)
            .map(|(unit, segment)| {
                UnitDTO::from_unit(unit, diagnose(segment).map(|reason| reason.to_string()))
            })
            .collect();
        let html = sentence.to_html();
        let text = sentence.text_content();
        let malformed_count = units.iter().filter(|u| u.kind.is_none()).count();

        if malformed_count > 0 {
            log::warn!("{malformed_count} of {} segments rendered empty", units.len());
        }

        let metadata = Metadata {
            segment_count: segments.len(),
            malformed_count,
            html_bytes: html.len(),
            processing_time_us: micros(start.elapsed()),
        };

        Ok(Output {
            units,
            html,
            text,
            metadata,
        })
    }

    /// Classify every segment of an input without rendering
    pub fn classify(&self, input: Input) -> Result<Vec<SegmentReport>> {
        let segments = input.read_segments()?;
        Ok(segments
            .iter()
            .enumerate()
            .map(|(index, segment)| SegmentReport {
                index,
                kind: segmenta_core::classify(segment).map(|kind| kind.name().to_string()),
                malformed: diagnose(segment).map(|reason| reason.to_string()),
            })
            .collect())
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for SentenceRenderer {
    fn default() -> Self {
        Self {
            assembler: Assembler::new(),
            config: Config::default(),
        }
    }
}

fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

// Convenience functions

/// Render a JSON segment document with default configuration
pub fn render_json(text: &str) -> Result<Output> {
    SentenceRenderer::new()?.render(Input::from_json(text))
}

/// Render a JSON segment document file with default configuration
pub fn render_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    SentenceRenderer::new()?.render(Input::from_file(path.as_ref().to_path_buf()))
}

/// Render in-memory segments with default configuration
pub fn render_segments(segments: &[Segment]) -> Result<Output> {
    SentenceRenderer::default().render_segments(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micros_saturates() {
        assert_eq!(micros(Duration::from_millis(3)), 3_000);
        assert_eq!(micros(Duration::MAX), u64::MAX);
    }
}
