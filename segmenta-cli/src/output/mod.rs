//! Output formatting module

use anyhow::Result;
use segmenta_api::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one rendered document
    fn format_sentence(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// HTML markup, one sentence per line
    Html,
    /// Plain text content, one sentence per line
    Text,
    /// JSON array of rendered documents with units and metadata
    Json,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Html, OutputFormat::Text, OutputFormat::Json];

    /// Name used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// One-line description
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Html => "HTML markup, one sentence per line",
            OutputFormat::Text => "Plain text content, one sentence per line",
            OutputFormat::Json => "JSON array with units, markup and metadata",
        }
    }

    /// Look a format up by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }
}
