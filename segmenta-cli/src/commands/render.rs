//! Render command implementation

use anyhow::{Context, Result};
use clap::Args;
use segmenta_api::SentenceRenderer;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::input::{read_document, resolve_patterns};
use crate::output::{HtmlFormatter, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Input segment documents or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else html)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fail on the first malformed segment
    #[arg(long)]
    pub strict: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting rendering");

        let config = CliConfig::load(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        let renderer = SentenceRenderer::with_config(config.to_api_config(self.strict)?)?;

        let files = resolve_patterns(&self.input)?;
        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        for file in &files {
            let source = file.display().to_string();
            let segments = read_document(file)?;
            let output = renderer
                .render_segments(&segments)
                .with_context(|| format!("Failed to render {source}"))?;

            log::debug!(
                "{source}: {} segment(s), {} malformed",
                output.metadata.segment_count,
                output.metadata.malformed_count
            );
            formatter.format_sentence(&source, &output)?;
            progress.file_completed(&source);
        }

        formatter.finish()?;
        progress.finish();
        log::info!("Rendered {} file(s)", files.len());
        Ok(())
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        })
    }
}
