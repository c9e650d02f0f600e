//! Validate command implementation

use anyhow::Result;
use clap::Args;
use segmenta_api::SentenceRenderer;

use crate::error::CliError;
use crate::input::{read_document, resolve_patterns};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input segment documents or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        let renderer = SentenceRenderer::default();

        let mut malformed = 0;
        let mut failed_files = 0;

        for file in &files {
            let segments = read_document(file)?;
            let reports = renderer.classify(segmenta_api::Input::from_segments(segments))?;
            let bad: Vec<_> = reports.iter().filter(|r| !r.is_well_formed()).collect();

            if bad.is_empty() {
                println!("✓ {} ({} segments)", file.display(), reports.len());
                continue;
            }

            println!("✗ {}", file.display());
            for report in &bad {
                println!(
                    "  segment {}: {}",
                    report.index,
                    report.malformed.as_deref().unwrap_or("malformed")
                );
            }
            malformed += bad.len();
            failed_files += 1;
        }

        if malformed > 0 {
            return Err(CliError::ValidationFailed {
                malformed,
                files: failed_files,
            }
            .into());
        }
        Ok(())
    }
}
