//! Classify command implementation

use anyhow::Result;
use clap::Args;
use segmenta_api::dto::SegmentReport;
use segmenta_api::SentenceRenderer;

use crate::input::{read_document, resolve_patterns};

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Input segment documents or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        let renderer = SentenceRenderer::default();

        for file in &files {
            let segments = read_document(file)?;
            let reports = renderer.classify(segmenta_api::Input::from_segments(segments))?;

            if files.len() > 1 {
                println!("{}:", file.display());
            }
            for report in &reports {
                println!("{}", format_report(report));
            }
        }

        Ok(())
    }
}

/// One line per segment: index, then the variant or the malformation
pub fn format_report(report: &SegmentReport) -> String {
    match (&report.kind, &report.malformed) {
        (Some(kind), _) => format!("{}\t{}", report.index, kind),
        (None, Some(reason)) => format!("{}\tmalformed: {}", report.index, reason),
        (None, None) => format!("{}\tmalformed", report.index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(index: usize, kind: Option<&str>, malformed: Option<&str>) -> SegmentReport {
        SegmentReport {
            index,
            kind: kind.map(str::to_string),
            malformed: malformed.map(str::to_string),
        }
    }

    #[test]
    fn test_format_report() {
        assert_eq!(format_report(&report(0, Some("text"), None)), "0\ttext");
        assert_eq!(
            format_report(&report(3, None, Some("unsupported tag name `blink`"))),
            "3\tmalformed: unsupported tag name `blink`"
        );
    }

    #[test]
    fn test_missing_input_fails() {
        let args = ClassifyArgs {
            input: vec!["/nonexistent/dir/*.json".to_string()],
        };
        assert!(args.execute().is_err());
    }
}
