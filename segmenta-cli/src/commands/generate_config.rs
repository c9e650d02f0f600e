//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

const TEMPLATE: &str = r#"# Segmenta configuration

[render]
# Fail on the first malformed segment instead of rendering it empty
strict = false

# Prefix of unit keys; unit i is keyed "<prefix><i>"
key_prefix = "segment_"

[output]
# One of: html, text, json
default_format = "html"

# Indent JSON output
pretty_json = true
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it for rendering:");
        println!(
            "   segmenta render -i sentence.json --config {}",
            self.output.display()
        );

        Ok(())
    }
}
