//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

use crate::output::OutputFormat;

pub mod classify;
pub mod generate_config;
pub mod render;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render segment documents into sentences
    Render(render::RenderArgs),

    /// Report the variant of every segment
    Classify(classify::ClassifyArgs),

    /// Check that documents contain no malformed segments
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the tags wrap segments accept
    Tags,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Render(args) => args.execute(quiet),
            Commands::Classify(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Tags => {
                for tag in segmenta_core::supported_tags() {
                    println!("{}", tag.as_str());
                }
            }
            ListCommands::Formats => {
                for format in OutputFormat::ALL {
                    println!("{:<6} {}", format.name(), format.description());
                }
            }
        }
    }
}
