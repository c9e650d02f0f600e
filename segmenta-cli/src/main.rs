//! Segmenta command-line entry point

use clap::Parser;
use segmenta_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
