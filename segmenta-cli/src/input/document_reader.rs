//! Segment document reading

use anyhow::{Context, Result};
use segmenta_api::{Input, Segment};
use std::path::Path;

/// Read and decode a segment document
pub fn read_document(path: &Path) -> Result<Vec<Segment>> {
    log::debug!("Reading {}", path.display());
    Input::from_file(path)
        .read_segments()
        .with_context(|| format!("Failed to read segment document: {}", path.display()))
}
