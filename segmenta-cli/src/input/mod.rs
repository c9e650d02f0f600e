//! Input handling module

mod document_reader;
mod glob_resolver;

pub use document_reader::read_document;
pub use glob_resolver::resolve_patterns;
