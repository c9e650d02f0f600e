//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmenta_api::Output;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs rendered documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Path of the source document
    pub source: String,
    /// The rendered document
    #[serde(flatten)]
    pub output: Output,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, source: &str, output: &Output) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            output: output.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_documents_into_array() {
        let output = segmenta_api::render_json(r#"["one", "two"]"#).unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.format_sentence("a.json", &output).unwrap();
            formatter.finish().unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let documents = value.as_array().unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["source"], "a.json");
        assert_eq!(documents[0]["text"], "one two");
        assert_eq!(documents[0]["units"][0]["key"], "segment_0");
        assert_eq!(documents[0]["metadata"]["segment_count"], 2);
    }

    #[test]
    fn test_empty_run_is_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, true).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
