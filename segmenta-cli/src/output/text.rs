//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmenta_api::Output;
use std::io::Write;

/// Text formatter - outputs the text content of each document on its own line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, _source: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "{}", output.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_text_content() {
        let output =
            segmenta_api::render_json(r#"["one", ["anchor", {"href": "/x"}]]"#).unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_sentence("a.json", &output).unwrap();
            formatter.format_sentence("b.json", &output).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "one anchor\none anchor\n"
        );
    }
}
