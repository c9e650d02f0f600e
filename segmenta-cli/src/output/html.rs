//! HTML output formatter

use super::OutputFormatter;
use anyhow::Result;
use segmenta_api::Output;
use std::io::Write;

/// HTML formatter - one line of markup per document
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_sentence(&mut self, _source: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "{}", output.html)?;
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
    fn test_writes_markup_lines() {
        let output = segmenta_api::render_json(r#"["one", ["two", "b"]]"#).unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = HtmlFormatter::new(&mut buffer);
            formatter.format_sentence("a.json", &output).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "one <b>two</b>\n");
    }
}
