//! Plain text output formatter

use std::io::Write;

use anyhow::Result;

use super::{AnnotatedDocument, SpanFormatter};

/// Text formatter - one span per line with rule, offsets, and slice
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> SpanFormatter for TextFormatter<W> {
    fn write_document(&mut self, doc: &AnnotatedDocument) -> Result<()> {
        writeln!(self.writer, "# {}", doc.source)?;
        if doc.spans.is_empty() {
            writeln!(self.writer, "(no tajweed annotations)")?;
            return Ok(());
        }
        for span in &doc.spans {
            let duration = span
                .madd_duration
                .map(|d| format!(" ({} counts)", d.counts()))
                .unwrap_or_default();
            writeln!(
                self.writer,
                "{:<12} [{:>4}..{:>4}) {}{}",
                span.color_key,
                span.start,
                span.end,
                span.slice(&doc.text),
                duration,
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
