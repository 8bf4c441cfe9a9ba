//! JSON output formatter

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tajweed_core::TajweedSpan;

use super::{AnnotatedDocument, SpanFormatter};

/// JSON formatter - outputs documents as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Source the text came from
    pub source: String,
    /// The analyzed (NFC) text
    pub text: String,
    /// Annotation spans; offsets index into `text`
    pub spans: Vec<TajweedSpan>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> SpanFormatter for JsonFormatter<W> {
    fn write_document(&mut self, doc: &AnnotatedDocument) -> Result<()> {
        self.documents.push(DocumentData {
            source: doc.source.clone(),
            text: doc.text.clone(),
            spans: doc.spans.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
