//! Output formatting module

use anyhow::Result;
use tajweed_core::TajweedSpan;

/// One analyzed document ready for formatting.
///
/// `text` is the NFC form the span offsets refer to.
#[derive(Debug, Clone)]
pub struct AnnotatedDocument {
    /// Display name of the source (path, "stdin", or "text")
    pub source: String,
    pub text: String,
    pub spans: Vec<TajweedSpan>,
}

/// Trait for output formatters
pub trait SpanFormatter: Send + Sync {
    /// Format and buffer or emit one document
    fn write_document(&mut self, doc: &AnnotatedDocument) -> Result<()>;

    /// Finalize output (e.g. close a JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
