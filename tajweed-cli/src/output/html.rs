//! HTML output formatter
//!
//! A minimal renderer adapter: maps stable color keys to a fixed palette
//! and paints annotated ranges with `<span>` elements. Real rendering
//! frontends own their own palette; this one exists so annotations can be
//! eyeballed in a browser.

use std::io::Write;

use anyhow::Result;

use super::{AnnotatedDocument, SpanFormatter};

/// Default palette, keyed by the engine's stable color keys.
const PALETTE: &[(&str, &str)] = &[
    ("idgham", "#169777"),
    ("iqlab", "#26bffd"),
    ("ikhfa", "#9400a8"),
    ("ghunnah", "#ff7e1e"),
    ("madd", "#dd0008"),
    ("gemination", "#d7a800"),
    ("qalqalah", "#2144c1"),
];

fn color_for(key: &str) -> &'static str {
    PALETTE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, color)| *color)
        .unwrap_or("#000000")
}

fn escape(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// HTML formatter - paints each document as a colored paragraph
pub struct HtmlFormatter<W: Write> {
    writer: W,
    body: String,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            body: String::new(),
        }
    }
}

/// Render one document body; spans are sorted and disjoint by engine
/// contract, so a single left-to-right walk suffices.
fn render(doc: &AnnotatedDocument, out: &mut String) {
    out.push_str("<p dir=\"rtl\" lang=\"ar\">");
    let mut cursor = 0usize;
    for span in &doc.spans {
        escape(&doc.text[cursor..span.start], out);
        out.push_str(&format!(
            "<span class=\"{}\" style=\"color:{}\">",
            span.color_key,
            color_for(span.color_key)
        ));
        escape(span.slice(&doc.text), out);
        out.push_str("</span>");
        cursor = span.end;
    }
    escape(&doc.text[cursor..], out);
    out.push_str("</p>\n");
}

impl<W: Write + Send + Sync> SpanFormatter for HtmlFormatter<W> {
    fn write_document(&mut self, doc: &AnnotatedDocument) -> Result<()> {
        self.body.push_str(&format!("<!-- {} -->\n", doc.source));
        render(doc, &mut self.body);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"></head>\n<body>"
        )?;
        self.writer.write_all(self.body.as_bytes())?;
        writeln!(self.writer, "</body>\n</html>")?;
        self.writer.flush()?;
        Ok(())
    }
}
