//! Output types for the API

use std::time::Duration;

use serde::Serialize;

use crate::engine::Analysis;
use crate::rules::{MaddDuration, RuleKind};

/// One color-coded annotation over the analyzed text.
///
/// Invariants guaranteed by the engine: spans arrive sorted by `start`,
/// never overlap, `start < end`, and every offset lies within the analyzed
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TajweedSpan {
    /// Which rule matched
    pub rule: RuleKind,
    /// Byte offset of the first annotated byte
    pub start: usize,
    /// Byte offset one past the last annotated byte
    pub end: usize,
    /// Char offset of the first annotated char
    pub char_start: usize,
    /// Char offset one past the last annotated char
    pub char_end: usize,
    /// Stable key the renderer maps to a display color
    pub color_key: &'static str,
    /// Elongation length; present only on madd spans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub madd_duration: Option<MaddDuration>,
}

impl TajweedSpan {
    /// The annotated slice of the analyzed text
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// Annotation output with processing metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Accepted, non-overlapping spans sorted by start offset
    pub spans: Vec<TajweedSpan>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about one analysis call
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Additional statistics
    pub stats: ProcessingStats,
}

/// Additional processing statistics
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    /// Total bytes analyzed
    pub bytes_processed: usize,
    /// Total chars analyzed
    pub chars_processed: usize,
    /// Graphemes the segmenter produced
    pub grapheme_count: usize,
    /// Spans emitted after resolution and merging
    pub span_count: usize,
}

impl Output {
    /// Zero spans is an expected outcome (renderer falls back to plain text)
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub(crate) fn from_analysis(analysis: Analysis, text: &str, duration: Duration) -> Self {
        let span_count = analysis.spans.len();
        Self {
            spans: analysis.spans,
            metadata: ProcessingMetadata {
                duration,
                stats: ProcessingStats {
                    bytes_processed: text.len(),
                    chars_processed: text.chars().count(),
                    grapheme_count: analysis.grapheme_count,
                    span_count,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_slice() {
        let text = "نْي";
        let span = TajweedSpan {
            rule: RuleKind::Idgham,
            start: 0,
            end: text.len(),
            char_start: 0,
            char_end: 3,
            color_key: "idgham",
            madd_duration: None,
        };
        assert_eq!(span.slice(text), text);
    }

    #[test]
    fn test_madd_duration_serialized_only_when_present() {
        let span = TajweedSpan {
            rule: RuleKind::Qalqalah,
            start: 0,
            end: 2,
            char_start: 0,
            char_end: 1,
            color_key: "qalqalah",
            madd_duration: None,
        };
        let json = serde_json::to_string(&span).unwrap();
        assert!(!json.contains("madd_duration"));

        let span = TajweedSpan {
            rule: RuleKind::Madd,
            madd_duration: Some(MaddDuration::Natural),
            color_key: "madd",
            ..span
        };
        let json = serde_json::to_string(&span).unwrap();
        assert!(json.contains("\"madd_duration\":\"natural\""));
    }
}
