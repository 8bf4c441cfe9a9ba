//! Engine pipeline
//!
//! Pure composition of the four stages: segment, scan, resolve, assemble.
//! One call is stateless, performs no I/O, and cannot fail; malformed input
//! degrades to fewer (or zero) spans.

use crate::api::{Script, TajweedSpan};
use crate::rules::RuleLibrary;
use crate::{assembler, resolver, scanner, segmenter};

/// Result of one verse analysis, before API metadata is attached.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub spans: Vec<TajweedSpan>,
    pub grapheme_count: usize,
}

/// Analyze one verse and return its annotation spans.
///
/// The input is normalized to NFC first; span offsets refer to the NFC
/// form, which is the input itself whenever the caller already supplies
/// NFC text.
pub fn annotate(
    text: &str,
    script: Script,
    library: &RuleLibrary,
    merge_adjacent: bool,
) -> Analysis {
    let normalized = segmenter::normalize(text);
    let graphemes = segmenter::segment(&normalized, script);
    let candidates = scanner::scan(&graphemes, library);
    let accepted = resolver::resolve(candidates);
    let spans = assembler::assemble(&graphemes, &accepted, merge_adjacent);
    Analysis {
        spans,
        grapheme_count: graphemes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleKind;

    fn annotate_uthmani(text: &str) -> Vec<TajweedSpan> {
        let library = RuleLibrary::new().unwrap();
        annotate(text, Script::Uthmani, &library, true).spans
    }

    #[test]
    fn test_empty_string_empty_spans() {
        assert!(annotate_uthmani("").is_empty());
    }

    #[test]
    fn test_latin_text_empty_spans() {
        assert!(annotate_uthmani("no arabic here, just text.").is_empty());
    }

    #[test]
    fn test_bismillah_first_word_has_merging_family_span() {
        let spans = annotate_uthmani("بِسْمِ");
        assert!(!spans.is_empty());
        assert!(spans
            .iter()
            .any(|s| matches!(s.rule, RuleKind::Idgham | RuleKind::Ikhfa)));
    }

    #[test]
    fn test_noon_sukun_before_assimilation_letter() {
        let text = "نْو";
        let spans = annotate_uthmani(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].rule, RuleKind::Idgham);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, text.len());
        // No competing ikhfa span survived for the same range
        assert!(spans.iter().all(|s| s.rule != RuleKind::Ikhfa));
    }

    #[test]
    fn test_span_invariants_hold() {
        let text = "إِنَّ ٱلَّذِينَ كَفَرُوا۟ سَوَاءٌ عَلَيْهِمْ";
        let spans = annotate_uthmani(text);
        let mut last_end = 0;
        for span in &spans {
            assert!(span.start < span.end);
            assert!(span.end <= text.len());
            assert!(span.start >= last_end);
            last_end = span.end;
        }
    }

    #[test]
    fn test_determinism() {
        let text = "مِنۢ بَعْدِ مَا جَآءَتْهُمُ";
        let a = annotate_uthmani(text);
        let b = annotate_uthmani(text);
        assert_eq!(a, b);
    }
}
