//! Property tests for the engine's output invariants
//!
//! Inputs are random mixes of Arabic letters, diacritics, whitespace, and
//! non-Arabic noise, so malformed sequences (orphan marks, mark stacks,
//! mixed scripts) are exercised heavily.

use proptest::prelude::*;
use tajweed_core::TajweedProcessor;
use unicode_normalization::UnicodeNormalization;

fn arabic_soup_char() -> impl Strategy<Value = char> {
    prop_oneof![
        // Base letters, weighted toward rule-relevant ones
        4 => prop::sample::select(vec![
            'ن', 'م', 'ب', 'ق', 'ط', 'ج', 'د', 'ي', 'و', 'ر', 'ل',
            'س', 'ت', 'ث', 'ا', 'ع', 'ف', 'ك', 'ء', 'ه',
        ]),
        // Diacritic marks, including shadda/sukun/tanween/madda
        3 => prop::sample::select(vec![
            '\u{064B}', '\u{064C}', '\u{064D}', '\u{064E}', '\u{064F}',
            '\u{0650}', '\u{0651}', '\u{0652}', '\u{0653}', '\u{0670}',
        ]),
        1 => Just(' '),
        1 => prop::sample::select(vec!['a', 'z', '.', ',', '1']),
    ]
}

fn verse() -> impl Strategy<Value = String> {
    prop::collection::vec(arabic_soup_char(), 0..64).prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn determinism(text in verse()) {
        let processor = TajweedProcessor::new();
        prop_assert_eq!(processor.annotate(&text), processor.annotate(&text));
    }

    #[test]
    fn spans_sorted_disjoint_and_in_bounds(text in verse()) {
        let processor = TajweedProcessor::new();
        let spans = processor.annotate(&text);

        // Offsets refer to the NFC form of the input
        let analyzed: String = text.nfc().collect();
        let mut last_end = 0usize;
        for span in &spans {
            prop_assert!(span.start < span.end);
            prop_assert!(span.end <= analyzed.len());
            prop_assert!(span.start >= last_end, "spans overlap or are unsorted");
            prop_assert!(analyzed.is_char_boundary(span.start));
            prop_assert!(analyzed.is_char_boundary(span.end));
            prop_assert!(span.char_start < span.char_end);
            last_end = span.end;
        }
    }

    #[test]
    fn normalization_idempotence(text in verse()) {
        let processor = TajweedProcessor::new();
        let composed: String = text.nfc().collect();
        let decomposed: String = text.nfd().collect();
        prop_assert_eq!(
            processor.annotate(&composed),
            processor.annotate(&decomposed)
        );
    }

    #[test]
    fn never_panics_on_arbitrary_unicode(text in "\\PC*") {
        let processor = TajweedProcessor::new();
        let _ = processor.annotate(&text);
    }

    #[test]
    fn non_arabic_yields_no_spans(text in "[ -~]*") {
        // Printable ASCII only: no rule can trigger
        let processor = TajweedProcessor::new();
        prop_assert!(processor.annotate(&text).is_empty());
    }
}
