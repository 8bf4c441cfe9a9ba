//! Window scanner
//!
//! Slides a bounded lookbehind/lookahead window across the segmented verse
//! and evaluates every rule predicate at every position. This is the
//! asymptotically dominant stage, O(graphemes × rules); each predicate is a
//! handful of mark/letter checks so the constant stays small.

use crate::rules::{MaddDuration, RuleKind, RuleLibrary};
use crate::segmenter::Grapheme;

/// Bounds-checked view of the grapheme sequence centered at one position.
///
/// Neighbor access returns `None` past either end, so predicates can probe
/// context opportunistically without out-of-bounds faults.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    graphemes: &'a [Grapheme],
    center: usize,
}

impl<'a> Window<'a> {
    pub fn new(graphemes: &'a [Grapheme], center: usize) -> Self {
        debug_assert!(center < graphemes.len());
        Self { graphemes, center }
    }

    /// The grapheme at the candidate position
    #[inline]
    pub fn current(&self) -> &'a Grapheme {
        &self.graphemes[self.center]
    }

    /// The grapheme `k` positions before the center, if any
    #[inline]
    pub fn before(&self, k: usize) -> Option<&'a Grapheme> {
        self.center.checked_sub(k).map(|i| &self.graphemes[i])
    }

    /// The grapheme `k` positions after the center, if any
    #[inline]
    pub fn after(&self, k: usize) -> Option<&'a Grapheme> {
        self.graphemes.get(self.center + k)
    }
}

/// A rule match before conflict resolution. Span bounds are grapheme
/// indices, half-open; transient within one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Grapheme index the predicate matched at
    pub index: usize,
    pub kind: RuleKind,
    /// Tier copied from the definition; the resolver sorts on it
    pub priority: u8,
    pub span_start: usize,
    pub span_end: usize,
    pub duration: Option<MaddDuration>,
}

/// Evaluate every rule at every position and collect all matches.
///
/// Positions where a rule's declared window would read past the sequence
/// bounds skip that rule silently. Rules are evaluated in the library's
/// fixed order; ordering never changes the candidate set, only the
/// resolver consults priority.
pub fn scan(graphemes: &[Grapheme], library: &RuleLibrary) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for index in 0..graphemes.len() {
        for rule in library.rules() {
            if index < rule.lookbehind || index + rule.lookahead >= graphemes.len() {
                continue;
            }
            let window = Window::new(graphemes, index);
            if let Some(m) = (rule.predicate)(&window) {
                candidates.push(Candidate {
                    index,
                    kind: rule.kind,
                    priority: rule.priority,
                    span_start: index,
                    span_end: index + m.len,
                    duration: m.duration,
                });
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Script;
    use crate::segmenter::segment;

    fn scan_text(text: &str) -> Vec<Candidate> {
        let graphemes = segment(text, Script::Uthmani);
        let library = RuleLibrary::new().unwrap();
        scan(&graphemes, &library)
    }

    #[test]
    fn test_empty_sequence_yields_no_candidates() {
        assert!(scan_text("").is_empty());
    }

    #[test]
    fn test_window_bounds() {
        let graphemes = segment("نْي", Script::Uthmani);
        let w = Window::new(&graphemes, 0);
        assert!(w.before(1).is_none());
        assert!(w.after(1).is_some());
        assert!(w.after(2).is_none());
    }

    #[test]
    fn test_pair_rule_skipped_at_final_position() {
        // Trailing noon+sukun: the idgham window would read past the end
        let candidates = scan_text("نْ");
        assert!(candidates.iter().all(|c| c.kind != RuleKind::Idgham));
    }

    #[test]
    fn test_overlapping_candidates_both_collected() {
        // noon+shadda matches both ghunnah and gemination; the scanner
        // reports both, resolution happens later
        let candidates = scan_text("نّ");
        let kinds: Vec<_> = candidates.iter().map(|c| c.kind).collect();
        assert!(kinds.contains(&RuleKind::Ghunnah));
        assert!(kinds.contains(&RuleKind::Gemination));
    }

    #[test]
    fn test_candidate_span_bounds() {
        let candidates = scan_text("نْي");
        let idgham = candidates
            .iter()
            .find(|c| c.kind == RuleKind::Idgham)
            .unwrap();
        assert_eq!(idgham.span_start, 0);
        assert_eq!(idgham.span_end, 2);
        assert_eq!(idgham.priority, 1);
    }
}
