//! Span assembler
//!
//! Converts accepted candidates (grapheme-index spans) into final
//! [`TajweedSpan`]s with original-text byte and char offsets, and merges
//! touching spans of the same kind to cut renderer overhead.

use crate::api::TajweedSpan;
use crate::scanner::Candidate;
use crate::segmenter::Grapheme;

/// Map accepted candidates back to text offsets and attach color keys.
///
/// `accepted` must be sorted and non-overlapping (the resolver's output
/// contract). With `merge_adjacent`, consecutive spans of the same kind —
/// and for madd, the same duration — whose offsets touch become one span.
pub fn assemble(
    graphemes: &[Grapheme],
    accepted: &[Candidate],
    merge_adjacent: bool,
) -> Vec<TajweedSpan> {
    let mut spans: Vec<TajweedSpan> = Vec::with_capacity(accepted.len());

    for candidate in accepted {
        let first = &graphemes[candidate.span_start];
        let last = &graphemes[candidate.span_end - 1];
        let span = TajweedSpan {
            rule: candidate.kind,
            start: first.offset,
            end: last.end(),
            char_start: first.char_offset,
            char_end: last.char_end(),
            color_key: candidate.kind.color_key(),
            madd_duration: candidate.duration,
        };

        if merge_adjacent {
            if let Some(prev) = spans.last_mut() {
                if prev.rule == span.rule
                    && prev.madd_duration == span.madd_duration
                    && prev.end == span.start
                {
                    prev.end = span.end;
                    prev.char_end = span.char_end;
                    continue;
                }
            }
        }
        spans.push(span);
    }

    spans
}
