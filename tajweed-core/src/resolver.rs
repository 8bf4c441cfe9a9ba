//! Conflict resolver
//!
//! Reduces the raw candidate list to a non-overlapping subset with a
//! deterministic greedy interval sweep. Order of preference at any point of
//! ambiguity: earlier span start, then higher priority (lower tier number),
//! then longer span. The same input text therefore always resolves to the
//! same spans, which the renderer relies on for stable coloring.

use crate::scanner::Candidate;

/// Select a non-overlapping subset of candidates.
pub fn resolve(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    // Stable sort: candidates that compare equal keep scan order, which is
    // itself fixed, so resolution is deterministic end to end.
    candidates.sort_by(|a, b| {
        a.span_start
            .cmp(&b.span_start)
            .then(a.priority.cmp(&b.priority))
            .then(b.span_end.cmp(&a.span_end))
    });

    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());
    let mut last_end = 0usize;
    for candidate in candidates {
        if candidate.span_start >= last_end {
            last_end = candidate.span_end;
            accepted.push(candidate);
        }
    }
    accepted
}
