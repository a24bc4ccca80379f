//! Interval merger: collapses overlapping match spans.
//!
//! Different terms (and the exact matcher's one-character restart) routinely
//! produce spans that overlap or touch. [`simplify`] reduces them to the
//! minimal sorted set of disjoint spans covering the same characters, which
//! is what the highlighter needs to emit non-nesting markers.

use crate::types::Span;

/// Merge `spans` into sorted, pairwise disjoint, non-adjacent spans.
///
/// Adjacent spans (`a.end == b.start`) are merged as well, so `[(0,3),(3,4)]`
/// becomes `[(0,4)]`.
pub fn simplify(spans: &[Span]) -> Vec<Span> {
    if spans.len() <= 1 {
        return spans.to_vec();
    }

    let mut sorted = spans.to_vec();
    sorted.sort_unstable();

    let mut merged = Vec::with_capacity(sorted.len());
    let mut current = sorted[0];
    for span in &sorted[1..] {
        if span.start <= current.end {
            current.end = current.end.max(span.end);
        } else {
            merged.push(current);
            current = *span;
        }
    }
    merged.push(current);
    merged
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
