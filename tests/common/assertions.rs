//! Domain-specific assertions for cfind harnesses.
//!
//! These wrap `pretty_assertions` and put the name and terms in the failure
//! message, which is what you need to reproduce a matcher bug.

use cfind_core::{Matcher, Span};

/// Assert the spans a matcher reports, as `(start, end)` pairs.
///
/// ```rust
/// assert_spans!(matcher, "Batman", ["Bat", "man"], [(0, 3), (3, 6)]);
/// ```
#[macro_export]
macro_rules! assert_spans {
    ($matcher:expr, $name:expr, [$($term:expr),* $(,)?], [$($span:expr),* $(,)?]) => {{
        let matcher: &cfind_core::Matcher = &$matcher;
        let terms: &[&str] = &[$($term),*];
        let expected: Vec<(usize, usize)> = vec![$($span),*];
        let actual: Vec<(usize, usize)> = matcher
            .indexes_of($name, terms)
            .unwrap_or_else(|e| panic!("indexes_of({:?}, {:?}) failed: {}", $name, terms, e))
            .into_iter()
            .map(Into::into)
            .collect();
        pretty_assertions::assert_eq!(
            actual, expected,
            "{} matcher, name {:?}, terms {:?}", matcher.kind(), $name, terms
        );
    }};
}

/// Assert a matcher's verdict for a name and term list.
pub fn assert_matches(matcher: &Matcher, name: &str, terms: &[&str], expected: bool) {
    let actual = matcher
        .matches(name, terms)
        .unwrap_or_else(|e| panic!("matches({name:?}, {terms:?}) failed: {e}"));
    assert_eq!(
        actual,
        expected,
        "{} matcher, name {:?}, terms {:?}",
        matcher.kind(),
        name,
        terms
    );
}

/// Assert `spans` are sorted, disjoint and separated by at least one position.
pub fn assert_simplified(spans: &[Span]) {
    for pair in spans.windows(2) {
        assert!(
            pair[0].end < pair[1].start,
            "spans not simplified: {} followed by {}",
            pair[0],
            pair[1]
        );
    }
}

/// Convert `(start, end)` pairs into spans.
pub fn spans(raw: &[(usize, usize)]) -> Vec<Span> {
    raw.iter().copied().map(Span::from).collect()
}
