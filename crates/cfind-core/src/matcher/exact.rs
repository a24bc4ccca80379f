//! Literal substring matcher.

use std::borrow::Cow;

use crate::types::{CharOffsets, Span};

/// Matches terms as plain substrings, optionally ignoring case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactMatcher {
    case_insensitive: bool,
}

impl ExactMatcher {
    pub fn new(case_insensitive: bool) -> Self {
        Self { case_insensitive }
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// True when every term occurs somewhere in `name`.
    ///
    /// An empty term is contained in every name.
    pub fn matches<S: AsRef<str>>(&self, name: &str, terms: &[S]) -> bool {
        let name = self.fold(name);
        terms
            .iter()
            .all(|term| name.contains(&*self.fold(term.as_ref())))
    }

    /// Every occurrence of every term, grouped by term in list order.
    ///
    /// After an occurrence starting at character `s` the scan resumes at
    /// `s + 1`, so a term may overlap its own previous occurrence:
    /// `"eTe"` in `"TeTeTeTe"` yields `(1,4), (3,6), (5,8)`.
    pub fn indexes_of<S: AsRef<str>>(&self, name: &str, terms: &[S]) -> Vec<Span> {
        let haystack = self.fold(name);
        let offsets = CharOffsets::new(&haystack);
        let mut spans = Vec::new();

        for term in terms {
            let needle = self.fold(term.as_ref());
            if needle.is_empty() {
                continue;
            }
            let needle_chars = needle.chars().count();

            let mut from = 0;
            while let Some(found) = haystack[from..].find(&*needle) {
                let start = from + found;
                let first = offsets.char_at(start);
                spans.push(Span::new(first, first + needle_chars));
                // Step one character past the match start, not past its end.
                from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
        spans
    }

    fn fold<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.case_insensitive {
            Cow::Owned(fold_case(s))
        } else {
            Cow::Borrowed(s)
        }
    }
}

/// Lowercase `s` one character at a time without changing its length.
///
/// Characters whose lowercase form is more than one `char` (e.g. `'İ'`) are
/// kept unchanged so character offsets into the folded string are valid for
/// the original.
pub(crate) fn fold_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            if lower.len() == 1 {
                lower.next().unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
