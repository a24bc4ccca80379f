//! Regular expression matcher backed by the `regex` crate.

use std::cell::RefCell;
use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use super::dialect;
use crate::cache::{MatchCache, DEFAULT_CAPACITY};
use crate::error::SearchError;
use crate::types::{CharOffsets, Span};

/// Matches terms as regex patterns.
///
/// Each term is compiled once and kept for the matcher's lifetime. Scan
/// results per `(term, name)` go through a bounded [`MatchCache`]. Both live
/// behind `RefCell`, so a `RegexMatcher` is not `Sync`; give each thread its
/// own matcher.
#[derive(Debug)]
pub struct RegexMatcher {
    case_insensitive: bool,
    advanced_syntax: bool,
    patterns: RefCell<HashMap<String, Regex>>,
    cache: RefCell<MatchCache>,
}

impl RegexMatcher {
    pub fn new(case_insensitive: bool, advanced_syntax: bool) -> Self {
        Self::with_cache_capacity(case_insensitive, advanced_syntax, DEFAULT_CAPACITY)
    }

    pub fn with_cache_capacity(
        case_insensitive: bool,
        advanced_syntax: bool,
        capacity: usize,
    ) -> Self {
        tracing::debug!(case_insensitive, advanced_syntax, capacity, "regex matcher created");
        Self {
            case_insensitive,
            advanced_syntax,
            patterns: RefCell::new(HashMap::new()),
            cache: RefCell::new(MatchCache::new(capacity)),
        }
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn advanced_syntax(&self) -> bool {
        self.advanced_syntax
    }

    /// True when every pattern has at least one non-empty match in `name`.
    pub fn matches<S: AsRef<str>>(&self, name: &str, terms: &[S]) -> Result<bool, SearchError> {
        for term in terms {
            if self.scan(term.as_ref(), name)?.is_empty() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// All non-empty, non-overlapping matches of each pattern, in term order.
    pub fn indexes_of<S: AsRef<str>>(
        &self,
        name: &str,
        terms: &[S],
    ) -> Result<Vec<Span>, SearchError> {
        let mut spans = Vec::new();
        for term in terms {
            spans.extend(self.scan(term.as_ref(), name)?);
        }
        Ok(spans)
    }

    /// Number of `(term, name)` pairs currently memoised.
    pub fn cached_pairs(&self) -> usize {
        self.cache.borrow().len()
    }

    fn scan(&self, term: &str, name: &str) -> Result<Vec<Span>, SearchError> {
        if let Some(spans) = self.cache.borrow_mut().get(term, name) {
            return Ok(spans.to_vec());
        }

        let regex = self.compiled(term)?;
        let offsets = CharOffsets::new(name);
        let spans: Vec<Span> = regex
            .find_iter(name)
            .filter(|m| !m.is_empty())
            .map(|m| offsets.span(m.start(), m.end()))
            .collect();

        self.cache.borrow_mut().insert(term, name, spans.clone());
        Ok(spans)
    }

    fn compiled(&self, term: &str) -> Result<Regex, SearchError> {
        if let Some(regex) = self.patterns.borrow().get(term) {
            return Ok(regex.clone());
        }

        if !self.advanced_syntax {
            dialect::check_basic(term)?;
        }
        let regex = RegexBuilder::new(term)
            .case_insensitive(self.case_insensitive)
            .build()
            .map_err(|source| SearchError::InvalidPattern {
                pattern: term.to_string(),
                source,
            })?;
        tracing::debug!(pattern = term, "compiled search pattern");

        self.patterns
            .borrow_mut()
            .insert(term.to_string(), regex.clone());
        Ok(regex)
    }
}

impl Default for RegexMatcher {
    fn default() -> Self {
        Self::new(false, true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
