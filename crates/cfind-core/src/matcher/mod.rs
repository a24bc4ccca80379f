//! Matchers: decide whether a name contains every search term, and where.
//!
//! Two variants share one contract:
//!
//! - [`ExactMatcher`]: literal substrings. Never fails.
//! - [`RegexMatcher`]: regex patterns. Fails only on patterns the engine (or
//!   the basic dialect) rejects.
//!
//! The set is closed, so callers hold a [`Matcher`] enum rather than a trait
//! object.

mod dialect;
mod exact;
mod pattern;

pub use exact::ExactMatcher;
pub use pattern::RegexMatcher;

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::Span;

/// Which matcher variant to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    #[default]
    Exact,
    Regex,
}

impl std::fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatcherKind::Exact => write!(f, "exact"),
            MatcherKind::Regex => write!(f, "regex"),
        }
    }
}

/// A configured matcher.
#[derive(Debug)]
pub enum Matcher {
    Exact(ExactMatcher),
    Regex(RegexMatcher),
}

impl Matcher {
    pub fn exact(case_insensitive: bool) -> Self {
        Matcher::Exact(ExactMatcher::new(case_insensitive))
    }

    pub fn regex(case_insensitive: bool, advanced_syntax: bool) -> Self {
        Matcher::Regex(RegexMatcher::new(case_insensitive, advanced_syntax))
    }

    /// Build the matcher described by the `[search]` config section.
    pub fn from_config(config: &SearchConfig) -> Self {
        match config.mode {
            MatcherKind::Exact => Self::exact(config.ignore_case),
            MatcherKind::Regex => Matcher::Regex(RegexMatcher::with_cache_capacity(
                config.ignore_case,
                config.advanced_syntax,
                config.cache_capacity,
            )),
        }
    }

    pub fn kind(&self) -> MatcherKind {
        match self {
            Matcher::Exact(_) => MatcherKind::Exact,
            Matcher::Regex(_) => MatcherKind::Regex,
        }
    }

    /// True when every term occurs in `name`. Stops at the first miss.
    pub fn matches<S: AsRef<str>>(&self, name: &str, terms: &[S]) -> Result<bool, SearchError> {
        match self {
            Matcher::Exact(m) => Ok(m.matches(name, terms)),
            Matcher::Regex(m) => m.matches(name, terms),
        }
    }

    /// Spans of every occurrence of every term, unmerged, in term order.
    ///
    /// Spans from different terms may overlap; run them through
    /// [`crate::merge::simplify`] (the highlighter does) before display.
    pub fn indexes_of<S: AsRef<str>>(
        &self,
        name: &str,
        terms: &[S],
    ) -> Result<Vec<Span>, SearchError> {
        match self {
            Matcher::Exact(m) => Ok(m.indexes_of(name, terms)),
            Matcher::Regex(m) => m.indexes_of(name, terms),
        }
    }
}

impl From<ExactMatcher> for Matcher {
    fn from(m: ExactMatcher) -> Self {
        Matcher::Exact(m)
    }
}

impl From<RegexMatcher> for Matcher {
    fn from(m: RegexMatcher) -> Self {
        Matcher::Regex(m)
    }
}
