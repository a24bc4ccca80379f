//! Search driver: glue between the walker, the matcher and the highlighter.
//!
//! For every candidate the walker yields, the driver asks the matcher whether
//! all terms are present, then asks for their spans and hands them unmerged
//! to the highlighter. Matching lines are written as `parent/highlighted`.

use std::io::Write;

use anyhow::Context;
use cfind_core::{Highlighter, Matcher};
use cfind_walk::{Candidate, WalkError};

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates examined.
    pub visited: usize,
    /// Candidates printed.
    pub matched: usize,
    /// Entries the walker could not read.
    pub errors: usize,
}

/// One configured search: a matcher, a highlighter and the terms.
#[derive(Debug)]
pub struct Search {
    matcher: Matcher,
    highlighter: Highlighter,
    terms: Vec<String>,
}

impl Search {
    pub fn new(matcher: Matcher, highlighter: Highlighter, terms: Vec<String>) -> Self {
        Self {
            matcher,
            highlighter,
            terms,
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// The line to print for `candidate`, or `None` if its name does not match.
    pub fn format(&self, candidate: &Candidate) -> anyhow::Result<Option<String>> {
        if !self.matcher.matches(&candidate.name, &self.terms)? {
            return Ok(None);
        }
        let spans = self.matcher.indexes_of(&candidate.name, &self.terms)?;
        let highlighted = self.highlighter.render(&candidate.name, &spans);
        Ok(Some(candidate.parent.join(highlighted).display().to_string()))
    }

    /// Run over `candidates`, writing one line per hit to `out`.
    ///
    /// Walk errors are logged and counted; matcher errors (bad patterns) end
    /// the run.
    pub fn run<I, W>(&self, candidates: I, mut out: W) -> anyhow::Result<SearchStats>
    where
        I: IntoIterator<Item = Result<Candidate, WalkError>>,
        W: Write,
    {
        let mut stats = SearchStats::default();
        for candidate in candidates {
            let candidate = match candidate {
                Ok(candidate) => candidate,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    stats.errors += 1;
                    continue;
                }
            };
            stats.visited += 1;

            let line = self
                .format(&candidate)
                .with_context(|| format!("matching {}", candidate.path().display()))?;
            if let Some(line) = line {
                tracing::trace!(name = %candidate.name, kind = %candidate.kind, "match");
                writeln!(out, "{line}")?;
                stats.matched += 1;
            }
        }
        out.flush()?;

        tracing::info!(
            visited = stats.visited,
            matched = stats.matched,
            errors = stats.errors,
            "search finished"
        );
        Ok(stats)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
