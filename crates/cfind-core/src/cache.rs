//! Bounded memo of regex scan results.
//!
//! Keyed by `(term, name)`; holds the non-empty match spans for that pair.
//! Evicting an entry only costs a rescan, never a different answer.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::types::Span;

/// Default number of `(term, name)` pairs kept.
pub const DEFAULT_CAPACITY: usize = 128;

#[derive(Hash, PartialEq, Eq, Clone, Debug)]
struct CacheKey {
    term: String,
    name: String,
}

/// Fixed-capacity LRU cache of `(term, name) → spans`.
#[derive(Debug)]
pub struct MatchCache {
    entries: LruCache<CacheKey, Vec<Span>>,
}

impl MatchCache {
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Look up a pair, marking it most recently used.
    pub fn get(&mut self, term: &str, name: &str) -> Option<&[Span]> {
        let key = CacheKey {
            term: term.to_string(),
            name: name.to_string(),
        };
        let hit = self.entries.get(&key).map(Vec::as_slice);
        tracing::trace!(term, name, hit = hit.is_some(), "match cache lookup");
        hit
    }

    pub fn insert(&mut self, term: &str, name: &str, spans: Vec<Span>) {
        let key = CacheKey {
            term: term.to_string(),
            name: name.to_string(),
        };
        if let Some((evicted, _)) = self.entries.push(key, spans) {
            if evicted.term != term || evicted.name != name {
                tracing::trace!(term = %evicted.term, name = %evicted.name, "match cache eviction");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for MatchCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
