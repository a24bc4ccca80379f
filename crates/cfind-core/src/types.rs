//! Core types for cfind-core.
//!
//! A [`Span`] is the unit every layer speaks: matchers emit them, the merger
//! collapses them and the highlighter renders them. Offsets count Unicode
//! scalar values (`char`s), not bytes, so a span computed against one string
//! stays valid against any string with the same characters.

/// A half-open interval `[start, end)` of character offsets into a name.
///
/// Matchers only ever emit spans with `start < end`. The merger tolerates
/// anything, including overlapping and adjacent spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether `offset` falls inside this span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Maps byte offsets of a `str` onto character offsets.
///
/// Built once per name so that converting many match positions stays linear.
pub(crate) struct CharOffsets {
    /// `starts[i]` is the byte offset of the `i`-th char; the final element
    /// is the string's byte length.
    starts: Vec<usize>,
}

impl CharOffsets {
    pub(crate) fn new(s: &str) -> Self {
        let mut starts: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
        starts.push(s.len());
        Self { starts }
    }

    /// Character offset of a byte offset that lies on a char boundary.
    pub(crate) fn char_at(&self, byte: usize) -> usize {
        match self.starts.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i,
        }
    }

    /// Byte offset of the `index`-th character, clamped to the string end.
    pub(crate) fn byte_at(&self, index: usize) -> usize {
        let last = self.starts.len() - 1;
        self.starts[index.min(last)]
    }

    /// Number of characters in the string.
    pub(crate) fn char_len(&self) -> usize {
        self.starts.len() - 1
    }

    pub(crate) fn span(&self, byte_start: usize, byte_end: usize) -> Span {
        Span::new(self.char_at(byte_start), self.char_at(byte_end))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
