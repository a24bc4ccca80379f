//! Text highlighter: wraps merged spans of a name in start/stop markers.
//!
//! The highlighter always merges its input first (see [`crate::merge`]), so
//! callers can hand it the raw output of `Matcher::indexes_of`. Markers
//! therefore never nest, and [`Highlighter::strip`] can recover the original
//! text by deleting every marker occurrence.

use crate::merge::simplify;
use crate::types::{CharOffsets, Span};

/// ANSI "bold red" SGR sequence.
pub const ANSI_HIGHLIGHT: &str = "\x1b[01;31m";
/// ANSI SGR reset.
pub const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// The token pair written around every highlighted span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub stop: String,
}

impl Markers {
    pub fn new(start: impl Into<String>, stop: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
        }
    }

    /// Bold red on ANSI terminals.
    pub fn ansi() -> Self {
        Self::new(ANSI_HIGHLIGHT, ANSI_RESET)
    }

    /// Empty markers: rendering becomes the identity.
    pub fn plain() -> Self {
        Self::new("", "")
    }

    pub fn is_plain(&self) -> bool {
        self.start.is_empty() && self.stop.is_empty()
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::ansi()
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render `text` with every merged span wrapped in `markers`.
///
/// Spans running past the end of `text` are clamped; spans starting at or
/// past the end are dropped. If nothing remains, `text` is returned as is.
pub fn render(text: &str, spans: &[Span], markers: &Markers) -> String {
    let offsets = CharOffsets::new(text);
    let char_len = offsets.char_len();
    let merged: Vec<Span> = simplify(spans)
        .into_iter()
        .filter(|s| s.start < char_len && !s.is_empty())
        .map(|s| Span::new(s.start, s.end.min(char_len)))
        .collect();

    if merged.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(
        text.len() + merged.len() * (markers.start.len() + markers.stop.len()),
    );
    let mut cursor = 0;
    for span in merged {
        let start = offsets.byte_at(span.start);
        let end = offsets.byte_at(span.end);
        out.push_str(&text[cursor..start]);
        out.push_str(&markers.start);
        out.push_str(&text[start..end]);
        out.push_str(&markers.stop);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Stateless wrapper bundling a marker pair with [`render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighter {
    markers: Markers,
}

impl Highlighter {
    pub fn new(markers: Markers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn render(&self, text: &str, spans: &[Span]) -> String {
        render(text, spans, &self.markers)
    }

    /// Remove every marker from `rendered`.
    ///
    /// Inverse of [`Highlighter::render`] as long as the original text did not
    /// itself contain a marker.
    pub fn strip(&self, rendered: &str) -> String {
        let mut out = rendered.to_string();
        for marker in [&self.markers.start, &self.markers.stop] {
            if !marker.is_empty() {
                out = out.replace(marker.as_str(), "");
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
