//! Error types for cfind-core.

use thiserror::Error;

/// Failures a matcher can report. The exact matcher never fails.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The regex engine rejected the pattern.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The pattern is valid but uses syntax outside the enabled dialect.
    #[error("pattern {pattern:?} uses {feature}, which requires advanced syntax")]
    UnsupportedSyntax {
        pattern: String,
        feature: &'static str,
    },
}
