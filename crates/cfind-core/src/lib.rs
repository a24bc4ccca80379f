//! cfind-core: matching and highlighting engine for cfind.
//!
//! This crate holds everything that decides *whether* a name matches and
//! *where*, plus the pieces that turn those locations into a highlighted
//! string. It never touches the filesystem; candidate names come from
//! `cfind-walk` and the printed lines are assembled by the binary.
//!
//! # Architecture
//!
//! ```text
//! Matcher::matches ──► Matcher::indexes_of ──► merge::simplify ──► highlight::render
//!        │                    │
//!        └──── MatchCache ────┘   (regex matcher only)
//! ```
//!
//! Everything here is synchronous and single-threaded.

pub mod cache;
pub mod config;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod merge;
pub mod types;

pub use error::SearchError;
pub use highlight::{Highlighter, Markers};
pub use matcher::{ExactMatcher, Matcher, MatcherKind, RegexMatcher};
pub use types::Span;
