//! cfind: find files and directories by name.
//!
//! The binary is a thin shell around three pieces:
//!
//! ```text
//! cfind-walk ──► Matcher::matches ──► Matcher::indexes_of ──► Highlighter ──► stdout
//! ```
//!
//! The matching engine lives in `cfind-core`, traversal in `cfind-walk`.
//! This crate only exposes the [`search`] driver that wires them together,
//! so integration tests can run a search without spawning the binary.

pub mod search;

pub use search::{Search, SearchStats};
