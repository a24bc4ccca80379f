//! Configuration types for cfind.
//!
//! [`Config::load`] layers, in order: the embedded defaults below,
//! `~/.config/cfind/config.toml` (optional), and `CFIND_*` environment
//! variables (`CFIND_SEARCH__IGNORE_CASE=true`). [`Config::defaults`] returns
//! the embedded defaults without touching the filesystem (useful in tests).
//! Command-line flags are applied on top by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cache::DEFAULT_CAPACITY;
use crate::highlight::Markers;
use crate::matcher::MatcherKind;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
mode            = "exact"
ignore_case     = false
advanced_syntax = true
cache_capacity  = 128

[walk]
hidden               = true
follow_links         = false
respect_ignore_files = false

[highlight]
color = true
start = "\u001b[01;31m"
stop  = "\u001b[0m"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/cfind/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

/// `[search]` section: which matcher to build and how.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub mode: MatcherKind,
    #[serde(default)]
    pub ignore_case: bool,
    /// Regex only: accept nested classes and class set operations.
    #[serde(default = "default_advanced_syntax")]
    pub advanced_syntax: bool,
    /// Regex only: number of `(term, name)` scan results kept.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_advanced_syntax() -> bool { true }
fn default_cache_capacity() -> usize { DEFAULT_CAPACITY }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: MatcherKind::default(),
            ignore_case: false,
            advanced_syntax: default_advanced_syntax(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// `[walk]` section: directory traversal.
#[derive(Debug, Clone, Deserialize)]
pub struct WalkConfig {
    /// Report and descend into hidden entries.
    #[serde(default = "default_hidden")]
    pub hidden: bool,
    #[serde(default)]
    pub follow_links: bool,
    /// Honour `.gitignore`, `.ignore` and git exclude files.
    #[serde(default)]
    pub respect_ignore_files: bool,
    /// Maximum depth below the root; unlimited when absent.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_hidden() -> bool { true }

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            hidden: default_hidden(),
            follow_links: false,
            respect_ignore_files: false,
            max_depth: None,
        }
    }
}

/// `[highlight]` section: marker tokens around matched spans.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_stop")]
    pub stop: String,
}

fn default_color() -> bool { true }
fn default_start() -> String { crate::highlight::ANSI_HIGHLIGHT.to_string() }
fn default_stop() -> String { crate::highlight::ANSI_RESET.to_string() }

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            start: default_start(),
            stop: default_stop(),
        }
    }
}

impl HighlightConfig {
    /// Markers to render with; empty when colour is off.
    pub fn markers(&self) -> Markers {
        if self.color {
            Markers::new(self.start.clone(), self.stop.clone())
        } else {
            Markers::plain()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/cfind/config.toml` and the environment, layered
    /// on top of the built-in defaults. A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Same as [`Config::load`] with an explicit config file path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        tracing::debug!(path = %path.display(), "loading config");
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("CFIND")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("cfind")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
