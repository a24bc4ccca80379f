//! cfind-walk: directory traversal for cfind.
//!
//! The walker turns a root directory into a stream of [`Candidate`] names for
//! the matcher to judge. Out of the box it behaves like a plain recursive
//! listing: hidden entries are included, symlinks are not followed and ignore
//! files are not consulted. [`WalkConfig`] switches each of those.
//!
//! Entries are visited depth-first, sorted by file name, so output order is
//! stable between runs.

use std::path::{Path, PathBuf};

use cfind_core::config::WalkConfig;
use thiserror::Error;

/// Whether a candidate is a directory or something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Dir,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Dir => write!(f, "dir"),
        }
    }
}

/// One file or directory below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Directory containing the entry, as reached from the root.
    pub parent: PathBuf,
    /// Final path component, lossily converted to UTF-8.
    pub name: String,
    pub kind: EntryKind,
}

impl Candidate {
    /// Full path of the entry.
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// A traversal failure for a single entry. The walk continues past it.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot read {}: {source}", display_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: ignore::Error,
    },
}

/// Directory walker configured once per run.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    config: WalkConfig,
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>, config: &WalkConfig) -> Self {
        Self {
            root: root.into(),
            config: config.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Iterate every entry below the root. The root itself is skipped.
    pub fn walk(&self) -> impl Iterator<Item = Result<Candidate, WalkError>> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .hidden(!self.config.hidden)
            .follow_links(self.config.follow_links)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));
        if self.config.respect_ignore_files {
            builder
                .ignore(true)
                .git_ignore(true)
                .git_global(true)
                .git_exclude(true)
                .parents(true)
                .require_git(false);
        }
        tracing::debug!(root = %self.root.display(), config = ?self.config, "walk started");

        builder.build().filter_map(|entry| match entry {
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry) => Some(Ok(candidate(&entry))),
            Err(source) => Some(Err(WalkError::Io {
                path: error_path(&source),
                source,
            })),
        })
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string())
}

fn candidate(entry: &ignore::DirEntry) -> Candidate {
    let path = entry.path();
    let kind = match entry.file_type() {
        Some(ft) if ft.is_dir() => EntryKind::Dir,
        _ => EntryKind::File,
    };
    Candidate {
        parent: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        name: entry.file_name().to_string_lossy().into_owned(),
        kind,
    }
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/bin")).unwrap();
        fs::create_dir_all(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();
        fs::write(dir.path().join("src/main.rs"), "").unwrap();
        fs::write(dir.path().join("src/bin/tool.rs"), "").unwrap();
        fs::write(dir.path().join(".cache/blob"), "").unwrap();
        fs::write(dir.path().join(".ignore"), "src/bin\n").unwrap();
        dir
    }

    fn names(walker: &Walker) -> Vec<String> {
        let mut names: Vec<String> = walker.walk().map(|c| c.unwrap().name).collect();
        names.sort();
        names
    }

    #[test]
    fn default_walk_lists_everything_but_the_root() {
        let dir = tree();
        let walker = Walker::new(dir.path(), &WalkConfig::default());
        assert_eq!(
            names(&walker),
            vec![".cache", ".ignore", "README.md", "bin", "blob", "main.rs", "src", "tool.rs"]
        );
    }

    #[test]
    fn kinds_and_parents() {
        let dir = tree();
        let walker = Walker::new(dir.path(), &WalkConfig::default());
        let src = walker
            .walk()
            .map(Result::unwrap)
            .find(|c| c.name == "src")
            .unwrap();
        assert_eq!(src.kind, EntryKind::Dir);
        assert_eq!(src.parent, dir.path());

        let main = walker
            .walk()
            .map(Result::unwrap)
            .find(|c| c.name == "main.rs")
            .unwrap();
        assert_eq!(main.kind, EntryKind::File);
        assert_eq!(main.path(), dir.path().join("src/main.rs"));
    }

    #[test]
    fn hidden_entries_can_be_skipped() {
        let dir = tree();
        let config = WalkConfig { hidden: false, ..WalkConfig::default() };
        let walker = Walker::new(dir.path(), &config);
        assert_eq!(names(&walker), vec!["README.md", "bin", "main.rs", "src", "tool.rs"]);
    }

    #[test]
    fn ignore_files_are_opt_in() {
        let dir = tree();
        let config = WalkConfig { respect_ignore_files: true, ..WalkConfig::default() };
        let walker = Walker::new(dir.path(), &config);
        assert_eq!(
            names(&walker),
            vec![".cache", ".ignore", "README.md", "blob", "main.rs", "src"]
        );
    }

    #[test]
    fn max_depth_limits_descent() {
        let dir = tree();
        let config = WalkConfig { max_depth: Some(1), ..WalkConfig::default() };
        let walker = Walker::new(dir.path(), &config);
        assert_eq!(names(&walker), vec![".cache", ".ignore", "README.md", "src"]);
    }

    #[test]
    fn missing_root_yields_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let walker = Walker::new(dir.path().join("absent"), &WalkConfig::default());
        let results: Vec<_> = walker.walk().collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(WalkError::Io { .. })));
    }
}
