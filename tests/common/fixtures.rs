//! Static name corpora and temporary directory trees used across harnesses.

use std::fs;
use std::path::Path;

/// File and directory names resembling a small source checkout.
pub const CORPUS_NAMES: &[&str] = &[
    "Cargo.toml",
    "Cargo.lock",
    "README.md",
    "main.rs",
    "lib.rs",
    "search_harness.rs",
    "matcher_bench.rs",
    "TeTeTeTe",
    "Batman and Robin.txt",
    "poke the paire",
    "staff fighter",
    ".gitignore",
    "résumé.pdf",
    "日本語のファイル.txt",
];

/// Layout of the tree built by [`build_tree`]: directories end with `/`.
pub const TREE: &[&str] = &[
    "docs/",
    "docs/test-plan.md",
    "docs/Testing Guide.pdf",
    "src/",
    "src/tests/",
    "src/tests/unit_test.rs",
    "src/main.rs",
    "latest/",
    "latest/notes.txt",
    ".hidden/",
    ".hidden/contest.txt",
];

/// Create [`TREE`] under `root`.
pub fn build_tree(root: &Path) {
    for entry in TREE {
        let path = root.join(entry.trim_end_matches('/'));
        if entry.ends_with('/') {
            fs::create_dir_all(&path).expect("create fixture dir");
        } else {
            fs::write(&path, b"").expect("create fixture file");
        }
    }
}

/// A temporary directory populated with [`TREE`].
pub fn temp_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    build_tree(dir.path());
    dir
}
