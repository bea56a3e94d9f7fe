#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Shared test utilities for the path-select workspace.
//!
//! The helpers build small on-disk trees and traverse them the way a real
//! consumer would: depth-first, in lexicographic order, asking an
//! enter-predicate before descending into a directory. Tests drive both
//! predicates from a selector to exercise selection and pruning together.

use std::fs;
use std::path::{Path, PathBuf};

/// Creates a temporary directory populated from relative path strings.
///
/// Entries ending in `/` become (possibly empty) directories; every other
/// entry becomes an empty file, with parent directories created on demand.
///
/// # Panics
///
/// Panics when the filesystem refuses to create an entry; tests have no
/// meaningful way to continue from that.
#[must_use]
pub fn temp_tree(entries: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temporary directory");
    create_tree(dir.path(), entries);
    dir
}

/// Populates `root` from relative path strings, as [`temp_tree`] does.
///
/// # Panics
///
/// Panics when the filesystem refuses to create an entry.
pub fn create_tree(root: &Path, entries: &[&str]) {
    for entry in entries {
        let path = root.join(entry.trim_end_matches('/'));
        if entry.ends_with('/') {
            fs::create_dir_all(&path).expect("create directory");
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent directory");
            }
            fs::write(&path, b"").expect("create file");
        }
    }
}

/// Walks `root` depth-first, descending only into directories accepted by
/// `could_enter`, and returns the sorted paths accepted by `selects`.
///
/// Directory entries are offered to `selects` too, mirroring how archive
/// and copy tools treat directories as entries in their own right.
///
/// # Panics
///
/// Panics when a directory cannot be read.
pub fn walk_pruned<E, S>(root: &Path, mut could_enter: E, mut selects: S) -> Vec<PathBuf>
where
    E: FnMut(&Path) -> bool,
    S: FnMut(&Path) -> bool,
{
    let mut selected = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(directory) = pending.pop() {
        let mut entries: Vec<PathBuf> = fs::read_dir(&directory)
            .expect("read directory")
            .map(|entry| entry.expect("directory entry").path())
            .collect();
        entries.sort();
        for path in entries {
            if selects(&path) {
                selected.push(path.clone());
            }
            if path.is_dir() && could_enter(&path) {
                pending.push(path);
            }
        }
    }
    selected.sort();
    selected
}

/// Walks `root` without pruning and returns the sorted paths accepted by
/// `selects`. Useful as the ground truth a pruned walk must reproduce.
///
/// # Panics
///
/// Panics when a directory cannot be read.
pub fn walk_all<S>(root: &Path, selects: S) -> Vec<PathBuf>
where
    S: FnMut(&Path) -> bool,
{
    walk_pruned(root, |_| true, selects)
}
