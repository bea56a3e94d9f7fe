//! End-to-end selection over real directory trees.
//!
//! Each test builds a temporary tree, drives a pruned walk from the
//! selector, and compares the selected set against the expectation.

use selector::PathSelector;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use test_support::{temp_tree, walk_all, walk_pruned};

/// Runs a pruned walk and returns the selected paths relative to `root`.
fn selected_under(selector: &PathSelector, root: &Path) -> BTreeSet<PathBuf> {
    walk_pruned(
        root,
        |directory| selector.could_hold_selected(directory),
        |path| selector.is_selected(path),
    )
    .into_iter()
    .map(|path| path.strip_prefix(root).expect("under root").to_path_buf())
    .collect()
}

#[test]
fn text_files_selected_everywhere_except_excluded_subtree() {
    let tree = temp_tree(&["root.txt", "foo/bar/leaf.txt", "biz/excluded.txt"]);
    let selector =
        PathSelector::new(tree.path(), ["**/*.txt"], ["biz/**"], false).expect("compiles");

    let selected = selected_under(&selector, tree.path());
    let expected: BTreeSet<PathBuf> = [PathBuf::from("root.txt"), PathBuf::from("foo/bar/leaf.txt")]
        .into_iter()
        .collect();
    assert_eq!(selected, expected);

    assert!(!selector.could_hold_selected(&tree.path().join("biz")));
    assert!(selector.could_hold_selected(&tree.path().join("foo")));
    assert!(selector.could_hold_selected(&tree.path().join("foo/bar")));
}

#[test]
fn no_patterns_selects_the_whole_tree() {
    let tree = temp_tree(&["a.txt", "dir/b.txt", "dir/sub/c.bin"]);
    let selector = PathSelector::new(tree.path(), [""; 0], [""; 0], false).expect("compiles");

    let selected = selected_under(&selector, tree.path());
    assert!(selected.contains(Path::new("a.txt")));
    assert!(selected.contains(Path::new("dir")));
    assert!(selected.contains(Path::new("dir/sub/c.bin")));
}

#[test]
fn anchored_include_prunes_unrelated_siblings() {
    let tree = temp_tree(&[
        "src/lib.rs",
        "src/nested/mod.rs",
        "docs/guide.md",
        "target/debug/build.log",
    ]);
    let selector = PathSelector::new(tree.path(), ["src/**"], [""; 0], false).expect("compiles");

    assert!(selector.could_hold_selected(&tree.path().join("src")));
    assert!(selector.could_hold_selected(&tree.path().join("src/nested")));
    assert!(!selector.could_hold_selected(&tree.path().join("docs")));
    assert!(!selector.could_hold_selected(&tree.path().join("target")));

    let selected = selected_under(&selector, tree.path());
    assert!(selected.contains(Path::new("src/lib.rs")));
    assert!(selected.contains(Path::new("src/nested/mod.rs")));
    assert!(!selected.contains(Path::new("docs/guide.md")));
}

#[test]
fn pruned_walk_matches_unpruned_walk() {
    let tree = temp_tree(&[
        "root.txt",
        "a/one.txt",
        "a/two.rs",
        "a/deep/three.txt",
        "b/four.txt",
        "b/cache/five.txt",
        "c/six.md",
    ]);
    let selector = PathSelector::new(
        tree.path(),
        ["**/*.txt", "a/**"],
        ["b/cache/**", "**/*.md"],
        false,
    )
    .expect("compiles");

    let pruned = walk_pruned(
        tree.path(),
        |directory| selector.could_hold_selected(directory),
        |path| selector.is_selected(path),
    );
    let unpruned = walk_all(tree.path(), |path| selector.is_selected(path));
    assert_eq!(pruned, unpruned);
}

#[test]
fn selection_is_stable_across_threads() {
    let tree = temp_tree(&["root.txt", "foo/bar/leaf.txt", "biz/excluded.txt"]);
    let selector =
        PathSelector::new(tree.path(), ["**/*.txt"], ["biz/**"], false).expect("compiles");

    let root = tree.path().to_path_buf();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let selector = selector.clone();
            let root = root.clone();
            scope.spawn(move || {
                assert!(selector.is_selected(&root.join("root.txt")));
                assert!(!selector.is_selected(&root.join("biz/excluded.txt")));
                assert!(!selector.could_hold_selected(&root.join("biz")));
            });
        }
    });
}
