//! Syntax-qualified patterns: dialect dispatch, the drive-letter threshold,
//! and configuration errors for unknown syntax names.

use selector::{PathSelector, SelectorError};
use std::path::{Path, PathBuf};

fn selector(includes: &[&str]) -> PathSelector {
    PathSelector::new(PathBuf::new(), includes.iter().copied(), [""; 0], false)
        .expect("patterns compile")
}

#[test]
fn glob_qualifier_bypasses_legacy_rewrites() {
    // No trailing-slash completion for qualified patterns: "glob:foo/"
    // requires a trailing slash in the path, which relative paths never
    // carry, so nothing matches.
    let qualified = selector(&["glob:foo/"]);
    assert!(!qualified.is_selected(Path::new("foo")));
    assert!(!qualified.is_selected(Path::new("foo/file.txt")));

    let legacy = selector(&["foo/"]);
    assert!(legacy.is_selected(Path::new("foo/file.txt")));
}

#[test]
fn regex_qualifier_selects_by_expression() {
    let sources = selector(&[r"regex:(.*/)?[A-Z][A-Za-z]*\.java"]);

    assert!(sources.is_selected(Path::new("Main.java")));
    assert!(sources.is_selected(Path::new("src/main/Parser.java")));
    assert!(!sources.is_selected(Path::new("src/main/parser.java")));
    assert!(!sources.is_selected(Path::new("Main.javax")));
}

#[test]
fn regex_is_anchored_to_the_whole_path() {
    let exact = selector(&["regex:core"]);

    assert!(exact.is_selected(Path::new("core")));
    assert!(!exact.is_selected(Path::new("core2")));
    assert!(!exact.is_selected(Path::new("lib/core")));
}

#[test]
fn unknown_syntax_fails_construction() {
    let error = PathSelector::new(PathBuf::new(), ["ant:**/*.java"], [""; 0], false)
        .expect_err("unsupported syntax");

    match &error {
        SelectorError::UnsupportedSyntax { syntax, pattern } => {
            assert_eq!(syntax, "ant");
            assert_eq!(pattern, "ant:**/*.java");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_regex_fails_construction() {
    let error = PathSelector::new(PathBuf::new(), ["regex:("], [""; 0], false)
        .expect_err("invalid regex");
    assert_eq!(error.pattern(), "regex:(");
}

#[test]
fn drive_letter_prefix_is_not_a_syntax_name() {
    // A one-character prefix reads as a Windows drive letter, so the
    // pattern is legacy rather than a dialect lookup. Intentional: a
    // one-character syntax name cannot be addressed.
    let quirk = selector(&["r:core"]);

    assert!(quirk.is_selected(Path::new("r:core")));
    assert!(!quirk.is_selected(Path::new("core")));
}

#[test]
fn empty_qualifier_reads_as_legacy_text() {
    let quirk = selector(&[":tagged"]);
    assert!(quirk.is_selected(Path::new(":tagged")));
}

#[test]
fn qualified_and_legacy_patterns_mix_in_one_set() {
    let mixed = selector(&["glob:src/*.rs", "regex:.*\\.toml", "docs/"]);

    assert!(mixed.is_selected(Path::new("src/lib.rs")));
    assert!(mixed.is_selected(Path::new("Cargo.toml")));
    assert!(mixed.is_selected(Path::new("docs/guide.md")));
    assert!(!mixed.is_selected(Path::new("build/out.bin")));
}
