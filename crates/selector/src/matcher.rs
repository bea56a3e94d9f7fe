//! Compiled per-pattern matchers. One dialect per supported syntax name,
//! behind a single-operation trait so the rest of the crate never touches a
//! concrete engine type.

use std::fmt;

use crate::error::SelectorError;
use crate::pattern;

/// A compiled pattern: one predicate over normalized relative paths.
///
/// Relative paths use `/` as the separator regardless of platform and never
/// contain `.` or `..` segments. Implementations decide on the whole path,
/// not a prefix of it.
pub trait PathMatcher: fmt::Debug + Send + Sync {
    /// Returns whether the matcher accepts the given relative path.
    fn matches(&self, relative_path: &str) -> bool;
}

/// Matcher accepting every path.
///
/// Returned by [`PathSelector::try_simplify`](crate::PathSelector::try_simplify)
/// when no filtering is configured at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl PathMatcher for AcceptAll {
    fn matches(&self, _relative_path: &str) -> bool {
        true
    }
}

/// Glob dialect backed by [`globset`].
///
/// The separator is literal: `*` and `?` stay within one path component
/// while `**` spans zero or more components.
#[derive(Debug)]
struct GlobDialect {
    matcher: globset::GlobMatcher,
}

impl GlobDialect {
    fn new(pattern: &str, expression: &str) -> Result<Self, SelectorError> {
        let glob = globset::GlobBuilder::new(expression)
            .literal_separator(true)
            .build()
            .map_err(|source| SelectorError::Glob {
                pattern: pattern.to_owned(),
                source,
            })?;
        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }
}

impl PathMatcher for GlobDialect {
    fn matches(&self, relative_path: &str) -> bool {
        self.matcher.is_match(relative_path)
    }
}

/// Regular-expression dialect backed by [`regex`], anchored so the whole
/// relative path must match.
#[derive(Debug)]
struct RegexDialect {
    regex: regex::Regex,
}

impl RegexDialect {
    fn new(pattern: &str, expression: &str) -> Result<Self, SelectorError> {
        let regex = regex::Regex::new(&format!(r"\A(?:{expression})\z")).map_err(|source| {
            SelectorError::Regex {
                pattern: pattern.to_owned(),
                source,
            }
        })?;
        Ok(Self { regex })
    }
}

impl PathMatcher for RegexDialect {
    fn matches(&self, relative_path: &str) -> bool {
        self.regex.is_match(relative_path)
    }
}

/// Compiles one canonical pattern string into its dialect matcher.
///
/// Legacy patterns compile as globs; `glob:` and `regex:` qualifiers select
/// their dialect; any other qualifier is a configuration error.
pub(crate) fn compile(pattern: &str) -> Result<Box<dyn PathMatcher>, SelectorError> {
    match pattern::split_syntax(pattern) {
        None => Ok(Box::new(GlobDialect::new(pattern, pattern)?)),
        Some(("glob", expression)) => Ok(Box::new(GlobDialect::new(pattern, expression)?)),
        Some(("regex", expression)) => Ok(Box::new(RegexDialect::new(pattern, expression)?)),
        Some((syntax, _)) => Err(SelectorError::UnsupportedSyntax {
            syntax: syntax.to_owned(),
            pattern: pattern.to_owned(),
        }),
    }
}
