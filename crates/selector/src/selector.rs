use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::defaults;
use crate::error::SelectorError;
use crate::matcher::{self, AcceptAll, PathMatcher};
use crate::pattern::{self, PatternRole};
use crate::trace;

/// Decides whether paths under a base directory are selected according to
/// include/exclude patterns, and whether whole directories can be skipped
/// during a traversal.
///
/// All pattern processing happens once, at construction: raw patterns are
/// normalized, expanded into their zero-directory families, simplified, and
/// compiled, together with a coarser projection used only for directory
/// pruning. Queries are pure evaluation over the compiled arrays.
///
/// A selector is immutable and cheap to clone (the compiled state is shared
/// behind an [`Arc`]), so one instance can serve any number of concurrent
/// readers.
///
/// # Pattern syntax
///
/// A pattern of the form `<syntax>:<expression>` is handed to the named
/// dialect (`glob` or `regex`). Without a qualifier, or when the prefix
/// before `:` is a single character (a Windows drive letter, not a syntax
/// name), the pattern follows the legacy semantics: the platform separator
/// is rewritten to `/`, a trailing `/` is completed with `**`, and `**`
/// matches zero or more directories.
///
/// # Examples
///
/// ```
/// use selector::PathSelector;
/// use std::path::Path;
///
/// let selector = PathSelector::new("project", ["**/*.rs"], ["target/**"], false)?;
///
/// assert!(selector.is_selected(Path::new("project/src/main.rs")));
/// assert!(!selector.is_selected(Path::new("project/target/debug/main.d")));
/// assert!(!selector.could_hold_selected(Path::new("project/target")));
/// # Ok::<(), selector::SelectorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PathSelector {
    inner: Arc<SelectorInner>,
}

#[derive(Debug)]
struct SelectorInner {
    /// The base directory; query paths are relativized against it.
    base_directory: PathBuf,
    /// User-supplied includes, kept for [`fmt::Display`] only.
    shown_includes: Vec<String>,
    /// User-supplied excludes, kept for [`fmt::Display`] only.
    shown_excludes: Vec<String>,
    use_default_excludes: bool,
    includes: Vec<Box<dyn PathMatcher>>,
    excludes: Vec<Box<dyn PathMatcher>>,
    /// Directory projection of the includes, covering every parent that has
    /// to be entered on the way to a selected path.
    directory_includes: Vec<Box<dyn PathMatcher>>,
    /// Directory projection of the excludes. Parents are deliberately not
    /// covered here: a parent may still hold other subtrees that are wanted.
    directory_excludes: Vec<Box<dyn PathMatcher>>,
}

impl PathSelector {
    /// Builds a selector from include and exclude patterns.
    ///
    /// Empty pattern strings are dropped; an empty include collection means
    /// every path is a candidate, an empty exclude collection excludes
    /// nothing. With `use_default_excludes` set, the
    /// [default catalog](crate::DEFAULT_EXCLUDES) is merged into the
    /// excludes.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError`] when a qualifier names an unknown syntax or
    /// a dialect engine rejects an expression. Pattern normalization itself
    /// never fails.
    pub fn new<I, X>(
        base_directory: impl Into<PathBuf>,
        includes: I,
        excludes: X,
        use_default_excludes: bool,
    ) -> Result<Self, SelectorError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        X: IntoIterator,
        X::Item: AsRef<str>,
    {
        let shown_includes: Vec<String> = includes
            .into_iter()
            .map(|pattern| pattern.as_ref().to_owned())
            .filter(|pattern| !pattern.is_empty())
            .collect();
        let shown_excludes: Vec<String> = excludes
            .into_iter()
            .map(|pattern| pattern.as_ref().to_owned())
            .filter(|pattern| !pattern.is_empty())
            .collect();

        let include_patterns = pattern::normalize_patterns(&shown_includes, PatternRole::Include);
        let mut exclude_sources = shown_excludes.clone();
        if use_default_excludes {
            exclude_sources.extend(defaults::default_patterns().map(str::to_owned));
        }
        let exclude_patterns = pattern::normalize_patterns(&exclude_sources, PatternRole::Exclude);

        let directory_include_patterns =
            pattern::directory_patterns(&include_patterns, PatternRole::Include);
        let directory_exclude_patterns =
            pattern::directory_patterns(&exclude_patterns, PatternRole::Exclude);

        let includes = compile_all(&include_patterns)?;
        let excludes = compile_all(&exclude_patterns)?;
        let directory_includes = compile_all(&directory_include_patterns)?;
        let directory_excludes = compile_all(&directory_exclude_patterns)?;

        trace::selector_compiled(
            includes.len(),
            excludes.len(),
            directory_includes.len(),
            directory_excludes.len(),
        );

        Ok(Self {
            inner: Arc::new(SelectorInner {
                base_directory: base_directory.into(),
                shown_includes,
                shown_excludes,
                use_default_excludes,
                includes,
                excludes,
                directory_includes,
                directory_excludes,
            }),
        })
    }

    /// Returns the base directory paths are relativized against.
    #[must_use]
    pub fn base_directory(&self) -> &Path {
        &self.inner.base_directory
    }

    /// Determines whether a path is selected.
    ///
    /// A path is selected when it matches an include pattern (or there are
    /// none) and matches no exclude pattern. Paths outside the base
    /// directory are never selected.
    #[must_use]
    pub fn is_selected(&self, path: &Path) -> bool {
        let inner = &*self.inner;
        let Some(relative) = inner.relative(path) else {
            return false;
        };
        (inner.includes.is_empty() || is_matched(&relative, &inner.includes))
            && (inner.excludes.is_empty() || !is_matched(&relative, &inner.excludes))
    }

    /// Determines whether a directory could contain selected paths.
    ///
    /// `false` proves the subtree holds nothing selected and may be skipped;
    /// `true` is only a possibility, never a promise. The base directory
    /// itself always returns `true`.
    #[must_use]
    pub fn could_hold_selected(&self, directory: &Path) -> bool {
        let inner = &*self.inner;
        if directory == inner.base_directory {
            return true;
        }
        let Some(relative) = inner.relative(directory) else {
            return false;
        };
        let could = (inner.directory_includes.is_empty()
            || is_matched(&relative, &inner.directory_includes))
            && (inner.directory_excludes.is_empty()
                || !is_matched(&relative, &inner.directory_excludes));
        if !could {
            trace::directory_pruned(&relative);
        }
        could
    }

    /// Returns a cheaper matcher equivalent to this selector, when one
    /// exists.
    ///
    /// With no excludes and no directory-level patterns, zero includes
    /// simplify to [`AcceptAll`] and a single include to that one matcher.
    /// Anything else returns `None` and callers keep using the full
    /// selector.
    #[must_use]
    pub fn try_simplify(&self) -> Option<&dyn PathMatcher> {
        let inner = &*self.inner;
        if inner.excludes.is_empty()
            && inner.directory_includes.is_empty()
            && inner.directory_excludes.is_empty()
        {
            match inner.includes.as_slice() {
                [] => return Some(&AcceptAll),
                [single] => return Some(single.as_ref()),
                _ => {}
            }
        }
        None
    }
}

impl SelectorInner {
    /// Relativizes `path` against the base directory into a `/`-separated
    /// string, resolving `.` and `..` components lexically.
    ///
    /// Paths outside the base directory, or with components that are not
    /// valid UTF-8, yield `None`.
    fn relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.base_directory).ok()?;
        let mut segments: Vec<&str> = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => segments.push(segment.to_str()?),
                Component::CurDir => {}
                Component::ParentDir => {
                    segments.pop()?;
                }
                Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(segments.join("/"))
    }
}

fn is_matched(relative_path: &str, matchers: &[Box<dyn PathMatcher>]) -> bool {
    matchers.iter().any(|matcher| matcher.matches(relative_path))
}

fn compile_all(patterns: &[String]) -> Result<Vec<Box<dyn PathMatcher>>, SelectorError> {
    patterns.iter().map(|pattern| matcher::compile(pattern)).collect()
}

impl fmt::Display for PathSelector {
    /// Renders the user-supplied patterns, not the internally expanded
    /// families, so diagnostics show what the user actually wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = &*self.inner;
        append(f, "includes", &inner.shown_includes)?;
        f.write_str(", ")?;
        append(f, "excludes", &inner.shown_excludes)?;
        if inner.use_default_excludes {
            f.write_str(", default excludes: enabled")?;
        }
        Ok(())
    }
}

fn append(f: &mut fmt::Formatter<'_>, label: &str, patterns: &[String]) -> fmt::Result {
    write!(f, "{label}: [")?;
    for (index, pattern) in patterns.iter().enumerate() {
        if index != 0 {
            f.write_str(", ")?;
        }
        f.write_str(pattern)?;
    }
    f.write_str("]")
}
