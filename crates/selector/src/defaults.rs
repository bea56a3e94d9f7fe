//! Built-in exclude catalog: version-control metadata and common temporary
//! file shapes, merged into user excludes on opt-in.

/// Patterns excluded by default when requested at construction.
///
/// The catalog pairs each metadata directory with a `/**` variant so both
/// the directory entry itself and its contents are excluded, which also
/// lets the directory projection prune the whole subtree.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // Editor and OS temporary files
    "**/*~",
    "**/#*#",
    "**/.#*",
    "**/%*%",
    "**/._*",
    // CVS
    "**/CVS",
    "**/CVS/**",
    "**/.cvsignore",
    // RCS
    "**/RCS",
    "**/RCS/**",
    // SCCS
    "**/SCCS",
    "**/SCCS/**",
    // Visual SourceSafe
    "**/vssver.scc",
    // MKS
    "**/project.pj",
    // Subversion
    "**/.svn",
    "**/.svn/**",
    // GNU Arch
    "**/.arch-ids",
    "**/.arch-ids/**",
    // Bazaar
    "**/.bzr",
    "**/.bzr/**",
    // SurroundSCM
    "**/.MySCMServerInfo",
    // macOS Finder
    "**/.DS_Store",
    // Serena Dimensions
    "**/.metadata",
    "**/.metadata/**",
    // Mercurial
    "**/.hg",
    "**/.hg/**",
    // git
    "**/.git",
    "**/.git/**",
    "**/.gitignore",
    // BitKeeper
    "**/BitKeeper",
    "**/BitKeeper/**",
    "**/ChangeSet",
    "**/ChangeSet/**",
    // darcs
    "**/_darcs",
    "**/_darcs/**",
    "**/.darcsrepo",
    "**/.darcsrepo/**",
    "**/-darcs-backup*",
    "**/.darcs-temp-mail",
];

/// Returns the default exclude patterns.
///
/// # Examples
///
/// ```
/// assert!(selector::default_patterns().any(|pattern| pattern == "**/.git/**"));
/// ```
pub fn default_patterns() -> impl Iterator<Item = &'static str> {
    DEFAULT_EXCLUDES.iter().copied()
}
