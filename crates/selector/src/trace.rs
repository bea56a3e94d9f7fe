//! Diagnostics for selector construction and pruning decisions.
//!
//! Events go through `tracing` and are conditionally compiled behind the
//! `tracing` feature; with the feature disabled every helper is a no-op and
//! adds no runtime cost.

/// Target name for selector tracing events.
#[cfg(feature = "tracing")]
const TARGET: &str = "selector";

/// Emits a summary event once a selector finishes compiling its matchers.
#[cfg(feature = "tracing")]
pub(crate) fn selector_compiled(
    includes: usize,
    excludes: usize,
    directory_includes: usize,
    directory_excludes: usize,
) {
    tracing::debug!(
        target: TARGET,
        includes,
        excludes,
        directory_includes,
        directory_excludes,
        "compiled path selector"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub(crate) fn selector_compiled(
    _includes: usize,
    _excludes: usize,
    _directory_includes: usize,
    _directory_excludes: usize,
) {
}

/// Emits an event when a directory is ruled out by the pruning check.
#[cfg(feature = "tracing")]
pub(crate) fn directory_pruned(relative_path: &str) {
    tracing::trace!(
        target: TARGET,
        path = relative_path,
        "directory cannot hold selected paths"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub(crate) fn directory_pruned(_relative_path: &str) {}
