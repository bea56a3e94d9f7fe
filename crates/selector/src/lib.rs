#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `selector` decides which paths under a base directory are selected by
//! include/exclude patterns, and which directories can be skipped outright
//! while a caller walks the tree. It exists for the tools that repeatedly
//! filter large source trees -- archive builders, cleaners, source scanners
//! -- where pruning a subtree early is the difference between touching a
//! dozen directories and touching tens of thousands.
//!
//! Patterns come in two flavours. A `<syntax>:<expression>` string is handed
//! to the named dialect engine (`glob` or `regex`). Everything else follows
//! the legacy semantics of classic build-tool include/exclude lists: `/` as
//! the separator on every platform, a trailing `/` standing for "everything
//! under this directory", and a `**` that may match *zero* directories. The
//! zero-directory case is simulated at construction by expanding each
//! pattern into its family of equivalent variants with `**` tokens removed,
//! so the compiled matchers never need special-casing at query time.
//!
//! # Design
//!
//! - Construction runs four stages once: normalization (separator and
//!   trailing-slash rewrites, duplicate-wildcard collapses), family
//!   expansion (the zero-directory variants), simplification (a bare `**`
//!   dominates its whole set), and directory projection (coarser patterns
//!   describing directories instead of files). Each stage lives in a
//!   dedicated function and is covered by unit tests on pattern text alone.
//! - [`PathSelector`] owns four compiled matcher arrays produced by those
//!   stages and answers [`is_selected`](PathSelector::is_selected) and
//!   [`could_hold_selected`](PathSelector::could_hold_selected) by pure
//!   evaluation. The compiled state sits behind an `Arc`, making clones
//!   cheap and concurrent queries lock-free.
//! - [`PathMatcher`] abstracts one compiled pattern behind a single
//!   operation over `/`-separated relative paths, keeping engine types out
//!   of the public surface.
//! - [`DEFAULT_EXCLUDES`] is the built-in catalog of version-control and
//!   temporary-file patterns, merged into the excludes on opt-in.
//!
//! # Invariants
//!
//! - Pruning is sound: for every path accepted by
//!   [`is_selected`](PathSelector::is_selected), every ancestor directory up
//!   to the base answers `true` from
//!   [`could_hold_selected`](PathSelector::could_hold_selected). A directory
//!   is only ruled out when nothing selectable can live beneath it.
//! - An empty include set means everything is a candidate; an empty exclude
//!   set excludes nothing.
//! - A selector never changes after construction. Queries perform no I/O
//!   and allocate nothing beyond the relativized path.
//!
//! # Errors
//!
//! Construction reports [`SelectorError`] when a pattern names an unknown
//! syntax or a dialect engine rejects an expression; the error carries the
//! offending pattern. Normalization, expansion, and projection are total
//! over arbitrary input text and never fail.
//!
//! # Examples
//!
//! Select Rust sources while keeping build output out of the walk:
//!
//! ```
//! use selector::PathSelector;
//! use std::path::Path;
//!
//! let selector = PathSelector::new(
//!     "project",
//!     ["src/**/*.rs", "Cargo.toml"],
//!     ["target/**"],
//!     true,
//! )?;
//!
//! assert!(selector.is_selected(Path::new("project/src/lib.rs")));
//! assert!(selector.is_selected(Path::new("project/Cargo.toml")));
//! assert!(!selector.is_selected(Path::new("project/.git/config")));
//!
//! // A walker asks before descending; `target` is proven uninteresting.
//! assert!(selector.could_hold_selected(Path::new("project/src")));
//! assert!(!selector.could_hold_selected(Path::new("project/target")));
//! # Ok::<(), selector::SelectorError>(())
//! ```
//!
//! # See also
//!
//! - [`globset`] for the glob primitives behind the `glob` dialect.
//! - [`regex`] for the `regex` dialect.

mod defaults;
mod error;
mod matcher;
mod pattern;
mod selector;
mod trace;

pub use defaults::{DEFAULT_EXCLUDES, default_patterns};
pub use error::SelectorError;
pub use matcher::{AcceptAll, PathMatcher};
pub use selector::PathSelector;
