//! # posix-resolve
//!
//! POSIX path resolution as pure string algebra.
//!
//! This crate resolves an ordered list of path fragments into a single
//! canonical path: redundant separators collapse, `.` and `..` segments
//! resolve, and the result anchors to an absolute root or to an injected
//! working directory. It never touches the filesystem — no `stat`, no
//! symlink resolution, no existence checks — so it works identically on
//! paths that do not (or cannot) exist.
//!
//! ## Quick Start
//!
//! ```
//! use posix_resolve::{FixedBase, Resolver};
//!
//! let resolver = Resolver::with_base(FixedBase::new("/x/y"));
//!
//! assert_eq!(resolver.resolve(&["/a/b", "../c"]), "/a/c");
//! assert_eq!(resolver.resolve(&["/foo/bar", "./baz"]), "/foo/bar/baz");
//! assert_eq!(resolver.resolve(&[".."]), "/x");
//! ```
//!
//! Or anchor to the process working directory:
//!
//! ```no_run
//! let config = posix_resolve::resolve(&["..", "config.toml"]);
//! ```
//!
//! ## High-Level API
//!
//! - [`Resolver`]: resolution against an injected [`CurrentBase`]
//! - [`resolve`]: free function anchored to the process working directory
//! - [`resolve_values`]: dynamically-typed variant that validates fragments
//!   are textual and reports [`ResolveError::InvalidArgumentType`] otherwise
//!
//! ## Low-Level API
//!
//! - [`normalize::normalize_string`]: the single-pass segment normalizer
//! - [`scheme::SeparatorScheme`]: the injectable separator predicate
//!
//! Every resolution is referentially transparent given its fragments and the
//! single working-directory query, so the whole API is freely shareable
//! across threads.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod normalize;
pub mod prelude;
pub mod resolve;
pub mod scheme;

// =============================================================================
// Resolution
// =============================================================================

pub use resolve::{resolve, resolve_values, CurrentBase, FixedBase, ProcessCwd, Resolver};

// =============================================================================
// Errors
// =============================================================================

pub use error::{json_type_name, ResolveError};

// =============================================================================
// Normalization internals
// =============================================================================

pub use normalize::normalize_string;
pub use scheme::{Posix, SeparatorScheme};
