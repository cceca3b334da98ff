//! Prelude module for convenient imports.
//!
//! ```
//! use posix_resolve::prelude::*;
//!
//! let resolver = Resolver::with_base(FixedBase::new("/srv"));
//! assert_eq!(resolver.resolve(&["data", "..", "logs"]), "/srv/logs");
//! ```

// Resolution
pub use crate::resolve::{resolve, resolve_values, CurrentBase, FixedBase, ProcessCwd, Resolver};

// Errors
pub use crate::error::ResolveError;

// Normalization internals
pub use crate::normalize::normalize_string;
pub use crate::scheme::{Posix, SeparatorScheme};
