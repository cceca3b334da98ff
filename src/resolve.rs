//! Path resolution.
//!
//! Combines an ordered list of path fragments into one canonical path:
//! fragments are assembled right-to-left until one supplies an absolute
//! root (or the working directory is substituted as a final fallback), the
//! assembled string is normalized by [`normalize_string`], and the result is
//! formatted per POSIX rules.

use serde_json::Value;

use crate::error::ResolveError;
use crate::normalize::normalize_string;
use crate::scheme::{Posix, SeparatorScheme};

// =============================================================================
// CurrentBase - working-directory collaborator
// =============================================================================

/// Supplies the working directory a relative resolution is anchored to.
///
/// The value must be an absolute, already-normalized path; the resolver
/// trusts it and does not re-validate. Queried at most once per resolution,
/// and only when no fragment supplies an absolute root.
///
/// Any `Fn() -> String` closure implements this trait, so tests and embedders
/// can inject a base without defining a type:
///
/// ```
/// use posix_resolve::Resolver;
///
/// let resolver = Resolver::with_base(|| String::from("/srv"));
/// assert_eq!(resolver.resolve(&["app"]), "/srv/app");
/// ```
pub trait CurrentBase {
    /// The current working directory.
    fn current_base(&self) -> String;
}

impl<F> CurrentBase for F
where
    F: Fn() -> String,
{
    fn current_base(&self) -> String {
        self()
    }
}

/// A fixed working directory, for deterministic resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBase(String);

impl FixedBase {
    /// Create a fixed base from any string-like value.
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }
}

impl CurrentBase for FixedBase {
    fn current_base(&self) -> String {
        self.0.clone()
    }
}

/// The process working directory, read on demand.
///
/// Falls back to `/` if the working directory cannot be determined (e.g. it
/// was deleted from under the process).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCwd;

impl CurrentBase for ProcessCwd {
    fn current_base(&self) -> String {
        std::env::current_dir()
            .map_or_else(|_| String::from("/"), |cwd| cwd.to_string_lossy().into_owned())
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolves fragment lists against an injected working directory.
///
/// Construction mirrors the two common cases: [`Resolver::new`] anchors
/// relative resolutions to the process working directory, while
/// [`Resolver::with_base`] injects any [`CurrentBase`] implementation.
///
/// # Example
///
/// ```
/// use posix_resolve::{FixedBase, Resolver};
///
/// let resolver = Resolver::with_base(FixedBase::new("/x/y"));
/// assert_eq!(resolver.resolve(&["/a/b", "../c"]), "/a/c");
/// assert_eq!(resolver.resolve(&[".."]), "/x");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<B = ProcessCwd> {
    base: B,
}

impl Resolver<ProcessCwd> {
    /// Create a resolver anchored to the process working directory.
    pub fn new() -> Self {
        Self { base: ProcessCwd }
    }
}

impl Default for Resolver<ProcessCwd> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CurrentBase> Resolver<B> {
    /// Create a resolver anchored to the given working-directory source.
    pub fn with_base(base: B) -> Self {
        Self { base }
    }

    /// Resolve an ordered list of fragments into one canonical path.
    ///
    /// Fragments are consumed right-to-left: empty fragments are skipped,
    /// each remaining fragment is prepended to the accumulator, and assembly
    /// stops at the first absolute fragment. When no fragment is absolute
    /// the working directory is substituted as one final synthetic fragment.
    /// Unresolvable `..` segments are kept only when the assembled input has
    /// no absolute root to bound them.
    ///
    /// With zero fragments this returns the working directory itself,
    /// normalized. A resolution that collapses to nothing yields `.`.
    pub fn resolve<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        let scheme = Posix;
        let sep = scheme.separator() as char;

        let mut raw = String::new();
        let mut absolute = false;

        for fragment in fragments.iter().rev() {
            let fragment = fragment.as_ref();
            if fragment.is_empty() {
                continue;
            }
            raw = format!("{fragment}{sep}{raw}");
            absolute = starts_with_separator(fragment, &scheme);
            if absolute {
                break;
            }
        }

        if !absolute {
            let base = self.base.current_base();
            if !base.is_empty() {
                raw = format!("{base}{sep}{raw}");
                absolute = starts_with_separator(&base, &scheme);
            }
        }

        let normalized = normalize_string(&raw, !absolute, &scheme);

        if absolute {
            format!("{sep}{normalized}")
        } else if normalized.is_empty() {
            String::from(".")
        } else {
            normalized
        }
    }

    /// Resolve dynamically-typed fragments, enforcing the textual contract.
    ///
    /// Every fragment must be a JSON string; the first non-string fragment,
    /// at any position, fails the whole call with
    /// [`ResolveError::InvalidArgumentType`] naming that position. No
    /// partial result is produced.
    pub fn resolve_values(&self, fragments: &[Value]) -> Result<String, ResolveError> {
        let mut parts = Vec::with_capacity(fragments.len());
        for (index, value) in fragments.iter().enumerate() {
            match value {
                Value::String(text) => parts.push(text.as_str()),
                other => {
                    return Err(ResolveError::invalid_argument_type(
                        format!("paths[{index}]"),
                        other.clone(),
                    ));
                }
            }
        }
        Ok(self.resolve(&parts))
    }
}

fn starts_with_separator<S: SeparatorScheme>(fragment: &str, scheme: &S) -> bool {
    fragment
        .as_bytes()
        .first()
        .is_some_and(|&byte| scheme.is_separator(byte))
}

// =============================================================================
// Free functions - process-cwd convenience entry points
// =============================================================================

/// Resolve fragments against the process working directory.
///
/// Shorthand for `Resolver::new().resolve(fragments)`.
pub fn resolve<S: AsRef<str>>(fragments: &[S]) -> String {
    Resolver::new().resolve(fragments)
}

/// Resolve dynamically-typed fragments against the process working directory.
///
/// Shorthand for `Resolver::new().resolve_values(fragments)`.
pub fn resolve_values(fragments: &[Value]) -> Result<String, ResolveError> {
    Resolver::new().resolve_values(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    const NO_FRAGMENTS: [&str; 0] = [];

    fn fixed(base: &str) -> Resolver<FixedBase> {
        Resolver::with_base(FixedBase::new(base))
    }

    #[test]
    fn test_relative_fragment_joins_base() {
        assert_eq!(fixed("/x/y").resolve(&["a"]), "/x/y/a");
        assert_eq!(fixed("/x/y").resolve(&["a", "b", "c"]), "/x/y/a/b/c");
    }

    #[test]
    fn test_parent_against_base() {
        assert_eq!(fixed("/x/y").resolve(&[".."]), "/x");
        assert_eq!(fixed("/x/y").resolve(&["../.."]), "/");
    }

    #[test]
    fn test_parent_collapses_into_absolute_fragment() {
        assert_eq!(fixed("/x/y").resolve(&["/a/b", "../c"]), "/a/c");
    }

    #[test]
    fn test_duplicate_separators_and_trailing_parent() {
        assert_eq!(
            fixed("/x/y").resolve(&["/foo/bar//baz/asdf/quux/.."]),
            "/foo/bar/baz/asdf"
        );
    }

    #[test]
    fn test_current_dir_fragment() {
        assert_eq!(fixed("/x/y").resolve(&["/foo/bar", "./baz"]), "/foo/bar/baz");
    }

    #[test]
    fn test_zero_fragments_yield_base() {
        assert_eq!(fixed("/x/y").resolve(&NO_FRAGMENTS), "/x/y");
        assert_eq!(fixed("/").resolve(&NO_FRAGMENTS), "/");
    }

    #[test]
    fn test_absolute_fragment_short_circuits() {
        assert_eq!(fixed("/x/y").resolve(&["/a", "/b"]), "/b");
        assert_eq!(fixed("/x/y").resolve(&["ignored", "/srv", "app"]), "/srv/app");
    }

    #[test]
    fn test_empty_fragments_are_skipped() {
        assert_eq!(fixed("/x/y").resolve(&["", "/a", ""]), "/a");
        assert_eq!(fixed("/x/y").resolve(&["a", ""]), "/x/y/a");
    }

    #[test]
    fn test_parent_chain_stops_at_root() {
        assert_eq!(fixed("/x").resolve(&["../../../.."]), "/");
        assert_eq!(fixed("/").resolve(&["../a"]), "/a");
    }

    #[test]
    fn test_root_resolves_to_root() {
        assert_eq!(fixed("/x/y").resolve(&["/"]), "/");
        assert_eq!(fixed("/x/y").resolve(&["///"]), "/");
    }

    #[test]
    fn test_empty_base_falls_back_to_dot() {
        // A degenerate (empty) base leaves the resolution relative; a fully
        // collapsed relative result is the current-directory marker.
        assert_eq!(fixed("").resolve(&["a/.."]), ".");
        assert_eq!(fixed("").resolve(&NO_FRAGMENTS), ".");
        assert_eq!(fixed("").resolve(&["a/../.."]), "..");
    }

    #[test]
    fn test_closure_base() {
        let resolver = Resolver::with_base(|| String::from("/srv"));
        assert_eq!(resolver.resolve(&["app"]), "/srv/app");
    }

    #[test]
    fn test_base_queried_lazily() {
        // An absolute fragment must short-circuit before the base is read.
        let resolver = Resolver::with_base(|| -> String {
            panic!("base must not be queried for absolute inputs")
        });
        assert_eq!(resolver.resolve(&["/a/b"]), "/a/b");
    }

    #[test]
    fn test_process_cwd_is_absolute() {
        let resolved = resolve(&["."]);
        assert!(resolved.starts_with('/'), "{resolved}");
        assert!(resolved == "/" || !resolved.ends_with('/'), "{resolved}");
    }

    #[test]
    fn test_values_resolve_strings() {
        let resolver = fixed("/x/y");
        assert_eq!(
            resolver.resolve_values(&[json!("/a/b"), json!("../c")]).unwrap(),
            "/a/c"
        );
        assert_eq!(resolver.resolve_values(&[]).unwrap(), "/x/y");
    }

    #[test]
    fn test_values_reject_non_string() {
        let err = fixed("/x/y")
            .resolve_values(&[json!("/a"), json!(2)])
            .unwrap_err();
        let ResolveError::InvalidArgumentType { name, expected, actual } = err;
        assert_eq!(name, "paths[1]");
        assert_eq!(expected, "string");
        assert_eq!(actual, json!(2));
    }

    #[test]
    fn test_values_reject_non_string_left_of_absolute() {
        // Type validation covers every position, even fragments an absolute
        // root would shadow.
        let err = fixed("/x/y")
            .resolve_values(&[json!(null), json!("/b")])
            .unwrap_err();
        let ResolveError::InvalidArgumentType { name, .. } = err;
        assert_eq!(name, "paths[0]");
    }

    // =========================================================================
    // Property tests
    // =========================================================================

    /// Absolute paths whose segments are plain names (never `.` or `..`),
    /// i.e. already in normalized form.
    fn arb_normalized_absolute() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z][a-z0-9]{0,4}", 1..5)
            .prop_map(|segments| format!("/{}", segments.join("/")))
    }

    proptest! {
        #[test]
        fn prop_no_adjacent_or_trailing_separators(
            fragments in prop::collection::vec("[a-z./]{0,8}", 0..6)
        ) {
            let resolved = fixed("/base/dir").resolve(&fragments);
            prop_assert!(!resolved.contains("//"), "{}", resolved);
            prop_assert!(resolved == "/" || !resolved.ends_with('/'), "{}", resolved);
        }

        #[test]
        fn prop_normalized_absolute_is_fixed_point(path in arb_normalized_absolute()) {
            prop_assert_eq!(fixed("/x/y").resolve(&[path.as_str()]), path);
        }

        #[test]
        fn prop_zero_fragments_equal_base(base in arb_normalized_absolute()) {
            prop_assert_eq!(fixed(&base).resolve(&NO_FRAGMENTS), base);
        }

        #[test]
        fn prop_absolute_fragment_shadows_left(
            left in "[a-z./]{0,8}",
            path in arb_normalized_absolute(),
            right in "[a-z0-9]{0,4}",
        ) {
            let resolver = fixed("/base/dir");
            let shadowed = resolver.resolve(&[left.as_str(), path.as_str(), right.as_str()]);
            let bare = resolver.resolve(&[path.as_str(), right.as_str()]);
            prop_assert_eq!(shadowed, bare);
        }

        #[test]
        fn prop_result_is_absolute_under_absolute_base(
            fragments in prop::collection::vec("[a-z./]{0,8}", 0..6)
        ) {
            let resolved = fixed("/base/dir").resolve(&fragments);
            prop_assert!(resolved.starts_with('/'), "{}", resolved);
        }
    }
}
