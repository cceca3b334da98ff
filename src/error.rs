//! Resolution error type.

use serde_json::Value;
use thiserror::Error;

/// Error type for the dynamically-typed resolver entry points.
///
/// The typed API ([`Resolver::resolve`](crate::Resolver::resolve)) cannot
/// fail: the type system already guarantees every fragment is textual. The
/// dynamic API works on [`serde_json::Value`] fragments and surfaces the
/// textual contract as an error instead.
///
/// # Example
///
/// ```
/// use posix_resolve::{ResolveError, Resolver, FixedBase};
/// use serde_json::json;
///
/// let resolver = Resolver::with_base(FixedBase::new("/x/y"));
/// match resolver.resolve_values(&[json!("/a"), json!(42)]) {
///     Err(ResolveError::InvalidArgumentType { name, expected, actual }) => {
///         assert_eq!(name, "paths[1]");
///         assert_eq!(expected, "string");
///         assert_eq!(actual, json!(42));
///     }
///     other => panic!("expected a type error, got {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A fragment was not a textual value.
    #[error(
        "the {name:?} argument must be of type {expected}; received {} ({actual})",
        json_type_name(.actual)
    )]
    InvalidArgumentType {
        /// Label of the offending argument, e.g. `paths[2]`.
        name: String,
        /// The expected kind, always `"string"`.
        expected: &'static str,
        /// The value that was actually passed.
        actual: Value,
    },
}

impl ResolveError {
    /// Create a [`ResolveError::InvalidArgumentType`] for a non-string
    /// fragment.
    pub fn invalid_argument_type(name: impl Into<String>, actual: Value) -> Self {
        Self::InvalidArgumentType {
            name: name.into(),
            expected: "string",
            actual,
        }
    }
}

/// Human-readable kind of a JSON value, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
