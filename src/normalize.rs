//! Segment normalization.
//!
//! The heart of the crate: a single-pass scan that collapses a raw
//! slash-delimited string into canonical form. Segments are classified as
//! they are flushed at each separator — empty segments and `.` disappear,
//! `..` cancels against the previous named segment where one exists, and
//! everything else is appended verbatim. The output carries no leading or
//! trailing separator; the caller prepends the root marker for absolute
//! paths.

use crate::scheme::SeparatorScheme;

/// Collapse a raw path string into canonical form.
///
/// Scans byte indices `0..=len`; the final out-of-bounds index is a
/// synthetic flush so the last pending segment is always evaluated (it is
/// treated as a separator only when the last real byte was not already one,
/// avoiding a double flush).
///
/// `allow_above_root` controls unresolvable `..` segments: when `true`
/// (relative input, no fixed root) they are kept in the output; when `false`
/// (input anchored at an absolute root) they are silently dropped.
///
/// Never fails: empty strings, runs of separators and arbitrarily deep `..`
/// chains all fold into the scan's defined behavior.
///
/// # Example
///
/// ```
/// use posix_resolve::normalize::normalize_string;
/// use posix_resolve::scheme::Posix;
///
/// assert_eq!(normalize_string("a//b/./c/..", true, &Posix), "a/b");
/// assert_eq!(normalize_string("../a", true, &Posix), "../a");
/// assert_eq!(normalize_string("../a", false, &Posix), "a");
/// ```
pub fn normalize_string<S: SeparatorScheme>(
    path: &str,
    allow_above_root: bool,
    scheme: &S,
) -> String {
    let bytes = path.as_bytes();
    let sep = scheme.separator() as char;

    let mut res = String::new();
    // Length of the most recently appended segment, used to test whether the
    // tail of `res` is exactly `..`.
    let mut last_segment_length = 0;
    // Index of the first byte of the pending segment: `path[seg_start..i]`.
    let mut seg_start = 0;
    // Consecutive dots since `seg_start`; -1 once the pending segment
    // contains a non-dot byte.
    let mut dots: i32 = 0;
    let mut code = 0u8;

    let mut i = 0;
    while i <= bytes.len() {
        if i < bytes.len() {
            code = bytes[i];
        } else if scheme.is_separator(code) {
            // The last real byte was a separator; the final segment has
            // already been flushed.
            break;
        } else {
            code = scheme.separator();
        }

        if scheme.is_separator(code) {
            if seg_start == i || dots == 1 {
                // Empty or `.` segment: nothing to emit.
            } else if dots == 2 {
                // `..`: pop the previous named segment unless the tail of
                // `res` is itself an unresolved `..`.
                if res.len() < 2 || last_segment_length != 2 || !res.ends_with("..") {
                    if res.len() > 2 {
                        match res.rfind(sep) {
                            Some(j) => {
                                res.truncate(j);
                                last_segment_length = match res.rfind(sep) {
                                    Some(k) => res.len() - 1 - k,
                                    None => res.len(),
                                };
                            }
                            None => {
                                res.clear();
                                last_segment_length = 0;
                            }
                        }
                        seg_start = i + 1;
                        dots = 0;
                        i += 1;
                        continue;
                    } else if !res.is_empty() {
                        res.clear();
                        last_segment_length = 0;
                        seg_start = i + 1;
                        dots = 0;
                        i += 1;
                        continue;
                    }
                }
                if allow_above_root {
                    if !res.is_empty() {
                        res.push(sep);
                    }
                    res.push_str("..");
                    last_segment_length = 2;
                }
            } else {
                // Named segment. Separator bytes are ASCII, so `seg_start`
                // and `i` always fall on char boundaries.
                if !res.is_empty() {
                    res.push(sep);
                }
                res.push_str(&path[seg_start..i]);
                last_segment_length = i - seg_start;
            }
            seg_start = i + 1;
            dots = 0;
        } else if code == b'.' && dots != -1 {
            dots += 1;
        } else {
            dots = -1;
        }

        i += 1;
    }

    res
}
