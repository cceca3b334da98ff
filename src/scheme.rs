//! Separator schemes.
//!
//! The normalization scan never hardcodes `/`: it asks a [`SeparatorScheme`]
//! whether a byte is a separator and which byte to emit between segments.
//! This keeps the scanning algorithm reusable for a future scheme with a
//! different separator set (e.g. one that also accepts `\`) without
//! duplicating the state machine.

/// Classifies separator bytes and supplies the canonical separator.
///
/// Both classification characters the scan cares about (the separator and
/// `.`) must be ASCII, so implementations work on raw bytes: a byte inside a
/// multi-byte UTF-8 sequence always has its high bit set and can never be
/// mistaken for one of them.
pub trait SeparatorScheme {
    /// Whether `byte` terminates a segment.
    fn is_separator(&self, byte: u8) -> bool;

    /// The canonical separator byte, used when joining output segments.
    fn separator(&self) -> u8;
}

/// The POSIX scheme: `/` is the only separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Posix;

impl SeparatorScheme for Posix {
    #[inline]
    fn is_separator(&self, byte: u8) -> bool {
        byte == b'/'
    }

    #[inline]
    fn separator(&self) -> u8 {
        b'/'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_separator() {
        assert!(Posix.is_separator(b'/'));
        assert!(!Posix.is_separator(b'\\'));
        assert!(!Posix.is_separator(b'.'));
        assert_eq!(Posix.separator(), b'/');
    }
}
