//! Input normalization before line splitting.
//!
//! Some note records arrive with their newlines double-escaped, so the
//! two-byte sequence `\n` stands where a real line feed belongs.

use std::borrow::Cow;

use memchr::memmem;

/// The literal two-byte escape: backslash followed by `n`.
const ESCAPED_NEWLINE: &[u8] = b"\\n";

/// Replace every literal `\n` escape with a real newline.
///
/// Borrows the input when it holds no escape.
///
/// # Example
/// ```
/// use lecturemark::preprocess::normalize_escaped_newlines;
///
/// assert_eq!(normalize_escaped_newlines("a\\nb"), "a\nb");
/// assert_eq!(normalize_escaped_newlines("a\nb"), "a\nb");
/// ```
pub fn normalize_escaped_newlines(raw: &str) -> Cow<'_, str> {
    let bytes = raw.as_bytes();
    let mut hits = memmem::find_iter(bytes, ESCAPED_NEWLINE).peekable();
    if hits.peek().is_none() {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut pos = 0;
    for hit in hits {
        // Both bytes are ASCII, so `hit` and `hit + 2` are char boundaries.
        out.push_str(&raw[pos..hit]);
        out.push('\n');
        pos = hit + ESCAPED_NEWLINE.len();
    }
    out.push_str(&raw[pos..]);
    Cow::Owned(out)
}

/// Split normalized text into lines.
///
/// A trailing `\r` is dropped from each line and no empty line is produced
/// after a final newline.
#[inline]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrows_without_escapes() {
        let out = normalize_escaped_newlines("plain\ntext");
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn replaces_every_escape() {
        assert_eq!(normalize_escaped_newlines("# A\\n\\n- b\\n- c"), "# A\n\n- b\n- c");
    }

    #[test]
    fn escape_at_edges() {
        assert_eq!(normalize_escaped_newlines("\\nx\\n"), "\nx\n");
    }

    #[test]
    fn lone_backslash_is_kept() {
        assert_eq!(normalize_escaped_newlines("a\\b\\"), "a\\b\\");
    }

    #[test]
    fn multibyte_neighbours() {
        assert_eq!(normalize_escaped_newlines("é\\nü"), "é\nü");
    }

    #[test]
    fn split_keeps_blank_lines() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn split_drops_carriage_returns() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn split_empty() {
        assert!(split_lines("").is_empty());
    }
}
