//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for the first escapable byte, then bulk-copies
//! the segments between escapes. Every escapable byte is ASCII, so segment
//! boundaries always fall on char boundaries.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

/// Lookup table for escapable bytes in text content.
/// Index by byte value, true if needs escaping.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into an output buffer.
///
/// Escapes `<`, `>`, `&` and `"`.
///
/// # Example
/// ```
/// use lecturemark::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<script>");
/// assert_eq!(out, "&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    let Some(first) = first_text_escape(input.as_bytes()) else {
        out.push_str(input);
        return;
    };

    let bytes = input.as_bytes();
    out.push_str(&input[..first]);
    let mut pos = first;

    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !TEXT_ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }

        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }

        if pos < bytes.len() {
            out.push_str(match bytes[pos] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                _ => "&quot;",
            });
            pos += 1;
        }
    }
}

/// Escape HTML text content, borrowing when nothing needs escaping.
pub fn escape_text(input: &str) -> Cow<'_, str> {
    if !needs_text_escape(input.as_bytes()) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    escape_text_into(&mut out, input);
    Cow::Owned(out)
}

/// Check if a byte slice needs any escaping for text content.
#[inline]
pub fn needs_text_escape(input: &[u8]) -> bool {
    first_text_escape(input).is_some()
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, y) => x.or(y),
    }
}
