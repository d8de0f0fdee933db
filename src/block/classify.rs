//! Single-line classification.
//!
//! Each check looks at one line in isolation. The parser decides what to do
//! with runs of list lines.

use super::types::HeadingLevel;

/// What a line looks like on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Heading with the text after its marker.
    Heading(HeadingLevel, &'a str),
    /// `---`, `***` or `___` after trimming.
    Rule,
    /// `- ` item with the marker stripped.
    UnorderedItem(&'a str),
    /// `N. ` item with the marker stripped.
    OrderedItem(&'a str),
    /// Any other line with visible content.
    Text,
    /// Empty or whitespace-only line.
    Blank,
}

/// Heading levels in the order they must be tested.
///
/// `# ` is a prefix of neither `## ` nor `### `, but testing the longest
/// marker first keeps the precedence explicit.
const HEADING_PRECEDENCE: [HeadingLevel; 3] = [HeadingLevel::H3, HeadingLevel::H2, HeadingLevel::H1];

/// Classify a line. First match wins.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some((level, text)) = heading(line) {
        return LineKind::Heading(level, text);
    }
    if is_rule(line) {
        return LineKind::Rule;
    }
    if let Some(item) = unordered_item(line) {
        return LineKind::UnorderedItem(item);
    }
    if let Some(item) = ordered_item(line) {
        return LineKind::OrderedItem(item);
    }
    if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text
    }
}

/// Match a heading marker, longest first.
#[inline]
pub fn heading(line: &str) -> Option<(HeadingLevel, &str)> {
    HEADING_PRECEDENCE
        .iter()
        .find_map(|&level| line.strip_prefix(level.marker()).map(|text| (level, text)))
}

/// Check for a horizontal rule: exactly three of the same marker after trimming.
#[inline]
pub fn is_rule(line: &str) -> bool {
    matches!(line.trim(), "---" | "***" | "___")
}

/// Strip a `- ` marker.
#[inline]
pub fn unordered_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
}

/// Strip an ordered marker: one or more ASCII digits, then `. `.
#[inline]
pub fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // Digits are ASCII, so `digits` is a char boundary.
    line[digits..].strip_prefix(". ")
}
