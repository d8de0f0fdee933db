//! Block-level output types.

use serde::Serialize;

/// Heading level. Only the first three levels are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    /// `# `
    H1,
    /// `## `
    H2,
    /// `### `
    H3,
}

impl HeadingLevel {
    /// Numeric level (1-3).
    #[inline]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }

    /// Heading marker including its trailing space.
    #[inline]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::H1 => "# ",
            Self::H2 => "## ",
            Self::H3 => "### ",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

/// One renderable unit of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `#`, `##` or `###` heading. Text is kept verbatim.
    Heading {
        /// Heading level.
        level: HeadingLevel,
        /// Everything after the marker.
        text: String,
    },
    /// Horizontal rule (`---`, `***` or `___`).
    Rule,
    /// Run of consecutive `- ` lines.
    UnorderedList {
        /// Item text with the marker stripped.
        items: Vec<String>,
    },
    /// Run of consecutive `N. ` lines.
    OrderedList {
        /// Item text with the marker stripped.
        items: Vec<String>,
    },
    /// A single non-blank line with emphasis already converted to HTML.
    ///
    /// The fragment is meant to be injected as-is. Unless
    /// [`Options::escape_html`](crate::Options::escape_html) was set, text
    /// around the emphasis tags is not escaped.
    Paragraph {
        /// HTML fragment.
        html: String,
    },
}

impl Block {
    /// Number of source lines this block covers.
    pub fn line_count(&self) -> usize {
        match self {
            Self::UnorderedList { items } | Self::OrderedList { items } => items.len(),
            _ => 1,
        }
    }
}

/// Output of one render call, in source order.
pub type BlockSequence = Vec<Block>;
