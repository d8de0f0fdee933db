//! Block-level parser for lecture notes.
//!
//! The block parser is line-oriented and handles:
//! - Headings (`#`, `##`, `###`)
//! - Horizontal rules
//! - Unordered (`- `) and ordered (`N. `) list runs
//! - Paragraphs, one per non-blank line

mod classify;
mod parser;
mod types;

pub use classify::{classify_line, LineKind};
pub use parser::BlockParser;
pub use types::{Block, BlockSequence, HeadingLevel};
