//! Block parser implementation.

use crate::cursor::LineCursor;
use crate::inline;
use crate::Options;

use super::classify::{classify_line, ordered_item, unordered_item, LineKind};
use super::types::Block;

/// Block parser state.
///
/// Holds the lines of one note and a cursor into them. A parser is used for
/// a single parse; nothing carries over between notes.
pub struct BlockParser<'a> {
    /// Current cursor position.
    cursor: LineCursor<'a>,
    /// Rendering options for paragraph lines.
    options: Options,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser with default options.
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self::new_with_options(lines, Options::default())
    }

    /// Create a new block parser with options.
    pub fn new_with_options(lines: &'a [&'a str], options: Options) -> Self {
        Self {
            cursor: LineCursor::new(lines),
            options,
        }
    }

    /// Parse all lines and collect blocks.
    pub fn parse(&mut self, blocks: &mut Vec<Block>) {
        log::debug!("parsing {} note lines", self.cursor.remaining());
        while !self.cursor.is_eof() {
            let line_no = self.cursor.position();
            if let Some(block) = self.parse_block() {
                log::trace!("line {line_no}: {block:?}");
                blocks.push(block);
            }
        }
    }

    /// Parse the block starting at the cursor.
    ///
    /// Always consumes at least one line. Returns `None` for blank lines.
    fn parse_block(&mut self) -> Option<Block> {
        let line = self.cursor.peek()?;

        match classify_line(line) {
            LineKind::Heading(level, text) => {
                self.cursor.bump();
                Some(Block::Heading {
                    level,
                    text: text.to_owned(),
                })
            }
            LineKind::Rule => {
                self.cursor.bump();
                Some(Block::Rule)
            }
            LineKind::UnorderedItem(_) => Some(Block::UnorderedList {
                items: self.collect_items(unordered_item),
            }),
            LineKind::OrderedItem(_) => Some(Block::OrderedList {
                items: self.collect_items(ordered_item),
            }),
            LineKind::Text => {
                self.cursor.bump();
                Some(Block::Paragraph {
                    html: inline::render_paragraph(line, &self.options),
                })
            }
            LineKind::Blank => {
                self.cursor.bump();
                None
            }
        }
    }

    /// Collect a run of list lines sharing one marker pattern.
    ///
    /// The first line that does not match stays under the cursor.
    fn collect_items(&mut self, strip_marker: fn(&str) -> Option<&str>) -> Vec<String> {
        let items: Vec<String> = self
            .cursor
            .take_while_map(|line| strip_marker(line).map(str::to_owned))
            .collect();
        debug_assert!(!items.is_empty());
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::HeadingLevel;

    fn parse(lines: &[&str]) -> Vec<Block> {
        let mut blocks = Vec::new();
        BlockParser::new(lines).parse(&mut blocks);
        blocks
    }

    fn items(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_heading() {
        assert_eq!(
            parse(&["## Setup"]),
            vec![Block::Heading {
                level: HeadingLevel::H2,
                text: "Setup".into()
            }]
        );
    }

    #[test]
    fn test_blank_lines_produce_nothing() {
        assert!(parse(&["", "  ", ""]).is_empty());
    }

    #[test]
    fn test_list_run_collapses() {
        assert_eq!(
            parse(&["- a", "- b", "- c"]),
            vec![Block::UnorderedList {
                items: items(&["a", "b", "c"])
            }]
        );
    }

    #[test]
    fn test_list_run_stops_at_other_marker() {
        assert_eq!(
            parse(&["- a", "1. b", "- c"]),
            vec![
                Block::UnorderedList { items: items(&["a"]) },
                Block::OrderedList { items: items(&["b"]) },
                Block::UnorderedList { items: items(&["c"]) },
            ]
        );
    }

    #[test]
    fn test_blank_line_splits_list() {
        assert_eq!(
            parse(&["1. a", "", "2. b"]),
            vec![
                Block::OrderedList { items: items(&["a"]) },
                Block::OrderedList { items: items(&["b"]) },
            ]
        );
    }

    #[test]
    fn test_line_after_list_is_not_consumed() {
        assert_eq!(
            parse(&["- a", "tail"]),
            vec![
                Block::UnorderedList { items: items(&["a"]) },
                Block::Paragraph { html: "tail".into() },
            ]
        );
    }

    #[test]
    fn test_list_items_are_verbatim() {
        assert_eq!(
            parse(&["- **not bold**"]),
            vec![Block::UnorderedList {
                items: items(&["**not bold**"])
            }]
        );
    }

    #[test]
    fn test_paragraph_per_line() {
        assert_eq!(
            parse(&["one", "two"]),
            vec![
                Block::Paragraph { html: "one".into() },
                Block::Paragraph { html: "two".into() },
            ]
        );
    }

    #[test]
    fn test_escape_option_reaches_paragraphs() {
        let lines = ["a <b> *c*"];
        let mut blocks = Vec::new();
        let options = Options {
            escape_html: true,
            ..Options::default()
        };
        BlockParser::new_with_options(&lines, options).parse(&mut blocks);
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                html: "a &lt;b&gt; <em>c</em>".into()
            }]
        );
    }
}
