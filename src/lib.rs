//! lecturemark: Markdown subset renderer for course lecture notes
//!
//! Notes attached to course videos use a small, fixed subset of Markdown:
//! `#`/`##`/`###` headings, horizontal rules, `- ` and `N. ` lists,
//! `**bold**` and `*italic*` spans, and one paragraph per line. This crate
//! turns that text into an ordered list of [`Block`]s for a host UI to map
//! onto elements, or straight into HTML.
//!
//! # Design Principles
//! - Line-oriented: one forward pass, no backtracking, one line of lookahead
//! - No regex: byte-level scanning with `memchr`
//! - Total: every input renders, malformed markup stays literal text
//! - Pure: no state survives between calls

pub mod block;
pub mod cursor;
pub mod escape;
pub mod inline;
pub mod preprocess;
pub mod record;
pub mod render;
pub mod slug;

// Re-export primary types
pub use block::{Block, BlockParser, BlockSequence, HeadingLevel};
pub use record::VideoRecord;
pub use render::HtmlWriter;

/// Parsing/rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Escape `&`, `<`, `>` and `"` in paragraph text before emphasis is
    /// applied.
    ///
    /// Off by default: paragraph fragments carry any HTML the author wrote,
    /// which is only safe when notes come from trusted authors.
    pub escape_html: bool,
    /// Emit `id` attributes on headings in HTML output.
    pub heading_ids: bool,
}

/// Render lecture notes into blocks, treating absent notes as empty.
///
/// This is the entry point for note fields that may be missing from a
/// record.
///
/// # Example
/// ```
/// use lecturemark::{render_markdown_subset, Block, HeadingLevel};
///
/// let blocks = render_markdown_subset(Some("# Title\n\nSome *text* with **bold**."));
/// assert_eq!(
///     blocks,
///     vec![
///         Block::Heading { level: HeadingLevel::H1, text: "Title".into() },
///         Block::Paragraph { html: "Some <em>text</em> with <strong>bold</strong>.".into() },
///     ]
/// );
/// assert!(render_markdown_subset(None).is_empty());
/// ```
pub fn render_markdown_subset(raw: Option<&str>) -> BlockSequence {
    parse(raw.unwrap_or_default())
}

/// Parse lecture notes into blocks.
pub fn parse(input: &str) -> BlockSequence {
    parse_with_options(input, &Options::default())
}

/// Parse lecture notes into blocks with options.
pub fn parse_with_options(input: &str, options: &Options) -> BlockSequence {
    let normalized = preprocess::normalize_escaped_newlines(input);
    let lines = preprocess::split_lines(&normalized);

    let mut blocks = Vec::with_capacity((lines.len() / 2).max(4));
    BlockParser::new_with_options(&lines, *options).parse(&mut blocks);
    blocks
}

/// Convert lecture notes to HTML.
///
/// # Example
/// ```
/// let html = lecturemark::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert lecture notes to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let blocks = parse_with_options(input, options);
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render::write_blocks(&mut writer, &blocks, options);
    writer.into_string()
}

/// Convert lecture notes to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn to_html_into(input: &str, out: &mut String) {
    let blocks = parse(input);
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::from_buffer(std::mem::take(out));
    render::write_blocks(&mut writer, &blocks, &Options::default());
    *out = writer.into_string();
}

/// Render an existing block sequence to HTML.
pub fn blocks_to_html(blocks: &[Block], options: &Options) -> String {
    let mut writer = HtmlWriter::new();
    render::write_blocks(&mut writer, blocks, options);
    writer.into_string()
}
