//! HTML output writer.

use crate::block::{Block, HeadingLevel};
use crate::escape;
use crate::slug::HeadingSlugger;
use crate::Options;

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use lecturemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(1000);
/// writer.write_str("<p>");
/// writer.write_escaped_text("Hello <World>");
/// writer.write_str("</p>");
///
/// let html = writer.into_string();
/// assert_eq!(html, "<p>Hello &lt;World&gt;</p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags add roughly a quarter on top of the note text.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Create a writer that appends to an existing buffer.
    #[inline]
    pub fn from_buffer(out: String) -> Self {
        Self { out }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write text with HTML escaping.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write a double-quoted attribute value with escaping.
    #[inline]
    pub fn write_escaped_attr(&mut self, value: &str) {
        html_escape::encode_double_quoted_attribute_to_string(value, &mut self.out);
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- Block Elements ---

    /// Write heading start: `<hN>` or `<hN id="...">`
    #[inline]
    pub fn heading_start(&mut self, level: HeadingLevel, id: Option<&str>) {
        self.out.push_str("<h");
        self.out.push(char::from(b'0' + level.as_u8()));
        if let Some(id) = id {
            self.out.push_str(" id=\"");
            self.write_escaped_attr(id);
            self.out.push('"');
        }
        self.out.push('>');
    }

    /// Write heading end: `</hN>\n`
    #[inline]
    pub fn heading_end(&mut self, level: HeadingLevel) {
        self.out.push_str("</h");
        self.out.push(char::from(b'0' + level.as_u8()));
        self.out.push_str(">\n");
    }

    /// Write thematic break: `<hr />\n`
    #[inline]
    pub fn thematic_break(&mut self) {
        self.write_str("<hr />\n");
    }

    /// Write a list with escaped items.
    pub fn list(&mut self, tag: &str, items: &[String]) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(">\n");
        for item in items {
            self.write_str("<li>");
            self.write_escaped_text(item);
            self.write_str("</li>\n");
        }
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    /// Write a paragraph around an already-rendered fragment.
    #[inline]
    pub fn paragraph(&mut self, html: &str) {
        self.write_str("<p>");
        self.write_str(html);
        self.write_str("</p>\n");
    }
}

/// Write a block sequence as HTML.
///
/// Heading text and list items are plain text and get escaped. Paragraph
/// fragments are written unchanged.
pub fn write_blocks(writer: &mut HtmlWriter, blocks: &[Block], options: &Options) {
    let mut slugger = options.heading_ids.then(HeadingSlugger::new);

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let id = slugger.as_mut().map(|s| s.slug(text));
                writer.heading_start(*level, id.as_deref());
                writer.write_escaped_text(text);
                writer.heading_end(*level);
            }
            Block::Rule => writer.thematic_break(),
            Block::UnorderedList { items } => writer.list("ul", items),
            Block::OrderedList { items } => writer.list("ol", items),
            Block::Paragraph { html } => writer.paragraph(html),
        }
    }
}
