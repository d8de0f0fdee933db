//! Inline transform for paragraph lines.
//!
//! Two passes over a single line:
//! 1. `**content**` becomes `<strong>content</strong>`
//! 2. `*content*` becomes `<em>content</em>`
//!
//! Strong runs first so its delimiters are gone before the emphasis pass
//! looks for single stars. Unmatched stars stay literal.

mod emphasis;

pub use emphasis::{find_emphasis, find_strong, EmphasisMatch, Matches};

use crate::escape;
use crate::Options;

/// Render one paragraph line to an HTML fragment.
///
/// Text is escaped first only when [`Options::escape_html`] is set. Escaping
/// never produces `*`, so emphasis matching is the same either way.
pub fn render_paragraph(line: &str, options: &Options) -> String {
    if options.escape_html {
        render_inline(&escape::escape_text(line))
    } else {
        render_inline(line)
    }
}

/// Apply the strong pass, then the emphasis pass.
///
/// # Example
/// ```
/// use lecturemark::inline::render_inline;
///
/// assert_eq!(
///     render_inline("Some *text* with **bold**."),
///     "Some <em>text</em> with <strong>bold</strong>."
/// );
/// ```
pub fn render_inline(text: &str) -> String {
    let strong = find_strong(text.as_bytes());
    let mut after_strong = String::with_capacity(text.len() + strong.len() * 15);
    write_matches(&mut after_strong, text, &strong, "strong");

    let em = find_emphasis(after_strong.as_bytes());
    if em.is_empty() {
        return after_strong;
    }
    let mut out = String::with_capacity(after_strong.len() + em.len() * 7);
    write_matches(&mut out, &after_strong, &em, "em");
    out
}

/// Copy `text` into `out`, wrapping each match's content in `tag`.
fn write_matches(out: &mut String, text: &str, matches: &[EmphasisMatch], tag: &str) {
    let mut pos = 0;
    for m in matches {
        out.push_str(&text[pos..m.opener_start]);
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&text[m.content_start()..m.closer_start]);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        pos = m.closer_end();
    }
    out.push_str(&text[pos..]);
}
