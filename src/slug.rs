//! Heading id generation.

use rustc_hash::FxBuildHasher as FastHashBuilder;
use std::collections::HashMap;

/// Fallback id for headings whose text yields an empty slug.
const EMPTY_SLUG: &str = "heading";

/// Turn heading text into an id: lowercase, whitespace to `-`, keep
/// alphanumerics, `-` and `_`, drop everything else.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            out.extend(ch.to_lowercase());
        } else if ch.is_whitespace() {
            out.push('-');
        }
    }
    if out.is_empty() {
        out.push_str(EMPTY_SLUG);
    }
    out
}

/// Hands out unique heading ids within one document.
///
/// Repeats get `-1`, `-2`, ... appended in order of appearance.
#[derive(Debug, Default)]
pub struct HeadingSlugger {
    seen: HashMap<String, usize, FastHashBuilder>,
}

impl HeadingSlugger {
    /// Create a slugger with no ids handed out yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique id for a heading.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let id = if *count == 0 {
            base
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        id
    }
}
