//! Strong and emphasis span matching.
//!
//! Both passes scan left to right for the leftmost opener that has a
//! closer, record the pair, and resume after the closer. Pairs never
//! overlap or nest within one pass.

use memchr::{memchr, memmem};
use smallvec::SmallVec;

/// A matched delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisMatch {
    /// Start of the opening delimiter.
    pub opener_start: usize,
    /// Start of the closing delimiter.
    pub closer_start: usize,
    /// Delimiter length (2 for strong, 1 for emphasis).
    pub count: usize,
}

impl EmphasisMatch {
    /// End of the opening delimiter, where content starts.
    #[inline]
    pub fn content_start(&self) -> usize {
        self.opener_start + self.count
    }

    /// End of the closing delimiter.
    #[inline]
    pub fn closer_end(&self) -> usize {
        self.closer_start + self.count
    }
}

/// Matches found in one line. Most lines hold only a handful.
pub type Matches = SmallVec<[EmphasisMatch; 8]>;

/// Find `**content**` pairs.
///
/// Content is the shortest non-empty run before the next `**` and may hold
/// a single `*`.
pub fn find_strong(text: &[u8]) -> Matches {
    let finder = memmem::Finder::new(b"**");
    let mut matches = Matches::new();
    let mut pos = 0;

    while let Some(offset) = finder.find(&text[pos..]) {
        let opener = pos + offset;
        // Content needs at least one byte, so the closer starts at opener + 3 or later.
        let search_from = opener + 3;
        if search_from > text.len() {
            break;
        }
        let Some(close_offset) = finder.find(&text[search_from..]) else {
            // No closer after this opener means none after any later opener either.
            break;
        };
        let closer = search_from + close_offset;
        matches.push(EmphasisMatch {
            opener_start: opener,
            closer_start: closer,
            count: 2,
        });
        pos = closer + 2;
    }

    matches
}

/// Find `*content*` pairs.
///
/// Content is non-empty and holds no `*`.
pub fn find_emphasis(text: &[u8]) -> Matches {
    let mut matches = Matches::new();
    let mut pos = 0;

    while let Some(offset) = memchr(b'*', &text[pos..]) {
        let opener = pos + offset;
        let Some(close_offset) = memchr(b'*', &text[opener + 1..]) else {
            break;
        };
        let closer = opener + 1 + close_offset;
        if closer == opener + 1 {
            // `**` with nothing between: the second star may still open.
            pos = closer;
            continue;
        }
        matches.push(EmphasisMatch {
            opener_start: opener,
            closer_start: closer,
            count: 1,
        });
        pos = closer + 1;
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(matches: &Matches, text: &str) -> Vec<String> {
        matches
            .iter()
            .map(|m| text[m.content_start()..m.closer_start].to_string())
            .collect()
    }

    #[test]
    fn test_strong_simple() {
        let text = "a **b** c **d**";
        let m = find_strong(text.as_bytes());
        assert_eq!(spans(&m, text), ["b", "d"]);
        assert_eq!(m[0].opener_start, 2);
        assert_eq!(m[0].closer_end(), 7);
    }

    #[test]
    fn test_strong_unterminated() {
        assert!(find_strong(b"**open").is_empty());
        assert!(find_strong(b"a ** b").is_empty());
    }

    #[test]
    fn test_strong_needs_content() {
        assert!(find_strong(b"****").is_empty());
        assert!(find_strong(b"***").is_empty());
    }

    #[test]
    fn test_strong_shortest_content() {
        let text = "***a**";
        assert_eq!(spans(&find_strong(text.as_bytes()), text), ["*a"]);
    }

    #[test]
    fn test_strong_single_star_inside() {
        let text = "**a*b**";
        assert_eq!(spans(&find_strong(text.as_bytes()), text), ["a*b"]);
    }

    #[test]
    fn test_strong_five_stars() {
        // Opener at 0, content "*", closer at 3.
        let text = "*****";
        let m = find_strong(text.as_bytes());
        assert_eq!(spans(&m, text), ["*"]);
    }

    #[test]
    fn test_emphasis_simple() {
        let text = "*a* and *b*";
        assert_eq!(spans(&find_emphasis(text.as_bytes()), text), ["a", "b"]);
    }

    #[test]
    fn test_emphasis_empty_pair_skipped() {
        let text = "**a*";
        assert_eq!(spans(&find_emphasis(text.as_bytes()), text), ["a"]);
        assert!(find_emphasis(b"**").is_empty());
    }

    #[test]
    fn test_emphasis_unterminated() {
        assert!(find_emphasis(b"2 * 3").is_empty());
    }

    #[test]
    fn test_emphasis_odd_stars() {
        let text = "*a*b*";
        assert_eq!(spans(&find_emphasis(text.as_bytes()), text), ["a"]);
    }

    #[test]
    fn test_multibyte_content() {
        let text = "**größe** und *ñ*";
        assert_eq!(spans(&find_strong(text.as_bytes()), text), ["größe"]);
        let text = "ein *ñandú* hier";
        assert_eq!(spans(&find_emphasis(text.as_bytes()), text), ["ñandú"]);
    }
}
