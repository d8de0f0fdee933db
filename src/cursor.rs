//! Forward-only cursor over the lines of a note.
//!
//! The block builder never looks back and never looks further ahead than
//! the line under the cursor.

/// A cursor over a slice of lines.
///
/// # Example
/// ```
/// use lecturemark::cursor::LineCursor;
///
/// let lines = ["- a", "- b", "tail"];
/// let mut cursor = LineCursor::new(&lines);
///
/// let items: Vec<_> = cursor.take_while_map(|l| l.strip_prefix("- ")).collect();
/// assert_eq!(items, ["a", "b"]);
/// assert_eq!(cursor.peek(), Some("tail"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor at the first line.
    #[inline]
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, pos: 0 }
    }

    /// Index of the line under the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of lines not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.lines.len() - self.pos
    }

    /// Check if every line has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// The line under the cursor.
    #[inline]
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Advance past the current line.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.pos += 1;
    }

    /// Consume and return the current line.
    #[inline]
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consume lines while `f` maps them to `Some`, yielding the mapped values.
    ///
    /// The first line mapped to `None` is left under the cursor.
    pub fn take_while_map<T, F>(&mut self, mut f: F) -> impl Iterator<Item = T>
    where
        F: FnMut(&'a str) -> Option<T>,
    {
        std::iter::from_fn(move || {
            let mapped = f(self.peek()?)?;
            self.pos += 1;
            Some(mapped)
        })
    }
}
