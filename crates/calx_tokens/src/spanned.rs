//! Locations of tokens within a source string

use std::fmt::{Display, Formatter};

/// A byte range within a source string
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// The byte offset this span starts at
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The length of this span in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets an empty span positioned at the end of this span
    pub fn end(&self) -> Self {
        Self::new(self.offset + self.len, 0)
    }

    /// Joins two spans, covering everything from the start of the earlier to the end of the later.
    pub fn join(self, other: Self) -> Self {
        let start = self.offset.min(other.offset);
        let end = (self.offset + self.len).max(other.offset + other.len);
        Self::new(start, end - start)
    }

    /// Gets the 1-based line and 0-based column of the start of this span in `src`.
    ///
    /// Offsets past the end of `src` are clamped to the end.
    pub fn line_col(&self, src: &str) -> (usize, usize) {
        let offset = self.offset.min(src.len());
        let before = &src[..floor_char_boundary(src, offset)];
        let line = before.matches('\n').count() + 1;
        let col = before
            .rfind('\n')
            .map_or(before.len(), |nl| before.len() - nl - 1);
        (line, col)
    }

    /// Renders the source line containing this span with a marker underneath.
    pub fn snippet<'a>(&self, src: &'a str) -> Snippet<'a> {
        Snippet { span: *self, src }
    }
}

fn floor_char_boundary(src: &str, mut offset: usize) -> usize {
    while !src.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Something with a location in the source
pub trait Spanned {
    /// Gets the span of this value
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

/// Display of a [Span] within its source, created by [Span::snippet]
#[derive(Debug, Clone, Copy)]
pub struct Snippet<'a> {
    span: Span,
    src: &'a str,
}

impl Display for Snippet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (line, col) = self.span.line_col(self.src);
        let src_line = self.src.lines().nth(line - 1).unwrap_or("");
        let width = line.to_string().len();
        writeln!(f, "  -> {line}:{col}")?;
        writeln!(f, "{line:width$} | {}", src_line.trim_end())?;
        if self.span.is_empty() {
            writeln!(f, "{}{}^", " ".repeat(width + 3), "-".repeat(col))
        } else {
            writeln!(
                f,
                "{}{}{}",
                " ".repeat(width + 3),
                " ".repeat(col),
                "~".repeat(self.span.len())
            )
        }
    }
}
