use calx_tokens::spanned::{Span, Spanned};
use calx_tokens::token::{Token, TokenKind};
use itertools::Itertools as _;
use std::fmt::{Display, Formatter};

/// Represents an error occurring during parsing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub struct SyntaxError {
    expected: Vec<TokenKind>,
    found: Token,
    non_terminal_stack: Vec<&'static str>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(
        expected: impl IntoIterator<Item = TokenKind>,
        found: Token,
        non_terminal_stack: impl Into<Vec<&'static str>>,
    ) -> Self {
        Self {
            expected: expected.into_iter().collect(),
            found,
            non_terminal_stack: non_terminal_stack.into(),
        }
    }

    /// The token kinds that would have been accepted
    pub fn expected(&self) -> &[TokenKind] {
        &self.expected
    }

    /// The token that was found instead
    pub fn found(&self) -> &Token {
        &self.found
    }

    /// The non terminals being parsed when the error occurred, outermost first
    pub fn non_terminal_stack(&self) -> &[&'static str] {
        &self.non_terminal_stack
    }

    /// Displays this error along with its location within `src`
    pub fn report<'a>(&'a self, src: &'a str) -> Report<'a> {
        Report { error: self, src }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "syntax error: expected {}, found {}",
            self.expected.iter().join(" or "),
            self.found.kind()
        )?;
        if !self.found.text().is_empty() {
            write!(f, " {:?}", self.found.text())?;
        }
        Ok(())
    }
}

impl Spanned for SyntaxError {
    fn span(&self) -> Span {
        self.found.span()
    }
}

/// A [SyntaxError] rendered with its source, created by [SyntaxError::report]
#[derive(Debug)]
pub struct Report<'a> {
    error: &'a SyntaxError,
    src: &'a str,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.error)?;
        write!(f, "{}", self.error.span().snippet(self.src))?;
        if !self.error.non_terminal_stack.is_empty() {
            writeln!(f, "non terminal stack:")?;
            for (idx, non_terminal) in self.error.non_terminal_stack.iter().enumerate() {
                writeln!(f, "  {}: {}", idx, non_terminal)?;
            }
        }
        Ok(())
    }
}

pub type SyntaxResult<T = ()> = Result<T, SyntaxError>;
