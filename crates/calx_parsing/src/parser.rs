//! Syntactic validation of a token sequence

use calx_tokens::token::{Token, TokenKind, TokenSequence};
use tracing::trace;

mod error;
mod grammar;

pub use error::*;

/// Validates a token sequence against the grammar by recursive descent.
///
/// The parser only moves forward, one token at a time, and never backtracks. Nothing is built
/// while parsing; a non terminal either consumes the tokens it matches or fails.
///
/// # Examples
/// ```
/// # use calx_parsing::lexer::tokenize;
/// # use calx_parsing::parser::SyntacticParser;
/// let tokens = tokenize("int x = 1 + 2;");
/// let mut parser = SyntacticParser::new(&tokens);
/// parser.program().unwrap();
/// assert_eq!(parser.cursor(), 7);
/// ```
#[derive(Debug)]
pub struct SyntacticParser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    non_terminals: Vec<&'static str>,
}

impl<'t> SyntacticParser<'t> {
    /// Creates a new parser positioned at the first token of `tokens`
    pub fn new(tokens: &'t TokenSequence) -> Self {
        Self {
            tokens: tokens.as_slice(),
            cursor: 0,
            non_terminals: vec![],
        }
    }

    /// The index of the current token
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// peek the current token
    fn peek(&self) -> &'t Token {
        // the cursor never moves past the end marker
        &self.tokens[self.cursor]
    }

    fn consume(&mut self) -> &'t Token {
        let token = self.peek();
        if token.kind() != TokenKind::EndOfInput {
            self.cursor += 1;
        }
        trace!("consumed {token:?}, cursor={}", self.cursor);
        token
    }

    /// consumes if the current token is of the given kind
    fn consume_if(&mut self, kind: TokenKind) -> Option<&'t Token> {
        if self.peek().kind() == kind {
            Some(self.consume())
        } else {
            None
        }
    }

    /// Consumes the current token if it's of the given kind, otherwise fails
    pub fn expect(&mut self, kind: TokenKind) -> SyntaxResult<&'t Token> {
        self.consume_if(kind).ok_or_else(|| self.error([kind]))
    }

    /// Wrapper function for parsing a non terminal
    fn non_terminal<O, F>(&mut self, name: &'static str, parser: F) -> SyntaxResult<O>
    where
        F: FnOnce(&mut Self) -> SyntaxResult<O>,
    {
        trace!("starting parsing {name} at cursor={}", self.cursor);
        self.non_terminals.push(name);
        let r = parser(self);
        self.non_terminals.pop();
        trace!("after parsing {name} cursor={} ok={}", self.cursor, r.is_ok());
        r
    }

    fn error(&self, expected: impl IntoIterator<Item = TokenKind>) -> SyntaxError {
        SyntaxError::new(expected, self.peek().clone(), self.non_terminals.clone())
    }
}
