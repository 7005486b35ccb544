//! A lexical token from a source string, along with sequences of said tokens

use crate::spanned::{Span, Spanned};
use itertools::Itertools as _;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, Range};
use std::slice;

/// A lexical token from a source string
#[derive(Clone)]
pub struct Token {
    span: Span,
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a new token
    pub fn new(span: Span, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            span,
            kind,
            text: text.into(),
        }
    }

    /// Creates the end of input marker, placed at `span`
    pub fn end_of_input(span: Span) -> Self {
        Self::new(span, TokenKind::EndOfInput, "")
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the exact source text matched by this token
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

/// The kind for this token
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum TokenKind {
    /// `int`
    IntKeyword,
    Identifier,
    /// =
    Assign,
    Number,
    /// +
    Plus,
    /// *
    Multiply,
    /// (
    LParen,
    /// )
    RParen,
    /// ;
    Semicolon,
    /// will only appear at the end of a [TokenSequence]
    EndOfInput,
}

/// An ordered sequence of tokens, always terminated by exactly one [TokenKind::EndOfInput].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    /// Creates a sequence from `tokens`, appending the end marker at `end`.
    ///
    /// # Panics
    /// If `tokens` already contains an end marker.
    pub fn new(tokens: impl IntoIterator<Item = Token>, end: Span) -> Self {
        let mut tokens = tokens.into_iter().collect::<Vec<_>>();
        assert!(
            tokens.iter().all(|t| t.kind != TokenKind::EndOfInput),
            "end of input marker may only be placed by the sequence"
        );
        tokens.push(Token::end_of_input(end));
        Self(tokens)
    }

    /// The number of tokens, including the end marker
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this sequence holds nothing but the end marker
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.len() == 1
    }

    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    /// Gets the kinds of every token in order
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.0.iter().map(Token::kind)
    }

    /// Replaces the tokens in `window` with the single token `with`.
    ///
    /// # Panics
    /// If `window` is empty, out of bounds, covers the end marker, or `with` is an end marker.
    pub fn replace_window(&mut self, window: Range<usize>, with: Token) {
        assert!(
            !window.is_empty() && window.end < self.0.len(),
            "window {window:?} must be non-empty and may not cover the end marker (len = {})",
            self.0.len()
        );
        assert_ne!(with.kind, TokenKind::EndOfInput);
        self.0.splice(window, [with]);
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.0
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for TokenSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}
