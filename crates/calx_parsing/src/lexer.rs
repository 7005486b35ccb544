//! Responsible with converting source text into a [TokenSequence]

use crate::lexer::token_parsing::parse_token;
use calx_tokens::spanned::Span;
use calx_tokens::token::{Token, TokenKind, TokenSequence};
use tracing::{debug, instrument, trace};

mod nom_helpers;
mod token_parsing;

/// Responsible with converting source text into tokens.
///
/// The lexer never fails: whitespace and characters that can not start a token are skipped.
/// The end of input marker is not yielded, use [tokenize] to get a complete [TokenSequence].
#[derive(Debug, Clone)]
pub struct Lexer<'s> {
    src: &'s str,
    offset: usize,
}

impl<'s> Lexer<'s> {
    /// Creates a new lexer
    pub fn new(src: &'s str) -> Self {
        Self { src, offset: 0 }
    }

    /// The byte offset of the next unscanned character
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn next_token(&mut self) -> Option<Token> {
        while self.offset < self.src.len() {
            let remaining = &self.src[self.offset..];
            match parse_token(remaining) {
                Ok((_, (skipped, _, TokenKind::EndOfInput))) => {
                    self.offset += skipped;
                    return None;
                }
                Ok((_, (skipped, text, kind))) => {
                    let span = Span::new(self.offset + skipped, text.len());
                    self.offset += skipped + text.len();
                    let token = Token::new(span, kind, text);
                    trace!("lexed {token:?} at {span:?}");
                    return Some(token);
                }
                Err(e) => {
                    let skip = remaining.chars().next().map_or(1, char::len_utf8);
                    debug!("skipping {skip} byte(s) at offset {}: {e:?}", self.offset);
                    self.offset += skip;
                }
            }
        }
        None
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenizes `src`, terminating the sequence with the end of input marker.
#[instrument(skip_all, fields(len = src.len()))]
pub fn tokenize(src: &str) -> TokenSequence {
    let tokens = TokenSequence::new(Lexer::new(src), Span::new(src.len(), 0));
    debug!("lexed {} token(s)", tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use calx_tokens::spanned::Spanned;
    use test_log::test;
    use TokenKind::*;

    fn lexed(src: &str) -> Vec<(TokenKind, &str)> {
        let tokens = tokenize(src);
        tokens
            .iter()
            .map(|t| (t.kind(), &src[t.span().offset()..][..t.text().len()]))
            .collect()
    }

    #[test]
    fn test_lexer() {
        let tokens = tokenize("int x = (2 + 3) * 4;");
        let rendered = tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        assert_eq!(
            rendered,
            [
                "IntKeyword: int",
                "Identifier: x",
                "Assign: =",
                "LParen: (",
                "Number: 2",
                "Plus: +",
                "Number: 3",
                "RParen: )",
                "Multiply: *",
                "Number: 4",
                "Semicolon: ;",
                "EndOfInput: ",
            ]
        );
    }

    #[test]
    fn test_spans_match_text() {
        let src = "  int  abc=12 ;";
        let found = lexed(src);
        assert_eq!(
            found,
            [
                (IntKeyword, "int"),
                (Identifier, "abc"),
                (Assign, "="),
                (Number, "12"),
                (Semicolon, ";"),
                (EndOfInput, ""),
            ]
        );
        let tokens = tokenize(src);
        assert_eq!(tokens[1].span(), Span::new(7, 3));
        assert_eq!(tokens[5].span(), Span::new(src.len(), 0));
    }

    #[test]
    fn test_empty_input() {
        for src in ["", "   ", "\n\t \r\n"] {
            let tokens = tokenize(src);
            assert_eq!(tokens.kinds().collect::<Vec<_>>(), [EndOfInput], "{src:?}");
            assert_eq!(tokens[0].text(), "");
        }
    }

    #[test]
    fn test_unrecognized_chars_are_skipped() {
        let tokens = tokenize("int $x = 1 - 2 / 3 é;");
        assert_eq!(
            tokens.kinds().collect::<Vec<_>>(),
            [IntKeyword, Identifier, Assign, Number, Number, Number, Semicolon, EndOfInput]
        );
    }

    #[test]
    fn test_only_unrecognized() {
        let tokens = tokenize("#$%^&");
        assert_eq!(tokens.kinds().collect::<Vec<_>>(), [EndOfInput]);
    }

    #[test]
    fn test_keyword_is_whole_word() {
        assert_eq!(
            lexed("int integer int_x"),
            [
                (IntKeyword, "int"),
                (Identifier, "integer"),
                (Identifier, "int_x"),
                (EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_maximal_digit_runs() {
        assert_eq!(
            lexed("007 12ab 3.5"),
            [
                (Number, "007"),
                (Number, "12"),
                (Identifier, "ab"),
                (Number, "3"),
                (Number, "5"),
                (EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_exactly_one_end_marker() {
        for src in ["", "int", ";;;", "int x = 1 +", "((((", "  🦀 int"] {
            let tokens = tokenize(src);
            let markers = tokens.kinds().filter(|k| *k == EndOfInput).count();
            assert_eq!(markers, 1, "{src:?}");
            assert_eq!(tokens[tokens.len() - 1].kind(), EndOfInput);
        }
    }

    #[test]
    fn test_lexer_iterator_excludes_marker() {
        let mut lexer = Lexer::new("x ;  ");
        assert_eq!(lexer.next().map(|t| t.kind()), Some(Identifier));
        assert_eq!(lexer.next().map(|t| t.kind()), Some(Semicolon));
        assert!(lexer.next().is_none());
        assert_eq!(lexer.offset(), 5);
    }
}
