use calx_tokens::token::TokenKind;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, consumed, eof, map, map_parser, rest, value};
use nom::error::{context, VerboseError};
use nom::multi::many0_count;
use nom::sequence::pair;
use nom::IResult;
use tracing::debug;

use super::nom_helpers::recognize_identifier;

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parses the next token, skipping anything insignificant before it.
///
/// Returns the number of skipped bytes, the matched text and its kind. At the end of the input
/// the kind is [TokenKind::EndOfInput] with empty text.
pub fn parse_token(src: &str) -> Result<'_, (usize, &str, TokenKind)> {
    context(
        "token",
        map(
            pair(consumed(parse_insignificant), consumed(_parse_token)),
            |((skipped, _), (text, kind))| (skipped.len(), text, kind),
        ),
    )(src)
}

fn _parse_token(src: &str) -> Result<'_, TokenKind> {
    alt((
        parse_eof,
        parse_word,
        parse_number,
        parse_operator,
        parse_punctuation,
    ))(src)
}

fn parse_eof(src: &str) -> Result<'_, TokenKind> {
    context("eof", value(TokenKind::EndOfInput, eof))(src)
}

fn parse_word(src: &str) -> Result<'_, TokenKind> {
    context(
        "word",
        map_parser(recognize_identifier, alt((parse_keyword, parse_identifier))),
    )(src)
}

fn parse_keyword(src: &str) -> Result<'_, TokenKind> {
    context(
        "keyword",
        value(TokenKind::IntKeyword, all_consuming(tag("int"))),
    )(src)
}

fn parse_identifier(src: &str) -> Result<'_, TokenKind> {
    context("identifier", value(TokenKind::Identifier, rest))(src)
}

fn parse_number(src: &str) -> Result<'_, TokenKind> {
    context("number", value(TokenKind::Number, digit1))(src)
}

fn parse_operator(src: &str) -> Result<'_, TokenKind> {
    context(
        "operator",
        alt((
            value(TokenKind::Assign, char('=')),
            value(TokenKind::Plus, char('+')),
            value(TokenKind::Multiply, char('*')),
            value(TokenKind::LParen, char('(')),
            value(TokenKind::RParen, char(')')),
        )),
    )(src)
}

fn parse_punctuation(src: &str) -> Result<'_, TokenKind> {
    context("punctuation", value(TokenKind::Semicolon, char(';')))(src)
}

/// Whether a token could begin with `c`.
///
/// Every token parser succeeds once its first char is present, so anything else can be skipped.
fn is_token_start(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '=' | '+' | '*' | '(' | ')' | ';')
}

fn parse_unrecognized(src: &str) -> Result<'_, &str> {
    let (rest, skipped) =
        take_while1(|c: char| !c.is_whitespace() && !is_token_start(c))(src)?;
    debug!(skipped, "skipping unrecognized characters");
    Ok((rest, skipped))
}

fn parse_insignificant(src: &str) -> Result<'_, ()> {
    context(
        "insignificant",
        map(
            many0_count(alt((
                context("whitespace", take_while1(char::is_whitespace)),
                context("unrecognized", parse_unrecognized),
            ))),
            |_| (),
        ),
    )(src)
}
