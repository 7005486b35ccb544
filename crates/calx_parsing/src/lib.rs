#![doc = include_str!("../README.md")]

use calx_tokens::token::TokenSequence;
use crate::parser::{SyntacticParser, SyntaxResult};

pub mod lexer;
pub mod parser;

pub use lexer::tokenize;

/// Validates that `tokens` start with exactly one complete program.
///
/// Nothing is built, parsing either succeeds or stops at the first mismatch.
pub fn parse(tokens: &TokenSequence) -> SyntaxResult {
    SyntacticParser::new(tokens).program()
}
