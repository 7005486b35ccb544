use calx_tokens::spanned::Spanned;
use calx_tokens::token::{Token, TokenKind, TokenSequence};
use tracing::{debug, instrument, warn};

/// Folds every adjacent `Number + Number` triplet into a single number, in one left to right pass.
///
/// After a fold the same position is examined again, so `1 + 2 + 3` folds all the way down to `6`.
/// Only the flat token order is considered: `(2 + 3) * 4` becomes `(5) * 4` and `2 * 3 + 4`
/// becomes `2 * 7`.
#[instrument(skip_all, fields(len = tokens.len()))]
pub fn fold(mut tokens: TokenSequence) -> TokenSequence {
    let mut i = 0;
    while i + 3 <= tokens.len() {
        match fold_window(&tokens.as_slice()[i..i + 3]) {
            Some(folded) => {
                debug!("folding tokens {}..{} into {folded:?}", i, i + 3);
                tokens.replace_window(i..i + 3, folded);
            }
            None => i += 1,
        }
    }
    tokens
}

fn fold_window(window: &[Token]) -> Option<Token> {
    let [lhs, op, rhs] = window else {
        return None;
    };
    if !matches!(
        (lhs.kind(), op.kind(), rhs.kind()),
        (TokenKind::Number, TokenKind::Plus, TokenKind::Number)
    ) {
        return None;
    }
    let sum = lhs
        .text()
        .parse::<i64>()
        .ok()
        .zip(rhs.text().parse::<i64>().ok())
        .and_then(|(l, r)| l.checked_add(r));
    match sum {
        Some(sum) => Some(Token::new(
            lhs.span().join(rhs.span()),
            TokenKind::Number,
            sum.to_string(),
        )),
        None => {
            warn!(
                "can not fold {} + {}, the result does not fit in an i64",
                lhs.text(),
                rhs.text()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calx_parsing::tokenize;
    use calx_tokens::spanned::Span;
    use test_log::test;

    fn folded(src: &str) -> Vec<String> {
        fold(tokenize(src)).iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_fold_single_pair() {
        assert_eq!(folded("1 + 2"), ["Number: 3", "EndOfInput: "]);
    }

    #[test]
    fn test_fold_chain() {
        assert_eq!(
            folded("int x = 1 + 2 + 3 + 4;"),
            [
                "IntKeyword: int",
                "Identifier: x",
                "Assign: =",
                "Number: 10",
                "Semicolon: ;",
                "EndOfInput: "
            ]
        );
    }

    #[test]
    fn test_fold_ignores_precedence() {
        assert_eq!(
            folded("2 + 3 * 4"),
            ["Number: 5", "Multiply: *", "Number: 4", "EndOfInput: "]
        );
        assert_eq!(
            folded("2 * 3 + 4"),
            ["Number: 2", "Multiply: *", "Number: 7", "EndOfInput: "]
        );
    }

    #[test]
    fn test_fold_inside_parentheses() {
        assert_eq!(
            folded("(1 + 2) + (3 + 4)"),
            [
                "LParen: (",
                "Number: 3",
                "RParen: )",
                "Plus: +",
                "LParen: (",
                "Number: 7",
                "RParen: )",
                "EndOfInput: "
            ]
        );
    }

    #[test]
    fn test_no_multiplication_folding() {
        assert_eq!(
            folded("2 * 3"),
            ["Number: 2", "Multiply: *", "Number: 3", "EndOfInput: "]
        );
    }

    #[test]
    fn test_short_sequences() {
        assert_eq!(folded(""), ["EndOfInput: "]);
        assert_eq!(folded("1"), ["Number: 1", "EndOfInput: "]);
        assert_eq!(folded("1 +"), ["Number: 1", "Plus: +", "EndOfInput: "]);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(folded("007 + 1"), ["Number: 8", "EndOfInput: "]);
    }

    #[test]
    fn test_overflow_is_not_folded() {
        let src = "9223372036854775807 + 1 + 1";
        assert_eq!(
            folded(src),
            [
                "Number: 9223372036854775807",
                "Plus: +",
                "Number: 2",
                "EndOfInput: "
            ]
        );
        let src = "99999999999999999999 + 1";
        assert_eq!(fold(tokenize(src)), tokenize(src));
    }

    #[test]
    fn test_folded_span() {
        let tokens = fold(tokenize("x = 12 + 345;"));
        assert_eq!(tokens[2].span(), Span::new(4, 8));
    }

    #[test]
    fn test_idempotent_without_triplets() {
        for src in ["int x = 2 * 3;", "int x = (2) + (3);", "1 2 + + 3", ""] {
            let once = fold(tokenize(src));
            assert_eq!(once, tokenize(src), "{src:?}");
            assert_eq!(fold(once.clone()), once, "{src:?}");
        }
    }
}
