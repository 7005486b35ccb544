//! nom helpers

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, alphanumeric1};
use nom::combinator::recognize;
use nom::error::ParseError;
use nom::multi::many0_count;
use nom::sequence::pair;
use nom::IResult;

/// Recognizes a letter or underscore followed by any number of letters, digits and underscores
pub fn recognize_identifier<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, &'a str, E> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::recognize_identifier;
    use nom::Finish;

    #[test]
    fn test_one_letter_variable() {
        let (rest, parsed) = recognize_identifier::<nom::error::Error<_>>("i ")
            .finish()
            .unwrap();
        assert_eq!(parsed, "i");
        assert_eq!(rest, " ");
    }

    #[test]
    fn test_underscores_and_digits() {
        let (rest, parsed) = recognize_identifier::<nom::error::Error<_>>("_a1_b2+")
            .finish()
            .unwrap();
        assert_eq!(parsed, "_a1_b2");
        assert_eq!(rest, "+");
    }

    #[test]
    fn test_leading_digit_rejected() {
        assert!(recognize_identifier::<nom::error::Error<_>>("1a").is_err());
    }
}
