//! # Parsing Utilities
//!
//! Small combinators shared by sentence framing and batch tokenizing.

use nom::{
    Err, Input, Parser,
    bytes::complete::{take, take_till},
    character::complete::char,
    combinator::{rest_len, verify},
    error::{ErrorKind, ParseError},
    sequence::terminated,
};

use crate::{Error, IResult};

/// Ensures that the parser consumes all input.
///
/// # Examples
///
/// ```rust
/// use nmea0183_schema::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// let result: IResult<_, _> = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    terminated(
        f,
        verify(rest_len, |len| len == &0)
            .or(move |i| Err(Err::Error(nom::error::make_error(i, e)))),
    )
}

/// Takes one comma-terminated token of a decoding batch.
///
/// Rows in a batch end with `,\n`, so every token, the last one included, is
/// followed by a comma. The token itself may be empty.
///
/// ```rust
/// use nmea0183_schema::{IResult, parsing::comma_token};
///
/// let result: IResult<_, _> = comma_token("4807.038,N,\n");
/// assert_eq!(result, Ok(("N,\n", "4807.038")));
///
/// let result: IResult<_, _> = comma_token(",\n");
/// assert_eq!(result, Ok(("\n", "")));
///
/// let result: IResult<_, &str> = comma_token("E\n");
/// assert!(result.is_err());
/// ```
pub fn comma_token(i: &str) -> IResult<&str, &str> {
    terminated(take_till(|c| c == ',' || c == '\n'), char(',')).parse(i)
}

/// Splits a fixed-width prefix off a token, returning `(remainder, prefix)`.
///
/// An empty token yields an empty prefix and an empty remainder; a non-empty token
/// shorter than `width` is an invalid field.
///
/// ```rust
/// use nmea0183_schema::{IResult, parsing::split_width};
///
/// let result: IResult<_, _> = split_width(2)("4807.038");
/// assert_eq!(result, Ok(("07.038", "48")));
///
/// let result: IResult<_, _> = split_width(3)("");
/// assert_eq!(result, Ok(("", "")));
///
/// let result: IResult<_, &str> = split_width(2)("4");
/// assert!(result.is_err());
/// ```
pub fn split_width<'a>(width: usize) -> impl Fn(&'a str) -> IResult<&'a str, &'a str> {
    move |i: &'a str| {
        if i.is_empty() {
            return Ok((i, i));
        }

        take(width)
            .parse(i)
            .map_err(|_: Err<Error<&'a str, nom::error::Error<&'a str>>>| {
                Err::Error(Error::InvalidField(i))
            })
    }
}

/// Requires a token to be exactly `expected`.
///
/// ```rust
/// use nmea0183_schema::{IResult, parsing::literal};
///
/// let result: IResult<_, _> = literal("M", "M");
/// assert_eq!(result, Ok(("", ())));
///
/// let result: IResult<_, _> = literal("M", "m");
/// assert!(result.is_err());
/// ```
pub fn literal<'a>(expected: &str, i: &'a str) -> IResult<&'a str, ()> {
    if i == expected {
        Ok(("", ()))
    } else {
        Err(Err::Error(Error::LiteralMismatch {
            expected: expected.to_owned(),
            found: i,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal() {
        assert_eq!(literal("T", "T"), Ok(("", ())));

        let result = literal("M", "");
        assert_eq!(
            result,
            Err(Err::Error(Error::LiteralMismatch {
                expected: "M".to_owned(),
                found: "",
            }))
        );
    }

    #[test]
    fn test_comma_token_run() {
        let mut i = "1,,3,\n";
        let mut tokens = Vec::new();
        while let Ok((rest, token)) = comma_token(i) {
            tokens.push(token);
            i = rest;
        }

        assert_eq!(tokens, ["1", "", "3"]);
        assert_eq!(i, "\n");
    }
}
