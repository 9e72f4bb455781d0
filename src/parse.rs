use nom::{
    Parser,
    character::complete::anychar,
    error::ErrorKind,
};

use crate::{IResult, parsing::consumed};

/// Parses one primitive value out of a single, already isolated token.
///
/// Implementations exist for every primitive a [`Primitive`](crate::Primitive) tag can
/// name. The parser must consume the whole token: `"12x"` is not a `u8`.
///
/// ```rust
/// use nmea0183_schema::{IResult, TokenParse};
///
/// let result: IResult<_, _> = u8::parse_token("08");
/// assert_eq!(result, Ok(("", 8)));
///
/// let result: IResult<_, _> = f64::parse_token("4807.038");
/// assert_eq!(result, Ok(("", 4807.038)));
///
/// let result: IResult<_, u8> = u8::parse_token("8a");
/// assert!(result.is_err());
/// ```
pub trait TokenParse: Sized {
    /// Parses the head of `i`, leaving whatever follows untouched.
    fn parse(i: &str) -> IResult<&str, Self>;

    /// Parses `i` as a whole token, failing when anything is left over.
    fn parse_token(i: &str) -> IResult<&str, Self> {
        consumed(Self::parse, ErrorKind::Eof).parse(i)
    }
}

macro_rules! impl_int_token {
    ($($t:tt),*) => ($(
        impl TokenParse for $t {
            fn parse(i: &str) -> IResult<&str, Self> {
                nom::character::complete::$t.parse(i)
            }
        }
    )*)
}

impl_int_token!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! impl_float_token {
    ($($t:ty, $p:ident),*) => ($(
        impl TokenParse for $t {
            fn parse(i: &str) -> IResult<&str, Self> {
                nom::number::complete::$p.parse(i)
            }
        }
    )*)
}

impl_float_token!(f32, float, f64, double);

impl TokenParse for char {
    fn parse(i: &str) -> IResult<&str, Self> {
        anychar.parse(i)
    }
}
