//! # Batch Tokenizer
//!
//! Decodes the contents of every sentence of one message type against the
//! schema's token format in a single pass.
//!
//! The contents are joined into one batch, each row terminated by `,\n`. With
//! the added trailing comma every token, including an empty last one, is a
//! comma-terminated token, so an omitted trailing field can never shift the
//! columns of a row.

use nom::{Offset, Parser, character::complete::char};

use crate::{
    DecodeError, Error, IResult, MessageSchema, Primitive, TokenFormat, TokenKind, TokenParse,
    Value,
    parsing::{comma_token, literal, split_width},
};

impl Primitive {
    /// The value an empty token decodes to.
    pub fn absent(self) -> Value {
        match self {
            Primitive::I8 => Value::I8(None),
            Primitive::I16 => Value::I16(None),
            Primitive::I32 => Value::I32(None),
            Primitive::I64 => Value::I64(None),
            Primitive::U8 => Value::U8(None),
            Primitive::U16 => Value::U16(None),
            Primitive::U32 => Value::U32(None),
            Primitive::U64 => Value::U64(None),
            Primitive::F32 => Value::F32(f32::NAN),
            Primitive::F64 => Value::F64(f64::NAN),
            Primitive::Char => Value::Char(None),
            Primitive::Str => Value::Str(String::new()),
        }
    }

    /// Decodes a whole token, an empty token giving [`absent`](Self::absent).
    ///
    /// ```rust
    /// use nmea0183_schema::{Primitive, Value};
    ///
    /// assert_eq!(Primitive::U8.decode("08").unwrap().1, Value::U8(Some(8)));
    /// assert_eq!(Primitive::U8.decode("").unwrap().1, Value::U8(None));
    /// assert!(Primitive::F32.decode("").unwrap().1.is_absent());
    /// assert!(Primitive::F32.decode("x8").is_err());
    /// ```
    pub fn decode(self, token: &str) -> IResult<&str, Value> {
        if token.is_empty() {
            return Ok((token, self.absent()));
        }

        let parsed = match self {
            Primitive::I8 => i8::parse_token(token).map(|(i, v)| (i, Value::I8(Some(v)))),
            Primitive::I16 => i16::parse_token(token).map(|(i, v)| (i, Value::I16(Some(v)))),
            Primitive::I32 => i32::parse_token(token).map(|(i, v)| (i, Value::I32(Some(v)))),
            Primitive::I64 => i64::parse_token(token).map(|(i, v)| (i, Value::I64(Some(v)))),
            Primitive::U8 => u8::parse_token(token).map(|(i, v)| (i, Value::U8(Some(v)))),
            Primitive::U16 => u16::parse_token(token).map(|(i, v)| (i, Value::U16(Some(v)))),
            Primitive::U32 => u32::parse_token(token).map(|(i, v)| (i, Value::U32(Some(v)))),
            Primitive::U64 => u64::parse_token(token).map(|(i, v)| (i, Value::U64(Some(v)))),
            Primitive::F32 => f32::parse_token(token).map(|(i, v)| (i, Value::F32(v))),
            Primitive::F64 => f64::parse_token(token).map(|(i, v)| (i, Value::F64(v))),
            Primitive::Char => {
                <char as TokenParse>::parse_token(token).map(|(i, v)| (i, Value::Char(Some(v))))
            }
            Primitive::Str => Ok(("", Value::Str(token.to_owned()))),
        };

        parsed.map_err(|_| nom::Err::Error(Error::InvalidField(token)))
    }
}

/// Decodes the contents of all sentences of one message type.
///
/// Returns one column per data token of the schema, each holding one value per
/// content string, in the order the contents were given.
///
/// # Errors
///
/// - [`DecodeError::StructuralMismatch`] when a row does not carry exactly
///   [`MessageSchema::comma_tokens`] tokens. Rows are checked for shape before
///   any value is decoded.
/// - [`DecodeError::InvalidValue`] for the first token that is not a valid value
///   of its primitive type.
/// - [`DecodeError::LiteralMismatch`] for the first unit marker that does not read
///   its literal.
///
/// # Examples
///
/// ```rust
/// use nmea0183_schema::{FieldSpec, MessageSchema, Primitive, TokenFormat, Value, decode_batch};
///
/// let hdt = MessageSchema::new(
///     "HDT",
///     [FieldSpec::new(
///         "heading",
///         [TokenFormat::new(Primitive::F64), TokenFormat::literal("T")],
///     )
///     .unwrap()],
/// )
/// .unwrap();
///
/// let columns = decode_batch(&hdt, &["274.07,T", ",T"]).unwrap();
/// assert_eq!(columns.len(), 1);
/// assert_eq!(columns[0][0], Value::F64(274.07));
/// assert!(columns[0][1].is_absent());
///
/// assert!(decode_batch(&hdt, &["274.07"]).is_err());
/// assert!(decode_batch(&hdt, &["274.07,M"]).is_err());
/// ```
pub fn decode_batch<S: AsRef<str>>(
    schema: &MessageSchema,
    contents: &[S],
) -> Result<Vec<Vec<Value>>, DecodeError> {
    let expected = schema.comma_tokens();

    for (row, content) in contents.iter().enumerate() {
        let found = count_tokens(content.as_ref());
        if found != expected {
            return Err(DecodeError::StructuralMismatch {
                row,
                expected,
                found,
            });
        }
    }

    let mut batch = String::with_capacity(contents.iter().map(|c| c.as_ref().len() + 2).sum());
    for content in contents {
        batch.push_str(content.as_ref());
        batch.push_str(",\n");
    }

    let groups = token_groups(schema);
    let mut columns: Vec<Vec<Value>> = (0..schema.width())
        .map(|_| Vec::with_capacity(contents.len()))
        .collect();

    let mut i = batch.as_str();
    for (row, content) in contents.iter().enumerate() {
        i = match decode_row(&groups, i, &mut columns) {
            Ok((rest, ())) => rest,
            Err(e) => return Err(locate(&batch, row, content.as_ref(), expected, e)),
        };
    }

    Ok(columns)
}

fn count_tokens(content: &str) -> usize {
    content.split(',').count()
}

/// Splits the token format into the descriptors of each comma-delimited token.
fn token_groups(schema: &MessageSchema) -> Vec<Vec<&TokenFormat>> {
    let mut groups = Vec::with_capacity(schema.comma_tokens());
    let mut group = Vec::new();

    for format in schema.token_format() {
        group.push(format);
        if format.ends_token() {
            groups.push(std::mem::take(&mut group));
        }
    }

    groups
}

fn decode_row<'a>(
    groups: &[Vec<&TokenFormat>],
    i: &'a str,
    columns: &mut [Vec<Value>],
) -> IResult<&'a str, ()> {
    let mut i = i;
    let mut column = 0;

    for group in groups {
        let (rest, mut token) = comma_token(i)?;

        for format in group {
            let part = match format.width() {
                Some(width) => {
                    let (remainder, prefix) = split_width(width)(token)?;
                    token = remainder;
                    prefix
                }
                None => token,
            };

            match format.kind() {
                TokenKind::Data(primitive) => {
                    let (_, value) = primitive.decode(part)?;
                    columns[column].push(value);
                    column += 1;
                }
                TokenKind::Literal(expected) => {
                    literal(expected, part)?;
                }
                TokenKind::Skip(pattern) => {
                    if !pattern.is_match(part) {
                        return Err(nom::Err::Error(Error::InvalidField(part)));
                    }
                }
            }
        }

        i = rest;
    }

    let (i, _) = char('\n').parse(i)?;
    Ok((i, ()))
}

/// Turns a tokenizer error into a [`DecodeError`] naming the row and token.
fn locate(
    batch: &str,
    row: usize,
    content: &str,
    expected: usize,
    e: nom::Err<Error<&str, nom::error::Error<&str>>>,
) -> DecodeError {
    let token_of = |fragment: &str| {
        let offset = batch.offset(fragment);
        let row_start = batch[..offset].rfind('\n').map_or(0, |p| p + 1);
        batch[row_start..offset].matches(',').count()
    };

    let structural = DecodeError::StructuralMismatch {
        row,
        expected,
        found: count_tokens(content),
    };

    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => match e {
            Error::InvalidField(text) => DecodeError::InvalidValue {
                row,
                token: token_of(text),
                text: text.to_owned(),
            },
            Error::LiteralMismatch { expected, found } => DecodeError::LiteralMismatch {
                row,
                token: token_of(found),
                expected,
                found: found.to_owned(),
            },
            _ => structural,
        },
        nom::Err::Incomplete(_) => structural,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldSpec, PostProcess};

    fn position() -> MessageSchema {
        MessageSchema::new(
            "POS",
            [
                FieldSpec::with(
                    "latitude",
                    [
                        TokenFormat::fixed(Primitive::U8, 2),
                        TokenFormat::new(Primitive::F64),
                        TokenFormat::new(Primitive::Char),
                    ],
                    PostProcess::Degrees,
                )
                .unwrap(),
                FieldSpec::new("satellites", [TokenFormat::new(Primitive::U8)]).unwrap(),
                FieldSpec::new(
                    "altitude",
                    [TokenFormat::new(Primitive::F32), TokenFormat::literal("M")],
                )
                .unwrap(),
                FieldSpec::new("station", [TokenFormat::new(Primitive::U16)]).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_decode_columns() {
        let columns = decode_batch(&position(), &["4807.038,N,08,545.4,M,0136", ",,,,M,"]).unwrap();

        assert_eq!(columns.len(), 6);
        assert_eq!(columns[0], [Value::U8(Some(48)), Value::U8(None)]);
        assert_eq!(columns[1][0], Value::F64(7.038));
        assert!(columns[1][1].is_absent());
        assert_eq!(columns[2], [Value::Char(Some('N')), Value::Char(None)]);
        assert_eq!(columns[3], [Value::U8(Some(8)), Value::U8(None)]);
        assert_eq!(columns[4][0], Value::F32(545.4));
        assert_eq!(columns[5], [Value::U16(Some(136)), Value::U16(None)]);
    }

    #[test]
    fn test_decode_trailing_empty_field() {
        // the last row omits its trailing value, the comma is still there
        let columns = decode_batch(&position(), &["4807.038,N,08,545.4,M,", "4807.038,N,09,545.4,M,12"]).unwrap();

        assert_eq!(columns[5], [Value::U16(None), Value::U16(Some(12))]);
        assert_eq!(columns[3], [Value::U8(Some(8)), Value::U8(Some(9))]);
    }

    #[test]
    fn test_decode_structural_mismatch() {
        let res = decode_batch(&position(), &["4807.038,N,08,545.4,M,0136", "4807.038,N,08,545.4,M"]);
        assert_eq!(
            res,
            Err(DecodeError::StructuralMismatch {
                row: 1,
                expected: 6,
                found: 5
            })
        );

        let res = decode_batch(&position(), &["4807.038,N,08,545.4,M,0136,"]);
        assert_eq!(
            res,
            Err(DecodeError::StructuralMismatch {
                row: 0,
                expected: 6,
                found: 7
            })
        );
    }

    #[test]
    fn test_decode_invalid_value() {
        let res = decode_batch(&position(), &["4807.038,N,08,545.4,M,0136", "4807.038,N,x8,545.4,M,0136"]);
        assert_eq!(
            res,
            Err(DecodeError::InvalidValue {
                row: 1,
                token: 2,
                text: "x8".to_owned()
            })
        );

        // width-constrained prefix longer than the token
        let res = decode_batch(&position(), &["4,N,08,545.4,M,0136"]);
        assert_eq!(
            res,
            Err(DecodeError::InvalidValue {
                row: 0,
                token: 0,
                text: "4".to_owned()
            })
        );
    }

    #[test]
    fn test_decode_literal_mismatch() {
        let res = decode_batch(&position(), &["4807.038,N,08,545.4,,0136"]);
        assert_eq!(
            res,
            Err(DecodeError::LiteralMismatch {
                row: 0,
                token: 4,
                expected: "M".to_owned(),
                found: String::new()
            })
        );
    }

    #[test]
    fn test_decode_skip() {
        let schema = MessageSchema::new(
            "SKP",
            [FieldSpec::new(
                "value",
                [
                    TokenFormat::skip("[A-Z]+").unwrap(),
                    TokenFormat::new(Primitive::I32),
                ],
            )
            .unwrap()],
        )
        .unwrap();

        let columns = decode_batch(&schema, &["ABC,-12"]).unwrap();
        assert_eq!(columns, [[Value::I32(Some(-12))]]);

        let res = decode_batch(&schema, &["abc,-12"]);
        assert!(matches!(res, Err(DecodeError::InvalidValue { token: 0, .. })));
    }

    #[test]
    fn test_decode_empty_batch() {
        let columns = decode_batch::<&str>(&position(), &[]).unwrap();
        assert_eq!(columns.len(), 6);
        assert!(columns.iter().all(Vec::is_empty));
    }
}
