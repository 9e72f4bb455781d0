//! # Error Types
//!
//! This module defines the error types used throughout the decoder.
//!
//! There are three layers:
//! - [`Error`] is the `nom` error type used while tokenizing a single sentence batch.
//! - [`DecodeError`] and [`PostProcessError`] describe why one message type could not
//!   be decoded. They never abort the decoding of other message types.
//! - [`ConfigError`] is raised while building schemas and catalogs, before any input
//!   is looked at.

use nom::error::{ErrorKind, FromExternalError, ParseError};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Token level errors produced while framing or tokenizing sentences.
#[derive(Debug, PartialEq)]
pub enum Error<I, E> {
    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA sentences must be ASCII-only for proper checksum calculation.
    NonAscii,

    /// The checksum of the sentence was corrupt or incorrect.
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The checksum found after the `*` delimiter
        found: u8,
    },

    /// The input could not be parsed because its shape was invalid.
    ///
    /// During batch decoding this means a separator was missing or superfluous,
    /// which is reported as a structural mismatch.
    ParsingError(E),

    /// A token could not be converted into its declared primitive type.
    ///
    /// Contains the offending token (or the part of it that failed).
    InvalidField(I),

    /// A unit-marker token did not carry its required literal.
    LiteralMismatch {
        /// The literal declared by the schema
        expected: String,
        /// The token found in the sentence
        found: I,
    },
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

/// Why a whole message type failed to decode.
///
/// Rows are counted from zero in order of appearance among the sentences of that
/// message type; tokens are counted from zero among the comma-delimited tokens of
/// the sentence content.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("row {row} has {found} tokens, the schema expects {expected}")]
    StructuralMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, token {token}: cannot decode {text:?}")]
    InvalidValue {
        row: usize,
        token: usize,
        text: String,
    },

    #[error("row {row}, token {token}: expected literal {expected:?}, found {found:?}")]
    LiteralMismatch {
        row: usize,
        token: usize,
        expected: String,
        found: String,
    },

    #[error("row {row}, field `{field}`: {source}")]
    PostProcess {
        row: usize,
        field: String,
        #[source]
        source: PostProcessError,
    },
}

/// Value level failure of a post-processing strategy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostProcessError {
    #[error("hemisphere {0:?} is not one of N, S, E, W")]
    Hemisphere(char),

    #[error("mode indicator {0:?} has no fix-quality mapping")]
    Mode(char),

    #[error("{found} mode indicators exceed the capacity of {capacity}")]
    TooManyModes { found: usize, capacity: usize },

    #[error("fix quality {0} is out of range")]
    Quality(i64),

    #[error("expected {expected} token")]
    Type { expected: &'static str },
}

/// Schema or catalog misconfiguration, detected before any parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("message id `{0}` is declared by more than one schema")]
    DuplicateMessage(String),

    #[error("message id `{0}` must be three uppercase ASCII letters")]
    InvalidMessageId(String),

    #[error("field `{0}` declares no data tokens")]
    EmptyField(String),

    #[error("field `{field}`: {strategy} post-processing takes {expected} tokens, {found} declared")]
    Arity {
        field: String,
        strategy: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("field `{0}` ends with a fixed-width token that has no remainder")]
    DanglingWidth(String),

    #[error("mode fields hold between 1 and {capacity} columns, {found} requested")]
    ModeColumns { found: usize, capacity: usize },

    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
