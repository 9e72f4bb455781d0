use regex::Regex;

use crate::{ConfigError, PostProcess, value::MODE_CAPACITY};

/// Primitive type of one data token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// A single character
    Char,
    /// Free-form text, passed through verbatim
    Str,
}

/// What a token-format descriptor does with its token.
#[derive(Debug, Clone)]
pub enum TokenKind {
    /// Decodes the token into a column of the given primitive.
    Data(Primitive),
    /// The token must equal this unit marker; contributes no column.
    Literal(String),
    /// The token must fully match this pattern and is discarded.
    Skip(Regex),
}

/// Describes how one token of a sentence is decoded.
///
/// A descriptor with a `width` consumes exactly that many characters of the current
/// comma-delimited token, and the next descriptor carries on inside the same token.
/// This is how `DDMM.MMMM` becomes a degrees column and a minutes column.
#[derive(Debug, Clone)]
pub struct TokenFormat {
    kind: TokenKind,
    width: Option<usize>,
}

impl TokenFormat {
    /// A data token of the given primitive type.
    pub fn new(primitive: Primitive) -> Self {
        Self {
            kind: TokenKind::Data(primitive),
            width: None,
        }
    }

    /// A data token made of exactly `width` leading characters of the current token.
    pub fn fixed(primitive: Primitive, width: usize) -> Self {
        Self {
            kind: TokenKind::Data(primitive),
            width: Some(width),
        }
    }

    /// A unit-marker token that must read exactly `literal`, such as `"M"` or `"T"`.
    pub fn literal(literal: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Literal(literal.into()),
            width: None,
        }
    }

    /// A token that is checked against `pattern` and dropped.
    pub fn skip(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            ConfigError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            }
        })?;

        Ok(Self {
            kind: TokenKind::Skip(regex),
            width: None,
        })
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// The primitive of a data token, `None` for literals and skips.
    pub fn primitive(&self) -> Option<Primitive> {
        match self.kind {
            TokenKind::Data(p) => Some(p),
            _ => None,
        }
    }

    /// Whether the descriptor produces a column.
    pub fn is_data(&self) -> bool {
        self.primitive().is_some()
    }

    /// Whether the descriptor ends its comma-delimited token.
    pub fn ends_token(&self) -> bool {
        self.width.is_none()
    }
}

/// One named field of a message: its token formats and how they are post-processed.
///
/// ```rust
/// use nmea0183_schema::{FieldSpec, PostProcess, Primitive, TokenFormat};
///
/// let latitude = FieldSpec::with(
///     "latitude",
///     [
///         TokenFormat::fixed(Primitive::U8, 2),
///         TokenFormat::new(Primitive::F64),
///         TokenFormat::new(Primitive::Char),
///     ],
///     PostProcess::Degrees,
/// )
/// .unwrap();
///
/// assert_eq!(latitude.width(), 3);
/// assert_eq!(latitude.comma_tokens(), 2);
///
/// // degrees need three tokens
/// let broken = FieldSpec::with("latitude", [TokenFormat::new(Primitive::F64)], PostProcess::Degrees);
/// assert!(broken.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    tokens: Vec<TokenFormat>,
    post_process: PostProcess,
}

impl FieldSpec {
    /// A field with [`PostProcess::Default`].
    pub fn new(
        name: impl Into<String>,
        tokens: impl IntoIterator<Item = TokenFormat>,
    ) -> Result<Self, ConfigError> {
        Self::with(name, tokens, PostProcess::Default)
    }

    /// A field with an explicit post-processing strategy.
    pub fn with(
        name: impl Into<String>,
        tokens: impl IntoIterator<Item = TokenFormat>,
        post_process: PostProcess,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let tokens: Vec<_> = tokens.into_iter().collect();

        let width = tokens.iter().filter(|t| t.is_data()).count();
        if width == 0 {
            return Err(ConfigError::EmptyField(name));
        }

        if let Some(expected) = post_process.arity()
            && expected != width
        {
            return Err(ConfigError::Arity {
                field: name,
                strategy: post_process.name(),
                expected,
                found: width,
            });
        }

        if let PostProcess::Modes { columns } = post_process
            && !(1..=MODE_CAPACITY).contains(&columns)
        {
            return Err(ConfigError::ModeColumns {
                found: columns,
                capacity: MODE_CAPACITY,
            });
        }

        if tokens.last().is_some_and(|t| !t.ends_token()) {
            return Err(ConfigError::DanglingWidth(name));
        }

        Ok(Self {
            name,
            tokens,
            post_process,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[TokenFormat] {
        &self.tokens
    }

    pub fn post_process(&self) -> PostProcess {
        self.post_process
    }

    /// Number of data tokens, that is columns, the field produces.
    pub fn width(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_data()).count()
    }

    /// Number of comma-delimited tokens the field consumes.
    pub fn comma_tokens(&self) -> usize {
        self.tokens.iter().filter(|t| t.ends_token()).count()
    }
}
