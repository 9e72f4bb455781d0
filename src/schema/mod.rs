//! # Message Schemas
//!
//! A [`MessageSchema`] is pure data: a message id, a talker-id pattern and an
//! ordered list of [`FieldSpec`]s. Concatenating the token formats of all fields
//! gives the expected shape of one sentence's content. A [`Catalog`] is the
//! ordered, validated set of schemas handed to the decoder.

mod field;

pub use field::{FieldSpec, Primitive, TokenFormat, TokenKind};

use regex::Regex;

use crate::{ConfigError, Sentence};

/// Talker-id pattern used when a schema does not declare one.
pub const ANY_TALKER: &str = "[A-Z]{2}";

/// Declares the fields of one message type.
///
/// ```rust
/// use nmea0183_schema::{FieldSpec, MessageSchema, Primitive, TokenFormat};
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
/// assert_eq!(hdt.message_id(), "HDT");
/// assert_eq!(hdt.talker_id_pattern(), "[A-Z]{2}");
/// assert_eq!(hdt.token_format().count(), 2);
/// assert_eq!(hdt.comma_tokens(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MessageSchema {
    message_id: String,
    talker_id_pattern: String,
    talker: Regex,
    fields: Vec<FieldSpec>,
}

impl MessageSchema {
    /// A standard message: any 2-letter talker followed by `message_id`.
    pub fn new(
        message_id: &str,
        fields: impl IntoIterator<Item = FieldSpec>,
    ) -> Result<Self, ConfigError> {
        if !is_message_id(message_id) {
            return Err(ConfigError::InvalidMessageId(message_id.to_owned()));
        }

        Ok(Self {
            message_id: message_id.to_owned(),
            talker_id_pattern: ANY_TALKER.to_owned(),
            talker: talker_regex(ANY_TALKER)?,
            fields: fields.into_iter().collect(),
        })
    }

    /// A proprietary message such as `$PSAT,HPR,...`: the talker id is the fixed
    /// `prefix` (`P` plus a manufacturer code) and `message_id` follows a comma.
    pub fn proprietary(
        prefix: &str,
        message_id: &str,
        fields: impl IntoIterator<Item = FieldSpec>,
    ) -> Result<Self, ConfigError> {
        Self::new(message_id, fields)?.with_talker_id_pattern(&regex::escape(prefix))
    }

    /// Restricts the talker ids this schema accepts to those fully matching `pattern`.
    pub fn with_talker_id_pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        self.talker = talker_regex(pattern)?;
        self.talker_id_pattern = pattern.to_owned();
        Ok(self)
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn talker_id_pattern(&self) -> &str {
        &self.talker_id_pattern
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The token formats of all fields, concatenated in order.
    pub fn token_format(&self) -> impl Iterator<Item = &TokenFormat> {
        self.fields.iter().flat_map(|f| f.tokens())
    }

    /// Number of comma-delimited tokens one sentence of this type must carry.
    pub fn comma_tokens(&self) -> usize {
        self.fields.iter().map(FieldSpec::comma_tokens).sum()
    }

    /// Number of decoded columns.
    pub fn width(&self) -> usize {
        self.fields.iter().map(FieldSpec::width).sum()
    }

    /// Whether a sentence belongs to this message type.
    pub fn matches(&self, sentence: &Sentence<'_>) -> bool {
        sentence.message_id == self.message_id && self.talker.is_match(sentence.talker_id)
    }
}

fn is_message_id(id: &str) -> bool {
    id.len() == 3 && id.bytes().all(|b| b.is_ascii_uppercase())
}

fn talker_regex(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}

/// The ordered set of schemas a decoder works with.
///
/// Registration is where misconfiguration is caught: two schemas declaring the
/// same message id are rejected.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    schemas: Vec<MessageSchema>,
}

impl Catalog {
    pub fn new(schemas: impl IntoIterator<Item = MessageSchema>) -> Result<Self, ConfigError> {
        let mut catalog = Self::default();
        for schema in schemas {
            catalog.register(schema)?;
        }

        Ok(catalog)
    }

    /// Appends a schema, rejecting a message id that is already registered.
    pub fn register(&mut self, schema: MessageSchema) -> Result<(), ConfigError> {
        if self.get(schema.message_id()).is_some() {
            return Err(ConfigError::DuplicateMessage(schema.message_id));
        }

        self.schemas.push(schema);
        Ok(())
    }

    pub fn get(&self, message_id: &str) -> Option<&MessageSchema> {
        self.schemas.iter().find(|s| s.message_id == message_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageSchema> {
        self.schemas.iter()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MessageSchema;
    type IntoIter = std::slice::Iter<'a, MessageSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
