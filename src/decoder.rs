//! # Parse Orchestration
//!
//! Runs extraction, checksum validation, batch tokenizing and post-processing
//! for every schema of a [`Catalog`] and collects the results into a [`Decoded`].

use indexmap::IndexMap;

use crate::{
    Catalog, ChecksumMode, DecodeError, Decoded, MessageSchema, Record, Sentence, decode_batch,
    extract_lines, extract_with, format_checksum, validate,
};

/// Decodes text against a catalog of schemas.
///
/// ```rust
/// use nmea0183_schema::{ChecksumMode, Decoder, FieldValue, Value, catalog};
///
/// let catalog = catalog::standard().unwrap();
/// let decoder = Decoder::new(&catalog).checksum(ChecksumMode::Optional);
///
/// let decoded = decoder.parse("$GPHDT,274.07,T\r\n$GPHDT,90.5,T*09\r\n");
/// let hdt = decoded.get("HDT").unwrap();
///
/// assert_eq!(hdt.len(), 2);
/// assert_eq!(hdt.field("heading").unwrap()[1], FieldValue::Value(Value::F64(90.5)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'c> {
    catalog: &'c Catalog,
    checksum: ChecksumMode,
}

impl<'c> Decoder<'c> {
    /// A decoder requiring a valid checksum on every sentence.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            checksum: ChecksumMode::default(),
        }
    }

    pub fn checksum(mut self, mode: ChecksumMode) -> Self {
        self.checksum = mode;
        self
    }

    /// Decodes every sentence found in `text`.
    pub fn parse(&self, text: &str) -> Decoded {
        self.decode(extract_with(text, self.checksum))
    }

    /// Decodes every sentence found in a sequence of chunks.
    ///
    /// Rows keep their overall order of appearance, but offsets are relative to
    /// the chunk each sentence was found in.
    pub fn parse_lines<'a, L>(&self, lines: L) -> Decoded
    where
        L: IntoIterator<Item = &'a str>,
    {
        self.decode(extract_lines(lines, self.checksum))
    }

    fn decode<'a>(&self, sentences: impl Iterator<Item = Sentence<'a>>) -> Decoded {
        let candidates: Vec<_> = sentences.collect();
        let valid: Vec<_> = candidates
            .iter()
            .zip(validate(&candidates))
            .filter_map(|(sentence, valid)| {
                if !valid {
                    tracing::trace!(
                        "Dropping sentence at offset {}: checksum {} expected, {} found",
                        sentence.offset,
                        format_checksum(sentence.calculated_checksum()),
                        sentence.checksum.unwrap_or_default()
                    );
                }
                valid.then_some(sentence)
            })
            .collect();

        let mut decoded = Decoded::default();

        for schema in self.catalog {
            let rows: Vec<_> = valid.iter().copied().filter(|s| schema.matches(s)).collect();
            if rows.is_empty() {
                continue;
            }

            let message_id = schema.message_id().to_owned();
            match decode_record(schema, &rows) {
                Ok(record) => {
                    decoded.records.insert(message_id, record);
                }
                Err(e) => {
                    tracing::warn!("Failed to decode {} sentences: {}", message_id, e);
                    decoded.failures.insert(message_id, e);
                }
            }
        }

        tracing::debug!(
            "Parsed {} candidate sentences ({} valid) into {} message types, {} failed",
            candidates.len(),
            valid.len(),
            decoded.records.len(),
            decoded.failures.len()
        );

        decoded
    }
}

/// Decodes the sentences of one message type into a record.
fn decode_record(schema: &MessageSchema, rows: &[&Sentence<'_>]) -> Result<Record, DecodeError> {
    let contents: Vec<_> = rows.iter().map(|s| s.content).collect();
    let mut columns = decode_batch(schema, &contents)?
        .into_iter()
        .map(Vec::into_iter);

    let mut fields = IndexMap::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let mut group: Vec<_> = columns.by_ref().take(field.width()).collect();
        let mut values = Vec::with_capacity(rows.len());

        for row in 0..rows.len() {
            let tokens = group.iter_mut().filter_map(Iterator::next).collect();
            let value = field
                .post_process()
                .apply(tokens)
                .map_err(|source| DecodeError::PostProcess {
                    row,
                    field: field.name().to_owned(),
                    source,
                })?;
            values.push(value);
        }

        fields.insert(field.name().to_owned(), values);
    }

    Ok(Record {
        name: schema.message_id().to_owned(),
        fields,
        talker_ids: rows.iter().map(|s| s.talker_id.to_owned()).collect(),
        offsets: rows.iter().map(|s| s.offset).collect(),
    })
}

/// Decodes every sentence found in `text` against `catalog`, requiring checksums.
///
/// Sentences with a wrong checksum are dropped. Each message type of the catalog
/// ends up decoded in [`Decoded::records`], failed in [`Decoded::failures`], or
/// absent when no sentence of that type was found.
///
/// # Examples
///
/// ```rust
/// use nmea0183_schema::{GpsMode, Value, catalog, parse};
///
/// let catalog = catalog::standard().unwrap();
/// let decoded = parse(
///     &catalog,
///     "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
/// );
///
/// let gga = decoded.get("GGA").unwrap();
/// let latitude = gga.field("latitude").unwrap()[0].as_degrees().unwrap();
/// let longitude = gga.field("longitude").unwrap()[0].as_degrees().unwrap();
///
/// assert!((latitude - 48.1173).abs() < 1e-4);
/// assert!((longitude - 11.5167).abs() < 1e-4);
/// assert_eq!(gga.field("fix_quality").unwrap()[0].as_quality(), Some(GpsMode::Autonomous));
/// assert_eq!(gga.field("numsat").unwrap()[0].as_value(), Some(&Value::U8(Some(8))));
/// assert_eq!(gga.talker_ids(), ["GP"]);
/// assert_eq!(gga.offsets(), [0]);
/// ```
pub fn parse(catalog: &Catalog, text: &str) -> Decoded {
    Decoder::new(catalog).parse(text)
}

/// Like [`parse`], over a sequence of chunks such as the lines of a file.
pub fn parse_lines<'a, L>(catalog: &Catalog, lines: L) -> Decoded
where
    L: IntoIterator<Item = &'a str>,
{
    Decoder::new(catalog).parse_lines(lines)
}
