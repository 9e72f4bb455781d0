//! Columnar output of a parse call.

use indexmap::IndexMap;

use crate::{DecodeError, FieldValue};

/// All decoded sentences of one message type.
///
/// Every column (each field, the talker ids and the offsets) holds one entry per
/// sentence, in the order the sentences appeared in the input.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub(crate) name: String,
    pub(crate) fields: IndexMap<String, Vec<FieldValue>>,
    pub(crate) talker_ids: Vec<String>,
    pub(crate) offsets: Vec<usize>,
}

impl Record {
    /// The message id the record was decoded under, such as `"GGA"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The column of the field called `name`.
    pub fn field(&self, name: &str) -> Option<&[FieldValue]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// All field columns, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &[FieldValue])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn talker_ids(&self) -> &[String] {
        &self.talker_ids
    }

    /// Byte offset of each sentence's `$`.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}

/// Result of one parse call, keyed by message id in catalog order.
///
/// A message type is found in at most one of [`records`](Self::iter) and
/// [`failures`](Self::failures), and in neither when the input held no sentence
/// of that type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    pub records: IndexMap<String, Record>,
    pub failures: IndexMap<String, DecodeError>,
}

impl Decoded {
    pub fn get(&self, message_id: &str) -> Option<&Record> {
        self.records.get(message_id)
    }

    /// Why the message type `message_id` could not be decoded.
    pub fn failure(&self, message_id: &str) -> Option<&DecodeError> {
        self.failures.get(message_id)
    }

    /// Number of decoded message types.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Record> {
        self.records.iter()
    }

    pub fn failures(&self) -> indexmap::map::Iter<'_, String, DecodeError> {
        self.failures.iter()
    }
}

impl<'a> IntoIterator for &'a Decoded {
    type Item = (&'a String, &'a Record);
    type IntoIter = indexmap::map::Iter<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
