//! # NMEA 0183 Sentence Extraction
//!
//! This module finds NMEA 0183 sentences inside arbitrary text and checks their
//! checksums. A sentence has the shape `$TTMMM,D1,D2,...,Dn*CC`:
//! - `TT` is the 2-letter talker id, `MMM` the 3-letter message id
//!   (proprietary sentences read `$PXXX,MMM,...` with `PXXX` as talker id)
//! - `D1..Dn` are the comma-delimited content fields
//! - `CC` is the XOR of every byte between `$` and `*`, as two hex digits
//!
//! Extraction never fails: text that does not form a sentence is skipped.

use nom::{
    Parser,
    branch::alt,
    bytes::complete::{tag, take, take_until},
    character::complete::{char, hex_digit1},
    combinator::opt,
    error::ErrorKind,
    number::complete::hex_u32,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{Error, IResult, parsing::consumed};

const HEAD: &str = r"\$(?:(?P<ptalker>P[A-Z]{3}),(?P<pid>[A-Z]{3})|(?P<talker>[A-Z]{2})(?P<id>[A-Z]{3}))";
const CONTENT: &str = r"(?P<content>(?:,[\x20-\x7E&&[^,*$]]*)*)";
const CHECKSUM: &str = r"\*(?P<checksum>[0-9A-Fa-f]{2})";

static REQUIRED: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{HEAD}{CONTENT}{CHECKSUM}")).unwrap());
static OPTIONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{HEAD}{CONTENT}(?:{CHECKSUM})?")).unwrap());

/// Defines how extraction treats the `*CC` checksum suffix.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// Checksum is required and must be valid.
    ///
    /// Text without a `*CC` suffix is not a sentence; sentences whose checksum does
    /// not match their content are dropped by validation.
    #[default]
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Sentences without `*CC` end at the end of the line and are always kept.
    /// Use this mode with legacy equipment that does not always send checksums.
    Optional,
}

/// One sentence found in the input.
///
/// All string slices borrow from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// `GP`, `GN`, ... or the `PXXX` prefix of a proprietary sentence
    pub talker_id: &'a str,
    pub message_id: &'a str,
    /// Comma-delimited fields, without the separator that follows the message id
    pub content: &'a str,
    /// The two hex digits after `*`, if any
    pub checksum: Option<&'a str>,
    /// Byte offset of the `$` in the scanned text (or chunk)
    pub offset: usize,
    pub(crate) body: &'a str,
}

impl<'a> Sentence<'a> {
    /// Everything between `$` and `*`, the checksummed part of the sentence.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// The checksum carried by the sentence, if any.
    pub fn found_checksum(&self) -> Option<u8> {
        self.checksum.and_then(|cc| u8::from_str_radix(cc, 16).ok())
    }

    /// The checksum computed from the sentence body.
    pub fn calculated_checksum(&self) -> u8 {
        checksum(self.body)
    }

    /// A sentence is valid if it carries no checksum or a matching one.
    pub fn is_valid(&self) -> bool {
        match self.checksum {
            None => true,
            Some(_) => self.found_checksum() == Some(self.calculated_checksum()),
        }
    }

    fn from_captures(text: &'a str, caps: &Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        let (talker_id, message_id) = match (caps.name("ptalker"), caps.name("pid")) {
            (Some(talker), Some(id)) => (talker, id),
            _ => (caps.name("talker")?, caps.name("id")?),
        };
        let content = caps.name("content")?;
        let checksum = caps.name("checksum").map(|cc| cc.as_str());

        Some(Self {
            talker_id: talker_id.as_str(),
            message_id: message_id.as_str(),
            content: content.as_str().strip_prefix(',').unwrap_or(content.as_str()),
            checksum,
            offset: whole.start(),
            body: &text[whole.start() + 1..content.end()],
        })
    }
}

/// Finds every sentence in `text`, requiring a checksum suffix.
///
/// # Examples
///
/// ```rust
/// use nmea0183_schema::extract;
///
/// let text = "noise $GPHDT,274.07,T*03\r\n$GPGGA,123456,data\r\n$PSAT,HPR,130911.00,271.48,0.42,-0.73,N*0E\r\n";
/// let sentences: Vec<_> = extract(text).collect();
///
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0].talker_id, "GP");
/// assert_eq!(sentences[0].message_id, "HDT");
/// assert_eq!(sentences[0].content, "274.07,T");
/// assert_eq!(sentences[0].offset, 6);
/// assert_eq!(sentences[1].talker_id, "PSAT");
/// assert_eq!(sentences[1].message_id, "HPR");
/// ```
pub fn extract(text: &str) -> impl Iterator<Item = Sentence<'_>> {
    extract_with(text, ChecksumMode::Required)
}

/// Finds every sentence in `text` under the given checksum mode.
///
/// Candidates followed directly by a letter or digit are rejected (for example a
/// checksum with three hex digits), as are, in [`ChecksumMode::Optional`],
/// candidates followed by a `*` that does not start a valid checksum. A sentence
/// without a checksum must end the line: it is kept only when followed by `\r`,
/// `\n` or the end of the text, so a fragment cut short by the next `$` is dropped.
///
/// ```rust
/// use nmea0183_schema::{ChecksumMode, extract_with};
///
/// let text = "$GPHDT,274.07,T\r\n$GPHDT,274.07,T*03\r\n$GPHDT,1.0,T*4\r\n$GPHDT,9$GPHDT,1.0,T";
///
/// assert_eq!(extract_with(text, ChecksumMode::Required).count(), 1);
/// assert_eq!(extract_with(text, ChecksumMode::Optional).count(), 3);
/// ```
pub fn extract_with(text: &str, mode: ChecksumMode) -> impl Iterator<Item = Sentence<'_>> {
    let regex = match mode {
        ChecksumMode::Required => &*REQUIRED,
        ChecksumMode::Optional => &*OPTIONAL,
    };

    regex.captures_iter(text).filter_map(move |caps| {
        let sentence = Sentence::from_captures(text, &caps)?;
        let end = caps.get(0)?.end();

        match (sentence.checksum, text[end..].chars().next()) {
            (_, Some(c)) if c.is_ascii_alphanumeric() => None,
            (_, Some('*')) => None,
            (None, Some(c)) if c != '\r' && c != '\n' => None,
            _ => Some(sentence),
        }
    })
}

/// Finds every sentence in a sequence of chunks, such as the lines of a file.
///
/// Offsets are relative to the chunk a sentence was found in, not to the
/// concatenation of all chunks. A sentence split across two chunks is not found.
///
/// ```rust
/// use nmea0183_schema::{ChecksumMode, extract_lines};
///
/// let lines = ["$GPHDT,274.07,T*03", "  $GPHDT,274.07,T*03"];
/// let offsets: Vec<_> = extract_lines(lines, ChecksumMode::Required)
///     .map(|s| s.offset)
///     .collect();
///
/// assert_eq!(offsets, [0, 2]);
/// ```
pub fn extract_lines<'a, L>(lines: L, mode: ChecksumMode) -> impl Iterator<Item = Sentence<'a>>
where
    L: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .flat_map(move |line| extract_with(line, mode))
}

/// Calculates the NMEA 0183 checksum of a sentence body.
///
/// The body is everything between the `$` prefix and the `*` delimiter, excluding
/// both; the checksum is the XOR of all of its bytes.
///
/// ```rust
/// use nmea0183_schema::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(body: impl AsRef<[u8]>) -> u8 {
    body.as_ref()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// ```rust
/// use nmea0183_schema::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Frames a single sentence `$...*CC` (optionally followed by CRLF or LF) and verifies
/// its checksum, returning the checksum on success.
///
/// ```rust
/// use nmea0183_schema::{Error, verify};
///
/// assert_eq!(verify("$GPGGA,123456,data*41\r\n"), Ok(("", 0x41)));
/// assert_eq!(verify("$GPGGA,123456,data*41\n"), Ok(("", 0x41)));
/// assert_eq!(verify("$GPGGA,123456,data*41"), Ok(("", 0x41)));
/// assert_eq!(
///     verify("$GPGGA,123456,data*42"),
///     Err(nom::Err::Error(Error::ChecksumMismatch { expected: 0x41, found: 0x42 }))
/// );
/// ```
pub fn verify(i: &str) -> IResult<&str, u8> {
    if !i.is_ascii() {
        return Err(nom::Err::Error(Error::NonAscii));
    }

    let (i, _) = char('$').parse(i)?;
    let (i, body) = take_until("*").parse(i)?;
    let (i, _) = char('*').parse(i)?;
    let (i, cc) = take(2u8).parse(i)?;
    let (_, cc) = consumed(hex_digit1, ErrorKind::IsA).parse(cc)?;
    let (_, found) = hex_u32.map(|cc| cc as u8).parse(cc)?;
    let (i, _) = consumed(opt(alt((tag("\r\n"), tag("\n")))), ErrorKind::Eof).parse(i)?;

    let expected = checksum(body);
    if expected != found {
        return Err(nom::Err::Error(Error::ChecksumMismatch { expected, found }));
    }

    Ok((i, found))
}

/// Whether `sentence` is a framed sentence with a matching checksum.
///
/// Hex digits are compared case-insensitively.
///
/// ```rust
/// use nmea0183_schema::is_valid;
///
/// assert!(is_valid("$GPHDT,274.07,T*03"));
/// assert!(is_valid("$GPHDT,274.07,T*03\n"));
/// assert!(is_valid("$GPGGA,data*6a"));
/// assert!(!is_valid("$GPHDT,274.08,T*03"));
/// assert!(!is_valid("GPHDT,274.07,T*03"));
/// ```
pub fn is_valid(sentence: &str) -> bool {
    verify(sentence).is_ok()
}

/// Checks a batch of extracted sentences, one flag per sentence, in order.
pub fn validate(sentences: &[Sentence<'_>]) -> Vec<bool> {
    sentences.iter().map(Sentence::is_valid).collect()
}
