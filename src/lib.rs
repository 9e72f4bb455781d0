//! # NMEA 0183 Schema Decoder
//!
//! This library decodes logs of NMEA 0183 sentences with the format
//! `$TTMMM,D1,D2,...,Dn*CC` into typed, columnar records.
//!
//! Decoding is driven by data: every message type is described by a
//! [`MessageSchema`], an ordered list of [`FieldSpec`]s, each naming the
//! [`TokenFormat`]s it consumes and the [`PostProcess`] strategy that turns them
//! into a [`FieldValue`]. One parse call:
//! - finds every sentence in the text ([`extract`]) and drops those whose checksum
//!   does not match ([`validate`])
//! - decodes all sentences of a message type together, in one batch
//!   ([`decode_batch`])
//! - post-processes each field and collects one [`Record`] per message type,
//!   keeping the talker id and byte offset of every sentence
//!
//! A message type that fails to decode is reported in [`Decoded::failures`] and
//! never affects the other message types of the same call.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_schema::{GpsMode, catalog, parse};
//!
//! let catalog = catalog::standard().unwrap();
//! let text = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n\
//!             $GPHDT,274.07,T*03\r\n";
//!
//! let decoded = parse(&catalog, text);
//! assert_eq!(decoded.len(), 2);
//!
//! let gga = decoded.get("GGA").unwrap();
//! let quality = gga.field("fix_quality").unwrap();
//! assert_eq!(quality[0].as_quality(), Some(GpsMode::Autonomous));
//! ```
//!
//! ## Custom schemas
//!
//! ```rust
//! use nmea0183_schema::{
//!     Catalog, FieldSpec, FieldValue, MessageSchema, Primitive, TokenFormat, Value, parse,
//! };
//!
//! let depth = MessageSchema::new(
//!     "DPT",
//!     [
//!         FieldSpec::new("depth", [TokenFormat::new(Primitive::F32)]).unwrap(),
//!         FieldSpec::new("offset", [TokenFormat::new(Primitive::F32)]).unwrap(),
//!     ],
//! )
//! .unwrap();
//! let catalog = Catalog::new([depth]).unwrap();
//!
//! let decoded = parse(&catalog, "$SDDPT,2.4,0.5*54");
//! let dpt = decoded.get("DPT").unwrap();
//! assert_eq!(dpt.field("depth").unwrap()[0], FieldValue::Value(Value::F32(2.4)));
//! ```
//!
//! ## Features
//!
//! - `catalog` (default): the built-in schemas of the [`catalog`] module
//! - `nmea-v2-3` (default): built-in GLL, RMC and VTG schemas with the FAA mode field
//! - `serde`: `Serialize`/`Deserialize` for values and records
//! - `time`: [`UtcTime::to_time`] conversion

#![cfg_attr(docsrs, feature(doc_cfg))]

mod decode;
mod decoder;
pub mod error;
mod mode;
mod nmea0183;
mod parse;
pub mod parsing;
mod post;
mod record;
mod schema;
mod value;

#[cfg(feature = "catalog")]
#[cfg_attr(docsrs, doc(cfg(feature = "catalog")))]
pub mod catalog;

pub use decode::decode_batch;
pub use decoder::{Decoder, parse, parse_lines};
pub use error::{ConfigError, DecodeError, Error, IResult, PostProcessError};
pub use mode::GpsMode;
pub use nmea0183::*;
pub use parse::TokenParse;
pub use post::PostProcess;
pub use record::{Decoded, Record};
pub use schema::{ANY_TALKER, Catalog, FieldSpec, MessageSchema, Primitive, TokenFormat, TokenKind};
pub use value::{FieldValue, MODE_CAPACITY, UtcTime, Value};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
