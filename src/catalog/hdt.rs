use crate::{ConfigError, MessageSchema, Primitive};

use super::with_unit;

/// HDT - Heading - True
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdt_heading_true>
///
/// ```text
///         1   2
///         |   |
///  $--HDT,x.x,T*hh<CR><LF>
/// ```
pub fn hdt() -> Result<MessageSchema, ConfigError> {
    MessageSchema::new("HDT", [with_unit("heading", Primitive::F64, "T")?])
}
