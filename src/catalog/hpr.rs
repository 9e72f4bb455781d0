use crate::{ConfigError, MessageSchema, Primitive};

use super::{scalar, utc_time};

/// PSAT,HPR - Proprietary heading, pitch and roll
///
/// ```text
///               1         2   3   4   5
///               |         |   |   |   |
///  $PSAT,HPR,hhmmss.ss,x.x,x.x,x.x,a*hh<CR><LF>
/// ```
///
/// Angles are in degrees. `solution` is `N` for a GPS derived heading, `G` for a
/// gyro derived one.
pub fn hpr() -> Result<MessageSchema, ConfigError> {
    MessageSchema::proprietary(
        "PSAT",
        "HPR",
        [
            utc_time("utc_time")?,
            scalar("heading", Primitive::F64)?,
            scalar("pitch", Primitive::F64)?,
            scalar("roll", Primitive::F64)?,
            scalar("solution", Primitive::Char)?,
        ],
    )
}
