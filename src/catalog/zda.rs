use crate::{ConfigError, MessageSchema, Primitive};

use super::{scalar, utc_time};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
pub fn zda() -> Result<MessageSchema, ConfigError> {
    MessageSchema::new(
        "ZDA",
        [
            utc_time("utc_time")?,
            scalar("day", Primitive::U8)?,
            scalar("month", Primitive::U8)?,
            scalar("year", Primitive::U16)?,
            scalar("zone_hours", Primitive::I8)?,
            scalar("zone_minutes", Primitive::U8)?,
        ],
    )
}
