use crate::{ConfigError, FieldSpec, MessageSchema, PostProcess, Primitive, TokenFormat};

use super::{latitude, longitude, scalar, utc_time, with_unit};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// | Field              | Value                          |
/// |--------------------|--------------------------------|
/// | `utc_time`         | [`UtcTime`](crate::UtcTime)    |
/// | `latitude`         | degrees                        |
/// | `longitude`        | degrees                        |
/// | `fix_quality`      | [`GpsMode`](crate::GpsMode)    |
/// | `numsat`           | `u8`                           |
/// | `hdop`             | `f32`                          |
/// | `altitude`         | `f64`, meters                  |
/// | `geoid_separation` | `f64`, meters                  |
/// | `dgps_age`         | `f32`, seconds                 |
/// | `dgps_station`     | `u16`                          |
pub fn gga() -> Result<MessageSchema, ConfigError> {
    MessageSchema::new(
        "GGA",
        [
            utc_time("utc_time")?,
            latitude()?,
            longitude()?,
            FieldSpec::with(
                "fix_quality",
                [TokenFormat::new(Primitive::U8)],
                PostProcess::Quality,
            )?,
            scalar("numsat", Primitive::U8)?,
            scalar("hdop", Primitive::F32)?,
            with_unit("altitude", Primitive::F64, "M")?,
            with_unit("geoid_separation", Primitive::F64, "M")?,
            scalar("dgps_age", Primitive::F32)?,
            scalar("dgps_station", Primitive::U16)?,
        ],
    )
}
