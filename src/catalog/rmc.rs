use crate::{ConfigError, FieldSpec, MessageSchema, Primitive, TokenFormat};

use super::{faa_mode, latitude, longitude, scalar, utc_time};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6 7   8   9    10 11
///         |         | |       | |        | |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3 (feature `nmea-v2-3`):
/// ```text
///                                                           12
///         1         2 3       4 5        6 7   8   9    10 11|
///         |         | |       | |        | |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// `date` is the `(day, month, year)` tuple of `ddmmyy`, the year without century.
pub fn rmc() -> Result<MessageSchema, ConfigError> {
    rmc_with(cfg!(feature = "nmea-v2-3"))
}

/// RMC without the NMEA 2.3 FAA mode field.
pub fn rmc_v2_0() -> Result<MessageSchema, ConfigError> {
    rmc_with(false)
}

fn rmc_with(faa: bool) -> Result<MessageSchema, ConfigError> {
    let mut fields = vec![
        utc_time("utc_time")?,
        scalar("status", Primitive::Char)?,
        latitude()?,
        longitude()?,
        scalar("speed_knots", Primitive::F32)?,
        scalar("track", Primitive::F32)?,
        FieldSpec::new(
            "date",
            [
                TokenFormat::fixed(Primitive::U8, 2),
                TokenFormat::fixed(Primitive::U8, 2),
                TokenFormat::new(Primitive::U8),
            ],
        )?,
        scalar("magnetic_variation", Primitive::F32)?,
        scalar("magnetic_variation_direction", Primitive::Char)?,
    ];
    if faa {
        fields.push(faa_mode()?);
    }

    MessageSchema::new("RMC", fields)
}
