use crate::{ConfigError, MessageSchema, Primitive};

use super::{faa_mode, latitude, longitude, scalar, utc_time};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3 (feature `nmea-v2-3`):
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
///
/// `status` is `A` for valid data, `V` for invalid.
pub fn gll() -> Result<MessageSchema, ConfigError> {
    gll_with(cfg!(feature = "nmea-v2-3"))
}

/// GLL without the NMEA 2.3 FAA mode field.
pub fn gll_v2_0() -> Result<MessageSchema, ConfigError> {
    gll_with(false)
}

fn gll_with(faa: bool) -> Result<MessageSchema, ConfigError> {
    let mut fields = vec![
        latitude()?,
        longitude()?,
        utc_time("utc_time")?,
        scalar("status", Primitive::Char)?,
    ];
    if faa {
        fields.push(faa_mode()?);
    }

    MessageSchema::new("GLL", fields)
}
