use crate::{ConfigError, MessageSchema, Primitive};

use super::{faa_mode, with_unit};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// NMEA 2.3 (feature `nmea-v2-3`):
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
pub fn vtg() -> Result<MessageSchema, ConfigError> {
    vtg_with(cfg!(feature = "nmea-v2-3"))
}

/// VTG without the NMEA 2.3 FAA mode field.
pub fn vtg_v2_0() -> Result<MessageSchema, ConfigError> {
    vtg_with(false)
}

fn vtg_with(faa: bool) -> Result<MessageSchema, ConfigError> {
    let mut fields = vec![
        with_unit("true_track", Primitive::F32, "T")?,
        with_unit("magnetic_track", Primitive::F32, "M")?,
        with_unit("speed_knots", Primitive::F32, "N")?,
        with_unit("speed_kmh", Primitive::F32, "K")?,
    ];
    if faa {
        fields.push(faa_mode()?);
    }

    MessageSchema::new("VTG", fields)
}
