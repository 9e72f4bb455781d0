use crate::{ConfigError, FieldSpec, MessageSchema, PostProcess, Primitive, TokenFormat};

use super::{latitude, longitude, scalar, utc_time};

/// GNS - Fix data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gns_fix_data>
///
/// ```text
///         1         2       3 4        5 6    7  8   9   10  11  12
///         |         |       | |        | |    |  |   |   |   |   |
///  $--GNS,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,c--c,xx,x.x,x.x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Field 6 holds one mode indicator per satellite system, GPS first and
/// GLONASS second. An empty field decodes to two [`GpsMode::Unknown`](crate::GpsMode::Unknown).
pub fn gns() -> Result<MessageSchema, ConfigError> {
    MessageSchema::new(
        "GNS",
        [
            utc_time("utc_time")?,
            latitude()?,
            longitude()?,
            FieldSpec::with(
                "mode",
                [TokenFormat::new(Primitive::Str)],
                PostProcess::Modes { columns: 2 },
            )?,
            scalar("numsat", Primitive::U8)?,
            scalar("hdop", Primitive::F32)?,
            scalar("altitude", Primitive::F64)?,
            scalar("geoid_separation", Primitive::F64)?,
            scalar("dgps_age", Primitive::F32)?,
            scalar("dgps_station", Primitive::U16)?,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, DecodeError, GpsMode, PostProcessError, Value, parse};

    #[test]
    fn test_gns_parsing() {
        let catalog = Catalog::new([gns().unwrap()]).unwrap();
        let text = "$GNGNS,014035.00,4332.69262,S,17235.48549,E,RR,13,0.9,25.63,11.24,,*70\r\n\
                    $GNGNS,014035.00,,,,,,00,,,,,*7E\r\n";

        let decoded = parse(&catalog, text);
        let gns = decoded.get("GNS").unwrap();
        assert_eq!(gns.talker_ids(), ["GN", "GN"]);

        let mode = gns.field("mode").unwrap();
        assert_eq!(mode[0].as_modes(), Some(&[GpsMode::RtkFixed, GpsMode::RtkFixed][..]));
        assert_eq!(mode[1].as_modes(), Some(&[GpsMode::Unknown, GpsMode::Unknown][..]));

        let latitude = gns.field("latitude").unwrap();
        assert!((latitude[0].as_degrees().unwrap() + 43.544877).abs() < 1e-6);
        assert!(latitude[1].as_degrees().unwrap().is_nan());

        let numsat = gns.field("numsat").unwrap();
        assert_eq!(numsat[0].as_value(), Some(&Value::U8(Some(13))));
        assert_eq!(numsat[1].as_value(), Some(&Value::U8(Some(0))));

        let separation = gns.field("geoid_separation").unwrap();
        assert_eq!(separation[0].as_value(), Some(&Value::F64(11.24)));
    }

    #[test]
    fn test_gns_unknown_mode() {
        let catalog = Catalog::new([gns().unwrap()]).unwrap();
        let decoded = parse(
            &catalog,
            "$GNGNS,014035.00,4332.69262,S,17235.48549,E,AX,13,0.9,25.63,11.24,,*69",
        );

        assert_eq!(
            decoded.failure("GNS"),
            Some(&DecodeError::PostProcess {
                row: 0,
                field: "mode".to_owned(),
                source: PostProcessError::Mode('X'),
            })
        );
    }
}
