use crate::{
    ChecksumMode, DecodeError, Decoder, FieldValue, GpsMode, UtcTime, Value, catalog, parse,
    parse_lines,
};

const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
const VTG: &str = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25\r\n";
const HDT: &str = "$GPHDT,274.07,T*03\r\n";

fn close(value: Option<f64>, expected: f64) -> bool {
    value.is_some_and(|v| (v - expected).abs() < 1e-4)
}

#[test]
fn test_gga_fix() {
    let catalog = catalog::standard().unwrap();
    let decoded = parse(&catalog, GGA);

    assert_eq!(decoded.len(), 1);
    let gga = decoded.get("GGA").unwrap();

    assert!(close(gga.field("latitude").unwrap()[0].as_degrees(), 48.1173));
    assert!(close(gga.field("longitude").unwrap()[0].as_degrees(), 11.5167));
    assert_eq!(
        gga.field("fix_quality").unwrap()[0].as_quality(),
        Some(GpsMode::Autonomous)
    );
    assert_eq!(
        gga.field("numsat").unwrap()[0],
        FieldValue::Value(Value::U8(Some(8)))
    );
    assert_eq!(
        gga.field("utc_time").unwrap()[0].as_time(),
        Some(&UtcTime {
            hour: Some(12),
            minute: Some(35),
            second: 19.0
        })
    );
    assert_eq!(
        gga.field("hdop").unwrap()[0],
        FieldValue::Value(Value::F32(0.9))
    );
    assert_eq!(
        gga.field("geoid_separation").unwrap()[0],
        FieldValue::Value(Value::F64(46.9))
    );

    // trailing empty fields stay aligned
    assert!(gga.field("dgps_age").unwrap()[0].as_value().unwrap().is_absent());
    assert_eq!(
        gga.field("dgps_station").unwrap()[0],
        FieldValue::Value(Value::U16(None))
    );

    assert_eq!(gga.talker_ids(), ["GP"]);
    assert_eq!(gga.offsets(), [0]);
}

#[test]
fn test_interleaved_message_types() {
    let catalog = catalog::standard().unwrap();

    for text in [format!("{GGA}{VTG}"), format!("{VTG}{GGA}")] {
        let decoded = parse(&catalog, &text);

        let ids: Vec<_> = decoded.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["GGA", "VTG"]);
        assert_eq!(decoded.get("GGA").unwrap().len(), 1);
        assert_eq!(decoded.get("VTG").unwrap().len(), 1);
        assert_eq!(decoded.failures().count(), 0);
    }
}

#[test]
fn test_corrupted_checksum_is_dropped() {
    let catalog = catalog::standard().unwrap();
    let corrupted = GGA.replace("*47", "*48");
    let flipped = GGA.replace("4807.038", "4807.039");

    for gga in [corrupted, flipped] {
        let decoded = parse(&catalog, &format!("{gga}{VTG}"));

        assert!(decoded.get("GGA").is_none());
        assert!(decoded.failure("GGA").is_none());
        assert_eq!(decoded.get("VTG").unwrap().offsets(), [gga.len()]);
    }
}

#[test]
fn test_parse_is_deterministic() {
    let catalog = catalog::standard().unwrap();
    let text = format!("{GGA}{VTG}{HDT}{GGA}");

    let first = parse(&catalog, &text);
    let second = parse(&catalog, &text);

    // NaN sentinels compare unequal, the debug output does not
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

#[test]
fn test_row_count_invariant() {
    let catalog = catalog::standard().unwrap();
    let text = format!(
        "{GGA}{VTG}{GGA}noise{HDT}{GGA}$GPGGA,,,,,,0,00,99.99,,M,,M,,*48\r\n{VTG}"
    );

    let decoded = parse(&catalog, &text);
    let gga = decoded.get("GGA").unwrap();
    assert_eq!(gga.len(), 4);
    assert_eq!(gga.talker_ids().len(), 4);
    for (name, column) in gga.fields() {
        assert_eq!(column.len(), 4, "column {name}");
    }

    let vtg = decoded.get("VTG").unwrap();
    assert_eq!(vtg.len(), 2);
    assert!(vtg.fields().all(|(_, column)| column.len() == 2));

    // rows keep their order of appearance
    let offsets = gga.offsets();
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(
        gga.field("fix_quality").unwrap()[3].as_quality(),
        Some(GpsMode::NoFix)
    );
}

#[test]
fn test_no_sentences() {
    let catalog = catalog::standard().unwrap();

    for text in ["", "no sentences here", "$GPGGA,123519*", "$GGGA,1*00"] {
        let decoded = parse(&catalog, text);
        assert!(decoded.is_empty());
        assert_eq!(decoded.failures().count(), 0);
    }
}

#[test]
fn test_structural_mismatch_is_scoped() {
    let catalog = catalog::standard().unwrap();
    let truncated = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9*26\r\n";
    let decoded = parse(&catalog, &format!("{GGA}{VTG}{truncated}"));

    assert_eq!(
        decoded.failure("GGA"),
        Some(&DecodeError::StructuralMismatch {
            row: 1,
            expected: 14,
            found: 11
        })
    );
    assert!(decoded.get("GGA").is_none());
    assert_eq!(decoded.get("VTG").unwrap().len(), 1);
}

#[test]
fn test_invalid_value_fails_message_type() {
    let catalog = catalog::standard().unwrap();
    let invalid = "$GPGGA,123519,4807.038,N,01131.000,E,1,x8,0.9,545.4,M,46.9,M,,*0F\r\n";
    let decoded = parse(&catalog, &format!("{invalid}{GGA}{HDT}"));

    assert_eq!(
        decoded.failure("GGA"),
        Some(&DecodeError::InvalidValue {
            row: 0,
            token: 6,
            text: "x8".to_owned()
        })
    );
    assert!(decoded.get("GGA").is_none());
    assert!(decoded.get("HDT").is_some());
}

#[test]
fn test_optional_checksum() {
    let catalog = catalog::standard().unwrap();
    let text = "$GPHDT,90.5,T\r\n$GPHDT,274.07,T*03\r\n$GPHDT,274.07,T*04\r\n";

    let decoded = parse(&catalog, text);
    assert_eq!(decoded.get("HDT").unwrap().len(), 1);

    let decoded = Decoder::new(&catalog)
        .checksum(ChecksumMode::Optional)
        .parse(text);
    let hdt = decoded.get("HDT").unwrap();
    assert_eq!(hdt.len(), 2);
    assert_eq!(hdt.offsets(), [0, 15]);
    assert_eq!(
        hdt.field("heading").unwrap()[0],
        FieldValue::Value(Value::F64(90.5))
    );
}

#[test]
fn test_optional_checksum_skips_fragments() {
    let catalog = catalog::standard().unwrap();
    let text = format!("$GPGGA,123519,4807.0$GPHDT,274.07,T*03\r\n{GGA}");

    let decoded = Decoder::new(&catalog)
        .checksum(ChecksumMode::Optional)
        .parse(&text);

    assert_eq!(decoded.failures().count(), 0);
    let gga = decoded.get("GGA").unwrap();
    assert_eq!(gga.len(), 1);
    assert_eq!(gga.offsets(), [text.len() - GGA.len()]);
    assert_eq!(decoded.get("HDT").unwrap().offsets(), [20]);
}

#[test]
fn test_parse_lines_offsets() {
    let catalog = catalog::standard().unwrap();
    let lines = [
        "$GPHDT,274.07,T*03",
        "12:00:01 $GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
        "  $GPHDT,90.5,T*09",
    ];

    let decoded = parse_lines(&catalog, lines);

    let hdt = decoded.get("HDT").unwrap();
    assert_eq!(hdt.offsets(), [0, 2]);
    assert_eq!(
        hdt.field("heading").unwrap()[1],
        FieldValue::Value(Value::F64(90.5))
    );

    let gga = decoded.get("GGA").unwrap();
    assert_eq!(gga.offsets(), [9]);
}

#[test]
fn test_proprietary_sentence() {
    let catalog = catalog::standard().unwrap();
    let text = format!("$PSAT,HPR,130911.00,271.48,0.42,-0.73,N*0E\r\n{HDT}");

    let decoded = parse(&catalog, &text);
    let hpr = decoded.get("HPR").unwrap();

    assert_eq!(hpr.talker_ids(), ["PSAT"]);
    assert_eq!(
        hpr.field("pitch").unwrap()[0],
        FieldValue::Value(Value::F64(0.42))
    );
    assert_eq!(decoded.len(), 2);
}
