use nom::{Err, error::ErrorKind};

use crate::{Error, checksum, extract, format_checksum, is_valid, validate, verify};

const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

#[test]
fn test_checksum_valid() {
    assert!(is_valid(GGA));
    assert!(is_valid("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25\r\n"));
    assert_eq!(format_checksum(checksum("GPHDT,274.07,T")), "03");
}

#[test]
fn test_checksum_single_flip() {
    let star = GGA.find('*').unwrap();

    for i in 1..star {
        let mut bytes = GGA.as_bytes().to_vec();
        // flipping the low bit never produces '$' or '*' from the characters used here
        bytes[i] ^= 0x01;
        let flipped = String::from_utf8(bytes).unwrap();

        assert!(!is_valid(&flipped), "still valid after flipping byte {i}: {flipped}");
    }
}

#[test]
fn test_checksum_mismatch() {
    let res = verify("$GPHDT,274.07,T*04");
    assert_eq!(
        res,
        Err(Err::Error(Error::ChecksumMismatch {
            expected: 0x03,
            found: 0x04
        }))
    );
}

#[test]
fn test_checksum_large_hex() {
    let res = verify("$GPHDT,274.07,T*0304");
    assert!(matches!(res, Err(Err::Error(Error::ParsingError(e))) if e.code == ErrorKind::Eof));
}

#[test]
fn test_checksum_non_hex() {
    let res = verify("$GPHDT,274.07,T*0z");
    assert!(matches!(res, Err(Err::Error(Error::ParsingError(e))) if e.code == ErrorKind::IsA));
}

#[test]
fn test_checksum_missing() {
    let res = verify("$GPHDT,274.07,T\r\n");
    assert!(matches!(res, Err(Err::Error(Error::ParsingError(e))) if e.code == ErrorKind::TakeUntil));
}

#[test]
fn test_checksum_line_endings() {
    let cases = ["", "\r\n", "\n"];

    for ending in cases {
        let sentence = format!("$GPHDT,274.07,T*03{ending}");
        assert_eq!(verify(&sentence), Ok(("", 0x03)), "ending {ending:?}");
    }

    let cases = ["\r", "\n\r", " ", "\r\n\r\n"];

    for ending in cases {
        let sentence = format!("$GPHDT,274.07,T*03{ending}");
        assert!(!is_valid(&sentence), "ending {ending:?}");
    }
}

#[test]
fn test_checksum_non_ascii() {
    assert_eq!(verify("$GPHDT,274.07,Té*03"), Err(Err::Error(Error::NonAscii)));
}

#[test]
fn test_validate_batch() {
    let text = "$GPHDT,274.07,T*03\r\n$GPHDT,274.07,T*13\r\n$GPHDT,,T*1b\r\n";
    let sentences: Vec<_> = extract(text).collect();

    assert_eq!(validate(&sentences), [true, false, true]);
}
