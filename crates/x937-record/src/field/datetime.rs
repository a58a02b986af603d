//! `YYYYMMDDHHmm` timestamp field.

use chrono::{NaiveDateTime, Timelike};

use super::{is_digits, FieldCodec, FieldKind};
use crate::error::CodecError;
use crate::Result;

const PATTERN: &str = "YYYYMMDDHHmm";

/// Twelve-byte date and 24-hour time, minute precision.
///
/// There is no null representation: blank input is malformed, and the
/// field can only be bound to a required target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTime;

impl DateTime {
    /// Fixed width of every date-time field.
    pub const WIDTH: usize = 12;
}

impl FieldCodec for DateTime {
    type Value = NaiveDateTime;

    fn kind(&self) -> FieldKind {
        FieldKind::DateTime
    }

    fn width(&self) -> usize {
        Self::WIDTH
    }

    fn nullable(&self) -> bool {
        false
    }

    fn parse(&self, text: &str) -> Result<NaiveDateTime> {
        let malformed = || CodecError::Format {
            kind: FieldKind::DateTime,
            text: text.to_string(),
            pattern: PATTERN,
        };
        if !is_digits(text, Self::WIDTH) {
            return Err(malformed());
        }
        NaiveDateTime::parse_from_str(text, "%Y%m%d%H%M").map_err(|_| malformed())
    }

    fn format(&self, value: &NaiveDateTime) -> Result<String> {
        // Seconds are not representable; truncate to the minute.
        let value = value.with_second(0).and_then(|v| v.with_nanosecond(0)).unwrap_or(*value);
        let text = value.format("%Y%m%d%H%M").to_string();
        if !is_digits(&text, Self::WIDTH) {
            return Err(CodecError::Format {
                kind: FieldKind::DateTime,
                text,
                pattern: PATTERN,
            });
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;
    use x937_encoding::{CodePage, CP037};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_decode_datetime() {
        let bytes = CP037.encode("202401151230").unwrap();
        assert_eq!(DateTime.decode(&bytes, &CP037).unwrap(), Some(at(2024, 1, 15, 12, 30)));
    }

    #[test]
    fn test_encode_datetime() {
        let bytes = DateTime.encode(Some(&at(2000, 2, 29, 0, 0)), &CP037).unwrap();
        assert_eq!(CP037.decode(&bytes).unwrap(), "200002290000");
    }

    #[test]
    fn test_blank_is_malformed_not_null() {
        let blank = CodePage::blank_field(12);
        let err = DateTime.decode(&blank, &CP037).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_malformed_datetimes() {
        for text in ["20240115123 ", "ABCDEFGHIJKL", "202401152400", "202401151260", "2024011512:3"] {
            let bytes = CP037.encode(text).unwrap();
            let err = DateTime.decode(&bytes, &CP037).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{text}");
        }
    }

    #[test]
    fn test_encode_null_is_caller_defect() {
        let err = DateTime.encode(None, &CP037).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CallerDefect);
    }

    #[test]
    fn test_encode_drops_seconds() {
        let value = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(23, 59, 58)
            .unwrap();
        let bytes = DateTime.encode(Some(&value), &CP037).unwrap();
        assert_eq!(CP037.decode(&bytes).unwrap(), "202406012359");
    }

    #[test]
    fn test_roundtrip() {
        for value in [
            at(1970, 1, 1, 0, 0),
            at(1999, 12, 31, 23, 59),
            at(2024, 1, 15, 12, 30),
            at(2038, 1, 19, 3, 14),
        ] {
            let bytes = DateTime.encode(Some(&value), &CP037).unwrap();
            assert_eq!(bytes.len(), DateTime::WIDTH);
            assert_eq!(DateTime.decode(&bytes, &CP037).unwrap(), Some(value));
        }
    }
}
