//! `YYYYMMDD` date field.

use chrono::NaiveDate;

use super::{is_digits, FieldCodec, FieldKind};
use crate::error::CodecError;
use crate::Result;

const PATTERN: &str = "YYYYMMDD";

/// Eight-byte calendar date with no separators and no time zone.
///
/// Blank bytes decode to null; encoding null writes eight blanks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Date;

impl Date {
    /// Fixed width of every date field.
    pub const WIDTH: usize = 8;
}

impl FieldCodec for Date {
    type Value = NaiveDate;

    fn kind(&self) -> FieldKind {
        FieldKind::Date
    }

    fn width(&self) -> usize {
        Self::WIDTH
    }

    fn nullable(&self) -> bool {
        true
    }

    fn parse(&self, text: &str) -> Result<NaiveDate> {
        let malformed = || CodecError::Format {
            kind: FieldKind::Date,
            text: text.to_string(),
            pattern: PATTERN,
        };
        if !is_digits(text, Self::WIDTH) {
            return Err(malformed());
        }
        NaiveDate::parse_from_str(text, "%Y%m%d").map_err(|_| malformed())
    }

    fn format(&self, value: &NaiveDate) -> Result<String> {
        let text = value.format("%Y%m%d").to_string();
        if !is_digits(&text, Self::WIDTH) {
            return Err(CodecError::Format {
                kind: FieldKind::Date,
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
    use x937_encoding::{CodePage, CP037};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_decode_date() {
        let bytes = CP037.encode("20240115").unwrap();
        assert_eq!(Date.decode(&bytes, &CP037).unwrap(), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_encode_date() {
        let bytes = Date.encode(Some(&ymd(1999, 12, 31)), &CP037).unwrap();
        assert_eq!(CP037.decode(&bytes).unwrap(), "19991231");
    }

    #[test]
    fn test_encode_pads_small_years() {
        let bytes = Date.encode(Some(&ymd(7, 3, 4)), &CP037).unwrap();
        assert_eq!(CP037.decode(&bytes).unwrap(), "00070304");
    }

    #[test]
    fn test_blank_decodes_to_null() {
        let blank = CodePage::blank_field(8);
        assert_eq!(Date.decode(&blank, &CP037).unwrap(), None);
    }

    #[test]
    fn test_blank_into_required_target() {
        let blank = CodePage::blank_field(8);
        let err = Date.decode_required(&blank, &CP037).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataIntegrity);
        assert!(err.to_string().contains("non-nullable"));
    }

    #[test]
    fn test_encode_null_is_blank() {
        let bytes = Date.encode(None, &CP037).unwrap();
        assert_eq!(CP037.decode(&bytes).unwrap(), "        ");
    }

    #[test]
    fn test_malformed_dates() {
        for text in ["2024133 ", "ABCDEFGH", "20241301", "20240230", "2024-1-1"] {
            let bytes = CP037.encode(text).unwrap();
            let err = Date.decode(&bytes, &CP037).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{text}");
        }
    }

    #[test]
    fn test_leap_day() {
        let bytes = CP037.encode("20000229").unwrap();
        assert_eq!(Date.decode(&bytes, &CP037).unwrap(), Some(ymd(2000, 2, 29)));
    }

    #[test]
    fn test_year_out_of_range_on_encode() {
        let err = Date.format(&ymd(10000, 1, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_roundtrip_across_calendar() {
        let mut day = ymd(1899, 12, 25);
        let end = ymd(2101, 1, 10);
        while day <= end {
            let bytes = Date.encode(Some(&day), &CP037).unwrap();
            assert_eq!(Date.decode(&bytes, &CP037).unwrap(), Some(day));
            day += chrono::Duration::days(17);
        }
    }
}
