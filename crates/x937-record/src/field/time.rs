//! `HHmm` time-of-day field.

use chrono::{NaiveTime, Timelike};

use super::{is_digits, FieldCodec, FieldKind};
use crate::error::CodecError;
use crate::Result;

const PATTERN: &str = "HHmm";

/// Four-byte 24-hour time of day. Blank bytes are null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time;

impl Time {
    /// Fixed width of every time field.
    pub const WIDTH: usize = 4;
}

impl FieldCodec for Time {
    type Value = NaiveTime;

    fn kind(&self) -> FieldKind {
        FieldKind::Time
    }

    fn width(&self) -> usize {
        Self::WIDTH
    }

    fn nullable(&self) -> bool {
        true
    }

    fn parse(&self, text: &str) -> Result<NaiveTime> {
        let malformed = || CodecError::Format {
            kind: FieldKind::Time,
            text: text.to_string(),
            pattern: PATTERN,
        };
        if !is_digits(text, Self::WIDTH) {
            return Err(malformed());
        }
        NaiveTime::parse_from_str(text, "%H%M").map_err(|_| malformed())
    }

    fn format(&self, value: &NaiveTime) -> Result<String> {
        Ok(format!("{:02}{:02}", value.hour(), value.minute()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use x937_encoding::{CodePage, CP037};

    #[test]
    fn test_decode_time() {
        let bytes = CP037.encode("0905").unwrap();
        assert_eq!(
            Time.decode(&bytes, &CP037).unwrap(),
            NaiveTime::from_hms_opt(9, 5, 0)
        );
    }

    #[test]
    fn test_encode_time() {
        let value = NaiveTime::from_hms_opt(23, 7, 41).unwrap();
        let bytes = Time.encode(Some(&value), &CP037).unwrap();
        assert_eq!(CP037.decode(&bytes).unwrap(), "2307");
    }

    #[test]
    fn test_blank_time() {
        assert_eq!(Time.decode(&CodePage::blank_field(4), &CP037).unwrap(), None);
        assert_eq!(Time.encode(None, &CP037).unwrap(), CodePage::blank_field(4));
    }

    #[test]
    fn test_malformed_time() {
        for text in ["2460", "1299", "12:3", "AB12"] {
            let bytes = CP037.encode(text).unwrap();
            assert_eq!(Time.decode(&bytes, &CP037).unwrap_err().kind(), ErrorKind::Format, "{text}");
        }
    }
}
