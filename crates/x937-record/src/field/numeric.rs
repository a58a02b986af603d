//! Unsigned numeric field.

use super::{zero_padded, FieldCodec, FieldKind, InvalidCodec};
use crate::error::CodecError;
use crate::Result;

const PATTERN: &str = "unsigned digits";

/// Largest width whose digits always fit a `u64`.
pub(crate) const MAX_DIGITS: usize = 19;

/// Right-justified, zero-filled unsigned integer. Blank bytes are null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric {
    width: usize,
}

impl Numeric {
    /// A numeric field of `width` digits.
    pub const fn new(width: usize) -> Self {
        Self { width }
    }
}

impl FieldCodec for Numeric {
    type Value = u64;

    fn kind(&self) -> FieldKind {
        FieldKind::Numeric
    }

    fn width(&self) -> usize {
        self.width
    }

    fn nullable(&self) -> bool {
        true
    }

    fn validate(&self) -> std::result::Result<(), InvalidCodec> {
        if self.width > MAX_DIGITS {
            return Err(InvalidCodec::WidthExceeded {
                kind: FieldKind::Numeric,
                width: self.width,
                max: MAX_DIGITS,
            });
        }
        Ok(())
    }

    fn parse(&self, text: &str) -> Result<u64> {
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::Format {
                kind: FieldKind::Numeric,
                text: text.to_string(),
                pattern: PATTERN,
            });
        }
        text.parse().map_err(|_| CodecError::Format {
            kind: FieldKind::Numeric,
            text: text.to_string(),
            pattern: PATTERN,
        })
    }

    fn format(&self, value: &u64) -> Result<String> {
        zero_padded(FieldKind::Numeric, value, self.width, PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use x937_encoding::{CodePage, CP037};

    #[test]
    fn test_decode_zero_filled() {
        let bytes = CP037.encode("000123").unwrap();
        assert_eq!(Numeric::new(6).decode(&bytes, &CP037).unwrap(), Some(123));
    }

    #[test]
    fn test_decode_space_filled() {
        let bytes = CP037.encode("   123").unwrap();
        assert_eq!(Numeric::new(6).decode(&bytes, &CP037).unwrap(), Some(123));
    }

    #[test]
    fn test_encode_zero_fills() {
        let bytes = Numeric::new(6).encode(Some(&42), &CP037).unwrap();
        assert_eq!(CP037.decode(&bytes).unwrap(), "000042");
    }

    #[test]
    fn test_blank_is_null() {
        let codec = Numeric::new(3);
        assert_eq!(codec.decode(&CodePage::blank_field(3), &CP037).unwrap(), None);
    }

    #[test]
    fn test_rejects_non_digits() {
        for text in ["12A", "-12", "1 2", "+12"] {
            let bytes = CP037.encode(text).unwrap();
            let err = Numeric::new(3).decode(&bytes, &CP037).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{text}");
        }
    }

    #[test]
    fn test_overflow_on_encode() {
        let err = Numeric::new(2).encode(Some(&100), &CP037).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_validate_width() {
        assert!(Numeric::new(19).validate().is_ok());
        assert!(Numeric::new(20).validate().is_err());
    }

    #[test]
    fn test_max_value_roundtrip() {
        let codec = Numeric::new(19);
        let value = 9_999_999_999_999_999_999u64;
        let bytes = codec.encode(Some(&value), &CP037).unwrap();
        assert_eq!(codec.decode(&bytes, &CP037).unwrap(), Some(value));
    }
}
