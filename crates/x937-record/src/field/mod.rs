//! Field codecs.
//!
//! A field codec converts one fixed-width positional field between its
//! native EBCDIC bytes and a typed value. Width is a property of the codec:
//! fixed for dates and times, chosen per field for text and numbers.
//!
//! Decoding always goes through two steps: the code page turns exactly
//! `width` bytes into trimmed text, then [`FieldCodec::parse`] turns that
//! text into a value. Blank text is the null representation; a codec
//! without one (DateTime) reports blank input as a format error.
//!
//! | Codec        | Width     | Value           | Pattern        |
//! |--------------|-----------|-----------------|----------------|
//! | `Alphameric` | per field | `String`        | free text      |
//! | `Numeric`    | per field | `u64`           | digits         |
//! | `Amount`     | per field | `Decimal`       | implied cents  |
//! | `Date`       | 8         | `NaiveDate`     | `YYYYMMDD`     |
//! | `Time`       | 4         | `NaiveTime`     | `HHmm`         |
//! | `DateTime`   | 12        | `NaiveDateTime` | `YYYYMMDDHHmm` |

mod amount;
mod date;
mod datetime;
mod numeric;
mod text;
mod time;

pub use amount::Amount;
pub use date::Date;
pub use datetime::DateTime;
pub use numeric::Numeric;
pub use text::Alphameric;
pub use time::Time;

use std::fmt;

use x937_encoding::CodePage;

use crate::error::CodecError;
use crate::Result;

/// Tag identifying which codec variant owns a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FieldKind {
    /// Blank-padded text.
    Alphameric,
    /// Unsigned integer digits.
    Numeric,
    /// Currency amount with two implied decimal places.
    Amount,
    /// `YYYYMMDD`
    Date,
    /// `HHmm`
    Time,
    /// `YYYYMMDDHHmm`
    DateTime,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Alphameric => "Alphameric",
            FieldKind::Numeric => "Numeric",
            FieldKind::Amount => "Amount",
            FieldKind::Date => "Date",
            FieldKind::Time => "Time",
            FieldKind::DateTime => "DateTime",
        };
        f.write_str(name)
    }
}

/// Construction parameters a codec rejects.
///
/// Reported as a configuration error when the layout is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCodec {
    /// Too many digits for the value type.
    #[error("{kind} width {width} exceeds {max} digits")]
    WidthExceeded {
        /// Codec variant.
        kind: FieldKind,
        /// Declared width.
        width: usize,
        /// Largest supported width.
        max: usize,
    },
}

/// Conversion contract shared by every field kind.
///
/// Implementors supply the text-level [`parse`](FieldCodec::parse) and
/// [`format`](FieldCodec::format); the byte-level [`decode`](FieldCodec::decode)
/// and [`encode`](FieldCodec::encode) wrap them with the width checks and
/// native text conversion, and are what the record codec calls.
pub trait FieldCodec: fmt::Debug + Send + Sync + 'static {
    /// Typed value produced by this codec.
    type Value;

    /// Variant tag.
    fn kind(&self) -> FieldKind;

    /// Exact byte width of the field.
    fn width(&self) -> usize;

    /// Whether blank bytes are a valid (null) representation.
    fn nullable(&self) -> bool;

    /// Check construction parameters. Called once when a layout is built.
    fn validate(&self) -> std::result::Result<(), InvalidCodec> {
        Ok(())
    }

    /// Parse trimmed, non-blank field text.
    fn parse(&self, text: &str) -> Result<Self::Value>;

    /// Render a present value as field text of at most `width` characters.
    fn format(&self, value: &Self::Value) -> Result<String>;

    /// Decode exactly `width` bytes. Blank input yields `None` when the
    /// codec has a null representation.
    fn decode(&self, bytes: &[u8], page: &CodePage) -> Result<Option<Self::Value>> {
        check_width(self.kind(), self.width(), bytes.len())?;
        let text = page.decode_field(bytes)?;
        if text.is_empty() && self.nullable() {
            return Ok(None);
        }
        self.parse(&text).map(Some)
    }

    /// Decode into a non-nullable target: null becomes a data integrity error.
    fn decode_required(&self, bytes: &[u8], page: &CodePage) -> Result<Self::Value> {
        self.decode(bytes, page)?
            .ok_or(CodecError::DataIntegrity { kind: self.kind() })
    }

    /// Encode to exactly `width` bytes. `None` produces blanks, and is a
    /// caller defect for codecs without a null representation.
    fn encode(&self, value: Option<&Self::Value>, page: &CodePage) -> Result<Vec<u8>> {
        let bytes = match value {
            Some(v) => page.encode_field(&self.format(v)?, self.width())?,
            None if self.nullable() => CodePage::blank_field(self.width()),
            None => {
                return Err(CodecError::caller_defect(format!(
                    "{} field has no null representation",
                    self.kind()
                )))
            }
        };
        debug_assert_eq!(bytes.len(), self.width());
        Ok(bytes)
    }
}

fn check_width(kind: FieldKind, width: usize, actual: usize) -> Result<()> {
    if actual != width {
        return Err(CodecError::caller_defect(format!(
            "{kind} field expects {width} bytes, got {actual}"
        )));
    }
    Ok(())
}

/// Render `value` zero-padded to `width` digits, or a format error if it
/// does not fit.
pub(crate) fn zero_padded(
    kind: FieldKind,
    value: impl fmt::Display,
    width: usize,
    pattern: &'static str,
) -> Result<String> {
    let text = format!("{value:0width$}");
    if text.len() > width {
        return Err(CodecError::Format {
            kind,
            text,
            pattern,
        });
    }
    Ok(text)
}

/// Exactly `len` ASCII digits.
pub(crate) fn is_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use x937_encoding::CP037;

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::DateTime.to_string(), "DateTime");
        assert_eq!(FieldKind::Alphameric.to_string(), "Alphameric");
    }

    #[test]
    fn test_wrong_width_is_caller_defect() {
        let short = CP037.encode("2024011").unwrap();
        let err = Date.decode(&short, &CP037).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CallerDefect);

        let long = CP037.encode("2024011512301").unwrap();
        let err = DateTime.decode(&long, &CP037).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CallerDefect);
    }

    #[test]
    fn test_encode_width_invariant() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(Date.encode(Some(&date), &CP037).unwrap().len(), 8);
        assert_eq!(Date.encode(None, &CP037).unwrap().len(), 8);
        assert_eq!(Numeric::new(6).encode(Some(&42), &CP037).unwrap().len(), 6);
        assert_eq!(Alphameric::new(10).encode(Some(&"ABC".to_string()), &CP037).unwrap().len(), 10);
    }

    #[test]
    fn test_zero_padded_overflow() {
        assert_eq!(zero_padded(FieldKind::Numeric, 7, 3, "digits").unwrap(), "007");
        let err = zero_padded(FieldKind::Numeric, 12345, 3, "digits").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("20240115", 8));
        assert!(!is_digits("2024011", 8));
        assert!(!is_digits("2024O115", 8));
    }
}
