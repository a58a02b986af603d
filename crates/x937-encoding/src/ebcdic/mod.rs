//! EBCDIC encoding support for X9.37 records.
//!
//! This module provides EBCDIC-to-text and text-to-EBCDIC conversion for
//! the IBM code pages found in check image exchange files, plus the
//! fixed-width helpers used by positional fields.
//!
//! # Supported Code Pages
//!
//! - **CP037**: USA/Canada, the default for X9.37
//! - **CP500**: International Latin-1
//! - **CP1140**: CP037 with the Euro sign
//!
//! Use [`CodePageRegistry`] or [`CodePage::from_ccsid`] for runtime lookup.

mod registry;
mod tables;

pub use registry::CodePageRegistry;
pub use tables::{CodePage, CP037, CP1140, CP500};

use crate::error::EncodingError;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;

impl CodePage {
    /// Decode EBCDIC bytes to a UTF-8 string.
    ///
    /// Handles special characters (e.g., Euro sign) that map to Unicode
    /// code points outside the Latin-1 range.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        Ok(bytes.iter().map(|&b| self.ebcdic_to_char(b)).collect())
    }

    /// Encode a UTF-8 string to EBCDIC bytes.
    ///
    /// # Errors
    /// Returns `EncodingError::ConversionFailed` if the string contains
    /// characters that cannot be represented in this code page. That
    /// includes Latin-1 characters whose byte a special character took
    /// over: CP1140 has '€' at 0x9F and no '¤'.
    pub fn encode(&self, s: &str) -> Result<Vec<u8>> {
        let mut result = Vec::with_capacity(s.len());

        for ch in s.chars() {
            if let Some(&(eb, _)) = self.special_chars.iter().find(|&&(_, c)| c == ch) {
                result.push(eb);
                continue;
            }

            if ch as u32 > 255 {
                return Err(EncodingError::ConversionFailed {
                    message: format!(
                        "character '{}' (U+{:04X}) cannot be encoded in {}",
                        ch, ch as u32, self.name
                    ),
                });
            }
            let eb = self.ascii_to_ebcdic[ch as usize];
            // The Latin-1 character this page displaced, e.g. '¤' on CP1140.
            if self.special_chars.iter().any(|&(special, _)| special == eb) {
                return Err(EncodingError::ConversionFailed {
                    message: format!(
                        "character '{}' (U+{:04X}) is replaced by '{}' in {}",
                        ch,
                        ch as u32,
                        self.ebcdic_to_char(eb),
                        self.name
                    ),
                });
            }
            result.push(eb);
        }

        Ok(result)
    }

    /// Decode a fixed-width field, trimming blank padding on both sides.
    pub fn decode_field(&self, bytes: &[u8]) -> Result<String> {
        let text = self.decode(bytes)?;
        Ok(text.trim_matches(' ').to_string())
    }

    /// Encode text into exactly `width` bytes, right-padding with EBCDIC spaces.
    ///
    /// # Errors
    /// Returns `EncodingError::FieldOverflow` if the encoded text is longer
    /// than `width`. Text is never truncated.
    pub fn encode_field(&self, text: &str, width: usize) -> Result<Vec<u8>> {
        let mut bytes = self.encode(text)?;
        if bytes.len() > width {
            return Err(EncodingError::FieldOverflow {
                width,
                actual: bytes.len(),
            });
        }
        bytes.resize(width, Self::SPACE);
        Ok(bytes)
    }

    /// A field of `width` EBCDIC spaces.
    pub fn blank_field(width: usize) -> Vec<u8> {
        vec![Self::SPACE; width]
    }

    /// True when every byte is an EBCDIC space.
    pub fn is_blank(bytes: &[u8]) -> bool {
        bytes.iter().all(|&b| b == Self::SPACE)
    }

    /// Convert a single EBCDIC byte to its Unicode character.
    pub fn ebcdic_to_char(&self, ebcdic: u8) -> char {
        if let Some(&(_, ch)) = self.special_chars.iter().find(|&&(eb, _)| eb == ebcdic) {
            ch
        } else {
            char::from(self.ebcdic_to_ascii[ebcdic as usize])
        }
    }

    /// Convert a single EBCDIC byte to Latin-1.
    ///
    /// Note: this does NOT handle special characters like the Euro sign.
    #[inline]
    pub fn ebcdic_to_ascii_byte(&self, ebcdic: u8) -> u8 {
        self.ebcdic_to_ascii[ebcdic as usize]
    }

    /// Convert a single Latin-1 byte to EBCDIC.
    #[inline]
    pub fn ascii_to_ebcdic_byte(&self, ascii: u8) -> u8 {
        self.ascii_to_ebcdic[ascii as usize]
    }

    /// Look up a code page by CCSID number.
    pub fn from_ccsid(ccsid: u16) -> Result<&'static CodePage> {
        CodePageRegistry::from_ccsid(ccsid)
    }

    /// Look up a code page by name (e.g., "CP037", "IBM-1140").
    pub fn by_name(name: &str) -> Result<&'static CodePage> {
        CodePageRegistry::by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Base conversion
    // =========================================================================

    #[test]
    fn test_cp037_roundtrip() {
        let original = "FIRST NATIONAL BANK";
        let encoded = CP037.encode(original).unwrap();
        assert_eq!(CP037.decode(&encoded).unwrap(), original);
    }

    #[test]
    fn test_cp500_roundtrip() {
        let original = "HELLO WORLD";
        let encoded = CP500.encode(original).unwrap();
        assert_eq!(CP500.decode(&encoded).unwrap(), original);
    }

    #[test]
    fn test_digits_cp037() {
        let encoded = CP037.encode("0123456789").unwrap();
        assert_eq!(
            encoded,
            vec![0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9]
        );
    }

    #[test]
    fn test_letters_cp037() {
        assert_eq!(CP037.encode("HELLO").unwrap(), vec![0xC8, 0xC5, 0xD3, 0xD3, 0xD6]);
    }

    #[test]
    fn test_space_is_0x40() {
        assert_eq!(CP037.encode(" ").unwrap(), vec![CodePage::SPACE]);
        assert_eq!(CP500.encode(" ").unwrap(), vec![CodePage::SPACE]);
        assert_eq!(CP1140.encode(" ").unwrap(), vec![CodePage::SPACE]);
    }

    #[test]
    fn test_unmappable_character() {
        let err = CP037.encode("日付").unwrap_err();
        assert!(matches!(err, EncodingError::ConversionFailed { .. }));
    }

    #[test]
    fn test_all_bytes_roundtrip() {
        for cp in CodePageRegistry::all() {
            for b in 0u8..=255 {
                let decoded = cp.decode(&[b]).unwrap();
                let re_encoded = cp.encode(&decoded).unwrap();
                assert_eq!(re_encoded, vec![b], "{}: roundtrip failed for 0x{:02X}", cp.name, b);
            }
        }
    }

    // =========================================================================
    // Euro page
    // =========================================================================

    #[test]
    fn test_cp1140_euro_sign() {
        assert_eq!(CP1140.decode(&[0x9F]).unwrap(), "€");
        assert_eq!(CP1140.encode("€").unwrap(), vec![0x9F]);
    }

    #[test]
    fn test_cp1140_rejects_currency_sign() {
        let err = CP1140.encode("¤").unwrap_err();
        assert!(matches!(err, EncodingError::ConversionFailed { .. }));
        assert_eq!(CP037.encode("¤").unwrap(), vec![0x9F]);
    }

    #[test]
    fn test_cp1140_same_as_cp037_except_9f() {
        for i in 0u8..=255 {
            if i == 0x9F {
                continue;
            }
            assert_eq!(
                CP1140.ebcdic_to_ascii_byte(i),
                CP037.ebcdic_to_ascii_byte(i),
                "CP1140 and CP037 differ at EBCDIC 0x{:02X}",
                i
            );
        }
    }

    // =========================================================================
    // Fixed-width fields
    // =========================================================================

    #[test]
    fn test_encode_field_pads_with_spaces() {
        let bytes = CP037.encode_field("AB", 5).unwrap();
        assert_eq!(bytes, vec![0xC1, 0xC2, 0x40, 0x40, 0x40]);
    }

    #[test]
    fn test_encode_field_exact_width() {
        let bytes = CP037.encode_field("20240115", 8).unwrap();
        assert_eq!(bytes.len(), 8);
        assert!(!CodePage::is_blank(&bytes));
    }

    #[test]
    fn test_encode_field_overflow() {
        let err = CP037.encode_field("TOO LONG", 3).unwrap_err();
        assert_eq!(err, EncodingError::FieldOverflow { width: 3, actual: 8 });
    }

    #[test]
    fn test_decode_field_trims() {
        let bytes = CP037.encode("  AB  ").unwrap();
        assert_eq!(CP037.decode_field(&bytes).unwrap(), "AB");
    }

    #[test]
    fn test_blank_field() {
        let blank = CodePage::blank_field(8);
        assert_eq!(blank, vec![0x40; 8]);
        assert!(CodePage::is_blank(&blank));
        assert_eq!(CP037.decode_field(&blank).unwrap(), "");
    }

    #[test]
    fn test_lookup_helpers() {
        assert_eq!(CodePage::from_ccsid(37).unwrap().name, "CP037");
        assert_eq!(CodePage::by_name("IBM-500").unwrap().ccsid, 500);
    }
}
