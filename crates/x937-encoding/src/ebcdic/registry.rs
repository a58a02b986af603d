//! Runtime lookup of code pages by CCSID or name.

use super::tables::{CodePage, CP037, CP1140, CP500};
use crate::error::EncodingError;

static PAGES: [&CodePage; 3] = [&CP037, &CP500, &CP1140];

/// Lookup table over every code page this crate ships.
pub struct CodePageRegistry;

impl CodePageRegistry {
    /// All registered code pages.
    pub fn all() -> &'static [&'static CodePage] {
        &PAGES
    }

    /// Find a code page by CCSID.
    pub fn from_ccsid(ccsid: u16) -> Result<&'static CodePage, EncodingError> {
        PAGES
            .iter()
            .copied()
            .find(|cp| cp.ccsid == ccsid)
            .ok_or_else(|| EncodingError::InvalidCodePage {
                name: format!("CCSID {ccsid}"),
            })
    }

    /// Find a code page by name.
    ///
    /// Accepts "CP037", "IBM-037", "IBM037" and "EBCDIC-037", case-insensitively.
    pub fn by_name(name: &str) -> Result<&'static CodePage, EncodingError> {
        let upper = name.trim().to_ascii_uppercase();
        let digits = ["CP", "IBM-", "IBM", "EBCDIC-"]
            .iter()
            .find_map(|prefix| upper.strip_prefix(prefix))
            .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()));

        digits
            .and_then(|d| d.parse::<u16>().ok())
            .and_then(|ccsid| Self::from_ccsid(ccsid).ok())
            .ok_or_else(|| EncodingError::InvalidCodePage {
                name: name.to_string(),
            })
    }
}
