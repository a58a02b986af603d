//! Encoding crate error types.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while converting between EBCDIC and text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EncodingError {
    /// A character has no representation in the target code page.
    #[error("{message}")]
    #[diagnostic(code(x937::encoding::conversion_failed))]
    ConversionFailed {
        /// Description of the failing character.
        message: String,
    },

    /// Encoded text does not fit the fixed field width.
    #[error("text of {actual} bytes does not fit a {width}-byte field")]
    #[diagnostic(
        code(x937::encoding::field_overflow),
        help("fixed-width fields are never truncated; shorten the value")
    )]
    FieldOverflow {
        /// Declared field width.
        width: usize,
        /// Encoded length of the text.
        actual: usize,
    },

    /// Unknown CCSID or code page name.
    #[error("unknown code page: {name}")]
    #[diagnostic(code(x937::encoding::invalid_code_page))]
    InvalidCodePage {
        /// The name or CCSID that failed to resolve.
        name: String,
    },
}
