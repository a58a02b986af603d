//! Record crate error types.
//!
//! Every failure maps to one [`ErrorKind`], and that kind survives the
//! field-context wrapping added by the record codec, so callers can tell
//! a malformed date apart from a schema mismatch without string matching.

use miette::Diagnostic;
use thiserror::Error;
use x937_encoding::EncodingError;

use crate::field::FieldKind;

/// Broad classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Layout metadata is invalid. Fatal, detected before any record is processed.
    Configuration,
    /// Field text does not match the pattern for its kind.
    Format,
    /// A blank field was decoded into a field that cannot hold null.
    DataIntegrity,
    /// The codec was called in a way correct code never does.
    CallerDefect,
    /// Text could not be converted to or from the native encoding.
    Text,
    /// The underlying byte stream failed.
    Io,
}

/// Errors produced by field and record codecs.
#[derive(Debug, Error, Diagnostic)]
pub enum CodecError {
    /// Invalid layout declaration.
    #[error("configuration error in {record}: {message}")]
    #[diagnostic(code(x937::record::configuration))]
    Configuration {
        /// Record type name.
        record: String,
        /// What is wrong with the declaration.
        message: String,
    },

    /// Non-blank text that does not parse under the field pattern.
    #[error("malformed {kind} field: '{text}' does not match {pattern}")]
    #[diagnostic(code(x937::record::format))]
    Format {
        /// Field kind being decoded or encoded.
        kind: FieldKind,
        /// Offending text (or the value rendered as text when encoding).
        text: String,
        /// Expected pattern.
        pattern: &'static str,
    },

    /// Blank field decoded into a non-nullable target.
    #[error("null value present but {kind} field is non-nullable")]
    #[diagnostic(
        code(x937::record::data_integrity),
        help("declare the field optional or correct the upstream data")
    )]
    DataIntegrity {
        /// Field kind being decoded.
        kind: FieldKind,
    },

    /// Programming error: wrong byte count, or null through a codec with
    /// no null representation.
    #[error("caller defect: {message}")]
    #[diagnostic(code(x937::record::caller_defect))]
    CallerDefect {
        /// Description of the misuse.
        message: String,
    },

    /// Native text conversion failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Text(#[from] EncodingError),

    /// Byte stream failure.
    #[error("i/o error: {0}")]
    #[diagnostic(code(x937::record::io))]
    Io(#[from] std::io::Error),

    /// A field-level failure with its position in the record.
    #[error("{record} field {ordinal} ({field}): {source}")]
    #[diagnostic(code(x937::record::field))]
    Field {
        /// Record type name.
        record: &'static str,
        /// Field name.
        field: &'static str,
        /// Field ordinal.
        ordinal: u32,
        /// Underlying failure.
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Classify this error, looking through field context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Configuration { .. } => ErrorKind::Configuration,
            CodecError::Format { .. } => ErrorKind::Format,
            CodecError::DataIntegrity { .. } => ErrorKind::DataIntegrity,
            CodecError::CallerDefect { .. } => ErrorKind::CallerDefect,
            CodecError::Text(_) => ErrorKind::Text,
            CodecError::Io(_) => ErrorKind::Io,
            CodecError::Field { source, .. } => source.kind(),
        }
    }

    /// Attach record and field context.
    pub(crate) fn in_field(self, record: &'static str, field: &'static str, ordinal: u32) -> Self {
        CodecError::Field {
            record,
            field,
            ordinal,
            source: Box::new(self),
        }
    }

    pub(crate) fn configuration(record: &str, message: impl Into<String>) -> Self {
        CodecError::Configuration {
            record: record.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn caller_defect(message: impl Into<String>) -> Self {
        CodecError::CallerDefect {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_through_field_context() {
        let err = CodecError::DataIntegrity {
            kind: FieldKind::Date,
        }
        .in_field("BundleHeader", "business_date", 5);
        assert_eq!(err.kind(), ErrorKind::DataIntegrity);
        assert_eq!(
            err.to_string(),
            "BundleHeader field 5 (business_date): null value present but Date field is non-nullable"
        );
    }

    #[test]
    fn test_text_error_kind() {
        let err: CodecError = EncodingError::FieldOverflow { width: 2, actual: 3 }.into();
        assert_eq!(err.kind(), ErrorKind::Text);
    }

    #[test]
    fn test_io_error_kind() {
        let err: CodecError = std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
