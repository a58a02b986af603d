//! EBCDIC text conversion for X9.37 image exchange records.
//!
//! This crate is the native text layer underneath the field codecs: it
//! converts between EBCDIC bytes and Rust strings and handles the fixed
//! width blank padding every positional field relies on.
//!
//! # Features
//!
//! - **EBCDIC Conversion**: CP037 (the X9.37 default), CP500, CP1140
//! - **Fixed-width fields**: blank padding on encode, trimming on decode
//! - **Runtime lookup**: by CCSID or by name
//!
//! # Example
//!
//! ```rust
//! use x937_encoding::CP037;
//!
//! let bytes = CP037.encode_field("BANK", 8).unwrap();
//! assert_eq!(bytes.len(), 8);
//! assert_eq!(CP037.decode_field(&bytes).unwrap(), "BANK");
//! ```

pub mod ebcdic;
pub mod error;

pub use ebcdic::{CodePage, CodePageRegistry, CP037, CP1140, CP500};
pub use error::EncodingError;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;
