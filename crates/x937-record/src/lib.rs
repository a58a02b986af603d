#![forbid(unsafe_code)]
//! Fixed-width field codecs for X9.37 check image exchange records.
//!
//! This crate provides:
//!
//! - **Field codecs** — Alphameric, Numeric, Amount, Date, Time, DateTime,
//!   each converting one EBCDIC positional field to a typed value
//! - **Record layouts** — ordinal-ordered field registries declared with
//!   typed accessors, validated once and cached per record type
//! - **Record codec** — decodes and encodes whole records against a
//!   forward-only byte stream
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use x937_record::field::{Alphameric, Date, Numeric};
//! use x937_record::{LayoutBuilder, Record, RecordCodec};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct ItemCount {
//!     record_type: String,
//!     business_date: NaiveDate,
//!     items: u64,
//! }
//!
//! impl Record for ItemCount {
//!     const NAME: &'static str = "ItemCount";
//!
//!     fn describe(layout: LayoutBuilder<Self>) -> LayoutBuilder<Self> {
//!         layout
//!             .required(1, "record_type", Alphameric::new(2), |r| &r.record_type, |r| &mut r.record_type)
//!             .required(2, "business_date", Date, |r| &r.business_date, |r| &mut r.business_date)
//!             .required(3, "items", Numeric::new(6), |r| &r.items, |r| &mut r.items)
//!     }
//! }
//!
//! let record = ItemCount {
//!     record_type: "70".into(),
//!     business_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     items: 12,
//! };
//! let codec = RecordCodec::default();
//! let bytes = codec.encode_to_vec(&record).unwrap();
//! assert_eq!(bytes.len(), 16);
//! assert_eq!(codec.decode_bytes::<ItemCount>(&bytes).unwrap(), record);
//! ```

pub mod codec;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod field;
pub mod layout;

pub use codec::RecordCodec;
pub use config::CodecConfig;
pub use descriptor::FieldDescriptor;
pub use error::{CodecError, ErrorKind};
pub use field::{FieldCodec, FieldKind, InvalidCodec};
pub use layout::{layout_of, LayoutBuilder, Record, RecordLayout};

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
