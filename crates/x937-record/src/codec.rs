//! Record codec: walks a layout against a byte stream.

use std::io::{Read, Write};

use tracing::{debug, trace, warn};
use x937_encoding::{CodePage, CP037};

use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::layout::{layout_of, Record, RecordLayout};
use crate::Result;

/// Decodes and encodes whole records field by field, in ordinal order.
///
/// The codec holds no per-record state and can be shared freely between
/// threads; each call owns its stream and record for its duration.
#[derive(Debug, Clone, Copy)]
pub struct RecordCodec {
    page: &'static CodePage,
}

impl Default for RecordCodec {
    fn default() -> Self {
        Self { page: &CP037 }
    }
}

impl RecordCodec {
    /// Create a codec from configuration, resolving the code page once.
    pub fn new(config: &CodecConfig) -> Result<Self> {
        let page = config.code_page()?;
        debug!(code_page = page.name, "record codec ready");
        Ok(Self { page })
    }

    /// Create a codec for an explicit code page.
    pub fn with_code_page(page: &'static CodePage) -> Self {
        Self { page }
    }

    /// The native code page in use.
    pub fn code_page(&self) -> &'static CodePage {
        self.page
    }

    /// Decode one record from the current position of `reader`.
    pub fn decode<R: Record>(&self, reader: &mut impl Read) -> Result<R> {
        let layout = layout_of::<R>()?;
        self.decode_with(&layout, reader)
    }

    /// Decode one record from a slice holding exactly one record.
    pub fn decode_bytes<R: Record>(&self, bytes: &[u8]) -> Result<R> {
        let layout = layout_of::<R>()?;
        if bytes.len() != layout.length() {
            return Err(CodecError::caller_defect(format!(
                "{} expects {} bytes, got {}",
                R::NAME,
                layout.length(),
                bytes.len()
            )));
        }
        let mut cursor = bytes;
        self.decode_with(&layout, &mut cursor)
    }

    /// Decode using an explicit layout.
    pub fn decode_with<R: Default>(
        &self,
        layout: &RecordLayout<R>,
        reader: &mut impl Read,
    ) -> Result<R> {
        let mut record = R::default();
        let mut buf = Vec::new();

        for field in layout.fields() {
            let d = &field.descriptor;
            buf.resize(d.width, 0);
            let result = reader
                .read_exact(&mut buf)
                .map_err(CodecError::from)
                .and_then(|()| field.binding.decode(&mut record, &buf, self.page));

            if let Err(err) = result {
                warn!(record = layout.name(), field = d.name, ordinal = d.ordinal, error = %err, "field decode failed");
                return Err(err.in_field(layout.name(), d.name, d.ordinal));
            }
            trace!(record = layout.name(), field = d.name, offset = d.offset, "decoded field");
        }

        Ok(record)
    }

    /// Encode one record to `writer`.
    pub fn encode<R: Record>(&self, record: &R, writer: &mut impl Write) -> Result<()> {
        let layout = layout_of::<R>()?;
        self.encode_with(&layout, record, writer)
    }

    /// Encode one record into a new buffer of exactly the layout length.
    pub fn encode_to_vec<R: Record>(&self, record: &R) -> Result<Vec<u8>> {
        let layout = layout_of::<R>()?;
        let mut out = Vec::with_capacity(layout.length());
        self.encode_with(&layout, record, &mut out)?;
        Ok(out)
    }

    /// Encode using an explicit layout.
    pub fn encode_with<R>(
        &self,
        layout: &RecordLayout<R>,
        record: &R,
        writer: &mut impl Write,
    ) -> Result<()> {
        for field in layout.fields() {
            let d = &field.descriptor;
            field
                .binding
                .encode(record, self.page)
                .and_then(|bytes| writer.write_all(&bytes).map_err(CodecError::from))
                .map_err(|err| err.in_field(layout.name(), d.name, d.ordinal))?;
            trace!(record = layout.name(), field = d.name, offset = d.offset, "encoded field");
        }
        Ok(())
    }
}
