//! Field descriptors and the typed accessor bindings behind them.

use x937_encoding::CodePage;

use crate::field::{FieldCodec, FieldKind};
use crate::Result;

/// Immutable metadata for one positional field of a record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldDescriptor {
    /// Declared position among sibling fields.
    pub ordinal: u32,
    /// Field name, used in error context.
    pub name: &'static str,
    /// Codec variant.
    pub kind: FieldKind,
    /// Exact byte width.
    pub width: usize,
    /// Byte offset from the start of the record.
    pub offset: usize,
    /// Whether the target accepts null.
    pub nullable: bool,
}

/// Type-erased link between a codec and one field of `R`.
pub(crate) trait Binding<R>: Send + Sync {
    fn decode(&self, record: &mut R, bytes: &[u8], page: &CodePage) -> Result<()>;
    fn encode(&self, record: &R, page: &CodePage) -> Result<Vec<u8>>;
}

/// Field declared with a plain value type: null is a data integrity error.
pub(crate) struct Required<R, C: FieldCodec> {
    pub(crate) codec: C,
    pub(crate) get: fn(&R) -> &C::Value,
    pub(crate) get_mut: fn(&mut R) -> &mut C::Value,
}

impl<R, C: FieldCodec> Binding<R> for Required<R, C> {
    fn decode(&self, record: &mut R, bytes: &[u8], page: &CodePage) -> Result<()> {
        *(self.get_mut)(record) = self.codec.decode_required(bytes, page)?;
        Ok(())
    }

    fn encode(&self, record: &R, page: &CodePage) -> Result<Vec<u8>> {
        self.codec.encode(Some((self.get)(record)), page)
    }
}

/// Field declared as `Option<_>`: blanks decode to `None`.
pub(crate) struct Optional<R, C: FieldCodec> {
    pub(crate) codec: C,
    pub(crate) get: fn(&R) -> &Option<C::Value>,
    pub(crate) get_mut: fn(&mut R) -> &mut Option<C::Value>,
}

impl<R, C: FieldCodec> Binding<R> for Optional<R, C> {
    fn decode(&self, record: &mut R, bytes: &[u8], page: &CodePage) -> Result<()> {
        *(self.get_mut)(record) = self.codec.decode(bytes, page)?;
        Ok(())
    }

    fn encode(&self, record: &R, page: &CodePage) -> Result<Vec<u8>> {
        self.codec.encode((self.get)(record).as_ref(), page)
    }
}

/// A descriptor together with its binding.
pub(crate) struct Field<R> {
    pub(crate) descriptor: FieldDescriptor,
    pub(crate) binding: Box<dyn Binding<R>>,
}
