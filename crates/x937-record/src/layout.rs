//! Record layouts: the ordered field registry for a record type.
//!
//! A record type declares its fields once through [`LayoutBuilder`]. The
//! resulting [`RecordLayout`] is sorted by ordinal, validated, and cached
//! process-wide by [`layout_of`], so every decode and encode of the type
//! walks the same sequence.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use tracing::debug;

use crate::descriptor::{Field, FieldDescriptor, Optional, Required};
use crate::error::CodecError;
use crate::field::FieldCodec;
use crate::Result;

/// A fixed-width record whose fields are described by a layout.
///
/// ```rust
/// use chrono::NaiveDate;
/// use x937_record::field::{Alphameric, Date};
/// use x937_record::{LayoutBuilder, Record};
///
/// #[derive(Debug, Default)]
/// struct Trailer {
///     record_type: String,
///     settlement_date: Option<NaiveDate>,
/// }
///
/// impl Record for Trailer {
///     const NAME: &'static str = "Trailer";
///
///     fn describe(layout: LayoutBuilder<Self>) -> LayoutBuilder<Self> {
///         layout
///             .required(1, "record_type", Alphameric::new(2), |r| &r.record_type, |r| &mut r.record_type)
///             .optional(2, "settlement_date", Date, |r| &r.settlement_date, |r| &mut r.settlement_date)
///             .length(10)
///     }
/// }
/// ```
pub trait Record: Default + Send + Sync + 'static {
    /// Record type name for diagnostics.
    const NAME: &'static str;

    /// Declare the record's fields.
    fn describe(layout: LayoutBuilder<Self>) -> LayoutBuilder<Self>;
}

// ---------------------------------------------------------------------------
//  Builder
// ---------------------------------------------------------------------------

/// Collects field declarations for a record type.
///
/// Problems are recorded as they are declared and reported together by
/// [`build`](LayoutBuilder::build) as a configuration error.
pub struct LayoutBuilder<R> {
    name: &'static str,
    fields: Vec<Field<R>>,
    length: Option<usize>,
    problems: Vec<String>,
}

impl<R: 'static> LayoutBuilder<R> {
    /// Start an empty layout for the named record type.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            length: None,
            problems: Vec::new(),
        }
    }

    /// Declare a field whose target cannot hold null.
    pub fn required<C: FieldCodec>(
        mut self,
        ordinal: u32,
        name: &'static str,
        codec: C,
        get: fn(&R) -> &C::Value,
        get_mut: fn(&mut R) -> &mut C::Value,
    ) -> Self {
        self.check_codec(name, &codec);
        let descriptor = descriptor_for(ordinal, name, &codec, false);
        self.fields.push(Field {
            descriptor,
            binding: Box::new(Required { codec, get, get_mut }),
        });
        self
    }

    /// Declare a field whose target is `Option<_>`.
    ///
    /// Only codecs with a null representation may back optional fields.
    pub fn optional<C: FieldCodec>(
        mut self,
        ordinal: u32,
        name: &'static str,
        codec: C,
        get: fn(&R) -> &Option<C::Value>,
        get_mut: fn(&mut R) -> &mut Option<C::Value>,
    ) -> Self {
        self.check_codec(name, &codec);
        if !codec.nullable() {
            self.problems.push(format!(
                "field '{name}': {} has no null representation and cannot back an optional field",
                codec.kind()
            ));
        }
        let descriptor = descriptor_for(ordinal, name, &codec, true);
        self.fields.push(Field {
            descriptor,
            binding: Box::new(Optional { codec, get, get_mut }),
        });
        self
    }

    /// Declare the expected total record length in bytes.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    fn check_codec<C: FieldCodec>(&mut self, name: &str, codec: &C) {
        if codec.width() == 0 {
            self.problems.push(format!("field '{name}': width must be positive"));
        }
        if let Err(reason) = codec.validate() {
            self.problems.push(format!("field '{name}': {reason}"));
        }
    }

    /// Sort by ordinal, assign offsets, and validate the declaration.
    pub fn build(mut self) -> Result<RecordLayout<R>> {
        if self.fields.is_empty() {
            self.problems.push("layout declares no fields".to_string());
        }

        self.fields.sort_by_key(|f| f.descriptor.ordinal);
        for pair in self.fields.windows(2) {
            let (a, b) = (&pair[0].descriptor, &pair[1].descriptor);
            if a.ordinal == b.ordinal {
                self.problems.push(format!(
                    "ordinal {} declared by both '{}' and '{}'",
                    a.ordinal, a.name, b.name
                ));
            }
        }

        let mut offset = 0;
        for field in &mut self.fields {
            field.descriptor.offset = offset;
            offset += field.descriptor.width;
        }

        if let Some(expected) = self.length {
            if expected != offset {
                self.problems.push(format!(
                    "declared length {expected} but fields cover {offset} bytes"
                ));
            }
        }

        if !self.problems.is_empty() {
            return Err(CodecError::configuration(self.name, self.problems.join("; ")));
        }

        debug!(
            record = self.name,
            fields = self.fields.len(),
            length = offset,
            "built record layout"
        );

        Ok(RecordLayout {
            name: self.name,
            fields: self.fields,
            length: offset,
        })
    }
}

fn descriptor_for<C: FieldCodec>(
    ordinal: u32,
    name: &'static str,
    codec: &C,
    nullable: bool,
) -> FieldDescriptor {
    FieldDescriptor {
        ordinal,
        name,
        kind: codec.kind(),
        width: codec.width(),
        offset: 0,
        nullable,
    }
}

// ---------------------------------------------------------------------------
//  Layout
// ---------------------------------------------------------------------------

/// Validated, ordinal-ordered field sequence for a record type.
pub struct RecordLayout<R> {
    name: &'static str,
    fields: Vec<Field<R>>,
    length: usize,
}

impl<R: Record> RecordLayout<R> {
    /// Build the layout for `R` from its declaration, bypassing the cache.
    pub fn build() -> Result<Self> {
        R::describe(LayoutBuilder::new(R::NAME)).build()
    }
}

impl<R> RecordLayout<R> {
    /// Record type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Total fixed length in bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a built layout.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field descriptors in ascending ordinal order.
    pub fn descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().map(|f| &f.descriptor)
    }

    /// Look up a descriptor by field name.
    pub fn descriptor(&self, name: &str) -> Option<&FieldDescriptor> {
        self.descriptors().find(|d| d.name == name)
    }

    pub(crate) fn fields(&self) -> &[Field<R>] {
        &self.fields
    }
}

impl<R> std::fmt::Debug for RecordLayout<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordLayout")
            .field("name", &self.name)
            .field("length", &self.length)
            .field("fields", &self.descriptors().collect::<Vec<_>>())
            .finish()
    }
}

// ---------------------------------------------------------------------------
//  Process-wide cache
// ---------------------------------------------------------------------------

type CachedLayout = Arc<dyn Any + Send + Sync>;

static LAYOUTS: LazyLock<RwLock<HashMap<TypeId, CachedLayout>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// The shared layout for `R`, built on first use.
///
/// Configuration errors are not cached; every call for a broken record
/// type reports the same error.
pub fn layout_of<R: Record>() -> Result<Arc<RecordLayout<R>>> {
    let key = TypeId::of::<R>();

    let cached = LAYOUTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .cloned();

    let entry = match cached {
        Some(entry) => entry,
        None => {
            let built: CachedLayout = Arc::new(RecordLayout::<R>::build()?);
            LAYOUTS
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .entry(key)
                .or_insert(built)
                .clone()
        }
    };

    entry
        .downcast::<RecordLayout<R>>()
        .map_err(|_| CodecError::caller_defect(format!("layout cache entry for {} has the wrong type", R::NAME)))
}
