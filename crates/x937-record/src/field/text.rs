//! Blank-padded alphameric field.

use super::{FieldCodec, FieldKind};
use crate::Result;

/// Free text, left-justified and blank-filled to `width`.
///
/// Blank bytes are empty text, not null, so the field only backs a
/// required `String`; declaring it optional is a configuration error.
/// Leading and trailing blanks are not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphameric {
    width: usize,
}

impl Alphameric {
    /// A text field of `width` bytes.
    pub const fn new(width: usize) -> Self {
        Self { width }
    }
}

impl FieldCodec for Alphameric {
    type Value = String;

    fn kind(&self) -> FieldKind {
        FieldKind::Alphameric
    }

    fn width(&self) -> usize {
        self.width
    }

    fn nullable(&self) -> bool {
        false
    }

    fn parse(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn format(&self, value: &String) -> Result<String> {
        Ok(value.clone())
    }
}
