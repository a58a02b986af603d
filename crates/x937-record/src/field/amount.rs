//! Currency amount field with two implied decimal places.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::numeric::MAX_DIGITS;
use super::{zero_padded, FieldCodec, FieldKind, InvalidCodec};
use crate::error::CodecError;
use crate::Result;

const PATTERN: &str = "unsigned digits with implied cents";

/// Amounts are carried in cents: `0000012345` is 123.45.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    width: usize,
}

impl Amount {
    /// Implied decimal places.
    pub const SCALE: u32 = 2;

    /// An amount field of `width` digits.
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    fn malformed(text: String) -> CodecError {
        CodecError::Format {
            kind: FieldKind::Amount,
            text,
            pattern: PATTERN,
        }
    }
}

impl FieldCodec for Amount {
    type Value = Decimal;

    fn kind(&self) -> FieldKind {
        FieldKind::Amount
    }

    fn width(&self) -> usize {
        self.width
    }

    fn nullable(&self) -> bool {
        true
    }

    fn validate(&self) -> std::result::Result<(), InvalidCodec> {
        if self.width > MAX_DIGITS {
            return Err(InvalidCodec::WidthExceeded {
                kind: FieldKind::Amount,
                width: self.width,
                max: MAX_DIGITS,
            });
        }
        Ok(())
    }

    fn parse(&self, text: &str) -> Result<Decimal> {
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Self::malformed(text.to_string()));
        }
        let cents: u64 = text.parse().map_err(|_| Self::malformed(text.to_string()))?;
        // Any u64 fits the 96-bit mantissa.
        Ok(Decimal::from_i128_with_scale(i128::from(cents), Self::SCALE))
    }

    fn format(&self, value: &Decimal) -> Result<String> {
        let cents = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| Self::malformed(value.to_string()))?;
        if (value.is_sign_negative() && !value.is_zero()) || !cents.fract().is_zero() {
            return Err(Self::malformed(value.to_string()));
        }
        let cents = cents
            .to_u64()
            .ok_or_else(|| Self::malformed(value.to_string()))?;
        zero_padded(FieldKind::Amount, cents, self.width, PATTERN)
    }
}
