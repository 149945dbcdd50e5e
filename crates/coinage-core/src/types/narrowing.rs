//! Conversions from money to primitive numbers.
//!
//! Integer targets truncate the amount toward zero and fail with
//! [`MoneyError::Overflow`] when the result does not fit. The currency is
//! dropped.

use rust_decimal::prelude::ToPrimitive;

use super::Money;
use crate::error::MoneyError;

macro_rules! impl_try_from_money {
    ($($target:ty => $convert:ident),* $(,)?) => {
        $(
            impl TryFrom<Money> for $target {
                type Error = MoneyError;

                fn try_from(money: Money) -> Result<Self, Self::Error> {
                    money
                        .amount()
                        .trunc()
                        .$convert()
                        .ok_or_else(|| MoneyError::overflow(stringify!($target)))
                }
            }
        )*
    };
}

impl_try_from_money!(
    i8 => to_i8,
    u8 => to_u8,
    i16 => to_i16,
    u16 => to_u16,
    i32 => to_i32,
    u32 => to_u32,
    i64 => to_i64,
    u64 => to_u64,
    i128 => to_i128,
    u128 => to_u128,
);

impl TryFrom<Money> for f64 {
    type Error = MoneyError;

    fn try_from(money: Money) -> Result<Self, Self::Error> {
        money
            .amount()
            .to_f64()
            .ok_or_else(|| MoneyError::overflow("f64"))
    }
}

impl TryFrom<Money> for f32 {
    type Error = MoneyError;

    fn try_from(money: Money) -> Result<Self, Self::Error> {
        money
            .amount()
            .to_f32()
            .filter(|value| value.is_finite())
            .ok_or_else(|| MoneyError::overflow("f32"))
    }
}

impl Money {
    /// Returns the 16-byte representation of the amount.
    ///
    /// The layout is the decimal type's own serialized form (flags, then the
    /// 96-bit mantissa, little-endian).
    #[must_use]
    pub fn to_bits(&self) -> [u8; 16] {
        self.amount().serialize()
    }
}
