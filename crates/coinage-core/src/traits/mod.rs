//! Core traits for the Coinage library.
//!
//! - [`CurrencyAmount`]: an amount denominated in a catalog currency

use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};
use crate::types::Currency;

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::types::Money {}
}

/// An amount bound to a currency.
///
/// Sealed: [`Money`](crate::types::Money) is the only implementation, which
/// lets APIs such as [`ExchangeRate::convert`](crate::types::ExchangeRate::convert)
/// accept "anything with a currency" while dispatching statically.
pub trait CurrencyAmount: sealed::Sealed {
    /// Returns the currency the amount is denominated in.
    fn currency(&self) -> Currency;

    /// Returns the amount, at the currency's precision.
    fn amount(&self) -> Decimal;

    /// Returns true if both amounts share a currency.
    fn same_currency_as<T: CurrencyAmount + ?Sized>(&self, other: &T) -> bool {
        self.currency() == other.currency()
    }

    /// Fails with [`MoneyError::CurrencyMismatch`] unless both amounts share a currency.
    fn ensure_same_currency<T: CurrencyAmount + ?Sized>(&self, other: &T) -> MoneyResult<()> {
        if self.same_currency_as(other) {
            Ok(())
        } else {
            Err(MoneyError::mismatch(
                self.currency().code(),
                other.currency().code(),
            ))
        }
    }
}
