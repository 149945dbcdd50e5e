//! Monetary value types.
//!
//! - [`Currency`]: ISO 4217 currency record from the catalog
//! - [`Money`]: an amount rounded to its currency's precision
//! - [`ExchangeRate`]: a fixed rate between two currencies
//!
//! `Money` also gains largest-remainder allocation and conversions to
//! primitive numbers from the `allocation` and `narrowing` modules.

mod allocation;
mod currency;
mod exchange_rate;
mod money;
mod narrowing;

pub use currency::Currency;
pub use exchange_rate::ExchangeRate;
pub use money::Money;
