//! # Coinage Core
//!
//! Currency-aware monetary values for Rust.
//!
//! This crate provides the building blocks of the Coinage library:
//!
//! - **Catalog**: the ISO 4217 currency table, with lookups by code, numeric
//!   code, region and locale
//! - **Types**: `Currency`, `Money` (an amount rounded to its currency's
//!   precision) and `ExchangeRate`
//! - **Locale**: locale identifiers, number format conventions and format
//!   specifiers for printing money
//! - **Config**: the ambient locale and region, published once per process
//!
//! ## Design Philosophy
//!
//! - **Exact Arithmetic**: amounts are `Decimal`, never floating point
//! - **Currency Safety**: arithmetic and comparison across currencies fail
//!   instead of producing a meaningless number
//! - **Explicit Over Implicit**: the ambient currency is only used when asked
//!   for (`Money::current`, bare-number parsing, `Display`)
//!
//! ## Example
//!
//! ```rust
//! use coinage_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let usd = Currency::from_code("USD").unwrap();
//! let price = Money::new(dec!(19.99), usd);
//! let total = price.try_add(&Money::new(dec!(5.01), usd)).unwrap();
//! assert_eq!(total.amount(), dec!(25.00));
//!
//! // 0.92 euro per dollar
//! let rate: ExchangeRate = "EUR/USD 0.92".parse().unwrap();
//! let euros = rate.convert(&total).unwrap();
//! assert_eq!(euros.amount(), dec!(23.00));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_possible_truncation)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod traits;
pub mod types;

#[cfg(test)]
mod props;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{IsoRegions, RegionCurrency};
    pub use crate::config::MoneyConfig;
    pub use crate::error::{LookupKind, MoneyError, MoneyResult};
    pub use crate::locale::{FormatSpec, Locale, NumberFormat};
    pub use crate::traits::CurrencyAmount;
    pub use crate::types::{Currency, ExchangeRate, Money};
}

// Re-export commonly used types at crate root
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, ExchangeRate, Money};
