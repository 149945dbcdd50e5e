//! # Coinage
//!
//! Currency-aware monetary values: an ISO 4217 catalog, money amounts that
//! round to their currency's precision, and exchange rates.
//!
//! This crate re-exports the public API of `coinage-core`.
//!
//! ```rust
//! use coinage::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let yen = Money::parse("JPY 1234.5").unwrap();
//! assert_eq!(yen.amount(), dec!(1235));
//! assert_eq!(yen.currency(), Currency::from_code("jpy").unwrap());
//! ```

#![warn(missing_docs)]

pub use coinage_core::*;
