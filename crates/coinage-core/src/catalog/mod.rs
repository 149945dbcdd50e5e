//! The ISO 4217 currency catalog.
//!
//! The catalog is a static table sorted by code, plus a numeric-code index
//! built once on first use. Nothing in it is ever mutated, so lookups are
//! safe from any thread without locking.
//!
//! # Example
//!
//! ```rust
//! use coinage_core::catalog;
//!
//! let eur = catalog::by_numeric("978").unwrap();
//! assert_eq!(eur.code(), "EUR");
//!
//! assert_eq!(catalog::by_region("JP").unwrap().code(), "JPY");
//! assert!(catalog::by_locale("nl").is_err()); // neutral locale
//! ```

mod iso4217;
mod regions;

use std::sync::OnceLock;

pub use regions::{IsoRegions, RegionCurrency};

use crate::config::MoneyConfig;
use crate::error::{LookupKind, MoneyError, MoneyResult};
use crate::locale::Locale;
use crate::types::Currency;
use iso4217::CURRENCIES;

/// Currencies ordered by numeric code.
static NUMERIC_INDEX: OnceLock<Vec<&'static Currency>> = OnceLock::new();

fn numeric_index() -> &'static [&'static Currency] {
    NUMERIC_INDEX.get_or_init(|| {
        let mut index: Vec<&'static Currency> = CURRENCIES.iter().collect();
        index.sort_unstable_by_key(|c| c.numeric());
        index
    })
}

fn is_three_chars(key: &str) -> bool {
    !key.trim().is_empty() && key.chars().count() == 3
}

/// Looks up a currency by 3-letter code, ignoring ASCII case.
pub fn by_code(code: &str) -> MoneyResult<Currency> {
    if !is_three_chars(code) {
        return Err(MoneyError::not_found(LookupKind::Code, code));
    }
    let upper = code.to_ascii_uppercase();
    match CURRENCIES.binary_search_by(|c| c.code().cmp(upper.as_str())) {
        Ok(idx) => Ok(CURRENCIES[idx]),
        Err(_) => {
            log::debug!("no catalog entry for currency code '{code}'");
            Err(MoneyError::not_found(LookupKind::Code, code))
        }
    }
}

/// Looks up a currency by 3-digit numeric code (`"036"`, not `"36"`).
pub fn by_numeric(numeric: &str) -> MoneyResult<Currency> {
    if !is_three_chars(numeric) {
        return Err(MoneyError::not_found(LookupKind::Numeric, numeric));
    }
    let index = numeric_index();
    match index.binary_search_by(|c| c.numeric().cmp(numeric)) {
        Ok(idx) => Ok(*index[idx]),
        Err(_) => {
            log::debug!("no catalog entry for numeric code '{numeric}'");
            Err(MoneyError::not_found(LookupKind::Numeric, numeric))
        }
    }
}

/// Looks up the currency of a region using the built-in [`IsoRegions`] resolver.
pub fn by_region(region: &str) -> MoneyResult<Currency> {
    by_region_with(&IsoRegions, region)
}

/// Looks up the currency of a region through a caller-supplied resolver.
///
/// Any resolver failure is reported as [`MoneyError::NotFound`].
pub fn by_region_with<R>(resolver: &R, region: &str) -> MoneyResult<Currency>
where
    R: RegionCurrency + ?Sized,
{
    let code = match resolver.currency_code(region) {
        Ok(code) => code,
        Err(e) => {
            log::warn!("region '{region}' did not resolve to a currency: {e}");
            return Err(MoneyError::not_found(LookupKind::Region, region));
        }
    };
    by_code(code).map_err(|_| MoneyError::not_found(LookupKind::Region, region))
}

/// Looks up the currency of a specific locale using [`IsoRegions`].
pub fn by_locale(locale: &str) -> MoneyResult<Currency> {
    by_locale_with(&IsoRegions, locale)
}

/// Looks up the currency of a specific locale through a caller-supplied resolver.
///
/// Empty names, unparseable names and neutral (language-only) locales fail
/// with [`MoneyError::NotFound`].
pub fn by_locale_with<R>(resolver: &R, locale: &str) -> MoneyResult<Currency>
where
    R: RegionCurrency + ?Sized,
{
    let not_found = || MoneyError::not_found(LookupKind::Locale, locale);

    let parsed = match Locale::parse(locale) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("locale '{locale}' could not be parsed: {e}");
            return Err(not_found());
        }
    };
    if parsed.is_invariant() {
        return Err(not_found());
    }
    let Some(region) = parsed.region() else {
        log::debug!("locale '{locale}' is neutral; no region to resolve");
        return Err(not_found());
    };
    by_region_with(resolver, region).map_err(|_| not_found())
}

/// Returns the currency of the ambient region.
///
/// Unlike the other region lookups, failure here is the caller's problem:
/// there is no sensible default currency.
pub fn current() -> MoneyResult<Currency> {
    current_with(&IsoRegions, MoneyConfig::global())
}

/// Returns the currency of the region named by `config`.
pub fn current_with<R>(resolver: &R, config: &MoneyConfig) -> MoneyResult<Currency>
where
    R: RegionCurrency + ?Sized,
{
    let Some(region) = config.region() else {
        return Err(MoneyError::not_found(LookupKind::Region, "<ambient>"));
    };
    by_region_with(resolver, &region)
}

/// Returns every currency in the catalog, ordered by code.
pub fn all() -> impl Iterator<Item = Currency> + Clone {
    CURRENCIES.iter().copied()
}

/// Returns the number of currencies in the catalog.
#[must_use]
pub fn len() -> usize {
    CURRENCIES.len()
}
