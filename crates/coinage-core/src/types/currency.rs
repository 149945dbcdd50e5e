//! Currency metadata with ISO 4217 codes.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::catalog;
use crate::error::{MoneyError, MoneyResult};

/// An ISO 4217 currency record.
///
/// Instances only come from the static catalog, so every `Currency` in a
/// program refers to a known ISO code. Equality, ordering and hashing use the
/// three-letter code alone, ignoring ASCII case.
///
/// # Example
///
/// ```rust
/// use coinage_core::types::Currency;
///
/// let cny = Currency::from_code("cny").unwrap();
/// assert_eq!(cny.code(), "CNY");
/// assert_eq!(cny.numeric(), "156");
/// assert_eq!(cny.decimal_digits(), 2);
/// assert_eq!(cny.symbol(), "¥");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Currency {
    code: &'static str,
    numeric: &'static str,
    decimal_digits: u32,
    english_name: &'static str,
    symbol: &'static str,
    is_fund: bool,
}

impl Currency {
    /// The standard the catalog codes come from.
    pub const ORGANIZATION: &'static str = "ISO-4217";

    pub(crate) const fn new(
        code: &'static str,
        numeric: &'static str,
        decimal_digits: u32,
        english_name: &'static str,
        symbol: &'static str,
        is_fund: bool,
    ) -> Self {
        Self {
            code,
            numeric,
            decimal_digits,
            english_name,
            symbol,
            is_fund,
        }
    }

    /// Returns the standards organization ("ISO-4217").
    #[must_use]
    pub fn organization(&self) -> &'static str {
        Self::ORGANIZATION
    }

    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Returns the ISO 4217 3-digit numeric code, zero padded.
    #[must_use]
    pub fn numeric(&self) -> &'static str {
        self.numeric
    }

    /// Returns the number of minor-unit decimal places.
    #[must_use]
    pub fn decimal_digits(&self) -> u32 {
        self.decimal_digits
    }

    /// Returns the English name of the currency.
    #[must_use]
    pub fn english_name(&self) -> &'static str {
        self.english_name
    }

    /// Returns the display symbol.
    ///
    /// Funds and units of account carry the generic currency sign `¤`.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Returns true for fund codes (e.g. `BOV`, `USN`).
    #[must_use]
    pub fn is_fund(&self) -> bool {
        self.is_fund
    }

    /// Returns the value of one major unit (always 1).
    #[must_use]
    pub fn major_unit(&self) -> Decimal {
        Decimal::ONE
    }

    /// Returns the value of one minor unit, `10^-decimal_digits`.
    #[must_use]
    pub fn minor_unit(&self) -> Decimal {
        if self.decimal_digits == 0 {
            Decimal::ONE
        } else {
            Decimal::new(1, self.decimal_digits)
        }
    }

    /// Rounds a raw amount to this currency's precision, midpoints away from zero.
    ///
    /// The result always carries exactly `decimal_digits` places.
    #[must_use]
    pub fn round(&self, amount: Decimal) -> Decimal {
        let mut rounded =
            amount.round_dp_with_strategy(self.decimal_digits, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.decimal_digits);
        rounded
    }

    // =========================================================================
    // Catalog lookups
    // =========================================================================

    /// Looks up a currency by its 3-letter code, ignoring case.
    pub fn from_code(code: &str) -> MoneyResult<Self> {
        catalog::by_code(code)
    }

    /// Looks up a currency by its 3-letter code, returning `None` on a miss.
    #[must_use]
    pub fn find_by_code(code: &str) -> Option<Self> {
        catalog::by_code(code).ok()
    }

    /// Looks up a currency by its 3-digit numeric code.
    pub fn from_numeric(numeric: &str) -> MoneyResult<Self> {
        catalog::by_numeric(numeric)
    }

    /// Looks up a currency by its 3-digit numeric code, returning `None` on a miss.
    #[must_use]
    pub fn find_by_numeric(numeric: &str) -> Option<Self> {
        catalog::by_numeric(numeric).ok()
    }

    /// Looks up the currency used in an ISO 3166 region (`"US"`, or a specific locale such as `"en-US"`).
    pub fn from_region(region: &str) -> MoneyResult<Self> {
        catalog::by_region(region)
    }

    /// Region lookup returning `None` on a miss.
    #[must_use]
    pub fn find_by_region(region: &str) -> Option<Self> {
        catalog::by_region(region).ok()
    }

    /// Looks up the currency of a specific locale such as `"nl-NL"`.
    ///
    /// Neutral locales (`"nl"`) carry no region and never resolve.
    pub fn from_locale(locale: &str) -> MoneyResult<Self> {
        catalog::by_locale(locale)
    }

    /// Locale lookup returning `None` on a miss.
    #[must_use]
    pub fn find_by_locale(locale: &str) -> Option<Self> {
        catalog::by_locale(locale).ok()
    }

    /// Returns the currency of the ambient region.
    ///
    /// Fails when the ambient configuration yields no region, or a region
    /// without a known currency.
    pub fn current() -> MoneyResult<Self> {
        catalog::current()
    }

    /// Returns every currency in the catalog.
    pub fn all() -> impl Iterator<Item = Currency> + Clone {
        catalog::all()
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(other.code)
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.code.bytes() {
            state.write_u8(byte.to_ascii_uppercase());
        }
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code
            .bytes()
            .map(|b| b.to_ascii_uppercase())
            .cmp(other.code.bytes().map(|b| b.to_ascii_uppercase()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim())
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::from_code(&code).map_err(serde::de::Error::custom)
    }
}
