//! Exchange rates between two currencies.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Currency, Money};
use crate::error::{MoneyError, MoneyResult};
use crate::traits::CurrencyAmount;

/// A fixed rate between a base and a quote currency.
///
/// `rate` is the price of one `quote` unit in `base` units: `CNY/USD 7`
/// reads "7 yuan per dollar". Conversion works in both directions: base
/// amounts are divided by the rate, quote amounts multiplied by it.
///
/// # Example
///
/// ```rust
/// use coinage_core::types::{ExchangeRate, Money};
/// use rust_decimal_macros::dec;
///
/// let rate: ExchangeRate = "CNY/USD 7".parse().unwrap();
/// let yuan = Money::with_code(dec!(70), "CNY").unwrap();
///
/// let dollars = rate.convert(&yuan).unwrap();
/// assert_eq!(dollars, Money::with_code(dec!(10), "USD").unwrap());
/// assert_eq!(rate.convert(&dollars).unwrap(), yuan);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ExchangeRate {
    base: Currency,
    quote: Currency,
    #[serde(with = "rust_decimal::serde::str")]
    rate: Decimal,
}

impl ExchangeRate {
    /// Creates an exchange rate.
    ///
    /// Fails with [`MoneyError::InvalidExchangeRate`] when both legs are the
    /// same currency or the rate is not positive.
    pub fn new(base: Currency, quote: Currency, rate: Decimal) -> MoneyResult<Self> {
        if base == quote {
            return Err(MoneyError::invalid_rate(format!(
                "base and quote are both {base}"
            )));
        }
        if rate <= Decimal::ZERO {
            return Err(MoneyError::invalid_rate(format!(
                "rate must be positive, got {rate}"
            )));
        }
        Ok(Self { base, quote, rate })
    }

    /// Creates an exchange rate from raw currency codes.
    pub fn with_codes(base: &str, quote: &str, rate: Decimal) -> MoneyResult<Self> {
        let resolve = |code: &str| {
            if code.trim().is_empty() {
                Err(MoneyError::invalid_currency(code))
            } else {
                Currency::from_code(code)
            }
        };
        Self::new(resolve(base)?, resolve(quote)?, rate)
    }

    /// Returns the base currency.
    #[must_use]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the quote currency.
    #[must_use]
    pub fn quote(&self) -> Currency {
        self.quote
    }

    /// Returns the rate (base units per quote unit).
    #[must_use]
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Converts an amount in either leg's currency into the other leg.
    ///
    /// Fails with [`MoneyError::CurrencyMismatch`] when the amount's currency
    /// is neither the base nor the quote.
    pub fn convert<M: CurrencyAmount + ?Sized>(&self, money: &M) -> MoneyResult<Money> {
        let currency = money.currency();
        let amount = money.amount();

        if currency == self.base {
            let converted = amount
                .checked_div(self.rate)
                .ok_or_else(|| MoneyError::overflow("conversion"))?;
            Ok(Money::new(converted, self.quote))
        } else if currency == self.quote {
            let converted = amount
                .checked_mul(self.rate)
                .ok_or_else(|| MoneyError::overflow("conversion"))?;
            Ok(Money::new(converted, self.base))
        } else {
            Err(MoneyError::mismatch(
                format!("{}/{}", self.base, self.quote),
                currency.code(),
            ))
        }
    }

    /// Returns the rate with base and quote swapped.
    ///
    /// `CNY/USD 8` becomes `USD/CNY 0.125`; both convert the same way.
    pub fn inverse(&self) -> MoneyResult<Self> {
        let rate = Decimal::ONE
            .checked_div(self.rate)
            .ok_or_else(|| MoneyError::overflow("inverse rate"))?;
        Self::new(self.quote, self.base, rate)
    }

    /// Parses `"<BASE>[/]<QUOTE> <rate>"`, e.g. `"EUR/USD 1.0825"` or
    /// `"EURUSD 1.0825"`.
    ///
    /// Every failure, including an unknown code or a non-positive rate, is
    /// reported as [`MoneyError::ExchangeRateFormat`].
    pub fn parse(input: &str) -> MoneyResult<Self> {
        let invalid = |reason: &str| MoneyError::rate_format(input, reason);

        let text = input.trim();
        if text.chars().count() < 6 {
            return Err(invalid("too short"));
        }

        let (Some(base_code), Some(rest)) = (text.get(..3), text.get(3..)) else {
            return Err(invalid("missing base currency"));
        };
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        let (Some(quote_code), Some(rate_text)) = (rest.get(..3), rest.get(3..)) else {
            return Err(invalid("missing quote currency"));
        };

        let base = Currency::find_by_code(base_code)
            .ok_or_else(|| invalid("unknown base currency"))?;
        let quote = Currency::find_by_code(quote_code)
            .ok_or_else(|| invalid("unknown quote currency"))?;
        let rate =
            Decimal::from_str(rate_text.trim()).map_err(|_| invalid("rate is not a decimal"))?;

        Self::new(base, quote, rate).map_err(|e| MoneyError::rate_format(input, e.to_string()))
    }

    /// Parses exchange rate text, returning `None` on any failure.
    #[must_use]
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.base, self.quote, self.rate)
    }
}

impl FromStr for ExchangeRate {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for ExchangeRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            base: Currency,
            quote: Currency,
            #[serde(with = "rust_decimal::serde::str")]
            rate: Decimal,
        }

        let raw = Raw::deserialize(deserializer)?;
        ExchangeRate::new(raw.base, raw.quote, raw.rate).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn currency(code: &str) -> Currency {
        Currency::from_code(code).unwrap()
    }

    fn money(amount: Decimal, code: &str) -> Money {
        Money::new(amount, currency(code))
    }

    #[test]
    fn test_construction_invariants() {
        assert!(ExchangeRate::new(currency("EUR"), currency("USD"), dec!(1.08)).is_ok());
        assert!(matches!(
            ExchangeRate::new(currency("EUR"), currency("EUR"), dec!(1)),
            Err(MoneyError::InvalidExchangeRate { .. })
        ));
        assert!(matches!(
            ExchangeRate::new(currency("EUR"), currency("USD"), dec!(0)),
            Err(MoneyError::InvalidExchangeRate { .. })
        ));
        assert!(matches!(
            ExchangeRate::new(currency("EUR"), currency("USD"), dec!(-1)),
            Err(MoneyError::InvalidExchangeRate { .. })
        ));
    }

    #[test]
    fn test_with_codes() {
        let rate = ExchangeRate::with_codes("eur", "usd", dec!(1.1)).unwrap();
        assert_eq!(rate.base().code(), "EUR");
        assert_eq!(rate.quote().code(), "USD");
        assert!(matches!(
            ExchangeRate::with_codes("", "USD", dec!(1)),
            Err(MoneyError::InvalidCurrency { .. })
        ));
        assert!(matches!(
            ExchangeRate::with_codes("EUR", "QQQ", dec!(1)),
            Err(MoneyError::NotFound { .. })
        ));
    }

    #[test]
    fn test_convert_both_directions() {
        let rate = ExchangeRate::parse("CNY/USD 7").unwrap();
        assert_eq!(rate.base(), currency("CNY"));
        assert_eq!(rate.quote(), currency("USD"));
        assert_eq!(rate.rate(), dec!(7));

        assert_eq!(rate.convert(&money(dec!(70), "CNY")).unwrap(), money(dec!(10), "USD"));
        assert_eq!(rate.convert(&money(dec!(10), "USD")).unwrap(), money(dec!(70), "CNY"));
    }

    #[test]
    fn test_convert_rounds_to_target_currency() {
        let rate = ExchangeRate::parse("JPY/USD 151.37").unwrap();
        assert_eq!(
            rate.convert(&money(dec!(10.01), "USD")).unwrap(),
            money(dec!(1515), "JPY")
        );
        assert_eq!(
            rate.convert(&money(dec!(1000), "JPY")).unwrap(),
            money(dec!(6.61), "USD")
        );
    }

    #[test]
    fn test_convert_unrelated_currency() {
        let rate = ExchangeRate::parse("EUR/USD 1.1").unwrap();
        assert_eq!(
            rate.convert(&money(dec!(1), "GBP")),
            Err(MoneyError::mismatch("EUR/USD", "GBP"))
        );
    }

    #[test]
    fn test_inverse() {
        let rate = ExchangeRate::parse("CNY/USD 8").unwrap();
        let inverse = rate.inverse().unwrap();
        assert_eq!(inverse.base().code(), "USD");
        assert_eq!(inverse.quote().code(), "CNY");
        assert_eq!(inverse.rate(), dec!(0.125));

        let yuan = money(dec!(80), "CNY");
        assert_eq!(rate.convert(&yuan).unwrap(), money(dec!(10), "USD"));
        assert_eq!(inverse.convert(&yuan).unwrap(), money(dec!(10), "USD"));
    }

    #[test]
    fn test_parse_forms() {
        let slash = ExchangeRate::parse("  eur/usd 1.0825 ").unwrap();
        let joined = ExchangeRate::parse("EURUSD 1.0825").unwrap();
        let unspaced = ExchangeRate::parse("EUR/USD1.0825").unwrap();
        assert_eq!(slash, joined);
        assert_eq!(slash, unspaced);
        assert_eq!(slash.to_string(), "EUR/USD 1.0825");
        assert_eq!(slash.to_string().parse::<ExchangeRate>().unwrap(), slash);
    }

    #[test]
    fn test_parse_failures() {
        for input in [
            "",
            "EUR",
            "EUR/U",
            "EUR/USD",
            "EUR/USD abc",
            "EUR/USD 0",
            "EUR/USD -1",
            "EUR/EUR 1",
            "QQQ/USD 1",
            "EUR/QQQ 1",
        ] {
            assert!(
                matches!(
                    ExchangeRate::parse(input),
                    Err(MoneyError::ExchangeRateFormat { .. })
                ),
                "{input:?} should fail with a format error"
            );
            assert!(ExchangeRate::try_parse(input).is_none());
        }
    }

    #[test]
    fn test_equality_is_structural() {
        let a = ExchangeRate::parse("EUR/USD 1.10").unwrap();
        let b = ExchangeRate::parse("EUR/USD 1.1").unwrap();
        let c = ExchangeRate::parse("USD/EUR 1.1").unwrap();
        assert_eq!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_serde() {
        let rate = ExchangeRate::parse("GBP/USD 1.27").unwrap();
        let json = serde_json::to_string(&rate).unwrap();
        assert_eq!(json, r#"{"base":"GBP","quote":"USD","rate":"1.27"}"#);
        assert_eq!(serde_json::from_str::<ExchangeRate>(&json).unwrap(), rate);

        let same = r#"{"base":"USD","quote":"USD","rate":"1"}"#;
        assert!(serde_json::from_str::<ExchangeRate>(same).is_err());
    }
}
