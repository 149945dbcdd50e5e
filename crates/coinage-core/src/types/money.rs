//! Money: an amount bound to a currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use super::Currency;
use crate::error::{MoneyError, MoneyResult};
use crate::locale::{FormatSpec, NumberFormat};
use crate::traits::CurrencyAmount;

/// An amount of money in a specific currency.
///
/// The amount is rounded to the currency's decimal digits (midpoints away
/// from zero) when the value is built, and every operation that produces a
/// new `Money` rounds again. Two values are equal when both currency and
/// rounded amount match; values in different currencies are simply unequal.
///
/// Arithmetic between two `Money` values requires a shared currency and is
/// exposed through the `try_*` methods. Arithmetic with a plain `Decimal`
/// always keeps the money's currency and uses the standard operators.
///
/// # Example
///
/// ```rust
/// use coinage_core::types::{Currency, Money};
/// use rust_decimal_macros::dec;
///
/// let usd = Currency::from_code("USD").unwrap();
/// let price = Money::new(dec!(19.999), usd);
/// assert_eq!(price.amount(), dec!(20.00));
///
/// let total = price.try_add(&Money::new(dec!(5), usd)).unwrap();
/// assert_eq!(total.amount(), dec!(25.00));
///
/// let doubled = total * dec!(2);
/// assert_eq!(doubled.amount(), dec!(50.00));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a money value, rounding `amount` to the currency's precision.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: currency.round(amount),
            currency,
        }
    }

    /// Creates a money value from a raw currency code.
    ///
    /// Fails with [`MoneyError::InvalidCurrency`] for an empty or blank code
    /// and [`MoneyError::NotFound`] for a code the catalog does not know.
    pub fn with_code(amount: Decimal, code: &str) -> MoneyResult<Self> {
        if code.trim().is_empty() {
            return Err(MoneyError::invalid_currency(code));
        }
        Ok(Self::new(amount, Currency::from_code(code)?))
    }

    /// Creates a money value in the ambient currency.
    pub fn current(amount: Decimal) -> MoneyResult<Self> {
        Ok(Self::new(amount, Currency::current()?))
    }

    /// Creates a zero amount.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the rounded amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs(), self.currency)
    }

    /// Returns true if both values share a currency.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    // =========================================================================
    // Arithmetic with another Money
    // =========================================================================

    /// Adds two amounts of the same currency.
    pub fn try_add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| MoneyError::overflow("addition"))?;
        Ok(Self::new(sum, self.currency))
    }

    /// Subtracts an amount of the same currency.
    pub fn try_sub(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let difference = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| MoneyError::overflow("subtraction"))?;
        Ok(Self::new(difference, self.currency))
    }

    /// Multiplies two amounts of the same currency.
    pub fn try_mul(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let product = self
            .amount
            .checked_mul(other.amount)
            .ok_or_else(|| MoneyError::overflow("multiplication"))?;
        Ok(Self::new(product, self.currency))
    }

    /// Divides by an amount of the same currency.
    pub fn try_div(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        if other.amount.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = self
            .amount
            .checked_div(other.amount)
            .ok_or_else(|| MoneyError::overflow("division"))?;
        Ok(Self::new(quotient, self.currency))
    }

    /// Compares two amounts of the same currency.
    ///
    /// The relational operators return `false` across currencies; this is
    /// the form that reports the mismatch.
    pub fn try_cmp(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parses money text.
    ///
    /// Accepted forms:
    /// - `"USD 100"`, `"usd100.5"`, `"EUR €12,50"`... a 3-letter code, then an
    ///   optional symbol and a decimal number (`,` is a group separator)
    /// - `"JPY"`: a code alone is a zero amount
    /// - `"100.25"`: a bare number, in the ambient currency
    pub fn parse(input: &str) -> MoneyResult<Self> {
        parse_with(input, Currency::current)
    }

    /// Parses money text, binding bare numbers to `currency` instead of the
    /// ambient currency.
    pub fn parse_or(input: &str, currency: Currency) -> MoneyResult<Self> {
        parse_with(input, || Ok(currency))
    }

    /// Parses money text, returning `None` on any failure.
    #[must_use]
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Formats with an explicit specifier and base locale format.
    ///
    /// See [`FormatSpec`] for the accepted specifiers.
    pub fn format(&self, spec: &str, base: &NumberFormat) -> MoneyResult<String> {
        let spec: FormatSpec = spec.parse()?;
        self.format_spec(spec, base)
    }

    /// Formats with a parsed specifier and base locale format.
    ///
    /// Fails with [`MoneyError::Overflow`] only when a percentage does not fit.
    pub fn format_spec(&self, spec: FormatSpec, base: &NumberFormat) -> MoneyResult<String> {
        let digits = spec
            .precision()
            .unwrap_or_else(|| self.currency.decimal_digits());
        let local = base.with_currency(&self.currency).with_decimal_digits(digits);

        let text = match spec {
            FormatSpec::Currency { .. } => local.format_currency(self.amount),
            FormatSpec::International { .. } => base
                .international(&self.currency)
                .with_decimal_digits(digits)
                .format_currency(self.amount),
            FormatSpec::Number { .. } => local.format_number(self.amount, true),
            FormatSpec::Fixed { .. } => local.format_number(self.amount, false),
            FormatSpec::General {
                precision: Some(significant @ 1..),
                upper,
            } => local.format_general(self.amount, significant, upper),
            FormatSpec::General { .. } => base
                .with_currency(&self.currency)
                .format_number(self.amount, false),
            FormatSpec::Exponential { upper, .. } => {
                local.format_exponential(self.amount, digits, upper)
            }
            FormatSpec::Percent { .. } => local
                .format_percent(self.amount)
                .ok_or_else(|| MoneyError::overflow("percent"))?,
            FormatSpec::Picture(picture) => local.format_picture(self.amount, &picture),
        };
        Ok(text)
    }

    /// Formats with a specifier in the ambient locale.
    pub fn to_string_with(&self, spec: &str) -> MoneyResult<String> {
        self.format(spec, NumberFormat::current())
    }
}

/// Shared parser; `default_currency` is only consulted for bare numbers.
fn parse_with<F>(input: &str, default_currency: F) -> MoneyResult<Money>
where
    F: FnOnce() -> MoneyResult<Currency>,
{
    let text = input.trim();
    let Some(first) = text.chars().next() else {
        return Err(MoneyError::money_format(input, "input is empty"));
    };

    if first.is_ascii_digit() {
        let amount = parse_amount(text)
            .ok_or_else(|| MoneyError::money_format(input, "not a decimal number"))?;
        return Ok(Money::new(amount, default_currency()?));
    }

    let Some(code) = text.get(..3) else {
        return Err(MoneyError::money_format(input, "missing currency code"));
    };
    let currency = Currency::find_by_code(code).ok_or_else(|| {
        MoneyError::money_format(input, format!("unknown currency code '{code}'"))
    })?;

    let rest = &text[3..];
    if rest.is_empty() {
        return Ok(Money::zero(currency));
    }

    let symbol = currency.symbol();
    let number = rest.trim();
    let number = number
        .strip_prefix(symbol)
        .map_or(number, str::trim_start);
    let amount = parse_amount(number)
        .ok_or_else(|| MoneyError::money_format(input, "not a decimal number"))?;
    Ok(Money::new(amount, currency))
}

fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

impl CurrencyAmount for Money {
    fn currency(&self) -> Currency {
        self.currency
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            None // Amounts in different currencies have no order
        } else {
            self.amount.partial_cmp(&other.amount)
        }
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.amount, self.currency)
    }
}

impl Add<Decimal> for Money {
    type Output = Self;

    /// Adds a scalar, keeping the currency.
    fn add(self, rhs: Decimal) -> Self::Output {
        Self::new(self.amount + rhs, self.currency)
    }
}

impl Sub<Decimal> for Money {
    type Output = Self;

    /// Subtracts a scalar, keeping the currency.
    fn sub(self, rhs: Decimal) -> Self::Output {
        Self::new(self.amount - rhs, self.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    /// Scales the amount, keeping the currency.
    fn mul(self, rhs: Decimal) -> Self::Output {
        Self::new(self.amount * rhs, self.currency)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    /// Divides the amount, keeping the currency.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero, as `Decimal` division does.
    fn div(self, rhs: Decimal) -> Self::Output {
        Self::new(self.amount / rhs, self.currency)
    }
}

impl Add<Money> for Decimal {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        rhs + self
    }
}

impl Sub<Money> for Decimal {
    type Output = Money;

    /// `scalar - money`, in the money's currency.
    fn sub(self, rhs: Money) -> Self::Output {
        Money::new(self - rhs.amount, rhs.currency)
    }
}

impl Mul<Money> for Decimal {
    type Output = Money;

    fn mul(self, rhs: Money) -> Self::Output {
        rhs * self
    }
}

impl Div<Money> for Decimal {
    type Output = Money;

    /// `scalar / money`, in the money's currency.
    ///
    /// # Panics
    ///
    /// Panics if the money amount is zero.
    fn div(self, rhs: Money) -> Self::Output {
        Money::new(self / rhs.amount, rhs.currency)
    }
}

impl fmt::Display for Money {
    /// Formats with the ambient locale's currency pattern.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .format_spec(FormatSpec::DEFAULT, NumberFormat::current())
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(with = "rust_decimal::serde::str")]
            amount: Decimal,
            currency: Currency,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Money::new(raw.amount, raw.currency))
    }
}
