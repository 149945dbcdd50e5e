//! Locale number formatting for money values.
//!
//! A [`NumberFormat`] is a plain value: separators, digit grouping, sign
//! placement patterns, decimal digits and the currency symbol. It is derived
//! once from a [`Locale`] and then specialized per currency, never mutated in
//! place.
//!
//! Pattern indices follow the common locale-data enumeration, where `$` is
//! the symbol, `n` the number and `-` the negative sign:
//!
//! | Positive | Layout | Negative | Layout  | Negative | Layout   |
//! |----------|--------|----------|---------|----------|----------|
//! | 0        | `$n`   | 0        | `($n)`  | 9        | `-$ n`   |
//! | 1        | `n$`   | 1        | `-$n`   | 10       | `n $-`   |
//! | 2        | `$ n`  | 2        | `$-n`   | 11       | `$ n-`   |
//! | 3        | `n $`  | 3        | `$n-`   | 12       | `$ -n`   |
//! |          |        | 4        | `(n$)`  | 13       | `n- $`   |
//! |          |        | 5        | `-n$`   | 14       | `($ n)`  |
//! |          |        | 6        | `n-$`   | 15       | `(n $)`  |
//! |          |        | 7        | `n$-`   | 16       | `$- n`   |
//! |          |        | 8        | `-n $`  |          |          |

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::{Locale, Picture};
use crate::types::Currency;

/// Format derived from the ambient locale.
static CURRENT_FORMAT: OnceLock<NumberFormat> = OnceLock::new();

/// Static per-locale conventions.
struct Convention {
    key: &'static str,
    decimal_separator: &'static str,
    group_separator: &'static str,
    group_sizes: &'static [u32],
    positive_pattern: u8,
    negative_pattern: u8,
}

const fn convention(
    key: &'static str,
    decimal_separator: &'static str,
    group_separator: &'static str,
    group_sizes: &'static [u32],
    positive_pattern: u8,
    negative_pattern: u8,
) -> Convention {
    Convention {
        key,
        decimal_separator,
        group_separator,
        group_sizes,
        positive_pattern,
        negative_pattern,
    }
}

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

/// Keyed by `language` or `language-REGION`; the region-specific entry wins.
static CONVENTIONS: &[Convention] = &[
    convention("", ".", ",", &[3], 0, 0),
    convention("da", ",", ".", &[3], 3, 8),
    convention("de", ",", ".", &[3], 3, 8),
    convention("de-CH", ".", "\u{2019}", &[3], 2, 12),
    convention("en", ".", ",", &[3], 0, 1),
    convention("en-IN", ".", ",", &[3, 2], 0, 1),
    convention("es", ",", ".", &[3], 3, 8),
    convention("es-MX", ".", ",", &[3], 0, 1),
    convention("fi", ",", NBSP, &[3], 3, 8),
    convention("fr", ",", NARROW_NBSP, &[3], 3, 8),
    convention("hi", ".", ",", &[3, 2], 0, 1),
    convention("it", ",", ".", &[3], 3, 8),
    convention("ja", ".", ",", &[3], 0, 1),
    convention("ko", ".", ",", &[3], 0, 1),
    convention("nb", ",", NBSP, &[3], 3, 8),
    convention("nl", ",", ".", &[3], 2, 12),
    convention("pl", ",", NBSP, &[3], 3, 8),
    convention("pt", ",", NBSP, &[3], 3, 8),
    convention("pt-BR", ",", ".", &[3], 2, 9),
    convention("ru", ",", NBSP, &[3], 3, 8),
    convention("sv", ",", NBSP, &[3], 3, 8),
    convention("tr", ",", ".", &[3], 0, 1),
    convention("zh", ".", ",", &[3], 0, 1),
];

/// Maps a negative currency pattern to its code-style equivalent.
///
/// Symbol-adjacent layouts gain a space between the code and the number;
/// patterns that are already spaced (8 and above) are kept.
#[must_use]
pub fn international_negative_pattern(pattern: u8) -> u8 {
    match pattern {
        0 => 14,
        1 => 9,
        2 => 12,
        3 => 11,
        4 => 15,
        5 => 8,
        6 => 13,
        7 => 10,
        other => other,
    }
}

/// Maps a positive currency pattern to its code-style equivalent.
#[must_use]
pub fn international_positive_pattern(pattern: u8) -> u8 {
    match pattern {
        0 => 2,
        1 => 3,
        other => other,
    }
}

/// Number formatting configuration for one locale and currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Digits after the decimal separator.
    pub decimal_digits: u32,
    /// Currency symbol (or code, in international mode).
    pub symbol: String,
    /// Decimal separator.
    pub decimal_separator: String,
    /// Digit group separator.
    pub group_separator: String,
    /// Group sizes from the decimal point leftwards; the last size repeats, a trailing 0 stops grouping.
    pub group_sizes: Vec<u32>,
    /// Negative sign.
    pub negative_sign: String,
    /// Positive currency pattern index (0-3).
    pub positive_pattern: u8,
    /// Negative currency pattern index (0-16).
    pub negative_pattern: u8,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

impl NumberFormat {
    /// Returns the invariant (culture-neutral) format.
    #[must_use]
    pub fn invariant() -> Self {
        Self::from_convention(&CONVENTIONS[0])
    }

    /// Derives the format for a locale, falling back from `language-REGION`
    /// to `language` to the invariant conventions.
    #[must_use]
    pub fn for_locale(locale: &Locale) -> Self {
        let language = locale.language();
        let specific = locale.region().map(|region| format!("{language}-{region}"));

        let found = specific
            .as_deref()
            .and_then(find_convention)
            .or_else(|| find_convention(language));

        match found {
            Some(convention) => Self::from_convention(convention),
            None => {
                log::debug!("no number conventions for locale '{locale}', using invariant");
                Self::invariant()
            }
        }
    }

    /// Returns the format of the ambient locale, derived on first use.
    #[must_use]
    pub fn current() -> &'static Self {
        CURRENT_FORMAT.get_or_init(|| Self::for_locale(&Locale::current()))
    }

    fn from_convention(convention: &Convention) -> Self {
        Self {
            decimal_digits: 2,
            symbol: "\u{a4}".to_string(),
            decimal_separator: convention.decimal_separator.to_string(),
            group_separator: convention.group_separator.to_string(),
            group_sizes: convention.group_sizes.to_vec(),
            negative_sign: "-".to_string(),
            positive_pattern: convention.positive_pattern,
            negative_pattern: convention.negative_pattern,
        }
    }

    /// Returns a copy carrying the currency's symbol and decimal digits.
    #[must_use]
    pub fn with_currency(&self, currency: &Currency) -> Self {
        Self {
            decimal_digits: currency.decimal_digits(),
            symbol: currency.symbol().to_string(),
            ..self.clone()
        }
    }

    /// Returns a copy that prints the currency's ISO code, spaced from the
    /// number, in place of its symbol.
    #[must_use]
    pub fn international(&self, currency: &Currency) -> Self {
        Self {
            decimal_digits: currency.decimal_digits(),
            symbol: currency.code().to_string(),
            positive_pattern: international_positive_pattern(self.positive_pattern),
            negative_pattern: international_negative_pattern(self.negative_pattern),
            ..self.clone()
        }
    }

    /// Returns a copy with a different number of decimal digits.
    #[must_use]
    pub fn with_decimal_digits(mut self, decimal_digits: u32) -> Self {
        self.decimal_digits = decimal_digits;
        self
    }

    /// Formats `value` using the currency patterns.
    #[must_use]
    pub fn format_currency(&self, value: Decimal) -> String {
        let rounded = self.round(value);
        let number = self.digits_text(rounded.abs(), true);
        let symbol = self.symbol.as_str();

        if is_negative(rounded) {
            let sign = self.negative_sign.as_str();
            apply_negative_pattern(self.negative_pattern, symbol, &number, sign)
        } else {
            apply_positive_pattern(self.positive_pattern, symbol, &number)
        }
    }

    /// Formats `value` as a plain number, optionally with digit grouping.
    #[must_use]
    pub fn format_number(&self, value: Decimal, grouped: bool) -> String {
        let rounded = self.round(value);
        let number = self.digits_text(rounded.abs(), grouped);
        if is_negative(rounded) {
            format!("{}{number}", self.negative_sign)
        } else {
            number
        }
    }

    /// Formats `value` in scientific notation with `digits` decimals and a
    /// signed exponent of at least three digits, e.g. `1.23E+003`.
    #[must_use]
    pub fn format_exponential(&self, value: Decimal, digits: u32, upper: bool) -> String {
        let (significand, exponent) = match decompose(value.abs()) {
            Some((significand, exponent)) => carry(
                significand.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero),
                exponent,
            ),
            None => (Decimal::ZERO, 0),
        };
        let text = format!(
            "{}{}",
            self.localize(&pad_fraction(&significand.to_string(), digits)),
            exponent_suffix(exponent, 3, upper)
        );
        self.signed(is_negative(value), text)
    }

    /// Formats `value` rounded to `significant` digits. Scientific notation
    /// is used when the exponent is below -5 or not less than `significant`.
    #[must_use]
    pub fn format_general(&self, value: Decimal, significant: u32, upper: bool) -> String {
        let Some((significand, exponent)) = decompose(value.abs()) else {
            return "0".to_string();
        };
        let significant = significant.max(1);
        let places = significant - 1;
        let (significand, exponent) = carry(
            significand.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero),
            exponent,
        );

        let text = if exponent < -5 || exponent >= i64::from(significant) {
            format!(
                "{}{}",
                self.localize(&significand.normalize().to_string()),
                exponent_suffix(exponent, 2, upper)
            )
        } else {
            let places = u32::try_from(i64::from(places) - exponent).unwrap_or(0);
            let plain = value
                .abs()
                .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
                .normalize();
            self.localize(&plain.to_string())
        };
        self.signed(is_negative(value), text)
    }

    /// Formats `value` times 100 as a grouped number with a percent sign.
    ///
    /// Returns `None` when the scaled value overflows.
    #[must_use]
    pub fn format_percent(&self, value: Decimal) -> Option<String> {
        let number = self.format_number(value.checked_mul(Decimal::ONE_HUNDRED)?, true);
        if self.positive_pattern == 3 {
            Some(format!("{number}{NBSP}%"))
        } else {
            Some(format!("{number}%"))
        }
    }

    /// Formats `value` with a custom picture, using this format's separators.
    #[must_use]
    pub fn format_picture(&self, value: Decimal, picture: &Picture) -> String {
        let rounded = value
            .round_dp_with_strategy(picture.max_fraction, RoundingStrategy::MidpointAwayFromZero);
        let text = rounded.abs().to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let integer = format!(
            "{:0>width$}",
            integer.trim_start_matches('0'),
            width = picture.min_integer as usize
        );
        let mut out = if picture.grouped {
            group_digits(&integer, &self.group_sizes, &self.group_separator)
        } else {
            integer
        };

        let fraction = format!(
            "{:0<width$}",
            fraction.trim_end_matches('0'),
            width = picture.min_fraction as usize
        );
        if !fraction.is_empty() {
            out.push_str(&self.decimal_separator);
            out.push_str(&fraction);
        }
        self.signed(is_negative(rounded), out)
    }

    fn signed(&self, negative: bool, text: String) -> String {
        if negative {
            format!("{}{text}", self.negative_sign)
        } else {
            text
        }
    }

    fn localize(&self, plain: &str) -> String {
        plain.replacen('.', &self.decimal_separator, 1)
    }

    fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.decimal_digits, RoundingStrategy::MidpointAwayFromZero)
    }

    fn digits_text(&self, magnitude: Decimal, grouped: bool) -> String {
        let mut scaled = magnitude;
        scaled.rescale(self.decimal_digits);
        let text = scaled.to_string();

        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text.as_str(), None),
        };

        let mut out = if grouped {
            group_digits(integer, &self.group_sizes, &self.group_separator)
        } else {
            integer.to_string()
        };
        if let Some(fraction) = fraction.filter(|f| !f.is_empty()) {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

fn find_convention(key: &str) -> Option<&'static Convention> {
    CONVENTIONS.iter().find(|c| c.key == key)
}

fn is_negative(rounded: Decimal) -> bool {
    rounded.is_sign_negative() && !rounded.is_zero()
}

/// Splits a magnitude into a significand in `[1, 10)` and a power of ten.
fn decompose(magnitude: Decimal) -> Option<(Decimal, i64)> {
    if magnitude.is_zero() {
        return None;
    }
    let normalized = magnitude.normalize();
    let mantissa = normalized.mantissa().abs();
    let shift = mantissa.ilog10();
    let exponent = i64::from(shift) - i64::from(normalized.scale());
    Some((Decimal::from_i128_with_scale(mantissa, shift), exponent))
}

/// Renormalizes a significand that rounded up to 10.
fn carry(significand: Decimal, exponent: i64) -> (Decimal, i64) {
    if significand >= Decimal::TEN {
        (Decimal::ONE, exponent + 1)
    } else {
        (significand, exponent)
    }
}

fn pad_fraction(text: &str, digits: u32) -> String {
    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    if digits == 0 {
        return integer.to_string();
    }
    format!("{integer}.{fraction:0<width$}", width = digits as usize)
}

fn exponent_suffix(exponent: i64, min_digits: usize, upper: bool) -> String {
    let marker = if upper { 'E' } else { 'e' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{marker}{sign}{:0min_digits$}", exponent.unsigned_abs())
}

fn group_digits(integer: &str, sizes: &[u32], separator: &str) -> String {
    let digits: Vec<char> = integer.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = digits.len();
    let mut idx = 0;
    let mut size = sizes.first().copied().unwrap_or(0) as usize;

    while size > 0 && end > size {
        groups.push(digits[end - size..end].iter().collect());
        end -= size;
        if idx + 1 < sizes.len() {
            idx += 1;
            size = sizes[idx] as usize;
        }
    }
    groups.push(digits[..end].iter().collect());
    groups.reverse();
    groups.join(separator)
}

fn apply_positive_pattern(pattern: u8, symbol: &str, number: &str) -> String {
    match pattern {
        1 => format!("{number}{symbol}"),
        2 => format!("{symbol} {number}"),
        3 => format!("{number} {symbol}"),
        _ => format!("{symbol}{number}"),
    }
}

fn apply_negative_pattern(pattern: u8, symbol: &str, number: &str, sign: &str) -> String {
    match pattern {
        1 => format!("{sign}{symbol}{number}"),
        2 => format!("{symbol}{sign}{number}"),
        3 => format!("{symbol}{number}{sign}"),
        4 => format!("({number}{symbol})"),
        5 => format!("{sign}{number}{symbol}"),
        6 => format!("{number}{sign}{symbol}"),
        7 => format!("{number}{symbol}{sign}"),
        8 => format!("{sign}{number} {symbol}"),
        9 => format!("{sign}{symbol} {number}"),
        10 => format!("{number} {symbol}{sign}"),
        11 => format!("{symbol} {number}{sign}"),
        12 => format!("{symbol} {sign}{number}"),
        13 => format!("{number}{sign} {symbol}"),
        14 => format!("({symbol} {number})"),
        15 => format!("({number} {symbol})"),
        16 => format!("{symbol}{sign} {number}"),
        _ => format!("({symbol}{number})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn locale(name: &str) -> Locale {
        Locale::parse(name).unwrap()
    }

    fn usd() -> Currency {
        Currency::from_code("USD").unwrap()
    }

    #[test]
    fn test_en_us_currency() {
        let format = NumberFormat::for_locale(&locale("en-US")).with_currency(&usd());
        assert_eq!(format.format_currency(dec!(1234.5)), "$1,234.50");
        assert_eq!(format.format_currency(dec!(-1234.5)), "-$1,234.50");
        assert_eq!(format.format_currency(dec!(0)), "$0.00");
    }

    #[test]
    fn test_de_de_currency() {
        let eur = Currency::from_code("EUR").unwrap();
        let format = NumberFormat::for_locale(&locale("de-DE")).with_currency(&eur);
        assert_eq!(format.format_currency(dec!(1234567.891)), "1.234.567,89 €");
        assert_eq!(format.format_currency(dec!(-5)), "-5,00 €");
    }

    #[test]
    fn test_invariant_negative_uses_parentheses() {
        let format = NumberFormat::invariant().with_currency(&usd());
        assert_eq!(format.format_currency(dec!(-12.3)), "($12.30)");
    }

    #[test]
    fn test_international_remaps_patterns() {
        let format = NumberFormat::for_locale(&locale("en-US")).international(&usd());
        assert_eq!(format.positive_pattern, 2);
        assert_eq!(format.negative_pattern, 9);
        assert_eq!(format.format_currency(dec!(1234.5)), "USD 1,234.50");
        assert_eq!(format.format_currency(dec!(-1234.5)), "-USD 1,234.50");

        let invariant = NumberFormat::invariant().international(&usd());
        assert_eq!(invariant.format_currency(dec!(-1)), "(USD 1.00)");
    }

    #[test]
    fn test_pattern_remap_table() {
        let negatives: Vec<u8> = (0..=8).map(international_negative_pattern).collect();
        assert_eq!(negatives, vec![14, 9, 12, 11, 15, 8, 13, 10, 8]);
        assert_eq!(international_positive_pattern(0), 2);
        assert_eq!(international_positive_pattern(1), 3);
        assert_eq!(international_positive_pattern(3), 3);
    }

    #[test]
    fn test_zero_digit_currency() {
        let jpy = Currency::from_code("JPY").unwrap();
        let format = NumberFormat::for_locale(&locale("ja-JP")).with_currency(&jpy);
        assert_eq!(format.format_currency(dec!(1234.5)), "¥1,235");
    }

    #[test]
    fn test_indian_grouping() {
        let inr = Currency::from_code("INR").unwrap();
        let format = NumberFormat::for_locale(&locale("en-IN")).with_currency(&inr);
        assert_eq!(format.format_currency(dec!(12345678.9)), "₹1,23,45,678.90");
    }

    #[test]
    fn test_region_specific_convention_wins() {
        let format = NumberFormat::for_locale(&locale("pt-BR"));
        assert_eq!(format.decimal_separator, ",");
        assert_eq!(format.group_separator, ".");
        assert_eq!(format.negative_pattern, 9);

        let fallback = NumberFormat::for_locale(&locale("pt-AO"));
        assert_eq!(fallback.group_separator, NBSP);
    }

    #[test]
    fn test_unknown_locale_is_invariant() {
        assert_eq!(
            NumberFormat::for_locale(&locale("xx-YY")),
            NumberFormat::invariant()
        );
    }

    #[test]
    fn test_format_number() {
        let format = NumberFormat::for_locale(&locale("en-US")).with_decimal_digits(3);
        assert_eq!(format.format_number(dec!(-1234.5), true), "-1,234.500");
        assert_eq!(format.format_number(dec!(1234.5), false), "1234.500");
        assert_eq!(format.format_number(dec!(-0.0001), false), "0.000");
    }

    #[test]
    fn test_format_exponential() {
        let format = NumberFormat::for_locale(&locale("en-US"));
        assert_eq!(format.format_exponential(dec!(1234.50), 2, true), "1.23E+003");
        assert_eq!(format.format_exponential(dec!(-1234.50), 6, false), "-1.234500e+003");
        assert_eq!(format.format_exponential(dec!(0.00042), 1, true), "4.2E-004");
        assert_eq!(format.format_exponential(dec!(9.996), 2, true), "1.00E+001");
        assert_eq!(format.format_exponential(dec!(0), 2, true), "0.00E+000");
        assert_eq!(format.format_exponential(dec!(5), 0, true), "5E+000");

        let de = NumberFormat::for_locale(&locale("de-DE"));
        assert_eq!(de.format_exponential(dec!(1234.5), 1, true), "1,2E+003");
    }

    #[test]
    fn test_format_general() {
        let format = NumberFormat::for_locale(&locale("en-US"));
        assert_eq!(format.format_general(dec!(1234.50), 2, true), "1.2E+03");
        assert_eq!(format.format_general(dec!(1234.50), 6, true), "1234.5");
        assert_eq!(format.format_general(dec!(1234.50), 4, true), "1235");
        assert_eq!(format.format_general(dec!(999.96), 4, true), "1000");
        assert_eq!(format.format_general(dec!(-0.5), 3, false), "-0.5");
        assert_eq!(format.format_general(dec!(0.0000012), 2, false), "1.2e-06");
        assert_eq!(format.format_general(dec!(0), 2, true), "0");
    }

    #[test]
    fn test_format_percent() {
        let format = NumberFormat::for_locale(&locale("en-US"));
        assert_eq!(format.format_percent(dec!(1234.5)).as_deref(), Some("123,450.00%"));
        assert_eq!(
            format.clone().with_decimal_digits(1).format_percent(dec!(-0.125)).as_deref(),
            Some("-12.5%")
        );
        assert_eq!(format.format_percent(Decimal::MAX), None);

        let de = NumberFormat::for_locale(&locale("de-DE")).with_decimal_digits(0);
        assert_eq!(de.format_percent(dec!(0.25)).as_deref(), Some("25\u{a0}%"));
    }

    #[test]
    fn test_format_picture() {
        let picture = |text: &str| match text.parse::<crate::locale::FormatSpec>().unwrap() {
            crate::locale::FormatSpec::Picture(picture) => picture,
            other => panic!("{text:?} parsed as {other:?}"),
        };
        let format = NumberFormat::for_locale(&locale("en-US"));
        assert_eq!(format.format_picture(dec!(1234.5), &picture("0.00")), "1234.50");
        assert_eq!(format.format_picture(dec!(1234.5), &picture("#,##0.00")), "1,234.50");
        assert_eq!(format.format_picture(dec!(1234.5), &picture("#,##0.##")), "1,234.5");
        assert_eq!(format.format_picture(dec!(1234), &picture("#,##0.##")), "1,234");
        assert_eq!(format.format_picture(dec!(5), &picture("000")), "005");
        assert_eq!(format.format_picture(dec!(0.5), &picture("#.##")), ".5");
        assert_eq!(format.format_picture(dec!(-2.345), &picture("0.00")), "-2.35");
        assert_eq!(format.format_picture(dec!(-0.001), &picture("0.00")), "0.00");

        let de = NumberFormat::for_locale(&locale("de-DE"));
        assert_eq!(de.format_picture(dec!(1234.5), &picture("#,##0.00")), "1.234,50");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", &[3], ","), "1");
        assert_eq!(group_digits("123", &[3], ","), "123");
        assert_eq!(group_digits("1234", &[3], ","), "1,234");
        assert_eq!(group_digits("1234567", &[3, 0], ","), "1234,567");
        assert_eq!(group_digits("1234567", &[], ","), "1234567");
    }
}
