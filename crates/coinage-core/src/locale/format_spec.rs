//! Money format specifiers.

use std::str::FromStr;

use crate::error::MoneyError;

/// Largest precision a specifier may request (the decimal type's scale limit).
const MAX_PRECISION: u32 = 28;

/// A parsed money format specifier.
///
/// | Text        | Variant                 | Output for USD 1234.5 (en-US) |
/// |-------------|-------------------------|-------------------------------|
/// | `""`, `C`   | [`FormatSpec::Currency`]      | `$1,234.50`             |
/// | `I`, `I<d>` | [`FormatSpec::International`] | `USD 1,234.50`          |
/// | `N[p]`      | [`FormatSpec::Number`]        | `1,234.50`              |
/// | `F[p]`      | [`FormatSpec::Fixed`]         | `1234.50`               |
/// | `G`         | [`FormatSpec::General`]       | `1234.50`               |
/// | `G2`        | [`FormatSpec::General`]       | `1.2E+03`               |
/// | `E[p]`      | [`FormatSpec::Exponential`]   | `1.23E+003`             |
/// | `P[p]`      | [`FormatSpec::Percent`]       | `123,450.00%`           |
/// | `#,##0.0`   | [`FormatSpec::Picture`]       | `1,234.5`               |
///
/// Letters are case-insensitive, except that `e` and `g` print a lowercase
/// exponent marker. Without an explicit precision the currency's own
/// decimal digits apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSpec {
    /// Locale currency pattern with the currency symbol.
    Currency {
        /// Explicit number of decimals.
        precision: Option<u32>,
    },
    /// Locale currency pattern with the ISO code in place of the symbol.
    International {
        /// Explicit number of decimals (single digit).
        precision: Option<u32>,
    },
    /// Grouped number without symbol.
    Number {
        /// Explicit number of decimals.
        precision: Option<u32>,
    },
    /// Ungrouped fixed-point number without symbol.
    Fixed {
        /// Explicit number of decimals.
        precision: Option<u32>,
    },
    /// Plain amount at the currency's precision, or the given number of
    /// significant digits switching to scientific notation when needed.
    General {
        /// Significant digits; `None` and `Some(0)` print the plain amount.
        precision: Option<u32>,
        /// Uppercase exponent marker.
        upper: bool,
    },
    /// Scientific notation with a three-digit exponent.
    Exponential {
        /// Digits after the decimal separator.
        precision: Option<u32>,
        /// Uppercase exponent marker.
        upper: bool,
    },
    /// The amount multiplied by 100 with a percent sign.
    Percent {
        /// Explicit number of decimals.
        precision: Option<u32>,
    },
    /// A custom picture of `0`/`#` placeholders.
    Picture(Picture),
}

impl FormatSpec {
    /// The default specifier used by `Display`.
    pub const DEFAULT: FormatSpec = FormatSpec::Currency { precision: None };

    /// Returns the explicit precision, if any.
    #[must_use]
    pub fn precision(&self) -> Option<u32> {
        match self {
            FormatSpec::Currency { precision }
            | FormatSpec::International { precision }
            | FormatSpec::Number { precision }
            | FormatSpec::Fixed { precision }
            | FormatSpec::General { precision, .. }
            | FormatSpec::Exponential { precision, .. }
            | FormatSpec::Percent { precision } => *precision,
            FormatSpec::Picture(_) => None,
        }
    }
}

impl FromStr for FormatSpec {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || MoneyError::money_format(s, "unsupported format specifier");

        let mut chars = s.chars();
        let Some(letter) = chars.next() else {
            return Ok(Self::DEFAULT);
        };
        if !letter.is_ascii_alphabetic() {
            return Picture::parse(s).map(FormatSpec::Picture).ok_or_else(unsupported);
        }

        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unsupported());
        } else {
            let value: u32 = digits.parse().map_err(|_| unsupported())?;
            if value > MAX_PRECISION {
                return Err(MoneyError::money_format(s, "precision out of range"));
            }
            Some(value)
        };

        let upper = letter.is_ascii_uppercase();
        match letter.to_ascii_uppercase() {
            'C' => Ok(FormatSpec::Currency { precision }),
            'I' if digits.len() <= 1 => Ok(FormatSpec::International { precision }),
            'N' => Ok(FormatSpec::Number { precision }),
            'F' => Ok(FormatSpec::Fixed { precision }),
            'G' => Ok(FormatSpec::General { precision, upper }),
            'E' => Ok(FormatSpec::Exponential { precision, upper }),
            'P' => Ok(FormatSpec::Percent { precision }),
            _ => Err(unsupported()),
        }
    }
}

/// A custom numeric picture such as `#,##0.00` or `000`.
///
/// `0` is a required digit and `#` an optional one. A `,` between integer
/// placeholders turns on locale digit grouping, and a single `.` marks the
/// locale decimal separator. Literal text, sections and scaling commas are
/// not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picture {
    /// Integer digits always printed, zero-padded on the left.
    pub min_integer: u32,
    /// Whether the integer part is grouped.
    pub grouped: bool,
    /// Fraction digits always printed.
    pub min_fraction: u32,
    /// Fraction digits printed at most; the amount is rounded to these.
    pub max_fraction: u32,
}

impl Picture {
    fn parse(text: &str) -> Option<Self> {
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (text, ""),
        };
        let is_placeholder = |c: char| c == '0' || c == '#';

        if !integer.chars().all(|c| is_placeholder(c) || c == ',')
            || !fraction.chars().all(is_placeholder)
            || integer.ends_with(',')
        {
            return None;
        }
        if !text.chars().any(is_placeholder) {
            return None;
        }

        let min_integer = integer.chars().filter(|c| *c == '0').count();
        let max_fraction = fraction.len();
        let min_fraction = fraction.rfind('0').map_or(0, |i| i + 1);
        let limit = MAX_PRECISION as usize;
        if min_integer > limit || max_fraction > limit {
            return None;
        }

        Some(Self {
            min_integer: min_integer as u32,
            grouped: integer.contains(','),
            min_fraction: min_fraction as u32,
            max_fraction: max_fraction as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!("".parse::<FormatSpec>().unwrap(), FormatSpec::DEFAULT);
        assert_eq!(
            "c".parse::<FormatSpec>().unwrap(),
            FormatSpec::Currency { precision: None }
        );
    }

    #[test]
    fn test_international() {
        assert_eq!(
            "I".parse::<FormatSpec>().unwrap(),
            FormatSpec::International { precision: None }
        );
        assert_eq!(
            "i3".parse::<FormatSpec>().unwrap(),
            FormatSpec::International { precision: Some(3) }
        );
        assert!("I10".parse::<FormatSpec>().is_err());
    }

    #[test]
    fn test_precision() {
        assert_eq!("N4".parse::<FormatSpec>().unwrap().precision(), Some(4));
        assert_eq!("F0".parse::<FormatSpec>().unwrap().precision(), Some(0));
        assert_eq!("G".parse::<FormatSpec>().unwrap().precision(), None);
        assert_eq!("P1".parse::<FormatSpec>().unwrap().precision(), Some(1));
        assert!("C29".parse::<FormatSpec>().is_err());
        assert!("Cx".parse::<FormatSpec>().is_err());
        assert!("C+2".parse::<FormatSpec>().is_err());
    }

    #[test]
    fn test_scientific_and_percent() {
        assert_eq!(
            "G2".parse::<FormatSpec>().unwrap(),
            FormatSpec::General { precision: Some(2), upper: true }
        );
        assert_eq!(
            "g".parse::<FormatSpec>().unwrap(),
            FormatSpec::General { precision: None, upper: false }
        );
        assert_eq!(
            "e3".parse::<FormatSpec>().unwrap(),
            FormatSpec::Exponential { precision: Some(3), upper: false }
        );
        assert_eq!(
            "P".parse::<FormatSpec>().unwrap(),
            FormatSpec::Percent { precision: None }
        );
    }

    #[test]
    fn test_picture() {
        assert_eq!(
            "#,##0.00".parse::<FormatSpec>().unwrap(),
            FormatSpec::Picture(Picture {
                min_integer: 1,
                grouped: true,
                min_fraction: 2,
                max_fraction: 2,
            })
        );
        assert_eq!(
            "000".parse::<FormatSpec>().unwrap(),
            FormatSpec::Picture(Picture {
                min_integer: 3,
                grouped: false,
                min_fraction: 0,
                max_fraction: 0,
            })
        );
        assert_eq!(
            "#.0#".parse::<FormatSpec>().unwrap(),
            FormatSpec::Picture(Picture {
                min_integer: 0,
                grouped: false,
                min_fraction: 1,
                max_fraction: 2,
            })
        );
        assert_eq!("0.00".parse::<FormatSpec>().unwrap().precision(), None);
    }

    #[test]
    fn test_unsupported() {
        for spec in ["X", "I10", "#,##0.00;(#)", "0.0.0", "0,.00", "#,", "0.0,0", ".", "'$'0", "0%"] {
            assert!(spec.parse::<FormatSpec>().is_err(), "{spec:?} should fail");
        }
    }

    #[test]
    fn test_error_names_unsupported_specifier() {
        for spec in ["Cx", "N2a", "0.0x", "#,##0.00 USD", "Q"] {
            match spec.parse::<FormatSpec>() {
                Err(MoneyError::MoneyFormat { reason, .. }) => {
                    assert_eq!(reason, "unsupported format specifier", "{spec:?}");
                }
                other => panic!("{spec:?} gave {other:?}"),
            }
        }
    }
}
