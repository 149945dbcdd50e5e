//! Error types for the Coinage library.
//!
//! Every fallible operation in the crate returns [`MoneyResult`]. Lookups that
//! callers commonly attempt (catalog lookups, parsing) also have `Option`
//! returning forms that never construct an error.

use thiserror::Error;

/// A specialized Result type for Coinage operations.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// What a failed catalog lookup was keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Three-letter ISO-4217 code.
    Code,
    /// Three-digit ISO-4217 numeric code.
    Numeric,
    /// ISO-3166 region.
    Region,
    /// Locale identifier.
    Locale,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LookupKind::Code => "code",
            LookupKind::Numeric => "numeric code",
            LookupKind::Region => "region",
            LookupKind::Locale => "locale",
        };
        f.write_str(name)
    }
}

/// The main error type for Coinage operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Malformed or empty currency code.
    #[error("Invalid currency code: '{code}'")]
    InvalidCurrency {
        /// The rejected code.
        code: String,
    },

    /// Binary operation across two incompatible currencies.
    #[error("Currency mismatch: expected {expected}, found {actual}")]
    CurrencyMismatch {
        /// Currency the operation required.
        expected: String,
        /// Currency that was supplied.
        actual: String,
    },

    /// Text is not a valid money value, or the format specifier is unsupported.
    #[error("Invalid money format '{input}': {reason}")]
    MoneyFormat {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Text is not a valid exchange rate.
    #[error("Invalid exchange rate format '{input}': {reason}")]
    ExchangeRateFormat {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Exchange rate parameters violate its invariants.
    #[error("Invalid exchange rate: {reason}")]
    InvalidExchangeRate {
        /// Description of the violated invariant.
        reason: String,
    },

    /// Catalog lookup found no match.
    #[error("Currency not found for {kind} '{key}'")]
    NotFound {
        /// What the lookup was keyed on.
        kind: LookupKind,
        /// The key that was looked up.
        key: String,
    },

    /// Value does not fit the target numeric type.
    #[error("Arithmetic overflow converting to {target}")]
    Overflow {
        /// The target type or operation.
        target: &'static str,
    },

    /// Division by a zero amount.
    #[error("Division by zero")]
    DivisionByZero,

    /// Allocation ratios are unusable.
    #[error("Invalid allocation: {reason}")]
    InvalidAllocation {
        /// Description of the problem.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl MoneyError {
    /// Creates an invalid currency error.
    #[must_use]
    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency { code: code.into() }
    }

    /// Creates a currency mismatch error.
    #[must_use]
    pub fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a money format error.
    #[must_use]
    pub fn money_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MoneyFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an exchange rate format error.
    #[must_use]
    pub fn rate_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExchangeRateFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid exchange rate error.
    #[must_use]
    pub fn invalid_rate(reason: impl Into<String>) -> Self {
        Self::InvalidExchangeRate {
            reason: reason.into(),
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(kind: LookupKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(target: &'static str) -> Self {
        Self::Overflow { target }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true for catalog lookup misses.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
