//! Locale identifiers and locale-derived number formatting.
//!
//! - [`Locale`]: a parsed `language[-Script][-REGION]` identifier
//! - [`NumberFormat`]: separators, grouping and sign patterns for one locale
//! - [`FormatSpec`]: a parsed money format specifier

mod format_spec;
mod number_format;

pub use format_spec::{FormatSpec, Picture};
pub use number_format::{international_negative_pattern, international_positive_pattern, NumberFormat};

use std::fmt;
use std::str::FromStr;

use crate::config::MoneyConfig;
use crate::error::{LookupKind, MoneyError, MoneyResult};

/// A locale identifier.
///
/// Accepts BCP 47 style (`en-US`, `zh-Hans-CN`) and POSIX style
/// (`en_US.UTF-8`, `de_DE@euro`) names. Codeset and modifier suffixes are
/// dropped. `C` and `POSIX` parse to the invariant locale.
///
/// A locale without a region is *neutral*: it names a language but no
/// territory, so it cannot imply a currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl Locale {
    /// Returns the invariant locale (no language, no region).
    #[must_use]
    pub fn invariant() -> Self {
        Self::default()
    }

    /// Parses a locale identifier.
    pub fn parse(name: &str) -> MoneyResult<Self> {
        let invalid = || MoneyError::not_found(LookupKind::Locale, name);

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }
        if trimmed.eq_ignore_ascii_case("C") || trimmed.eq_ignore_ascii_case("POSIX") {
            return Ok(Self::invariant());
        }

        // en_US.UTF-8@euro -> en_US
        let base = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default();

        let mut subtags = base.split(['-', '_']);
        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let mut locale = Self {
            language: language.to_ascii_lowercase(),
            script: None,
            region: None,
        };

        let mut next = subtags.next();
        if let Some(tag) = next {
            if tag.len() == 4 && tag.bytes().all(|b| b.is_ascii_alphabetic()) {
                let mut script = tag.to_ascii_lowercase();
                script[..1].make_ascii_uppercase();
                locale.script = Some(script);
                next = subtags.next();
            }
        }

        if let Some(tag) = next {
            let is_alpha_region = tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_alphabetic());
            let is_numeric_region = tag.len() == 3 && tag.bytes().all(|b| b.is_ascii_digit());
            if is_alpha_region || is_numeric_region {
                locale.region = Some(tag.to_ascii_uppercase());
            } else {
                return Err(invalid());
            }
        }

        // Variants and extensions after the region carry nothing we use.
        Ok(locale)
    }

    /// Returns the ambient locale from the global configuration.
    #[must_use]
    pub fn current() -> Self {
        MoneyConfig::global().locale()
    }

    /// Returns the lowercase language subtag (empty for the invariant locale).
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the title-case script subtag, if any.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Returns the uppercase region subtag, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns true if the locale names no region.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.region.is_none()
    }

    /// Returns true for the invariant locale.
    #[must_use]
    pub fn is_invariant(&self) -> bool {
        self.language.is_empty()
    }

    /// Returns the canonical BCP 47 name, e.g. `"zh-Hans-CN"`.
    #[must_use]
    pub fn name(&self) -> String {
        let mut name = self.language.clone();
        for tag in [&self.script, &self.region].into_iter().flatten() {
            name.push('-');
            name.push_str(tag);
        }
        name
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Locale {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
