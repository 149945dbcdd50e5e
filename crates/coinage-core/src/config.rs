//! Ambient configuration.
//!
//! Bare numbers parsed as money, `Display` output and [`Currency::current`]
//! all depend on the process locale. That dependency is concentrated here:
//! a [`MoneyConfig`] is published once, either explicitly by the host or
//! lazily from the environment, and never changes afterwards.
//!
//! Environment precedence:
//! 1. `COINAGE_LOCALE` / `COINAGE_REGION`
//! 2. `LC_ALL`, then `LC_MONETARY`, then `LANG`
//!
//! [`Currency::current`]: crate::types::Currency::current

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::{MoneyError, MoneyResult};
use crate::locale::Locale;

/// Prefix of the crate's own environment variables (`COINAGE_LOCALE`, `COINAGE_REGION`).
pub const ENV_PREFIX: &str = "COINAGE";

/// Environment variable overriding the ambient locale.
pub const LOCALE_VAR: &str = "COINAGE_LOCALE";

/// Environment variable overriding the ambient region.
pub const REGION_VAR: &str = "COINAGE_REGION";

/// The published configuration.
static GLOBAL_CONFIG: OnceLock<MoneyConfig> = OnceLock::new();

/// Ambient locale and region settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyConfig {
    /// Locale name, e.g. `"en-US"` or `"de_DE.UTF-8"`.
    pub locale: Option<String>,
    /// Region overriding the locale's region, e.g. `"CH"`.
    pub region: Option<String>,
}

impl MoneyConfig {
    /// Creates an empty configuration (invariant locale, no region).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the region override.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> MoneyResult<Self> {
        Self::load(None)
    }

    /// Reads the configuration from an explicit set of variables instead of
    /// the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::load(Some(vars))
    }

    /// Loads `COINAGE_*` first, then falls back to the POSIX locale chain.
    fn load(vars: Option<config::Map<String, String>>) -> MoneyResult<Self> {
        let explicit: Self = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .ignore_empty(true)
                    .source(vars.clone()),
            )
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| MoneyError::config(e.to_string()))?;

        let posix: PosixLocaleVars = config::Config::builder()
            .add_source(config::Environment::default().ignore_empty(true).source(vars))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| MoneyError::config(e.to_string()))?;

        Ok(Self {
            locale: non_blank(explicit.locale)
                .or_else(|| non_blank(posix.lc_all))
                .or_else(|| non_blank(posix.lc_monetary))
                .or_else(|| non_blank(posix.lang)),
            region: non_blank(explicit.region),
        })
    }

    /// Publishes this configuration as the process-wide one.
    ///
    /// Fails if a configuration was already published, including one loaded
    /// implicitly from the environment by an earlier [`MoneyConfig::global`].
    pub fn install(self) -> MoneyResult<()> {
        GLOBAL_CONFIG
            .set(self)
            .map_err(|_| MoneyError::config("global configuration already initialized"))
    }

    /// Returns the process-wide configuration, loading it from the
    /// environment on first access.
    pub fn global() -> &'static Self {
        GLOBAL_CONFIG.get_or_init(|| match Self::from_env() {
            Ok(config) => {
                log::debug!("loaded money configuration from environment: {config:?}");
                config
            }
            Err(e) => {
                log::warn!("ignoring unreadable money configuration: {e}");
                Self::default()
            }
        })
    }

    /// Returns the configured locale, or the invariant locale when none is
    /// set or the name does not parse.
    #[must_use]
    pub fn locale(&self) -> Locale {
        match self.locale.as_deref() {
            Some(name) => Locale::parse(name).unwrap_or_else(|e| {
                log::warn!("ignoring unusable locale '{name}': {e}");
                Locale::invariant()
            }),
            None => Locale::invariant(),
        }
    }

    /// Returns the ambient region: the explicit override, else the locale's region.
    #[must_use]
    pub fn region(&self) -> Option<String> {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|region| !region.is_empty())
            .map(str::to_string)
            .or_else(|| self.locale().region().map(str::to_string))
    }
}

/// POSIX locale variables, as keyed by an unprefixed environment source.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PosixLocaleVars {
    lc_all: Option<String>,
    lc_monetary: Option<String>,
    lang: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_vars(vars: &[(&str, &str)]) -> MoneyConfig {
        MoneyConfig::from_vars(vars.iter().copied()).unwrap()
    }

    #[test]
    fn test_posix_precedence() {
        let config = from_vars(&[("LANG", "en_US.UTF-8"), ("LC_MONETARY", "de_DE.UTF-8")]);
        assert_eq!(config.locale.as_deref(), Some("de_DE.UTF-8"));

        let config = from_vars(&[("LANG", "en_US.UTF-8"), ("LC_ALL", "ja_JP.UTF-8")]);
        assert_eq!(config.locale().name(), "ja-JP");
    }

    #[test]
    fn test_prefixed_variables_load_through_config_sources() {
        let config = from_vars(&[(LOCALE_VAR, "en-GB"), (REGION_VAR, "IE")]);
        assert_eq!(config.locale.as_deref(), Some("en-GB"));
        assert_eq!(config.region.as_deref(), Some("IE"));
        assert_eq!(config.region().as_deref(), Some("IE"));
    }

    #[test]
    fn test_explicit_variables_win() {
        let config = from_vars(&[
            ("LC_ALL", "ja_JP.UTF-8"),
            (LOCALE_VAR, "fr-CA"),
            (REGION_VAR, "CH"),
        ]);
        assert_eq!(config.locale().name(), "fr-CA");
        assert_eq!(config.region().as_deref(), Some("CH"));
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let config = from_vars(&[("PATH", "/usr/bin"), ("COINAGE_UNUSED", "1")]);
        assert_eq!(config, MoneyConfig::new());
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let config = from_vars(&[("LC_ALL", ""), ("LANG", "nl_NL")]);
        assert_eq!(config.region().as_deref(), Some("NL"));

        let config = from_vars(&[(LOCALE_VAR, "  "), ("LANG", "sv_SE")]);
        assert_eq!(config.locale().name(), "sv-SE");

        let config = from_vars(&[]);
        assert_eq!(config, MoneyConfig::new());
        assert!(config.locale().is_invariant());
        assert_eq!(config.region(), None);
    }

    #[test]
    fn test_unusable_locale_falls_back_to_invariant() {
        let config = MoneyConfig::new().with_locale("???");
        assert!(config.locale().is_invariant());
        assert_eq!(config.region(), None);
    }

    #[test]
    fn test_deserialize() {
        let config: MoneyConfig = serde_json::from_str(r#"{"locale": "en-GB"}"#).unwrap();
        assert_eq!(config.region().as_deref(), Some("GB"));
        assert_eq!(config.region, None);
    }
}
