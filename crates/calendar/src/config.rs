//! TOML configuration for display-name resolution.
//!
//! ```toml
//! locale = "pl-PL"
//! narrow_fallback = true
//!
//! [names.de.months]
//! full = ["Januar", "Februar", "März", "April", "Mai", "Juni",
//!         "Juli", "August", "September", "Oktober", "November", "Dezember"]
//!
//! [names.de.days]
//! short = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]
//! ```
//!
//! Arrays must hold exactly 12 month names (January first) or 7 day names
//! (Monday first). Configured names take precedence over the built-in ones.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::display::DisplayNameResolver;
use crate::error::DateTimeFormatError;
use crate::locale::Locale;
use crate::names::{BuiltinNames, Layered, LocaleNames, NameTables};
use crate::text_style::TextStyle;

/// Error returned when a resolver configuration is invalid.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed TOML, unknown keys, or name arrays of the wrong length.
    #[error("invalid resolver configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A locale tag that is not a well-formed language identifier.
    #[error("invalid resolver configuration: bad locale {tag:?}")]
    Locale {
        /// The tag as written.
        tag: String,
        /// Why it was rejected.
        #[source]
        source: DateTimeFormatError,
    },

    /// Two `names` keys that denote the same locale.
    #[error("invalid resolver configuration: {first:?} and {second:?} are both {locale}")]
    DuplicateLocale {
        /// The first key, in sorted order.
        first: String,
        /// The second key.
        second: String,
        /// The locale both normalize to.
        locale: Locale,
    },
}

/// Month names per style, January first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthNamesToml {
    pub full: Option<[String; 12]>,
    pub full_standalone: Option<[String; 12]>,
    pub short: Option<[String; 12]>,
    pub short_standalone: Option<[String; 12]>,
    pub narrow: Option<[String; 12]>,
    pub narrow_standalone: Option<[String; 12]>,
}

/// Day names per style, Monday first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayNamesToml {
    pub full: Option<[String; 7]>,
    pub full_standalone: Option<[String; 7]>,
    pub short: Option<[String; 7]>,
    pub short_standalone: Option<[String; 7]>,
    pub narrow: Option<[String; 7]>,
    pub narrow_standalone: Option<[String; 7]>,
}

/// Pairs each configured array with its style, in [`TextStyle::ALL`] order.
fn styled<T>(by_style: [Option<T>; 6]) -> impl Iterator<Item = (TextStyle, T)> {
    TextStyle::ALL
        .into_iter()
        .zip(by_style)
        .filter_map(|(style, names)| names.map(|names| (style, names)))
}

impl MonthNamesToml {
    fn into_entries(self) -> impl Iterator<Item = (TextStyle, [String; 12])> {
        styled([
            self.full,
            self.full_standalone,
            self.short,
            self.short_standalone,
            self.narrow,
            self.narrow_standalone,
        ])
    }
}

impl DayNamesToml {
    fn into_entries(self) -> impl Iterator<Item = (TextStyle, [String; 7])> {
        styled([
            self.full,
            self.full_standalone,
            self.short,
            self.short_standalone,
            self.narrow,
            self.narrow_standalone,
        ])
    }
}

/// Month and day names for one locale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleNamesToml {
    #[serde(default)]
    pub months: MonthNamesToml,
    #[serde(default)]
    pub days: DayNamesToml,
}

/// Settings for a [`DisplayNameResolver`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Default locale tag. `None` reads the environment.
    #[serde(default)]
    pub locale: Option<String>,

    /// Whether to use the single-letter table when nothing else resolves.
    #[serde(default = "default_true")]
    pub narrow_fallback: bool,

    /// Extra name tables keyed by locale tag.
    #[serde(default)]
    pub names: BTreeMap<String, LocaleNamesToml>,
}

fn default_true() -> bool {
    true
}

fn parse_locale(tag: &str) -> Result<Locale, ConfigError> {
    Locale::parse(tag).map_err(|source| ConfigError::Locale {
        tag: tag.to_string(),
        source,
    })
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            locale: None,
            narrow_fallback: true,
            names: BTreeMap::new(),
        }
    }
}

impl ResolverConfig {
    /// Parses a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML, unknown keys, or name
    /// arrays of the wrong length.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Returns the configured locale, or the platform's.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Locale`] if the configured tag is malformed.
    pub fn resolve_locale(&self) -> Result<Locale, ConfigError> {
        match self.locale.as_deref() {
            Some(tag) => parse_locale(tag),
            None => Ok(Locale::from_env()),
        }
    }

    /// Converts the configured tables into a [`NameTables`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Locale`] for a malformed key and
    /// [`ConfigError::DuplicateLocale`] when two keys such as `de_AT` and
    /// `de-AT` denote the same locale.
    pub fn name_tables(&self) -> Result<NameTables, ConfigError> {
        let mut keys: BTreeMap<Locale, &str> = BTreeMap::new();
        let mut tables = NameTables::new();
        for (tag, toml) in &self.names {
            let locale = parse_locale(tag)?;
            if let Some(first) = keys.insert(locale.clone(), tag) {
                return Err(ConfigError::DuplicateLocale {
                    first: first.to_string(),
                    second: tag.clone(),
                    locale,
                });
            }
            let toml = toml.clone();
            let mut names = LocaleNames::new();
            for (style, months) in toml.months.into_entries() {
                names = names.with_months(style, months);
            }
            for (style, days) in toml.days.into_entries() {
                names = names.with_days(style, days);
            }
            if names.is_empty() {
                warn!(locale = %locale, "name table has no entries");
            }
            tables = tables.with_locale(locale, names);
        }
        if tables.is_empty() {
            debug!("no configured name tables");
        }
        Ok(tables)
    }

    /// Builds a resolver whose configured tables are layered over the
    /// built-in names.
    ///
    /// # Errors
    ///
    /// See [`ResolverConfig::resolve_locale`] and [`ResolverConfig::name_tables`].
    pub fn build_resolver(
        &self,
    ) -> Result<DisplayNameResolver<Layered<NameTables, BuiltinNames>>, ConfigError> {
        let tables = self.name_tables()?;
        let locale = self.resolve_locale()?;
        debug!(
            locale = %locale,
            n_tables = tables.len(),
            narrow_fallback = self.narrow_fallback,
            "building display-name resolver"
        );
        Ok(DisplayNameResolver::new(Layered::new(tables, BuiltinNames), locale)
            .with_narrow_fallback(self.narrow_fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;

    #[test]
    fn defaults() {
        let cfg = ResolverConfig::from_toml_str("").unwrap();
        assert!(cfg.locale.is_none());
        assert!(cfg.narrow_fallback);
        assert!(cfg.names.is_empty());
    }

    #[test]
    fn rejects_unknown_key() {
        assert!(ResolverConfig::from_toml_str("colour = \"blue\"").is_err());
        assert!(ResolverConfig::from_toml_str("[names.de.months]\ntiny = []").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        let toml_str = "[names.de.days]\nshort = [\"Mo\", \"Di\"]";
        assert!(ResolverConfig::from_toml_str(toml_str).is_err());
    }

    #[test]
    fn tables_are_keyed_by_normalized_locale() {
        let toml_str = r#"
            [names.de_AT.days]
            short = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]
        "#;
        let tables = ResolverConfig::from_toml_str(toml_str).unwrap().name_tables().unwrap();
        assert!(tables.get(&Locale::new("de-AT")).is_some());
    }

    #[test]
    fn rejects_keys_naming_the_same_locale() {
        let toml_str = r#"
            [names.de_AT.days]
            short = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]

            [names."de-at".days]
            full = ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag"]
        "#;
        let cfg = ResolverConfig::from_toml_str(toml_str).unwrap();
        let err = cfg.name_tables().unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::DuplicateLocale { locale, .. } if locale.tag() == "de-AT"
        ));
        assert!(cfg.build_resolver().is_err());
    }

    #[test]
    fn rejects_malformed_locale() {
        let cfg = ResolverConfig::from_toml_str("locale = \"not a locale\"").unwrap();
        assert!(matches!(cfg.resolve_locale(), Err(ConfigError::Locale { .. })));
        let cfg = ResolverConfig::from_toml_str("[names.\"??\".days]").unwrap();
        assert!(matches!(cfg.name_tables(), Err(ConfigError::Locale { .. })));
    }

    #[test]
    fn configured_locale_wins() {
        let cfg = ResolverConfig::from_toml_str("locale = \"pl_PL.UTF-8\"").unwrap();
        assert_eq!(cfg.resolve_locale().unwrap().tag(), "pl-PL");
        let resolver = cfg.build_resolver().unwrap();
        assert_eq!(resolver.display_name(Month::July).unwrap(), "lipiec");
    }
}
