//! Display-name resolution with style and locale fallback.

use tracing::{debug, trace};

use crate::error::DateTimeFormatError;
use crate::locale::Locale;
use crate::names::{BuiltinNames, CalendarName, NameProvider};
use crate::text_style::TextStyle;

/// Resolves display names of months and days against a [`NameProvider`].
///
/// Attempts are made lazily in this order, stopping at the first hit:
///
/// 1. each style in [`TextStyle::degradation_chain`] of the requested style,
/// 2. for each style, the locale and then its parents (`pl-PL`, then `pl`),
/// 3. the locale-independent single-letter table, if enabled.
///
/// # Example
///
/// ```
/// use almanac_calendar::{DisplayNameResolver, Locale, Month, TextStyle};
///
/// let resolver = DisplayNameResolver::builtin(Locale::new("pl-PL"));
/// assert_eq!(resolver.display_name(Month::January).unwrap(), "styczeń");
///
/// let narrow = resolver
///     .display_name_with(Month::December, TextStyle::Narrow, &Locale::english())
///     .unwrap();
/// assert_eq!(narrow, "D");
/// ```
#[derive(Debug, Clone)]
pub struct DisplayNameResolver<P> {
    provider: P,
    locale: Locale,
    narrow_fallback: bool,
}

impl DisplayNameResolver<BuiltinNames> {
    /// Creates a resolver over the baked names with `locale` as the default.
    pub fn builtin(locale: Locale) -> Self {
        Self::new(BuiltinNames, locale)
    }
}

impl<P: NameProvider> DisplayNameResolver<P> {
    /// Creates a resolver with `locale` as its default locale.
    ///
    /// The single-letter fallback table is enabled.
    pub fn new(provider: P, locale: Locale) -> Self {
        Self {
            provider,
            locale,
            narrow_fallback: true,
        }
    }

    /// Enables or disables the single-letter fallback table.
    ///
    /// When disabled, an exhausted chain is reported as an error.
    pub fn with_narrow_fallback(mut self, enabled: bool) -> Self {
        self.narrow_fallback = enabled;
        self
    }

    /// Returns the default locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the [`TextStyle::FullStandalone`] name in the default locale.
    ///
    /// # Errors
    ///
    /// See [`DisplayNameResolver::display_name_with`].
    pub fn display_name(
        &self,
        value: impl Into<CalendarName>,
    ) -> Result<String, DateTimeFormatError> {
        self.display_name_with(value, TextStyle::default(), &self.locale)
    }

    /// Returns the name of `value` in `style` for `locale`, degrading as needed.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeFormatError`] if no attempt resolves (only possible
    /// with the single-letter table disabled), or if the provider fails, in
    /// which case the provider's error is the cause.
    pub fn display_name_with(
        &self,
        value: impl Into<CalendarName>,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<String, DateTimeFormatError> {
        let name = value.into();
        let attempts = style
            .degradation_chain()
            .flat_map(|style| locale.parents().map(move |locale| (style, locale)));

        for (attempt_style, attempt_locale) in attempts {
            trace!(value = %name, style = %attempt_style, locale = %attempt_locale, "name lookup");
            let found = self
                .provider
                .lookup(name, attempt_style, &attempt_locale)
                .map_err(|cause| {
                    DateTimeFormatError::with_message_and_cause(
                        format!("name provider failed for {name} ({style}, {locale})"),
                        cause,
                    )
                })?;
            if let Some(found) = found {
                if attempt_style != style || attempt_locale != *locale {
                    debug!(
                        value = %name,
                        requested_style = %style,
                        requested_locale = %locale,
                        style = %attempt_style,
                        locale = %attempt_locale,
                        "display name resolved by fallback"
                    );
                }
                return Ok(found);
            }
        }

        if self.narrow_fallback {
            debug!(value = %name, style = %style, locale = %locale, "using single-letter fallback");
            return Ok(name.narrow_fallback().to_string());
        }
        Err(DateTimeFormatError::with_message(format!(
            "no display name for {name} ({style}, {locale})"
        )))
    }
}
