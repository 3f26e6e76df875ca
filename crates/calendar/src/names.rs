//! Name tables and the provider interface consulted by the display-name resolver.
//!
//! A [`NameProvider`] answers one question: the name of a month or day in a
//! given style and locale, or `None` when it has no such entry. Providers
//! never apply fallbacks themselves; the resolver owns the fallback order.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::day_of_week::DayOfWeek;
use crate::error::ProviderError;
use crate::locale::Locale;
use crate::month::Month;
use crate::text_style::TextStyle;

/// Single-letter month names used when no narrow data is available.
///
/// Keyed by ordinal only; the same letters are used for every locale.
pub(crate) const NARROW_MONTHS: [&str; 12] =
    ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

/// Single-letter day names used when no narrow data is available.
pub(crate) const NARROW_DAYS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// A value that has a localized display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarName {
    Month(Month),
    DayOfWeek(DayOfWeek),
}

impl CalendarName {
    /// Returns the 0-based position of the value in its enumeration.
    pub fn ordinal(self) -> usize {
        match self {
            CalendarName::Month(month) => month.ordinal(),
            CalendarName::DayOfWeek(day) => day.ordinal(),
        }
    }

    /// Returns the locale-independent narrow name.
    pub fn narrow_fallback(self) -> &'static str {
        match self {
            CalendarName::Month(month) => NARROW_MONTHS[month.ordinal()],
            CalendarName::DayOfWeek(day) => NARROW_DAYS[day.ordinal()],
        }
    }
}

impl From<Month> for CalendarName {
    fn from(month: Month) -> Self {
        CalendarName::Month(month)
    }
}

impl From<DayOfWeek> for CalendarName {
    fn from(day: DayOfWeek) -> Self {
        CalendarName::DayOfWeek(day)
    }
}

impl fmt::Display for CalendarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarName::Month(month) => write!(f, "month {month}"),
            CalendarName::DayOfWeek(day) => write!(f, "day of week {day}"),
        }
    }
}

/// Source of localized names.
pub trait NameProvider: Send + Sync {
    /// Looks up the name of `name` in `style` for exactly `locale`.
    ///
    /// Returns `Ok(None)` when there is no entry. An `Err` is a fault in the
    /// provider itself (e.g. an unreadable table), not a missing name.
    fn lookup(
        &self,
        name: CalendarName,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Option<String>, ProviderError>;
}

impl<P: NameProvider + ?Sized> NameProvider for &P {
    fn lookup(
        &self,
        name: CalendarName,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Option<String>, ProviderError> {
        (**self).lookup(name, style, locale)
    }
}

impl<P: NameProvider + ?Sized> NameProvider for Arc<P> {
    fn lookup(
        &self,
        name: CalendarName,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Option<String>, ProviderError> {
        (**self).lookup(name, style, locale)
    }
}

impl<P: NameProvider + ?Sized> NameProvider for Box<P> {
    fn lookup(
        &self,
        name: CalendarName,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Option<String>, ProviderError> {
        (**self).lookup(name, style, locale)
    }
}

/// Baked names for one locale. Days are stored Monday first.
struct BakedNames {
    months_full: [&'static str; 12],
    months_full_standalone: Option<[&'static str; 12]>,
    months_short: [&'static str; 12],
    days_full: [&'static str; 7],
    days_short: [&'static str; 7],
}

impl BakedNames {
    fn get(&self, name: CalendarName, style: TextStyle) -> Option<&'static str> {
        let i = name.ordinal();
        match (name, style) {
            (CalendarName::Month(_), TextStyle::Full) => Some(self.months_full[i]),
            (CalendarName::Month(_), TextStyle::FullStandalone) => {
                self.months_full_standalone.map(|names| names[i])
            }
            (CalendarName::Month(_), TextStyle::Short) => Some(self.months_short[i]),
            (CalendarName::DayOfWeek(_), TextStyle::Full) => Some(self.days_full[i]),
            (CalendarName::DayOfWeek(_), TextStyle::Short) => Some(self.days_short[i]),
            _ => None,
        }
    }
}

static EN: BakedNames = BakedNames {
    months_full: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    months_full_standalone: None,
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    days_full: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    days_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
};

static PL: BakedNames = BakedNames {
    months_full: [
        "stycznia",
        "lutego",
        "marca",
        "kwietnia",
        "maja",
        "czerwca",
        "lipca",
        "sierpnia",
        "września",
        "października",
        "listopada",
        "grudnia",
    ],
    months_full_standalone: Some([
        "styczeń",
        "luty",
        "marzec",
        "kwiecień",
        "maj",
        "czerwiec",
        "lipiec",
        "sierpień",
        "wrzesień",
        "październik",
        "listopad",
        "grudzień",
    ]),
    months_short: [
        "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru",
    ],
    days_full: [
        "poniedziałek",
        "wtorek",
        "środa",
        "czwartek",
        "piątek",
        "sobota",
        "niedziela",
    ],
    days_short: ["pon.", "wt.", "śr.", "czw.", "pt.", "sob.", "niedz."],
};

/// Names baked into the crate for `en` and `pl`.
///
/// Only full and short forms are included. English has no separate
/// standalone forms; Polish standalone month names are nominative while the
/// in-phrase forms are genitive. No narrow data is included.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinNames;

impl NameProvider for BuiltinNames {
    fn lookup(
        &self,
        name: CalendarName,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Option<String>, ProviderError> {
        let baked = match locale.tag() {
            "en" => &EN,
            "pl" => &PL,
            _ => return Ok(None),
        };
        Ok(baked.get(name, style).map(str::to_string))
    }
}

/// Month and day names of one locale, per style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleNames {
    months: HashMap<TextStyle, [String; 12]>,
    days: HashMap<TextStyle, [String; 7]>,
}

impl LocaleNames {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the month names for `style`, January first.
    pub fn with_months<S: Into<String>>(mut self, style: TextStyle, names: [S; 12]) -> Self {
        self.months.insert(style, names.map(Into::into));
        self
    }

    /// Sets the day names for `style`, Monday first.
    pub fn with_days<S: Into<String>>(mut self, style: TextStyle, names: [S; 7]) -> Self {
        self.days.insert(style, names.map(Into::into));
        self
    }

    /// Returns the entry for `name` in `style`, if present.
    pub fn get(&self, name: CalendarName, style: TextStyle) -> Option<&str> {
        match name {
            CalendarName::Month(month) => {
                self.months.get(&style).map(|n| n[month.ordinal()].as_str())
            }
            CalendarName::DayOfWeek(day) => {
                self.days.get(&style).map(|n| n[day.ordinal()].as_str())
            }
        }
    }

    /// Returns `true` if no style has any names.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty() && self.days.is_empty()
    }
}

/// In-memory name tables keyed by exact locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameTables {
    tables: HashMap<Locale, LocaleNames>,
}

impl NameTables {
    /// Creates an empty set of tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the table for `locale`.
    pub fn with_locale(mut self, locale: Locale, names: LocaleNames) -> Self {
        self.tables.insert(locale, names);
        self
    }

    /// Returns the table for exactly `locale`.
    pub fn get(&self, locale: &Locale) -> Option<&LocaleNames> {
        self.tables.get(locale)
    }

    /// Returns the number of locales with a table.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if there are no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl NameProvider for NameTables {
    fn lookup(
        &self,
        name: CalendarName,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Option<String>, ProviderError> {
        Ok(self
            .get(locale)
            .and_then(|names| names.get(name, style))
            .map(str::to_string))
    }
}

/// Consults `first`, then `second` when `first` has no entry.
///
/// An error from `first` is returned without consulting `second`.
#[derive(Debug, Clone, Default)]
pub struct Layered<A, B> {
    first: A,
    second: B,
}

impl<A, B> Layered<A, B> {
    /// Stacks `first` over `second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: NameProvider, B: NameProvider> NameProvider for Layered<A, B> {
    fn lookup(
        &self,
        name: CalendarName,
        style: TextStyle,
        locale: &Locale,
    ) -> Result<Option<String>, ProviderError> {
        match self.first.lookup(name, style, locale)? {
            Some(found) => Ok(Some(found)),
            None => self.second.lookup(name, style, locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(
        provider: &dyn NameProvider,
        name: impl Into<CalendarName>,
        style: TextStyle,
        tag: &str,
    ) -> Option<String> {
        provider.lookup(name.into(), style, &Locale::new(tag)).unwrap()
    }

    #[test]
    fn narrow_fallback_letters() {
        assert_eq!(CalendarName::from(Month::January).narrow_fallback(), "J");
        assert_eq!(CalendarName::from(Month::December).narrow_fallback(), "D");
        assert_eq!(CalendarName::from(DayOfWeek::Thursday).narrow_fallback(), "T");
        assert_eq!(NARROW_MONTHS.concat(), "JFMAMJJASOND");
    }

    #[test]
    fn builtin_english() {
        let may = lookup(&BuiltinNames, Month::May, TextStyle::Full, "en");
        assert_eq!(may.as_deref(), Some("May"));
        let sunday = lookup(&BuiltinNames, DayOfWeek::Sunday, TextStyle::Short, "en");
        assert_eq!(sunday.as_deref(), Some("Sun"));
        assert_eq!(lookup(&BuiltinNames, Month::May, TextStyle::FullStandalone, "en"), None);
        assert_eq!(lookup(&BuiltinNames, Month::May, TextStyle::Narrow, "en"), None);
    }

    #[test]
    fn builtin_polish_standalone_differs() {
        let standalone = lookup(&BuiltinNames, Month::January, TextStyle::FullStandalone, "pl");
        let in_phrase = lookup(&BuiltinNames, Month::January, TextStyle::Full, "pl");
        assert_eq!(standalone.as_deref(), Some("styczeń"));
        assert_eq!(in_phrase.as_deref(), Some("stycznia"));
    }

    #[test]
    fn builtin_is_exact_on_locale() {
        assert_eq!(lookup(&BuiltinNames, Month::May, TextStyle::Full, "pl-PL"), None);
        assert_eq!(lookup(&BuiltinNames, Month::May, TextStyle::Full, "fr"), None);
    }

    #[test]
    fn tables_lookup() {
        let tables = NameTables::new().with_locale(
            Locale::new("de"),
            LocaleNames::new().with_days(
                TextStyle::Short,
                ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
            ),
        );
        let wednesday = lookup(&tables, DayOfWeek::Wednesday, TextStyle::Short, "de");
        assert_eq!(wednesday.as_deref(), Some("Mi"));
        assert_eq!(lookup(&tables, DayOfWeek::Wednesday, TextStyle::Full, "de"), None);
        assert_eq!(lookup(&tables, Month::March, TextStyle::Short, "de"), None);
        assert_eq!(tables.len(), 1);
    }

    #[test]
    fn layered_prefers_first() {
        let overrides = NameTables::new().with_locale(
            Locale::english(),
            LocaleNames::new().with_months(
                TextStyle::Short,
                ["Ja", "Fe", "Mr", "Ap", "My", "Jn", "Jl", "Au", "Se", "Oc", "No", "De"],
            ),
        );
        let layered = Layered::new(overrides, BuiltinNames);
        assert_eq!(lookup(&layered, Month::May, TextStyle::Short, "en").as_deref(), Some("My"));
        assert_eq!(lookup(&layered, Month::May, TextStyle::Full, "en").as_deref(), Some("May"));
    }
}
