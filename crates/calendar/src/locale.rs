//! Locale identifiers used as keys into name tables.

use std::fmt;
use std::str::FromStr;

use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::error::DateTimeFormatError;

/// A canonicalized Unicode language identifier such as `en` or `pl-PL`.
///
/// Parsing accepts `_` or `-` separators in any case and drops POSIX
/// encoding or modifier suffixes, so `pl_PL.UTF-8`, `pl-pl` and `PL_pl` all
/// become `pl-PL`, and `zh-hant-tw` becomes `zh-Hant-TW`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale {
    id: LanguageIdentifier,
    tag: String,
}

impl Locale {
    /// Parses a locale tag.
    ///
    /// An empty tag, `C` and `POSIX` parse as `en`.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeFormatError`] if the tag is not a well-formed
    /// language identifier; the parser error is the cause.
    pub fn parse(tag: &str) -> Result<Self, DateTimeFormatError> {
        let base = tag.split(['.', '@']).next().unwrap_or_default().trim();
        if base.is_empty() || ["c", "posix"].iter().any(|p| base.eq_ignore_ascii_case(p)) {
            return Ok(Self::english());
        }
        let id = base.parse::<LanguageIdentifier>().map_err(|cause| {
            let message = format!("invalid locale tag: {tag:?}");
            DateTimeFormatError::with_message_and_cause(message, cause)
        })?;
        Ok(Self::from_langid(id))
    }

    /// Parses a locale tag, using `en` for a malformed one.
    pub fn new(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_else(|err| {
            warn!(tag, error = %err, "falling back to en");
            Self::english()
        })
    }

    fn from_langid(id: LanguageIdentifier) -> Self {
        let tag = id.to_string();
        Self { id, tag }
    }

    /// The `en` locale.
    pub fn english() -> Self {
        Self::from_langid(unic_langid::langid!("en"))
    }

    /// Returns the platform's preferred locale, defaulting to `en`.
    pub fn from_env() -> Self {
        sys_locale::get_locale()
            .map(|tag| Self::new(&tag))
            .unwrap_or_else(Self::english)
    }

    /// Returns the canonical tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the locale with its most specific subtag removed: variants
    /// first, then region, then script. `None` for a bare language.
    pub fn parent(&self) -> Option<Locale> {
        let mut id = self.id.clone();
        if id.variants().next().is_some() {
            id.clear_variants();
        } else if id.region.is_some() {
            id.region = None;
        } else if id.script.is_some() {
            id.script = None;
        } else {
            return None;
        }
        Some(Self::from_langid(id))
    }

    /// Returns this locale followed by its parents, most specific first.
    pub fn parents(&self) -> impl Iterator<Item = Locale> {
        std::iter::successors(Some(self.clone()), Locale::parent)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Locale {
    type Err = DateTimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
