//! Rendering styles for display names.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::DateTimeFormatError;

/// Length and grammatical context of a display name.
///
/// Standalone forms are used when a name appears on its own, such as a
/// calendar header. The other forms are used inside a formatted date phrase.
/// Several languages inflect month names differently in the two contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Full,
    #[default]
    FullStandalone,
    Short,
    ShortStandalone,
    Narrow,
    NarrowStandalone,
}

impl TextStyle {
    /// All styles.
    pub const ALL: [TextStyle; 6] = [
        TextStyle::Full,
        TextStyle::FullStandalone,
        TextStyle::Short,
        TextStyle::ShortStandalone,
        TextStyle::Narrow,
        TextStyle::NarrowStandalone,
    ];

    /// Returns the style to try when this one has no data.
    ///
    /// Standalone falls back to the in-phrase form of the same length, and
    /// full falls back to short. Short and narrow are terminal.
    pub fn degraded(self) -> Option<TextStyle> {
        match self {
            TextStyle::FullStandalone => Some(TextStyle::Full),
            TextStyle::Full => Some(TextStyle::Short),
            TextStyle::ShortStandalone => Some(TextStyle::Short),
            TextStyle::NarrowStandalone => Some(TextStyle::Narrow),
            TextStyle::Short | TextStyle::Narrow => None,
        }
    }

    /// Returns this style followed by its degradations, lazily.
    pub fn degradation_chain(self) -> impl Iterator<Item = TextStyle> {
        std::iter::successors(Some(self), |style| style.degraded())
    }

    /// Returns the snake_case name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            TextStyle::Full => "full",
            TextStyle::FullStandalone => "full_standalone",
            TextStyle::Short => "short",
            TextStyle::ShortStandalone => "short_standalone",
            TextStyle::Narrow => "narrow",
            TextStyle::NarrowStandalone => "narrow_standalone",
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextStyle {
    type Err = DateTimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| DateTimeFormatError::with_message(format!("unknown text style: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_full_standalone() {
        assert_eq!(TextStyle::default(), TextStyle::FullStandalone);
    }

    #[test]
    fn full_standalone_chain() {
        let chain: Vec<_> = TextStyle::FullStandalone.degradation_chain().collect();
        assert_eq!(
            chain,
            [TextStyle::FullStandalone, TextStyle::Full, TextStyle::Short]
        );
    }

    #[test]
    fn narrow_chains_stay_narrow() {
        let chain: Vec<_> = TextStyle::NarrowStandalone.degradation_chain().collect();
        assert_eq!(chain, [TextStyle::NarrowStandalone, TextStyle::Narrow]);
        assert_eq!(TextStyle::Narrow.degradation_chain().count(), 1);
    }

    #[test]
    fn short_standalone_chain() {
        let chain: Vec<_> = TextStyle::ShortStandalone.degradation_chain().collect();
        assert_eq!(chain, [TextStyle::ShortStandalone, TextStyle::Short]);
    }

    #[test]
    fn parse_round_trips_names() {
        for style in TextStyle::ALL {
            assert_eq!(style.as_str().parse::<TextStyle>().unwrap(), style);
        }
        assert_eq!("Full-Standalone".parse::<TextStyle>().unwrap(), TextStyle::FullStandalone);
        assert!("tiny".parse::<TextStyle>().is_err());
    }
}
