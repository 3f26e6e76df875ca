//! Day of the week with ISO 8601 numbering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, DateTimeFormatError};

/// A day of the week, ordered Monday first as in ISO 8601.
///
/// The ISO day number is the position in [`DayOfWeek::ALL`] plus one,
/// so Monday is 1 and Sunday is 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in ISO order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Returns the day with the given ISO number (Monday = 1 ... Sunday = 7).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDayOfWeek`] if `iso_day_number` is not
    /// in 1..=7. Out-of-range values are never wrapped.
    pub fn from_iso_day_number(iso_day_number: i32) -> Result<Self, CalendarError> {
        if !(1..=7).contains(&iso_day_number) {
            return Err(CalendarError::InvalidDayOfWeek {
                value: iso_day_number,
            });
        }
        Ok(Self::ALL[(iso_day_number - 1) as usize])
    }

    /// Returns the 0-based position in [`DayOfWeek::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the ISO day number (Monday = 1 ... Sunday = 7).
    pub fn iso_day_number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the day `days` after this one, wrapping around the week.
    ///
    /// Negative values move backwards.
    pub fn plus(self, days: i64) -> Self {
        let shifted = (self.ordinal() as i64 + days % 7).rem_euclid(7);
        Self::ALL[shifted as usize]
    }

    /// Returns the day `days` before this one, wrapping around the week.
    pub fn minus(self, days: i64) -> Self {
        self.plus(-(days % 7))
    }

    /// The next day.
    pub fn succ(self) -> Self {
        self.plus(1)
    }

    /// The previous day.
    pub fn pred(self) -> Self {
        self.plus(-1)
    }

    /// Returns the English name, e.g. `"Monday"`.
    pub fn english_name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl TryFrom<i32> for DayOfWeek {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_iso_day_number(value)
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_iso_day_number(i32::from(value))
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.iso_day_number()
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
            DayOfWeek::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for DayOfWeek {
    type Err = DateTimeFormatError;

    /// Parses an English day name, full (`"Monday"`) or abbreviated (`"mon"`),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| {
                let name = day.english_name();
                name.eq_ignore_ascii_case(wanted) || name[..3].eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DateTimeFormatError::with_message(format!("unknown day of week: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_numbers_are_one_based() {
        assert_eq!(DayOfWeek::Monday.iso_day_number(), 1);
        assert_eq!(DayOfWeek::Thursday.iso_day_number(), 4);
        assert_eq!(DayOfWeek::Sunday.iso_day_number(), 7);
    }

    #[test]
    fn from_iso_valid() {
        assert_eq!(DayOfWeek::from_iso_day_number(1).unwrap(), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from_iso_day_number(7).unwrap(), DayOfWeek::Sunday);
    }

    #[test]
    fn from_iso_zero() {
        assert!(matches!(
            DayOfWeek::from_iso_day_number(0),
            Err(CalendarError::InvalidDayOfWeek { value: 0 })
        ));
    }

    #[test]
    fn from_iso_eight_does_not_wrap() {
        let err = DayOfWeek::from_iso_day_number(8).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDayOfWeek { value: 8 }));
        assert!(err.to_string().contains('8'));
        assert!(err.to_string().contains("1..=7"));
    }

    #[test]
    fn ordinal_matches_all() {
        for (i, day) in DayOfWeek::ALL.into_iter().enumerate() {
            assert_eq!(day.ordinal(), i);
        }
    }

    #[test]
    fn plus_wraps() {
        assert_eq!(DayOfWeek::Sunday.plus(1), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::Monday.plus(-1), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Wednesday.plus(7 * 1000), DayOfWeek::Wednesday);
        assert_eq!(DayOfWeek::Monday.plus(i64::MAX), DayOfWeek::Monday.plus(i64::MAX % 7));
        assert_eq!(DayOfWeek::Friday.minus(i64::MIN), DayOfWeek::Friday.plus(1));
    }

    #[test]
    fn succ_pred() {
        assert_eq!(DayOfWeek::Saturday.succ(), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Monday.pred(), DayOfWeek::Sunday);
    }

    #[test]
    fn chrono_bridge() {
        for day in DayOfWeek::ALL {
            let weekday: chrono::Weekday = day.into();
            assert_eq!(weekday.number_from_monday(), u32::from(day.iso_day_number()));
            assert_eq!(DayOfWeek::from(weekday), day);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("monday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Monday);
        assert_eq!("SUN".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert!("Funday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn display_is_english() {
        assert_eq!(DayOfWeek::Tuesday.to_string(), "Tuesday");
    }
}
