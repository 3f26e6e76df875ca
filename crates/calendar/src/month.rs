//! Month of the year.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, DateTimeFormatError};

/// Number of days in each month of a common year, indexed by ordinal.
const COMMON_YEAR_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year, indexed by ordinal.
const COMMON_YEAR_STARTS: [u16; 12] = [1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// A month of the Gregorian year. The month number is the ordinal plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the month with the given number (January = 1 ... December = 12).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `number` is not in 1..=12.
    pub fn from_number(number: i32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&number) {
            return Err(CalendarError::InvalidMonth { value: number });
        }
        Ok(Self::ALL[(number - 1) as usize])
    }

    /// Returns the 0-based position in [`Month::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the month number (January = 1 ... December = 12).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the month `months` after this one, wrapping around the year.
    ///
    /// Negative values move backwards.
    pub fn plus(self, months: i64) -> Self {
        let shifted = (self.ordinal() as i64 + months % 12).rem_euclid(12);
        Self::ALL[shifted as usize]
    }

    /// Returns the month `months` before this one, wrapping around the year.
    pub fn minus(self, months: i64) -> Self {
        self.plus(-(months % 12))
    }

    /// The next month.
    pub fn succ(self) -> Self {
        self.plus(1)
    }

    /// The previous month.
    pub fn pred(self) -> Self {
        self.plus(-1)
    }

    /// Returns the number of days in this month.
    pub fn length(self, leap_year: bool) -> u8 {
        match self {
            Month::February if leap_year => 29,
            _ => COMMON_YEAR_LENGTHS[self.ordinal()],
        }
    }

    /// Returns the shortest possible length of this month.
    pub fn min_length(self) -> u8 {
        self.length(false)
    }

    /// Returns the longest possible length of this month.
    pub fn max_length(self) -> u8 {
        self.length(true)
    }

    /// Returns the day-of-year (1-based) of the first day of this month.
    pub fn first_day_of_year(self, leap_year: bool) -> u16 {
        let start = COMMON_YEAR_STARTS[self.ordinal()];
        if leap_year && self > Month::February {
            start + 1
        } else {
            start
        }
    }

    /// Returns the English name, e.g. `"January"`.
    pub fn english_name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl TryFrom<i32> for Month {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(i32::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl From<chrono::Month> for Month {
    fn from(month: chrono::Month) -> Self {
        Self::ALL[month.number_from_month() as usize - 1]
    }
}

impl From<Month> for chrono::Month {
    fn from(month: Month) -> Self {
        match month {
            Month::January => chrono::Month::January,
            Month::February => chrono::Month::February,
            Month::March => chrono::Month::March,
            Month::April => chrono::Month::April,
            Month::May => chrono::Month::May,
            Month::June => chrono::Month::June,
            Month::July => chrono::Month::July,
            Month::August => chrono::Month::August,
            Month::September => chrono::Month::September,
            Month::October => chrono::Month::October,
            Month::November => chrono::Month::November,
            Month::December => chrono::Month::December,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for Month {
    type Err = DateTimeFormatError;

    /// Parses an English month name, full (`"March"`) or abbreviated (`"mar"`),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|month| {
                let name = month.english_name();
                name.eq_ignore_ascii_case(wanted) || name[..3].eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DateTimeFormatError::with_message(format!("unknown month: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::December.number(), 12);
    }

    #[test]
    fn from_number_valid() {
        assert_eq!(Month::from_number(3).unwrap(), Month::March);
    }

    #[test]
    fn from_number_invalid() {
        assert!(matches!(
            Month::from_number(0),
            Err(CalendarError::InvalidMonth { value: 0 })
        ));
        assert!(matches!(
            Month::from_number(13),
            Err(CalendarError::InvalidMonth { value: 13 })
        ));
    }

    #[test]
    fn plus_wraps() {
        assert_eq!(Month::January.plus(-1), Month::December);
        assert_eq!(Month::November.plus(3), Month::February);
        assert_eq!(Month::June.plus(120), Month::June);
        assert_eq!(Month::June.minus(6), Month::December);
    }

    #[test]
    fn lengths() {
        assert_eq!(Month::February.length(false), 28);
        assert_eq!(Month::February.length(true), 29);
        assert_eq!(Month::April.min_length(), 30);
        assert_eq!(Month::January.max_length(), 31);
    }

    #[test]
    fn lengths_sum_to_year() {
        let common: u32 = Month::ALL.iter().map(|m| u32::from(m.length(false))).sum();
        let leap: u32 = Month::ALL.iter().map(|m| u32::from(m.length(true))).sum();
        assert_eq!(common, 365);
        assert_eq!(leap, 366);
    }

    #[test]
    fn first_day_of_year_table_integrity() {
        for leap in [false, true] {
            for month in &Month::ALL[..11] {
                assert_eq!(
                    month.first_day_of_year(leap) + u16::from(month.length(leap)),
                    month.succ().first_day_of_year(leap),
                    "start mismatch after {month} (leap={leap})"
                );
            }
        }
        assert_eq!(Month::March.first_day_of_year(true), 61);
    }

    #[test]
    fn chrono_bridge() {
        for month in Month::ALL {
            let chrono_month: chrono::Month = month.into();
            assert_eq!(chrono_month.number_from_month(), u32::from(month.number()));
            assert_eq!(Month::from(chrono_month), month);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("september".parse::<Month>().unwrap(), Month::September);
        assert_eq!("Sep".parse::<Month>().unwrap(), Month::September);
        assert!("Sept".parse::<Month>().is_err());
    }
}
