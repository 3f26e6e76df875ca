//! Ordering of calendrical values with differing precision.
//!
//! A bare [`Year`], a [`YearMonth`] and a full [`NaiveDate`] can all be
//! compared with [`ArbitraryPrecisionDate::compare_to`]. Fields are compared
//! from coarsest to finest and a field missing on either side compares
//! equal, so `Year(2020)` ties with every date in 2020.
//!
//! That tie rule makes mixed-precision equality non-transitive:
//! `2020-01-01` and `2020-12-31` both equal `Year(2020)` but not each other.
//! A collection mixing precisions sorts consistently only when no coarse
//! value ties with two finer values that differ from each other.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, DateTimeArithmeticError};
use crate::month::Month;

/// A calendrical value with at least a year, compared at shared precision.
pub trait ArbitraryPrecisionDate {
    /// The proleptic Gregorian year.
    fn year(&self) -> i32;

    /// The month, if this value is at least month-precise.
    fn month(&self) -> Option<Month> {
        None
    }

    /// The day of the month, if this value is day-precise.
    fn day(&self) -> Option<u8> {
        None
    }

    /// Compares on the fields both values have, coarsest first.
    fn compare_to(&self, other: &dyn ArbitraryPrecisionDate) -> Ordering {
        self.year()
            .cmp(&other.year())
            .then_with(|| compare_shared(self.month(), other.month()))
            .then_with(|| compare_shared(self.day(), other.day()))
    }
}

fn compare_shared<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// A year without finer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(pub i32);

impl Year {
    /// Returns `true` for leap years.
    pub fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }

    /// Returns the number of days in this year.
    pub fn length(self) -> u16 {
        if self.is_leap() { 366 } else { 365 }
    }

    /// Returns this year at the given month.
    pub fn at_month(self, month: Month) -> YearMonth {
        YearMonth::new(self.0, month)
    }
}

impl ArbitraryPrecisionDate for Year {
    fn year(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A year and month without a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Creates a year-month.
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the number of days in this month.
    pub fn length_of_month(self) -> u8 {
        self.month.length(is_leap_year(self.year))
    }

    /// Returns the date at `day` of this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` does not exist in this
    /// month, or [`CalendarError::Arithmetic`] if the year is outside the
    /// range supported by `chrono`.
    pub fn at_day(self, day: u32) -> Result<NaiveDate, CalendarError> {
        let max_day = self.length_of_month();
        if !(1..=u32::from(max_day)).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year: self.year,
                month: self.month.number(),
                day,
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month.number()), day).ok_or_else(|| {
            DateTimeArithmeticError::with_message(format!(
                "year {} is outside the supported range",
                self.year
            ))
            .into()
        })
    }
}

impl ArbitraryPrecisionDate for YearMonth {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> Option<Month> {
        Some(self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}

impl ArbitraryPrecisionDate for NaiveDate {
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    fn month(&self) -> Option<Month> {
        Month::from_number(Datelike::month(self) as i32).ok()
    }

    fn day(&self) -> Option<u8> {
        Some(Datelike::day(self) as u8)
    }
}
