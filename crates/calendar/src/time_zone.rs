//! Fixed-offset time zones.
//!
//! Only identifiers that denote a constant UTC offset are understood:
//! `Z`, `UTC`, `GMT`, `UT`, `+05`, `-0330`, `+05:30`, and those offsets
//! prefixed by `UTC`, `GMT` or `UT` (`UTC+01:00`). Region identifiers such as
//! `Europe/Warsaw` need a rules database and are rejected.

use std::fmt;

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

use crate::clock::{Clock, Instant};
use crate::day_of_week::DayOfWeek;
use crate::error::IllegalTimeZoneError;
use crate::month::Month;

/// Largest accepted offset magnitude, in seconds (18 hours).
const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// A time zone with a constant offset from UTC.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeZone {
    id: String,
    offset: FixedOffset,
}

impl TimeZone {
    /// Returns the UTC zone.
    pub fn utc() -> Self {
        Self {
            id: "UTC".to_string(),
            offset: Utc.fix(),
        }
    }

    /// Parses a fixed-offset zone identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalTimeZoneError`] if `id` is not a recognised fixed
    /// offset or its magnitude exceeds 18 hours.
    pub fn of(id: &str) -> Result<Self, IllegalTimeZoneError> {
        let trimmed = id.trim();
        let illegal = || IllegalTimeZoneError::with_message(format!("unknown time zone: {id:?}"));

        if matches!(trimmed, "Z" | "UTC" | "GMT" | "UT") {
            return Ok(Self {
                id: trimmed.to_string(),
                offset: Self::utc().offset,
            });
        }

        let offset_part = ["UTC", "GMT", "UT"]
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(prefix))
            .unwrap_or(trimmed);
        let seconds = parse_offset_seconds(offset_part).ok_or_else(illegal)?;
        if seconds.abs() > MAX_OFFSET_SECONDS {
            return Err(IllegalTimeZoneError::with_message(format!(
                "time zone offset out of range (max 18:00): {id:?}"
            )));
        }
        let offset = FixedOffset::east_opt(seconds).ok_or_else(illegal)?;
        Ok(Self {
            id: trimmed.to_string(),
            offset,
        })
    }

    /// Returns the identifier as given (trimmed).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the offset from UTC in seconds, positive east of Greenwich.
    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }

    /// Returns the local wall-clock date-time of `instant` in this zone.
    pub fn to_local(&self, instant: Instant) -> NaiveDateTime {
        instant.with_timezone(&self.offset).naive_local()
    }

    /// Returns the local date of `instant` in this zone.
    pub fn date_of(&self, instant: Instant) -> NaiveDate {
        self.to_local(instant).date()
    }

    /// Returns the local date right now according to `clock`.
    pub fn today(&self, clock: &dyn Clock) -> NaiveDate {
        self.date_of(clock.now())
    }

    /// Returns the local day of the week of `instant`.
    pub fn day_of_week(&self, instant: Instant) -> DayOfWeek {
        self.date_of(instant).weekday().into()
    }

    /// Returns the local month of `instant`.
    pub fn month(&self, instant: Instant) -> Month {
        let month0 = self.date_of(instant).month0() as usize;
        Month::ALL[month0]
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Parses `±HH`, `±HHMM` or `±HH:MM` into signed seconds.
fn parse_offset_seconds(s: &str) -> Option<i32> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    if !rest.is_ascii() {
        return None;
    }
    let (hours, minutes) = match rest.len() {
        2 => (rest, "00"),
        4 => rest.split_at(2),
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        _ => return None,
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_offsets() {
        assert_eq!(parse_offset_seconds("+05"), Some(5 * 3600));
        assert_eq!(parse_offset_seconds("-0330"), Some(-(3 * 3600 + 30 * 60)));
        assert_eq!(parse_offset_seconds("+05:45"), Some(5 * 3600 + 45 * 60));
        assert_eq!(parse_offset_seconds("05:00"), None);
        assert_eq!(parse_offset_seconds("+5"), None);
        assert_eq!(parse_offset_seconds("+05:60"), None);
        assert_eq!(parse_offset_seconds("+0a:00"), None);
        assert_eq!(parse_offset_seconds(""), None);
        assert_eq!(parse_offset_seconds("+1ä1"), None);
    }

    #[test]
    fn utc_aliases() {
        for id in ["Z", "UTC", "GMT", "UT"] {
            let zone = TimeZone::of(id).unwrap();
            assert_eq!(zone.offset_seconds(), 0);
            assert_eq!(zone.id(), id);
        }
    }

    #[test]
    fn prefixed_offsets() {
        assert_eq!(TimeZone::of("UTC+01:00").unwrap().offset_seconds(), 3600);
        assert_eq!(TimeZone::of("GMT-08").unwrap().offset_seconds(), -8 * 3600);
        assert_eq!(TimeZone::of("+18:00").unwrap().offset_seconds(), 18 * 3600);
    }

    #[test]
    fn too_large_offset() {
        let err = TimeZone::of("+18:30").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
