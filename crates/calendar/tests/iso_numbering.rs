use almanac_calendar::{CalendarError, DayOfWeek, Month};

#[test]
fn day_of_week_roundtrip_all_seven() {
    for n in 1..=7 {
        let day = DayOfWeek::from_iso_day_number(n).unwrap();
        assert_eq!(
            i32::from(day.iso_day_number()),
            n,
            "roundtrip failed for ISO day {n}: got {day:?}"
        );
    }
}

#[test]
fn day_of_week_out_of_range_is_reported() {
    for n in [i32::MIN, -7, -1, 0, 8, 14, i32::MAX] {
        let err = DayOfWeek::from_iso_day_number(n).unwrap_err();
        assert!(
            matches!(err, CalendarError::InvalidDayOfWeek { value } if value == n),
            "unexpected error for {n}: {err:?}"
        );
        assert!(err.to_string().contains(&n.to_string()), "message lacks {n}: {err}");
    }
}

#[test]
fn iso_numbers_increase_with_enumeration_order() {
    let numbers: Vec<u8> = DayOfWeek::ALL.iter().map(|d| d.iso_day_number()).collect();
    assert_eq!(numbers, [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(DayOfWeek::ALL[0], DayOfWeek::Monday);
    assert_eq!(DayOfWeek::ALL[6], DayOfWeek::Sunday);
    assert!(DayOfWeek::Monday < DayOfWeek::Sunday);
}

#[test]
fn month_roundtrip_all_twelve() {
    for n in 1..=12 {
        let month = Month::from_number(n).unwrap();
        assert_eq!(i32::from(month.number()), n, "roundtrip failed for month {n}");
    }
}

#[test]
fn month_out_of_range_is_reported() {
    for n in [0, 13, -1] {
        assert!(matches!(
            Month::from_number(n),
            Err(CalendarError::InvalidMonth { value }) if value == n
        ));
    }
}

#[test]
fn try_from_delegates_to_validation() {
    assert_eq!(DayOfWeek::try_from(3_u8).unwrap(), DayOfWeek::Wednesday);
    assert!(DayOfWeek::try_from(0_u8).is_err());
    assert_eq!(Month::try_from(12_i32).unwrap(), Month::December);
    assert!(Month::try_from(13_u8).is_err());
}

#[test]
fn cyclic_arithmetic_is_separate_from_validation() {
    // plus() wraps, from_iso_day_number() never does.
    assert_eq!(DayOfWeek::Sunday.plus(1), DayOfWeek::Monday);
    assert!(DayOfWeek::from_iso_day_number(8).is_err());
    for k in -3..=3 {
        assert_eq!(DayOfWeek::Thursday.plus(7 * k), DayOfWeek::Thursday);
    }
    assert_eq!(Month::January.plus(-1), Month::December);
}

#[test]
fn chrono_weekday_agrees_with_iso_numbering() {
    use chrono::{Datelike, NaiveDate};

    // 2024-01-01 was a Monday.
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for offset in 0..14 {
        let date = start + chrono::Duration::days(offset);
        let day = DayOfWeek::from(date.weekday());
        assert_eq!(day, DayOfWeek::Monday.plus(offset));
    }
}
