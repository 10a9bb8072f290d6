//! Day-of-week congruence: known dates, cyclicity, and the year-4 floor.

use koyomi_core::Error;
use koyomi_time::{day_of_week, day_of_week_of_key, Date, DayOfWeek};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn millennium_is_saturday() {
    assert_eq!(day_of_week(date(2000, 1, 1)).unwrap(), DayOfWeek::Saturday);
    assert_eq!(day_of_week_of_key("20000101").unwrap(), DayOfWeek::Saturday);
}

#[test]
fn well_known_dates() {
    let cases = [
        ((1776, 7, 4), DayOfWeek::Thursday),
        ((1900, 1, 1), DayOfWeek::Monday),
        ((1969, 7, 20), DayOfWeek::Sunday),
        ((2011, 3, 11), DayOfWeek::Friday),
        ((2024, 2, 29), DayOfWeek::Thursday),
    ];
    for ((y, m, d), expected) in cases {
        assert_eq!(
            day_of_week(date(y, m, d)).unwrap(),
            expected,
            "{y:04}-{m:02}-{d:02}"
        );
    }
}

#[test]
fn cyclic_from_march_1582_onwards() {
    let mut d = date(1582, 3, 1);
    let end = date(2400, 3, 1);
    let mut prev = day_of_week(d).unwrap();
    while d < end {
        d = d.succ().unwrap();
        let dow = day_of_week(d).unwrap();
        assert_eq!(dow, prev.succ(), "break at {d}");
        prev = dow;
    }
}

#[test]
fn julian_branch_breaks_at_gregorian_common_centuries() {
    // 1500 is a leap year for the congruence but not for the date itself.
    let feb28 = day_of_week(date(1500, 2, 28)).unwrap();
    let mar01 = day_of_week(date(1500, 3, 1)).unwrap();
    assert_eq!(feb28, DayOfWeek::Friday);
    assert_eq!(mar01, DayOfWeek::Sunday);
    // 1600 is leap in both.
    let feb29 = day_of_week(date(1600, 2, 29)).unwrap();
    assert_eq!(day_of_week(date(1600, 3, 1)).unwrap(), feb29.succ());
}

#[test]
fn floor_at_year_four() {
    assert_eq!(day_of_week(date(4, 3, 1)).unwrap(), DayOfWeek::Saturday);
    assert_eq!(day_of_week(date(4, 2, 29)), Err(Error::UnsupportedYear(3)));
    assert_eq!(day_of_week(date(1, 1, 1)), Err(Error::UnsupportedYear(0)));
}

#[test]
fn malformed_keys_are_rejected_before_computing() {
    for key in ["2000011", "2000-01-01", "20000132", "abcdefgh"] {
        assert_eq!(
            day_of_week_of_key(key),
            Err(Error::InvalidDateKey(key.to_string()))
        );
    }
}

proptest! {
    #[test]
    fn next_day_is_next_weekday(y in 1583u16..=9999, m in 1u8..=12, d in 1u8..=28) {
        let today = date(y, m, d);
        prop_assume!(today < Date::MAX);
        let tomorrow = today.succ().unwrap();
        prop_assert_eq!(
            day_of_week(tomorrow).unwrap(),
            day_of_week(today).unwrap().succ()
        );
    }

    #[test]
    fn week_later_is_same_weekday(serial in 600_000i32..3_652_000) {
        let d = Date::MIN.add_days(serial).unwrap();
        prop_assert_eq!(
            day_of_week(d.add_days(7).unwrap()).unwrap(),
            day_of_week(d).unwrap()
        );
    }
}
