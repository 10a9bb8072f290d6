//! `DayOfWeek` (七曜) and the congruence that computes it.

use koyomi_core::ensure;
use koyomi_core::errors::{Error, Result};
use tracing::trace;

use crate::date::Date;

/// Day of the week.
///
/// Ordinals run 0–6 with Sunday = 0.  Each variant carries English and
/// Japanese labels in short and long form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DayOfWeek {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

/// `(name_en, name_en_long, name_ja, name_ja_long)` indexed by ordinal.
const LABELS: [(&str, &str, &str, &str); 7] = [
    ("Sun", "Sunday", "日", "日曜日"),
    ("Mon", "Monday", "月", "月曜日"),
    ("Tue", "Tuesday", "火", "火曜日"),
    ("Wed", "Wednesday", "水", "水曜日"),
    ("Thu", "Thursday", "木", "木曜日"),
    ("Fri", "Friday", "金", "金曜日"),
    ("Sat", "Saturday", "土", "土曜日"),
];

impl DayOfWeek {
    /// All seven days in ordinal order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Construct from the ordinal (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Return the ordinal (0 = Sunday … 6 = Saturday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// The next day, wrapping Saturday to Sunday.
    pub fn succ(&self) -> Self {
        Self::ALL[(self.ordinal() as usize + 1) % 7]
    }

    /// `"Sun"`, `"Mon"`, …
    pub fn name_en(&self) -> &'static str {
        LABELS[*self as usize].0
    }

    /// `"Sunday"`, `"Monday"`, …
    pub fn name_en_long(&self) -> &'static str {
        LABELS[*self as usize].1
    }

    /// `"日"`, `"月"`, …
    pub fn name_ja(&self) -> &'static str {
        LABELS[*self as usize].2
    }

    /// `"日曜日"`, `"月曜日"`, …
    pub fn name_ja_long(&self) -> &'static str {
        LABELS[*self as usize].3
    }

    /// Map a congruence residue (0 = Saturday, 1 = Sunday, …) to a day.
    fn from_residue(h: i32) -> Self {
        Self::ALL[(h + 6).rem_euclid(7) as usize]
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name_en_long())
    }
}

/// Compute the day of the week of `date` with Zeller's congruence.
///
/// January and February count as months 13 and 14 of the previous year.
/// From (adjusted) year 1582 the Gregorian century correction is used,
/// before it the Julian one; the date itself is always read as written.
///
/// # Errors
/// [`Error::UnsupportedYear`] when the adjusted year is below 4, i.e. for
/// any date before 0004-03-01.
pub fn day_of_week(date: Date) -> Result<DayOfWeek> {
    let (year, month, day) = date.ymd();
    let (y, m) = if month < 3 {
        (year as i32 - 1, month as i32 + 12)
    } else {
        (year as i32, month as i32)
    };
    ensure!(y >= 4, Error::UnsupportedYear(y));
    let c = y / 100;
    let yy = y % 100;
    let r = if y >= 1582 { -2 * c + c / 4 } else { -c + 5 };
    let h = (day as i32 + (26 * (m + 1)) / 10 + yy + yy / 4 + r).rem_euclid(7);
    let dow = DayOfWeek::from_residue(h);
    trace!(%date, h, %dow, "day of week");
    Ok(dow)
}

/// Validate a `YYYYMMDD` key, then compute its day of the week.
pub fn day_of_week_of_key(key: &str) -> Result<DayOfWeek> {
    day_of_week(Date::from_key(key)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dow(key: &str) -> DayOfWeek {
        day_of_week_of_key(key).unwrap()
    }

    #[test]
    fn fixed_points() {
        assert_eq!(dow("20000101"), DayOfWeek::Saturday);
        assert_eq!(dow("20230101"), DayOfWeek::Sunday);
        assert_eq!(dow("20090921"), DayOfWeek::Monday);
        assert_eq!(dow("20090923"), DayOfWeek::Wednesday);
        assert_eq!(dow("19000101"), DayOfWeek::Monday);
        assert_eq!(dow("99991231"), DayOfWeek::Friday);
    }

    #[test]
    fn gregorian_reform() {
        // First Gregorian day was a Friday.
        assert_eq!(dow("15821015"), DayOfWeek::Friday);
        // Adjusted year 1582 already uses the Gregorian correction.
        assert_eq!(dow("15821004"), DayOfWeek::Monday);
        assert_eq!(dow("15820301"), DayOfWeek::Monday);
    }

    #[test]
    fn julian_branch() {
        // February 1582 belongs to adjusted year 1581.
        assert_eq!(dow("15820228"), DayOfWeek::Wednesday);
        assert_eq!(dow("15000228"), DayOfWeek::Friday);
        assert_eq!(dow("15000301"), DayOfWeek::Sunday);
        assert_eq!(dow("00040301"), DayOfWeek::Saturday);
        assert_eq!(dow("00050101"), DayOfWeek::Thursday);
    }

    #[test]
    fn year_below_four_is_unsupported() {
        assert_eq!(day_of_week_of_key("00040229"), Err(Error::UnsupportedYear(3)));
        assert_eq!(day_of_week_of_key("00030615"), Err(Error::UnsupportedYear(3)));
        assert_eq!(day_of_week_of_key("00010101"), Err(Error::UnsupportedYear(0)));
    }

    #[test]
    fn malformed_key() {
        assert!(matches!(
            day_of_week_of_key("2023011"),
            Err(Error::InvalidDateKey(_))
        ));
    }

    #[test]
    fn ordinals_and_labels() {
        for (i, d) in DayOfWeek::ALL.iter().enumerate() {
            assert_eq!(d.ordinal() as usize, i);
            assert_eq!(DayOfWeek::from_ordinal(i as u8), Some(*d));
        }
        assert_eq!(DayOfWeek::from_ordinal(7), None);
        assert_eq!(DayOfWeek::Saturday.succ(), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Sunday.name_ja(), "日");
        assert_eq!(DayOfWeek::Saturday.name_ja_long(), "土曜日");
        assert_eq!(DayOfWeek::Wednesday.name_en(), "Wed");
        assert_eq!(DayOfWeek::Thursday.to_string(), "Thursday");
    }
}
