//! `Date` type and its `YYYYMMDD` key form.
//!
//! Dates are proleptic Gregorian and stored as a serial day number.
//!
//! # Serial number convention
//! * Serial 1 = January 1, year 1.
//! * The valid date range is 0001-01-01 to 9999-12-31, so every date has an
//!   eight-digit key.

use std::str::FromStr;

use koyomi_core::ensure;
use koyomi_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
///
/// `Display` renders the eight-digit key (`20230101`); `Debug` renders
/// `Date(2023-01-01)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, year 1.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (1..=9999).contains(&year),
            Error::Date(format!("year {year} out of range [1, 9999]"))
        );
        ensure!(
            (1..=12).contains(&month),
            Error::Date(format!("month {month} out of range [1, 12]"))
        );
        let days_in = days_in_month(year, month);
        ensure!(
            (1..=days_in).contains(&day),
            Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            ))
        );
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse an eight-digit `YYYYMMDD` key.
    ///
    /// Anything that is not exactly eight ASCII digits naming a real date
    /// fails with [`Error::InvalidDateKey`].
    pub fn from_key(key: &str) -> Result<Self> {
        let invalid = || Error::InvalidDateKey(key.to_string());
        ensure!(
            key.len() == 8 && key.bytes().all(|b| b.is_ascii_digit()),
            invalid()
        );
        let year: u16 = key[0..4].parse().map_err(|_| invalid())?;
        let month: u8 = key[4..6].parse().map_err(|_| invalid())?;
        let day: u8 = key[6..8].parse().map_err(|_| invalid())?;
        Date::from_ymd(year, month, day).map_err(|_| invalid())
    }

    /// Parse the numeric form of a key, e.g. `20230101`.
    pub fn from_key_number(key: u32) -> Result<Self> {
        Date::from_key(&format!("{key:08}"))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the eight-digit `YYYYMMDD` key.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Return the key as a number (`20230101`).
    pub fn key_number(&self) -> u32 {
        let (y, m, d) = ymd_from_serial(self.0);
        y as u32 * 10_000 + m as u32 * 100 + d as u32
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).unwrap_or(0);
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            Error::Date(format!("date arithmetic: {self} {n:+} days is out of range"))
        );
        Ok(Date(serial))
    }

    /// The following calendar day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Parsing / display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::from_key(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}{m:02}{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Serial number of January 1 of `year`.
fn start_of_year(year: i32) -> i32 {
    let p = year - 1;
    p * 365 + p / 4 - p / 100 + p / 400 + 1
}

/// Convert (year, month, day) to a serial number.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let mut serial = start_of_year(year as i32);
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32 - 1
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate, then adjust until serial falls within the year
    let mut y = (serial / 366 + 1).max(1);
    while serial >= start_of_year(y + 1) {
        y += 1;
    }
    let year = y as u16;
    let mut remaining = serial - start_of_year(y) + 1; // 1-based day of year
    let mut m = 1u8;
    loop {
        let days = days_in_month(year, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (year, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
