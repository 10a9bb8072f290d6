//! # koyomi-time
//!
//! Dates and their `YYYYMMDD` keys, the day of week, date-keyed label tables,
//! and the almanac that derives substitute and in-between national holidays.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Holiday derivation and per-day annotations.
pub mod almanac;

/// `Date` type and `YYYYMMDD` keys.
pub mod date;

/// Date-keyed label tables.
pub mod date_table;

/// `DayOfWeek` and the weekday congruence.
pub mod day_of_week;

/// Weekday definitions file and its consistency check.
pub mod weekday_definitions;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use almanac::{add_holidays, Almanac, DayAnnotation, DayKind};
pub use date::Date;
pub use date_table::{DateTable, HolidayTable, RokuyoTable};
pub use day_of_week::{day_of_week, day_of_week_of_key, DayOfWeek};
