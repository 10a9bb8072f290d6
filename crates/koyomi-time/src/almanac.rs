//! Almanac (暦注): holiday derivation and per-day annotations.
//!
//! [`add_holidays`] applies the Act on National Holidays, Article 3:
//!
//! * §2 — a holiday falling on a Sunday makes the next day a substitute
//!   holiday (振替休日);
//! * §3 — a day sandwiched between two holidays is itself a holiday
//!   (国民の休日).
//!
//! [`Almanac`] bundles the augmented holiday table with the rokuyo table and
//! answers the questions a calendar layout asks about each day.

use std::path::Path;

use indexmap::IndexMap;
use koyomi_core::config::AlmanacConfig;
use koyomi_core::errors::Result;
use tracing::debug;

use crate::date::Date;
use crate::date_table::{HolidayTable, RokuyoTable};
use crate::day_of_week::{day_of_week, DayOfWeek};
use crate::weekday_definitions;

/// Label of a substitute holiday.
pub const SUBSTITUTE_HOLIDAY: &str = "振替休日";

/// Label of a day between two holidays.
pub const NATIONAL_HOLIDAY: &str = "国民の休日";

/// Add the holidays implied by `table` to it.
///
/// Both rules look only at the entries present on entry; days derived here
/// never trigger further derivations within the same call.  The gap rule
/// pairs entries that are adjacent in *table order*, so the table should be
/// sorted chronologically.  Existing entries are never overwritten.  If both
/// rules derive the same day the gap rule's label wins.
///
/// # Errors
/// Propagates [`day_of_week`] failures (dates before 0004-03-01) and date
/// overflow past 9999-12-31.
pub fn add_holidays(table: &mut HolidayTable) -> Result<()> {
    let days: Vec<Date> = table.dates().collect();
    let mut derived: IndexMap<Date, &'static str> = IndexMap::new();

    // 国民の祝日に関する法律 第3条第2項
    for &day in &days {
        if day_of_week(day)? == DayOfWeek::Sunday {
            let next_day = day.succ()?;
            if !table.contains(next_day) {
                derived.insert(next_day, SUBSTITUTE_HOLIDAY);
            }
        }
    }

    // 国民の祝日に関する法律 第3条第3項
    for pair in days.windows(2) {
        let (day1, day3) = (pair[0], pair[1]);
        if day1.days_between(day3) == 2 {
            let day2 = day1.succ()?;
            if !table.contains(day2) {
                derived.insert(day2, NATIONAL_HOLIDAY);
            }
        }
    }

    for (day, name) in derived {
        debug!(%day, name, "derived holiday");
        table.insert(day, name);
    }
    Ok(())
}

/// How a day is marked on a printed calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Sunday or any holiday (printed red).
    Holiday,
    /// Saturday that is not a holiday (printed blue).
    Saturday,
    /// Any other day (printed black).
    Weekday,
}

/// Everything printed next to a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAnnotation<'a> {
    /// The annotated date.
    pub date: Date,
    /// Day of the week.
    pub day_of_week: DayOfWeek,
    /// Rokuyo label, if known.
    pub rokuyo: Option<&'a str>,
    /// Holiday name, if any.
    pub holiday: Option<&'a str>,
    /// Colour class.
    pub kind: DayKind,
}

/// Holiday and rokuyo tables for one planning run.
#[derive(Debug, Clone, Default)]
pub struct Almanac {
    holidays: HolidayTable,
    rokuyo: RokuyoTable,
}

impl Almanac {
    /// Create an almanac with empty tables.
    ///
    /// # Errors
    /// Fails if the built-in weekday definitions disagree with [`DayOfWeek`].
    pub fn new() -> Result<Self> {
        weekday_definitions::validate_builtin()?;
        Ok(Self::default())
    }

    /// Create an almanac from the files named in `config`.
    pub fn from_config(config: &AlmanacConfig) -> Result<Self> {
        let mut almanac = Self::new()?;
        if let Some(path) = &config.day_of_week {
            weekday_definitions::validate_file(path)?;
        }
        if let Some(path) = &config.holidays {
            almanac.load_national_holidays(path)?;
        }
        if let Some(path) = &config.rokuyo {
            almanac.load_rokuyo(path)?;
        }
        Ok(almanac)
    }

    /// Load a national holiday file, derive the extra holidays and keep the
    /// result.
    pub fn load_national_holidays(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.set_national_holidays(HolidayTable::load(path)?)
    }

    /// Derive the extra holidays of `table` and keep the result.
    pub fn set_national_holidays(&mut self, mut table: HolidayTable) -> Result<()> {
        let before = table.len();
        add_holidays(&mut table)?;
        debug!(statutory = before, derived = table.len() - before, "national holidays set");
        self.holidays = table;
        Ok(())
    }

    /// Load a rokuyo file.
    pub fn load_rokuyo(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.rokuyo = RokuyoTable::load(path)?;
        Ok(())
    }

    /// Replace the rokuyo table.
    pub fn set_rokuyo(&mut self, table: RokuyoTable) {
        self.rokuyo = table;
    }

    /// The augmented holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    /// The rokuyo table.
    pub fn rokuyo_table(&self) -> &RokuyoTable {
        &self.rokuyo
    }

    /// Holiday name of `date`.
    pub fn holiday(&self, date: Date) -> Option<&str> {
        self.holidays.get(date)
    }

    /// Rokuyo label of `date`.
    pub fn rokuyo(&self, date: Date) -> Option<&str> {
        self.rokuyo.get(date)
    }

    /// Whether `date` is in the holiday table (Sundays are not implied).
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(date)
    }

    /// Day of the week of `date`.
    pub fn day_of_week(&self, date: Date) -> Result<DayOfWeek> {
        day_of_week(date)
    }

    /// Colour class of `date`.
    pub fn day_kind(&self, date: Date) -> Result<DayKind> {
        Ok(self.kind_of(date, day_of_week(date)?))
    }

    /// Everything a layout needs for `date`.
    pub fn annotate(&self, date: Date) -> Result<DayAnnotation<'_>> {
        let dow = day_of_week(date)?;
        Ok(DayAnnotation {
            date,
            day_of_week: dow,
            rokuyo: self.rokuyo(date),
            holiday: self.holiday(date),
            kind: self.kind_of(date, dow),
        })
    }

    fn kind_of(&self, date: Date, dow: DayOfWeek) -> DayKind {
        if dow == DayOfWeek::Sunday || self.is_holiday(date) {
            DayKind::Holiday
        } else if dow == DayOfWeek::Saturday {
            DayKind::Saturday
        } else {
            DayKind::Weekday
        }
    }
}
