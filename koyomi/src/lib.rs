//! # koyomi
//!
//! Japanese almanac annotations for calendar layouts: day of week, national
//! holidays with their derived substitute and in-between days, and rokuyo.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! logging setup for applications.
//!
//! ## Quick start
//!
//! ```rust
//! use koyomi::time::{add_holidays, Date, DayOfWeek, HolidayTable};
//!
//! let mut holidays = HolidayTable::from_keys([("20230101", "元日")]).unwrap();
//! add_holidays(&mut holidays).unwrap();
//!
//! let monday = Date::from_key("20230102").unwrap();
//! assert_eq!(holidays.get(monday), Some("振替休日"));
//! assert_eq!(koyomi::time::day_of_week(monday).unwrap(), DayOfWeek::Monday);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and configuration.
pub use koyomi_core as core;

/// Dates, day of week, tables and the almanac.
pub use koyomi_time as time;

/// Log subscriber setup via `tracing-subscriber`.
pub mod logging;

/// Commonly used items.
pub mod prelude {
    pub use koyomi_core::{AlmanacConfig, Error, Result};
    pub use koyomi_time::{
        add_holidays, day_of_week, Almanac, Date, DayAnnotation, DayKind, DayOfWeek,
        HolidayTable, RokuyoTable,
    };
}
