//! External weekday definitions.
//!
//! The seven weekday labels also live in a TOML file so that other tools can
//! share them.  The file is only ever *checked* against [`DayOfWeek`]; any
//! disagreement is a configuration error.

use std::path::Path;

use koyomi_core::ensure;
use koyomi_core::errors::{Error, Result};
use serde::Deserialize;
use tracing::debug;

use crate::day_of_week::DayOfWeek;

/// The definitions shipped with the crate.
pub const BUILTIN: &str = include_str!("../data/day_of_week.toml");

/// One `[[day_of_week]]` record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayOfWeekRecord {
    /// Ordinal, Sunday = 0.
    pub number: u8,
    /// Short English name.
    pub name_en: String,
    /// Long English name.
    pub name_en_long: String,
    /// Short Japanese name.
    pub name_ja: String,
    /// Long Japanese name.
    pub name_ja_long: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Definitions {
    day_of_week: Vec<DayOfWeekRecord>,
}

/// Parse definitions text without checking it.
pub fn parse(text: &str) -> Result<Vec<DayOfWeekRecord>> {
    let defs: Definitions = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
    Ok(defs.day_of_week)
}

/// Parse `text` and check that it describes exactly the built-in seven days.
pub fn validate(text: &str) -> Result<()> {
    let records = parse(text)?;
    ensure!(
        records.len() == 7,
        Error::Config(format!(
            "expected 7 day_of_week records, found {}",
            records.len()
        ))
    );
    let mut seen = [false; 7];
    for record in &records {
        let day = DayOfWeek::from_ordinal(record.number).ok_or_else(|| {
            Error::Config(format!("day_of_week number {} out of range [0, 6]", record.number))
        })?;
        ensure!(
            !std::mem::replace(&mut seen[record.number as usize], true),
            Error::Config(format!("duplicate day_of_week number {}", record.number))
        );
        let expected = [
            ("name_en", day.name_en(), record.name_en.as_str()),
            ("name_en_long", day.name_en_long(), record.name_en_long.as_str()),
            ("name_ja", day.name_ja(), record.name_ja.as_str()),
            ("name_ja_long", day.name_ja_long(), record.name_ja_long.as_str()),
        ];
        for (field, want, got) in expected {
            ensure!(
                want == got,
                Error::Config(format!(
                    "day_of_week {}: {field} is {got:?}, expected {want:?}",
                    record.number
                ))
            );
        }
    }
    Ok(())
}

/// Check the definitions shipped with the crate.
pub fn validate_builtin() -> Result<()> {
    validate(BUILTIN)
}

/// Read a definitions file and check it.
pub fn validate_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
    validate(&text)?;
    debug!(path = %path.display(), "weekday definitions agree with built-in table");
    Ok(())
}
