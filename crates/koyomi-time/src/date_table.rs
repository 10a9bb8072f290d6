//! Date-keyed label tables (national holidays, rokuyo).
//!
//! A [`DateTable`] keeps entries in insertion order, which for a freshly
//! loaded table is the order of the source file.

use std::path::Path;

use indexmap::IndexMap;
use koyomi_core::errors::{Error, Result};
use tracing::{debug, warn};

use crate::date::Date;

/// Mapping from date to label, in insertion order, keys unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateTable {
    entries: IndexMap<Date, String>,
}

/// National holiday table (date → holiday name).
pub type HolidayTable = DateTable;

/// Rokuyo table (date → 先勝 / 友引 / 先負 / 仏滅 / 大安 / 赤口).
pub type RokuyoTable = DateTable;

impl DateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(YYYYMMDD, label)` pairs, validating every key.
    pub fn from_keys<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (key, label) in pairs {
            table.insert(Date::from_key(key.as_ref())?, label);
        }
        Ok(table)
    }

    /// Parse table text: one `YYYYMMDD label` entry per line.
    ///
    /// Blank lines are skipped.  A repeated date replaces the earlier label
    /// but keeps its position.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::new();
        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let mut fields = line.split_whitespace();
            let Some(key) = fields.next() else {
                continue;
            };
            let label = fields.next().ok_or_else(|| Error::Parse {
                line: line_no,
                message: format!("missing label after {key:?}"),
            })?;
            if let Some(extra) = fields.next() {
                return Err(Error::Parse {
                    line: line_no,
                    message: format!("unexpected field {extra:?}"),
                });
            }
            let date = Date::from_key(key).map_err(|e| Error::Parse {
                line: line_no,
                message: e.to_string(),
            })?;
            if let Some(previous) = table.insert(date, label) {
                warn!(line = line_no, %date, %previous, label, "duplicate date, keeping the later label");
            }
        }
        Ok(table)
    }

    /// Read and parse a table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        let table = Self::parse(&text)?;
        debug!(path = %path.display(), entries = table.len(), "loaded date table");
        Ok(table)
    }

    /// Insert or replace a label, returning the previous one.
    pub fn insert(&mut self, date: Date, label: impl Into<String>) -> Option<String> {
        self.entries.insert(date, label.into())
    }

    /// Label for `date`, if any.
    pub fn get(&self, date: Date) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    /// Whether `date` has an entry.
    pub fn contains(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dates in insertion order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.entries.keys().copied()
    }

    /// `(date, label)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> + '_ {
        self.entries.iter().map(|(d, l)| (*d, l.as_str()))
    }
}

impl FromIterator<(Date, String)> for DateTable {
    fn from_iter<I: IntoIterator<Item = (Date, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
