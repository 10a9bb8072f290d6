//! Almanac configuration.
//!
//! ```toml
//! holidays = "data/holiday-2024.txt"
//! rokuyo = "data/rokuyo-2024.txt"
//! day_of_week = "conf/day_of_week.toml"
//! ```
//!
//! Relative paths in a file loaded with [`AlmanacConfig::from_file`] are
//! resolved against the directory containing that file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{Error, Result};

/// Where the almanac finds its tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// National holiday table file (`YYYYMMDD name` per line).
    #[serde(default)]
    pub holidays: Option<PathBuf>,

    /// Rokuyo table file (`YYYYMMDD label` per line).
    #[serde(default)]
    pub rokuyo: Option<PathBuf>,

    /// External weekday definitions, checked against the built-in set.
    #[serde(default)]
    pub day_of_week: Option<PathBuf>,
}

impl AlmanacConfig {
    /// Parse a configuration from TOML text. Paths are taken as written.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Make every relative path absolute with respect to `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for p in [&mut self.holidays, &mut self.rokuyo, &mut self.day_of_week]
            .into_iter()
            .flatten()
        {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
    }
}
