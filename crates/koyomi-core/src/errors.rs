//! Error types for koyomi.
//!
//! Every fallible operation in the workspace returns [`Result`]. Precondition
//! checks go through the [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// The top-level error type used throughout koyomi.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The weekday congruence is undefined for this (adjusted) year.
    #[error("operation not supported. year ({0}) < 4")]
    UnsupportedYear(i32),

    /// A `YYYYMMDD` key that is not exactly eight digits or names an
    /// impossible date.
    #[error("invalid date key {0:?}")]
    InvalidDateKey(String),

    /// Date construction or arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Malformed line in a holiday / rokuyo table file.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Invalid configuration or weekday definitions.
    #[error("configuration error: {0}")]
    Config(String),

    /// File could not be read.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Shorthand `Result` type used throughout koyomi.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function if `$cond` is false.
///
/// # Example
/// ```
/// use koyomi_core::{ensure, errors::{Error, Result}};
/// fn month(m: u8) -> Result<u8> {
///     ensure!((1..=12).contains(&m), Error::Date(format!("month {m} out of range [1, 12]")));
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}
