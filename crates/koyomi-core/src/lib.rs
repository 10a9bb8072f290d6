//! # koyomi-core
//!
//! Core types shared across the koyomi workspace: the error hierarchy with
//! its `ensure!` macro, and the almanac configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Almanac configuration loaded from TOML.
pub mod config;

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::AlmanacConfig;
pub use errors::{Error, Result};
