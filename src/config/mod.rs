//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, header values)
//! - The library `Config` struct
//! - CLI option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
