//! CLI support.
//!
//! This module provides URL input reading and result rendering used by the
//! `title_resolver` binary.

pub mod input;
pub mod output;

// Re-export public API
pub use input::{collect_urls, parse_url_lines};
pub use output::render;
