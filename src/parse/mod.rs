//! HTML parsing.
//!
//! Title extraction is done using CSS selectors via the `scraper` crate.

mod html;

// Re-export public API
pub use html::extract_title;
