//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions (transport failures, setup errors)
//! - Classification of transport failures into summary categories
//! - Thread-safe per-batch failure counting and summary formatting
//!
//! Failures are grouped into:
//! - **host not found**: the target host could not be resolved
//! - **`<text>` response (`<code>`)**: one bucket per HTTP status/text pair
//! - **missing title HTML element**: the page loaded but has no title
//! - **failed request**: everything else

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, classify, record_failure};
pub use stats::ErrorStats;
pub use types::{ConfigError, ErrorCategory, InitializationError, TransportError};
