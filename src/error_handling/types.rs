//! Error type definitions.
//!
//! This module defines the transport failure taxonomy, the coarse categories
//! failures are counted under, and the errors raised while setting up a run.

use std::fmt;
use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::UNKNOWN_STATUS_TEXT;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The credential file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The credential file is not a JSON object of strings.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// An option has a value outside its accepted range.
    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
}

/// Failure reported by a `Transport` for a single fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The target host name could not be resolved.
    #[error("host could not be resolved")]
    HostUnresolved,

    /// A response was received with a non-success status.
    #[error("HTTP {code} {}", .text.as_deref().unwrap_or(UNKNOWN_STATUS_TEXT))]
    HttpStatus {
        /// Numeric status code
        code: u16,
        /// Reason phrase, when the transport supplied one
        text: Option<String>,
    },

    /// Any other failure (timeout, malformed URL, connection reset, body error).
    #[error("{0}")]
    Other(String),
}

/// Coarse bucket under which structurally similar failures are counted.
///
/// The `Display` output is the label used in the error summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// DNS resolution of the target host failed
    HostNotFound,
    /// A non-success HTTP response; one category per status/text pair
    HttpStatus {
        /// Numeric status code
        code: u16,
        /// Reason phrase, `"unexpected"` when the transport gave none
        text: String,
    },
    /// The page was fetched but has no usable `<title>` element
    MissingTitle,
    /// Catch-all for every other failure
    FailedRequest,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::HostNotFound => f.write_str("host not found"),
            ErrorCategory::HttpStatus { code, text } => write!(f, "{text} response ({code})"),
            ErrorCategory::MissingTitle => f.write_str("missing title HTML element"),
            ErrorCategory::FailedRequest => f.write_str("failed request"),
        }
    }
}
