//! Error categorization.
//!
//! Transport failures are converted into a `TransportError` at the reqwest
//! boundary, then mapped onto an `ErrorCategory` by a total match.

use std::error::Error as StdError;

use super::stats::ErrorStats;
use super::types::{ErrorCategory, TransportError};
use crate::config::UNKNOWN_STATUS_TEXT;

// Messages resolvers put in the error chain when a name lookup fails
const DNS_FAILURE_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname",
    "no such host",
];

/// Maps a transport failure onto its summary category.
///
/// Priority: unresolvable host, then HTTP status (text defaults to
/// `"unexpected"`), then the generic `failed request` bucket.
pub fn classify(error: &TransportError) -> ErrorCategory {
    match error {
        TransportError::HostUnresolved => ErrorCategory::HostNotFound,
        TransportError::HttpStatus { code, text } => ErrorCategory::HttpStatus {
            code: *code,
            text: text
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(UNKNOWN_STATUS_TEXT)
                .to_string(),
        },
        TransportError::Other(_) => ErrorCategory::FailedRequest,
    }
}

/// Classifies `error` and counts it in `stats`, returning the category.
pub fn record_failure(stats: &ErrorStats, error: &TransportError) -> ErrorCategory {
    let category = classify(error);
    stats.increment(category.clone());
    category
}

/// Categorizes a `reqwest::Error` into a `TransportError`.
///
/// Status errors keep their code and canonical reason phrase; the phrase sent
/// on the wire is only visible on the response itself. Connection
/// errors caused by a failed name lookup become `HostUnresolved`. Everything
/// else, including timeouts and malformed URLs, becomes `Other`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportError {
    if let Some(status) = error.status() {
        return TransportError::HttpStatus {
            code: status.as_u16(),
            text: status.canonical_reason().map(str::to_string),
        };
    }

    if error.is_connect() && is_dns_failure(error) {
        return TransportError::HostUnresolved;
    }

    TransportError::Other(error_chain_message(error))
}

/// Whether any error in the source chain reports a failed name lookup.
pub(crate) fn is_dns_failure(error: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        let message = err.to_string().to_lowercase();
        if DNS_FAILURE_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
        {
            return true;
        }
        current = err.source();
    }
    false
}

/// Joins the messages of an error and its sources with `": "`.
fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut current = error.source();
    while let Some(err) = current {
        parts.push(err.to_string());
        current = err.source();
    }
    parts.join(": ")
}
