//! Configuration constants.
//!
//! Defaults used by both the library `Config` and the CLI options.

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Value of the `Accept` header sent with every request.
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

/// Maximum response body size in bytes (2MB)
/// Bytes past this point are not read; the title lives in `<head>`
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Status text used when the transport did not supply one.
pub const UNKNOWN_STATUS_TEXT: &str = "unexpected";
