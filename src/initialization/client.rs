//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for title requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Overall and connect timeouts from the config
/// - Redirect following (reqwest default policy)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let client = ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(config.user_agent.clone())
        .use_rustls_tls()
        .build()?;
    Ok(Arc::new(client))
}
