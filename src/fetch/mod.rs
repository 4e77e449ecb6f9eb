//! Page fetching.
//!
//! The resolver talks to the network through the `Transport` trait so that
//! batches can run against a real HTTP client or a test double. Failures
//! leave this module already classified as a `TransportError`.

mod request;

use std::future::Future;
use std::sync::Arc;

use hyper::ext::ReasonPhrase;
use log::debug;

use crate::config::{Config, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{categorize_reqwest_error, InitializationError, TransportError};
use crate::initialization::init_client;

pub use request::RequestHeaders;

/// A successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Decoded response body
    pub body: String,
}

/// Capability to fetch a URL with the given headers.
///
/// Implementations report any failure, including non-success HTTP statuses,
/// as a `TransportError`.
pub trait Transport: Send + Sync + 'static {
    /// Fetches `url`, returning the body on a success status.
    fn fetch(
        &self,
        url: &str,
        headers: &RequestHeaders,
    ) -> impl Future<Output = Result<FetchedPage, TransportError>> + Send;
}

/// `Transport` backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Arc<reqwest::Client>,
}

impl HttpTransport {
    /// Wraps an existing client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Builds a client from `config` (timeout and user agent).
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if client creation fails.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(init_client(config)?))
    }
}

impl Transport for HttpTransport {
    async fn fetch(
        &self,
        url: &str,
        headers: &RequestHeaders,
    ) -> Result<FetchedPage, TransportError> {
        let request = headers.apply_to_request_builder(self.client.get(url));
        let mut response = request
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status();
        debug!("Received {} for {}", status, url);

        if !status.is_success() {
            return Err(TransportError::HttpStatus {
                code: status.as_u16(),
                text: reason_phrase(&response),
            });
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?
        {
            let remaining = MAX_RESPONSE_BODY_SIZE - body.len();
            if chunk.len() > remaining {
                body.extend_from_slice(&chunk[..remaining]);
                debug!(
                    "Truncated body of {} at {} bytes",
                    url, MAX_RESPONSE_BODY_SIZE
                );
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok(FetchedPage {
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

/// Reason phrase of a response: the one sent on the wire when it differs
/// from the canonical text, otherwise the canonical text for the code.
fn reason_phrase(response: &reqwest::Response) -> Option<String> {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .and_then(|phrase| std::str::from_utf8(phrase.as_bytes()).ok())
        .filter(|phrase| !phrase.is_empty())
        .or_else(|| response.status().canonical_reason())
        .map(str::to_string)
}
