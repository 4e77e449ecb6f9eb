//! Request header construction.

use crate::config::ACCEPT_HTML;
use crate::credentials::CredentialTable;

/// Headers sent with a title request.
///
/// `Accept` always asks for HTML; `Cookie` is present only when a credential
/// prefix matched the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    /// Value of the `Accept` header
    pub accept: &'static str,
    /// Value of the `Cookie` header, if any
    pub cookie: Option<String>,
}

impl RequestHeaders {
    /// Builds the headers for `url`, looking up its credential in `credentials`.
    pub fn for_url(url: &str, credentials: &CredentialTable) -> Self {
        let cookie = credentials.credential_for(url).map(str::to_string);
        Self {
            accept: ACCEPT_HTML,
            cookie,
        }
    }

    /// Returns headers as a vector of (name, value) tuples.
    pub fn as_vec(&self) -> Vec<(&'static str, &str)> {
        let mut headers = vec![("accept", self.accept)];
        if let Some(cookie) = &self.cookie {
            headers.push(("cookie", cookie.as_str()));
        }
        headers
    }

    /// Applies the headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        let builder = builder.header(reqwest::header::ACCEPT, self.accept);
        match &self.cookie {
            Some(cookie) => builder.header(reqwest::header::COOKIE, cookie.as_str()),
            None => builder,
        }
    }
}
