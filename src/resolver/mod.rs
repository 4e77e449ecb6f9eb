//! Batch title resolution.
//!
//! One task is spawned per URL; every task selects its credential, fetches
//! the page and either records `url -> title` or counts a failure category.
//! The batch returns only after every task has settled, with the error
//! summary formatted from the counts accumulated along the way.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::Semaphore;

use crate::config::Config;
use crate::credentials::CredentialTable;
use crate::error_handling::{record_failure, ErrorCategory, ErrorStats, InitializationError};
use crate::fetch::{HttpTransport, RequestHeaders, Transport};
use crate::parse::extract_title;

/// Result of a batch: resolved titles plus the aggregated failure summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleInfos {
    /// URL to title, one entry per successfully resolved URL
    pub mapping: HashMap<String, String>,
    /// Comma-joined failure categories, empty when nothing failed
    pub error_summary: String,
}

/// Terminal state of a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UrlOutcome {
    Resolved(String),
    Failed(ErrorCategory),
}

/// Resolves titles for batches of URLs over a `Transport`.
pub struct TitleResolver<T: Transport> {
    transport: Arc<T>,
    credentials: Arc<CredentialTable>,
    concurrency_limit: Option<Arc<Semaphore>>,
}

impl<T: Transport> Clone for TitleResolver<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            credentials: Arc::clone(&self.credentials),
            concurrency_limit: self.concurrency_limit.as_ref().map(Arc::clone),
        }
    }
}

impl<T: Transport> TitleResolver<T> {
    /// Creates a resolver that dispatches every URL of a batch at once.
    pub fn new(transport: T, credentials: CredentialTable) -> Self {
        Self {
            transport: Arc::new(transport),
            credentials: Arc::new(credentials),
            concurrency_limit: None,
        }
    }

    /// Caps the number of fetches in flight. `None` or `Some(0)` removes the cap.
    pub fn with_max_concurrency(mut self, max_concurrency: Option<usize>) -> Self {
        self.concurrency_limit = max_concurrency
            .filter(|&n| n > 0)
            .map(|n| Arc::new(Semaphore::new(n)));
        self
    }

    /// Resolves a title for every URL in `urls`.
    ///
    /// Duplicated URLs are fetched independently; the last one to finish
    /// decides the mapping entry. Failures never abort the batch, they only
    /// show up in `error_summary`.
    pub async fn resolve_titles<I, S>(&self, urls: I) -> TitleInfos
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start_time = Instant::now();
        let mapping = Arc::new(Mutex::new(HashMap::new()));
        let error_stats = Arc::new(ErrorStats::new());
        let mut tasks = FuturesUnordered::new();

        for url in urls {
            let url: String = url.into();
            let transport = Arc::clone(&self.transport);
            let credentials = Arc::clone(&self.credentials);
            let limit = self.concurrency_limit.as_ref().map(Arc::clone);
            let mapping = Arc::clone(&mapping);
            let error_stats = Arc::clone(&error_stats);

            tasks.push(tokio::spawn(async move {
                let _permit = match limit {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                match resolve_one(&url, transport.as_ref(), &credentials, &error_stats).await {
                    UrlOutcome::Resolved(title) => {
                        lock(&mapping).insert(url, title);
                    }
                    UrlOutcome::Failed(category) => {
                        debug!("Recorded \"{category}\" for \"{url}\"");
                    }
                }
            }));
        }

        let total_urls = tasks.len();
        while let Some(task_result) = tasks.next().await {
            if let Err(join_error) = task_result {
                warn!("Title task panicked: {:?}", join_error);
                error_stats.increment(ErrorCategory::FailedRequest);
            }
        }

        let mapping = std::mem::take(&mut *lock(&mapping));
        let error_summary = error_stats.format_summary();
        info!(
            "Resolved {} of {} URL{} in {:.2}s",
            mapping.len(),
            total_urls,
            if total_urls == 1 { "" } else { "s" },
            start_time.elapsed().as_secs_f64()
        );
        if !error_summary.is_empty() {
            info!("Failures: {error_summary}");
        }

        TitleInfos {
            mapping,
            error_summary,
        }
    }
}

fn lock<V>(mutex: &Mutex<V>) -> std::sync::MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Runs one URL from credential lookup to its terminal state.
async fn resolve_one<T: Transport>(
    url: &str,
    transport: &T,
    credentials: &CredentialTable,
    error_stats: &ErrorStats,
) -> UrlOutcome {
    let headers = RequestHeaders::for_url(url, credentials);
    if headers.cookie.is_some() {
        debug!("Sending cookie for \"{url}\"");
    }

    let page = match transport.fetch(url, &headers).await {
        Ok(page) => page,
        Err(e) => {
            warn!("Failed to resolve \"{url}\": {e}");
            return UrlOutcome::Failed(record_failure(error_stats, &e));
        }
    };

    match extract_title(&page.body) {
        Some(title) => {
            info!("Resolved title for \"{url}\": \"{title}\"");
            UrlOutcome::Resolved(title)
        }
        None => {
            warn!("A title for \"{url}\" could not be retrieved");
            error_stats.increment(ErrorCategory::MissingTitle);
            UrlOutcome::Failed(ErrorCategory::MissingTitle)
        }
    }
}

/// Resolves titles over HTTP using the client settings in `config`.
///
/// # Errors
///
/// Returns an `InitializationError` only if the HTTP client cannot be built.
/// Per-URL failures are reported through `TitleInfos::error_summary`.
///
/// # Example
///
/// ```no_run
/// use title_resolver::{resolve_titles, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let infos = resolve_titles(["https://www.rust-lang.org/"], &Config::default()).await?;
/// for (url, title) in &infos.mapping {
///     println!("{url}: {title}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn resolve_titles<I, S>(urls: I, config: &Config) -> Result<TitleInfos, InitializationError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let transport = HttpTransport::from_config(config)?;
    let resolver = TitleResolver::new(transport, config.credentials.clone())
        .with_max_concurrency(config.max_concurrency);
    Ok(resolver.resolve_titles(urls).await)
}
