//! URL input reading.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Collects URLs from positional arguments followed by the lines of `file`.
///
/// `file` may be `-` to read from stdin. URLs are not validated here; a
/// malformed URL surfaces later as a failed request.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn collect_urls(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut urls: Vec<String> = args
        .iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect();

    match file {
        Some(path) if path.as_os_str() == "-" => {
            log::info!("Reading URLs from stdin");
            urls.extend(parse_url_lines(tokio::io::stdin()).await?);
        }
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            urls.extend(parse_url_lines(file).await?);
        }
        None => {}
    }

    Ok(urls)
}

/// Reads one URL per line, skipping blank lines and `#` comments.
///
/// # Errors
///
/// Returns an error if reading from `reader` fails.
pub async fn parse_url_lines<R>(reader: R) -> Result<Vec<String>>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut urls = Vec::new();
    while let Some(line) = lines.next_line().await.context("Failed to read URL input")? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        urls.push(trimmed.to_string());
    }
    log::debug!("Read {} URL(s) from input", urls.len());
    Ok(urls)
}
