//! Result rendering for the CLI.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::resolver::TitleInfos;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SortedTitleInfos<'a> {
    mapping: BTreeMap<&'a str, &'a str>,
    error_summary: &'a str,
}

/// Renders a batch result for stdout.
///
/// `urls` is the input list, used to keep plain and markdown output in input
/// order. JSON output sorts the mapping by URL.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(format: OutputFormat, urls: &[String], infos: &TitleInfos) -> Result<String> {
    let rendered = match format {
        OutputFormat::Plain => urls
            .iter()
            .filter_map(|url| infos.mapping.get(url).map(|title| format!("{url}\t{title}")))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Markdown => urls
            .iter()
            .map(|url| match infos.mapping.get(url) {
                Some(title) => format!("[{}]({})", escape_markdown_text(title), url),
                None => url.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let sorted = SortedTitleInfos {
                mapping: infos
                    .mapping
                    .iter()
                    .map(|(url, title)| (url.as_str(), title.as_str()))
                    .collect(),
                error_summary: &infos.error_summary,
            };
            serde_json::to_string_pretty(&sorted)?
        }
    };
    Ok(rendered)
}

/// Escapes characters that would end or nest a markdown link text.
fn escape_markdown_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
