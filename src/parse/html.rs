//! Page title extraction.

use scraper::{Html, Selector};
use std::sync::LazyLock;

const TITLE_SELECTOR_STR: &str = "title";

static TITLE_SELECTOR: LazyLock<Option<Selector>> = LazyLock::new(|| {
    Selector::parse(TITLE_SELECTOR_STR)
        .map_err(|e| {
            log::error!(
                "Failed to parse title selector '{}': {}",
                TITLE_SELECTOR_STR,
                e
            );
        })
        .ok()
});

/// Extracts the page title from raw HTML.
///
/// Uses the first `<title>` element in the document. Its text content has
/// whitespace runs collapsed to single spaces and is trimmed; a title that is
/// empty afterwards counts as missing.
///
/// # Returns
///
/// The title, or `None` if the document has no usable title element.
pub fn extract_title(html: &str) -> Option<String> {
    let selector = TITLE_SELECTOR.as_ref()?;
    let document = Html::parse_document(html);

    let Some(element) = document.select(selector).next() else {
        log::debug!("No title element found in document");
        return None;
    };

    let raw: String = element.text().collect();
    let title = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    log::debug!("Extracted title text: '{}' (length: {})", title, title.len());

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}
