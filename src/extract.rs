//! Readable-text extraction from homepage HTML.
//!
//! Pulls the visible text out of block-level tags (paragraphs and headings)
//! in document order. The result is a flat text blob suitable for prompting;
//! navigation, scripts, and inline markup are ignored.

use scraper::{Html, Selector};
use tracing::warn;

use crate::error::FetchResult;
use crate::traits::PageFetcher;
use crate::types::ExtractedContent;

/// Tags considered readable content, matched in document order.
const READABLE_TAGS: &str = "p, h1, h2, h3, h4, h5, h6";

/// Extract readable text from raw HTML.
///
/// Selects paragraph and heading elements in document order, trims each
/// element's visible text, drops empty fragments, and joins the rest with
/// single newlines.
pub fn extract_readable_text(html: &str) -> String {
    let document = Html::parse_document(html);

    // The selector is a compile-time constant; parse cannot fail on it.
    let selector = Selector::parse(READABLE_TAGS).expect("valid readable-tags selector");

    let fragments: Vec<String> = document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    fragments.join("\n")
}

/// Fetch a URL and extract its readable text.
///
/// Any transport error is surfaced to the caller; the orchestrator treats
/// it as a skip for the entity. An empty result is not an error here —
/// [`ExtractedContent::is_empty`] is the orchestrator's short-circuit check.
pub async fn extract<F: PageFetcher>(fetcher: &F, url: &str) -> FetchResult<ExtractedContent> {
    let html = fetcher.fetch(url).await?;
    let text = extract_readable_text(&html);

    if text.trim().is_empty() {
        warn!(url = %url, "No meaningful text extracted");
    }

    Ok(ExtractedContent::new(url, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_paragraphs_and_headings_in_order() {
        let html = r#"
            <html><body>
                <h1>Acme Logistics</h1>
                <nav><a href="/about">About</a></nav>
                <p>We move freight.</p>
                <h2>Services</h2>
                <p>Warehousing and distribution.</p>
            </body></html>
        "#;

        let text = extract_readable_text(html);
        assert_eq!(
            text,
            "Acme Logistics\nWe move freight.\nServices\nWarehousing and distribution."
        );
    }

    #[test]
    fn test_ignores_script_and_list_content() {
        let html = r#"
            <html><body>
                <script>var x = 1;</script>
                <ul><li>Nav item</li></ul>
                <div>Plain div text</div>
            </body></html>
        "#;

        assert_eq!(extract_readable_text(html), "");
    }

    #[test]
    fn test_whitespace_only_elements_are_dropped() {
        let html = "<p>   </p><h1>Title</h1><p>\n\t</p>";
        assert_eq!(extract_readable_text(html), "Title");
    }

    #[test]
    fn test_nested_inline_markup_is_flattened() {
        let html = "<p>We <strong>move</strong> freight.</p>";
        assert_eq!(extract_readable_text(html), "We move freight.");
    }
}
