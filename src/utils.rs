//! Utility functions for common operations.

use scraper::{ElementRef, Html, Selector};

/// Strips the whole run of leading slashes from a path.
///
/// Site links come as `/novel/123` or `//novel/123`; stored paths are always
/// relative so the host can resolve them against the base URL again.
pub fn strip_leading_slashes(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Reads an `href` as a relative path, or an empty string when absent.
pub fn relative_href(elem: ElementRef<'_>) -> String {
    elem.value()
        .attr("href")
        .map(|href| strip_leading_slashes(href.trim()).to_string())
        .unwrap_or_default()
}

/// Concatenates the text of every element matching `selector` in the
/// document and trims the result.
pub fn document_text(doc: &Html, selector: &Selector) -> String {
    doc.select(selector)
        .flat_map(|elem| elem.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Same as [`document_text`], scoped to the descendants of `elem`.
pub fn element_text(elem: ElementRef<'_>, selector: &Selector) -> String {
    elem.select(selector)
        .flat_map(|inner| inner.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Trimmed text content of a single element.
pub fn own_text(elem: ElementRef<'_>) -> String {
    elem.text().collect::<String>().trim().to_string()
}
