//! Novel detail pages.

use super::cover::resolve_src;
use super::selectors::SELECTORS;
use super::status;
use crate::config::SiteConfig;
use crate::scrapers::NovelDetail;
use crate::utils::{document_text, own_text};
use scraper::Html;
use tracing::warn;

/// Chapters listed per index page.
pub const CHAPTERS_PER_PAGE: u32 = 50;

/// Position of the status cell among the header statistics.
const STATUS_STAT_INDEX: usize = 3;

/// Extracts a novel's metadata.
pub fn parse_novel(doc: &Html, path: &str, site: &SiteConfig) -> NovelDetail {
    let name = document_text(doc, &SELECTORS.detail_title);
    let name = if name.is_empty() {
        "Untitled".to_string()
    } else {
        name
    };

    let status_tokens = status_tokens(doc);
    let categories = doc
        .select(&SELECTORS.category_tag)
        .map(own_text)
        .collect::<Vec<_>>()
        .join(",");

    let cover_src = doc
        .select(&SELECTORS.detail_cover)
        .next()
        .and_then(|img| img.value().attr("src"));

    NovelDetail {
        path: path.to_string(),
        name,
        author: document_text(doc, &SELECTORS.author),
        summary: document_text(doc, &SELECTORS.summary),
        cover: resolve_src(cover_src, site),
        genres: format!("{},{}", status_tokens.join(","), categories),
        status: status::normalize(&status_tokens),
        total_pages: total_pages(doc, path),
    }
}

/// Recognized status words in the fourth header statistic.
fn status_tokens(doc: &Html) -> Vec<String> {
    doc.select(&SELECTORS.header_stat)
        .nth(STATUS_STAT_INDEX)
        .map(|cell| status::recognized_tokens(cell.select(&SELECTORS.strong).map(own_text)))
        .unwrap_or_default()
}

/// Number of chapter index pages, read from the first header statistic.
fn total_pages(doc: &Html, path: &str) -> u32 {
    let stat = doc
        .select(&SELECTORS.header_stat)
        .next()
        .map(|cell| cell.text().collect::<String>())
        .unwrap_or_default();

    match parse_chapter_count(&stat) {
        Some(count) => pages_for(count),
        None => {
            warn!(%path, stat = %stat.trim(), "unreadable chapter count, assuming one page");
            1
        }
    }
}

/// Keeps the ASCII digits of `text` and parses them.
pub fn parse_chapter_count(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// `ceil(count / 50)`, never below one.
pub fn pages_for(chapter_count: u32) -> u32 {
    chapter_count.div_ceil(CHAPTERS_PER_PAGE).max(1)
}
