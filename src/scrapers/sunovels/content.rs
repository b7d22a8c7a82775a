//! Chapter text.

use super::selectors::SELECTORS;
use crate::utils::own_text;
use scraper::Html;

/// Extracts the visible paragraphs of a chapter as `<p>` markup, one per line.
pub fn parse_chapter(doc: &Html) -> String {
    let mut chapter_text = String::new();

    for container in doc.select(&SELECTORS.chapter_content) {
        for paragraph in container.select(&SELECTORS.visible_paragraph) {
            let text = own_text(paragraph);
            if !text.is_empty() {
                chapter_text.push_str(&format!("<p>{text}</p>\n"));
            }
        }
    }

    chapter_text.trim().to_string()
}
