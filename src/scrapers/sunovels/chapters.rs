//! Chapter index pages.

use super::selectors::SELECTORS;
use crate::scrapers::{ChapterEntry, ChapterItem, ChapterNumber};
use crate::utils::{document_text, relative_href};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use scraper::{ElementRef, Html};

/// Extracts the chapters of one index page, in document order.
pub fn parse_chapter_page(doc: &Html) -> Vec<ChapterItem> {
    parse_chapter_entries(doc)
        .into_iter()
        .map(ChapterItem::from)
        .collect()
}

/// Raw chapter links of one index page.
pub fn parse_chapter_entries(doc: &Html) -> Vec<ChapterEntry> {
    doc.select(&SELECTORS.chapter_link)
        .map(parse_entry)
        .collect()
}

fn parse_entry(link: ElementRef<'_>) -> ChapterEntry {
    let release_time = link
        .select(&SELECTORS.chapter_time)
        .next()
        .and_then(|time| time.value().attr("datetime"))
        .and_then(parse_release_time);

    let title = link
        .select(&SELECTORS.chapter_title)
        .flat_map(|title| title.text())
        .collect::<String>();

    ChapterEntry {
        chapter_name: link.value().attr("title").unwrap_or_default().to_string(),
        chapter_url: relative_href(link),
        release_time,
        chapter_number: parse_chapter_number(&title),
    }
}

/// Page label highlighted in the index pagination, if any.
pub fn active_page(doc: &Html) -> Option<u32> {
    document_text(doc, &SELECTORS.active_page).parse().ok()
}

/// Parses a `datetime` attribute.
///
/// Offsets are honored; timestamps and dates without one are taken as UTC.
pub fn parse_release_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(time) = NaiveDateTime::parse_from_str(value, format) {
            return Some(time.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|time| time.and_utc())
}

/// Reads the chapter number from a printed title.
///
/// ASCII and Arabic-Indic digits are kept, everything else is dropped. No
/// digits at all gives `Unknown`, never zero.
pub fn parse_chapter_number(text: &str) -> ChapterNumber {
    let digits: String = text.chars().filter_map(ascii_digit).collect();
    ChapterNumber::from(digits.parse::<u32>().ok())
}

/// Maps an ASCII or Arabic-Indic digit to its ASCII form.
fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '٠'..='٩' => char::from_digit(c as u32 - '٠' as u32, 10),
        _ => None,
    }
}
