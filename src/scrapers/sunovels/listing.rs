//! Catalog, filter and search result pages.

use super::cover::AssetPool;
use super::selectors::SELECTORS;
use crate::config::SiteConfig;
use crate::scrapers::NovelSummary;
use crate::utils::{element_text, relative_href};
use scraper::Html;

/// Extracts every listed novel in document order.
///
/// Each anchor inside a `.list-item` is one entry; the running anchor index
/// picks the entry's cover from the page's asset pool.
pub fn parse_novels(doc: &Html, site: &SiteConfig) -> Vec<NovelSummary> {
    let pool = AssetPool::from_document(doc);

    doc.select(&SELECTORS.list_item)
        .flat_map(|item| item.select(&SELECTORS.anchor))
        .enumerate()
        .map(|(index, anchor)| {
            let img_src = anchor
                .select(&SELECTORS.image)
                .next()
                .and_then(|img| img.value().attr("src"));

            NovelSummary {
                name: element_text(anchor, &SELECTORS.list_title),
                cover: pool.cover_for(index, img_src, site),
                path: relative_href(anchor),
            }
        })
        .collect()
}
