//! CSS selectors used for parsing Sunovels pages.

use scraper::Selector;
use std::sync::LazyLock;

/// Compiled once, shared by every extractor.
pub(crate) static SELECTORS: LazyLock<Selectors> = LazyLock::new(Selectors::new);

pub(crate) struct Selectors {
    /// Listing entry container.
    pub list_item: Selector,
    /// Any link.
    pub anchor: Selector,
    /// Any image.
    pub image: Selector,
    /// Novel title inside a listing entry.
    pub list_title: Selector,

    /// Detail page title.
    pub detail_title: Selector,
    /// Detail page author.
    pub author: Selector,
    /// Detail page synopsis paragraphs.
    pub summary: Selector,
    /// Category tags.
    pub category_tag: Selector,
    /// Statistic cells in the detail header (chapter count first, status fourth).
    pub header_stat: Selector,
    /// Emphasized words inside a statistic cell.
    pub strong: Selector,
    /// Detail page cover image.
    pub detail_cover: Selector,

    /// Chapter links on an index page.
    pub chapter_link: Selector,
    /// Release time inside a chapter link.
    pub chapter_time: Selector,
    /// Printed chapter title holding the number.
    pub chapter_title: Selector,
    /// Highlighted pagination entry.
    pub active_page: Selector,

    /// Chapter text container.
    pub chapter_content: Selector,
    /// Visible paragraphs inside the chapter text.
    pub visible_paragraph: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            list_item: Selector::parse(".list-item").unwrap(),
            anchor: Selector::parse("a").unwrap(),
            image: Selector::parse("img").unwrap(),
            list_title: Selector::parse("h4").unwrap(),

            detail_title: Selector::parse("div.main-head h3").unwrap(),
            author: Selector::parse(".novel-author").unwrap(),
            summary: Selector::parse("section.info-section div.description p").unwrap(),
            category_tag: Selector::parse("div.categories li.tag").unwrap(),
            header_stat: Selector::parse("div.header-stats span").unwrap(),
            strong: Selector::parse("strong").unwrap(),
            detail_cover: Selector::parse("div.img-container figure.cover img").unwrap(),

            chapter_link: Selector::parse("ul.chaptersList a").unwrap(),
            chapter_time: Selector::parse("time.chapter-update").unwrap(),
            chapter_title: Selector::parse("strong.chapter-title").unwrap(),
            active_page: Selector::parse("ul.pagination a.active").unwrap(),

            chapter_content: Selector::parse("div.chapter-content").unwrap(),
            // `d-none` paragraphs are hidden on the site and not part of the text.
            visible_paragraph: Selector::parse("p:not(.d-none)").unwrap(),
        }
    }
}
