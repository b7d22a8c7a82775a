//! Sunovels (sunovels.com) scraper implementation.
//!
//! Arabic web novel site. Listing, detail, chapter index and chapter pages
//! are plain server-rendered HTML, except listing covers which only appear
//! in inline scripts (see [`cover`]).

pub mod chapters;
pub mod content;
pub mod cover;
pub mod detail;
pub mod listing;
pub mod query;
mod selectors;
pub mod status;

use super::{
    ChapterItem, Fetch, FilterSelection, HttpFetcher, NovelDetail, NovelSource, NovelSummary,
};
use crate::config::{Config, SiteConfig};
use crate::error::ScraperError;
use async_trait::async_trait;
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;
use tracing::debug;

/// Compiled regex pattern for Sunovels URLs.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(www\.)?sunovels\.com(/|$)").unwrap());

/// Sunovels scraper, generic over the fetch collaborator.
pub struct SunovelsScraper<F: Fetch = HttpFetcher> {
    fetcher: F,
    site: SiteConfig,
}

impl SunovelsScraper<HttpFetcher> {
    /// Creates a scraper that fetches over HTTP.
    pub fn new(config: &Config) -> Result<Self, ScraperError> {
        let fetcher = HttpFetcher::new(config.scraping.clone())?;
        Ok(Self::with_fetcher(config.site.clone(), fetcher))
    }
}

impl<F: Fetch> SunovelsScraper<F> {
    /// Creates a scraper over any fetch implementation.
    pub fn with_fetcher(site: SiteConfig, fetcher: F) -> Self {
        Self { fetcher, site }
    }

    /// Fetches `url` and parses the body.
    async fn fetch_page(&self, url: &str) -> Result<Html, ScraperError> {
        let body = self.fetcher.fetch_text(url).await?;
        Ok(Html::parse_document(&body))
    }

    async fn fetch_listing(&self, url: &str) -> Result<Vec<NovelSummary>, ScraperError> {
        let doc = self.fetch_page(url).await?;
        let novels = listing::parse_novels(&doc, &self.site);
        debug!(%url, count = novels.len(), "parsed listing");
        Ok(novels)
    }
}

#[async_trait]
impl<F: Fetch> NovelSource for SunovelsScraper<F> {
    fn id(&self) -> &'static str {
        "sunovels"
    }

    fn name(&self) -> &'static str {
        "Sunovels"
    }

    fn version(&self) -> &'static str {
        "1.0.0"
    }

    fn site(&self) -> &str {
        &self.site.base_url
    }

    fn can_handle(&self, url: &str) -> bool {
        URL_PATTERN.is_match(url) || url.starts_with(self.site.base_url.as_str())
    }

    async fn popular_novels(
        &self,
        page: u32,
        filters: Option<&FilterSelection>,
    ) -> Result<Vec<NovelSummary>, ScraperError> {
        let url = query::listing_url(&self.site.base_url, page, filters);
        self.fetch_listing(&url).await
    }

    async fn novel_detail(&self, path: &str) -> Result<NovelDetail, ScraperError> {
        let url = query::detail_url(&self.site.base_url, path)?;
        let doc = self.fetch_page(&url).await?;
        let novel = detail::parse_novel(&doc, path, &self.site);
        debug!(%url, total_pages = novel.total_pages, status = %novel.status, "parsed novel");
        Ok(novel)
    }

    async fn chapter_page(&self, path: &str, page: u32) -> Result<Vec<ChapterItem>, ScraperError> {
        let url = query::chapter_page_url(&self.site.base_url, path, page);
        let doc = self.fetch_page(&url).await?;
        let items = chapters::parse_chapter_page(&doc);
        debug!(
            %url,
            count = items.len(),
            active_page = ?chapters::active_page(&doc),
            "parsed chapter index"
        );
        Ok(items)
    }

    async fn chapter_content(&self, path: &str) -> Result<String, ScraperError> {
        let url = query::detail_url(&self.site.base_url, path)?;
        let doc = self.fetch_page(&url).await?;
        Ok(content::parse_chapter(&doc))
    }

    async fn search_novels(
        &self,
        term: &str,
        page: u32,
    ) -> Result<Vec<NovelSummary>, ScraperError> {
        let url = query::search_url(&self.site.base_url, term, page);
        self.fetch_listing(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::{ChapterNumber, NovelStatus};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned pages and records every requested URL.
    #[derive(Default)]
    struct FakeFetcher {
        pages: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        fn with_page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
    }

    #[async_trait]
    impl Fetch for FakeFetcher {
        async fn fetch_text(&self, url: &str) -> Result<String, ScraperError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| ScraperError::Status {
                    status: 404,
                    url: url.to_string(),
                })
        }
    }

    fn scraper(fetcher: FakeFetcher) -> SunovelsScraper<FakeFetcher> {
        SunovelsScraper::with_fetcher(SiteConfig::default(), fetcher)
    }

    const LISTING: &str = r#"<div class="list-item">
        <a href="/novel/1"><h4>One</h4></a></div>
        <script>x = "/uploads/1.jpg"</script>"#;

    #[test]
    fn test_url_patterns() {
        let scraper = scraper(FakeFetcher::default());

        assert!(scraper.can_handle("https://sunovels.com/novel/1"));
        assert!(scraper.can_handle("https://www.sunovels.com/"));
        assert!(scraper.can_handle("http://sunovels.com"));

        assert!(!scraper.can_handle("https://sunovels.com.evil.net/"));
        assert!(!scraper.can_handle("https://kakuyomu.jp/works/1"));
    }

    #[test]
    fn test_identity() {
        let scraper = scraper(FakeFetcher::default());
        assert_eq!(scraper.id(), "sunovels");
        assert_eq!(scraper.name(), "Sunovels");
        assert_eq!(scraper.site(), "https://sunovels.com/");
    }

    #[tokio::test]
    async fn test_popular_novels_requests_filtered_listing() {
        let url = "https://sunovels.com/library?&category=action&status=New&page=1";
        let scraper = scraper(FakeFetcher::default().with_page(url, LISTING));
        let filters = FilterSelection {
            categories: vec!["action".to_string()],
            status: "New".to_string(),
        };

        let novels = scraper.popular_novels(2, Some(&filters)).await.unwrap();

        assert_eq!(novels.len(), 1);
        assert_eq!(novels[0].cover, "https://sunovels.com/uploads/1.jpg");
        assert_eq!(*scraper.fetcher.requested.lock().unwrap(), vec![url]);
    }

    #[tokio::test]
    async fn test_search_novels() {
        let url = "https://sunovels.com/search?page=1&title=One";
        let scraper = scraper(FakeFetcher::default().with_page(url, LISTING));

        let novels = scraper.search_novels("One", 1).await.unwrap();
        assert_eq!(novels[0].name, "One");
        assert_eq!(novels[0].path, "novel/1");
    }

    #[tokio::test]
    async fn test_novel_detail_resolves_path() {
        let html = r#"<div class="main-head"><h3>Title</h3></div>
            <div class="header-stats"><span>75 فصل</span><span></span><span></span>
            <span><strong>مكتمل</strong></span></div>"#;
        let scraper = scraper(
            FakeFetcher::default().with_page("https://sunovels.com/novel/42", html),
        );

        let novel = scraper.novel_detail("novel/42").await.unwrap();
        assert_eq!(novel.path, "novel/42");
        assert_eq!(novel.name, "Title");
        assert_eq!(novel.status, NovelStatus::Completed);
        assert_eq!(novel.total_pages, 2);
    }

    #[tokio::test]
    async fn test_chapter_page_uses_zero_based_page() {
        let html = r#"<ul class="chaptersList"><a href="/novel/42/51" title="51">
            <strong class="chapter-title">الفصل ٥١</strong></a></ul>"#;
        let url = "https://sunovels.com/novel/42?activeTab=chapters&page=1";
        let scraper = scraper(FakeFetcher::default().with_page(url, html));

        let chapters = scraper.chapter_page("novel/42", 2).await.unwrap();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].path, "novel/42/51");
        assert_eq!(chapters[0].chapter_number, ChapterNumber::Number(51));
    }

    #[tokio::test]
    async fn test_chapter_content() {
        let html = r#"<div class="chapter-content"><p>نص</p></div>"#;
        let scraper = scraper(
            FakeFetcher::default().with_page("https://sunovels.com/novel/42/1", html),
        );

        let text = scraper.chapter_content("novel/42/1").await.unwrap();
        assert_eq!(text, "<p>نص</p>");
    }

    #[tokio::test]
    async fn test_transport_errors_propagate() {
        let scraper = scraper(FakeFetcher::default());

        let err = scraper.chapter_content("missing").await.unwrap_err();
        assert!(matches!(err, ScraperError::Status { status: 404, .. }));
    }
}
