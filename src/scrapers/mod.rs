//! Source trait, fetch collaborator and common record types.
//!
//! Extraction itself is synchronous and pure; everything async in this crate
//! goes through the [`Fetch`] trait so the extractors can be driven from
//! in-memory HTML as easily as from the network.

pub mod sunovels;

pub use sunovels::SunovelsScraper;

use crate::config::ScrapingConfig;
use crate::error::ScraperError;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::time::Duration;
use tracing::debug;

/// A novel as it appears on a listing or search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NovelSummary {
    /// Display title.
    pub name: String,

    /// Absolute cover URL.
    pub cover: String,

    /// Path relative to the site root.
    pub path: String,
}

/// Canonical publication status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NovelStatus {
    Ongoing,
    Completed,
    Unknown,
}

impl NovelStatus {
    /// Returns the canonical label.
    pub fn as_str(self) -> &'static str {
        match self {
            NovelStatus::Ongoing => "Ongoing",
            NovelStatus::Completed => "Completed",
            NovelStatus::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for NovelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full metadata of a single novel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelDetail {
    pub path: String,
    pub name: String,
    pub author: String,
    pub summary: String,
    pub cover: String,

    /// Status words followed by category tags, comma separated.
    pub genres: String,

    pub status: NovelStatus,

    /// Number of chapter index pages, never below 1.
    pub total_pages: u32,
}

/// Chapter number as printed on the index.
///
/// `Unknown` is kept apart from `Number(0)`; on the wire it becomes the empty
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChapterNumber {
    Number(u32),
    #[default]
    Unknown,
}

impl ChapterNumber {
    /// Returns the number if one was printed.
    pub fn get(self) -> Option<u32> {
        match self {
            ChapterNumber::Number(n) => Some(n),
            ChapterNumber::Unknown => None,
        }
    }
}

impl From<Option<u32>> for ChapterNumber {
    fn from(value: Option<u32>) -> Self {
        value.map_or(ChapterNumber::Unknown, ChapterNumber::Number)
    }
}

impl Serialize for ChapterNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChapterNumber::Number(n) => serializer.serialize_u32(*n),
            ChapterNumber::Unknown => serializer.serialize_str(""),
        }
    }
}

/// A chapter link exactly as scraped from the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    pub chapter_name: String,
    pub chapter_url: String,
    pub release_time: Option<DateTime<Utc>>,
    pub chapter_number: ChapterNumber,
}

/// A chapter ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterItem {
    pub name: String,

    /// Path relative to the site root.
    pub path: String,

    /// ISO-8601 timestamp with millisecond precision, if the page had one.
    pub release_time: Option<String>,

    pub chapter_number: ChapterNumber,
}

impl From<ChapterEntry> for ChapterItem {
    fn from(entry: ChapterEntry) -> Self {
        Self {
            name: entry.chapter_name,
            path: entry.chapter_url,
            release_time: entry
                .release_time
                .map(|time| time.to_rfc3339_opts(SecondsFormat::Millis, true)),
            chapter_number: entry.chapter_number,
        }
    }
}

/// Filter values picked by the user for a listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Category values, in selection order.
    pub categories: Vec<String>,

    /// Status value; empty means "all".
    pub status: String,
}

/// Fetches raw page bodies.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Downloads `url` and returns the response body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, ScraperError>;
}

/// Trait for web novel sources.
///
/// Each call performs one fetch and one extraction pass; nothing is cached
/// between calls.
#[async_trait]
pub trait NovelSource: Send + Sync {
    /// Returns the identifier used by hosts (lowercase, no spaces).
    fn id(&self) -> &'static str;

    /// Returns the human-readable name of this source.
    fn name(&self) -> &'static str;

    /// Returns the source version.
    fn version(&self) -> &'static str;

    /// Returns the base URL every relative path is resolved against.
    fn site(&self) -> &str;

    /// Checks if this source can handle the given URL.
    fn can_handle(&self, url: &str) -> bool;

    /// Fetches one page of the catalog, optionally filtered.
    async fn popular_novels(
        &self,
        page: u32,
        filters: Option<&FilterSelection>,
    ) -> Result<Vec<NovelSummary>, ScraperError>;

    /// Fetches the metadata of the novel at `path`.
    async fn novel_detail(&self, path: &str) -> Result<NovelDetail, ScraperError>;

    /// Fetches one page (one-based) of a novel's chapter index.
    async fn chapter_page(&self, path: &str, page: u32) -> Result<Vec<ChapterItem>, ScraperError>;

    /// Downloads the text of a single chapter as paragraph markup.
    async fn chapter_content(&self, path: &str) -> Result<String, ScraperError>;

    /// Searches novels by title.
    async fn search_novels(&self, term: &str, page: u32)
    -> Result<Vec<NovelSummary>, ScraperError>;
}

/// Plain HTTP implementation of [`Fetch`].
pub struct HttpFetcher {
    client: reqwest::Client,
    config: ScrapingConfig,
}

impl HttpFetcher {
    /// Creates a fetcher with the given configuration.
    pub fn new(config: ScrapingConfig) -> Result<Self, ScraperError> {
        let client =
            create_http_client(&config).map_err(|e| ScraperError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ScraperError> {
        rate_limit(self.config.delay_between_requests_sec).await;
        debug!(%url, "fetching page");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!(%url, status = status.as_u16(), "non-success response");
            return Err(ScraperError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Common HTTP client configuration for scrapers.
pub fn create_http_client(config: &ScrapingConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_sec))
        .build()
}

/// Applies rate limiting delay.
pub async fn rate_limit(delay_sec: f64) {
    if delay_sec > 0.0 {
        tokio::time::sleep(Duration::from_secs_f64(delay_sec)).await;
    }
}
