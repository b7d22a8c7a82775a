//! Sunovels - structured data extraction for the sunovels.com web novel site.
//!
//! This library provides functionality for:
//! - Building catalog, filter and search URLs for the site
//! - Extracting novel listings, novel metadata, chapter indices and chapter text
//!   from fetched HTML pages
//! - Normalizing the site's status vocabulary, cover URLs and localized digits

pub mod config;
pub mod error;
pub mod scrapers;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, SiteConfig};
pub use error::{ConfigError, ScraperError};
pub use scrapers::sunovels::query::FilterSchema;
pub use scrapers::{
    ChapterEntry, ChapterItem, ChapterNumber, Fetch, FilterSelection, HttpFetcher, NovelDetail,
    NovelSource, NovelStatus, NovelSummary, SunovelsScraper,
};
