//! Request URLs for listing, search, detail and chapter index pages.

use crate::error::ScraperError;
use crate::scrapers::FilterSelection;
use serde::Serialize;
use url::Url;

/// Status picker options: `(label, query value)`.
const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("جميع الروايات", ""),
    ("مكتمل", "Completed"),
    ("جديد", "New"),
    ("مستمر", "Ongoing"),
];

/// Converts a one-based page into the zero-based `page` query value.
fn zero_based(page: u32) -> u32 {
    page.saturating_sub(1)
}

/// Builds the catalog URL for a listing page.
///
/// Categories are repeated in selection order, an empty status is omitted,
/// and values are passed through as given.
pub fn listing_url(site: &str, page: u32, filters: Option<&FilterSelection>) -> String {
    let mut link = format!("{site}library?");

    if let Some(filters) = filters {
        for category in &filters.categories {
            link.push_str("&category=");
            link.push_str(category);
        }
        if !filters.status.is_empty() {
            link.push_str("&status=");
            link.push_str(&filters.status);
        }
    }

    link.push_str(&format!("&page={}", zero_based(page)));
    link
}

/// Builds the search URL. The page is sent as given and the term verbatim.
pub fn search_url(site: &str, term: &str, page: u32) -> String {
    format!("{site}search?page={page}&title={term}")
}

/// Resolves a novel or chapter path against the site root.
pub fn detail_url(site: &str, path: &str) -> Result<String, ScraperError> {
    let base = Url::parse(site).map_err(|e| ScraperError::InvalidUrl(format!("{site}: {e}")))?;
    base.join(path)
        .map(|url| url.to_string())
        .map_err(|e| ScraperError::InvalidUrl(format!("{path}: {e}")))
}

/// Builds the URL of one page (one-based) of a novel's chapter index.
pub fn chapter_page_url(site: &str, path: &str, page: u32) -> String {
    format!(
        "{site}{path}?activeTab=chapters&page={}",
        zero_based(page)
    )
}

/// One selectable option of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

/// How a filter is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterKind {
    CheckboxGroup,
    Picker,
}

/// A single filter input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub label: String,
    pub kind: FilterKind,
    pub options: Vec<FilterOption>,
}

/// The filters offered on the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSchema {
    pub categories: Filter,
    pub status: Filter,
}

impl FilterSchema {
    /// Builds the schema with host-supplied category options.
    pub fn new(categories: Vec<FilterOption>) -> Self {
        Self {
            categories: Filter {
                label: "التصنيفات".to_string(),
                kind: FilterKind::CheckboxGroup,
                options: categories,
            },
            status: Filter {
                label: "الحالة".to_string(),
                kind: FilterKind::Picker,
                options: STATUS_OPTIONS
                    .iter()
                    .map(|(label, value)| FilterOption {
                        label: label.to_string(),
                        value: value.to_string(),
                    })
                    .collect(),
            },
        }
    }
}

impl Default for FilterSchema {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
