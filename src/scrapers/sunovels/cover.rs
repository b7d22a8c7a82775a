//! Cover image recovery.
//!
//! Listing pages render covers client-side, so the real image paths only
//! appear inside inline scripts. They are collected once per page into an
//! [`AssetPool`] and handed out positionally, one per listed novel.

use crate::config::SiteConfig;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Upload paths embedded in script text.
static ASSET_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"/uploads/[^"']+"#).unwrap());

static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script").unwrap());

/// Ordered image paths found in a page's inline scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetPool {
    paths: Vec<String>,
}

impl AssetPool {
    /// Scans every `<script>` in the document, keeping matches in first-seen order.
    pub fn from_document(doc: &Html) -> Self {
        let paths = doc
            .select(&SCRIPT_SELECTOR)
            .flat_map(|script| {
                let text = script.text().collect::<String>();
                ASSET_PATH_REGEX
                    .find_iter(&text)
                    .map(|m| m.as_str().to_string())
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Cover of the `index`-th listed novel (zero-based).
    ///
    /// When the pool is empty, or shorter than the listing, the entry's own
    /// image source is used instead.
    pub fn cover_for(&self, index: usize, img_src: Option<&str>, site: &SiteConfig) -> String {
        match self.paths.get(index) {
            Some(path) => site.absolute(path),
            None => resolve_src(img_src, site),
        }
    }
}

/// Resolves an `<img src>` against the site, or yields the default cover.
pub fn resolve_src(src: Option<&str>, site: &SiteConfig) -> String {
    match src.map(str::trim).filter(|s| !s.is_empty()) {
        Some(src) if src.starts_with("http://") || src.starts_with("https://") => src.to_string(),
        Some(src) => site.absolute(src),
        None => site.default_cover.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_collects_in_order_across_scripts() {
        let doc = Html::parse_document(
            r#"<html><head>
            <script>var a = {"img":"/uploads/a.jpg","img2":"/uploads/b.png"};</script>
            </head><body>
            <script>load('/uploads/c.webp');</script>
            <script>nothing here</script>
            </body></html>"#,
        );

        let pool = AssetPool::from_document(&doc);
        assert_eq!(pool.len(), 3);
        assert_eq!(
            pool.paths,
            vec!["/uploads/a.jpg", "/uploads/b.png", "/uploads/c.webp"]
        );
    }

    #[test]
    fn test_cover_for_uses_pool_position() {
        let site = SiteConfig::default();
        let pool = AssetPool {
            paths: vec!["/uploads/a.jpg".to_string(), "/uploads/b.jpg".to_string()],
        };

        assert_eq!(
            pool.cover_for(1, Some("/ignored.jpg"), &site),
            "https://sunovels.com/uploads/b.jpg"
        );
    }

    #[test]
    fn test_cover_for_falls_back_past_pool_end() {
        let site = SiteConfig::default();
        let pool = AssetPool {
            paths: vec!["/uploads/a.jpg".to_string()],
        };

        assert_eq!(
            pool.cover_for(1, Some("/img/x.jpg"), &site),
            "https://sunovels.com/img/x.jpg"
        );
        assert_eq!(pool.cover_for(2, None, &site), site.default_cover);
    }

    #[test]
    fn test_resolve_src() {
        let site = SiteConfig::default();
        assert_eq!(
            resolve_src(Some("/covers/1.jpg"), &site),
            "https://sunovels.com/covers/1.jpg"
        );
        assert_eq!(
            resolve_src(Some("https://cdn.example.com/1.jpg"), &site),
            "https://cdn.example.com/1.jpg"
        );
        assert_eq!(resolve_src(Some("  "), &site), site.default_cover);
        assert_eq!(resolve_src(None, &site), site.default_cover);
    }
}
