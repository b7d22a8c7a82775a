//! Configuration management for the Sunovels scraper.
//!
//! Handles loading, saving, and validating configuration from
//! platform-specific config directories.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Application name used for config directory.
const APP_NAME: &str = "Sunovels";

/// Default config filename.
const CONFIG_FILENAME: &str = "config.toml";

/// Site root every relative path is resolved against.
pub const DEFAULT_BASE_URL: &str = "https://sunovels.com/";

/// Placeholder shown when a novel has no recoverable cover.
pub const DEFAULT_COVER: &str =
    "https://github.com/LNReader/lnreader-plugins/blob/master/public/static/coverNotAvailable.webp?raw=true";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source site settings.
    pub site: SiteConfig,

    /// Web scraping settings.
    pub scraping: ScrapingConfig,
}

/// Source site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the site, with a trailing slash.
    pub base_url: String,

    /// Cover URL used when neither the asset pool nor the page has one.
    pub default_cover: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_cover: DEFAULT_COVER.to_string(),
        }
    }
}

impl SiteConfig {
    /// Joins a site-relative path onto the base URL, dropping one leading slash.
    pub fn absolute(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}{}", self.base_url, path)
    }
}

/// Web scraping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapingConfig {
    /// Delay before each web request in seconds.
    pub delay_between_requests_sec: f64,

    /// Request timeout in seconds.
    pub timeout_sec: u64,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Enable scraper debug logging.
    pub debug: bool,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            delay_between_requests_sec: 0.5,
            timeout_sec: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Returns the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    /// Loads configuration from the default location.
    ///
    /// If the config file doesn't exist, creates a default one.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Saves configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Saves configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = Url::parse(&self.site.base_url)
            .map_err(|e| ConfigError::invalid("site.base_url", e.to_string()))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "site.base_url",
                "must be an http or https URL",
            ));
        }

        // Paths are appended by concatenation, so the root must end in '/'.
        if !self.site.base_url.ends_with('/') {
            return Err(ConfigError::invalid(
                "site.base_url",
                "must end with '/'",
            ));
        }

        if self.site.default_cover.trim().is_empty() {
            return Err(ConfigError::invalid("site.default_cover", "must not be empty"));
        }

        if self.scraping.timeout_sec == 0 {
            return Err(ConfigError::invalid(
                "scraping.timeout_sec",
                "must be greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.base_url, "https://sunovels.com/");
        assert_eq!(config.scraping.timeout_sec, 30);
        assert!(!config.scraping.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.site.default_cover = "https://example.com/none.png".to_string();
        let file = NamedTempFile::new().unwrap();

        config.save_to(file.path()).unwrap();

        let loaded = Config::load_from(file.path()).unwrap();
        assert_eq!(loaded.site, config.site);
        assert_eq!(loaded.scraping.user_agent, config.scraping.user_agent);
    }

    #[test]
    fn test_missing_file_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[scraping]\ndebug = true\n").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(config.scraping.debug);
        assert_eq!(config.site.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.site.base_url = "https://sunovels.com".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.site.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.site.default_cover = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.scraping.timeout_sec = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_site_absolute() {
        let site = SiteConfig::default();
        assert_eq!(
            site.absolute("/uploads/cover.jpg"),
            "https://sunovels.com/uploads/cover.jpg"
        );
        assert_eq!(site.absolute("novel/1"), "https://sunovels.com/novel/1");
    }
}
