//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::seo::{DEFAULT_SITE_NAME, SiteMeta};

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("SITE_URL must be an absolute http(s) origin, got `{0}`")]
    InvalidSiteUrl(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Public origin used for canonical and Open Graph URLs
    /// Example: https://samplinglabs.ai
    pub site_url: Option<String>,

    /// Brand name shown in titles and structured data
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("SITE_URL").ok(),
            std::env::var("SITE_NAME").ok(),
        )
    }

    /// Build and validate a config from raw values
    pub fn from_values(
        site_url: Option<String>,
        site_name: Option<String>,
    ) -> Result<Self, ConfigError> {
        let site_url = match site_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Some(normalize_site_url(&url)?),
            None => None,
        };
        let site_name = site_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string());

        Ok(Self {
            site_url,
            site_name,
        })
    }

    /// Check if an absolute site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Metadata handed to the rendered app
    pub fn site_meta(&self) -> SiteMeta {
        SiteMeta {
            base_url: self.site_url.clone(),
            site_name: self.site_name.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: None,
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }
}

fn normalize_site_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidSiteUrl(raw.to_string()))?;
    if host.is_empty() || host.contains('/') {
        return Err(ConfigError::InvalidSiteUrl(raw.to_string()));
    }
    Ok(url.to_string())
}
