//! Deployment-time configuration of the backend origin.
//!
//! The origin is baked in at build time from `BLOG_BASE_URL`. A missing or
//! malformed value is fatal at startup: `hydrate` refuses to mount the
//! routes and shows the configuration error instead.

use thiserror::Error;

use super::media;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("BLOG_BASE_URL is not set; rebuild with the backend origin configured")]
    MissingBaseUrl,
    #[error("BLOG_BASE_URL must be an http(s) origin, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Backend origin plus the roots derived from it.
///
/// Built once in `hydrate` and shared through the Leptos context; nothing
/// else reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalize an origin. Trailing slashes are dropped so that
    /// `{base}{endpoint}` never produces `//`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match host {
            Some(host) if !host.is_empty() && !host.chars().any(char::is_whitespace) => Ok(Self {
                base_url: trimmed.to_string(),
            }),
            _ => Err(ConfigError::InvalidBaseUrl(base_url.to_string())),
        }
    }

    /// Configuration baked in at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("BLOG_BASE_URL") {
            Some(value) => Self::new(value),
            None => Err(ConfigError::MissingBaseUrl),
        }
    }

    /// Media root, e.g. `https://blog.example.com`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API root, e.g. `https://blog.example.com/api`.
    pub fn api_root(&self) -> String {
        format!("{}/api", self.base_url)
    }

    /// Absolute URL for an endpoint such as `/posts/`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/api{}", self.base_url, endpoint)
    }

    /// Absolute URL for a media reference; see [`media::resolve_media_url`].
    pub fn media_url(&self, reference: Option<&str>) -> String {
        media::resolve_media_url(&self.base_url, reference)
    }

    /// The canonical fallback image.
    pub fn placeholder_image_url(&self) -> String {
        media::placeholder_url(&self.base_url)
    }
}
