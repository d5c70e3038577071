use std::time::Duration;

use crate::error::{ApiError, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_LANGUAGE: &str = "ja";

/// Connection settings for the ShigaChat backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
    /// Language code the backend should answer in, passed through opaquely.
    pub language: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }
}

pub struct ApiConfigBuilder {
    base_url: Option<String>,
    bearer_token: Option<String>,
    language: String,
    timeout: Duration,
}

impl ApiConfigBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            bearer_token: None,
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ApiConfig> {
        let base_url = self
            .base_url
            .ok_or_else(|| ApiError::Config("base_url is required".to_string()))?;

        Ok(ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: self.bearer_token,
            language: self.language,
            timeout: self.timeout,
        })
    }
}

impl Default for ApiConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_required() {
        assert!(ApiConfig::builder().build().is_err());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::builder()
            .base_url("https://chat.example.org/api/")
            .build()
            .unwrap();
        assert_eq!(config.base_url, "https://chat.example.org/api");
        assert_eq!(config.language, "ja");
    }
}
