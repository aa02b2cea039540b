use reqwest::Url;

use crate::error::{Error, Result};

/// Environment variable holding the events service base URL.
pub const BACKEND_URL_VAR: &str = "HACKSCOPE_BACKEND_URL";

/// Runtime settings for talking to the events service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend_url: String,
}

impl Config {
    /// Build a config from an explicit base URL, checking that it parses.
    pub fn new(backend_url: impl Into<String>) -> Result<Self> {
        let backend_url = backend_url.into();
        let trimmed = backend_url.trim();
        if trimmed.is_empty() {
            return Err(Error::Config(format!("{BACKEND_URL_VAR} is empty")));
        }
        Url::parse(trimmed).map_err(|e| Error::InvalidUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            backend_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Read the base URL from the process environment, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let url = std::env::var(BACKEND_URL_VAR)
            .map_err(|_| Error::Config(format!("{BACKEND_URL_VAR} is not set")))?;
        Self::new(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = Config::new(" https://api.example.com/v1/ ").unwrap();
        assert_eq!(config.backend_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_new_rejects_empty_and_invalid() {
        assert!(matches!(Config::new(""), Err(Error::Config(_))));
        assert!(matches!(
            Config::new("://missing-scheme"),
            Err(Error::InvalidUrl { .. })
        ));
    }
}
