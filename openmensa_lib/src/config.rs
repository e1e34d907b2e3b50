//! Environment-driven client configuration.

use std::time::Duration;

use openmensa_api::{Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use crate::error::MensaError;
use crate::validation::validate_page_size;

pub const ENV_BASE_URL: &str = "OPENMENSA_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "OPENMENSA_TIMEOUT_SECS";
pub const ENV_PAGE_SIZE: &str = "OPENMENSA_PAGE_SIZE";

/// Settings used to build the API client and shape listing requests.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// `limit` sent with each canteen page request. `None` keeps the server default.
    pub page_size: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            page_size: None,
        }
    }
}

impl ClientConfig {
    /// Reads `OPENMENSA_*` variables. Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let base_url = lookup(ENV_BASE_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);
        let timeout = lookup(ENV_TIMEOUT_SECS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let page_size = lookup(ENV_PAGE_SIZE)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .and_then(|n| validate_page_size(n).ok());
        Self {
            base_url,
            timeout,
            page_size,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, MensaError> {
        self.page_size = Some(validate_page_size(page_size)?);
        Ok(self)
    }

    /// Builds the HTTP client described by this configuration.
    pub fn build_client(&self) -> Result<Client, MensaError> {
        if url::Url::parse(&self.base_url).is_err() {
            return Err(MensaError::Config(format!(
                "invalid base URL '{}'",
                self.base_url
            )));
        }
        Ok(Client::with_options(&self.base_url, self.timeout)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, ClientConfig::default());
        assert_eq!(cfg.base_url, "https://openmensa.org/api/v2");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_all_variables() {
        let cfg = ClientConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://localhost:9000"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_PAGE_SIZE, "50"),
        ]));
        assert_eq!(cfg.base_url, "http://localhost:9000");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.page_size, Some(50));
    }

    #[test]
    fn unparseable_values_fall_back() {
        let cfg = ClientConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "   "),
            (ENV_TIMEOUT_SECS, "soon"),
            (ENV_PAGE_SIZE, "0"),
        ]));
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn page_size_override_is_validated() {
        assert!(ClientConfig::default().with_page_size(0).is_err());
        let cfg = ClientConfig::default().with_page_size(20).unwrap();
        assert_eq!(cfg.page_size, Some(20));
    }

    #[test]
    fn build_client_rejects_bad_url() {
        let err = ClientConfig::default()
            .with_base_url("not a url")
            .build_client()
            .unwrap_err();
        assert!(matches!(err, MensaError::Config(_)));
    }

    #[test]
    fn build_client_uses_base_url() {
        let client = ClientConfig::default()
            .with_base_url("http://127.0.0.1:1234/api/v2")
            .build_client()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:1234/api/v2");
    }
}
