//! Client configuration.

use std::time::Duration;

use tracing::warn;

/// Environment variable naming the backend base URL.
pub const ENV_BASE_URL: &str = "BOOKSTALL_API_URL";

/// Development default, matching the backend's local setup.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default per-request timeout. A call that never resolves would otherwise
/// leave its caller pending indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the backend API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL up to and including the API prefix, without a trailing
    /// slash (e.g. `https://shop.example.com/api`).
    pub base_url: String,
    /// Applied to every request.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Read the base URL from `BOOKSTALL_API_URL`, warning and falling back
    /// to the local development default when unset.
    pub fn from_env() -> Self {
        let base_url = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| {
            warn!("{ENV_BASE_URL} not set; using local dev default");
            DEFAULT_BASE_URL.to_string()
        });
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_compose() {
        let config = ApiConfig::with_base_url("https://shop.example.com/api")
            .timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "https://shop.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
