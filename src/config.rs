// src/config.rs
use crate::error::{PayoffError, PayoffResult};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable overriding [`ApiConfig::base_url`]
pub const BASE_URL_ENV: &str = "API_BASE_URL";
/// Environment variable overriding [`ApiConfig::timeout`], in milliseconds
pub const TIMEOUT_ENV: &str = "API_TIMEOUT_MS";

/// Where the backend services live and how long a caller should wait for them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ApiConfig {
    /// Defaults, overridden by `API_BASE_URL` / `API_TIMEOUT_MS` when set
    pub fn from_env() -> PayoffResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> PayoffResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = ApiConfig::default();

        if let Some(url) = lookup(BASE_URL_ENV) {
            cfg.base_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| PayoffError::InvalidConfiguration {
                    field: TIMEOUT_ENV.to_string(),
                    reason: format!("'{}' is not a millisecond count: {}", raw, e),
                })?;
            cfg.timeout = Duration::from_millis(ms);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the API configuration
    pub fn validate(&self) -> PayoffResult<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(PayoffError::InvalidConfiguration {
                field: "base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(PayoffError::InvalidConfiguration {
                field: "base_url".to_string(),
                reason: format!("'{}' must start with http:// or https://", url),
            });
        }
        if self.timeout.is_zero() {
            return Err(PayoffError::InvalidConfiguration {
                field: "timeout".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
