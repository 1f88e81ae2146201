//! Bot configuration
//!
//! Defines the secrets and tunables of the watcher: credentials for both
//! remote services, their URLs, and the polling interval.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Default homework status endpoint
pub const DEFAULT_STATUS_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = hwatch_client::TELEGRAM_API_URL;

/// Default pause between cycles, in seconds
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = hwatch_client::DEFAULT_TIMEOUT;

/// Bot configuration
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives the notifications
    pub telegram_chat_id: String,

    /// Full URL of the status endpoint
    pub status_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between cycles, after success and failure alike
    pub retry_period: Duration,

    /// Timeout of a single HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a configuration with default URLs and intervals
    pub fn new(
        practicum_token: String,
        telegram_token: String,
        telegram_chat_id: String,
    ) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            retry_period: Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: the Practicum status URL)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    ///
    /// Empty values count as unset. All missing required variables are
    /// reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut missing = Vec::new();
        let mut required = |key: &'static str| {
            let value = get(key);
            if value.is_none() {
                missing.push(key);
            }
            value.unwrap_or_default()
        };

        let practicum_token = required("PRACTICUM_TOKEN");
        let telegram_token = required("TELEGRAM_TOKEN");
        let telegram_chat_id = required("TELEGRAM_CHAT_ID");

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let mut config = Self::new(practicum_token, telegram_token, telegram_chat_id);

        if let Some(endpoint) = get("PRACTICUM_ENDPOINT") {
            config.status_endpoint = endpoint;
        }

        if let Some(url) = get("TELEGRAM_API_URL") {
            config.telegram_api_url = url;
        }

        if let Some(period) = get("RETRY_PERIOD").and_then(|s| s.parse::<u64>().ok()) {
            config.retry_period = Duration::from_secs(period);
        }

        if let Some(timeout) = get("REQUEST_TIMEOUT").and_then(|s| s.parse::<u64>().ok()) {
            config.request_timeout = Duration::from_secs(timeout);
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        for (var, value) in [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ] {
            if value.trim().is_empty() {
                missing.push(var);
            }
        }
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        for (var, url) in [
            ("PRACTICUM_ENDPOINT", &self.status_endpoint),
            ("TELEGRAM_API_URL", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid {
                    var,
                    reason: "must start with http:// or https://".to_string(),
                });
            }
        }

        if self.retry_period.is_zero() {
            return Err(ConfigError::Invalid {
                var: "RETRY_PERIOD",
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                var: "REQUEST_TIMEOUT",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("status_endpoint", &self.status_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
