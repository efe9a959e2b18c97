//! Client configuration.
//!
//! Configuration is resolved once at startup from the environment (with a
//! `.env` file honored if present) and is immutable afterwards. Every knob
//! has a documented default so the client works against a local backend out
//! of the box.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default backend base URL for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Per-request timeout in milliseconds.
/// 10s allows for slow responses while failing fast enough for good UX.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Maximum automatic retries for idempotent (GET) requests.
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Base retry delay in milliseconds. The nth retry waits `base_delay * n`.
const DEFAULT_BASE_DELAY_MS: u64 = 1_000;

/// Environment variable holding the backend base URL.
const ENV_BASE_URL: &str = "FINCONSULT_API_URL";
/// Environment variable overriding the request timeout (milliseconds).
const ENV_TIMEOUT_MS: &str = "FINCONSULT_TIMEOUT_MS";
/// Environment variable overriding the GET retry budget.
const ENV_MAX_RETRIES: &str = "FINCONSULT_MAX_RETRIES";
/// Environment variable overriding the base retry delay (milliseconds).
const ENV_BASE_DELAY_MS: &str = "FINCONSULT_RETRY_DELAY_MS";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum automatic retries for idempotent requests.
    pub max_retries: u32,
    /// Base delay between retries; the nth retry waits `base_delay * n`.
    pub base_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
        }
    }
}

impl ClientConfig {
    /// Resolve configuration from the environment, loading `.env` if present.
    /// Unset or unparsable variables fall back to the documented defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.is_empty() {
                config.base_url = url.trim_end_matches('/').to_string();
            }
        }
        if let Some(ms) = Self::parse_var::<u64>(ENV_TIMEOUT_MS) {
            config.timeout = Duration::from_millis(ms);
        }
        if let Some(n) = Self::parse_var::<u32>(ENV_MAX_RETRIES) {
            config.max_retries = n;
        }
        if let Some(ms) = Self::parse_var::<u64>(ENV_BASE_DELAY_MS) {
            config.base_delay = Duration::from_millis(ms);
        }

        config
    }

    /// Construct a config with an explicit base URL and the default knobs.
    /// Mainly useful for tests pointing at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
        let raw = std::env::var(name).ok()?;
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(var = name, value = %raw, "Ignoring unparsable configuration value");
                None
            }
        }
    }
}
