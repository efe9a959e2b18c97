//! HTTP client core for the FinConsult backend.
//!
//! Every facade call goes through the single `request` pipeline here, which
//! enforces consistent authentication, timeout, retry, and failure
//! classification:
//!
//! - the bearer token is read fresh from the session store on every
//!   dispatch, so a login or logout between requests is always honored;
//! - only GET requests are retried, and only on transient failures (5xx,
//!   timeout, or no response), waiting `base_delay * n` before the nth
//!   retry; writes are never retried since that could duplicate side
//!   effects;
//! - a 401 unconditionally clears the stored session and short-circuits
//!   any pending retries.

use std::sync::Arc;

use anyhow::Result;
use reqwest::{header, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::SessionStore;
use crate::config::ClientConfig;

use super::ApiError;

/// API client for the FinConsult backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a new API client with the given configuration and session store.
    pub fn new(config: ClientConfig, session: Arc<SessionStore>) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Ok(self.get_with_status(path).await?.1)
    }

    /// GET variant that also surfaces the response status code.
    pub async fn get_with_status<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<(u16, T), ApiError> {
        let (status, text) = self.request(Method::GET, path, None).await?;
        Ok((status.as_u16(), Self::decode(path, &text)?))
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        Ok(self.post_with_status(path, body).await?.1)
    }

    /// POST variant that also surfaces the response status code, so a
    /// caller can tell a 201 creation from a plain 200.
    pub async fn post_with_status<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(u16, T), ApiError> {
        let body = Self::encode(body)?;
        let (status, text) = self.request(Method::POST, path, Some(body)).await?;
        Ok((status.as_u16(), Self::decode(path, &text)?))
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = Self::encode(body)?;
        let (_, text) = self.request(Method::PUT, path, Some(body)).await?;
        Self::decode(path, &text)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// The single request pipeline. Returns the original status code and
    /// the raw success body; failures come back classified. Retry state is
    /// local to this one logical request and is discarded on return.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(reqwest::StatusCode, String), ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        let retryable = method == Method::GET;
        let mut attempt: u32 = 0;

        loop {
            let failure = match self.dispatch(method.clone(), &url, body.as_ref()).await {
                Ok(success) => return Ok(success),
                Err(ApiError::Auth) => {
                    // 401 short-circuits everything, pending retries included.
                    warn!(url = %url, "Authentication rejected, clearing stored session");
                    self.session.invalidate();
                    return Err(ApiError::Auth);
                }
                Err(e) => e,
            };

            attempt += 1;
            if !retryable || !failure.is_transient() || attempt > self.config.max_retries {
                // Surface the last-seen failure, not a synthesized one.
                return Err(failure);
            }

            let delay = self.retry_delay(attempt);
            warn!(
                url = %url,
                attempt,
                delay_ms = delay.as_millis() as u64,
                error = %failure,
                "Transient failure, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Delay before the nth retry. Linear: base_delay * n, not doubling.
    fn retry_delay(&self, attempt: u32) -> std::time::Duration {
        self.config.base_delay * attempt
    }

    /// One send/receive round trip, with the bearer token attached if a
    /// session is present right now.
    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<(reqwest::StatusCode, String), ApiError> {
        let mut request = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(url = %url, status = %status, "Response received");

        if status.is_success() {
            Ok((status, text))
        } else {
            Err(ApiError::from_status(status, &text))
        }
    }

    fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to encode request body: {}", e)))
    }

    fn decode<T: DeserializeOwned>(path: &str, text: &str) -> Result<T, ApiError> {
        serde_json::from_str(text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to decode response from {}: {}", path, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_retry_delay_is_linear() {
        let session = Arc::new(SessionStore::open(
            std::env::temp_dir().join("finconsult-client-test-session.json"),
        ));
        let config = ClientConfig {
            base_delay: Duration::from_millis(100),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(config, session).expect("Failed to build API client");

        assert_eq!(client.retry_delay(1), Duration::from_millis(100));
        assert_eq!(client.retry_delay(2), Duration::from_millis(200));
        // The third retry waits 3x the base delay, not the 4x a doubling
        // schedule would produce.
        assert_eq!(client.retry_delay(3), Duration::from_millis(300));
    }

    #[test]
    fn test_decode_failure_is_classified() {
        let result: Result<Vec<i64>, ApiError> = ApiClient::decode("/public/services", "not json");
        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
    }

    #[test]
    fn test_decode_success() {
        let result: Result<Vec<i64>, ApiError> = ApiClient::decode("/public/services", "[1, 2]");
        assert_eq!(result.unwrap(), vec![1, 2]);
    }
}
