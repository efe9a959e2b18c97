//! Classified request failures.
//!
//! Every failure the pipeline can produce is returned to the caller as one
//! of these variants; nothing is swallowed. Messages are suitable for
//! direct display, preferring a server-supplied `message` field when the
//! response body carries one.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No response was received at all.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The server rejected the session (401). The stored session has
    /// already been cleared by the time this surfaces.
    #[error("Session expired - please sign in again")]
    Auth,

    /// A 4xx other than 401: the request itself was bad. Never retried.
    #[error("{message}")]
    Client { status: u16, message: String },

    /// A 5xx, surfaced after the retry budget (if any) is exhausted.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded as the expected payload.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length of a response-body excerpt carried into an error message.
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Classify a non-success HTTP response.
    ///
    /// 401 maps to `Auth`; other 4xx to `Client`; 5xx to `Server`. The
    /// message prefers a `message` (or `error`) string field in a JSON
    /// body, falling back to a generic per-kind message.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let code = status.as_u16();
        match code {
            401 => ApiError::Auth,
            400..=499 => ApiError::Client {
                status: code,
                message: Self::server_message(body)
                    .unwrap_or_else(|| format!("Request failed (status {})", code)),
            },
            500..=599 => ApiError::Server {
                status: code,
                message: Self::server_message(body)
                    .unwrap_or_else(|| "Server error - please try again later".to_string()),
            },
            _ => ApiError::InvalidResponse(format!(
                "Unexpected status {}: {}",
                code,
                Self::truncate_body(body)
            )),
        }
    }

    /// The HTTP status associated with this failure, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Auth => Some(401),
            ApiError::Client { status, .. } | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the failure is transient and a retry could succeed.
    /// Only the pipeline consults this, and only for idempotent requests.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Timeout | ApiError::Server { .. }
        )
    }

    /// Extract a display message from a JSON error body, if one is present.
    fn server_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        let message = value
            .get("message")
            .or_else(|| value.get("error"))?
            .as_str()?;
        if message.is_empty() {
            None
        } else {
            Some(Self::truncate_body(message))
        }
    }

    /// Truncate a response body to avoid carrying excessive data around.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err)
        }
    }
}
