//! Error types for the OpenRouter client.
//!
//! Every fallible operation in this crate returns [`OpenRouterError`], so
//! callers branch on the failure kind instead of checking for absent values.

use thiserror::Error;

/// Failure taxonomy for client calls and the filesystem helpers.
#[derive(Debug, Error)]
pub enum OpenRouterError {
    /// No API key was provided and `OPENROUTER_API_KEY` is unset or blank.
    ///
    /// Raised before any network activity.
    #[error("missing OpenRouter API key")]
    MissingApiKey,

    /// Transport-level failure: DNS, connection refused, timeout, TLS.
    ///
    /// No HTTP status was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success HTTP status.
    ///
    /// Carries the status code and the raw response body text so callers can
    /// inspect the provider's error payload.
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// A 2xx response whose body was not valid JSON, or lacked the expected
    /// shape where one is required (e.g. [`ask`](crate::OpenRouterClient::ask)).
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The request was rejected before dispatch: empty conversation, empty
    /// message content, or a header value that cannot be encoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// JSON serialization or deserialization failure in the file helpers.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An env file that exists but cannot be read as `KEY=VALUE` lines.
    #[error("env file error: {0}")]
    EnvFile(String),

    /// Filesystem failure (disk-level conditions propagate to the caller).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OpenRouterError {
    /// HTTP status code, when the provider produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened before the request left the process.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey | Self::InvalidRequest(_) | Self::Json(_) | Self::Io(_)
        )
    }
}

impl From<reqwest::Error> for OpenRouterError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
