//! OpenRouter chat completion client.
//!
//! A thin client for OpenRouter's OpenAI-compatible chat completion endpoint.
//! It builds the JSON request body, issues one POST, and returns the parsed
//! response. No retries, no streaming, no caching.
//!
//! # Usage
//!
//! ```rust,no_run
//! use openrouter_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenRouterClient::builder()
//!         .api_key("your-api-key")
//!         .model("anthropic/claude-3-5-sonnet")
//!         .build()?;
//!
//!     let response = client
//!         .chat(vec![ChatMessage::user("What is the capital of France?")])
//!         .await?;
//!     if let Some(text) = response.text() {
//!         println!("Response: {text}");
//!     }
//!
//!     Ok(())
//! }
//! ```

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::OpenRouterError;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Baseline model used when none is configured
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default generation cap
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable consulted when no explicit API key is given
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Per-call overrides for generation parameters.
///
/// Unset fields fall back to the client's configured values.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// Model identifier override
    pub model: Option<String>,
    /// Temperature override
    pub temperature: Option<f32>,
    /// Max output token override
    pub max_tokens: Option<u32>,
}

impl ChatOptions {
    /// Start an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the model for this call.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the temperature for this call.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Override the max output token count for this call.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Builder for [`OpenRouterClient`].
pub struct OpenRouterBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    timeout: Option<Duration>,
    referer: Option<String>,
    title: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl Default for OpenRouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenRouterBuilder {
    /// Create a new builder with nothing configured.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: None,
            temperature: None,
            max_tokens: None,
            timeout: None,
            referer: None,
            title: None,
            transport: None,
        }
    }

    /// Set an explicit API key, overriding the environment lookup.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set a custom base URL (e.g. a test server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the default model for this client.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the default sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the default max output token count.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the request timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `HTTP-Referer` attribution header.
    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Set the `X-Title` attribution header.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Inject a custom transport instead of the built-in reqwest one.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// The API key is resolved here, once: the explicit key if one was given,
    /// otherwise `OPENROUTER_API_KEY` from the process environment. Blank
    /// values count as absent. A key-less client can still be built; it fails
    /// with [`OpenRouterError::MissingApiKey`] on the first call.
    pub fn build(self) -> Result<OpenRouterClient, OpenRouterError> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .or_else(|| {
                std::env::var(API_KEY_ENV)
                    .ok()
                    .filter(|value| !value.trim().is_empty())
                    .map(SecretString::from)
            });

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(
                self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            )?),
        };

        Ok(OpenRouterClient {
            api_key,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            referer: self.referer,
            title: self.title,
            transport,
        })
    }
}

/// Client for the OpenRouter chat completion endpoint.
///
/// Cheap to clone: the transport is shared behind an `Arc`. Each call is
/// independent; the client holds no mutable state.
#[derive(Clone)]
pub struct OpenRouterClient {
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    referer: Option<String>,
    title: Option<String>,
    transport: Arc<dyn HttpTransport>,
}

impl OpenRouterClient {
    /// Create a new builder.
    pub fn builder() -> OpenRouterBuilder {
        OpenRouterBuilder::new()
    }

    /// Send a conversation with the client's configured parameters.
    pub async fn chat(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatResponse, OpenRouterError> {
        self.chat_with(messages, ChatOptions::default()).await
    }

    /// Send a conversation with per-call parameter overrides.
    ///
    /// Exactly one POST is issued; there are no retries. Failures map to:
    /// [`MissingApiKey`](OpenRouterError::MissingApiKey) before any network
    /// activity, [`Transport`](OpenRouterError::Transport) for connection
    /// failures, [`Api`](OpenRouterError::Api) for non-2xx statuses, and
    /// [`MalformedResponse`](OpenRouterError::MalformedResponse) for a
    /// success body that is not valid JSON.
    pub async fn chat_with(
        &self,
        messages: Vec<ChatMessage>,
        options: ChatOptions,
    ) -> Result<ChatResponse, OpenRouterError> {
        validate_messages(&messages)?;

        let api_key = self
            .api_key
            .as_ref()
            .ok_or(OpenRouterError::MissingApiKey)?;

        let request = ChatRequest {
            model: options.model.unwrap_or_else(|| self.model.clone()),
            messages,
            temperature: options.temperature.unwrap_or(self.temperature),
            max_tokens: options.max_tokens.unwrap_or(self.max_tokens),
            top_p: None,
        };

        let headers = self.build_headers(api_key)?;
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        let body = serde_json::to_value(&request)
            .map_err(|e| OpenRouterError::InvalidRequest(e.to_string()))?;

        debug!(
            model = %request.model,
            message_count = request.messages.len(),
            "dispatching chat completion request"
        );

        let response = self.transport.post_json(&url, headers, body).await?;

        if !(200..300).contains(&response.status) {
            warn!(status = response.status, "chat completion request failed");
            return Err(OpenRouterError::Api {
                status: response.status,
                body: response.body,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| OpenRouterError::MalformedResponse(format!("invalid JSON body: {e}")))?;

        Ok(ChatResponse::from_value(value))
    }

    /// One-shot convenience: wrap `prompt` as a single user message, send it,
    /// and extract the generated text.
    ///
    /// A success response without the expected content path is reported as
    /// [`MalformedResponse`](OpenRouterError::MalformedResponse).
    pub async fn ask(&self, prompt: impl Into<String>) -> Result<String, OpenRouterError> {
        let response = self.chat(vec![ChatMessage::user(prompt)]).await?;
        response
            .text()
            .map(str::to_owned)
            .ok_or_else(|| {
                OpenRouterError::MalformedResponse(
                    "response contained no message content".to_string(),
                )
            })
    }

    /// The model used when a call does not override it.
    pub fn default_model(&self) -> &str {
        &self.model
    }

    /// Whether a usable API key was resolved at build time.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_headers(&self, api_key: &SecretString) -> Result<HeaderMap, OpenRouterError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", api_key.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|e| {
                OpenRouterError::InvalidRequest(format!("invalid API key format: {e}"))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(referer) = &self.referer {
            headers.insert(
                HeaderName::from_static("http-referer"),
                HeaderValue::from_str(referer).map_err(|e| {
                    OpenRouterError::InvalidRequest(format!("invalid referer value: {e}"))
                })?,
            );
        }
        if let Some(title) = &self.title {
            headers.insert(
                HeaderName::from_static("x-title"),
                HeaderValue::from_str(title).map_err(|e| {
                    OpenRouterError::InvalidRequest(format!("invalid title value: {e}"))
                })?,
            );
        }

        Ok(headers)
    }
}

fn validate_messages(messages: &[ChatMessage]) -> Result<(), OpenRouterError> {
    if messages.is_empty() {
        return Err(OpenRouterError::InvalidRequest(
            "conversation must contain at least one message".to_string(),
        ));
    }
    if let Some(index) = messages.iter().position(|m| m.content.trim().is_empty()) {
        return Err(OpenRouterError::InvalidRequest(format!(
            "message {index} has empty content"
        )));
    }
    Ok(())
}
