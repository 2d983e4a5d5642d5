//! Chat completion response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token accounting reported by the provider.
///
/// Field names follow the OpenAI-compatible `usage` object. All fields are
/// lenient: a provider that omits one deserializes to zero rather than
/// failing the whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// Input tokens consumed by the prompt
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Output tokens generated
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens billed for the request
    #[serde(default)]
    pub total_tokens: u32,
}

/// Parsed chat completion response.
///
/// Wraps the provider's JSON verbatim. Only `choices[0].message.content` and
/// `usage` are treated as stable; everything else is reachable through
/// [`raw`](Self::raw). Accessors return `None` instead of panicking when a
/// path is absent.
///
/// # Examples
///
/// ```rust
/// use openrouter_client::types::ChatResponse;
/// use serde_json::json;
///
/// let response = ChatResponse::from_value(json!({
///     "choices": [{"message": {"content": "Paris"}}],
///     "usage": {"prompt_tokens": 9, "completion_tokens": 1, "total_tokens": 10},
/// }));
/// assert_eq!(response.text(), Some("Paris"));
/// assert_eq!(response.usage().unwrap().total_tokens, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    raw: Value,
}

impl ChatResponse {
    /// Wrap an already-parsed provider response.
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// The first choice's message content, if present.
    pub fn text(&self) -> Option<&str> {
        self.raw
            .get("choices")?
            .get(0)?
            .get("message")?
            .get("content")?
            .as_str()
    }

    /// The `usage` field verbatim, if present.
    pub fn usage_raw(&self) -> Option<&Value> {
        self.raw.get("usage")
    }

    /// Typed view of the `usage` field, if present and object-shaped.
    pub fn usage(&self) -> Option<Usage> {
        serde_json::from_value(self.raw.get("usage")?.clone()).ok()
    }

    /// The model that actually served the request.
    ///
    /// OpenRouter may route to a different concrete model than the one
    /// requested, so this can differ from the request's model identifier.
    pub fn model(&self) -> Option<&str> {
        self.raw.get("model")?.as_str()
    }

    /// Provider-assigned response ID.
    pub fn id(&self) -> Option<&str> {
        self.raw.get("id")?.as_str()
    }

    /// The parsed provider response, unchanged.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consume the wrapper and return the parsed provider response.
    pub fn into_raw(self) -> Value {
        self.raw
    }
}
