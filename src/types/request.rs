//! Chat completion request body

use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// OpenAI-compatible chat completion request body.
///
/// Serializes to exactly the JSON object the endpoint expects: `model`,
/// `messages`, `temperature`, `max_tokens`, plus optional sampling fields
/// that are omitted when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    /// Model identifier, e.g. `"openai/gpt-4o-mini"`
    pub model: String,
    /// Conversation messages, in turn order
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Top-p sampling parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}
