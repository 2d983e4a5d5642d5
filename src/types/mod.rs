//! Request and response types for the chat completion API

mod message;
mod request;
mod response;

// Re-export all public types
pub use message::{ChatMessage, MessageRole};
pub use request::ChatRequest;
pub use response::{ChatResponse, Usage};
