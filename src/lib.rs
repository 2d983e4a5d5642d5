//! # openrouter-client
//!
//! A small async client for [OpenRouter](https://openrouter.ai)'s
//! OpenAI-compatible chat completion API, plus a handful of standalone
//! environment and file helpers.
//!
#![deny(unsafe_code)]
//! ## Design
//!
//! - **One request, one result**: each call builds the JSON body, issues a
//!   single POST, and returns the parsed response. No retries, no streaming,
//!   no caching; callers decide how to react to failures.
//! - **Typed failures**: every fallible operation returns
//!   [`OpenRouterError`], so the failure kind (missing key, transport,
//!   non-2xx status, malformed body) is handled at compile time instead of
//!   through forgotten absence checks.
//! - **Injectable transport**: the HTTP seam is a trait, so tests can record
//!   requests and return synthetic responses without a socket.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openrouter_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads OPENROUTER_API_KEY from the environment.
//!     let client = OpenRouterClient::builder().build()?;
//!
//!     let response = client
//!         .chat(vec![
//!             ChatMessage::system("You are a concise assistant."),
//!             ChatMessage::user("What is the capital of France?"),
//!         ])
//!         .await?;
//!
//!     if let Some(text) = response.text() {
//!         println!("Response: {text}");
//!     }
//!     if let Some(usage) = response.usage() {
//!         println!("Tokens used: {}", usage.total_tokens);
//!     }
//!
//!     // Or, for the common one-liner:
//!     let answer = client.ask("2+2?").await?;
//!     println!("{answer}");
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod transport;
pub mod types;
pub mod utils;

pub use client::{ChatOptions, OpenRouterBuilder, OpenRouterClient};
pub use error::OpenRouterError;
pub use types::{ChatMessage, ChatResponse, MessageRole, Usage};

/// Convenient single-import surface for common usage.
pub mod prelude {
    pub use crate::client::{ChatOptions, OpenRouterBuilder, OpenRouterClient};
    pub use crate::error::OpenRouterError;
    pub use crate::types::{ChatMessage, ChatResponse, MessageRole, Usage};
}
