//! Basic usage of the OpenRouter client.
//!
//! Reads the API key from `OPENROUTER_API_KEY`, optionally loaded from a
//! `.env` file in the working directory.
//!
//! Run with: `cargo run --example basic_chat`

use std::path::Path;

use openrouter_client::prelude::*;
use openrouter_client::utils::{api_key_present, format_messages, load_env_file, save_json};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    load_env_file(None)?;
    if !api_key_present("OPENROUTER_API_KEY") {
        eprintln!("OPENROUTER_API_KEY is not set; aborting");
        return Ok(());
    }

    let client = OpenRouterClient::builder()
        .referer("https://github.com/YumchaLabs/openrouter-client")
        .title("openrouter-client demo")
        .build()?;

    // Example 1: simple question with the default model.
    println!("=== Simple question ({}) ===", client.default_model());
    let messages = vec![ChatMessage::user("What is the capital of France?")];
    println!("{}", format_messages(&messages));

    let response = client.chat(messages).await?;
    println!("Response: {}", response.text().unwrap_or("<no content>"));
    if let Some(model) = response.model() {
        println!("Model: {model}");
    }
    if let Some(usage) = response.usage() {
        println!(
            "Usage: {} prompt / {} completion / {} total",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }
    println!();

    // Example 2: creative task with a different model and temperature.
    println!("=== Creative task ===");
    let response = client
        .chat_with(
            vec![ChatMessage::user(
                "Write a short poem about artificial intelligence.",
            )],
            ChatOptions::new()
                .model("anthropic/claude-3-5-sonnet")
                .temperature(0.9)
                .max_tokens(200),
        )
        .await?;
    println!("Response: {}", response.text().unwrap_or("<no content>"));
    println!();

    // Example 3: one-liner convenience call.
    println!("=== One-liner ===");
    println!("{}", client.ask("2+2?").await?);

    // Persist the last raw response for later inspection.
    save_json(response.raw(), Path::new("output/last_response.json"))?;
    println!("Saved raw response to output/last_response.json");

    Ok(())
}
