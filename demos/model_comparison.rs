//! Ask the same question through several models and compare answers.
//!
//! Run with: `cargo run --example model_comparison`

use openrouter_client::prelude::*;
use openrouter_client::utils::{api_key_present, load_env_file};

const MODELS: &[&str] = &[
    "openai/gpt-4o-mini",
    "anthropic/claude-3-5-sonnet",
    "google/gemini-2.0-flash",
    "meta-llama/llama-3.1-8b-instruct",
];

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

    let client = OpenRouterClient::builder().build()?;
    let question = "Tell me a fun fact about the universe.";

    // Limit to the first two models to stay under free-tier rate limits.
    for model in MODELS.iter().take(2) {
        println!("=== {model} ===");
        let result = client
            .chat_with(
                vec![ChatMessage::user(question)],
                ChatOptions::new().model(*model),
            )
            .await;

        match result {
            Ok(response) => {
                println!("Response: {}", response.text().unwrap_or("<no content>"));
                if let Some(usage) = response.usage() {
                    println!("Tokens: {}", usage.total_tokens);
                }
            }
            Err(err) => println!("Failed: {err}"),
        }
        println!();
    }

    Ok(())
}
