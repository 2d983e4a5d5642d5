//! Transport-seam tests.
//!
//! These exercise the client against an in-process transport that records
//! every request and answers with a canned response, so the contract can be
//! checked without a socket: credential resolution happens before any
//! transport activity, bodies carry the conversation verbatim, and
//! non-success statuses surface as typed errors.

use async_trait::async_trait;
use openrouter_client::prelude::*;
use openrouter_client::client::API_KEY_ENV;
use openrouter_client::transport::{HttpResponse, HttpTransport};
use reqwest::header::HeaderMap;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct RecordedCall {
    url: String,
    headers: HeaderMap,
    body: Value,
}

/// Records every request and answers with a canned response.
struct SpyTransport {
    calls: Mutex<Vec<RecordedCall>>,
    response: HttpResponse,
}

impl SpyTransport {
    fn returning(status: u16, body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: HttpResponse {
                status,
                body: body.into(),
            },
        })
    }

    fn returning_json(status: u16, body: &Value) -> Arc<Self> {
        Self::returning(status, body.to_string())
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn single_call(&self) -> RecordedCall {
        let calls = self.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "expected exactly one transport call");
        calls[0].clone()
    }
}

#[async_trait]
impl HttpTransport for SpyTransport {
    async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: Value,
    ) -> Result<HttpResponse, OpenRouterError> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            headers,
            body,
        });
        Ok(self.response.clone())
    }
}

fn success_body() -> Value {
    json!({
        "id": "gen-1",
        "model": "openai/gpt-4o-mini",
        "choices": [{"message": {"role": "assistant", "content": "4"}}],
        "usage": {"prompt_tokens": 5, "completion_tokens": 1, "total_tokens": 6}
    })
}

fn client_with(transport: Arc<SpyTransport>) -> OpenRouterClient {
    OpenRouterClient::builder()
        .api_key("sk-test")
        .transport(transport)
        .build()
        .unwrap()
}

#[tokio::test]
async fn stubbed_success_body_round_trips_unchanged() {
    let body = success_body();
    let spy = SpyTransport::returning_json(200, &body);
    let client = client_with(spy.clone());

    let response = client
        .chat(vec![ChatMessage::user("2+2?")])
        .await
        .unwrap();

    assert_eq!(response.raw(), &body);
    assert_eq!(spy.call_count(), 1);
}

#[tokio::test]
async fn non_success_status_is_a_typed_error_not_a_panic() {
    let spy = SpyTransport::returning(503, "upstream unavailable");
    let client = client_with(spy);

    let err = client
        .chat(vec![ChatMessage::user("Hello")])
        .await
        .unwrap_err();

    match err {
        OpenRouterError::Api { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn missing_credential_never_invokes_the_transport() {
    // The builder falls back to the environment, so clear it for this check.
    unsafe {
        std::env::remove_var(API_KEY_ENV);
    }

    let spy = SpyTransport::returning_json(200, &success_body());
    let client = OpenRouterClient::builder()
        .transport(spy.clone())
        .build()
        .unwrap();

    let err = client
        .chat(vec![ChatMessage::user("Hello")])
        .await
        .unwrap_err();

    assert!(matches!(err, OpenRouterError::MissingApiKey));
    assert_eq!(spy.call_count(), 0);
}

#[tokio::test]
async fn empty_conversation_is_rejected_before_the_transport() {
    let spy = SpyTransport::returning_json(200, &success_body());
    let client = client_with(spy.clone());

    let err = client.chat(vec![]).await.unwrap_err();

    assert!(matches!(err, OpenRouterError::InvalidRequest(_)));
    assert_eq!(spy.call_count(), 0);
}

#[tokio::test]
async fn ask_issues_exactly_one_call_with_a_single_user_message() {
    let spy = SpyTransport::returning_json(200, &success_body());
    let client = client_with(spy.clone());

    let answer = client.ask("2+2?").await.unwrap();
    assert_eq!(answer, "4");

    let call = spy.single_call();
    assert_eq!(
        call.body["messages"],
        json!([{"role": "user", "content": "2+2?"}])
    );
}

#[tokio::test]
async fn request_targets_the_chat_completions_endpoint() {
    let spy = SpyTransport::returning_json(200, &success_body());
    let client = OpenRouterClient::builder()
        .api_key("sk-test")
        .base_url("https://openrouter.ai/api/v1/")
        .transport(spy.clone())
        .build()
        .unwrap();

    client.ask("Hello").await.unwrap();

    let call = spy.single_call();
    assert_eq!(call.url, "https://openrouter.ai/api/v1/chat/completions");
    assert_eq!(
        call.headers.get("authorization").unwrap(),
        "Bearer sk-test"
    );
    assert_eq!(
        call.headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn body_carries_model_and_generation_parameters() {
    let spy = SpyTransport::returning_json(200, &success_body());
    let client = OpenRouterClient::builder()
        .api_key("sk-test")
        .model("openai/gpt-4o-mini")
        .temperature(0.5)
        .max_tokens(256)
        .transport(spy.clone())
        .build()
        .unwrap();

    client.ask("Hello").await.unwrap();

    let call = spy.single_call();
    assert_eq!(call.body["model"], json!("openai/gpt-4o-mini"));
    assert_eq!(call.body["temperature"], json!(0.5));
    assert_eq!(call.body["max_tokens"], json!(256));
}
