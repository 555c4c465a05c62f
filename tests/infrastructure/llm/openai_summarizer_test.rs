use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use tokio::net::TcpListener;

use docsum::application::ports::{Summarizer, SummarizerError};
use docsum::domain::SummaryLength;
use docsum::infrastructure::llm::OpenAiSummarizer;

type Captured = Arc<Mutex<Option<serde_json::Value>>>;

async fn spawn_mock_completions(status: StatusCode, captured: Captured) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/v1", listener.local_addr().unwrap());

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |Json(body): Json<serde_json::Value>| {
            let captured = Arc::clone(&captured);
            async move {
                *captured.lock().unwrap() = Some(body);
                (
                    status,
                    Json(serde_json::json!({
                        "choices": [
                            { "message": { "role": "assistant", "content": "  A short summary.\n" } }
                        ]
                    })),
                )
            }
        }),
    );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base
}

fn summarizer(base_url: String) -> OpenAiSummarizer {
    OpenAiSummarizer::new(
        "test-key".to_string(),
        base_url,
        "gpt-4o-mini".to_string(),
        0.3,
    )
}

#[tokio::test]
async fn given_completion_when_summarizing_then_returns_trimmed_content() {
    let captured = Captured::default();
    let base = spawn_mock_completions(StatusCode::OK, Arc::clone(&captured)).await;

    let summary = summarizer(base)
        .summarize("document body", SummaryLength::Short)
        .await
        .unwrap();

    assert_eq!(summary, "A short summary.");

    let request = captured.lock().unwrap().take().unwrap();
    assert_eq!(request["model"], "gpt-4o-mini");
    assert_eq!(request["max_tokens"], 150);
    let prompt = request["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.contains("**short** summary"));
    assert!(prompt.contains("document body"));
}

#[tokio::test]
async fn given_long_selector_when_summarizing_then_requests_larger_budget() {
    let captured = Captured::default();
    let base = spawn_mock_completions(StatusCode::OK, Arc::clone(&captured)).await;

    summarizer(base)
        .summarize("document body", SummaryLength::Long)
        .await
        .unwrap();

    let request = captured.lock().unwrap().take().unwrap();
    assert_eq!(request["max_tokens"], 350);
}

#[tokio::test]
async fn given_throttled_backend_when_summarizing_then_returns_rate_limited() {
    let base = spawn_mock_completions(StatusCode::TOO_MANY_REQUESTS, Captured::default()).await;

    let result = summarizer(base)
        .summarize("document body", SummaryLength::Medium)
        .await;

    assert!(matches!(result, Err(SummarizerError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_summarizing_then_returns_api_failure() {
    let base = spawn_mock_completions(StatusCode::BAD_GATEWAY, Captured::default()).await;

    let result = summarizer(base)
        .summarize("document body", SummaryLength::Medium)
        .await;

    assert!(matches!(result, Err(SummarizerError::ApiRequestFailed(_))));
}
