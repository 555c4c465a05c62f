use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::SummaryLength;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::config::LlmSettings;

/// Summaries through an OpenAI-compatible chat completions endpoint.
pub struct OpenAiSummarizer {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Completion budget for each summary length.
pub fn max_tokens_for(summary_length: SummaryLength) -> usize {
    match summary_length {
        SummaryLength::Short => 150,
        SummaryLength::Medium => 200,
        SummaryLength::Long => 350,
    }
}

pub fn build_prompt(text: &str, summary_length: SummaryLength) -> String {
    format!(
        "You are a helpful assistant. Please provide a **{}** summary of the following document text:\n\n{}\n\nSummary:",
        summary_length, text
    )
}

impl OpenAiSummarizer {
    pub fn new(api_key: String, base_url: String, model: String, temperature: f32) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            temperature,
        }
    }

    pub fn from_settings(settings: &LlmSettings) -> Self {
        Self::new(
            settings.api_key.clone(),
            settings.base_url.clone(),
            settings.model.clone(),
            settings.temperature,
        )
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    #[tracing::instrument(skip(self, text), fields(model = %self.model, chars = text.len()))]
    async fn summarize(
        &self,
        text: &str,
        summary_length: SummaryLength,
    ) -> Result<String, SummarizerError> {
        tracing::debug!(preview = %sanitize_for_log(text), "Requesting summary");

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(text, summary_length),
            }],
            max_tokens: max_tokens_for(summary_length),
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizerError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SummarizerError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizerError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| SummarizerError::InvalidResponse("empty choices".to_string()))
    }
}
