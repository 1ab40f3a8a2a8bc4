//! Thin HTTP client for the Groq chat-completion endpoint.
//!
//! One POST to `{base}/chat/completions` with a fixed model and a
//! system + user message pair; the generated HTML is read from
//! `choices[0].message.content`. Transport errors are retried a bounded
//! number of times with jittered backoff; HTTP-level failures are not,
//! since the upstream already saw the request.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::RetryIf;

use crate::error::{AppError, AppResult};

pub const GROQ_MODEL: &str = "llama3-70b-8192";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
// ExponentialBackoff raises the base per attempt: 50ms, then 2.5s.
const RETRY_BASE_DELAY_MS: u64 = 50;
const MAX_RETRIES: usize = 2;

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        let base = base_url.trim_end_matches('/').to_string();
        GroqClient { client, api_key, base_url: base }
    }

    /// Generate blog HTML from a system + user prompt pair.
    ///
    /// Returns the raw model output; length is best-effort per the prompt's
    /// word-count instruction and is not enforced here.
    pub async fn generate(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        let request = ChatCompletionRequest {
            model: GROQ_MODEL.to_string(),
            messages: vec![
                ChatMessage { role: "system".to_string(), content: system_prompt.to_string() },
                ChatMessage { role: "user".to_string(), content: user_prompt.to_string() },
            ],
        };

        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_DELAY_MS)
            .map(jitter)
            .take(MAX_RETRIES);
        RetryIf::spawn(
            strategy,
            || self.try_generate(&request),
            |err: &AppError| matches!(err, AppError::HttpClient(_)),
        )
        .await
    }

    async fn try_generate(&self, request: &ChatCompletionRequest) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::info!("Sending chat completion to Groq at URL: {}", url);

        let response = self.client.post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let body: ChatCompletionResponse =
                response.json().await.map_err(AppError::HttpClient)?;
            body.choices
                .into_iter()
                .next()
                .map(|choice| choice.message.content)
                .ok_or_else(|| AppError::Groq("response contained no choices".to_string()))
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("Failed to generate content. Status: {}, Body: {}", status, error_body);
            tracing::error!("{}", error_message);
            Err(AppError::Groq(error_message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn generate_extracts_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": { "role": "assistant", "content": "<h2>Hello</h2>" }
                }]
            })))
            .mount(&server)
            .await;

        let client = GroqClient::new("test-key".to_string(), server.uri());
        let html = client.generate("sys", "user").await.unwrap();
        assert_eq!(html, "<h2>Hello</h2>");
    }

    #[tokio::test]
    async fn generate_sends_fixed_model_and_both_messages() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_string_contains("\"model\":\"llama3-70b-8192\""))
            .and(body_string_contains("\"role\":\"system\""))
            .and(body_string_contains("\"role\":\"user\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": "ok" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GroqClient::new("test-key".to_string(), server.uri());
        client.generate("sys", "user").await.unwrap();
    }

    #[tokio::test]
    async fn non_2xx_surfaces_status_and_body_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(429).set_body_string("rate limit exceeded"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = GroqClient::new("test-key".to_string(), server.uri());
        let err = client.generate("sys", "user").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("429"), "unexpected error: {}", message);
        assert!(message.contains("rate limit exceeded"));
    }

    #[tokio::test]
    async fn empty_choices_is_an_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let client = GroqClient::new("test-key".to_string(), server.uri());
        let err = client.generate("sys", "user").await.unwrap_err();
        assert!(matches!(err, AppError::Groq(_)));
    }
}
