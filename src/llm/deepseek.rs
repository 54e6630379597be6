// src/llm/deepseek.rs
// DeepSeek API client (non-streaming, single attempt)

use crate::config::ServiceConfig;
use crate::error::{AnalysisError, Result};
use crate::llm::http_client::LlmHttpClient;
use crate::llm::openai_compat::{ChatRequest, Message, parse_chat_response};
use std::time::Instant;
use tracing::{debug, info};

/// DeepSeek API client
///
/// Holds an immutable [`ServiceConfig`]; share it behind an `Arc`.
pub struct DeepSeekClient {
    config: ServiceConfig,
    http: LlmHttpClient,
}

impl DeepSeekClient {
    pub fn new(config: ServiceConfig) -> Self {
        let http = LlmHttpClient::new(config.timeout());
        Self { config, http }
    }

    /// Build the request body for `messages`
    fn request_body(&self, messages: Vec<Message>) -> ChatRequest {
        ChatRequest::new(self.config.model(), messages).with_temperature(self.config.temperature())
    }

    /// Send `messages` and return the raw text of the first choice
    pub async fn complete(&self, request_id: &str, messages: Vec<Message>) -> Result<String> {
        let start = Instant::now();
        let request = self.request_body(messages);
        let body = serde_json::to_string(&request).map_err(|e| AnalysisError::Transport {
            message: format!("failed to encode request: {}", e),
            timed_out: false,
        })?;

        debug!(
            request_id = %request_id,
            endpoint = %self.config.endpoint(),
            model = %self.config.model(),
            payload = %body,
            "DeepSeek request"
        );

        let response_body = self
            .http
            .execute(request_id, self.config.endpoint(), self.config.api_key(), body)
            .await?;

        debug!(request_id = %request_id, raw = %response_body, "DeepSeek raw response");

        let content = parse_chat_response(&response_body)?;

        info!(
            request_id = %request_id,
            duration_ms = start.elapsed().as_millis() as u64,
            content_len = content.len(),
            "DeepSeek chat complete"
        );

        Ok(content)
    }
}
