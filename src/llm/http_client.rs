// src/llm/http_client.rs
// HTTP client configuration for the LLM provider

use crate::error::{AnalysisError, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on connection setup, never longer than the request timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Prefix of the reported body when an error response could not be read
const UNREADABLE_BODY: &str = "无法读取错误响应";

/// Single-attempt HTTP client for chat completion calls.
///
/// Failures are returned as-is; there is no retry.
pub struct LlmHttpClient {
    client: Client,
    pub request_timeout: Duration,
}

impl LlmHttpClient {
    pub fn new(request_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(request_timeout))
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build configured HTTP client, using defaults");
                Client::new()
            });

        Self {
            client,
            request_timeout,
        }
    }

    /// POST `body` to `url` with Bearer auth and return the response text.
    ///
    /// Any status other than 200 becomes [`AnalysisError::UpstreamStatus`] with the body
    /// verbatim; send/read failures become [`AnalysisError::Transport`].
    pub async fn execute(
        &self,
        request_id: &str,
        url: &str,
        api_key: &str,
        body: String,
    ) -> Result<String> {
        let response = self
            .client
            .post(url)
            .timeout(self.request_timeout)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!(request_id = %request_id, status = %status, "Upstream responded");

        if status != StatusCode::OK {
            let error_body = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(request_id = %request_id, error = %e, "Failed to read upstream error body");
                    format!("{}: {}", UNREADABLE_BODY, e)
                }
            };
            warn!(
                request_id = %request_id,
                status = %status,
                error = %error_body,
                "Upstream returned an error status"
            );
            return Err(AnalysisError::UpstreamStatus {
                status: status.as_u16(),
                body: error_body,
            });
        }

        Ok(response.text().await?)
    }
}
