// src/ui/backend.rs
// Where the web form sends text: the Request-Service, or the analyzer in-process

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::REQUEST_TIMEOUT;
use crate::error::{AnalysisError, Result};
use crate::sentiment::{AnalysisRequest, AnalysisResponse, AnalysisResult, Analyzer};

/// Something that can turn text into an analysis result
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze(&self, text: &str) -> Result<AnalysisResult>;

    /// Message shown to the user when `analyze` fails
    fn describe_error(&self, err: &AnalysisError) -> String {
        format!("发生错误：{}", err)
    }
}

// ═══════════════════════════════════════
// REMOTE (Request-Service over HTTP)
// ═══════════════════════════════════════

/// Calls `POST {api_url}/analyze` on a running Request-Service
pub struct RemoteBackend {
    client: Client,
    api_url: String,
    timeout: Duration,
}

impl RemoteBackend {
    /// `api_url` should be like `http://localhost:8000` (no trailing slash needed)
    pub fn new(api_url: impl Into<String>) -> Self {
        // The service applies its own bound to the model call; leave room for it.
        let timeout = REQUEST_TIMEOUT + Duration::from_secs(5);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build configured HTTP client, using defaults");
                Client::new()
            });
        let api_url: String = api_url.into();
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.api_url)
    }
}

#[async_trait]
impl AnalysisBackend for RemoteBackend {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let url = self.analyze_url();
        debug!(url = %url, "Forwarding text to Request-Service");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&AnalysisRequest {
                text: text.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(AnalysisError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: AnalysisResponse =
            serde_json::from_str(&body).map_err(|e| AnalysisError::parse(e, body.as_str()))?;
        Ok(envelope.result)
    }

    fn describe_error(&self, err: &AnalysisError) -> String {
        match err {
            AnalysisError::UpstreamStatus { body, .. } => format!("分析失败：{}", body),
            other => format!("发生错误：{}", other),
        }
    }
}

// ═══════════════════════════════════════
// INLINE (cloud variant, model called from the page layer)
// ═══════════════════════════════════════

pub struct InlineBackend {
    analyzer: Arc<Analyzer>,
}

impl InlineBackend {
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        Self { analyzer }
    }
}

#[async_trait]
impl AnalysisBackend for InlineBackend {
    fn name(&self) -> &'static str {
        "inline"
    }

    async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        self.analyzer.analyze(text).await
    }
}
