// src/sentiment/analyzer.rs
// Prompt -> model call -> parse, for one piece of text

use super::parser::parse_reply;
use super::prompt::build_messages;
use super::types::AnalysisResult;
use crate::config::ServiceConfig;
use crate::error::{AnalysisError, Result};
use crate::llm::DeepSeekClient;
use tracing::{Span, debug, error, info, instrument};
use uuid::Uuid;

/// Runs sentiment analysis against the model provider.
///
/// Stateless between calls; one instance serves all requests.
pub struct Analyzer {
    client: DeepSeekClient,
}

impl Analyzer {
    pub fn new(config: ServiceConfig) -> Self {
        Self::from_client(DeepSeekClient::new(config))
    }

    pub fn from_client(client: DeepSeekClient) -> Self {
        Self { client }
    }

    /// Analyze `text`. Empty text is rejected before any network call.
    #[instrument(skip(self, text), fields(request_id, text_len = text.len()))]
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        if text.is_empty() {
            return Err(AnalysisError::Input("文本不能为空".into()));
        }

        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());
        info!(request_id = %request_id, "Received analysis request");

        let reply = self.client.complete(&request_id, build_messages(text)).await?;
        debug!(request_id = %request_id, content = %reply, "Model reply");

        let result = parse_reply(&reply).inspect_err(|e| {
            error!(request_id = %request_id, error = %e, "Failed to parse model reply");
        })?;

        debug!(
            request_id = %request_id,
            polarity = %result.polarity,
            intensity = %result.intensity,
            emotion_type = %result.emotion_type,
            "Analysis complete"
        );
        Ok(result)
    }
}
