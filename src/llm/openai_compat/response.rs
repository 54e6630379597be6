// src/llm/openai_compat/response.rs
// OpenAI-compatible chat response parsing

use crate::error::{AnalysisError, Result};
use serde::Deserialize;

/// Non-streaming chat response (OpenAI-compatible format)
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ResponseChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Extract `choices[0].message.content` from a completions response body.
///
/// An envelope that is not JSON, or has no content, is a parse failure
/// carrying the whole body.
pub fn parse_chat_response(response_body: &str) -> Result<String> {
    let data: ChatResponse = serde_json::from_str(response_body)
        .map_err(|e| AnalysisError::parse(e, response_body))?;

    data.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| {
            AnalysisError::parse("missing choices[0].message.content", response_body)
        })
}
