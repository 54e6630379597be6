// src/error.rs
// Closed error taxonomy for a single sentiment analysis request

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Everything that can go wrong while analyzing one piece of text.
///
/// Callers branch on the variant (or on [`AnalysisError::kind`]) instead of
/// matching message substrings.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The model provider answered with a non-200 status.
    #[error("API调用失败 ({status}): {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The call never produced a response (timeout, refused connection, broken body).
    #[error("处理请求时发生错误: {message}")]
    Transport { message: String, timed_out: bool },

    /// The model's reply could not be turned into an analysis result.
    #[error("JSON解析错误: {detail}\n原始响应: {raw}")]
    Parse { detail: String, raw: String },

    /// The caller supplied unusable input; no network call was made.
    #[error("输入无效: {0}")]
    Input(String),
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl AnalysisError {
    /// Stable machine-readable tag for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::UpstreamStatus { .. } => "upstream_status",
            AnalysisError::Transport { .. } => "transport",
            AnalysisError::Parse { .. } => "parse",
            AnalysisError::Input(_) => "input",
        }
    }

    /// HTTP status reported to API clients.
    ///
    /// Upstream failures keep the provider's status so a 429 stays a 429.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AnalysisError::Transport { .. } | AnalysisError::Parse { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AnalysisError::Input(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, AnalysisError::Transport { timed_out: true, .. })
    }

    pub(crate) fn parse(detail: impl ToString, raw: impl Into<String>) -> Self {
        AnalysisError::Parse {
            detail: detail.to_string(),
            raw: raw.into(),
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        let message = if timed_out {
            format!("请求超时 (timed out): {}", err)
        } else {
            err.to_string()
        };
        AnalysisError::Transport { message, timed_out }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AnalysisError::Input(_) => warn!(kind = self.kind(), "{}", self),
            _ => error!(kind = self.kind(), status = status.as_u16(), "{}", self),
        }

        let body = json!({
            "detail": self.to_string(),
            "kind": self.kind(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Display
    // ============================================================================

    #[test]
    fn test_upstream_status_display_keeps_body() {
        let err = AnalysisError::UpstreamStatus {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API调用失败 (429): rate limited");
    }

    #[test]
    fn test_parse_display_includes_raw_text() {
        let err = AnalysisError::parse("expected value at line 1 column 1", "not json at all");
        let msg = err.to_string();
        assert!(msg.contains("JSON解析错误"));
        assert!(msg.contains("原始响应: not json at all"));
        assert!(msg.contains("expected value"));
        assert!(msg.contains("not json at all"));
    }

    #[test]
    fn test_input_display() {
        let err = AnalysisError::Input("文本不能为空".into());
        assert_eq!(err.to_string(), "输入无效: 文本不能为空");
    }

    // ============================================================================
    // kind / status_code
    // ============================================================================

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            AnalysisError::UpstreamStatus { status: 500, body: String::new() }.kind(),
            AnalysisError::Transport { message: "x".into(), timed_out: true }.kind(),
            AnalysisError::parse("x", "y").kind(),
            AnalysisError::Input("x".into()).kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_upstream_status_code_passthrough() {
        let err = AnalysisError::UpstreamStatus { status: 429, body: "rate limited".into() };
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);

        let err = AnalysisError::UpstreamStatus { status: 401, body: String::new() };
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_upstream_status_maps_to_bad_gateway() {
        let err = AnalysisError::UpstreamStatus { status: 42, body: String::new() };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_local_failures_are_internal_errors() {
        let transport = AnalysisError::Transport { message: "refused".into(), timed_out: false };
        assert_eq!(transport.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AnalysisError::parse("x", "y").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AnalysisError::Input("x".into()).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_is_timeout() {
        assert!(AnalysisError::Transport { message: "t".into(), timed_out: true }.is_timeout());
        assert!(!AnalysisError::Transport { message: "t".into(), timed_out: false }.is_timeout());
        assert!(!AnalysisError::parse("x", "y").is_timeout());
    }

    // ============================================================================
    // IntoResponse
    // ============================================================================

    #[tokio::test]
    async fn test_into_response_body() {
        let err = AnalysisError::UpstreamStatus { status: 429, body: "rate limited".into() };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 429);
        assert_eq!(body["kind"], "upstream_status");
        assert!(body["detail"].as_str().unwrap().contains("rate limited"));
    }
}
