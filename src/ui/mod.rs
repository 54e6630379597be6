// src/ui/mod.rs
// Presentation-Layer: a single-page web form over an AnalysisBackend

pub mod backend;
pub mod page;

pub use backend::{AnalysisBackend, InlineBackend, RemoteBackend};

use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Web form state
#[derive(Clone)]
pub struct UiState {
    pub backend: Arc<dyn AnalysisBackend>,
}

impl UiState {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Create the web form router
pub fn create_router(state: UiState) -> Router {
    Router::new()
        .route("/", get(page::index).post(page::submit))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AnalysisError, Result};
    use crate::sentiment::{AnalysisResult, Intensity};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// Backend that records calls and returns a canned outcome
    struct StubBackend {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl AnalysisBackend for StubBackend {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn analyze(&self, _text: &str) -> Result<AnalysisResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AnalysisError::Transport {
                    message: "request timed out".into(),
                    timed_out: true,
                });
            }
            Ok(AnalysisResult {
                polarity: "积极".into(),
                intensity: Intensity::from(8),
                emotion_type: "快乐".into(),
                analysis: "<b>开心</b>".into(),
                extra: Default::default(),
            })
        }
    }

    fn app(fail: bool) -> (Router, Arc<StubBackend>) {
        let stub = Arc::new(StubBackend {
            calls: AtomicUsize::new(0),
            fail,
        });
        (create_router(UiState::new(stub.clone())), stub)
    }

    async fn submit(app: Router, body: &'static str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let (app, _) = app(false);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<form"));
        assert!(html.contains("情感分析系统"));
    }

    #[tokio::test]
    async fn test_empty_text_warns_without_calling_backend() {
        let (app, stub) = app(false);
        let (status, html) = submit(app, "text=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(page::EMPTY_TEXT_WARNING));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_field_warns_without_calling_backend() {
        let (app, stub) = app(false);
        let (_, html) = submit(app, "").await;
        assert!(html.contains(page::EMPTY_TEXT_WARNING));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_result_fields_rendered() {
        let (app, stub) = app(false);
        let (status, html) = submit(app, "text=%E5%BC%80%E5%BF%83").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        assert!(html.contains("积极"));
        assert!(html.contains("8/10"));
        assert!(html.contains("快乐"));
        // Model output is escaped, never injected as markup
        assert!(html.contains("&lt;b&gt;开心"));
        assert!(!html.contains("<b>开心"));
        // Submitted text stays in the textarea
        assert!(html.contains("开心</textarea>"));
    }

    #[tokio::test]
    async fn test_failure_rendered_as_error() {
        let (app, stub) = app(true);
        let (status, html) = submit(app, "text=hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        assert!(html.contains("发生错误："));
        assert!(html.contains("request timed out"));
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app(false);
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
