// src/web/api.rs
// REST API handlers

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use tracing::debug;

use crate::error::AnalysisError;
use crate::sentiment::{AnalysisRequest, AnalysisResponse};
use crate::web::state::AppState;

/// Message returned by the liveness probe
pub const LIVENESS_MESSAGE: &str = "情感分析API服务正在运行";

// ═══════════════════════════════════════
// HEALTH
// ═══════════════════════════════════════

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "status": "active",
        "message": LIVENESS_MESSAGE,
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ═══════════════════════════════════════
// ANALYSIS
// ═══════════════════════════════════════

/// POST /analyze
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AnalysisError> {
    debug!(text = %req.text, "POST /analyze");
    let result = state.analyzer.analyze(&req.text).await?;
    Ok(Json(AnalysisResponse::success(result)))
}
