// src/ui/page.rs
// Web form handlers: render the form, run an analysis, show the four fields

use askama::Template;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::sentiment::AnalysisResult;
use crate::ui::UiState;

/// Warning shown when the form is submitted without text
pub const EMPTY_TEXT_WARNING: &str = "请先输入要分析的文本！";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    text: String,
    warning: Option<String>,
    error: Option<String>,
    result: Option<ResultView>,
}

/// View model for a successful analysis
struct ResultView {
    polarity: String,
    intensity: String,
    emotion_type: String,
    analysis: String,
}

impl ResultView {
    fn from_result(result: &AnalysisResult) -> Self {
        Self {
            polarity: result.polarity.clone(),
            intensity: result.intensity.to_string(),
            emotion_type: result.emotion_type.clone(),
            analysis: result.analysis.clone(),
        }
    }
}

impl IndexTemplate {
    fn blank() -> Self {
        Self {
            text: String::new(),
            warning: None,
            error: None,
            result: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub text: String,
}

fn render(template: IndexTemplate) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("Template error: {}", e)),
        )
            .into_response(),
    }
}

/// GET / - empty form
pub async fn index() -> Response {
    render(IndexTemplate::blank())
}

/// POST / - analyze the submitted text and render the outcome
pub async fn submit(State(state): State<UiState>, Form(form): Form<AnalyzeForm>) -> Response {
    if form.text.is_empty() {
        return render(IndexTemplate {
            warning: Some(EMPTY_TEXT_WARNING.to_string()),
            ..IndexTemplate::blank()
        });
    }

    let backend = &state.backend;
    info!(backend = backend.name(), text_len = form.text.len(), "Form submitted");

    let template = match backend.analyze(&form.text).await {
        Ok(result) => IndexTemplate {
            result: Some(ResultView::from_result(&result)),
            ..IndexTemplate::blank()
        },
        Err(e) => {
            warn!(backend = backend.name(), kind = e.kind(), error = %e, "Analysis failed");
            IndexTemplate {
                error: Some(backend.describe_error(&e)),
                ..IndexTemplate::blank()
            }
        }
    };

    render(IndexTemplate {
        text: form.text,
        ..template
    })
}
