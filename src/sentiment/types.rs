// src/sentiment/types.rs
// Request/response types shared by the API, the web form and the client

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Body of `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// The model's classification of one piece of text.
///
/// Values are taken as the model produced them: `polarity` is not checked
/// against a label set and `intensity` is not range-checked. Keys beyond the
/// four required ones are kept in `extra` and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub polarity: String,
    pub intensity: Intensity,
    pub emotion_type: String,
    pub analysis: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Model-reported sentiment strength, nominally 1-10.
///
/// Opaque JSON: usually a number, sometimes a string like `"8"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intensity(pub Value);

impl From<i64> for Intensity {
    fn from(v: i64) -> Self {
        Intensity(Value::from(v))
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Successful `POST /analyze` response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    pub result: AnalysisResult,
}

impl AnalysisResponse {
    pub fn success(result: AnalysisResult) -> Self {
        Self {
            status: "success".to_string(),
            result,
        }
    }
}
