// src/sentiment/mod.rs
// Sentiment classification: prompt building, reply parsing, orchestration

mod analyzer;
mod parser;
mod prompt;
mod types;

pub use analyzer::Analyzer;
pub use parser::{parse_reply, strip_code_fence};
pub use prompt::{OUTPUT_FIELDS, SYSTEM_PROMPT, build_messages, build_prompt};
pub use types::{AnalysisRequest, AnalysisResponse, AnalysisResult, Intensity};
