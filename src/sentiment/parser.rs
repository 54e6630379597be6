// src/sentiment/parser.rs
// Recover an AnalysisResult from the model's free-text reply

use super::types::AnalysisResult;
use crate::error::{AnalysisError, Result};

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Strip a leading fence opener (```` ```json ```` or ```` ``` ````) and a
/// trailing ```` ``` ````, trimming whitespace around both.
///
/// Repeats until nothing changes, so stripping twice is the same as once.
/// Fences inside the payload are left alone.
pub fn strip_code_fence(reply: &str) -> &str {
    let mut current = reply.trim();
    loop {
        let opened = current
            .strip_prefix(JSON_FENCE)
            .or_else(|| current.strip_prefix(FENCE))
            .unwrap_or(current);
        let next = opened.strip_suffix(FENCE).unwrap_or(opened).trim();

        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

/// Parse the model's reply into an [`AnalysisResult`].
///
/// All four keys must be present; values are not coerced. On failure the
/// error carries the post-strip text verbatim.
pub fn parse_reply(reply: &str) -> Result<AnalysisResult> {
    let cleaned = strip_code_fence(reply);
    serde_json::from_str(cleaned).map_err(|e| AnalysisError::parse(e, cleaned))
}
