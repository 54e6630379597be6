// src/sentiment/prompt.rs
// Classification prompt construction

use crate::llm::Message;

/// System instruction: JSON only, nothing else
pub const SYSTEM_PROMPT: &str =
    "你是一个专业的情感分析助手。请只返回JSON格式的结果，不要包含其他文本。";

/// Keys the model is asked to return, in order
pub const OUTPUT_FIELDS: [&str; 4] = ["polarity", "intensity", "emotion_type", "analysis"];

/// Build the user prompt for `text`.
///
/// The text is interpolated verbatim, without escaping.
pub fn build_prompt(text: &str) -> String {
    format!(
        "请分析以下文本的情感，并给出以下信息：\n\
         1. 情感极性（积极、消极或中性）\n\
         2. 情感强度（1-10分）\n\
         3. 主要情感类型（如：快乐、悲伤、愤怒、恐惧等）\n\
         4. 简短分析（不超过100字）\n\
         \n\
         文本：{}\n\
         \n\
         请以JSON格式返回结果，包含以下字段：\n\
         {}",
        text,
        OUTPUT_FIELDS.join(", ")
    )
}

/// System + user messages for one classification request
pub fn build_messages(text: &str) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(build_prompt(text))]
}
