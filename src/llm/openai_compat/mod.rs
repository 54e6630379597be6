// src/llm/openai_compat/mod.rs
// OpenAI-compatible request/response shapes used by the DeepSeek endpoint

mod request;
mod response;

pub use request::{ChatRequest, Message};
pub use response::parse_chat_response;
