// src/llm/mod.rs
// LLM inference client (DeepSeek, OpenAI-compatible chat completions)

mod deepseek;
mod http_client;
mod openai_compat;

pub use deepseek::DeepSeekClient;
pub use http_client::LlmHttpClient;
pub use openai_compat::{ChatRequest, Message, parse_chat_response};
