// src/lib.rs
// moodscope - sentiment analysis backed by an external LLM

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod llm;
pub mod sentiment;
pub mod ui;
pub mod web;

pub use error::{AnalysisError, Result};
