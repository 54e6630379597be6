// src/config/file.rs
// Optional TOML secrets file, consulted when the environment has no API key

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Secrets file contents, e.g.
///
/// ```toml
/// DEEPSEEK_API_KEY = "sk-..."
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct SecretsFile {
    #[serde(rename = "DEEPSEEK_API_KEY")]
    pub deepseek_api_key: Option<String>,
}

impl SecretsFile {
    /// Load secrets from `path`. A missing or malformed file yields empty secrets.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Failed to parse secrets file");
                Self::default()
            }),
            Err(_) => {
                debug!(path = %path.display(), "Secrets file not found");
                Self::default()
            }
        }
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The DeepSeek key, if present and non-blank
    pub fn deepseek_api_key(&self) -> Option<&str> {
        self.deepseek_api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
    }
}
