// src/config/mod.rs
// Immutable service configuration, built once at startup and passed explicitly

mod env;
mod file;

pub use file::SecretsFile;

use std::fmt;
use std::time::Duration;

/// DeepSeek chat completions endpoint (OpenAI-compatible)
pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// Model used for every classification request
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Sampling temperature sent with every request
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Bounded wait for the whole model call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default location of the TOML secrets file
pub const DEFAULT_SECRETS_FILE: &str = ".secrets.toml";

/// Everything needed to talk to the model provider.
///
/// Cloned freely; nothing in here changes after startup.
#[derive(Clone)]
pub struct ServiceConfig {
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl ServiceConfig {
    /// Create a config with the given API key and all defaults
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEEPSEEK_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Point the client at a different completions endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// API key stays out of logs
impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &if self.has_api_key() { "<set>" } else { "<missing>" })
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}
