// src/config/env.rs
// Environment-based configuration - single source of truth for env vars

use super::{SecretsFile, ServiceConfig};
use std::path::Path;
use tracing::{debug, info, warn};

/// Model provider API key
pub const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";

/// Completions endpoint override
pub const API_URL_VAR: &str = "DEEPSEEK_API_URL";

impl ServiceConfig {
    /// Load configuration from the environment, falling back to the secrets
    /// file at `secrets_path` for the API key.
    ///
    /// A missing key is not an error here; the provider rejects the call later.
    pub fn from_env(secrets_path: &Path) -> Self {
        info!("Loading environment configuration");
        let secrets = SecretsFile::load(secrets_path);
        Self::resolve(read_var(API_KEY_VAR), read_var(API_URL_VAR), &secrets)
    }

    /// Combine environment values and the secrets file. Environment wins.
    pub(crate) fn resolve(
        env_key: Option<String>,
        env_url: Option<String>,
        secrets: &SecretsFile,
    ) -> Self {
        let api_key = match env_key {
            Some(key) => {
                debug!("API key loaded from environment");
                key
            }
            None => match secrets.deepseek_api_key() {
                Some(key) => {
                    debug!("API key loaded from secrets file");
                    key.to_string()
                }
                None => {
                    warn!("{} is not set - model calls will be rejected by the provider", API_KEY_VAR);
                    String::new()
                }
            },
        };

        let config = Self::new(api_key);
        match env_url {
            Some(url) => {
                info!(endpoint = %url, "Using completions endpoint override");
                config.with_endpoint(url)
            }
            None => config,
        }
    }
}

/// Read a single variable from the environment, filtering empty values
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
