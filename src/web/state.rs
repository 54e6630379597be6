// src/web/state.rs
// Request-Service state

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::sentiment::Analyzer;

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            analyzer: Arc::new(Analyzer::new(config)),
        }
    }
}
