//! Shared application state.

use std::sync::Arc;

use crate::config::AppConfig;

/// State shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Shared HTTP client; reused across requests for connection pooling.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}
