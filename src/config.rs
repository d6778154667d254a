//! Server configuration.
//!
//! Loaded from environment variables (with `.env` support via dotenvy in
//! the binary). Every setting has a default except the provider API key,
//! which stays optional so the prompt tooling works without one; the
//! token-mint endpoint rejects requests until it is set.

use std::env;

use thiserror::Error;

use crate::session::client::{
    DEFAULT_REALTIME_BASE_URL, DEFAULT_REALTIME_MODEL, DEFAULT_TRANSCRIPTION_MODEL,
};

/// Default voice for the simulated prospect.
pub const DEFAULT_REALTIME_VOICE: &str = "verse";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    /// Long-lived provider API key; only ever used server-side to mint
    /// ephemeral session credentials.
    pub openai_api_key: Option<String>,

    pub realtime_base_url: String,
    pub realtime_model: String,
    pub realtime_voice: String,
    pub transcription_model: String,

    /// Comma-separated allowed CORS origins, or `*` for any. Unset means
    /// same-origin only.
    pub cors_allowed_origins: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            openai_api_key: None,
            realtime_base_url: DEFAULT_REALTIME_BASE_URL.to_string(),
            realtime_model: DEFAULT_REALTIME_MODEL.to_string(),
            realtime_voice: DEFAULT_REALTIME_VOICE.to_string(),
            transcription_model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
            cors_allowed_origins: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Ok(host) = env::var("DIALCOACH_HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Ok(port) = env::var("DIALCOACH_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                name: "DIALCOACH_PORT".to_string(),
                value: port.clone(),
            })?;
        }
        config.openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        if let Ok(url) = env::var("DIALCOACH_REALTIME_BASE_URL") {
            if !url.is_empty() {
                config.realtime_base_url = url.trim_end_matches('/').to_string();
            }
        }
        if let Ok(model) = env::var("DIALCOACH_REALTIME_MODEL") {
            if !model.is_empty() {
                config.realtime_model = model;
            }
        }
        if let Ok(voice) = env::var("DIALCOACH_REALTIME_VOICE") {
            if !voice.is_empty() {
                config.realtime_voice = voice;
            }
        }
        if let Ok(model) = env::var("DIALCOACH_TRANSCRIPTION_MODEL") {
            if !model.is_empty() {
                config.transcription_model = model;
            }
        }
        config.cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .filter(|v| !v.is_empty());

        Ok(config)
    }

    /// Socket address string for the listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Provider endpoint for creating realtime sessions.
    pub fn sessions_url(&self) -> String {
        format!("{}/v1/realtime/sessions", self.realtime_base_url)
    }
}
