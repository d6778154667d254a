//! Ephemeral credential minting.
//!
//! The long-lived provider API key never reaches the session client.
//! Instead a trusted backend mints a short-lived client secret per call,
//! and the session authenticates the SDP exchange with that.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{SessionError, SessionResult};

/// Source of per-call ephemeral credentials.
#[async_trait]
pub trait CredentialIssuer: Send + Sync {
    /// Mint a fresh client secret for one session.
    async fn mint(&self) -> SessionResult<String>;
}

/// Relevant part of the credential response.
#[derive(Debug, Deserialize)]
struct CredentialResponse {
    client_secret: ClientSecret,
}

#[derive(Debug, Deserialize)]
struct ClientSecret {
    value: String,
}

/// Issuer that POSTs to the backend token-mint endpoint.
pub struct HttpCredentialIssuer {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpCredentialIssuer {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CredentialIssuer for HttpCredentialIssuer {
    async fn mint(&self) -> SessionResult<String> {
        debug!(endpoint = %self.endpoint, "minting ephemeral session credential");

        let response = self
            .http
            .post(&self.endpoint)
            .send()
            .await
            .map_err(SessionError::TokenFetch)?;

        if !response.status().is_success() {
            return Err(SessionError::TokenMalformed(format!(
                "status {}",
                response.status()
            )));
        }

        let body: CredentialResponse = response
            .json()
            .await
            .map_err(|err| SessionError::TokenMalformed(err.to_string()))?;

        if body.client_secret.value.is_empty() {
            return Err(SessionError::TokenMalformed(
                "empty client secret".to_string(),
            ));
        }

        Ok(body.client_secret.value)
    }
}
