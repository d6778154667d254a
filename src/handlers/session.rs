//! Ephemeral session credential minting.
//!
//! Proxies session creation to the provider so the long-lived API key
//! never leaves the server. The client receives the provider's session
//! payload, including the short-lived `client_secret` it authenticates
//! the SDP exchange with.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::state::AppState;

/// POST /api/simulation/session
///
/// Creates a realtime session with the configured model and voice and
/// returns the provider response verbatim.
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let Some(api_key) = state.config.openai_api_key.as_deref() else {
        error!("session mint requested but no API key is configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "OpenAI API key not configured" })),
        );
    };

    let body = json!({
        "model": state.config.realtime_model,
        "voice": state.config.realtime_voice,
    });

    let response = state
        .http
        .post(state.config.sessions_url())
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await;

    let response = match response {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "session create request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            );
        }
    };

    if !response.status().is_success() {
        error!(status = %response.status(), "provider rejected session create");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to create OpenAI session" })),
        );
    }

    match response.json::<Value>().await {
        Ok(payload) => {
            info!("minted ephemeral session credential");
            (StatusCode::OK, Json(payload))
        }
        Err(err) => {
            error!(error = %err, "failed to parse provider session response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
        }
    }
}
