//! SDP offer/answer exchange with the realtime provider.

use tracing::debug;

use super::{SessionError, SessionResult};

/// POST the local SDP offer and return the provider's SDP answer.
///
/// Authenticated with the ephemeral client secret, never the long-lived
/// API key.
pub async fn exchange_sdp(
    http: &reqwest::Client,
    base_url: &str,
    model: &str,
    client_secret: &str,
    offer_sdp: &str,
) -> SessionResult<String> {
    let url = format!("{base_url}/v1/realtime?model={model}");
    debug!(%model, "posting SDP offer");

    let response = http
        .post(&url)
        .bearer_auth(client_secret)
        .header(reqwest::header::CONTENT_TYPE, "application/sdp")
        .body(offer_sdp.to_string())
        .send()
        .await
        .map_err(SessionError::Handshake)?;

    if !response.status().is_success() {
        return Err(SessionError::HandshakeRejected(response.status()));
    }

    response.text().await.map_err(SessionError::Handshake)
}
