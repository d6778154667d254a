//! Tests for the credential-mint endpoint and the HTTP session plumbing.

use std::net::SocketAddr;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dialcoach::session::negotiate::exchange_sdp;
use dialcoach::session::token::{CredentialIssuer, HttpCredentialIssuer};
use dialcoach::session::SessionError;
use dialcoach::{routes, AppConfig, AppState};

/// Spin up the app bound to an ephemeral port, returning its address.
async fn spawn_app(config: AppConfig) -> SocketAddr {
    let state = AppState::new(config);
    let app = routes::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn config_for(provider: &MockServer) -> AppConfig {
    AppConfig {
        openai_api_key: Some("sk-test-key".to_string()),
        realtime_base_url: provider.uri(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_mint_returns_provider_payload() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/realtime/sessions"))
        .and(header("authorization", "Bearer sk-test-key"))
        .and(body_json(json!({
            "model": "gpt-4o-realtime-preview-2024-12-17",
            "voice": "verse",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "sess_123",
            "client_secret": { "value": "ek_abc", "expires_at": 1735689600 },
        })))
        .expect(1)
        .mount(&provider)
        .await;

    let addr = spawn_app(config_for(&provider)).await;
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/simulation/session"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["client_secret"]["value"], "ek_abc");
    assert_eq!(body["id"], "sess_123");
}

#[tokio::test]
async fn test_mint_without_api_key_is_rejected() {
    let addr = spawn_app(AppConfig::default()).await;
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/simulation/session"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "OpenAI API key not configured");
}

#[tokio::test]
async fn test_mint_surfaces_provider_rejection() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/realtime/sessions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "invalid key" },
        })))
        .mount(&provider)
        .await;

    let addr = spawn_app(config_for(&provider)).await;
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/simulation/session"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to create OpenAI session");
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = spawn_app(AppConfig::default()).await;
    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_http_issuer_extracts_client_secret() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/realtime/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "client_secret": { "value": "ek_abc" },
        })))
        .mount(&provider)
        .await;

    let addr = spawn_app(config_for(&provider)).await;
    let issuer = HttpCredentialIssuer::new(
        reqwest::Client::new(),
        format!("http://{addr}/api/simulation/session"),
    );
    assert_eq!(issuer.mint().await.unwrap(), "ek_abc");
}

#[tokio::test]
async fn test_http_issuer_reports_mint_failure() {
    let addr = spawn_app(AppConfig::default()).await;
    let issuer = HttpCredentialIssuer::new(
        reqwest::Client::new(),
        format!("http://{addr}/api/simulation/session"),
    );
    let err = issuer.mint().await.unwrap_err();
    assert!(
        err.to_string().contains("Failed to get session token"),
        "{err}"
    );
}

#[tokio::test]
async fn test_exchange_sdp_posts_offer_and_returns_answer() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/realtime"))
        .and(header("authorization", "Bearer ek_abc"))
        .and(header("content-type", "application/sdp"))
        .respond_with(ResponseTemplate::new(200).set_body_string("v=0\r\no=- answer\r\n"))
        .expect(1)
        .mount(&provider)
        .await;

    let answer = exchange_sdp(
        &reqwest::Client::new(),
        &provider.uri(),
        "gpt-4o-realtime-preview-2024-12-17",
        "ek_abc",
        "v=0\r\no=- offer\r\n",
    )
    .await
    .unwrap();
    assert_eq!(answer, "v=0\r\no=- answer\r\n");
}

#[tokio::test]
async fn test_exchange_sdp_rejection_is_a_handshake_error() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/realtime"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&provider)
        .await;

    let err = exchange_sdp(
        &reqwest::Client::new(),
        &provider.uri(),
        "gpt-4o-realtime-preview-2024-12-17",
        "ek_abc",
        "v=0\r\n",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, SessionError::HandshakeRejected(_)));
    assert!(
        err.to_string().contains("Failed to handshake with OpenAI"),
        "{err}"
    );
}
