//! Realtime practice-call session.
//!
//! Owns the full lifecycle of one voice conversation with the simulated
//! prospect: minting an ephemeral credential, standing up the media
//! transport and microphone, negotiating SDP with the provider, configuring
//! the session over the event channel, and folding streamed transcript
//! events into an ordered log.
//!
//! Device and media concerns (microphone, speaker, peer transport) sit
//! behind traits so the state machine itself stays host-agnostic and fully
//! testable; HTTP concerns (credential mint, SDP exchange) are concrete.

pub mod client;
pub mod events;
pub mod negotiate;
pub mod status;
pub mod token;
pub mod transcript;
pub mod transport;

use thiserror::Error;

/// Errors that can occur during a practice-call session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Ephemeral credential could not be minted
    #[error("Failed to get session token")]
    TokenFetch(#[source] reqwest::Error),

    /// Credential response did not carry a usable secret
    #[error("Failed to get session token: {0}")]
    TokenMalformed(String),

    /// SDP exchange with the provider failed
    #[error("Failed to handshake with OpenAI")]
    Handshake(#[source] reqwest::Error),

    /// SDP exchange was rejected by the provider
    #[error("Failed to handshake with OpenAI: status {0}")]
    HandshakeRejected(reqwest::StatusCode),

    /// Media transport error
    #[error("Transport error: {0}")]
    Transport(String),

    /// Microphone capture failed
    #[error("Microphone error: {0}")]
    Microphone(String),

    /// Event channel error
    #[error("Event channel error: {0}")]
    Channel(String),

    /// Event payload could not be serialized or parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Operation requires an active connection
    #[error("Not connected")]
    NotConnected,

    /// Provider reported a session-level error
    #[error("Provider error: {0}")]
    Provider(String),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

pub use client::{DisconnectCallback, RealtimeEndpoint, RealtimeSession};
pub use status::{SessionSnapshot, SessionStatus};
pub use transcript::{ConversationItem, SpeakerRole, TranscriptLog};
