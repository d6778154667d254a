//! Session status and observable snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::transcript::ConversationItem;

/// Lifecycle status of a practice-call session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// No connection, ready to start
    #[default]
    Idle,
    /// Connection attempt in progress
    Connecting,
    /// Event channel open and session configured
    Connected,
    /// Call ended by an explicit disconnect
    Ended,
    /// Last connection attempt failed
    Error,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Idle => write!(f, "idle"),
            SessionStatus::Connecting => write!(f, "connecting"),
            SessionStatus::Connected => write!(f, "connected"),
            SessionStatus::Ended => write!(f, "ended"),
            SessionStatus::Error => write!(f, "error"),
        }
    }
}

/// Point-in-time view of a session, published to observers on every
/// state mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    /// Message for the most recent failure; cleared when a new connection
    /// attempt starts.
    pub error: Option<String>,
    pub is_muted: bool,
    pub transcript: Vec<ConversationItem>,
}
