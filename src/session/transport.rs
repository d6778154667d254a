//! Media transport seams.
//!
//! The session state machine never talks to a concrete peer connection or
//! audio device. It drives these traits, and the host wires in a real
//! implementation (a WebRTC stack, an OS capture API) or, in tests, a mock.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::SessionResult;

/// One audio track in a captured stream; mute state lives here.
pub trait AudioTrack: Send + Sync {
    fn set_enabled(&self, enabled: bool);
    fn is_enabled(&self) -> bool;
}

/// A live local audio stream (microphone capture).
pub trait LocalAudioStream: Send + Sync {
    fn audio_tracks(&self) -> Vec<Arc<dyn AudioTrack>>;
    /// Stop capture and release the device.
    fn stop(&self);
}

/// Microphone acquisition.
#[async_trait]
pub trait MicrophoneCapture: Send + Sync {
    /// Request a live capture stream. Fails if the device is unavailable or
    /// permission is denied.
    async fn capture(&self) -> SessionResult<Arc<dyn LocalAudioStream>>;
}

/// Sink that renders the prospect's remote audio.
pub trait PlaybackSink: Send + Sync {
    /// Begin rendering remote audio as the transport receives it.
    fn start(&self);
    /// Stop playback and release the output.
    fn stop(&self);
}

/// Signals surfaced by the event channel.
#[derive(Debug, Clone)]
pub enum ChannelSignal {
    /// Channel is open; the session may now be configured.
    Open,
    /// A raw JSON event payload from the provider.
    Message(String),
}

/// Sending half of the event channel.
#[async_trait]
pub trait EventChannelSender: Send + Sync {
    async fn send(&self, payload: String) -> SessionResult<()>;
}

/// Peer media transport for one session.
///
/// Mirrors the offer/answer negotiation shape: publish local media, open
/// the event channel, produce an offer, then apply the remote answer. The
/// transport must tolerate `close` at any point, and report it through
/// `is_closed` so an in-flight negotiation can bail out.
#[async_trait]
pub trait RealtimeTransport: Send + Sync {
    /// Attach the captured microphone stream to the outgoing media.
    async fn publish_microphone(&self, stream: Arc<dyn LocalAudioStream>) -> SessionResult<()>;

    /// Open the ordered event channel. Returns the sending half and a
    /// receiver for channel signals.
    async fn open_event_channel(
        &self,
    ) -> SessionResult<(Arc<dyn EventChannelSender>, mpsc::Receiver<ChannelSignal>)>;

    /// Create the local SDP offer.
    async fn create_offer(&self) -> SessionResult<String>;

    async fn set_local_description(&self, sdp: &str) -> SessionResult<()>;

    async fn set_remote_description(&self, sdp: &str) -> SessionResult<()>;

    /// Whether the transport has been closed. Checked after negotiation
    /// round-trips so a disconnect that raced the handshake wins.
    fn is_closed(&self) -> bool;

    /// Tear down the transport. Must be safe to call more than once.
    async fn close(&self);
}

/// Factory assembling the media capabilities for one connection attempt.
#[async_trait]
pub trait TransportFactory: Send + Sync {
    async fn create_transport(&self) -> SessionResult<Arc<dyn RealtimeTransport>>;

    fn microphone(&self) -> Arc<dyn MicrophoneCapture>;

    fn playback_sink(&self) -> Arc<dyn PlaybackSink>;
}
