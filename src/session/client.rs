//! Session state machine.
//!
//! Drives one practice call from idle to connected and back: credential
//! mint, media setup, SDP negotiation, event-channel configuration, and
//! teardown. All shared state lives behind `Arc` so the spawned event-loop
//! task and the owning handle observe the same session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::events::{ClientEvent, ServerEvent, SessionConfig};
use super::negotiate::exchange_sdp;
use super::status::{SessionSnapshot, SessionStatus};
use super::token::CredentialIssuer;
use super::transcript::TranscriptLog;
use super::transport::{
    ChannelSignal, EventChannelSender, LocalAudioStream, PlaybackSink, RealtimeTransport,
    TransportFactory,
};
use super::SessionResult;

/// Default realtime API base URL.
pub const DEFAULT_REALTIME_BASE_URL: &str = "https://api.openai.com";

/// Default realtime model for practice calls.
pub const DEFAULT_REALTIME_MODEL: &str = "gpt-4o-realtime-preview-2024-12-17";

/// Default model for user speech transcription.
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Where and how to reach the realtime provider.
#[derive(Debug, Clone)]
pub struct RealtimeEndpoint {
    pub base_url: String,
    pub model: String,
    pub transcription_model: String,
}

impl Default for RealtimeEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REALTIME_BASE_URL.to_string(),
            model: DEFAULT_REALTIME_MODEL.to_string(),
            transcription_model: DEFAULT_TRANSCRIPTION_MODEL.to_string(),
        }
    }
}

/// State shared between the session handle and its event-loop task.
struct Shared {
    status: RwLock<SessionStatus>,
    last_error: RwLock<Option<String>>,
    transcript: RwLock<TranscriptLog>,
    muted: AtomicBool,
    connected: AtomicBool,
    watch_tx: watch::Sender<SessionSnapshot>,
}

impl Shared {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: *self.status.read(),
            error: self.last_error.read().clone(),
            is_muted: self.muted.load(Ordering::SeqCst),
            transcript: self.transcript.read().items().to_vec(),
        }
    }

    fn publish(&self) {
        self.watch_tx.send_replace(self.snapshot());
    }

    fn set_status(&self, status: SessionStatus) {
        *self.status.write() = status;
        self.publish();
    }

    fn set_error(&self, message: String) {
        self.connected.store(false, Ordering::SeqCst);
        *self.last_error.write() = Some(message);
        *self.status.write() = SessionStatus::Error;
        self.publish();
    }
}

/// Live per-connection resources, populated as the connection comes up so
/// a concurrent disconnect can always reach them.
struct LiveResources {
    transport: Arc<dyn RealtimeTransport>,
    mic: Option<Arc<dyn LocalAudioStream>>,
    sink: Option<Arc<dyn PlaybackSink>>,
    event_task: Option<JoinHandle<()>>,
}

/// Callback invoked when a disconnect completes.
pub type DisconnectCallback = Arc<dyn Fn() + Send + Sync>;

/// Handle to one practice-call session.
///
/// Cheap to share; `connect`, `disconnect`, and `toggle_mute` may be called
/// from any task. Repeated `connect` calls while a connection exists or is
/// being established are ignored, and `disconnect` is idempotent.
pub struct RealtimeSession {
    endpoint: RealtimeEndpoint,
    http: reqwest::Client,
    issuer: Arc<dyn CredentialIssuer>,
    factory: Arc<dyn TransportFactory>,
    shared: Arc<Shared>,
    connect_in_flight: AtomicBool,
    live: Mutex<Option<LiveResources>>,
    on_disconnect: Mutex<Option<DisconnectCallback>>,
}

impl RealtimeSession {
    pub fn new(
        endpoint: RealtimeEndpoint,
        http: reqwest::Client,
        issuer: Arc<dyn CredentialIssuer>,
        factory: Arc<dyn TransportFactory>,
    ) -> Self {
        let (watch_tx, _watch_rx) = watch::channel(SessionSnapshot::default());
        Self {
            endpoint,
            http,
            issuer,
            factory,
            shared: Arc::new(Shared {
                status: RwLock::new(SessionStatus::Idle),
                last_error: RwLock::new(None),
                transcript: RwLock::new(TranscriptLog::new()),
                muted: AtomicBool::new(false),
                connected: AtomicBool::new(false),
                watch_tx,
            }),
            connect_in_flight: AtomicBool::new(false),
            live: Mutex::new(None),
            on_disconnect: Mutex::new(None),
        }
    }

    /// Register a callback invoked after every completed disconnect.
    pub fn on_disconnect(&self, callback: DisconnectCallback) {
        *self.on_disconnect.lock() = Some(callback);
    }

    pub fn status(&self) -> SessionStatus {
        *self.shared.status.read()
    }

    pub fn last_error(&self) -> Option<String> {
        self.shared.last_error.read().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.shared.connected.load(Ordering::SeqCst)
    }

    pub fn is_muted(&self) -> bool {
        self.shared.muted.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.shared.snapshot()
    }

    /// Watch channel publishing a fresh snapshot on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.shared.watch_tx.subscribe()
    }

    /// Establish the session with the given compiled instructions.
    ///
    /// Returns `Ok(())` without doing anything if a connection already
    /// exists or another connect is in flight. On failure, tears down any
    /// partially-built resources and leaves the session in the error state.
    pub async fn connect(&self, instructions: &str) -> SessionResult<()> {
        {
            let status = *self.shared.status.read();
            if matches!(status, SessionStatus::Connecting | SessionStatus::Connected) {
                debug!(%status, "connect ignored, session already active");
                return Ok(());
            }
        }
        if self
            .connect_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("connect ignored, another attempt in flight");
            return Ok(());
        }

        let result = self.establish(instructions).await;
        self.connect_in_flight.store(false, Ordering::SeqCst);

        if let Err(err) = &result {
            warn!(error = %err, "session connect failed");
            self.teardown().await;
            self.shared.set_error(err.to_string());
        }
        result
    }

    async fn establish(&self, instructions: &str) -> SessionResult<()> {
        *self.shared.last_error.write() = None;
        // Fresh call, fresh transcript. Disconnect leaves the transcript in
        // place so the post-call review can read it.
        *self.shared.transcript.write() = TranscriptLog::new();
        self.shared.set_status(SessionStatus::Connecting);
        info!("starting practice-call session");

        let client_secret = self.issuer.mint().await?;

        let transport = self.factory.create_transport().await?;
        *self.live.lock() = Some(LiveResources {
            transport: Arc::clone(&transport),
            mic: None,
            sink: None,
            event_task: None,
        });

        let sink = self.factory.playback_sink();
        sink.start();
        if let Some(live) = self.live.lock().as_mut() {
            live.sink = Some(Arc::clone(&sink));
        }

        let mic = self.factory.microphone().capture().await?;
        transport.publish_microphone(Arc::clone(&mic)).await?;
        if let Some(live) = self.live.lock().as_mut() {
            live.mic = Some(Arc::clone(&mic));
        }

        let (sender, signals) = transport.open_event_channel().await?;

        let offer = transport.create_offer().await?;
        transport.set_local_description(&offer).await?;

        let answer = exchange_sdp(
            &self.http,
            &self.endpoint.base_url,
            &self.endpoint.model,
            &client_secret,
            &offer,
        )
        .await?;

        // A disconnect may have raced the HTTP round-trip; if it closed the
        // transport, it already owns cleanup and this attempt just stops.
        if transport.is_closed() {
            debug!("transport closed during negotiation, abandoning connect");
            return Ok(());
        }
        transport.set_remote_description(&answer).await?;

        let config = SessionConfig::for_practice_call(
            instructions.to_string(),
            &self.endpoint.transcription_model,
        );
        let task = tokio::spawn(run_event_loop(
            Arc::clone(&self.shared),
            sender,
            signals,
            config,
        ));

        let mut guard = self.live.lock();
        match guard.as_mut() {
            Some(live) => live.event_task = Some(task),
            // Disconnected between the race check and here.
            None => task.abort(),
        }
        Ok(())
    }

    /// End the call and release all resources. Safe to call repeatedly and
    /// in any state, including mid-connect.
    pub async fn disconnect(&self) {
        self.teardown().await;
        self.shared.connected.store(false, Ordering::SeqCst);
        self.shared.muted.store(false, Ordering::SeqCst);
        self.shared.set_status(SessionStatus::Ended);
        info!("session disconnected");

        let callback = self.on_disconnect.lock().clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    async fn teardown(&self) {
        let live = self.live.lock().take();
        if let Some(live) = live {
            if let Some(task) = live.event_task {
                task.abort();
            }
            live.transport.close().await;
            if let Some(mic) = live.mic {
                mic.stop();
            }
            if let Some(sink) = live.sink {
                sink.stop();
            }
        }
    }

    /// Flip the microphone mute state; returns the muted flag.
    ///
    /// Applies to every audio track of the captured stream. Without a live
    /// microphone there is nothing to mute, so the call leaves the flag
    /// untouched and returns it as-is.
    pub fn toggle_mute(&self) -> bool {
        let tracks = {
            let guard = self.live.lock();
            match guard.as_ref().and_then(|live| live.mic.as_ref()) {
                Some(mic) => mic.audio_tracks(),
                None => {
                    debug!("mute toggle ignored, no live microphone");
                    return self.shared.muted.load(Ordering::SeqCst);
                }
            }
        };
        let now_muted = !self.shared.muted.load(Ordering::SeqCst);
        for track in tracks {
            track.set_enabled(!now_muted);
        }
        self.shared.muted.store(now_muted, Ordering::SeqCst);
        self.shared.publish();
        debug!(muted = now_muted, "microphone mute toggled");
        now_muted
    }

    /// Transcript items accumulated so far, in append order. Preserved
    /// across disconnects so the call review survives the session.
    pub fn transcript(&self) -> Vec<super::transcript::ConversationItem> {
        self.shared.transcript.read().items().to_vec()
    }
}

/// Event-channel loop for one connection.
///
/// Configures the session when the channel opens, then folds provider
/// events into the shared transcript until the channel closes.
async fn run_event_loop(
    shared: Arc<Shared>,
    sender: Arc<dyn EventChannelSender>,
    mut signals: mpsc::Receiver<ChannelSignal>,
    config: SessionConfig,
) {
    while let Some(signal) = signals.recv().await {
        match signal {
            ChannelSignal::Open => {
                let event = ClientEvent::SessionUpdate {
                    session: config.clone(),
                };
                let payload = match serde_json::to_string(&event) {
                    Ok(payload) => payload,
                    Err(err) => {
                        shared.set_error(format!("Serialization error: {err}"));
                        break;
                    }
                };
                if let Err(err) = sender.send(payload).await {
                    shared.set_error(err.to_string());
                    break;
                }
                shared.connected.store(true, Ordering::SeqCst);
                shared.set_status(SessionStatus::Connected);
                info!("event channel open, session configured");
            }
            ChannelSignal::Message(raw) => match serde_json::from_str::<ServerEvent>(&raw) {
                Ok(event) => apply_server_event(&shared, event),
                Err(err) => debug!(error = %err, "ignoring unparseable event"),
            },
        }
    }
    debug!("event channel closed");
}

fn apply_server_event(shared: &Shared, event: ServerEvent) {
    match event {
        ServerEvent::ResponseAudioTranscriptDelta { item_id, delta } => {
            shared
                .transcript
                .write()
                .apply_assistant_delta(&item_id, &delta);
            shared.publish();
        }
        // The done event's transcript payload is informational; the
        // accumulated deltas are the text of record.
        ServerEvent::ResponseAudioTranscriptDone { item_id, .. } => {
            shared.transcript.write().finalize_assistant(&item_id);
            shared.publish();
        }
        ServerEvent::InputAudioTranscriptionCompleted {
            item_id,
            transcript,
        } => {
            if shared.transcript.write().complete_user(&item_id, &transcript) {
                shared.publish();
            }
        }
        // Provider error events can be recoverable warnings; log them and
        // keep the session running.
        ServerEvent::Error { error } => {
            let message = error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "unknown provider error".to_string());
            warn!(%message, "provider reported error");
        }
        ServerEvent::Unknown => {}
    }
}
