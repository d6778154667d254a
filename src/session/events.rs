//! Wire events exchanged over the session event channel.
//!
//! JSON messages tagged by a `type` field, matching the provider's realtime
//! protocol. Only the events the session acts on are modeled; everything
//! else deserializes into [`ServerEvent::Unknown`] and is ignored.

use serde::{Deserialize, Serialize};

/// Events sent from the client to the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    /// Configure the session after the event channel opens.
    #[serde(rename = "session.update")]
    SessionUpdate { session: SessionConfig },
}

/// Session configuration payload for `session.update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub modalities: Vec<String>,
    /// Compiled system prompt driving the prospect's behavior.
    pub instructions: String,
    pub input_audio_transcription: InputAudioTranscription,
}

/// Input transcription settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputAudioTranscription {
    pub model: String,
}

impl SessionConfig {
    /// Standard configuration for a practice call: text plus audio output,
    /// user speech transcribed with the given model.
    pub fn for_practice_call(instructions: String, transcription_model: &str) -> Self {
        Self {
            modalities: vec!["text".to_string(), "audio".to_string()],
            instructions,
            input_audio_transcription: InputAudioTranscription {
                model: transcription_model.to_string(),
            },
        }
    }
}

/// Events received from the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    /// Incremental assistant speech transcript.
    #[serde(rename = "response.audio_transcript.delta")]
    ResponseAudioTranscriptDelta {
        item_id: String,
        delta: String,
    },

    /// Assistant utterance finished; carries the full transcript.
    #[serde(rename = "response.audio_transcript.done")]
    ResponseAudioTranscriptDone {
        item_id: String,
        #[serde(default)]
        transcript: Option<String>,
    },

    /// User speech transcription completed for one utterance.
    #[serde(rename = "conversation.item.input_audio_transcription.completed")]
    InputAudioTranscriptionCompleted {
        item_id: String,
        #[serde(default)]
        transcript: String,
    },

    /// Provider-reported error.
    #[serde(rename = "error")]
    Error {
        #[serde(default)]
        error: Option<ErrorDetails>,
    },

    /// Any event type the session does not act on.
    #[serde(other)]
    Unknown,
}

/// Details of a provider error event.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetails {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_update_serialization() {
        let event = ClientEvent::SessionUpdate {
            session: SessionConfig::for_practice_call("Be brief.".to_string(), "whisper-1"),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "session.update");
        assert_eq!(json["session"]["modalities"][0], "text");
        assert_eq!(json["session"]["modalities"][1], "audio");
        assert_eq!(json["session"]["instructions"], "Be brief.");
        assert_eq!(
            json["session"]["input_audio_transcription"]["model"],
            "whisper-1"
        );
    }

    #[test]
    fn test_parse_transcript_delta() {
        let event: ServerEvent = serde_json::from_str(
            r#"{"type":"response.audio_transcript.delta","item_id":"item_1","delta":"Hel"}"#,
        )
        .unwrap();
        match event {
            ServerEvent::ResponseAudioTranscriptDelta { item_id, delta } => {
                assert_eq!(item_id, "item_1");
                assert_eq!(delta, "Hel");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_transcript_done_without_transcript() {
        let event: ServerEvent = serde_json::from_str(
            r#"{"type":"response.audio_transcript.done","item_id":"item_1"}"#,
        )
        .unwrap();
        match event {
            ServerEvent::ResponseAudioTranscriptDone { item_id, transcript } => {
                assert_eq!(item_id, "item_1");
                assert!(transcript.is_none());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_user_transcription_completed() {
        let event: ServerEvent = serde_json::from_str(
            r#"{"type":"conversation.item.input_audio_transcription.completed","item_id":"u1","transcript":"Hello there"}"#,
        )
        .unwrap();
        match event {
            ServerEvent::InputAudioTranscriptionCompleted { item_id, transcript } => {
                assert_eq!(item_id, "u1");
                assert_eq!(transcript, "Hello there");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_event() {
        let event: ServerEvent = serde_json::from_str(
            r#"{"type":"error","error":{"type":"invalid_request_error","message":"bad"}}"#,
        )
        .unwrap();
        match event {
            ServerEvent::Error { error } => {
                let error = error.unwrap();
                assert_eq!(error.message.as_deref(), Some("bad"));
                assert_eq!(error.error_type.as_deref(), Some("invalid_request_error"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_event_types_are_ignored() {
        for raw in [
            r#"{"type":"response.done","response":{}}"#,
            r#"{"type":"input_audio_buffer.speech_started","audio_start_ms":100}"#,
            r#"{"type":"session.created","session":{"id":"sess_1"}}"#,
        ] {
            let event: ServerEvent = serde_json::from_str(raw).unwrap();
            assert!(matches!(event, ServerEvent::Unknown), "raw: {raw}");
        }
    }
}
