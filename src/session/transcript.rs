//! Ordered transcript log with streaming merge.
//!
//! Assistant speech arrives as a stream of text deltas keyed by item id,
//! followed by a final event carrying the complete transcript. User speech
//! arrives as a single completed event per item. The log merges both into
//! one append-ordered list: an item's position is fixed by the first event
//! that mentions its id, and later events for the same id update it in
//! place.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Speaker of a transcript item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerRole {
    User,
    Assistant,
}

/// One utterance in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationItem {
    /// Provider-assigned item id; unique per utterance.
    pub id: String,
    pub role: SpeakerRole,
    pub text: String,
    /// False while assistant deltas are still streaming in.
    pub is_final: bool,
    /// When the item first entered the log.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Append-ordered transcript of one session.
#[derive(Debug, Clone, Default)]
pub struct TranscriptLog {
    items: Vec<ConversationItem>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current items in append order.
    pub fn items(&self) -> &[ConversationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Apply a streamed assistant text delta.
    ///
    /// Appends to the existing item for `id`, or starts a new non-final
    /// assistant item at the end of the log if this is the first delta for
    /// that id.
    pub fn apply_assistant_delta(&mut self, id: &str, delta: &str) {
        match self.position(id) {
            Some(index) => self.items[index].text.push_str(delta),
            None => self.items.push(ConversationItem {
                id: id.to_string(),
                role: SpeakerRole::Assistant,
                text: delta.to_string(),
                is_final: false,
                timestamp: OffsetDateTime::now_utc(),
            }),
        }
    }

    /// Mark an assistant item final.
    ///
    /// The accumulated delta text stands; the done event only flips the
    /// flag. A done event for an id the log has never seen is a no-op.
    pub fn finalize_assistant(&mut self, id: &str) {
        if let Some(index) = self.position(id) {
            self.items[index].is_final = true;
        }
    }

    /// Record a completed user utterance.
    ///
    /// Empty or whitespace-only transcripts are dropped, and an id already
    /// present in the log is ignored. Returns whether an item was appended.
    pub fn complete_user(&mut self, id: &str, transcript: &str) -> bool {
        if transcript.trim().is_empty() {
            return false;
        }
        if self.position(id).is_some() {
            return false;
        }
        self.items.push(ConversationItem {
            id: id.to_string(),
            role: SpeakerRole::User,
            text: transcript.to_string(),
            is_final: true,
            timestamp: OffsetDateTime::now_utc(),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_accumulate_in_one_item() {
        let before = OffsetDateTime::now_utc();
        let mut log = TranscriptLog::new();
        log.apply_assistant_delta("item_1", "Hel");
        log.apply_assistant_delta("item_1", "lo the");
        log.apply_assistant_delta("item_1", "re.");
        assert_eq!(log.len(), 1);
        assert_eq!(log.items()[0].text, "Hello there.");
        assert!(!log.items()[0].is_final);
        // Timestamp records first arrival.
        let stamp = log.items()[0].timestamp;
        assert!(stamp >= before && stamp <= OffsetDateTime::now_utc());
    }

    #[test]
    fn test_done_marks_final_without_altering_text() {
        let mut log = TranscriptLog::new();
        log.apply_assistant_delta("item_1", "Hel");
        log.finalize_assistant("item_1");
        assert_eq!(log.items()[0].text, "Hel");
        assert!(log.items()[0].is_final);
    }

    #[test]
    fn test_done_for_unknown_id_is_a_noop() {
        let mut log = TranscriptLog::new();
        log.finalize_assistant("item_9");
        assert!(log.is_empty());
    }

    #[test]
    fn test_interleaved_items_keep_first_seen_order() {
        let mut log = TranscriptLog::new();
        log.complete_user("u1", "Hi, I'm calling about your software.");
        log.apply_assistant_delta("a1", "Uh, ");
        log.complete_user("u2", "Do you have a minute?");
        log.apply_assistant_delta("a1", "who is this?");
        log.finalize_assistant("a1");

        let ids: Vec<&str> = log.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["u1", "a1", "u2"]);
        assert_eq!(log.items()[1].text, "Uh, who is this?");
    }

    #[test]
    fn test_user_completion_dedups_by_id() {
        let mut log = TranscriptLog::new();
        assert!(log.complete_user("u1", "Hello"));
        assert!(!log.complete_user("u1", "Hello again"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.items()[0].text, "Hello");
    }

    #[test]
    fn test_empty_user_transcript_dropped() {
        let mut log = TranscriptLog::new();
        assert!(!log.complete_user("u1", ""));
        assert!(!log.complete_user("u2", "   \n"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_two_assistant_streams_stay_separate() {
        let mut log = TranscriptLog::new();
        log.apply_assistant_delta("a1", "First ");
        log.apply_assistant_delta("a2", "Second ");
        log.apply_assistant_delta("a1", "answer.");
        log.apply_assistant_delta("a2", "answer.");
        assert_eq!(log.len(), 2);
        assert_eq!(log.items()[0].text, "First answer.");
        assert_eq!(log.items()[1].text, "Second answer.");
    }
}
