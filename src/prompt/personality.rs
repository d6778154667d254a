//! Prospect personality table.

/// All recognized personality keys, in table order.
pub const PERSONALITY_KEYS: [&str; 5] = [
    "friendly",
    "neutral",
    "short-tempered",
    "curious",
    "skeptical",
];

/// Personality used when the configured key is unrecognized.
pub const DEFAULT_PERSONALITY: &str = "neutral";

/// The behavior block for a personality key; unknown keys resolve to neutral.
pub fn personality_profile(key: &str) -> &'static str {
    match key {
        "friendly" => {
            r#"
       - VIBE: Warm, cooperative, maybe a bit chatty.
       - AUDIO_STYLE: Upbeat tone. Faster pace when agreeing. Higher pitch variance (expressive).
       - SPEECH PATTERN: Relaxed. Uses "yeah", "uh-huh", "cool". Slightly longer sentences."#
        }
        "short-tempered" => {
            r#"
       - VIBE: Aggressive, rushed, annoyed.
       - AUDIO_STYLE: Fast, clipped, staccato rhythm. Louder volume on objections. Abrupt stops.
       - SPEECH PATTERN: Choppy. "Look, I'm busy", "Get to the point". INTERRUPT OFTEN."#
        }
        "curious" => {
            r#"
       - VIBE: Interested but needs info.
       - AUDIO_STYLE: Inquisitive upward inflection at ends of sentences. Slower pace when absorbing info.
       - SPEECH PATTERN: Lots of questions. "How does that work?", "Wait, say that again?""#
        }
        "skeptical" => {
            r#"
       - VIBE: Distrustful, cold, defensive.
       - AUDIO_STYLE: Slow, deliberate pace. Lower pitch. Draw out vowels when doubting ("Weellll...").
       - SPEECH PATTERN: Doubting. "I don't know...", "Sounds expensive"."#
        }
        // neutral and anything unrecognized
        _ => {
            r#"
       - VIBE: Professional, detached, polite but firm.
       - AUDIO_STYLE: Even, moderate pace. Clear enunciation. Little pitch variation unless annoyed.
       - SPEECH PATTERN: Clear, concise. "Okay", "I see". No emotional excess."#
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_personalities_distinct_and_nonempty() {
        let blocks: Vec<&str> = PERSONALITY_KEYS.iter().map(|k| personality_profile(k)).collect();
        for block in &blocks {
            assert!(!block.trim().is_empty());
        }
        for i in 0..blocks.len() {
            for j in (i + 1)..blocks.len() {
                assert_ne!(blocks[i], blocks[j]);
            }
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_neutral() {
        assert_eq!(
            personality_profile("grumpy-cat"),
            personality_profile(DEFAULT_PERSONALITY)
        );
    }
}
