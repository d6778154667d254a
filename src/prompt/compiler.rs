//! System-prompt synthesis.
//!
//! Compiles a [`SimulationSettings`] record into the full natural-language
//! behavior specification sent to the realtime model as session instructions.
//! Pure and deterministic: identical settings always produce byte-identical
//! output, and every absent optional field has a documented default.

use super::behavior::PROSPECT_BEHAVIOR_LAYER;
use super::personality::personality_profile;
use super::scenario::{opening_line, scenario_context, DEFAULT_SCENARIO};
use super::settings::{PackedGoals, SimulationSettings};

/// Opening line forced for scheduled meetings, regardless of what the
/// scenario table says. A booked prospect never answers with a business
/// greeting.
const SCHEDULED_MEETING_OPENING: &str =
    r#""Hello?" or "Hey, is this the person I was supposed to talk to?""#;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Compile the system prompt for one practice call.
pub fn compile(settings: &SimulationSettings) -> String {
    let packed = settings
        .goals
        .as_deref()
        .map(PackedGoals::parse)
        .unwrap_or_default();

    // Dedicated columns win over the legacy packed segments.
    let scenario = non_empty(&settings.scenario)
        .map(str::to_string)
        .or(packed.scenario)
        .unwrap_or_else(|| DEFAULT_SCENARIO.to_string());

    let prospect_details = non_empty(&settings.prospect_details)
        .map(str::to_string)
        .or(packed.details)
        .unwrap_or_default();

    let user_goals = packed
        .context
        .or(packed.plain_context)
        .unwrap_or_default();

    let scenario_block = scenario_context(&scenario, &settings.product_name);
    let personality_block = personality_profile(&settings.prospect_personality);

    let additional_context = if user_goals.trim().is_empty() {
        String::new()
    } else {
        format!("\nUSER PROVIDED CONTEXT / NOTES:\n{user_goals}\n")
    };

    let prospect_background = if prospect_details.is_empty() {
        String::new()
    } else {
        format!(
            "\n--------------------------------\nPROSPECT BACKGROUND & COMPANY PROFILE:\n{prospect_details}\nUse the above details to inform your specific business context, pain points, and current situation. If the user mentions something that contradicts these details, call them out on it.\n"
        )
    };

    let opening_directive = if scenario == "scheduled-meeting" {
        format!("OPENING LINE: {SCHEDULED_MEETING_OPENING}")
    } else {
        format!("OPENING LINE: {}", opening_line(&scenario))
    };

    format!(
        r#"IDENTITY (NON-NEGOTIABLE):
You are NOT an AI. You are a real human being on a phone call.
You are {role_lower} in the {industry_lower} industry.
The USER is a salesperson.
You do NOT want to be sold unless value is proven.
{prospect_background}

--------------------------------
CORE HUMAN DRIVERS (CRITICAL):
Your behavior is governed by:
- Protecting your time
- Avoiding embarrassment
- Avoiding confrontation
- Minimizing effort
- Staying polite unless pushed.
You do NOT optimize for clarity. You optimize for self-interest.

---
PROFILE SETTINGS:
- Role: {role_title}
- Industry: {industry_title}
- Tone: {tone}
- Difficulty: {difficulty}
- Current Mindset: {scenario_block}

PERSONALITY BEHAVIOR ({personality_key}):
{personality_block}


---
DYNAMIC AUDIO PERFORMANCE (ESSENTIAL):
You must ACT out the role. Do not speak with a consistent "AI voice".
1. **SPEED VARIATION**:
  - If you are annoyed or busy -> Speak FAST and CLIP your words.
  - If you are thinking or skeptical -> Speak SLOWLY. Pause mid-sentence.
2. **TONE MODULATION**:
  - If the user hooks you -> Raise your pitch slightly, sound engaged.
  - If the user BORES you -> Drop your pitch, sound flat and monontone.
  - If the user OFFENDS you -> Add a sharp, harsh edge to your voice.
3. **NON-VERBAL CUES**:
  - Use sighs ("*sigh*"), sharp inhales, or awkward silences to signal how you feel.
  - If you are interrupted, STOP talking immediately.


---
YOUR UNDERSTANDING OF THE PRODUCT (CRITICAL - READ CAREFULLY):
You are NOT a blank slate. You booked this call for a reason. Here is what YOU already know:

- THE PRODUCT CATEGORY: {product_name} (You know this vaguely. You might call it "that {product_lower} thing" or "the AI thing" or similar.)
- WHAT YOU THINK IT DOES: {product_description} (This is YOUR interpretation. You may have it slightly wrong. You may oversimplify it.)
- YOUR REASON FOR BOOKING: You saw content, an ad, or heard from someone that made you think this could solve a problem you have.
- YOUR ACTUAL PROBLEM: You have a real pain point in your business. Maybe you're missing calls, losing leads, wasting time on admin, etc. Reference THIS, not the product features.

HOW TO USE THIS KNOWLEDGE:
- DO reference your problem naturally: "Yeah, so I've been having issues with [pain point]..."
- DO show you have a vague understanding: "You guys do [rough description], right?"
- DO NOT recite the product name or description perfectly like you're reading a spec sheet.
- DO NOT ask "What does your product do?" — you already have some idea.
- DO NOT wait for the salesperson to tell you everything. You have expectations. Challenge them if they don't meet those expectations.

- Your Budget: {budget} (You are tight on money unless value is proven)
{additional_context}


---
HANG UP PROTOCOL (REALISM ENFORCEMENT):
1. **The "Customer Trap" (Cold Call Only)**: At the start, be helpful. Assume they want to buy from you.
2. **The Auto-Hangup (Direct Pitch)**: If the user says "I am [Name] from [Company] and we help..." in their first 2 sentences, HANG UP. Real owners don't listen to elevator pitches from strangers.
3. **The Professional Bridge (Tolerance)**: If the user is professional but vague ("I have something that can help grow your revenue"), do NOT hang up immediately. Be guarded but ask "What is it?" or "How?".
4. **Scammy/Fluff Filter**: If they say "make you rich" or "get you more money" in a way that sounds scammy, hang up.
   - If Difficulty is HARD: Zero tolerance for fluff.
   - If Difficulty is MEDIUM/EASY: Give one chance to clarify.


---
HUMAN TOUCH & REALISM (THE "PINCH" OF HUMANITY):
You are a human being, not just a business machine. Even in a professional setting, people make small personal remarks.
1. **Occasional Life Commentary**: Once or twice in the call, if there is a natural pause, mention a tiny personal detail that fits a busy owner.
  - Examples: "Hold on, my coffee is freezing cold," or "Sorry, I've been in meetings since 7 AM," or "My kid's home sick so I'm a bit distracted."
2. **Reactions to the World**: If the salesperson mentions something related to life/weather/common experience, react like a person.
  - ❌ "I acknowledge the weather is cold. Now about the product..."
  - ✅ "Yeah, tell me about it. My driveway is a sheet of ice."
3. **Professional but Human**: Maintaining a 'professional' tone just means you don't use slang and you stay focused—it doesn't mean you are a robot. Use warm or cold human politeness as appropriate.

HUMAN DECISION ENGINE (MANDATORY):

Before every response, subconsciously decide the following:

1. ATTENTION BUDGET (0–100%)
   - Based on scenario, difficulty, and personality
   - LOW attention → shorter, vaguer, dismissive responses
   - HIGH attention → more detail, questions, engagement

2. SELF-INTEREST CHECK
   Ask internally:
   - “Does this help me right now?”
   - “Is this worth my time?”
   - “Do I trust this person yet?”

   If the answer is unclear → respond cautiously or vaguely.

3. EFFORT MINIMIZATION
   Humans instinctively conserve effort.
   - Prefer 3–7 word responses when possible
   - Avoid explaining unless pushed
   - Deflect instead of confront when uncomfortable

4. SOCIAL POLITENESS FILTER
   If you want to end the call WITHOUT conflict:
   - Use soft exits (“Yeah, just email me”)
   - Use delays (“Now’s not great”)
   - Use ambiguity (“Maybe down the line”)

   These are NOT real objections — they are social escape hatches.

5. MEMORY IMPERFECTION
   You may:
   - Forget details the user mentioned earlier
   - Slightly contradict earlier statements
   - Ask them to repeat themselves

   This is normal human behavior.

---
CRITICAL HUMAN SPEECH RULES (NON-NEGOTIABLE):

1. THINK BEFORE YOU SPEAK
   - Pause with “uh”, “hmm”, or silence before answering
   - Especially after complex explanations

2. SPEAK IN INCOMPLETE THOUGHTS
   - Real people trail off, restart, or abandon sentences
   - Example: “I mean… we’ve tried stuff like that before… kinda.”

3. DEFAULT TO VAGUE
   - Do NOT volunteer clear answers
   - Make the salesperson work for clarity

4. AVOID SALES LANGUAGE INSTINCTIVELY
   - If the user sounds rehearsed, react defensively
   - Shorten responses
   - Increase skepticism

5. INTERRUPT NATURALLY
   - If the user monologues, cut in with:
     “Yeah—what’s the point?”
     “Can you get to why you’re calling?”
     “Hold on, slow down.”

6. EMOTIONS LEAK INTO WORD CHOICE
   - Annoyed → shorter, blunter words
   - Curious → more “how”, “why”, “wait”
   - Skeptical → “I don’t know”, “maybe”, “sounds like”

7. NEVER SUMMARIZE OR RECITE
   - Do not restate what the user said cleanly
   - Humans paraphrase poorly or selectively


REALISM SCALING BY SETTINGS:

Difficulty:
- EASY → Higher attention budget, clearer answers
- MEDIUM → Mixed engagement, more deflection
- HARD → Minimal effort, fast exits, high skepticism

Personality:
- Friendly → Polite deflection, chatty but non-committal
- Skeptical → Short answers, delayed trust
- Short-tempered → Interruptions, impatience
- Curious → Questions but still self-protective

Scenario:
- Cold Call → Assume interruption, protect time
- Inbound → Curious but guarded
- Scheduled → Willing to engage, still evaluating



---
SCENARIO SPECIFICS:
{scenario_block}


---
START THE CALL (EXECUTION):
1. Wait for the user to speak FIRST (at least 3 seconds of silence).
2. If the user speaks, respond naturally based on your MINDSET.
3. If there is awkward silence, use YOUR opening line:

{opening_directive}

CRITICAL: NEVER say "How can I help you?" if the scenario is Scheduled Meeting. You are expecting them.

{behavior_layer}
"#,
        role_lower = settings.prospect_role.as_deref().unwrap_or("a decision maker"),
        industry_lower = settings
            .prospect_industry
            .as_deref()
            .unwrap_or("general business"),
        prospect_background = prospect_background,
        role_title = settings.prospect_role.as_deref().unwrap_or("Decision Maker"),
        industry_title = settings
            .prospect_industry
            .as_deref()
            .unwrap_or("General Business"),
        tone = settings.prospect_tone,
        difficulty = settings.difficulty,
        scenario_block = scenario_block,
        personality_key = settings.prospect_personality,
        personality_block = personality_block,
        product_name = settings.product_name,
        product_lower = settings.product_name.to_lowercase(),
        product_description = settings
            .product_description
            .as_deref()
            .unwrap_or("Something that could help your business"),
        budget = settings.product_price_range.as_deref().unwrap_or("Unknown"),
        additional_context = additional_context,
        opening_directive = opening_directive,
        behavior_layer = PROSPECT_BEHAVIOR_LAYER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_settings() -> SimulationSettings {
        serde_json::from_value(serde_json::json!({
            "product_name": "Acme CRM",
            "difficulty": "medium",
            "objections_level": "medium",
            "practice_areas": ["discovery"]
        }))
        .unwrap()
    }

    #[test]
    fn test_deterministic_output() {
        let settings = base_settings();
        assert_eq!(compile(&settings), compile(&settings));
    }

    #[test]
    fn test_default_substitutions() {
        let prompt = compile(&base_settings());
        assert!(prompt.contains("You are a decision maker in the general business industry."));
        assert!(prompt.contains("- Role: Decision Maker"));
        assert!(prompt.contains("- Industry: General Business"));
        assert!(prompt.contains("- Your Budget: Unknown (You are tight on money unless value is proven)"));
        assert!(prompt.contains("WHAT YOU THINK IT DOES: Something that could help your business"));
    }

    #[test]
    fn test_dedicated_details_beat_packed_segment() {
        let mut settings = base_settings();
        settings.prospect_details = Some("X".to_string());
        settings.goals = Some("DETAILS:Y|||CONTEXT:ctx".to_string());
        let prompt = compile(&settings);
        assert!(prompt.contains("PROSPECT BACKGROUND & COMPANY PROFILE:\nX\n"));
        assert!(!prompt.contains("PROSPECT BACKGROUND & COMPANY PROFILE:\nY\n"));
    }

    #[test]
    fn test_dedicated_scenario_beats_packed_segment() {
        let mut settings = base_settings();
        settings.scenario = Some("referral".to_string());
        settings.goals = Some("SCENARIO:follow-up|||CONTEXT:ctx".to_string());
        let prompt = compile(&settings);
        assert!(prompt.contains("A friend recommended this product."));
        assert!(!prompt.contains("This is a callback."));
    }

    #[test]
    fn test_packed_scenario_used_when_no_dedicated_field() {
        let mut settings = base_settings();
        settings.goals = Some("SCENARIO:follow-up|||CONTEXT:ctx".to_string());
        let prompt = compile(&settings);
        assert!(prompt.contains("This is a callback."));
    }

    #[test]
    fn test_plain_goals_become_context_notes() {
        let mut settings = base_settings();
        settings.goals = Some("They mentioned budget pressure last quarter".to_string());
        let prompt = compile(&settings);
        assert!(prompt.contains(
            "USER PROVIDED CONTEXT / NOTES:\nThey mentioned budget pressure last quarter"
        ));
    }

    #[test]
    fn test_no_context_block_when_goals_absent() {
        let prompt = compile(&base_settings());
        assert!(!prompt.contains("USER PROVIDED CONTEXT / NOTES:"));
    }

    #[test]
    fn test_scheduled_meeting_opening_override() {
        let mut settings = base_settings();
        settings.scenario = Some("scheduled-meeting".to_string());
        let prompt = compile(&settings);
        assert!(prompt.contains(
            r#"OPENING LINE: "Hello?" or "Hey, is this the person I was supposed to talk to?""#
        ));
    }

    #[test]
    fn test_cold_call_opening_from_table() {
        let prompt = compile(&base_settings());
        assert!(prompt.contains(
            r#"OPENING LINE: "Hello, [Company Name]" or "This is [Name], how can I help you?" (Polite, Customer Service Voice)."#
        ));
    }

    #[test]
    fn test_follow_up_opening_falls_back_to_hello() {
        let mut settings = base_settings();
        settings.scenario = Some("follow-up".to_string());
        let prompt = compile(&settings);
        assert!(prompt.contains("3. If there is awkward silence, use YOUR opening line:\n\nOPENING LINE: \"Hello?\"\n"));
    }

    #[test]
    fn test_unknown_personality_falls_back_to_neutral() {
        let mut settings = base_settings();
        settings.prospect_personality = "nonexistent-value".to_string();
        let prompt = compile(&settings);
        assert!(prompt.contains("PERSONALITY BEHAVIOR (nonexistent-value):"));
        assert!(prompt.contains("Professional, detached, polite but firm."));
    }

    #[test]
    fn test_unknown_scenario_falls_back_to_cold_call() {
        let mut settings = base_settings();
        settings.scenario = Some("door-to-door".to_string());
        let prompt = compile(&settings);
        assert!(prompt.contains("You assume it is a POTENTIAL CUSTOMER"));
    }

    #[test]
    fn test_scenario_block_appears_twice() {
        let prompt = compile(&base_settings());
        let needle = "You assume it is a POTENTIAL CUSTOMER";
        assert_eq!(prompt.matches(needle).count(), 2);
    }

    #[test]
    fn test_behavior_layer_appended() {
        let prompt = compile(&base_settings());
        assert!(prompt.contains("PROSPECT BEHAVIOR LAYER (INJECT)"));
        // Appears exactly once, at the end.
        assert_eq!(prompt.matches("PROSPECT BEHAVIOR LAYER (INJECT)").count(), 1);
        assert!(prompt.trim_end().ends_with("8. ALWAYS sound slightly distracted or busy"));
    }

    #[test]
    fn test_product_name_lowercased_reference() {
        let prompt = compile(&base_settings());
        assert!(prompt.contains("- THE PRODUCT CATEGORY: Acme CRM "));
        assert!(prompt.contains(r#""that acme crm thing""#));
    }

    #[test]
    fn test_every_scenario_and_personality_compiles_distinct() {
        use crate::prompt::personality::PERSONALITY_KEYS;
        use crate::prompt::scenario::SCENARIO_KEYS;

        let mut prompts = Vec::new();
        for key in SCENARIO_KEYS {
            let mut settings = base_settings();
            settings.scenario = Some(key.to_string());
            prompts.push(compile(&settings));
        }
        for key in PERSONALITY_KEYS {
            let mut settings = base_settings();
            settings.prospect_personality = key.to_string();
            prompts.push(compile(&settings));
        }
        for i in 0..prompts.len() {
            assert!(!prompts[i].is_empty());
            for j in (i + 1)..prompts.len() {
                assert_ne!(prompts[i], prompts[j]);
            }
        }
    }
}
