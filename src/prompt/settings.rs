//! Simulation settings record.
//!
//! This is the persisted configuration shape handed to the prompt compiler at
//! session start. All lookup-keyed fields (personality, scenario, tone,
//! difficulty) are kept as plain strings: historical rows may carry values
//! outside the current tables and the compiler resolves them with documented
//! fallbacks instead of failing deserialization.

use serde::{Deserialize, Serialize};

fn default_personality() -> String {
    "neutral".to_string()
}

fn default_tone() -> String {
    "professional".to_string()
}

/// Settings for one practice call, read-only for the duration of prompt
/// compilation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Product the salesperson is practicing to sell. Required.
    pub product_name: String,

    #[serde(default)]
    pub product_description: Option<String>,

    #[serde(default)]
    pub product_price_range: Option<String>,

    #[serde(default)]
    pub prospect_role: Option<String>,

    #[serde(default)]
    pub prospect_industry: Option<String>,

    /// One of the personality table keys; unknown values fall back to neutral.
    #[serde(default = "default_personality")]
    pub prospect_personality: String,

    #[serde(default = "default_tone")]
    pub prospect_tone: String,

    /// Free-text prospect background. When present it wins over any
    /// `DETAILS:` segment packed into `goals`.
    #[serde(default)]
    pub prospect_details: Option<String>,

    pub difficulty: String,

    pub objections_level: String,

    #[serde(default)]
    pub objections_list: Vec<String>,

    /// Either free-text additional context, or the legacy packed format
    /// (`|||`-separated, tag-prefixed segments). See [`PackedGoals`].
    #[serde(default)]
    pub goals: Option<String>,

    /// Call-origin scenario; wins over any `SCENARIO:` packed segment.
    #[serde(default)]
    pub scenario: Option<String>,

    #[serde(default)]
    pub call_objectives: Vec<String>,

    pub practice_areas: Vec<String>,
}

impl SimulationSettings {
    /// Human-readable summary of the configured objection categories.
    ///
    /// Collapses to a generic price/value phrase when no categories were
    /// picked. Kept as a public helper for grading/reporting surfaces; the
    /// compiled prompt does not embed it.
    pub fn objection_summary(&self) -> String {
        if self.objections_list.is_empty() {
            "General price/value concerns".to_string()
        } else {
            self.objections_list.join(", ")
        }
    }
}

/// Separator of the legacy packed `goals` wire format.
const PACKED_SEPARATOR: &str = "|||";

/// Fields recovered from a legacy packed `goals` string.
///
/// Old clients stored several logical fields in a single column, joined by
/// `|||` with each segment prefixed by a tag token. Newer rows use dedicated
/// columns, which always take precedence; this struct only reports what the
/// packed string itself carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedGoals {
    pub scenario: Option<String>,
    /// Preferred context tag; `GOALS:` is the pre-rename spelling.
    pub context: Option<String>,
    pub details: Option<String>,
    pub objectives: Option<String>,
    /// Set when the input had no separator at all: the whole string is
    /// free-text context.
    pub plain_context: Option<String>,
}

impl PackedGoals {
    /// Parse a `goals` column value.
    ///
    /// A string without the `|||` separator is treated entirely as free-text
    /// context. Segments with unknown prefixes are ignored. A repeated tag is
    /// last-write-wins, except that `CONTEXT:` always beats the legacy
    /// `GOALS:` spelling.
    pub fn parse(goals: &str) -> Self {
        let mut packed = PackedGoals::default();

        if !goals.contains(PACKED_SEPARATOR) {
            if !goals.is_empty() {
                packed.plain_context = Some(goals.to_string());
            }
            return packed;
        }

        for part in goals.split(PACKED_SEPARATOR) {
            if let Some(rest) = part.strip_prefix("SCENARIO:") {
                packed.scenario = Some(rest.trim().to_string());
            } else if let Some(rest) = part.strip_prefix("CONTEXT:") {
                packed.context = Some(rest.trim().to_string());
            } else if let Some(rest) = part.strip_prefix("DETAILS:") {
                packed.details = Some(rest.trim().to_string());
            } else if let Some(rest) = part.strip_prefix("OBJECTIVES:") {
                packed.objectives = Some(rest.trim().to_string());
            } else if let Some(rest) = part.strip_prefix("GOALS:") {
                // Legacy spelling of the context tag.
                if packed.context.is_none() {
                    packed.context = Some(rest.trim().to_string());
                }
            }
        }

        packed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_settings() -> SimulationSettings {
        serde_json::from_value(serde_json::json!({
            "product_name": "Acme CRM",
            "difficulty": "medium",
            "objections_level": "medium",
            "practice_areas": ["discovery"]
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_applied_on_deserialize() {
        let settings = minimal_settings();
        assert_eq!(settings.prospect_personality, "neutral");
        assert_eq!(settings.prospect_tone, "professional");
        assert!(settings.scenario.is_none());
        assert!(settings.objections_list.is_empty());
        assert!(settings.call_objectives.is_empty());
    }

    #[test]
    fn test_objection_summary_fallback() {
        let settings = minimal_settings();
        assert_eq!(settings.objection_summary(), "General price/value concerns");
    }

    #[test]
    fn test_objection_summary_joined_in_order() {
        let mut settings = minimal_settings();
        settings.objections_list = vec!["price".into(), "timing".into(), "trust".into()];
        assert_eq!(settings.objection_summary(), "price, timing, trust");
    }

    #[test]
    fn test_packed_parse_all_tags() {
        let packed = PackedGoals::parse(
            "SCENARIO:follow-up|||CONTEXT:second call this week|||DETAILS:Runs a gym|||OBJECTIVES:book demo",
        );
        assert_eq!(packed.scenario.as_deref(), Some("follow-up"));
        assert_eq!(packed.context.as_deref(), Some("second call this week"));
        assert_eq!(packed.details.as_deref(), Some("Runs a gym"));
        assert_eq!(packed.objectives.as_deref(), Some("book demo"));
        assert!(packed.plain_context.is_none());
    }

    #[test]
    fn test_packed_parse_legacy_goals_tag() {
        let packed = PackedGoals::parse("GOALS:close the deal|||SCENARIO:referral");
        assert_eq!(packed.context.as_deref(), Some("close the deal"));
        assert_eq!(packed.scenario.as_deref(), Some("referral"));
    }

    #[test]
    fn test_packed_parse_context_preferred_over_goals() {
        let packed = PackedGoals::parse("GOALS:old|||CONTEXT:new");
        assert_eq!(packed.context.as_deref(), Some("new"));
    }

    #[test]
    fn test_packed_parse_plain_string_is_context() {
        let packed = PackedGoals::parse("just be friendly and ask about budget");
        assert_eq!(
            packed.plain_context.as_deref(),
            Some("just be friendly and ask about budget")
        );
        assert!(packed.scenario.is_none());
    }

    #[test]
    fn test_packed_parse_ignores_unknown_segments() {
        let packed = PackedGoals::parse("WHATEVER:x|||SCENARIO:inbound-lead");
        assert_eq!(packed.scenario.as_deref(), Some("inbound-lead"));
        assert!(packed.context.is_none());
    }

    #[test]
    fn test_packed_parse_trims_segment_values() {
        let packed = PackedGoals::parse("SCENARIO:  cold-call  |||DETAILS:  hi ");
        assert_eq!(packed.scenario.as_deref(), Some("cold-call"));
        assert_eq!(packed.details.as_deref(), Some("hi"));
    }
}
