//! Advice payload returned by the advisory service
//!
//! The payload is untrusted external data: the service proxies a language
//! model and may omit, empty out, or mangle any section. Every field is
//! `#[serde(default)]` so a missing or `null` section decodes to an empty
//! one and renders as an empty UI section rather than failing the whole
//! response. Unknown fields (including plan keys outside the fixed three)
//! are discarded at this decode boundary.

use serde::{Deserialize, Serialize};

/// Structured recommendation result for one profile submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvicePayload {
    #[serde(default)]
    pub career_paths: Vec<CareerPath>,
    #[serde(default)]
    pub next_skills: Vec<SkillItem>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub plan_30_60_90: Plan,

    /// Domain-level failure reported through a transport-level success.
    ///
    /// The service answers 200 with `{"error": ..., "raw": ...}` when the
    /// model output could not be turned into advice; a present `error`
    /// means the whole payload must be treated as a failed request.
    #[serde(default)]
    pub error: Option<String>,
    /// Raw model output attached to a domain-level failure.
    #[serde(default)]
    pub raw: Option<String>,
}

/// One suggested career direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    #[serde(default)]
    pub title: String,
    /// Fit score, nominally 0-100. Clamped at the rendering boundary.
    #[serde(default, rename = "match")]
    pub match_score: f64,
    #[serde(default)]
    pub why_fit: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub growth: String,
}

impl CareerPath {
    /// Fit score clamped to 0-100 for progress-bar rendering.
    pub fn match_percent(&self) -> u8 {
        self.match_score.clamp(0.0, 100.0).round() as u8
    }
}

/// One recommended next skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    #[serde(default)]
    pub skill: String,
    /// Short rationale. The service includes it; shown as secondary text.
    #[serde(default)]
    pub why: Option<String>,
}

/// One learning resource with an outbound link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub why: String,
    /// Untrusted destination. Rendered as text and emitted as a terminal
    /// hyperlink; never interpreted.
    #[serde(default)]
    pub url: String,
}

/// The 30/60/90-day plan, keyed by a fixed three-phase set.
///
/// Decoding into named optional fields (instead of a free-form map) is what
/// closes the key set: a key outside `days_0_30`/`days_31_60`/`days_61_90`
/// is dropped by serde and the renderer can never see it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub days_0_30: Option<PlanPhase>,
    #[serde(default)]
    pub days_31_60: Option<PlanPhase>,
    #[serde(default)]
    pub days_61_90: Option<PlanPhase>,
}

impl Plan {
    /// The phase for a given day range, if the service supplied one.
    pub fn phase(&self, day: PlanDay) -> Option<&PlanPhase> {
        match day {
            PlanDay::Days0To30 => self.days_0_30.as_ref(),
            PlanDay::Days31To60 => self.days_31_60.as_ref(),
            PlanDay::Days61To90 => self.days_61_90.as_ref(),
        }
    }

    /// Present phases in natural day order.
    pub fn present(&self) -> impl Iterator<Item = (PlanDay, &PlanPhase)> {
        PlanDay::ALL
            .into_iter()
            .filter_map(|day| self.phase(day).map(|phase| (day, phase)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// Identity of one plan phase. Closed set; see [`Plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanDay {
    Days0To30,
    Days31To60,
    Days61To90,
}

impl PlanDay {
    /// All phases in natural order.
    pub const ALL: [PlanDay; 3] = [PlanDay::Days0To30, PlanDay::Days31To60, PlanDay::Days61To90];

    /// Fixed display label for the phase card header.
    pub fn label(self) -> &'static str {
        match self {
            PlanDay::Days0To30 => "Days 0\u{2013}30",
            PlanDay::Days31To60 => "Days 31\u{2013}60",
            PlanDay::Days61To90 => "Days 61\u{2013}90",
        }
    }
}

/// Title and ordered task list for one plan phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanPhase {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_decode_to_empty() {
        let payload: AdvicePayload = serde_json::from_str("{}").unwrap();
        assert!(payload.career_paths.is_empty());
        assert!(payload.next_skills.is_empty());
        assert!(payload.resources.is_empty());
        assert!(payload.plan_30_60_90.is_empty());
        assert!(payload.error.is_none());
    }

    #[test]
    fn test_null_section_decodes_to_empty() {
        let payload: AdvicePayload =
            serde_json::from_str(r#"{"resources": null, "career_paths": null}"#).unwrap();
        assert!(payload.resources.is_empty());
        assert!(payload.career_paths.is_empty());
    }

    #[test]
    fn test_career_path_decoding() {
        let json = r#"{
            "career_paths": [{
                "title": "Software Engineer",
                "match": 90,
                "why_fit": "Your programming skills align well with this role.",
                "salary": "95,000 - 150,000 USD",
                "growth": "High - 21% expected growth"
            }]
        }"#;
        let payload: AdvicePayload = serde_json::from_str(json).unwrap();
        let path = &payload.career_paths[0];
        assert_eq!(path.title, "Software Engineer");
        assert_eq!(path.match_percent(), 90);
        assert_eq!(path.salary, "95,000 - 150,000 USD");
    }

    #[test]
    fn test_match_percent_clamps_out_of_range() {
        let path = CareerPath {
            match_score: 180.0,
            ..CareerPath::default()
        };
        assert_eq!(path.match_percent(), 100);

        let path = CareerPath {
            match_score: -5.0,
            ..CareerPath::default()
        };
        assert_eq!(path.match_percent(), 0);
    }

    #[test]
    fn test_plan_partial_keys() {
        let json = r#"{
            "plan_30_60_90": {
                "days_31_60": {"title": "T", "tasks": ["a", "b"]}
            }
        }"#;
        let payload: AdvicePayload = serde_json::from_str(json).unwrap();
        let plan = &payload.plan_30_60_90;

        let present: Vec<_> = plan.present().collect();
        assert_eq!(present.len(), 1);
        let (day, phase) = present[0];
        assert_eq!(day, PlanDay::Days31To60);
        assert_eq!(day.label(), "Days 31\u{2013}60");
        assert_eq!(phase.title, "T");
        assert_eq!(phase.tasks, vec!["a", "b"]);
    }

    #[test]
    fn test_plan_unknown_keys_dropped() {
        let json = r#"{
            "plan_30_60_90": {
                "days_91_120": {"title": "beyond", "tasks": []},
                "days_0_30": {"title": "start", "tasks": ["x"]}
            }
        }"#;
        let payload: AdvicePayload = serde_json::from_str(json).unwrap();
        let present: Vec<_> = payload.plan_30_60_90.present().collect();
        assert_eq!(present.len(), 1);
        assert_eq!(present[0].0, PlanDay::Days0To30);
    }

    #[test]
    fn test_plan_phases_in_natural_order() {
        let json = r#"{
            "days_61_90": {"title": "late", "tasks": []},
            "days_0_30": {"title": "early", "tasks": []}
        }"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        let days: Vec<_> = plan.present().map(|(day, _)| day).collect();
        assert_eq!(days, vec![PlanDay::Days0To30, PlanDay::Days61To90]);
    }

    #[test]
    fn test_embedded_error_fields() {
        let json = r#"{"error": "Model returned invalid JSON", "raw": "```not json```"}"#;
        let payload: AdvicePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.error.as_deref(), Some("Model returned invalid JSON"));
        assert_eq!(payload.raw.as_deref(), Some("```not json```"));
    }

    #[test]
    fn test_skill_item_optional_why() {
        let json = r#"{"next_skills": [{"skill": "React"}, {"skill": "SQL", "why": "ubiquitous"}]}"#;
        let payload: AdvicePayload = serde_json::from_str(json).unwrap();
        assert!(payload.next_skills[0].why.is_none());
        assert_eq!(payload.next_skills[1].why.as_deref(), Some("ubiquitous"));
    }
}
