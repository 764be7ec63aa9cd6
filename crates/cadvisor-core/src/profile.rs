//! User career profile collected by the form view

use serde::{Deserialize, Serialize};

/// Self-reported experience level.
///
/// The advisory service documents `beginner`, `intermediate` and `advanced`
/// as its accepted values; modeling them as a closed enum makes an
/// out-of-set level unrepresentable in a constructed [`Profile`]. The
/// "not yet selected" state exists only in the form model
/// (`Option<ExperienceLevel>`), never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// All levels, in selector display order.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    /// Display label for the form selector.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

/// Structured career background submitted to the advisory service.
///
/// Constructed fresh from the current form fields on every submission and
/// never persisted. Optional fields serialize as JSON `null` so that
/// "absent" is unambiguous to the service (`None`, never `Some("")` and
/// never zero hours).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub experience_level: ExperienceLevel,
    pub time_per_week_hours: Option<u32>,
    pub background: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub goals: Vec<String>,
}

impl Profile {
    /// Name to greet the user with, falling back to a generic term.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("you")
    }
}

/// Split a comma-separated field into trimmed, non-empty entries.
///
/// Order is preserved and duplicates are permitted; entries that are empty
/// after trimming are dropped. An empty or whitespace-only input yields an
/// empty list.
pub fn parse_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
