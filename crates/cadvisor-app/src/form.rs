//! Profile form state and data extraction

use cadvisor_core::{parse_csv, ExperienceLevel, Profile};

/// Prompt shown when submitting without an experience level.
pub const SELECT_LEVEL_PROMPT: &str = "Please select your experience level.";

/// One focusable field of the profile form, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Level,
    Hours,
    Background,
    Skills,
    Interests,
    Goals,
}

impl FormField {
    /// All fields in traversal order.
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Level,
        FormField::Hours,
        FormField::Background,
        FormField::Skills,
        FormField::Interests,
        FormField::Goals,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Level => "Experience level",
            FormField::Hours => "Hours per week",
            FormField::Background => "Background",
            FormField::Skills => "Current skills",
            FormField::Interests => "Interests",
            FormField::Goals => "Goals",
        }
    }

    /// Hint rendered inside an empty field.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Optional",
            FormField::Level => "Left/Right to choose (required)",
            FormField::Hours => "e.g. 10",
            FormField::Background => "A few sentences about your experience",
            FormField::Skills => "Comma-separated, e.g. Python, SQL",
            FormField::Interests => "Comma-separated",
            FormField::Goals => "Comma-separated",
        }
    }

    pub fn next(self) -> FormField {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> FormField {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Editable state of the profile form.
///
/// Buffers hold raw text; typing rules are enforced at insertion (the
/// hours field accepts digits only) and everything else is normalized by
/// [`FormState::extract`] at submission time. Field values survive leaving
/// and re-entering the form view; a fresh [`Profile`] is still constructed
/// on every submission.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub name: String,
    pub level: Option<ExperienceLevel>,
    pub hours: String,
    pub background: String,
    pub skills: String,
    pub interests: String,
    pub goals: String,

    pub focus: FormField,
    /// Blocking validation prompt or last submission failure, shown as the
    /// form banner until the next submission attempt.
    pub banner: Option<String>,
}

impl FormState {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Text buffer of the focused field; `None` for the level selector.
    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Level => None,
            FormField::Hours => Some(&mut self.hours),
            FormField::Background => Some(&mut self.background),
            FormField::Skills => Some(&mut self.skills),
            FormField::Interests => Some(&mut self.interests),
            FormField::Goals => Some(&mut self.goals),
        }
    }

    /// Read-only view of a field's buffer, for rendering.
    pub fn buffer(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Level => "",
            FormField::Hours => &self.hours,
            FormField::Background => &self.background,
            FormField::Skills => &self.skills,
            FormField::Interests => &self.interests,
            FormField::Goals => &self.goals,
        }
    }

    /// Insert a printable character into the focused field.
    ///
    /// The hours field accepts digits only; the level selector ignores
    /// text input (Space cycles it instead).
    pub fn insert_char(&mut self, c: char) {
        if self.focus == FormField::Level {
            if c == ' ' {
                self.cycle_level_forward();
            }
            return;
        }
        if self.focus == FormField::Hours && !c.is_ascii_digit() {
            return;
        }
        if c.is_control() {
            return;
        }
        if let Some(buffer) = self.focused_buffer() {
            buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.pop();
        }
    }

    /// Cycle the level selector forward (wraps from unset through all
    /// levels and back to unset only via explicit clear, not the cycle).
    pub fn cycle_level_forward(&mut self) {
        self.level = Some(match self.level {
            None => ExperienceLevel::ALL[0],
            Some(current) => {
                let idx = ExperienceLevel::ALL
                    .iter()
                    .position(|l| *l == current)
                    .unwrap_or(0);
                ExperienceLevel::ALL[(idx + 1) % ExperienceLevel::ALL.len()]
            }
        });
    }

    pub fn cycle_level_back(&mut self) {
        self.level = Some(match self.level {
            None => ExperienceLevel::ALL[ExperienceLevel::ALL.len() - 1],
            Some(current) => {
                let idx = ExperienceLevel::ALL
                    .iter()
                    .position(|l| *l == current)
                    .unwrap_or(0);
                ExperienceLevel::ALL[(idx + ExperienceLevel::ALL.len() - 1) % ExperienceLevel::ALL.len()]
            }
        });
    }

    /// Reset every field and the banner.
    pub fn clear(&mut self) {
        *self = FormState::default();
    }

    /// Fill the form with the sample profile.
    pub fn fill_sample(&mut self) {
        self.name = "Alex Chen".to_string();
        self.level = Some(ExperienceLevel::Intermediate);
        self.hours = "10".to_string();
        self.background = "Software developer with 3 years of experience in JavaScript and \
             Python. Worked on both frontend (React) and backend (Django) projects."
            .to_string();
        self.skills = "JavaScript, React, Python, Django, SQL, Docker".to_string();
        self.interests = "Machine Learning, System Design, Cloud Infrastructure".to_string();
        self.goals = "Transition to a DevOps or Machine Learning Engineer role, improve system \
             architecture skills"
            .to_string();
        self.banner = None;
    }

    /// Normalize the current field values into a fresh [`Profile`].
    ///
    /// Returns `None` when no experience level is selected; the submit
    /// handler rejects that case with a blocking prompt before any network
    /// activity. Empty text fields become `None` (never `Some("")`), an
    /// empty hours field becomes `None` (never zero), and the list fields
    /// go through [`parse_csv`].
    pub fn extract(&self) -> Option<Profile> {
        let experience_level = self.level?;

        let trimmed_or_none = |s: &str| {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        };

        Some(Profile {
            name: trimmed_or_none(&self.name),
            experience_level,
            time_per_week_hours: self.hours.trim().parse().ok(),
            background: trimmed_or_none(&self.background),
            skills: parse_csv(&self.skills),
            interests: parse_csv(&self.interests),
            goals: parse_csv(&self.goals),
        })
    }
}
