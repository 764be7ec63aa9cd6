//! Settings types

use serde::{Deserialize, Serialize};

/// Default endpoint of a locally run advisory service, so the TUI works
/// with zero config during development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// All application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub chat: ChatSettings,
}

/// Advisory service endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the advisory service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Cosmetic UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Use unicode icons in headers and section titles
    #[serde(default = "default_true")]
    pub icons: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { icons: true }
    }
}

fn default_true() -> bool {
    true
}

/// Chat panel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Maximum visible transcript bubbles kept per session (0 = unlimited).
    /// Purely cosmetic; the conversational context is never truncated.
    #[serde(default = "default_transcript_limit")]
    pub transcript_limit: usize,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            transcript_limit: default_transcript_limit(),
        }
    }
}

fn default_transcript_limit() -> usize {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert!(settings.ui.icons);
        assert_eq!(settings.chat.transcript_limit, 500);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_round_trip() {
        let mut settings = Settings::default();
        settings.api.base_url = "http://example.test".to_string();
        settings.ui.icons = false;

        let text = toml::to_string(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }
}
