//! Color palette for the terminal theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text/placeholders

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Online/success
pub const STATUS_RED: Color = Color::Red; // Error/offline
pub const STATUS_YELLOW: Color = Color::Yellow; // Warning/in-flight

// --- Section accents ---
pub const MATCH_BAR: Color = Color::Green; // Career path match gauge
pub const MATCH_BAR_BG: Color = Color::DarkGray; // Gauge track
pub const RESOURCE_TAG: Color = Color::Magenta; // Resource type tag
pub const LINK: Color = Color::Blue; // Outbound URLs (inert text)

// --- Chat ---
pub const BUBBLE_USER: Color = Color::Cyan;
pub const BUBBLE_BOT: Color = Color::White;
pub const BUBBLE_META: Color = Color::DarkGray; // Timestamps/sender tags
