//! Conversational context types shared with the chat endpoint

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Speaker role of one conversational turn, in the wire vocabulary the
/// advisory service forwards to its model (`user` / `model`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message exchanged in the conversational context.
///
/// `parts` is an ordered sequence for wire compatibility; in practice every
/// turn this client produces holds exactly one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub parts: Vec<String>,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![text.into()],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![text.into()],
        }
    }

    /// The turn's text, joining parts in order for the multi-part case.
    pub fn text(&self) -> String {
        self.parts.join("")
    }
}

/// Fixed acknowledgment the priming pair attributes to the model.
pub const PRIMING_ACK: &str = "Got it. I have your profile details. I'm ready to answer your \
     questions about the plan based on your profile.";

/// Build the synthetic turn pair that seeds the assistant's context with
/// the user's profile. Sent with every chat request, never shown as
/// transcript bubbles.
pub fn priming_turns(profile: &Profile) -> [ConversationTurn; 2] {
    let profile_json =
        serde_json::to_string_pretty(profile).unwrap_or_else(|_| "{}".to_string());
    let prompt = format!(
        "My profile is as follows. Keep this context for all future questions: {profile_json}"
    );
    [
        ConversationTurn::user(prompt),
        ConversationTurn::model(PRIMING_ACK),
    ]
}
