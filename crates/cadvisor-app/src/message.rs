//! Message types for the application (TEA pattern)

use cadvisor_core::{AdvicePayload, Error, Profile};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (loading animation)
    Tick,

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Advice Submission Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Submit the profile form (validated in the handler)
    SubmitProfile,

    /// The advice request settled. Carries the epoch of the submission it
    /// answers; a stale epoch means the submission was abandoned and the
    /// result is dropped.
    AdviceArrived {
        epoch: u64,
        /// The submitted profile, echoed back to prime the chat session
        profile: Box<Profile>,
        result: Result<AdvicePayload, Error>,
    },

    // ─────────────────────────────────────────────────────────
    // Chat Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Send the current chat input as one turn
    SubmitChat,

    /// The chat request settled. `epoch` identifies the session the reply
    /// belongs to; a reply for a discarded session is dropped.
    ChatReplyArrived {
        epoch: u64,
        result: Result<Option<String>, Error>,
    },

    // ─────────────────────────────────────────────────────────
    // Service Health
    // ─────────────────────────────────────────────────────────
    /// Startup health probe settled
    HealthChecked { ok: bool, model: Option<String> },
}
