//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, ServiceHealth, View};

use super::{advice, chat, keys, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.view == View::Loading {
                if let Some(loading) = state.loading.as_mut() {
                    loading.tick();
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Advice Submission Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::SubmitProfile => advice::handle_submit(state),

        Message::AdviceArrived {
            epoch,
            profile,
            result,
        } => advice::handle_advice_arrived(state, epoch, &profile, result),

        // ─────────────────────────────────────────────────────────
        // Chat Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::SubmitChat => chat::handle_submit(state),

        Message::ChatReplyArrived { epoch, result } => {
            chat::handle_reply_arrived(state, epoch, result)
        }

        Message::HealthChecked { ok, model } => {
            state.health = Some(ServiceHealth { ok, model });
            UpdateResult::none()
        }
    }
}
